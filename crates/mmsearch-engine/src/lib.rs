#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod corpus;
pub mod engine;
pub mod rank;
pub mod similarity;

pub use corpus::{build_corpus, Corpus};
pub use engine::MultimodalSearch;
pub use rank::rank;
pub use similarity::cosine_similarity;
