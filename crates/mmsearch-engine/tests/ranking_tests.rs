use mmsearch_core::error::Error;
use mmsearch_core::types::Embedding;
use mmsearch_engine::{cosine_similarity, rank};

#[test]
fn similarity_of_vector_with_itself_is_one() {
    let a = vec![0.3, -1.2, 4.0, 0.5];
    let sim = cosine_similarity(&a, &a).expect("similarity");
    assert!((sim - 1.0).abs() < 1e-6);
}

#[test]
fn similarity_is_symmetric() {
    let a = vec![1.0, 2.0, 3.0];
    let b = vec![-2.0, 0.5, 1.5];
    let ab = cosine_similarity(&a, &b).expect("similarity");
    let ba = cosine_similarity(&b, &a).expect("similarity");
    assert!((ab - ba).abs() < 1e-6);
}

#[test]
fn similarity_with_zero_vector_is_exactly_zero() {
    let a = vec![1.0, 2.0, 3.0];
    let zero = vec![0.0, 0.0, 0.0];
    assert_eq!(cosine_similarity(&a, &zero).expect("similarity"), 0.0);
    assert_eq!(cosine_similarity(&zero, &a).expect("similarity"), 0.0);
    assert_eq!(cosine_similarity(&zero, &zero).expect("similarity"), 0.0);
}

#[test]
fn similarity_of_opposite_vectors_is_minus_one() {
    let a = vec![1.0, 0.0];
    let b = vec![-1.0, 0.0];
    let sim = cosine_similarity(&a, &b).expect("similarity");
    assert!((sim + 1.0).abs() < 1e-6);
}

#[test]
fn similarity_rejects_mismatched_lengths() {
    let a = vec![1.0, 0.0, 0.0];
    let b = vec![1.0, 0.0];
    match cosine_similarity(&a, &b) {
        Err(Error::DimensionMismatch { expected: 3, actual: 2 }) => {}
        other => panic!("expected DimensionMismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn rank_sorts_descending_by_score() {
    let query = vec![1.0, 0.0, 0.0];
    let candidates: Vec<Embedding> = vec![
        vec![0.0, 1.0, 0.0],
        vec![1.0, 0.0, 0.0],
        vec![0.7, 0.7, 0.0],
        vec![-1.0, 0.0, 0.0],
    ];
    let ranked = rank(&query, &candidates, 4).expect("rank");
    assert_eq!(ranked.len(), 4);
    for pair in ranked.windows(2) {
        assert!(pair[0].1 >= pair[1].1, "scores must be non-increasing");
    }
    assert_eq!(ranked[0].0, 1, "exact match ranks first");
}

#[test]
fn rank_breaks_ties_by_original_index() {
    // Candidates at indices 2 and 5 are identical; 2 must come first.
    let query = vec![1.0, 0.0];
    let tied = vec![0.5, 0.5];
    let candidates: Vec<Embedding> = vec![
        vec![0.0, 1.0],
        vec![-1.0, 0.0],
        tied.clone(),
        vec![0.0, -1.0],
        vec![-0.5, -0.5],
        tied.clone(),
    ];
    let ranked = rank(&query, &candidates, 6).expect("rank");
    let pos2 = ranked.iter().position(|r| r.0 == 2).expect("index 2 present");
    let pos5 = ranked.iter().position(|r| r.0 == 5).expect("index 5 present");
    assert!(pos2 < pos5, "equal scores keep candidate order");
    assert_eq!(ranked[pos2].1, ranked[pos5].1);
}

#[test]
fn rank_of_empty_candidates_is_empty() {
    let query = vec![1.0, 0.0];
    let ranked = rank(&query, &[], 5).expect("rank");
    assert!(ranked.is_empty());
}

#[test]
fn rank_rejects_zero_limit() {
    let query = vec![1.0, 0.0];
    let candidates: Vec<Embedding> = vec![vec![1.0, 0.0]];
    match rank(&query, &candidates, 0) {
        Err(Error::InvalidLimit) => {}
        other => panic!("expected InvalidLimit, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn rank_returns_at_most_candidate_count() {
    let query = vec![1.0, 0.0];
    let candidates: Vec<Embedding> = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let ranked = rank(&query, &candidates, 10).expect("rank");
    assert_eq!(ranked.len(), 2);
}

#[test]
fn rank_propagates_dimension_mismatch() {
    let query = vec![1.0, 0.0, 0.0];
    let candidates: Vec<Embedding> = vec![vec![1.0, 0.0]];
    assert!(matches!(
        rank(&query, &candidates, 1),
        Err(Error::DimensionMismatch { .. })
    ));
}
