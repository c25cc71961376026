use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use mmsearch_core::config::{expand_path, Config};
use mmsearch_core::loader::load_documents;
use mmsearch_core::types::ImageInput;
use mmsearch_embed::get_default_embedder;
use mmsearch_engine::engine::DEFAULT_LIMIT;
use mmsearch_engine::MultimodalSearch;

const DEFAULT_CORPUS: &str = "data/documents.json";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    match args[1].as_str() {
        "image-search" => image_search(&args),
        "verify-embedding" => verify_embedding(&args[2]),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("Usage:");
    eprintln!("  {} image-search <image> [--limit N] [corpus.json]", prog);
    eprintln!("  {} verify-embedding <image>", prog);
    eprintln!("Example: {} image-search data/paddington.jpeg --limit 5", prog);
}

fn image_search(args: &[String]) -> Result<()> {
    let config = Config::load()?;
    let image_path = expand_path(&args[2]);
    let mut limit = config.get_or::<usize>("search.limit", DEFAULT_LIMIT);
    let mut corpus_path = expand_path(
        config.get_or::<String>("corpus.path", DEFAULT_CORPUS.to_string()),
    );

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--limit" => {
                let value = args.get(i + 1).context("--limit requires a number")?;
                limit = value.parse::<usize>().context("--limit requires a number")?;
                i += 1;
            }
            _ if !args[i].starts_with('-') => {
                corpus_path = expand_path(&args[i]);
            }
            _ => {}
        }
        i += 1;
    }

    let image = read_image(&image_path)?;
    let documents = load_documents(&corpus_path)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("spinner template")?,
    );
    spinner.set_message(format!("Embedding {} documents...", documents.len()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let embedder = get_default_embedder()?;
    let mut searcher = MultimodalSearch::new(embedder);
    searcher.load_corpus(documents)?;
    spinner.finish_and_clear();

    let results = searcher.search_with_image(&image, limit)?;

    println!("Image search results for: {}", image_path.display());
    println!("{}", "=".repeat(60));
    for (i, result) in results.iter().enumerate() {
        println!("{}. {} (similarity: {:.3})", i + 1, result.title, result.score);
        println!("   {}...", result.snippet);
        println!();
    }
    Ok(())
}

fn verify_embedding(image_arg: &str) -> Result<()> {
    let image_path = expand_path(image_arg);
    let image = read_image(&image_path)?;

    let embedder = get_default_embedder()?;
    let searcher = MultimodalSearch::new(embedder);
    let dim = searcher.embedding_dim(&image)?;
    println!("Embedding shape: {} dimensions", dim);
    Ok(())
}

fn read_image(path: &Path) -> Result<ImageInput> {
    if !path.exists() {
        bail!("Image file not found: {}", path.display());
    }
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(ImageInput::new(bytes, guess_mime(path)))
}

fn guess_mime(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}
