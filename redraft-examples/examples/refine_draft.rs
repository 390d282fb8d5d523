//! Refinement loop example: score and rewrite a draft until it is good enough.
//!
//! Run: `cargo run -p redraft-examples --example refine_draft -- "Learning AI. Any tips?"`
//! Set `RUST_LOG=redraft=debug` to watch the per-node logs.

use std::env;

use redraft::{DraftState, RefineRunner};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let draft = env::args()
        .nth(1)
        .unwrap_or_else(|| "Learning AI. Any tips?".to_string());
    let max_iterations: u32 = env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);

    let state = match DraftState::new(draft, max_iterations) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match RefineRunner::new().invoke(state).await {
        Ok(done) => {
            println!("final draft: {}", done.draft);
            println!(
                "score {} after {} improvement(s), stopped: {}",
                done.quality_score.unwrap_or(0),
                done.iteration,
                done.stop_reason.map(|r| r.as_str()).unwrap_or("unset"),
            );
            for (i, old) in done.history.iter().enumerate() {
                println!("  revision {i}: {old}");
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
