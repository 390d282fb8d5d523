//! Manual driver example: step the loop the way an external runner would.
//!
//! Calls evaluate, the branching predicate, and improve in the prescribed
//! order instead of using `RefineRunner`, printing the routing key after each
//! evaluate. Run: `cargo run -p redraft-examples --example manual_drive -- "Short note"`

use std::env;

use redraft::{
    refine_condition, should_continue, Decision, DraftState, EvaluateNode, ImproveNode, Node,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let draft = env::args()
        .nth(1)
        .unwrap_or_else(|| "Trying to grow as a writer.".to_string());

    let evaluate = EvaluateNode::new();
    let improve = ImproveNode::new();

    let mut state = match DraftState::new(draft, 3) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    loop {
        state = match evaluate.run(state).await {
            Ok((s, _)) => s,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        };
        println!(
            "iteration {}: score {}, route -> {}",
            state.iteration,
            state.quality_score.unwrap_or(0),
            refine_condition(&state)
        );

        match should_continue(&state) {
            Decision::Stop(reason) => {
                state.finish(reason);
                break;
            }
            Decision::Continue => {
                state = match improve.run(state).await {
                    Ok((s, _)) => s,
                    Err(e) => {
                        eprintln!("error: {e}");
                        std::process::exit(1);
                    }
                };
            }
        }
    }

    println!("final draft: {}", state.draft);
    println!(
        "stopped: {}",
        state.stop_reason.map(|r| r.as_str()).unwrap_or("unset")
    );
}
