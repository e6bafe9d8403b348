//! Scoresheet Example
//!
//! Reads scoresheet commands from stdin and prints the referee's replies.
//!
//! ```text
//! $ RUST_LOG=crew_referee=debug cargo run --example scoresheet
//! !battle "Team A" "Team B" 2
//! !add "Team A" Mango
//! !add "Team B" Armada
//! !end 3 1 Falco Peach
//! !status
//! ```

use anyhow::Result;
use async_trait::async_trait;
use crew_referee::{Battle, Handler, RefereeConfig, Reply};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const BATTLE_ID: &str = "stdin";

struct Announcer;

#[async_trait]
impl Handler for Announcer {
    async fn on_battle_finished(&mut self, _battle_id: &str, battle: &Battle) {
        println!("=== Final ===\n{}", battle.summary());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (handle, task) = crew_referee::spawn(RefereeConfig::default(), Announcer);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match handle.submit_line(BATTLE_ID, &line).await {
            Ok(Reply::Ignored) => {}
            Ok(reply) => println!("{}", reply),
            Err(e) => println!("error: {}", e),
        }
    }

    drop(handle);
    task.await?;
    Ok(())
}
