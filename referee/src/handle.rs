use anyhow::{Result, anyhow, bail};
use crew_protocol::{Command, parse_command, parse_command_frame};
use tokio::sync::{mpsc, oneshot};

use crate::error::from_parse_failure;
use crate::receiver::Request;
use crate::referee::Reply;

/// Cloneable handle for submitting commands to a referee task.
///
/// Rejected commands come back as a [`RefereeError`](crate::RefereeError)
/// inside the `anyhow::Error`.
#[derive(Clone)]
pub struct RefereeHandle {
    tx: mpsc::Sender<Request>,
}

impl RefereeHandle {
    pub(crate) fn new(tx: mpsc::Sender<Request>) -> Self {
        Self { tx }
    }

    /// Apply a command to a battle and wait for the reply
    pub async fn submit(&self, battle_id: &str, command: Command) -> Result<Reply> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Request {
                battle_id: battle_id.to_string(),
                command,
                reply,
            })
            .await
            .map_err(|_| anyhow!("Referee stopped"))?;

        let result = rx.await.map_err(|_| anyhow!("Referee stopped"))?;
        Ok(result?)
    }

    /// Parse a command line and submit it
    pub async fn submit_line(&self, battle_id: &str, line: &str) -> Result<Reply> {
        let command = parse_command(line).map_err(from_parse_failure)?;
        self.submit(battle_id, command).await
    }

    /// Parse a block of command lines and submit them in order
    ///
    /// A `>BATTLEID` first line overrides `battle_id`. Stops at the first
    /// rejected command; commands before it stay applied.
    pub async fn submit_frame(&self, battle_id: &str, frame: &str) -> Result<Vec<Reply>> {
        let frame = parse_command_frame(frame).map_err(from_parse_failure)?;
        let battle_id = frame.battle_id.as_deref().unwrap_or(battle_id);

        let mut replies = Vec::with_capacity(frame.commands.len());
        for command in frame.commands {
            replies.push(self.submit(battle_id, command).await?);
        }
        Ok(replies)
    }

    /// Get a battle's summary
    pub async fn summary(&self, battle_id: &str) -> Result<String> {
        match self.submit(battle_id, Command::Status).await? {
            Reply::Summary(summary) => Ok(summary),
            other => bail!("Unexpected reply to status: {:?}", other),
        }
    }
}
