//! Serialized referee for crew battles.
//!
//! A referee task owns every battle it runs and applies commands one at a
//! time, so concurrent submitters never interleave inside a battle. Battles
//! are keyed by an id chosen by the caller (a channel, a stream, a bracket
//! slot).
//!
//! # Example
//!
//! ```ignore
//! let (handle, task) = crew_referee::spawn(RefereeConfig::default(), ());
//!
//! handle.submit_line("pools-1", "!battle A B 3").await?;
//! handle.submit_line("pools-1", "!add A Mango").await?;
//! handle.submit_line("pools-1", "!add B Armada").await?;
//! handle.submit_line("pools-1", "!end 3 1 Falco Peach").await?;
//!
//! println!("{}", handle.summary("pools-1").await?);
//! ```

mod config;
mod error;
mod handle;
mod handler;
mod receiver;
mod referee;
mod tests;

use tokio::task::JoinHandle;

pub use crew_battle::{Battle, BattleError, MatchOutcome, MatchRecord, Phase};
pub use crew_protocol::{Command, ParseError};

pub use config::RefereeConfig;
pub use error::RefereeError;
pub use handle::RefereeHandle;
pub use handler::Handler;
pub use referee::{Referee, Reply};

/// Start a referee task
///
/// The task runs until every clone of the returned handle is dropped.
pub fn spawn<H>(config: RefereeConfig, handler: H) -> (RefereeHandle, JoinHandle<()>)
where
    H: Handler + 'static,
{
    let (tx, rx) = tokio::sync::mpsc::channel(config.channel_capacity.max(1));
    let referee = Referee::new(config);
    let task = tokio::spawn(receiver::run(referee, rx, handler));
    (RefereeHandle::new(tx), task)
}
