use crew_protocol::Command;
use tokio::sync::{mpsc, oneshot};

use crate::error::RefereeError;
use crate::handler::Handler;
use crate::referee::{Referee, Reply};

/// One command waiting for the referee task
pub(crate) struct Request {
    pub battle_id: String,
    pub command: Command,
    pub reply: oneshot::Sender<Result<Reply, RefereeError>>,
}

/// Apply requests in arrival order until every handle is dropped
pub(crate) async fn run<H: Handler>(
    mut referee: Referee,
    mut requests: mpsc::Receiver<Request>,
    mut handler: H,
) {
    while let Some(request) = requests.recv().await {
        let result = referee.apply(&request.battle_id, request.command.clone());
        dispatch(&referee, &mut handler, &request, &result).await;

        // The submitter may have given up waiting
        let _ = request.reply.send(result);
    }

    tracing::debug!("All referee handles dropped, stopping");
}

/// Dispatch the events produced by one command to the handler
async fn dispatch<H: Handler>(
    referee: &Referee,
    handler: &mut H,
    request: &Request,
    result: &Result<Reply, RefereeError>,
) {
    let battle_id = request.battle_id.as_str();

    match result {
        Ok(Reply::Created { .. }) => {
            if let Some(battle) = referee.battle(battle_id) {
                handler.on_battle_created(battle_id, battle).await;
            }
        }
        Ok(Reply::MatchFinished(outcome)) => {
            handler.on_match_finished(battle_id, &outcome.record).await;
            if outcome.ended_battle()
                && let Some(battle) = referee.battle(battle_id)
            {
                match battle.winner() {
                    Ok(winner) => tracing::info!(battle_id, winner = %winner.name, "Battle won"),
                    Err(e) => tracing::info!(battle_id, reason = %e, "Battle ended without a winner"),
                }
                handler.on_battle_finished(battle_id, battle).await;
            }
        }
        Ok(Reply::Undone(record)) => {
            handler.on_undo(battle_id, record).await;
        }
        Ok(_) => {}
        Err(error) => {
            tracing::warn!(
                battle_id,
                command = %request.command.to_command_string(),
                error = %error,
                "Command rejected"
            );
            handler.on_rejected(battle_id, &request.command, error).await;
        }
    }
}
