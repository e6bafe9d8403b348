#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::{
        Battle, BattleError, Command, Handler, MatchRecord, ParseError, RefereeConfig,
        RefereeError, Reply, spawn,
    };

    #[derive(Clone, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl Recorder {
        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Handler for Recorder {
        async fn on_battle_created(&mut self, battle_id: &str, battle: &Battle) {
            self.push(format!("created {} {}", battle_id, battle.label()));
        }

        async fn on_match_finished(&mut self, battle_id: &str, record: &MatchRecord) {
            self.push(format!("match {} {}", battle_id, record));
        }

        async fn on_battle_finished(&mut self, battle_id: &str, battle: &Battle) {
            let winner = battle.winner().map(|team| team.name.clone()).unwrap_or_default();
            self.push(format!("finished {} {}", battle_id, winner));
        }

        async fn on_undo(&mut self, battle_id: &str, record: &MatchRecord) {
            self.push(format!("undo {} {}", battle_id, record));
        }

        async fn on_rejected(&mut self, battle_id: &str, command: &Command, _error: &RefereeError) {
            self.push(format!("rejected {} {}", battle_id, command.to_command_string()));
        }
    }

    fn referee_error(error: &anyhow::Error) -> &RefereeError {
        error.downcast_ref::<RefereeError>().unwrap()
    }

    #[tokio::test]
    async fn test_full_battle_through_handle() {
        let recorder = Recorder::default();
        let (handle, task) = spawn(RefereeConfig::default(), recorder.clone());

        let replies = handle
            .submit_frame(
                "unused",
                ">grand-finals\n!battle A B 1\n!add A p1\n!add B p2\n!end 3 1 Fox Marth\n",
            )
            .await
            .unwrap();
        assert_eq!(replies.len(), 4);
        assert!(matches!(replies[3], Reply::MatchFinished(ref outcome) if outcome.ended_battle()));

        let summary = handle.summary("grand-finals").await.unwrap();
        assert_eq!(
            summary,
            "A vs B (1v1)\np1| Fox [3] vs [1] Marth|p2\nA wins 2 - 0 over B"
        );

        drop(handle);
        task.await.unwrap();

        assert_eq!(
            recorder.events(),
            vec![
                "created grand-finals A vs B".to_string(),
                "match grand-finals p1| Fox [3] vs [1] Marth|p2".to_string(),
                "finished grand-finals A".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_rejected_command() {
        let recorder = Recorder::default();
        let (handle, _task) = spawn(RefereeConfig::default(), recorder.clone());

        handle.submit_line("room", "!battle A B 2").await.unwrap();
        handle.submit_line("room", "!add A p1").await.unwrap();

        let err = handle.submit_line("room", "!end 3 0 Fox Marth").await.unwrap_err();
        let RefereeError::Battle(battle_error) = referee_error(&err) else {
            panic!("unexpected error {:?}", err);
        };
        assert!(battle_error.is_invalid_state());
        assert_eq!(battle_error.battle(), "A vs B");

        assert_eq!(
            recorder.events().last().unwrap(),
            "rejected room !end 3 0 Fox Marth"
        );
    }

    #[tokio::test]
    async fn test_parse_failure_is_referee_error() {
        let (handle, _task) = spawn(RefereeConfig::default(), ());

        let err = handle.submit_line("room", "!end 3").await.unwrap_err();
        assert_eq!(
            referee_error(&err),
            &RefereeError::Parse(ParseError::MissingField("end taken2".to_string()))
        );
    }

    #[tokio::test]
    async fn test_frame_stops_at_first_failure() {
        let (handle, _task) = spawn(RefereeConfig::default(), ());

        let err = handle
            .submit_frame("room", "!battle A B 2\n!add A p1\n!add A p2\n!add B p3")
            .await
            .unwrap_err();
        assert!(matches!(
            referee_error(&err),
            RefereeError::Battle(BattleError::InvalidState { .. })
        ));

        // The commands before the failure stay applied, the ones after never ran
        let summary = handle.summary("room").await.unwrap();
        assert_eq!(summary, "A vs B (2v2)\nCurrent score: A[6] - B[6]");
        let err = handle.submit_line("room", "!end 3 0 Fox Marth").await.unwrap_err();
        assert!(err.to_string().contains("for B"));
    }

    #[tokio::test]
    async fn test_battles_are_independent() {
        let (handle, _task) = spawn(RefereeConfig::default().with_default_size(2), ());

        handle.submit_line("one", "!battle A B").await.unwrap();
        handle.submit_line("two", "!battle C D 3").await.unwrap();
        handle.submit_line("one", "!add A p1").await.unwrap();

        assert!(handle.summary("one").await.unwrap().starts_with("A vs B (2v2)"));
        assert!(handle.summary("two").await.unwrap().starts_with("C vs D (3v3)"));

        let err = handle.summary("three").await.unwrap_err();
        assert_eq!(referee_error(&err), &RefereeError::NoBattle("three".to_string()));
    }

    #[tokio::test]
    async fn test_concurrent_submitters_are_serialized() {
        let (handle, _task) = spawn(RefereeConfig::default().with_channel_capacity(1), ());
        handle.submit_line("room", "!battle A B 5").await.unwrap();
        handle.submit_line("room", "!add A p1").await.unwrap();

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let handle = handle.clone();
            tasks.push(tokio::spawn(async move {
                handle.submit_line("room", "!add B p2").await.is_ok()
            }));
        }

        let mut accepted = 0;
        for task in tasks {
            if task.await.unwrap() {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 1);
    }

    #[tokio::test]
    async fn test_undo_event() {
        let recorder = Recorder::default();
        let (handle, _task) = spawn(RefereeConfig::default(), recorder.clone());

        handle
            .submit_frame("room", "!battle A B 2\n!add A p1\n!add B p2\n!end 1 3 Fox Marth")
            .await
            .unwrap();
        let reply = handle.submit("room", Command::Undo).await.unwrap();
        assert!(matches!(reply, Reply::Undone(_)));

        assert_eq!(
            recorder.events().last().unwrap(),
            "undo room p1| Fox [1] vs [3] Marth|p2"
        );
    }

    #[tokio::test]
    async fn test_oversized_roster_is_rejected() {
        let (handle, task) = spawn(RefereeConfig::default(), ());

        let err = handle
            .submit_line("room", "!battle A B 2000000000")
            .await
            .unwrap_err();
        assert!(matches!(
            referee_error(&err),
            RefereeError::Battle(BattleError::InvalidState { .. })
        ));

        // The actor keeps serving other battles
        handle.submit_line("other", "!battle A B 2").await.unwrap();
        let summary = handle.summary("other").await.unwrap();
        assert_eq!(summary, "A vs B (2v2)\nCurrent score: A[6] - B[6]");

        drop(handle);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_undo_after_next_player_is_fielded() {
        let (handle, _task) = spawn(RefereeConfig::default(), ());
        handle
            .submit_frame("room", "!battle A B 2\n!add A p1\n!add B p2\n!end 3 0 Fox Marth\n!add B p3")
            .await
            .unwrap();

        let reply = handle.submit_line("room", "!undo").await.unwrap();
        assert_eq!(reply.to_string(), "Undid p1| Fox [3] vs [0] Marth|p2");
        let summary = handle.summary("room").await.unwrap();
        assert_eq!(summary, "A vs B (2v2)\nCurrent score: A[6] - B[6]");
    }

    #[tokio::test]
    async fn test_stopped_referee() {
        let (handle, task) = spawn(RefereeConfig::default(), ());
        task.abort();
        let _ = task.await;

        let err = handle.submit("room", Command::Status).await.unwrap_err();
        assert_eq!(err.to_string(), "Referee stopped");
    }
}
