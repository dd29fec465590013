#[cfg(test)]
mod tests {
    use std::time::Duration;

    use framedata_core::Payload;
    use framedata_storage::Storage;
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::FrameDataClient;
    use crate::error::IngestError;
    use crate::pipeline::{IngestOutcome, IngestState, load, run};
    use crate::source::{FileSource, PayloadSource};

    fn mario_payload() -> Value {
        json!({
            "fighters": {
                "mario": {
                    "name": "Mario",
                    "stats": {"weight": 98},
                    "moves": [{"name": "Jab", "startup": "2-3", "totalFrames": 20}]
                }
            }
        })
    }

    async fn serve(body: Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    fn client_for(server: &MockServer) -> FrameDataClient {
        FrameDataClient::new(format!("{}/stats", server.uri()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_mario_end_to_end() {
        let server = serve(mario_payload()).await;
        let mut storage = Storage::open_in_memory().unwrap();

        let outcome = run(&client_for(&server), &mut storage).await.unwrap();

        assert_eq!(outcome.state(), IngestState::Done);
        let report = outcome.report().unwrap();
        assert_eq!(report.fighters, 1);
        assert_eq!(report.characters_inserted, 1);
        assert_eq!(report.moves_inserted, 1);

        let mario = storage.get_character_by_name("Mario").unwrap().unwrap();
        assert_eq!(mario.stats.weight, Some(98.0));

        let moves = storage.moves_for_character(mario.id).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].name.as_deref(), Some("Jab"));
        assert_eq!(moves[0].frames.startup, Some(2));
        assert_eq!(moves[0].frames.total_frames, Some(20));

        let note: Value = serde_json::from_str(moves[0].note.as_deref().unwrap()).unwrap();
        assert_eq!(note, json!({"name": "Jab", "startup": "2-3", "totalFrames": 20}));

        let stats = storage.get_stats().unwrap();
        assert_eq!(stats.character_count, 1);
        assert_eq!(stats.move_count, 1);
    }

    #[tokio::test]
    async fn test_rerun_keeps_characters_and_appends_moves() {
        let server = serve(mario_payload()).await;
        let client = client_for(&server);
        let mut storage = Storage::open_in_memory().unwrap();

        run(&client, &mut storage).await.unwrap();
        let second = run(&client, &mut storage).await.unwrap();

        let report = second.report().unwrap();
        assert_eq!(report.characters_inserted, 0);
        assert_eq!(report.characters_existing, 1);

        let stats = storage.get_stats().unwrap();
        assert_eq!(stats.character_count, 1);
        assert_eq!(stats.move_count, 2);
        assert_eq!(storage.count_orphan_moves().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_tables_untouched() {
        let good = serve(mario_payload()).await;
        let mut storage = Storage::open_in_memory().unwrap();
        run(&client_for(&good), &mut storage).await.unwrap();
        let before = storage.get_stats().unwrap();

        let failing = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&failing)
            .await;

        let outcome = run(&client_for(&failing), &mut storage).await.unwrap();

        assert_eq!(outcome.state(), IngestState::Aborted);
        assert!(outcome.state().is_terminal());
        assert!(outcome.report().is_none());
        match outcome {
            IngestOutcome::Aborted(IngestError::HttpStatus { code, .. }) => assert_eq!(code, 500),
            other => panic!("expected aborted HttpStatus, got {other:?}"),
        }
        assert_eq!(storage.get_stats().unwrap(), before);
    }

    #[tokio::test]
    async fn test_unreachable_source_aborts() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/stats", listener.local_addr().unwrap());
        drop(listener);

        let client = FrameDataClient::new(url, Duration::from_secs(5)).unwrap();
        let mut storage = Storage::open_in_memory().unwrap();

        let outcome = run(&client, &mut storage).await.unwrap();

        assert_eq!(outcome.state(), IngestState::Aborted);
        assert_eq!(storage.get_stats().unwrap().character_count, 0);
    }

    #[tokio::test]
    async fn test_slow_source_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(mario_payload())
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;
        let client =
            FrameDataClient::new(format!("{}/stats", server.uri()), Duration::from_millis(200))
                .unwrap();
        let mut storage = Storage::open_in_memory().unwrap();

        let outcome = run(&client, &mut storage).await.unwrap();

        match outcome {
            IngestOutcome::Aborted(err) => assert!(err.is_timeout(), "got {err:?}"),
            IngestOutcome::Done(report) => panic!("expected timeout, got {report:?}"),
        }
        assert_eq!(storage.get_stats().unwrap().move_count, 0);
    }

    #[tokio::test]
    async fn test_malformed_payload_aborts() {
        let server = serve(json!({"fighters": ["mario"]})).await;
        let mut storage = Storage::open_in_memory().unwrap();

        let outcome = run(&client_for(&server), &mut storage).await.unwrap();

        assert!(matches!(outcome, IngestOutcome::Aborted(IngestError::JsonParse { .. })));
        assert_eq!(storage.get_stats().unwrap().character_count, 0);
    }

    #[tokio::test]
    async fn test_malformed_frame_values_do_not_abort() {
        let server = serve(json!({
            "fighters": {
                "sheik": {
                    "name": "Sheik",
                    "stats": {"weight": "78", "run_speed": "-"},
                    "moves": [
                        {"name": "Needles", "startup": "Varies", "totalFrames": null,
                         "landingLag": "-", "shieldAdvantage": "-4", "baseDamage": "1.2%"},
                        {"name": "Bouncing Fish", "startup": ["bad"], "totalFrames": {"x": 1}}
                    ]
                }
            }
        }))
        .await;
        let mut storage = Storage::open_in_memory().unwrap();

        let outcome = run(&client_for(&server), &mut storage).await.unwrap();
        assert_eq!(outcome.state(), IngestState::Done);

        let sheik = storage.get_character_by_name("Sheik").unwrap().unwrap();
        assert_eq!(sheik.stats.weight, Some(78.0));
        assert_eq!(sheik.stats.run_speed, None);

        let moves = storage.moves_for_character(sheik.id).unwrap();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].frames.startup, None);
        assert_eq!(moves[0].frames.total_frames, None);
        assert_eq!(moves[0].frames.landing_lag, None);
        assert_eq!(moves[0].frames.shield_advantage, Some(-4));
        assert_eq!(moves[0].base_damage, Some(1.2));
        assert_eq!(moves[1].frames.startup, None);
        assert_eq!(moves[1].frames.total_frames, None);
    }

    #[test]
    fn test_duplicate_move_names_are_appended() {
        let payload = Payload::from_value(json!({
            "fighters": {"link": {"name": "Link", "moves": [
                {"name": "Jab", "startup": 7},
                {"name": "Jab", "startup": 9}
            ]}}
        }))
        .unwrap();
        let mut storage = Storage::open_in_memory().unwrap();

        let report = load(&mut storage, &payload).unwrap();

        assert_eq!(report.moves_inserted, 2);
        let link = storage.get_character_by_name("Link").unwrap().unwrap();
        let startups: Vec<_> = storage
            .moves_for_character(link.id)
            .unwrap()
            .into_iter()
            .map(|m| m.frames.startup)
            .collect();
        assert_eq!(startups, [Some(7), Some(9)]);
    }

    #[test]
    fn test_keys_sharing_a_display_name_share_a_character() {
        let payload = Payload::from_value(json!({
            "fighters": {
                "pt_squirtle": {"name": "Pokemon Trainer", "stats": {"weight": 65},
                                "moves": [{"name": "Water Gun"}]},
                "pt_ivysaur": {"name": "Pokemon Trainer", "stats": {"weight": 84},
                               "moves": [{"name": "Razor Leaf"}]}
            }
        }))
        .unwrap();
        let mut storage = Storage::open_in_memory().unwrap();

        let report = load(&mut storage, &payload).unwrap();

        assert_eq!(report.characters_inserted, 1);
        assert_eq!(report.characters_existing, 1);
        let trainer = storage.get_character_by_name("Pokemon Trainer").unwrap().unwrap();
        assert_eq!(trainer.stats.weight, Some(65.0));
        assert_eq!(storage.moves_for_character(trainer.id).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_payload_commits_nothing() {
        let mut storage = Storage::open_in_memory().unwrap();
        let report = load(&mut storage, &Payload::default()).unwrap();
        assert_eq!(report, crate::pipeline::IngestReport::default());
        assert_eq!(storage.get_stats().unwrap().character_count, 0);
    }

    #[tokio::test]
    async fn test_file_source() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let file = temp_dir.path().join("stats.json");
        std::fs::write(&file, mario_payload().to_string()).unwrap();
        let db_path = temp_dir.path().join("data").join("framedata.db");
        let mut storage = Storage::open(&db_path).unwrap();

        let outcome = run(&FileSource::new(&file), &mut storage).await.unwrap();

        assert_eq!(outcome.state(), IngestState::Done);
        drop(storage);
        let reopened = Storage::open(&db_path).unwrap();
        assert_eq!(reopened.get_stats().unwrap().move_count, 1);
    }

    struct BrokenSource;

    #[async_trait::async_trait]
    impl PayloadSource for BrokenSource {
        fn describe(&self) -> String {
            "broken".to_owned()
        }

        async fn fetch_payload(&self) -> Result<Payload, IngestError> {
            Err(IngestError::ClientInit("no client".to_owned()))
        }
    }

    #[tokio::test]
    async fn test_non_fetch_source_error_is_returned() {
        let mut storage = Storage::open_in_memory().unwrap();

        let err = run(&BrokenSource, &mut storage).await.unwrap_err();

        assert!(!err.is_fetch_failure());
        assert!(matches!(err, IngestError::ClientInit(_)));
        assert_eq!(storage.get_stats().unwrap().character_count, 0);
    }

    #[tokio::test]
    async fn test_missing_file_aborts() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut storage = Storage::open_in_memory().unwrap();

        let outcome =
            run(&FileSource::new(temp_dir.path().join("absent.json")), &mut storage).await.unwrap();

        assert!(matches!(outcome, IngestOutcome::Aborted(IngestError::FileRead { .. })));
    }
}
