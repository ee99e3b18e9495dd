#[cfg(test)]
mod integration_tests {
    use crate::cli::commands::predict::run_prediction;
    use crate::cli::commands::status::service_report;
    use crate::client::HttpPredictionClient;
    use crate::config::ClientConfig;
    use crate::schemas::HealthResponse;
    use crate::terminal::TerminalView;
    use crate::test_utils::test_utils::{
        init_test_tracing, setup_test_page, spawn_mock_service, unreachable_endpoint, MockReply,
        MockService,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{
        Interpretation, PredictionClient, PredictionError, PredictionForm, PredictionInput,
        PredictionView, PredictionWorkflow, RenderedPrediction, ServiceEndpoint, SubmitControl,
        SubmitOutcome, UiState,
    };
    use serde_json::json;
    use std::cell::RefCell;
    use std::time::Duration;

    fn client_for(endpoint: ServiceEndpoint) -> HttpPredictionClient {
        let config = ClientConfig {
            endpoint,
            timeout: Duration::from_secs(5),
        };
        HttpPredictionClient::new(&config).expect("Failed to build client")
    }

    fn form(
        temperature: &str,
        cloud_cover: &str,
        humidity: &str,
        hour: &str,
        month: &str,
    ) -> PredictionForm {
        PredictionForm {
            temperature: temperature.to_string(),
            cloud_cover: cloud_cover.to_string(),
            humidity: humidity.to_string(),
            hour: hour.to_string(),
            month: month.to_string(),
        }
    }

    fn sunny_noon() -> PredictionForm {
        form("35", "10", "40", "12", "6")
    }

    /// Records the submit control so every exit path can be checked
    #[derive(Default)]
    struct ControlRecorder {
        controls: RefCell<Vec<SubmitControl>>,
        results: RefCell<Vec<RenderedPrediction>>,
        errors: RefCell<Vec<String>>,
        clears: RefCell<usize>,
    }

    impl PredictionView for ControlRecorder {
        fn clear(&self) {
            *self.clears.borrow_mut() += 1;
        }

        fn show_result(&self, prediction: &RenderedPrediction) {
            self.results.borrow_mut().push(prediction.clone());
        }

        fn show_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }

        fn set_submit_control(&self, control: &SubmitControl) {
            self.controls.borrow_mut().push(control.clone());
        }
    }

    impl ControlRecorder {
        fn assert_restored(&self) {
            let controls = self.controls.borrow();
            assert_eq!(controls.first(), Some(&SubmitControl::busy()));
            assert_eq!(controls.last(), Some(&SubmitControl::idle()));
            assert_eq!(controls.iter().filter(|c| c.is_idle()).count(), 1);
        }
    }

    #[tokio::test]
    async fn test_page_health_check() {
        let _guard = init_test_tracing();
        let dir = tempfile::tempdir().unwrap();
        let server = TestServer::new(setup_test_page(dir.path())).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.page, "available");
    }

    #[tokio::test]
    async fn test_page_is_served_with_index_fallback() {
        let _guard = init_test_tracing();
        let dir = tempfile::tempdir().unwrap();
        let server = TestServer::new(setup_test_page(dir.path())).unwrap();

        let index = server.get("/").await;
        index.assert_status(StatusCode::OK);
        assert!(index.text().contains("id=\"profile\""));

        let css = server.get("/style.css").await;
        css.assert_status(StatusCode::OK);
        assert!(css.text().contains("margin"));

        let deep_link = server.get("/projects").await;
        deep_link.assert_status(StatusCode::OK);
        assert!(deep_link.text().contains("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_health_reports_missing_page() {
        let dir = tempfile::tempdir().unwrap();
        let router = crate::router::create_router(crate::schemas::AppState::new(dir.path()));
        let server = TestServer::new(router).unwrap();

        let body: HealthResponse = server.get("/health").await.json();
        assert_eq!(body.page, "missing");
    }

    #[tokio::test]
    async fn test_client_posts_json_body() {
        let _guard = init_test_tracing();
        let service = MockService::new(vec![MockReply::success(412.37)]);
        let client = client_for(spawn_mock_service(service.clone()).await);

        let reply = client
            .predict(&PredictionInput::new(30.0, 15.0, 45.0, 13, 5))
            .await
            .unwrap();

        assert_eq!(reply.http_status, 200);
        assert_eq!(reply.into_irradiance(), Ok(412.37));
        assert_eq!(
            service.recorded(),
            vec![json!({
                "temperature": 30.0,
                "cloud_cover": 15.0,
                "humidity": 45.0,
                "hour": 13,
                "month": 5
            })]
        );
    }

    #[tokio::test]
    async fn test_success_over_http() {
        let _guard = init_test_tracing();
        let service = MockService::new(vec![MockReply::success(750.0)]);
        let view = ControlRecorder::default();
        let client = client_for(spawn_mock_service(service).await);
        let workflow = PredictionWorkflow::new(client, &view);

        let outcome = workflow.submit(&sunny_noon()).await;

        let prediction = match outcome {
            SubmitOutcome::Succeeded(prediction) => prediction,
            other => panic!("expected success, got {:?}", other),
        };
        assert_eq!(prediction.value_text, "750 W/m²");
        assert_eq!(prediction.interpretation, Interpretation::Good);
        assert!(view.errors.borrow().is_empty());
        view.assert_restored();
    }

    #[tokio::test]
    async fn test_domain_error_over_http() {
        let _guard = init_test_tracing();
        let service = MockService::new(vec![MockReply::failure(
            StatusCode::BAD_REQUEST,
            json!({"status": "error", "error": "out of range"}),
        )]);
        let view = ControlRecorder::default();
        let client = client_for(spawn_mock_service(service).await);
        let workflow = PredictionWorkflow::new(client, &view);

        workflow.submit(&sunny_noon()).await;

        assert_eq!(view.errors.borrow().as_slice(), ["out of range".to_string()]);
        assert!(view.results.borrow().is_empty());
        view.assert_restored();
    }

    #[tokio::test]
    async fn test_domain_error_without_message_over_http() {
        let _guard = init_test_tracing();
        let service =
            MockService::new(vec![MockReply::failure(StatusCode::OK, json!({"status": "error"}))]);
        let view = ControlRecorder::default();
        let client = client_for(spawn_mock_service(service).await);
        let workflow = PredictionWorkflow::new(client, &view);

        workflow.submit(&sunny_noon()).await;

        assert_eq!(workflow.state(), UiState::Error("Prediction failed".to_string()));
        view.assert_restored();
    }

    #[tokio::test]
    async fn test_non_json_reply_reads_like_connection_failure() {
        let _guard = init_test_tracing();
        let service = MockService::new(vec![MockReply::text(
            StatusCode::BAD_GATEWAY,
            "<html><body>502 Bad Gateway</body></html>",
        )]);
        let endpoint = spawn_mock_service(service).await;
        let base_url = endpoint.base_url().to_string();
        let view = ControlRecorder::default();
        let workflow = PredictionWorkflow::new(client_for(endpoint), &view);

        let outcome = workflow.submit(&sunny_noon()).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(PredictionError::Decode(_))));
        let errors = view.errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Unable to connect to prediction service"));
        assert!(errors[0].contains(&base_url));
        view.assert_restored();
    }

    #[tokio::test]
    async fn test_unexpected_json_shape_reads_like_connection_failure() {
        let _guard = init_test_tracing();
        let service =
            MockService::new(vec![MockReply::failure(StatusCode::OK, json!("not an object"))]);
        let view = ControlRecorder::default();
        let client = client_for(spawn_mock_service(service).await);
        let workflow = PredictionWorkflow::new(client, &view);

        let outcome = workflow.submit(&sunny_noon()).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(PredictionError::Decode(_))));
        assert!(view.errors.borrow()[0].starts_with("Unable to connect to prediction service"));
        view.assert_restored();
    }

    #[tokio::test]
    async fn test_transport_error_over_http() {
        let _guard = init_test_tracing();
        let endpoint = unreachable_endpoint().await;
        let base_url = endpoint.base_url().to_string();
        let view = ControlRecorder::default();
        let workflow = PredictionWorkflow::new(client_for(endpoint), &view);

        let outcome = workflow.submit(&sunny_noon()).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(PredictionError::Transport(_))));
        let errors = view.errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Unable to connect to prediction service"));
        assert!(errors[0].contains(&base_url));
        view.assert_restored();
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let _guard = init_test_tracing();
        let service = MockService::new(vec![MockReply::success(1.0)]);
        let view = ControlRecorder::default();
        let workflow =
            PredictionWorkflow::new(client_for(spawn_mock_service(service.clone()).await), &view);

        workflow.submit(&form("abc", "10", "40", "12", "6")).await;

        assert!(service.recorded().is_empty());
        assert_eq!(
            view.errors.borrow().as_slice(),
            ["temperature must be a number, got 'abc'".to_string()]
        );
        view.assert_restored();
    }

    #[tokio::test]
    async fn test_sequential_submissions_replace_result() {
        let _guard = init_test_tracing();
        let service = MockService::new(vec![MockReply::success(900.0), MockReply::success(0.0)]);
        let view = ControlRecorder::default();
        let workflow =
            PredictionWorkflow::new(client_for(spawn_mock_service(service.clone()).await), &view);

        workflow.submit(&sunny_noon()).await;
        workflow.submit(&form("20", "50", "60", "0", "5")).await;

        assert_eq!(*view.clears.borrow(), 2);
        let state = workflow.state();
        let prediction = state.result().unwrap();
        assert_eq!(prediction.value_text, "0 W/m²");
        assert_eq!(prediction.interpretation, Interpretation::NoIrradiance);
        assert_eq!(service.recorded().len(), 2);
        assert_eq!(service.recorded()[1]["hour"], 0);
    }

    #[tokio::test]
    async fn test_run_prediction_writes_terminal_output() {
        let _guard = init_test_tracing();
        let service = MockService::new(vec![MockReply::success(85.5)]);
        let view = TerminalView::new(Vec::new());

        let client = client_for(spawn_mock_service(service).await);
        let prediction = run_prediction(client, &view, &sunny_noon()).await.unwrap();

        assert_eq!(prediction.interpretation, Interpretation::VeryLow);
        let output = String::from_utf8(view.into_inner()).unwrap();
        assert!(output.starts_with("Predicting...\n"));
        assert!(output.contains("Predicted solar irradiance: 85.5 W/m²"));
    }

    #[tokio::test]
    async fn test_run_prediction_fails_on_transport_error() {
        let _guard = init_test_tracing();
        let view = TerminalView::new(Vec::new());

        let client = client_for(unreachable_endpoint().await);
        let result = run_prediction(client, &view, &sunny_noon()).await;

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PredictionError>(),
            Some(PredictionError::Transport(_))
        ));
        let output = String::from_utf8(view.into_inner()).unwrap();
        assert!(output.contains("Error: Unable to connect to prediction service"));
    }

    #[tokio::test]
    async fn test_status_report() {
        let _guard = init_test_tracing();
        let client = client_for(spawn_mock_service(MockService::default()).await);

        let report = service_report(&client).await.unwrap();

        assert!(report.contains("Service:  Solar Irradiance Prediction API"));
        assert!(report.contains("Status:   running"));
        assert!(report.contains("Model:    Random Forest Regressor (100 estimators)"));
    }

    #[tokio::test]
    async fn test_status_report_unreachable() {
        let _guard = init_test_tracing();
        let client = client_for(unreachable_endpoint().await);

        let err = service_report(&client).await.unwrap_err();

        assert!(err.to_string().starts_with("Prediction service unreachable at http://127.0.0.1:"));
    }
}
