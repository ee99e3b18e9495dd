#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::{get, post},
        Json, Router,
    };
    use common::ServiceEndpoint;
    use serde_json::{json, Value};
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    #[derive(Clone, Debug)]
    pub enum MockBody {
        Json(Value),
        Text(String),
    }

    /// Canned answer of the fake prediction service
    #[derive(Clone, Debug)]
    pub struct MockReply {
        pub status: StatusCode,
        pub body: MockBody,
    }

    impl MockReply {
        pub fn success(irradiance: f64) -> Self {
            Self {
                status: StatusCode::OK,
                body: MockBody::Json(json!({
                    "predicted_solar_irradiance": irradiance,
                    "unit": "W/m²",
                    "status": "success"
                })),
            }
        }

        pub fn failure(status: StatusCode, body: Value) -> Self {
            Self {
                status,
                body: MockBody::Json(body),
            }
        }

        /// A reply whose body is not JSON at all, like a proxy error page.
        pub fn text(status: StatusCode, body: &str) -> Self {
            Self {
                status,
                body: MockBody::Text(body.to_string()),
            }
        }
    }

    /// Fake prediction service: replays replies in order and records bodies
    #[derive(Clone, Default)]
    pub struct MockService {
        replies: Arc<Mutex<Vec<MockReply>>>,
        pub requests: Arc<Mutex<Vec<Value>>>,
    }

    impl MockService {
        pub fn new(replies: Vec<MockReply>) -> Self {
            let mut replies = replies;
            replies.reverse();
            Self {
                replies: Arc::new(Mutex::new(replies)),
                requests: Arc::default(),
            }
        }

        pub fn recorded(&self) -> Vec<Value> {
            self.requests.lock().unwrap().clone()
        }

        fn router(self) -> Router {
            Router::new()
                .route("/", get(mock_health))
                .route("/model-info", get(mock_model_info))
                .route("/predict", post(mock_predict))
                .with_state(self)
        }
    }

    async fn mock_health() -> Json<Value> {
        Json(json!({
            "status": "running",
            "service": "Solar Irradiance Prediction API",
            "model": "Random Forest Regressor",
            "version": "1.0"
        }))
    }

    async fn mock_model_info() -> Json<Value> {
        Json(json!({
            "model_type": "Random Forest Regressor",
            "n_estimators": 100,
            "features": ["temperature", "cloud_cover", "humidity", "hour", "month"],
            "target": "solar_irradiance",
            "unit": "W/m²",
            "status": "ready"
        }))
    }

    // The Json extractor rejects requests without an application/json body.
    async fn mock_predict(
        State(service): State<MockService>,
        Json(body): Json<Value>,
    ) -> Response {
        service.requests.lock().unwrap().push(body);
        let reply = service
            .replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| MockReply::failure(StatusCode::INTERNAL_SERVER_ERROR, json!({})));
        match reply.body {
            MockBody::Json(body) => (reply.status, Json(body)).into_response(),
            MockBody::Text(body) => (reply.status, body).into_response(),
        }
    }

    /// Bind `router` on an ephemeral local port and return its base URL
    pub async fn spawn_router(router: Router) -> ServiceEndpoint {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock service");
        let addr = listener.local_addr().expect("Mock service has no address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Mock service crashed");
        });
        ServiceEndpoint::new(&format!("http://{}", addr)).expect("Invalid mock endpoint")
    }

    pub async fn spawn_mock_service(service: MockService) -> ServiceEndpoint {
        spawn_router(service.router()).await
    }

    /// An endpoint on a port nothing listens on
    pub async fn unreachable_endpoint() -> ServiceEndpoint {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to reserve port");
        let addr = listener.local_addr().expect("Listener has no address");
        drop(listener);
        ServiceEndpoint::new(&format!("http://{}", addr)).expect("Invalid endpoint")
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Page router over a directory holding a minimal built page
    pub fn setup_test_page(dir: &Path) -> Router {
        std::fs::write(
            dir.join("index.html"),
            "<!DOCTYPE html><html><body><div id=\"profile\"></div></body></html>",
        )
        .expect("Failed to write index.html");
        std::fs::write(dir.join("style.css"), "body { margin: 0; }")
            .expect("Failed to write style.css");
        create_router(AppState::new(dir))
    }
}
