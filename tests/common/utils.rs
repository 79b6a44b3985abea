use once_cell::sync::Lazy;
use reqwest::{Client, Method, Response};
use secrecy::SecretString;
use serde_json::Value;
use std::net::TcpListener;
use std::sync::Arc;

use worldcup_tracker::run;
use worldcup_tracker::config::settings::{get_config, AdminSettings, StandingsSettings};
use worldcup_tracker::db::{MemoryStore, TournamentStore};
use worldcup_tracker::telemetry::{get_subscriber, init_subscriber};
use worldcup_tracker::tournament::NameOrdering;

pub const ADMIN_TOKEN: &str = "test-admin-token";

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// Spawn the server on a random port with an empty in-memory store
pub async fn spawn_app() -> TestApp {
    spawn_app_with_ordering(NameOrdering::Codepoint).await
}

pub async fn spawn_app_with_ordering(name_ordering: NameOrdering) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let configuration = get_config().expect("Failed to read configuration.");
    let admin_settings = AdminSettings {
        api_token: SecretString::new(ADMIN_TOKEN.to_string().into_boxed_str()),
    };

    let store = Arc::new(MemoryStore::new());
    let shared: Arc<dyn TournamentStore> = store.clone();
    let server = run(
        listener,
        shared,
        admin_settings,
        StandingsSettings { name_ordering },
        configuration.cors,
    )
    .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp { address, store }
}

/// Send a request carrying the admin bearer token
pub async fn make_admin_request(
    client: &Client,
    method: Method,
    url: &str,
    body: Option<Value>,
) -> Response {
    let mut request = client
        .request(method, url)
        .header("Authorization", format!("Bearer {}", ADMIN_TOKEN));

    if let Some(body) = body {
        request = request.json(&body);
    }

    request.send().await.expect("Failed to execute request.")
}

pub async fn get_json(client: &Client, url: &str) -> (u16, Value) {
    let response = client
        .get(url)
        .send()
        .await
        .expect("Failed to execute request.");
    let status = response.status().as_u16();
    let body = response.json::<Value>().await.expect("Cannot turn into a json.");
    (status, body)
}
