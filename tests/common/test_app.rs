use pagely::{AppState, Config, DbPool, router};
use reqwest::{Client, redirect::Policy};
use sqlx::sqlite::SqlitePoolOptions;

/// HTTP test application wrapper
///
/// Manages an axum server on a random port backed by its own in-memory
/// SQLite database. Each test gets an isolated server and store, which
/// allows parallel test execution without namespace juggling.
pub struct TestApp {
    /// Server base URL (e.g., "http://127.0.0.1:54321")
    pub address: String,
    /// HTTP client with a persistent cookie store
    pub client: Client,
    /// Database pool, for direct fixture tweaks
    pub pool: DbPool,
}

impl TestApp {
    /// Create a new HTTP test app with server on random port
    ///
    /// # How it works:
    /// 1. Opens a single-connection in-memory SQLite pool and runs migrations
    /// 2. Binds to port 0 (OS assigns random available port)
    /// 3. Starts the real application router in a background task
    /// 4. Creates a reqwest client with cookies enabled and redirects off,
    ///    so 303 responses can be asserted directly
    pub async fn new() -> Self {
        // A single connection keeps the in-memory database alive and shared.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(pool.clone(), Config::default());
        let app = router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{port}");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give server time to start
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        Self {
            address,
            client: Self::build_client(),
            pool,
        }
    }

    /// Build an HTTP client with persistent cookies and no redirect following
    pub fn build_client() -> Client {
        Client::builder()
            .redirect(Policy::none())
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client")
    }

    /// Get the full URL for an endpoint
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Register a user with the app's default client (sets the session cookie)
    pub async fn register(&self, username: &str, password: &str) -> reqwest::Response {
        self.register_with(&self.client, username, password).await
    }

    /// Register a user with a specific client
    pub async fn register_with(
        &self,
        client: &Client,
        username: &str,
        password: &str,
    ) -> reqwest::Response {
        client
            .post(self.url("/register"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to send register request")
    }

    /// Log in with the app's default client
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.login_with(&self.client, username, password).await
    }

    /// Log in with a specific client
    pub async fn login_with(
        &self,
        client: &Client,
        username: &str,
        password: &str,
    ) -> reqwest::Response {
        client
            .post(self.url("/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to send login request")
    }

    /// Create a book through the API and return its id
    pub async fn create_book(&self, client: &Client, body: &serde_json::Value) -> i64 {
        let response = client
            .post(self.url("/api/books"))
            .json(body)
            .send()
            .await
            .expect("Failed to send create book request");
        assert_eq!(response.status(), 201);

        let body: serde_json::Value = response.json().await.expect("Invalid JSON response");
        body["id"].as_i64().expect("Missing book id")
    }

    /// Create a schedule item through the API and return its id
    pub async fn create_schedule_item(&self, client: &Client, body: &serde_json::Value) -> i64 {
        let response = client
            .post(self.url("/api/schedule"))
            .json(body)
            .send()
            .await
            .expect("Failed to send create schedule request");
        assert_eq!(response.status(), 201);

        let body: serde_json::Value = response.json().await.expect("Invalid JSON response");
        body["id"].as_i64().expect("Missing schedule item id")
    }
}
