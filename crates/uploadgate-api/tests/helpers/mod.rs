//! Test helpers: build AppState and router for integration tests.
//!
//! The router is the production one from `setup::routes`; only the store is replaced
//! by an in-memory [`storage::MockStore`], so no network or bucket is needed.

pub mod storage;

use axum_test::TestServer;
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;
use uploadgate_api::setup::routes;
use uploadgate_api::{AppState, UploadGateway};
use uploadgate_core::Config;

use storage::MockStore;

pub const TEST_PUBLIC_BASE_URL: &str = "https://cdn.test.example";

/// Test application: server, mock store and the directory uploads are staged in.
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MockStore>,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of entries left in the staging directory.
    pub fn staged_file_count(&self) -> usize {
        std::fs::read_dir(self.temp_dir.path())
            .expect("Failed to read staging dir")
            .count()
    }
}

pub fn test_config(temp_dir: &TempDir, max_upload_mb: u64) -> Config {
    let mut vars = HashMap::new();
    vars.insert("S3_BUCKET", "test-bucket".to_string());
    vars.insert("S3_REGION", "us-east-1".to_string());
    vars.insert("PUBLIC_BASE_URL", TEST_PUBLIC_BASE_URL.to_string());
    vars.insert("MAX_UPLOAD_SIZE_MB", max_upload_mb.to_string());
    vars.insert(
        "UPLOAD_TEMP_DIR",
        temp_dir.path().to_string_lossy().to_string(),
    );
    Config::from_lookup(|key| vars.get(key).cloned()).expect("Failed to build test config")
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_store(MockStore::default()).await
}

pub async fn setup_test_app_with_store(store: MockStore) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = test_config(&temp_dir, 1);

    let store = Arc::new(store);
    let gateway = UploadGateway::new(store.clone(), config.public_base_url());
    let state = Arc::new(AppState::new(config.clone(), gateway));

    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        store,
        temp_dir,
    }
}
