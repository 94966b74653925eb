#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use linkcut::application::services::ShortenSettings;
use linkcut::domain::entities::{NewErrorLog, UrlRecord};
use linkcut::domain::repositories::{ErrorLogRepository, StorageError, UrlRepository};
use linkcut::routes::app_router;
use linkcut::state::AppState;
use linkcut::utils::id_generator::{IdGenerator, RandomIdGenerator};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const BASE_URL: &str = "http://short.test";

fn unavailable() -> StorageError {
    StorageError::Database(sqlx::Error::PoolTimedOut)
}

/// URL store held in memory, rejecting duplicate ids like the unique constraint does.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    records: Mutex<HashMap<String, UrlRecord>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, short_id: &str, original_url: &str) {
        self.records.lock().unwrap().insert(
            short_id.to_string(),
            UrlRecord::new(short_id.to_string(), original_url.to_string(), Utc::now()),
        );
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn get(&self, short_id: &str) -> Option<UrlRecord> {
        self.records.lock().unwrap().get(short_id).cloned()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, short_id: &str, original_url: &str) -> Result<UrlRecord, StorageError> {
        let mut records = self.records.lock().unwrap();

        if records.contains_key(short_id) {
            return Err(StorageError::Conflict {
                short_id: short_id.to_string(),
            });
        }

        let record = UrlRecord::new(short_id.to_string(), original_url.to_string(), Utc::now());
        records.insert(short_id.to_string(), record.clone());

        Ok(record)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, StorageError> {
        Ok(self.records.lock().unwrap().get(short_id).cloned())
    }
}

/// URL store whose every call fails as if the database were unreachable.
#[derive(Default)]
pub struct FailingUrlRepository;

#[async_trait]
impl UrlRepository for FailingUrlRepository {
    async fn create(&self, _short_id: &str, _original_url: &str) -> Result<UrlRecord, StorageError> {
        Err(unavailable())
    }

    async fn find_by_short_id(&self, _short_id: &str) -> Result<Option<UrlRecord>, StorageError> {
        Err(unavailable())
    }
}

/// URL store that answers correctly, but only after `delay`.
pub struct SlowUrlRepository {
    inner: InMemoryUrlRepository,
    delay: Duration,
}

impl SlowUrlRepository {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: InMemoryUrlRepository::new(),
            delay,
        }
    }

    pub fn seed(&self, short_id: &str, original_url: &str) {
        self.inner.seed(short_id, original_url);
    }
}

#[async_trait]
impl UrlRepository for SlowUrlRepository {
    async fn create(&self, short_id: &str, original_url: &str) -> Result<UrlRecord, StorageError> {
        tokio::time::sleep(self.delay).await;
        self.inner.create(short_id, original_url).await
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, StorageError> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_by_short_id(short_id).await
    }
}

/// Error-log sink keeping every appended record.
#[derive(Default)]
pub struct RecordingErrorLogRepository {
    records: Mutex<Vec<NewErrorLog>>,
}

impl RecordingErrorLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<NewErrorLog> {
        self.records.lock().unwrap().clone()
    }

    /// Polls until at least `count` records arrived or two seconds passed.
    pub async fn wait_for(&self, count: usize) -> Vec<NewErrorLog> {
        for _ in 0..200 {
            if self.records.lock().unwrap().len() >= count {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.records()
    }
}

#[async_trait]
impl ErrorLogRepository for RecordingErrorLogRepository {
    async fn append(&self, record: NewErrorLog) -> Result<(), StorageError> {
        self.records.lock().unwrap().push(record);
        Ok(())
    }
}

/// Error-log sink that always fails and counts how often it was tried.
#[derive(Default)]
pub struct FailingErrorLogRepository {
    attempts: AtomicUsize,
}

impl FailingErrorLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub async fn wait_for_attempts(&self, count: usize) -> usize {
        for _ in 0..200 {
            if self.attempts() >= count {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.attempts()
    }
}

#[async_trait]
impl ErrorLogRepository for FailingErrorLogRepository {
    async fn append(&self, _record: NewErrorLog) -> Result<(), StorageError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(unavailable())
    }
}

/// Hands out the queued ids in order, then random ones.
pub struct ScriptedIdGenerator {
    queued: Mutex<VecDeque<String>>,
}

impl ScriptedIdGenerator {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            queued: Mutex::new(ids.iter().map(|s| s.to_string()).collect()),
        }
    }
}

impl IdGenerator for ScriptedIdGenerator {
    fn generate(&self) -> String {
        self.queued
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| RandomIdGenerator.generate())
    }
}

pub fn settings(store_timeout: Duration) -> ShortenSettings {
    ShortenSettings {
        base_url: BASE_URL.to_string(),
        store_timeout,
        max_attempts: 5,
    }
}

pub fn create_test_server(
    urls: Arc<dyn UrlRepository>,
    error_logs: Arc<dyn ErrorLogRepository>,
    id_generator: Arc<dyn IdGenerator>,
    settings: ShortenSettings,
) -> TestServer {
    create_test_server_with_origins(urls, error_logs, id_generator, settings, &["*".to_string()])
}

pub fn create_test_server_with_origins(
    urls: Arc<dyn UrlRepository>,
    error_logs: Arc<dyn ErrorLogRepository>,
    id_generator: Arc<dyn IdGenerator>,
    settings: ShortenSettings,
    allowed_origins: &[String],
) -> TestServer {
    let state = AppState::new(urls, error_logs, id_generator, settings);
    TestServer::new(app_router(state, allowed_origins)).unwrap()
}

/// Server over a fresh in-memory store with a recording error log.
pub fn create_default_server() -> (
    TestServer,
    Arc<InMemoryUrlRepository>,
    Arc<RecordingErrorLogRepository>,
) {
    let urls = Arc::new(InMemoryUrlRepository::new());
    let error_logs = Arc::new(RecordingErrorLogRepository::new());

    let server = create_test_server(
        urls.clone(),
        error_logs.clone(),
        Arc::new(RandomIdGenerator),
        settings(Duration::from_secs(2)),
    );

    (server, urls, error_logs)
}

/// Identifier at the end of a short URL.
pub fn short_id_of(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap_or_default()
}
