//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `scenario`: the one-player, one-team dataset from the walkthrough
//! - `roster`: a larger dataset that overflows both suggestion caps
//! - `data_file`: the scenario document written to a temp file
//!
//! [`HttpStub`] serves a canned response over a real TCP socket so the HTTP
//! source is exercised end to end without touching the network.

// Each integration test crate uses a different subset of these helpers.
#![allow(dead_code)]

use rosterdex::{Dataset, Player, Team};
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const SCENARIO_JSON: &str = r#"{
    "players": [{"id": "p1", "name": "Alex Smith"}],
    "teams": [{"name": "Red Team"}]
}"#;

#[fixture]
pub fn scenario() -> Dataset {
    Dataset::new(
        vec![Player::new("p1", "Alex Smith")],
        vec![Team::new("Red Team")],
    )
}

/// Twelve players and seven teams, all containing "ar".
#[fixture]
pub fn roster() -> Dataset {
    let players = (1..=12)
        .map(|i| Player::new(format!("bb-{i:03}"), format!("Carter Number{i}")))
        .collect();
    let teams = (1..=7).map(|i| Team::new(format!("Harbor {i}"))).collect();
    Dataset::new(players, teams)
}

/// A temp directory holding a search data file.
pub struct DataFile {
    _temp: TempDir,
    path: PathBuf,
}

impl DataFile {
    pub fn with_contents(contents: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("search_data.json");
        std::fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("Failed to write '{}': {}", path.display(), e));
        Self { _temp: temp, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[fixture]
pub fn data_file() -> DataFile {
    DataFile::with_contents(SCENARIO_JSON)
}

/// Minimal HTTP/1.1 responder answering every request with the same response.
pub struct HttpStub {
    url: String,
    hits: Arc<AtomicUsize>,
}

impl HttpStub {
    pub async fn start(status: u16, reason: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let mut buf = vec![0u8; 4096];
                let _ = stream.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self {
            url: format!("http://{addr}/search_data.json"),
            hits,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}
