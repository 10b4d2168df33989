//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;

use tempfile::TempDir;
use vehicle_console::config::{ApiConfig, TokenStore};
use vehicle_console::gateway::ApiClient;
use vehicle_console::model::{Brand, Segment, Vehicle};

/// API settings pointing at `base_url` with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    }
}

pub fn client(base_url: &str) -> ApiClient {
    ApiClient::new(&api_config(base_url)).expect("client")
}

/// Token store in a fresh temp dir. Keep the dir alive for the test.
pub fn temp_tokens() -> (TempDir, TokenStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = TokenStore::new(dir.path().join("token"));
    (dir, store)
}

/// Config file with the given body, returned with its dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

pub fn vehicle(id: u64, segment: u64, brand: u64) -> Vehicle {
    Vehicle {
        id,
        name: format!("car-{id}"),
        release_year: 2019,
        price: 100.0,
        segment,
        brand,
        segment_name: format!("segment-{segment}"),
        brand_name: format!("brand-{brand}"),
    }
}

pub fn segments() -> Vec<Segment> {
    vec![Segment::new(1, "Sedan"), Segment::new(2, "SUV")]
}

pub fn brands() -> Vec<Brand> {
    vec![Brand::new(1, "Toyota"), Brand::new(2, "Tesla")]
}
