use std::path::Path;

use axum::{body::Body, http::Request, response::Response, Router};
use bnuuy_time_backend::{app::build_router, config::Config, state::AppState};
use serde_json::json;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    // Keeps the catalog and static files alive for the test.
    _dir: TempDir,
}

fn bun_json(filename: &str, left_ear: u32, right_ear: u32) -> serde_json::Value {
    json!({
        "filename": filename,
        "name": format!("Bun {}-{}", left_ear, right_ear),
        "source": {
            "platform": "Reddit",
            "author": "hoom",
            "url": format!("https://example.com/{}", filename),
        },
        "left_ear": left_ear,
        "right_ear": right_ear,
    })
}

/// A catalog with one bun per pair of ear positions, so every time matches.
pub fn full_clock_catalog() -> serde_json::Value {
    let buns: Vec<_> = (1..=12)
        .flat_map(|left| (1..=12).map(move |right| (left, right)))
        .map(|(left, right)| bun_json(&format!("bun-{}-{}.jpg", left, right), left, right))
        .collect();
    serde_json::Value::Array(buns)
}

/// Only three o'clock (or a quarter past twelve).
pub fn three_oclock_catalog() -> serde_json::Value {
    json!([bun_json("three.jpg", 3, 12)])
}

fn write_fixture(dir: &Path, catalog: &serde_json::Value) {
    std::fs::write(dir.join("buns.json"), catalog.to_string()).expect("write catalog");
    std::fs::create_dir_all(dir.join("static")).expect("static dir");
    std::fs::write(dir.join("static/style.css"), "body { margin: 0; }").expect("write css");
}

pub fn test_app(catalog: serde_json::Value) -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path(), &catalog);

    let config = Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        buns_file: dir.path().join("buns.json"),
        static_dir: dir.path().join("static"),
        default_time_zone: chrono_tz::Australia::Sydney,
    };

    TestApp {
        router: build_router(AppState::new(config)),
        _dir: dir,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
