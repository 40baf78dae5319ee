//! End-to-end tests for the HTTP server.
//!
//! Each test starts `run_server` on a free port against a temporary data
//! file and talks to it with `reqwest`.

use linkshelf::config::{parse_config, Config};
use linkshelf::server::run_server;
use serde_json::{json, Value};
use std::time::Duration;
use tempfile::TempDir;

const WEBSITES: &str = r#"[
  { "name": "Alpha", "url": "https://alpha.dev", "description": "Rust crates index", "date": "2024-05-01" },
  { "name": "Beta", "url": "https://beta.dev", "description": "Design tools", "date": "2024-05-01" },
  { "name": "Gamma", "url": "https://gamma.dev", "description": "Icon library", "date": "2024-05-02" },
  { "name": "Broken", "url": "https://broken.dev", "description": "Bad date", "date": "not-a-date" }
]"#;

fn find_free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn test_config_with_port(tmp: &TempDir, port: u16) -> Config {
    test_config_with_data(tmp, port, WEBSITES)
}

fn test_config_with_data(tmp: &TempDir, port: u16, websites: &str) -> Config {
    let root = tmp.path();
    let data_path = root.join("websites.json");
    std::fs::write(&data_path, websites).unwrap();

    let config_content = format!(
        r#"
[data]
path = "{}"

[site]
title = "Server Shelf"

[server]
bind = "127.0.0.1:{}"

[preferences]
path = "{}"
"#,
        data_path.display(),
        port,
        root.join("prefs.json").display()
    );
    parse_config(&config_content).unwrap()
}

async fn start_server(tmp: &TempDir) -> String {
    start_server_with_data(tmp, WEBSITES).await
}

async fn start_server_with_data(tmp: &TempDir, websites: &str) -> String {
    let port = find_free_port();
    let cfg = test_config_with_data(tmp, port, websites);
    tokio::spawn(async move {
        run_server(&cfg).await.ok();
    });
    let base = format!("http://127.0.0.1:{}", port);
    wait_for_catalog(&base).await;
    base
}

async fn wait_for_catalog(base: &str) {
    let client = reqwest::Client::new();
    let url = format!("{}/api/groups", base);
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        if let Ok(resp) = client.get(&url).send().await {
            if let Ok(body) = resp.json::<Value>().await {
                if body["is_loading"] == false {
                    return;
                }
            }
        }
    }
    panic!("Server did not finish loading within 5 seconds");
}

#[tokio::test]
async fn test_health() {
    let tmp = TempDir::new().unwrap();
    let base = start_server(&tmp).await;

    let body: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_groups_endpoint() {
    let tmp = TempDir::new().unwrap();
    let base = start_server(&tmp).await;

    let body: Value = reqwest::get(format!("{}/api/groups", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["is_loading"], false);
    assert_eq!(body["total_entries"], 3);
    let groups = body["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["date"], "2024-05-02");
    assert_eq!(groups[0]["display_date"], "2024年5月2日");
    assert_eq!(groups[1]["entries"][1]["id"], "2024-05-01-1");
}

#[tokio::test]
async fn test_search_endpoint() {
    let tmp = TempDir::new().unwrap();
    let base = start_server(&tmp).await;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("{}/api/search", base))
        .query(&[("q", "  ALP ")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["query"], "ALP");
    assert_eq!(body["total_entries"], 1);
    assert_eq!(body["status"]["kind"], "results");
    assert_eq!(body["groups"][0]["entries"][0]["name"], "Alpha");

    let body: Value = client
        .get(format!("{}/api/search", base))
        .query(&[("q", "2024-05-01")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["total_entries"], 2);

    let body: Value = client
        .get(format!("{}/api/search", base))
        .query(&[("q", "nothing-matches")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"]["kind"], "no_matches");
    assert_eq!(body["is_loading"], false);
    assert_eq!(body["groups"].as_array().unwrap().len(), 0);

    let body: Value = client
        .get(format!("{}/api/search", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["total_entries"], 3);
}

#[tokio::test]
async fn test_page_endpoint() {
    let tmp = TempDir::new().unwrap();
    let base = start_server(&tmp).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{}/", base)).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("<title>Server Shelf</title>"));
    assert!(html.contains("https://gamma.dev"));

    let html = client
        .get(format!("{}/", base))
        .query(&[("q", "design")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("https://beta.dev"));
    assert!(!html.contains("https://gamma.dev"));
}

#[tokio::test]
async fn test_theme_endpoints() {
    let tmp = TempDir::new().unwrap();
    let base = start_server(&tmp).await;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(format!("{}/api/theme", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["theme"], "light");

    let body: Value = client
        .post(format!("{}/api/theme/toggle", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["dark_mode"], true);

    let html = client
        .get(format!("{}/", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("class=\"dark\""));

    let body: Value = client
        .put(format!("{}/api/theme", base))
        .json(&json!({ "dark_mode": false }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["theme"], "light");

    let resp = client
        .put(format!("{}/api/theme", base))
        .json(&json!({ "mode": "dark" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_theme_toggles_are_not_lost() {
    let tmp = TempDir::new().unwrap();
    let base = start_server(&tmp).await;
    let client = reqwest::Client::new();

    for round in 0..10 {
        let mut handles = Vec::new();
        for _ in 0..10 {
            let client = client.clone();
            let url = format!("{}/api/theme/toggle", base);
            handles.push(tokio::spawn(async move {
                client.post(url).send().await.unwrap().status()
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), 200);
        }

        let body: Value = client
            .get(format!("{}/api/theme", base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["dark_mode"], false, "round {} lost a toggle", round);
    }
}

#[tokio::test]
async fn test_unparseable_data_file_loads_empty() {
    let tmp = TempDir::new().unwrap();
    let base = start_server_with_data(&tmp, "[{").await;

    let body: Value = reqwest::get(format!("{}/api/search", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["is_loading"], false);
    assert_eq!(body["total_entries"], 0);
    assert_eq!(body["status"]["kind"], "empty");
}

#[tokio::test]
async fn test_unknown_route() {
    let tmp = TempDir::new().unwrap();
    let base = start_server(&tmp).await;

    let resp = reqwest::get(format!("{}/api/nope", base)).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_missing_data_file_fails_fast() {
    let tmp = TempDir::new().unwrap();
    let cfg = test_config_with_port(&tmp, find_free_port());
    std::fs::remove_file(&cfg.data.path).unwrap();

    let err = run_server(&cfg).await.unwrap_err();
    assert!(err.to_string().contains("Data file not found"));
}
