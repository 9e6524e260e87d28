//! End-to-end tests of the HTTP surface
//!
//! Each test gets its own server on its own port with its own database.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};

use super::common::{TestServer, client};

#[test]
fn test_cli_help() {
    Command::cargo_bin("choreboard-server")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local chore API and web UI"));
}

#[test]
fn test_health_endpoint() {
    let server = TestServer::start();
    let resp = client().get(server.url("/api/health")).send().unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().unwrap();
    assert_eq!(body["status"], "ok");
}

#[test]
fn test_serves_embedded_ui() {
    let server = TestServer::start();
    let client = client();

    let resp = client.get(server.url("/")).send().unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["content-type"].to_str().unwrap().contains("text/html"));
    assert!(resp.text().unwrap().contains("Choreboard"));

    let resp = client.get(server.url("/style.css")).send().unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["content-type"].to_str().unwrap().contains("text/css"));

    let resp = client.get(server.url("/no-such-file.txt")).send().unwrap();
    assert_eq!(resp.status(), 404);
}

#[test]
fn test_crud_flow() {
    let server = TestServer::start();
    let client = client();

    // Empty list to start
    let resp = client.get(server.url("/api/chores")).send().unwrap();
    assert_eq!(resp.status(), 200);
    let chores: Value = resp.json().unwrap();
    assert_eq!(chores.as_array().unwrap().len(), 0);

    // Create
    let resp = client
        .post(server.url("/api/chores"))
        .json(&json!({"title": "Wash car", "priority": "high"}))
        .send()
        .unwrap();
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().unwrap();
    assert_eq!(created["title"], "Wash car");
    assert_eq!(created["priority"], "high");
    assert_eq!(created["completed"], false);
    let id = created["id"].as_i64().unwrap();

    // Get by id
    let resp = client.get(server.url(&format!("/api/chores/{id}"))).send().unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().unwrap();
    assert_eq!(fetched["title"], "Wash car");

    // Toggle completed
    let resp = client
        .put(server.url(&format!("/api/chores/{id}")))
        .json(&json!({"completed": true}))
        .send()
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().unwrap();
    assert_eq!(updated["completed"], true);
    assert!(
        updated["updated_at"].as_str().unwrap() > updated["created_at"].as_str().unwrap(),
        "updated_at must move forward on mutation"
    );

    // Delete, then the id is gone
    let resp = client.delete(server.url(&format!("/api/chores/{id}"))).send().unwrap();
    assert_eq!(resp.status(), 200);
    let resp = client.get(server.url(&format!("/api/chores/{id}"))).send().unwrap();
    assert_eq!(resp.status(), 404);
    let resp = client.delete(server.url(&format!("/api/chores/{id}"))).send().unwrap();
    assert_eq!(resp.status(), 404);
}

#[test]
fn test_validation_errors() {
    let server = TestServer::start();
    let client = client();

    // Empty title
    let resp = client
        .post(server.url("/api/chores"))
        .json(&json!({"title": "   "}))
        .send()
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().unwrap();
    assert!(body["error"].as_str().unwrap().contains("title"));

    // Invalid priority, not coerced
    let resp = client
        .post(server.url("/api/chores"))
        .json(&json!({"title": "Dishes", "priority": "urgent"}))
        .send()
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().unwrap();
    assert!(body["error"].as_str().unwrap().contains("priority"));

    // Malformed JSON body
    let resp = client
        .post(server.url("/api/chores"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Failed creates inserted nothing
    let resp = client.get(server.url("/api/chores")).send().unwrap();
    let chores: Value = resp.json().unwrap();
    assert_eq!(chores.as_array().unwrap().len(), 0);
}

#[test]
fn test_not_found_routes() {
    let server = TestServer::start();
    let client = client();

    // Unknown id
    let resp = client.get(server.url("/api/chores/12345")).send().unwrap();
    assert_eq!(resp.status(), 404);

    // Non-numeric id can never name a chore
    let resp = client.get(server.url("/api/chores/abc")).send().unwrap();
    assert_eq!(resp.status(), 404);

    // Unknown API route
    let resp = client.get(server.url("/api/leaderboard")).send().unwrap();
    assert_eq!(resp.status(), 404);
}

#[test]
fn test_list_is_ordered_and_ids_increase() {
    let server = TestServer::start();
    let client = client();

    let mut ids = Vec::new();
    for title in ["one", "two", "three"] {
        let resp = client
            .post(server.url("/api/chores"))
            .json(&json!({"title": title}))
            .send()
            .unwrap();
        assert_eq!(resp.status(), 201);
        let chore: Value = resp.json().unwrap();
        ids.push(chore["id"].as_i64().unwrap());
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids strictly increasing");

    let resp = client.get(server.url("/api/chores")).send().unwrap();
    let chores: Value = resp.json().unwrap();
    let listed: Vec<i64> = chores
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, ids, "list order is id ascending");
}
