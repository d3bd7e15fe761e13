//! Common test utilities for glens-gitlab integration tests.

use serde_json::{json, Value};
use wiremock::MockServer;

use glens_gitlab::{Connection, GitlabClient};

pub const TEST_TOKEN: &str = "glpat-test-token";

/// Builds a client pointed at a mock server.
pub fn test_client(server: &MockServer, group_id: &str) -> GitlabClient {
    let conn = Connection::new(&server.uri(), TEST_TOKEN, group_id)
        .expect("test connection settings are valid");
    GitlabClient::new(conn).expect("client builds")
}

/// Test data factory for group payloads.
pub fn group_json(id: u64, name: &str, path: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "path": path,
        "web_url": format!("https://gitlab.example.com/groups/{path}")
    })
}

/// Test data factory for member payloads.
pub fn member_json(id: u64, name: &str, username: &str, access_level: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "username": username,
        "avatar_url": format!("https://gitlab.example.com/avatars/{id}.png"),
        "web_url": format!("https://gitlab.example.com/{username}"),
        "access_level": access_level,
        "membership_state": "active"
    })
}

/// Test data factory for project payloads.
pub fn project_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "name_with_namespace": format!("acme / {name}")
    })
}

/// Test data factory for full profile payloads.
pub fn profile_json(id: u64, name: &str, username: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "username": username,
        "web_url": format!("https://gitlab.example.com/{username}"),
        "state": "active",
        "bot": false,
        "created_at": "2021-03-04T05:06:07.000Z",
        "bio": "systems tinkerer",
        "job_title": "Engineer",
        "location": "London",
        "pronouns": "they/them",
        "public_email": format!("{username}@example.com"),
        "followers": 3,
        "following": 5
    })
}
