//! Backend payloads as the server sends them (snake_case keys).

use serde_json::{json, Value};
use termfolio::adapters::{MockHttpClient, MockResponse};
use termfolio::traits::Method;

use super::url;

pub fn profile_json() -> Value {
    json!({
        "name": "Ada Lovelace",
        "title": "Systems engineer",
        "bio": "Writes compilers.",
        "email": "ada@example.com",
        "github_url": "https://github.com/ada"
    })
}

pub fn projects_json() -> Value {
    json!([
        {
            "id": 1,
            "title": "Difference engine",
            "description": "Mechanical tabulation.",
            "tech_stack": ["brass", "steam"],
            "repo_url": "https://github.com/ada/engine",
            "featured": true
        },
        {"id": 2, "title": "Notes", "featured": false}
    ])
}

pub fn experiences_json() -> Value {
    json!([
        {"company": "Analytical Co", "role": "Engineer", "start_date": "2019-01-01"},
        {"company": "Engines Ltd", "role": "Lead", "start_date": "2022-06-01"}
    ])
}

pub fn posts_json() -> Value {
    json!([
        {
            "title": "Published",
            "content": "Hello **world**",
            "published": true,
            "published_at": "2024-02-01T10:00:00Z"
        },
        {"title": "Draft", "content": "wip", "published": false}
    ])
}

pub fn skills_json() -> Value {
    json!([
        {"name": "Rust", "category": "languages", "level": 5},
        {"name": "Lisp", "category": "languages"}
    ])
}

pub fn messages_json() -> Value {
    json!([
        {"id": 7, "name": "Bob", "email": "bob@example.com", "message": "Hi", "read": false}
    ])
}

pub fn login_json(username: &str) -> Value {
    json!({"token": "tok-123", "user": {"username": username, "is_admin": true}})
}

/// Every public collection plus the profile.
pub fn script_public_content(http: &MockHttpClient) {
    http.on(Method::Get, url("profile"), MockResponse::json(200, profile_json()));
    http.on(Method::Get, url("projects"), MockResponse::json(200, projects_json()));
    http.on(
        Method::Get,
        url("experiences"),
        MockResponse::json(200, experiences_json()),
    );
    http.on(Method::Get, url("posts"), MockResponse::json(200, posts_json()));
    http.on(Method::Get, url("skills"), MockResponse::json(200, skills_json()));
}

pub fn script_admin_content(http: &MockHttpClient) {
    http.on(
        Method::Get,
        url("admin/messages"),
        MockResponse::json(200, messages_json()),
    );
}
