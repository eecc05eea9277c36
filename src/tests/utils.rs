use crate::db::{LocalStorage, MemoryStore};
use crate::router::handle;
use crate::state::App;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::Arc;

pub const USER: &str = "user1";
pub const PASSWORD: &str = "Test%402025a";

/// A fresh app over an empty in-memory store.
pub fn init_test_app() -> (App, LocalStorage) {
    let storage = LocalStorage::new(Arc::new(MemoryStore::new()));
    (App::new(storage.clone()), storage)
}

pub fn logged_in_app() -> (App, LocalStorage) {
    let (app, storage) = init_test_app();
    let resp = post_form(&app, "/login", &format!("username={USER}&password={PASSWORD}"));
    assert_eq!(resp.status(), 303);
    (app, storage)
}

pub fn get(app: &App, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    handle(req, app).expect("Failed to handle request")
}

pub fn post_form(app: &App, uri: &str, body: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap();

    handle(req, app).expect("Failed to handle request")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Submit the add-form; `fields` is an urlencoded fragment.
pub fn add_offer(app: &App, fields: &str) -> Response {
    post_form(app, "/offers", &format!("date=2025-04-01&{fields}"))
}
