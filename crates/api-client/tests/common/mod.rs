//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use library_admin_api_client::{ClientConfig, LibraryClient, StorageConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const BUCKET: &str = "library";

/// Client pointed at the mock server, with storage on the same server
pub fn client(server: &MockServer) -> LibraryClient {
    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_storage(StorageConfig::new(server.uri(), "anon-key", BUCKET));
    LibraryClient::with_config(config).expect("valid test config")
}

pub fn book_json(id: i64, name: &str) -> Value {
    json!({
        "id_book": id,
        "book_name": name,
        "total_page": "320",
        "publisher": "Gramedia",
        "author": "Pramoedya Ananta Toer",
        "release_year": 1980,
        "stock": 3
    })
}

pub fn books_json(ids: impl IntoIterator<Item = i64>) -> Vec<Value> {
    ids.into_iter()
        .map(|id| book_json(id, &format!("Book {id}")))
        .collect()
}

pub fn member_json(id: i64, name: &str) -> Value {
    json!({
        "id_member": id,
        "member_name": name,
        "age": 27,
        "phone_number": "0812",
        "email": "member@example.com",
        "level": "basic"
    })
}

pub fn envelope(data: Value) -> Value {
    json!({
        "status": "OK",
        "message": "success",
        "data": data,
        "response_code": 200,
        "timestamp": "2025-05-01T08:00:00Z"
    })
}
