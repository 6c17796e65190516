//! `ListController` driving the book endpoints of a mock server

mod common;

use library_admin_core::list::{DeleteOutcome, ListController, LoadStatus};
use library_admin_core::model::CreateBook;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, page: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/book/get/all"))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn pages_through_books() {
    let server = MockServer::start().await;
    mount_page(&server, "0", json!(common::books_json(1..=6))).await;
    mount_page(&server, "1", json!({ "data": common::books_json(7..=8) })).await;

    let mut books = ListController::new(common::client(&server).books());
    books.mount().await;

    assert_eq!(books.status(), &LoadStatus::Loaded);
    assert_eq!(books.items().len(), 6);
    assert!(books.has_next());
    assert!(!books.has_prev());

    assert!(books.next_page().await);
    assert_eq!(books.page(), 1);
    assert_eq!(books.items().len(), 2);
    assert!(!books.has_next());
    assert!(!books.next_page().await);

    assert!(books.prev_page().await);
    assert_eq!(books.page(), 0);
    assert!(!books.prev_page().await);
}

#[tokio::test]
async fn failed_load_keeps_previous_items() {
    let server = MockServer::start().await;
    mount_page(&server, "0", json!(common::books_json(1..=6))).await;
    Mock::given(method("GET"))
        .and(path("/book/get/all"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "database offline" })))
        .mount(&server)
        .await;

    let mut books = ListController::new(common::client(&server).books());
    books.mount().await;
    books.next_page().await;

    assert_eq!(books.error(), Some("database offline"));
    assert!(!books.is_loading());
    assert_eq!(books.items().len(), 6);
}

#[tokio::test]
async fn create_reloads_current_page() {
    let server = MockServer::start().await;
    mount_page(&server, "0", json!(common::books_json(1..=2))).await;
    Mock::given(method("POST"))
        .and(path("/book/add"))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::book_json(3, "Saman")))
        .expect(1)
        .mount(&server)
        .await;

    let mut books = ListController::new(common::client(&server).books());
    books.mount().await;

    let payload = CreateBook {
        book_name: "Saman".to_string(),
        total_page: "200".to_string(),
        publisher: "KPG".to_string(),
        author: "Ayu Utami".to_string(),
        release_year: 1998,
        stock: 1,
        cover: None,
    };
    let created = books.create(&payload).await.unwrap().unwrap();
    assert_eq!(created.id_book, 3);

    let list_calls = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/book/get/all")
        .count();
    assert_eq!(list_calls, 2);
}

#[tokio::test]
async fn failed_create_does_not_reload() {
    let server = MockServer::start().await;
    mount_page(&server, "0", json!(common::books_json(1..=2))).await;
    Mock::given(method("POST"))
        .and(path("/book/add"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "message": "stock must be positive" })))
        .mount(&server)
        .await;

    let mut books = ListController::new(common::client(&server).books());
    books.mount().await;

    let payload = CreateBook {
        book_name: "Saman".to_string(),
        total_page: "200".to_string(),
        publisher: "KPG".to_string(),
        author: "Ayu Utami".to_string(),
        release_year: 1998,
        stock: -1,
        cover: None,
    };
    let err = books.create(&payload).await.unwrap_err();
    assert_eq!(err.to_string(), "stock must be positive");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let server = MockServer::start().await;
    mount_page(&server, "0", json!(common::books_json(1..=2))).await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let mut books = ListController::new(common::client(&server).books());
    books.mount().await;

    let outcome = books.remove(1, |_| false).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Cancelled);
}

#[tokio::test]
async fn confirmed_delete_reloads() {
    let server = MockServer::start().await;
    mount_page(&server, "0", json!(common::books_json(1..=2))).await;
    Mock::given(method("DELETE"))
        .and(path("/book/delete/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut books = ListController::new(common::client(&server).books());
    books.mount().await;

    let outcome = books.remove(2, |id| id == 2).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}
