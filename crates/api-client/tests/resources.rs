//! Entity endpoint clients against a mock server

mod common;

use common::{book_json, envelope, member_json};
use library_admin_core::model::{CreateLoan, LoanParty, UpdateBook, UpdateMember};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn book_list_wrapped_and_bare_are_identical() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/book/get/all"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [book_json(1, "Bumi Manusia")] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/book/get/all"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([book_json(1, "Bumi Manusia")])))
        .mount(&server)
        .await;

    let books = common::client(&server).books();
    let wrapped = books.list(0).await.unwrap();
    let bare = books.list(1).await.unwrap();

    assert_eq!(wrapped, bare);
    assert_eq!(wrapped.len(), 1);
    assert_eq!(wrapped[0].book_name, "Bumi Manusia");
}

#[tokio::test]
async fn book_list_without_data_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/book/get/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "empty" })))
        .mount(&server)
        .await;

    assert!(common::client(&server).books().list(4).await.unwrap().is_empty());
}

#[tokio::test]
async fn book_update_sends_only_given_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/book/edit/7"))
        .and(body_json(json!({ "stock": 10 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": book_json(7, "Arok Dedes") })))
        .expect(1)
        .mount(&server)
        .await;

    let update = UpdateBook {
        stock: Some(10),
        ..UpdateBook::default()
    };
    let book = common::client(&server)
        .books()
        .update(7, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(book.id_book, 7);
}

#[tokio::test]
async fn book_delete_accepts_any_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/book/delete/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .expect(1)
        .mount(&server)
        .await;

    common::client(&server).books().delete(7).await.unwrap();
}

#[tokio::test]
async fn member_envelope_is_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/member/get/all"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!([member_json(1, "Sari"), member_json(2, "Bayu")]))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/member/get/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(member_json(2, "Bayu"))))
        .mount(&server)
        .await;

    let members = common::client(&server).members();
    let page = members.list(2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[1].member_name, "Bayu");

    let one = members.get(2).await.unwrap().unwrap();
    assert_eq!(one.id_member, 2);
}

#[tokio::test]
async fn envelope_without_data_is_empty_or_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/employe/get/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "OK" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/employe/get/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&server)
        .await;

    let employees = common::client(&server).employees();
    assert!(employees.list(0).await.unwrap().is_empty());
    assert_eq!(employees.get(5).await.unwrap(), None);
}

#[tokio::test]
async fn member_update_passes_partial_payload() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/member/edit/3"))
        .and(body_json(json!({ "level": "gold" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let update = UpdateMember {
        level: Some("gold".to_string()),
        ..UpdateMember::default()
    };
    let updated = common::client(&server)
        .members()
        .update(3, &update)
        .await
        .unwrap();
    assert_eq!(updated, None);
}

#[tokio::test]
async fn loan_read_shapes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/loan/get/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {
                "id_loan": 1,
                "book": { "id_book": 4, "book_name": "Cantik Itu Luka" },
                "member": "Sari",
                "loan_date": "2025-05-01",
                "due_date": "2025-05-08"
            },
            {
                "id_loan": 2,
                "id_book": 5,
                "id_member": 1,
                "loan_date": "2025-04-01",
                "due_date": "2025-04-08",
                "return_date": "2025-04-07"
            }
        ]))))
        .mount(&server)
        .await;

    let loans = common::client(&server).loans().list(0).await.unwrap();
    assert_eq!(loans.len(), 2);

    assert_eq!(loans[0].book_label(), "Cantik Itu Luka");
    assert_eq!(loans[0].book_id(), Some(4));
    assert_eq!(loans[0].member, Some(LoanParty::Label("Sari".to_string())));
    assert!(loans[0].is_on_loan());

    assert_eq!(loans[1].book_label(), "Book");
    assert_eq!(loans[1].member_id(), Some(1));
    assert!(!loans[1].is_on_loan());
}

#[tokio::test]
async fn loan_create_posts_references() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/loan/add"))
        .and(body_json(json!({
            "id_book": 4,
            "id_member": 1,
            "loan_date": "2025-05-01",
            "due_date": "2025-05-08"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(json!({
            "id_loan": 11,
            "id_book": 4,
            "id_member": 1,
            "loan_date": "2025-05-01",
            "due_date": "2025-05-08"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let payload = CreateLoan {
        id_book: 4,
        id_member: 1,
        loan_date: "2025-05-01".to_string(),
        due_date: "2025-05-08".to_string(),
        return_date: None,
    };
    let loan = common::client(&server)
        .loans()
        .create(&payload)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loan.id_loan, 11);
}

#[tokio::test]
async fn loan_references_walk_every_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/book/get/all"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::books_json(1..=6)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/book/get/all"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::books_json(7..=8)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/member/get/all"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([member_json(1, "Sari")]))))
        .mount(&server)
        .await;

    let (books, members) = common::client(&server).loans().references().await.unwrap();
    assert_eq!(books.len(), 8);
    assert_eq!(members.len(), 1);
}

#[tokio::test]
async fn member_list_without_envelope_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/member/get/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([member_json(1, "Sari")])))
        .mount(&server)
        .await;

    let members = common::client(&server).members().list(0).await.unwrap();
    assert!(members.is_empty());
}

#[tokio::test]
async fn null_text_fields_decode_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/member/get/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {
                "id_member": 1,
                "member_name": "Sari",
                "age": null,
                "phone_number": null,
                "email": null,
                "level": null
            },
            member_json(2, "Bayu")
        ]))))
        .mount(&server)
        .await;

    let members = common::client(&server).members().list(0).await.unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].email, "");
    assert_eq!(members[0].age, 0);
    assert_eq!(members[1].email, "member@example.com");
}
