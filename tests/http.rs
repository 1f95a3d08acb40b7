use books_query::auth::{AUTHN_HEADER, AUTHZ_HEADER};
use books_query::store::BookStore;
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn spawn_server(store: BookStore) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, books_query::app(store)).await.unwrap();
    });
    format!("http://{addr}/")
}

async fn post(url: &str, query: &str) -> Value {
    reqwest::Client::new()
        .post(url)
        .header(AUTHN_HEADER, "Bearer placeholder")
        .header(AUTHZ_HEADER, "reader")
        .json(&json!({ "query": query }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn lists_seed_books_over_http() {
    let url = spawn_server(BookStore::seeded()).await;
    let body = post(&url, "{ books { id title author } }").await;
    assert_eq!(
        body,
        json!({
            "data": {
                "books": [
                    { "id": "1", "title": "The Awakening", "author": "Kate Chopin" },
                    { "id": "2", "title": "City of Glass", "author": "Paul Auster" }
                ]
            }
        })
    );
}

#[tokio::test]
async fn mutations_are_visible_to_later_requests() {
    let store = BookStore::seeded();
    let url = spawn_server(store.clone()).await;

    let body = post(
        &url,
        r#"mutation { addBook(payload: { title: "Ghosts", author: "Paul Auster" }) { id } }"#,
    )
    .await;
    assert_eq!(body, json!({ "data": { "addBook": { "id": "3" } } }));

    let body = post(&url, r#"{ book(bookId: "3") { title author } }"#).await;
    assert_eq!(
        body,
        json!({ "data": { "book": { "title": "Ghosts", "author": "Paul Auster" } } })
    );
    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn update_of_unknown_book_reports_not_found() {
    let store = BookStore::seeded();
    let url = spawn_server(store.clone()).await;

    let body = post(
        &url,
        r#"mutation { updateBook(bookId: "9999", payload: { title: "a", author: "b" }) { id } }"#,
    )
    .await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["message"], "Book not found: 9999");
    assert_eq!(errors[0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(store.list(), books_query::store::seed_books());
}

#[tokio::test]
async fn serves_graphiql_page() {
    let url = spawn_server(BookStore::seeded()).await;
    let response = reqwest::get(format!("{url}graphiql")).await.unwrap();
    assert!(response.status().is_success());
    let html = response.text().await.unwrap();
    assert!(html.to_lowercase().contains("graphiql"));
}
