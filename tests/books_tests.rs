mod common;

use common::TestApp;

#[tokio::test]
async fn test_create_book_appears_in_list_with_todays_date() {
    let app = TestApp::new().await;
    app.register("reader", "password").await;

    let id = app
        .create_book(
            &app.client,
            &serde_json::json!({
                "title": "Dom Casmurro",
                "author": "Machado de Assis",
                "year": 1899
            }),
        )
        .await;

    let response = app.client.get(app.url("/api/books")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    let books: serde_json::Value = response.json().await.unwrap();

    let books = books.as_array().unwrap();
    assert_eq!(books.len(), 1);

    let book = &books[0];
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    assert_eq!(book["id"].as_i64(), Some(id));
    assert_eq!(book["title"], "Dom Casmurro");
    assert_eq!(book["author"], "Machado de Assis");
    assert_eq!(book["publication_year"], 1899);
    assert_eq!(book["date_added"], today);
    assert_eq!(book["date_finished"], serde_json::Value::Null);
    assert_eq!(book["rating"], serde_json::Value::Null);
    assert_eq!(book["is_favorite"], false);
    assert_eq!(book["cover_icon"], "initial");
    assert_eq!(book["status"], "Reading");
}

#[tokio::test]
async fn test_create_book_missing_title_persists_nothing() {
    let app = TestApp::new().await;
    app.register("reader", "password").await;

    let response = app
        .client
        .post(app.url("/api/books"))
        .json(&serde_json::json!({ "author": "Someone" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = app
        .client
        .post(app.url("/api/books"))
        .json(&serde_json::json!({ "title": "   ", "author": "Someone" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let response = app.client.get(app.url("/api/books")).send().await.unwrap();
    let books: serde_json::Value = response.json().await.unwrap();
    assert_eq!(books.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_book_zero_year_and_rating_stored_as_null() {
    let app = TestApp::new().await;
    app.register("reader", "password").await;

    app.create_book(
        &app.client,
        &serde_json::json!({
            "title": "Untitled Draft",
            "author": "Anonymous",
            "year": 0,
            "rating": 0
        }),
    )
    .await;

    let response = app.client.get(app.url("/api/books")).send().await.unwrap();
    let books: serde_json::Value = response.json().await.unwrap();
    let book = &books.as_array().unwrap()[0];
    assert_eq!(book["publication_year"], serde_json::Value::Null);
    assert_eq!(book["rating"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_list_books_ordered_by_date_added_descending() {
    let app = TestApp::new().await;
    app.register("reader", "password").await;

    let old_id = app
        .create_book(
            &app.client,
            &serde_json::json!({ "title": "Old Read", "author": "A" }),
        )
        .await;
    app.create_book(
        &app.client,
        &serde_json::json!({ "title": "Fresh Read", "author": "B" }),
    )
    .await;

    // Backdate the first book; the API stamps creation dates itself
    sqlx::query("UPDATE books SET date_added = ? WHERE id = ?")
        .bind("2020-01-01")
        .bind(old_id)
        .execute(&app.pool)
        .await
        .unwrap();

    let response = app.client.get(app.url("/api/books")).send().await.unwrap();
    let books: serde_json::Value = response.json().await.unwrap();
    let titles: Vec<&str> = books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Fresh Read", "Old Read"]);
}

#[tokio::test]
async fn test_update_book_applies_only_present_fields() {
    let app = TestApp::new().await;
    app.register("reader", "password").await;

    let id = app
        .create_book(
            &app.client,
            &serde_json::json!({ "title": "The Hobbit", "author": "Tolkien", "rating": 3.5 }),
        )
        .await;

    let response = app
        .client
        .put(app.url(&format!("/api/books/{id}")))
        .json(&serde_json::json!({ "status": "Finished", "date_finished": "2025-06-01" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = app.client.get(app.url("/api/books")).send().await.unwrap();
    let books: serde_json::Value = response.json().await.unwrap();
    let book = &books.as_array().unwrap()[0];
    assert_eq!(book["status"], "Finished");
    assert_eq!(book["date_finished"], "2025-06-01");
    // Untouched fields keep their values
    assert_eq!(book["rating"], 3.5);
    assert_eq!(book["cover_icon"], "initial");
}

#[tokio::test]
async fn test_update_book_clears_fields_with_null_and_empty_string() {
    let app = TestApp::new().await;
    app.register("reader", "password").await;

    let id = app
        .create_book(
            &app.client,
            &serde_json::json!({ "title": "The Hobbit", "author": "Tolkien", "rating": 4.5 }),
        )
        .await;

    app.client
        .put(app.url(&format!("/api/books/{id}")))
        .json(&serde_json::json!({ "date_finished": "2025-06-01" }))
        .send()
        .await
        .unwrap();

    // Explicit null clears the rating; empty string clears the finish date
    let response = app
        .client
        .put(app.url(&format!("/api/books/{id}")))
        .json(&serde_json::json!({ "rating": null, "date_finished": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = app.client.get(app.url("/api/books")).send().await.unwrap();
    let books: serde_json::Value = response.json().await.unwrap();
    let book = &books.as_array().unwrap()[0];
    assert_eq!(book["rating"], serde_json::Value::Null);
    assert_eq!(book["date_finished"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_update_book_of_another_user_is_not_found() {
    let app = TestApp::new().await;
    app.register("owner", "password").await;

    let id = app
        .create_book(
            &app.client,
            &serde_json::json!({ "title": "Private Notes", "author": "Owner" }),
        )
        .await;

    let other = TestApp::build_client();
    app.register_with(&other, "intruder", "password").await;

    let response = other
        .put(app.url(&format!("/api/books/{id}")))
        .json(&serde_json::json!({ "status": "Stolen" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "NOT_FOUND");

    // The owner's book is untouched
    let response = app.client.get(app.url("/api/books")).send().await.unwrap();
    let books: serde_json::Value = response.json().await.unwrap();
    assert_eq!(books.as_array().unwrap()[0]["status"], "Reading");
}

#[tokio::test]
async fn test_update_missing_book_is_not_found() {
    let app = TestApp::new().await;
    app.register("reader", "password").await;

    let response = app
        .client
        .put(app.url("/api/books/9999"))
        .json(&serde_json::json!({ "status": "Finished" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_list_books_is_scoped_to_owner() {
    let app = TestApp::new().await;
    app.register("alice", "password").await;
    app.create_book(
        &app.client,
        &serde_json::json!({ "title": "Alice's Book", "author": "A" }),
    )
    .await;

    let bob = TestApp::build_client();
    app.register_with(&bob, "bob", "password").await;

    let response = bob.get(app.url("/api/books")).send().await.unwrap();
    let books: serde_json::Value = response.json().await.unwrap();
    assert_eq!(books.as_array().unwrap().len(), 0);
}
