use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use quizbar::api::routes;
use quizbar::auth::AuthGate;
use quizbar::config::{AuthConfig, TokenGrant};
use quizbar::db::Database;

const MANAGER_TOKEN: &str = "manager-token";
const CUSTOMER_TOKEN: &str = "customer-token";

fn test_app() -> Router {
    let database = Database::new_in_memory();
    database.init_schema().expect("init schema");

    let gate = AuthGate::from_config(&AuthConfig {
        tokens: vec![
            TokenGrant {
                token: MANAGER_TOKEN.to_string(),
                permissions: vec![
                    "get:drinkdetails".to_string(),
                    "post:drinks".to_string(),
                    "patch:drinks".to_string(),
                    "delete:drinks".to_string(),
                ],
            },
            TokenGrant {
                token: CUSTOMER_TOKEN.to_string(),
                permissions: vec!["get:drinkdetails".to_string()],
            },
        ],
    });

    routes::app(database, gate)
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse body")
}

async fn create_drink(app: &Router, token: &str, title: &str) -> axum::response::Response {
    let payload = json!({
        "title": title,
        "recipe": [
            {"name": "espresso", "color": "brown", "parts": 1},
            {"name": "steamed milk", "color": "white", "parts": 3}
        ]
    });

    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/drinks")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, bearer(token))
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn empty_menu_is_not_found() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/drinks").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(404));
    assert_eq!(body["message"], json!("Resource not found"));
}

#[tokio::test]
async fn mutation_requires_credentials() {
    let app = test_app();

    let payload = json!({"title": "Cortado", "recipe": []});
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/drinks")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));

    let response = create_drink(&app, CUSTOMER_TOKEN, "Cortado").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn created_drink_appears_in_detail_listing_once() {
    let app = test_app();

    let response = create_drink(&app, MANAGER_TOKEN, "Latte").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["drinks"][0]["title"], json!("Latte"));
    assert_eq!(body["drinks"][0]["recipe"][0]["name"], json!("espresso"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/drinks-detail")
                .header(header::AUTHORIZATION, bearer(CUSTOMER_TOKEN))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let drinks = body["drinks"].as_array().unwrap();
    let lattes = drinks
        .iter()
        .filter(|drink| drink["title"] == json!("Latte"))
        .count();
    assert_eq!(lattes, 1);

    // The public listing keeps color and parts but strips ingredient names.
    let response = app
        .oneshot(Request::builder().uri("/drinks").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let ingredient = &body["drinks"][0]["recipe"][0];
    assert_eq!(ingredient["color"], json!("brown"));
    assert_eq!(ingredient["parts"], json!(1));
    assert!(ingredient.get("name").is_none());
}

#[tokio::test]
async fn missing_body_is_a_bad_request() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/drinks")
                .header(header::AUTHORIZATION, bearer(MANAGER_TOKEN))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("bad request"));
}

#[tokio::test]
async fn duplicate_title_is_unprocessable() {
    let app = test_app();

    let response = create_drink(&app, MANAGER_TOKEN, "Flat White").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = create_drink(&app, MANAGER_TOKEN, "Flat White").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn patch_renames_and_missing_ids_are_not_found() {
    let app = test_app();

    let response = create_drink(&app, MANAGER_TOKEN, "Mocha").await;
    let body = body_json(response).await;
    let drink_id = body["drinks"][0]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/drinks/{drink_id}"))
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, bearer(MANAGER_TOKEN))
                .body(Body::from(json!({"title": "Iced Mocha"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["drinks"][0]["title"], json!("Iced Mocha"));

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/drinks/999")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, bearer(MANAGER_TOKEN))
                .body(Body::from(json!({"title": "Ghost"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_row_and_rejects_unknown_ids() {
    let app = test_app();

    let response = create_drink(&app, MANAGER_TOKEN, "Espresso").await;
    let body = body_json(response).await;
    let drink_id = body["drinks"][0]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/drinks/{drink_id}"))
                .header(header::AUTHORIZATION, bearer(MANAGER_TOKEN))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["deleted"], json!(drink_id));

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/drinks/{drink_id}"))
                .header(header::AUTHORIZATION, bearer(MANAGER_TOKEN))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
