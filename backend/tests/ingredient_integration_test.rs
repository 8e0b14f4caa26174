//! Integration tests for ingredient endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_ingredient_success() {
    let app = common::TestApp::new().await;

    let body = json!({
        "name": "Tomato",
        "type": "vegetable"
    });

    let (status, response) = app.post("/api/v1/ingredients", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["name"], "Tomato");
    assert_eq!(response["type"], "vegetable");
    assert!(response["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_create_ingredient_empty_name_is_rejected() {
    let app = common::TestApp::new().await;

    let body = json!({
        "name": "  ",
        "type": "vegetable"
    });

    let (status, _) = app.post("/api/v1/ingredients", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_ingredient_by_id() {
    let app = common::TestApp::new().await;

    let body = json!({ "name": "Basil", "type": "herb" });
    let (_, created) = app.post("/api/v1/ingredients", &body.to_string()).await;
    let created: serde_json::Value = serde_json::from_str(&created).unwrap();
    let id = created["id"].as_i64().unwrap();

    let (status, response) = app.get(&format!("/api/v1/ingredients/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["name"], "Basil");
    assert_eq!(response["type"], "herb");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/ingredients/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_ingredient_returns_not_found() {
    let app = common::TestApp::new().await;

    let (status, response) = app.get("/api/v1/ingredients/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["message"], "entity not found");
}

#[tokio::test]
async fn test_list_ingredients_with_filters() {
    let app = common::TestApp::new().await;

    for (name, kind) in [
        ("Tomato", "vegetable"),
        ("Cucumber", "vegetable"),
        ("Basil", "herb"),
    ] {
        let body = json!({ "name": name, "type": kind });
        app.post("/api/v1/ingredients", &body.to_string()).await;
    }

    // Unfiltered list returns everything
    let (status, response) = app.get("/api/v1/ingredients").await;
    assert_eq!(status, StatusCode::OK);
    let all: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(all.len(), 3);

    // Filter by type
    let (status, response) = app.get("/api/v1/ingredients?type=vegetable").await;
    assert_eq!(status, StatusCode::OK);
    let vegetables: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(vegetables.len(), 2);

    // Filter by name and type together
    let (status, response) = app
        .get("/api/v1/ingredients?name=Basil&type=herb")
        .await;
    assert_eq!(status, StatusCode::OK);
    let herbs: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(herbs.len(), 1);
    assert_eq!(herbs[0]["name"], "Basil");
}

#[tokio::test]
async fn test_count_ingredients() {
    let app = common::TestApp::new().await;

    for (name, kind) in [("Salt", "seasoning"), ("Pepper", "seasoning")] {
        let body = json!({ "name": name, "type": kind });
        app.post("/api/v1/ingredients", &body.to_string()).await;
    }

    let (status, response) = app.get("/api/v1/ingredients/count").await;
    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["count"], 2);

    let (_, response) = app.get("/api/v1/ingredients/count?name=Salt").await;
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["count"], 1);
}

#[tokio::test]
async fn test_patch_ingredient_partial_update() {
    let app = common::TestApp::new().await;

    let body = json!({ "name": "Corriander", "type": "herb" });
    let (_, created) = app.post("/api/v1/ingredients", &body.to_string()).await;
    let created: serde_json::Value = serde_json::from_str(&created).unwrap();
    let id = created["id"].as_i64().unwrap();

    // Only the name changes; the type field is absent and must survive
    let patch = json!({ "name": "Coriander" });
    let (status, response) = app
        .patch(&format!("/api/v1/ingredients/{id}"), &patch.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["name"], "Coriander");
    assert_eq!(response["type"], "herb");
}

#[tokio::test]
async fn test_patch_missing_ingredient_returns_not_found() {
    let app = common::TestApp::new().await;

    let patch = json!({ "name": "Nothing" });
    let (status, _) = app
        .patch("/api/v1/ingredients/4242", &patch.to_string())
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_ingredient() {
    let app = common::TestApp::new().await;

    let body = json!({ "name": "Thyme", "type": "herb" });
    let (_, created) = app.post("/api/v1/ingredients", &body.to_string()).await;
    let created: serde_json::Value = serde_json::from_str(&created).unwrap();
    let id = created["id"].as_i64().unwrap();

    let (status, _) = app.delete(&format!("/api/v1/ingredients/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/api/v1/ingredients/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again reports not found
    let (status, _) = app.delete(&format!("/api/v1/ingredients/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
