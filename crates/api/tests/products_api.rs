//! HTTP-level integration tests for the `/api/produtos` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_category, create_product, delete_auth, get_auth,
    post_json_auth, put_json_auth,
};
use serde_json::json;

fn product_body(category_id: i64) -> serde_json::Value {
    json!({
        "nome": "Suco",
        "descricao": "Suco de laranja",
        "preco": 4.5,
        "imagemUrl": "suco.jpg",
        "estoque": 10,
        "categoriaId": category_id,
    })
}

#[tokio::test]
async fn create_returns_201_with_location_and_stamped_date() {
    let app = build_test_app();
    let category_id = create_category(app.clone(), "Bebidas").await;

    let response = post_json_auth(app.clone(), "/api/produtos", product_body(category_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response.headers().get("location").unwrap().to_str().unwrap().to_string();

    let created = body_json(response).await;
    assert_eq!(location, format!("/api/produtos/{}", created["produtoId"]));
    assert_eq!(created["preco"], 4.5);
    assert!(created["dataCadastro"].is_string());

    let response = get_auth(app, &location).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["nome"], "Suco");
}

#[tokio::test]
async fn create_with_unknown_category_returns_400() {
    let app = build_test_app();

    let response = post_json_auth(app.clone(), "/api/produtos", product_body(99)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let response = get_auth(app, "/api/produtos").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_with_negative_stock_returns_400() {
    let app = build_test_app();
    let category_id = create_category(app.clone(), "Bebidas").await;

    let mut body = product_body(category_id);
    body["estoque"] = json!(-1);
    let response = post_json_auth(app, "/api/produtos", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_with_sub_cent_price_returns_400() {
    let app = build_test_app();
    let category_id = create_category(app.clone(), "Bebidas").await;

    let mut body = product_body(category_id);
    body["preco"] = json!(4.567);
    let response = post_json_auth(app.clone(), "/api/produtos", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = get_auth(app, "/api/produtos").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn get_unknown_product_returns_404() {
    let app = build_test_app();
    let response = get_auth(app, "/api/produtos/5").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lowest_price_orders_ascending() {
    let app = build_test_app();
    let category_id = create_category(app.clone(), "Bebidas").await;
    create_product(app.clone(), "Caro", 30.0, category_id).await;
    create_product(app.clone(), "Barato", 1.25, category_id).await;
    create_product(app.clone(), "Medio", 9.9, category_id).await;

    let response = get_auth(app, "/api/produtos/menorpreco").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["nome"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Barato", "Medio", "Caro"]);
}

#[tokio::test]
async fn list_is_paginated() {
    let app = build_test_app();
    let category_id = create_category(app.clone(), "Bebidas").await;
    for i in 0..3 {
        create_product(app.clone(), &format!("P{i}"), 1.0, category_id).await;
    }

    let response = get_auth(app, "/api/produtos?pageSize=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let header = response.headers().get("x-pagination").unwrap().to_str().unwrap();
    let meta: serde_json::Value = serde_json::from_str(header).unwrap();
    assert_eq!(meta["TotalCount"], 3);
    assert_eq!(meta["TotalPages"], 2);
    assert_eq!(meta["HasNext"], true);

    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_keeps_registration_date_when_omitted() {
    let app = build_test_app();
    let category_id = create_category(app.clone(), "Bebidas").await;

    let response = post_json_auth(app.clone(), "/api/produtos", product_body(category_id)).await;
    let created = body_json(response).await;
    let id = created["produtoId"].as_i64().unwrap();

    let mut body = product_body(category_id);
    body["produtoId"] = json!(id);
    body["preco"] = json!(6.0);
    let response = put_json_auth(app, &format!("/api/produtos/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["preco"], 6.0);
    assert_eq!(updated["dataCadastro"], created["dataCadastro"]);
}

#[tokio::test]
async fn update_with_mismatched_id_returns_400() {
    let app = build_test_app();
    let category_id = create_category(app.clone(), "Bebidas").await;
    let id = create_product(app.clone(), "Suco", 4.5, category_id).await;

    let mut body = product_body(category_id);
    body["produtoId"] = json!(id + 10);
    let response = put_json_auth(app, &format!("/api/produtos/{id}"), body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_moving_to_unknown_category_returns_400() {
    let app = build_test_app();
    let category_id = create_category(app.clone(), "Bebidas").await;
    let id = create_product(app.clone(), "Suco", 4.5, category_id).await;

    let mut body = product_body(77);
    body["produtoId"] = json!(id);
    let response = put_json_auth(app.clone(), &format!("/api/produtos/{id}"), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_auth(app, &format!("/api/produtos/{id}")).await;
    assert_eq!(body_json(response).await["categoriaId"], category_id);
}

#[tokio::test]
async fn delete_returns_entity_then_404() {
    let app = build_test_app();
    let category_id = create_category(app.clone(), "Bebidas").await;
    let id = create_product(app.clone(), "Suco", 4.5, category_id).await;
    let uri = format!("/api/produtos/{id}");

    let response = delete_auth(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["produtoId"], id);

    let response = delete_auth(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
