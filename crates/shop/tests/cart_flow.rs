//! End-to-end cart and checkout behavior.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{
    body_json, body_string, form_post, get, insert_product, json_post, location, send,
    session_cookie, test_app,
};
use juniper_threads_core::ProductId;
use juniper_threads_shop::db::ProductRepository;

#[tokio::test]
async fn add_to_cart_accumulates_quantities() {
    let (app, pool) = test_app().await;
    let id = insert_product(&pool, "Summer T-Shirt", 19_99).await;

    let response = send(
        &app,
        form_post("/add-to-cart", &format!("product_id={id}&quantity=2"), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response).expect("session cookie set");
    assert_eq!(body_json(response).await["cart_count"], 2);

    let response = send(
        &app,
        form_post(
            "/add-to-cart",
            &format!("product_id={id}&quantity=3"),
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(body_json(response).await["cart_count"], 5);
}

#[tokio::test]
async fn add_to_cart_accepts_json_bodies() {
    let (app, pool) = test_app().await;
    let id = insert_product(&pool, "Summer T-Shirt", 19_99).await;

    let response = send(
        &app,
        json_post(
            "/add-to-cart",
            json!({ "product_id": id, "quantity": 2 }),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["cart_count"], 2);

    // String-typed fields are fine too
    let response = send(
        &app,
        json_post(
            "/add-to-cart",
            json!({ "product_id": id.to_string(), "quantity": "4" }),
            None,
        ),
    )
    .await;
    assert_eq!(body_json(response).await["cart_count"], 4);
}

#[tokio::test]
async fn add_to_cart_quantity_defaults_to_one() {
    let (app, pool) = test_app().await;
    let id = insert_product(&pool, "Summer T-Shirt", 19_99).await;

    let response = send(&app, form_post("/add-to-cart", &format!("product_id={id}"), None)).await;
    assert_eq!(body_json(response).await["cart_count"], 1);
}

#[tokio::test]
async fn add_to_cart_requires_product_id() {
    let (app, _pool) = test_app().await;

    let response = send(&app, form_post("/add-to-cart", "quantity=2", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "product_id required");

    // An empty value counts as missing
    let response = send(&app, form_post("/add-to-cart", "product_id=", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "product_id required");
}

#[tokio::test]
async fn add_to_cart_rejects_bad_product_ids() {
    let (app, _pool) = test_app().await;

    for raw in ["abc", "0", "-3", "1.5"] {
        let response = send(
            &app,
            form_post("/add-to-cart", &format!("product_id={raw}"), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id {raw:?}");
        assert_eq!(body_json(response).await["error"], "invalid product_id");
    }
}

#[tokio::test]
async fn add_to_cart_does_not_require_product_to_exist() {
    let (app, _pool) = test_app().await;

    // The store is empty; the line is accepted and later dropped on render
    let response = send(&app, form_post("/add-to-cart", "product_id=123", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["cart_count"], 1);
}

#[tokio::test]
async fn cart_update_overwrites_and_removes() {
    let (app, pool) = test_app().await;
    let id = insert_product(&pool, "Summer T-Shirt", 19_99).await;

    let response = send(
        &app,
        form_post("/add-to-cart", &format!("product_id={id}&quantity=2"), None),
    )
    .await;
    let cookie = session_cookie(&response).expect("session cookie set");

    // Overwrite (not increment) the stored quantity
    let response = send(
        &app,
        form_post(
            "/cart/update",
            &format!("product_id={id}&quantity=7"),
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/cart");

    let page = body_string(send(&app, get("/cart", Some(&cookie))).await).await;
    assert!(page.contains("value=\"7\""), "expected quantity 7 in: {page}");

    // Zero removes the line entirely
    let response = send(
        &app,
        form_post(
            "/cart/update",
            &format!("product_id={id}&quantity=0"),
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let page = body_string(send(&app, get("/cart", Some(&cookie))).await).await;
    assert!(page.contains("Your cart is empty"));
}

#[tokio::test]
async fn cart_update_on_absent_product_is_noop() {
    let (app, pool) = test_app().await;
    let id = insert_product(&pool, "Summer T-Shirt", 19_99).await;

    let response = send(
        &app,
        form_post("/add-to-cart", &format!("product_id={id}&quantity=2"), None),
    )
    .await;
    let cookie = session_cookie(&response).expect("session cookie set");

    // Never inserts a new line
    let response = send(
        &app,
        form_post("/cart/update", "product_id=9999&quantity=5", Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let page = body_string(send(&app, get("/", Some(&cookie))).await).await;
    assert!(page.contains("cart-badge\">2<"), "badge unchanged: {page}");
}

#[tokio::test]
async fn cart_clear_empties_the_cart() {
    let (app, pool) = test_app().await;
    let id = insert_product(&pool, "Summer T-Shirt", 19_99).await;

    let response = send(
        &app,
        form_post("/add-to-cart", &format!("product_id={id}&quantity=2"), None),
    )
    .await;
    let cookie = session_cookie(&response).expect("session cookie set");

    let response = send(&app, form_post("/cart/clear", "", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/cart");

    let page = body_string(send(&app, get("/", Some(&cookie))).await).await;
    assert!(page.contains("cart-badge\">0<"));
}

#[tokio::test]
async fn checkout_redirects_when_cart_is_empty() {
    let (app, _pool) = test_app().await;

    let response = send(&app, get("/checkout", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/cart");
}

#[tokio::test]
async fn checkout_totals_resolve_current_prices() {
    let (app, pool) = test_app().await;
    let shirt = insert_product(&pool, "Summer T-Shirt", 19_99).await;
    let jeans = insert_product(&pool, "Classic Denim Jeans", 49_99).await;

    let response = send(
        &app,
        form_post(
            "/add-to-cart",
            &format!("product_id={shirt}&quantity=2"),
            None,
        ),
    )
    .await;
    let cookie = session_cookie(&response).expect("session cookie set");
    send(
        &app,
        form_post(
            "/add-to-cart",
            &format!("product_id={jeans}&quantity=1"),
            Some(&cookie),
        ),
    )
    .await;

    let response = send(&app, get("/checkout", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("$89.97"), "expected grand total in: {page}");
    assert!(page.contains("$39.98"), "expected line total in: {page}");
}

#[tokio::test]
async fn checkout_process_clears_the_cart() {
    let (app, pool) = test_app().await;
    let id = insert_product(&pool, "Summer T-Shirt", 19_99).await;

    let response = send(
        &app,
        form_post("/add-to-cart", &format!("product_id={id}&quantity=2"), None),
    )
    .await;
    let cookie = session_cookie(&response).expect("session cookie set");

    let response = send(
        &app,
        form_post(
            "/checkout/process",
            "name=Jane+Doe&email=jane%40example.com&address=12+Main+St",
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("Jane Doe"));
    assert!(page.contains("jane@example.com"));

    // The cart is gone: checkout is unreachable again
    let response = send(&app, get("/checkout", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/cart");
}

#[tokio::test]
async fn checkout_process_clears_even_with_empty_fields() {
    let (app, pool) = test_app().await;
    let id = insert_product(&pool, "Summer T-Shirt", 19_99).await;

    let response = send(
        &app,
        form_post("/add-to-cart", &format!("product_id={id}"), None),
    )
    .await;
    let cookie = session_cookie(&response).expect("session cookie set");

    let response = send(&app, form_post("/checkout/process", "", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(send(&app, get("/", Some(&cookie))).await).await;
    assert!(page.contains("cart-badge\">0<"));
}

#[tokio::test]
async fn deleted_product_drops_from_view_but_not_badge() {
    let (app, pool) = test_app().await;
    let id = insert_product(&pool, "Summer T-Shirt", 19_99).await;

    let response = send(
        &app,
        form_post("/add-to-cart", &format!("product_id={id}&quantity=2"), None),
    )
    .await;
    let cookie = session_cookie(&response).expect("session cookie set");

    ProductRepository::new(&pool)
        .delete(ProductId::new(id))
        .await
        .expect("delete product");

    // The stored line survives, so the badge still counts it...
    let page = body_string(send(&app, get("/cart", Some(&cookie))).await).await;
    assert!(page.contains("cart-badge\">2<"), "badge kept: {page}");
    // ...but nothing resolvable is rendered
    assert!(page.contains("Your cart is empty"));

    // And checkout treats the cart as empty
    let response = send(&app, get("/checkout", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/cart");
}
