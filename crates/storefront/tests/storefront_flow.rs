//! End-to-end storefront flows driven through the router in-process.
//!
//! Each `Shopper` carries its session cookie between requests the way a
//! browser would.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{
        Request, Response, StatusCode,
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
    },
};
use http_body_util::BodyExt;
use reyana_core::Catalog;
use reyana_storefront::{app, config::StorefrontConfig, state::AppState};
use tower::ServiceExt;

struct Shopper {
    app: Router,
    cookie: Option<String>,
}

impl Shopper {
    fn new() -> Self {
        Self::with_config(StorefrontConfig::default())
    }

    fn with_config(config: StorefrontConfig) -> Self {
        Self {
            app: app(AppState::new(config, Catalog::seeded())),
            cookie: None,
        }
    }

    async fn send(&mut self, mut request: Request<Body>) -> Response<Body> {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(COOKIE, cookie.parse().unwrap());
        }
        let response = self.app.clone().oneshot(request).await.unwrap();
        if let Some(set_cookie) = response.headers().get(SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }
        response
    }

    async fn get(&mut self, uri: &str) -> Response<Body> {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn post(&mut self, uri: &str, form: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Post a form and expect the redirect back to the page.
    async fn act(&mut self, uri: &str, form: &str) {
        let response = self.post(uri, form).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "POST {uri}");
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
    }

    async fn page(&mut self) -> String {
        let response = self.get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        body_string(response).await
    }
}

async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

const FULL_FORM: &str = "name=Asha&phone=9999999999&address=Street+1";

#[tokio::test]
async fn test_health() {
    let mut shopper = Shopper::new();
    let response = shopper.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_first_visit_shows_whole_catalog_and_empty_cart() {
    let mut shopper = Shopper::new();
    let page = shopper.page().await;

    for product in Catalog::seeded().products() {
        assert!(page.contains(&product.name), "missing {}", product.name);
    }
    assert!(page.contains("Your cart is empty. Add products to get started."));
    assert!(page.contains("Reyana Treders"));
    assert!(!page.contains("No products found."));
}

#[tokio::test]
async fn test_security_headers_and_request_id() {
    let mut shopper = Shopper::new();
    let response = shopper.get("/").await;
    let headers = response.headers();
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert!(headers.contains_key("content-security-policy"));
    assert!(!headers.get("x-request-id").unwrap().is_empty());
}

#[tokio::test]
async fn test_upstream_request_id_echoed_when_well_formed() {
    let mut shopper = Shopper::new();
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "edge-42")
        .body(Body::empty())
        .unwrap();
    let response = shopper.send(request).await;
    assert_eq!(response.headers().get("x-request-id").unwrap(), "edge-42");

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "a".repeat(200))
        .body(Body::empty())
        .unwrap();
    let response = shopper.send(request).await;
    let echoed = response.headers().get("x-request-id").unwrap();
    assert_eq!(echoed.len(), 36);
}

#[tokio::test]
async fn test_category_filter() {
    let mut shopper = Shopper::new();
    shopper.act("/filters/category", "category=Cosmetics").await;
    let page = shopper.page().await;

    assert!(page.contains("Herbal Face Cream"));
    assert!(page.contains("Lipstick Combo Pack"));
    assert!(!page.contains("Organic Rice"));
    assert!(!page.contains("Luxury Pen Set"));
}

#[tokio::test]
async fn test_unknown_category_rejected() {
    let mut shopper = Shopper::new();
    let response = shopper.post("/filters/category", "category=Toys").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_and_no_results() {
    let mut shopper = Shopper::new();
    shopper.act("/filters/search", "q=PEN").await;
    let page = shopper.page().await;
    assert!(page.contains("Luxury Pen Set"));
    assert!(!page.contains("Herbal Face Cream"));

    shopper.act("/filters/search", "q=zzz").await;
    let page = shopper.page().await;
    assert!(page.contains("No products found."));
}

#[tokio::test]
async fn test_sort_toggle() {
    let mut shopper = Shopper::new();
    shopper.act("/filters/sort", "").await;
    let page = shopper.page().await;
    assert!(page.contains("(Low → High)"));

    let lentils = page.find("Fresh Lentils (500g)").unwrap();
    let pens = page.find("Luxury Pen Set").unwrap();
    assert!(lentils < pens);

    shopper.act("/filters/sort", "").await;
    assert!(!shopper.page().await.contains("(Low → High)"));
}

#[tokio::test]
async fn test_cart_quantities_and_totals() {
    let mut shopper = Shopper::new();
    shopper.act("/cart/add", "product_id=1").await;
    shopper.act("/cart/add", "product_id=1").await;

    let page = shopper.page().await;
    assert!(page.contains("<span class=\"badge\">2</span>"));
    assert!(page.contains("<strong>₹498</strong>"));
    assert!(page.contains("cart-panel-open"));

    shopper.act("/cart/quantity", "product_id=1&delta=-5").await;
    let page = shopper.page().await;
    assert!(page.contains("<span class=\"badge\">1</span>"));
    assert!(page.contains("<strong>₹249</strong>"));

    shopper.act("/cart/remove", "product_id=1").await;
    let page = shopper.page().await;
    assert!(page.contains("Your cart is empty."));
    assert!(page.contains("<strong>₹0</strong>"));
}

#[tokio::test]
async fn test_unknown_product_not_found() {
    let mut shopper = Shopper::new();
    let response = shopper.post("/cart/add", "product_id=99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_checkout_needs_items() {
    let mut shopper = Shopper::new();
    let response = shopper.post("/checkout/open", "").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_placing_order_with_empty_cart_rejected() {
    let mut shopper = Shopper::new();
    let response = shopper.post("/checkout/place", FULL_FORM).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let page = shopper.page().await;
    assert!(!page.contains("Order placed successfully"));
    assert!(!page.contains("due on delivery"));
}

#[tokio::test]
async fn test_incomplete_checkout_keeps_cart_and_input() {
    let mut shopper = Shopper::new();
    shopper.act("/cart/add", "product_id=1").await;
    shopper.act("/cart/add", "product_id=1").await;
    shopper.act("/checkout/open", "").await;

    let response = shopper
        .post("/checkout/place", "name=&phone=9999999999&address=Street+1")
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let page = body_string(response).await;
    assert!(page.contains("Please fill name to place the order."));
    assert!(page.contains("value=\"9999999999\""));
    assert!(!page.contains("Order placed successfully"));

    let page = shopper.page().await;
    assert!(page.contains("<strong>₹498</strong>"));
    assert!(!page.contains("Order placed successfully"));
    assert!(page.contains("value=\"9999999999\""));
}

#[tokio::test]
async fn test_successful_checkout_then_dismiss() {
    let mut shopper = Shopper::new();
    shopper.act("/cart/add", "product_id=1").await;
    shopper.act("/cart/add", "product_id=1").await;
    shopper.act("/checkout/open", "").await;
    shopper.act("/checkout/place", FULL_FORM).await;

    let page = shopper.page().await;
    assert!(page.contains("Order placed successfully!"));
    assert!(page.contains("₹498 due on delivery"));
    assert!(page.contains("http-equiv=\"refresh\""));
    assert!(page.contains("; url=/\""));
    assert!(page.contains("Your cart is empty."));
    assert!(!page.contains("id=\"checkout-form\""));

    // A ticket from no order at all is ignored
    shopper.act("/notification/dismiss", "ticket=0").await;
    assert!(shopper.page().await.contains("Order placed successfully!"));

    shopper.act("/notification/dismiss", "ticket=1").await;
    assert!(!shopper.page().await.contains("Order placed successfully!"));
}

#[tokio::test]
async fn test_rejected_checkout_page_refreshes_to_home() {
    let mut shopper = Shopper::new();
    shopper.act("/cart/add", "product_id=3").await;
    shopper.act("/checkout/place", FULL_FORM).await;

    shopper.act("/cart/add", "product_id=6").await;
    let response = shopper
        .post("/checkout/place", "name=Asha&phone=&address=Street+1")
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let page = body_string(response).await;
    assert!(page.contains("Order placed successfully!"));
    assert!(page.contains("; url=/\""));
}

#[tokio::test]
async fn test_notification_expires_on_its_own() {
    let mut shopper = Shopper::with_config(StorefrontConfig {
        notification_dismiss_after: Duration::from_millis(50),
        ..StorefrontConfig::default()
    });
    shopper.act("/cart/add", "product_id=3").await;
    shopper.act("/checkout/place", FULL_FORM).await;

    tokio::time::sleep(Duration::from_millis(100)).await;
    let page = shopper.page().await;
    assert!(!page.contains("Order placed successfully!"));
    assert!(!page.contains("http-equiv=\"refresh\""));
}

#[tokio::test]
async fn test_login_modal_is_cosmetic() {
    let mut shopper = Shopper::new();
    shopper.act("/login/open", "").await;
    assert!(shopper.page().await.contains("Login to Reyana Treders"));

    shopper.act("/login/toggle", "").await;
    assert!(shopper.page().await.contains("Create Account"));

    shopper.act("/login/close", "").await;
    let page = shopper.page().await;
    assert!(!page.contains("Create Account"));
    assert!(!page.contains("Login to Reyana Treders"));
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let state = AppState::new(StorefrontConfig::default(), Catalog::seeded());
    let router = app(state);
    let mut first = Shopper {
        app: router.clone(),
        cookie: None,
    };
    let mut second = Shopper {
        app: router,
        cookie: None,
    };

    first.act("/cart/add", "product_id=2").await;
    assert!(first.page().await.contains("<strong>₹499</strong>"));
    assert!(second.page().await.contains("<strong>₹0</strong>"));
}
