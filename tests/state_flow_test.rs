//! End-to-end flows through the state holder over real HTTP.
//!
//! Each test drives [`AppState`] the way a screen would and checks the
//! state it leaves behind, including the persisted remember-me flags.

mod common;

use coffeu::adapters::InMemoryPreferences;
use coffeu::api::ApiClient;
use coffeu::error::CONNECTIVITY_MESSAGE;
use coffeu::prefs::SessionPrefs;
use coffeu::startup::{determine_start_screen, StartScreen};
use coffeu::state::{AppState, ProductForm, StateEvent};
use common::{auth_body, catalog_body, file_state, http_client, kitchen_body, memory_state};
use rust_decimal::Decimal;
use std::str::FromStr;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_login(server: &MockServer, status: u16) {
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(auth_body("maria"))
    } else {
        ResponseTemplate::new(status).set_body_string("{}")
    };
    Mock::given(method("POST"))
        .and(path("/accounts/login/"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_catalog(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

// ============================================================================
// Login, remember-me, logout
// ============================================================================

#[tokio::test]
async fn test_login_persists_flags_and_logout_clears_them() {
    let server = MockServer::start().await;
    mount_login(&server, 200).await;
    let dir = TempDir::new().unwrap();

    let mut state = file_state(&server, &dir);
    state.login("maria", "secret").await;
    assert!(state.is_logged_in());
    assert!(!state.is_loading());

    // A second launch reads the flags back
    let mut relaunched = file_state(&server, &dir);
    assert_eq!(
        determine_start_screen(&mut relaunched).await,
        StartScreen::Home {
            username: "maria".to_string()
        }
    );

    relaunched.logout().await;

    let mut third = file_state(&server, &dir);
    assert_eq!(determine_start_screen(&mut third).await, StartScreen::Login);
}

#[tokio::test]
async fn test_rejected_login_stores_message_and_no_flags() {
    let server = MockServer::start().await;
    mount_login(&server, 401).await;
    let (mut state, prefs) = memory_state(&server);

    state.login("maria", "wrong").await;

    assert!(!state.is_logged_in());
    assert_eq!(
        state.error_message(),
        Some("Invalid credentials. Please try again.")
    );
    assert_eq!(prefs.session(), SessionPrefs::default());
}

#[tokio::test]
async fn test_login_with_server_down_reports_connectivity() {
    // Nothing listens on this port
    let api = ApiClient::new(http_client(), "http://127.0.0.1:59997/");
    let mut state = AppState::new(api, InMemoryPreferences::new());

    state.login("maria", "secret").await;

    assert_eq!(state.error_message(), Some(CONNECTIVITY_MESSAGE));
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_register_then_verify_flow() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts/registro/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(auth_body("ana")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/accounts/activar/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body("ana")))
        .expect(1)
        .mount(&server)
        .await;
    let (mut state, _) = memory_state(&server);

    // Mismatch is caught locally and does not count against the expectations
    state
        .register("ana@example.com", "ana", "5550001111", "pw1", "pw2")
        .await;
    assert_eq!(state.error_message(), Some("Passwords do not match."));

    state
        .register("ana@example.com", "ana", "5550001111", "pw", "pw")
        .await;
    assert!(state.register_success());
    assert!(state.error_message().is_none());
    state.reset_register_state();

    state.verify_code("ana@example.com", "12345").await;
    assert!(!state.verify_code_success());

    state.verify_code("ana@example.com", "123456").await;
    assert!(state.verify_code_success());
}

// ============================================================================
// Catalog, cart, favorites
// ============================================================================

#[tokio::test]
async fn test_catalog_is_fetched_once() {
    let server = MockServer::start().await;
    mount_catalog(&server, 1).await;
    let (mut state, _) = memory_state(&server);

    state.load_catalog().await;
    state.load_catalog().await;

    assert_eq!(state.catalog().len(), 3);
    assert!(state.catalog_error().is_none());
}

#[tokio::test]
async fn test_shopping_flow_total() {
    let server = MockServer::start().await;
    mount_catalog(&server, 1).await;
    let (mut state, _) = memory_state(&server);
    state.load_catalog().await;

    let taco = state.search_catalog("taco")[0].clone();
    let sushi = state.search_catalog("SUSHI")[0].clone();

    state.add_to_cart(&taco);
    state.add_to_cart(&taco);
    state.add_to_cart_with_quantity(&sushi, 2);
    state.decrease_quantity(sushi.id);

    // 2 × 8.50 + 1 × 15.25
    assert_eq!(state.cart_total(), Decimal::from_str("32.25").unwrap());
    assert_eq!(state.cart_item_count(), 3);

    state.decrease_quantity(sushi.id);
    assert!(state.cart().line(sushi.id).is_none());
    assert_eq!(state.cart().lines().len(), 1);
}

#[tokio::test]
async fn test_favorites_and_events() {
    let server = MockServer::start().await;
    mount_catalog(&server, 1).await;
    let (mut state, _) = memory_state(&server);
    state.load_catalog().await;
    let pasta = state.catalog()[1].clone();
    let mut rx = state.subscribe();

    assert!(state.toggle_favorite(&pasta));
    assert!(!state.toggle_favorite(&pasta));
    assert!(state.favorites().is_empty());

    assert_eq!(
        rx.try_recv().unwrap(),
        StateEvent::FavoriteToggled {
            id: 2,
            favorite: true
        }
    );
    assert_eq!(
        rx.try_recv().unwrap(),
        StateEvent::FavoriteToggled {
            id: 2,
            favorite: false
        }
    );
}

#[tokio::test]
async fn test_add_product_extends_loaded_catalog() {
    let server = MockServer::start().await;
    mount_catalog(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(kitchen_body(4, "Curry House", "9.75")))
        .expect(1)
        .mount(&server)
        .await;
    let (mut state, _) = memory_state(&server);
    state.load_catalog().await;

    let form = ProductForm {
        name: "Curry House".to_string(),
        description: "Curries".to_string(),
        stock: "5".to_string(),
        image_url: "https://img.test/4.png".to_string(),
        price: "9.75".to_string(),
        rating: "4.2".to_string(),
        review_count: "3".to_string(),
        delivery_time: "35 min".to_string(),
        distance: "3 km".to_string(),
        discount: "0%".to_string(),
    };
    state.add_product(&form).await;

    assert!(state.add_product_success());
    assert_eq!(state.catalog().len(), 4);
    assert_eq!(state.search_catalog("curry").len(), 1);
}
