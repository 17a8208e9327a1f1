/* src/server/adapter/axum/tests/api.rs */

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::util::ServiceExt;

use atelier_axum::{AppState, build_router};
use atelier_content::{FieldDef, Locale, default_registry};
use atelier_store::models::{Block, Blueprint, Page, PageStatus};

const TOKEN: &str = "studio-secret";

async fn test_app() -> (Router, SqlitePool) {
  let pool = atelier_store::connect("sqlite::memory:").await.expect("connect");
  let state = AppState {
    pool: pool.clone(),
    registry: default_registry(),
    default_locale: Locale::En,
    auth_token: Some(TOKEN.to_string()),
  };
  (build_router(state), pool)
}

fn request(method: &str, uri: &str, auth: bool, body: Option<Value>) -> Request<Body> {
  let mut builder = Request::builder().method(method).uri(uri);
  if auth {
    builder = builder.header(header::AUTHORIZATION, format!("Bearer {TOKEN}"));
  }
  match body {
    Some(value) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(value.to_string()))
      .expect("request"),
    None => builder.body(Body::empty()).expect("request"),
  }
}

async fn body_json(response: axum::response::Response) -> Value {
  let bytes =
    axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  serde_json::from_slice(&bytes).expect("json body")
}

async fn seed_page(pool: &SqlitePool) -> (Page, Block, Block) {
  let page = Page::create(pool, "Home", "الرئيسية", "home", "الرئيسية").await.expect("page");
  Page::set_status(pool, page.id, PageStatus::Published).await.expect("publish");
  let hero = Block::create(
    pool,
    page.id,
    "hero",
    &json!({"title": {"en": "Timeless interiors", "ar": "تصاميم خالدة"}}),
  )
  .await
  .expect("hero");
  let legacy =
    Block::create(pool, page.id, "wp_shortcode", &json!({"raw": "[gallery]"})).await.expect("raw");
  (page, hero, legacy)
}

#[tokio::test]
async fn reorder_persists_given_positions() {
  let (app, pool) = test_app().await;
  let (page, hero, legacy) = seed_page(&pool).await;

  let body = json!({"items": [
    {"id": legacy.id, "order": 0},
    {"id": hero.id, "order": 1},
  ]});
  let response = app
    .oneshot(request("POST", "/api/pages/home/blocks/reorder", true, Some(body)))
    .await
    .expect("response");
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["ok"], true);
  assert_eq!(json["data"]["message"], "Order updated successfully");

  let blocks = Block::find_by_page(&pool, page.id).await.expect("query");
  assert_eq!(blocks[0].id, legacy.id);
  assert_eq!(blocks[1].id, hero.id);
}

#[tokio::test]
async fn reorder_requires_bearer_token() {
  let (app, pool) = test_app().await;
  let (_, hero, _) = seed_page(&pool).await;

  let body = json!({"items": [{"id": hero.id, "order": 0}]});
  let response = app
    .oneshot(request("POST", "/api/pages/home/blocks/reorder", false, Some(body)))
    .await
    .expect("response");
  assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

  let json = body_json(response).await;
  assert_eq!(json["ok"], false);
  assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn reorder_rejects_non_array_items() {
  let (app, pool) = test_app().await;
  seed_page(&pool).await;

  let response = app
    .oneshot(request(
      "POST",
      "/api/pages/home/blocks/reorder",
      true,
      Some(json!({"items": "not-an-array"})),
    ))
    .await
    .expect("response");
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let json = body_json(response).await;
  assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn failed_reorder_changes_nothing() {
  let (app, pool) = test_app().await;
  let (page, hero, legacy) = seed_page(&pool).await;

  let body = json!({"items": [
    {"id": hero.id, "order": 9},
    {"id": uuid::Uuid::new_v4(), "order": 0},
  ]});
  let response = app
    .oneshot(request("POST", "/api/pages/home/blocks/reorder", true, Some(body)))
    .await
    .expect("response");
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let blocks = Block::find_by_page(&pool, page.id).await.expect("query");
  assert_eq!(blocks[0].id, hero.id);
  assert_eq!(blocks[0].position, 0);
  assert_eq!(blocks[1].id, legacy.id);
  assert_eq!(blocks[1].position, 1);
}

#[tokio::test]
async fn rendered_page_resolves_locale_and_keeps_unknown_blocks_visible() {
  let (app, pool) = test_app().await;
  seed_page(&pool).await;

  let response = app
    .oneshot(request("GET", "/api/pages/home?locale=ar", false, None))
    .await
    .expect("response");
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["data"]["locale"], "ar");
  assert_eq!(json["data"]["page"]["title"], "الرئيسية");

  let blocks = json["data"]["blocks"].as_array().expect("blocks array");
  assert_eq!(blocks.len(), 2);
  assert_eq!(blocks[0]["type"], "hero");
  assert_eq!(blocks[0]["props"]["title"], "تصاميم خالدة");
  // The unregistered legacy block is a visible placeholder, not dropped
  assert_eq!(blocks[1]["type"], "wp_shortcode");
  assert_eq!(blocks[1]["placeholder"], true);
  assert_eq!(blocks[1]["props"]["raw"], "[gallery]");
}

#[tokio::test]
async fn accept_language_header_picks_arabic() {
  let (app, pool) = test_app().await;
  seed_page(&pool).await;

  let req = Request::builder()
    .method("GET")
    .uri("/api/pages/home")
    .header(header::ACCEPT_LANGUAGE, "ar-EG, en;q=0.5")
    .body(Body::empty())
    .expect("request");
  let response = app.oneshot(req).await.expect("response");
  let json = body_json(response).await;
  assert_eq!(json["data"]["locale"], "ar");
}

#[tokio::test]
async fn draft_pages_hidden_from_anonymous_readers() {
  let (app, pool) = test_app().await;
  Page::create(&pool, "Unlaunched", "", "unlaunched", "غير-منشور").await.expect("page");

  let anon = app
    .clone()
    .oneshot(request("GET", "/api/pages/unlaunched", false, None))
    .await
    .expect("response");
  assert_eq!(anon.status(), StatusCode::NOT_FOUND);

  let editor = app
    .oneshot(request("GET", "/api/pages/unlaunched", true, None))
    .await
    .expect("response");
  assert_eq!(editor.status(), StatusCode::OK);
}

#[tokio::test]
async fn blueprint_create_validates_and_conflicts() {
  let (app, _pool) = test_app().await;

  let payload = json!({
    "name": "project",
    "display_name": "Project",
    "fields": [
      {"name": "title", "type": "text", "required": true, "bilingual": true},
      {"name": "photos", "type": "gallery"},
    ],
  });
  let created = app
    .clone()
    .oneshot(request("POST", "/api/blueprints", true, Some(payload.clone())))
    .await
    .expect("response");
  assert_eq!(created.status(), StatusCode::OK);

  let duplicate = app
    .clone()
    .oneshot(request("POST", "/api/blueprints", true, Some(payload)))
    .await
    .expect("response");
  assert_eq!(duplicate.status(), StatusCode::CONFLICT);

  let bad = json!({
    "name": "not a name",
    "display_name": "Broken",
  });
  let rejected = app
    .oneshot(request("POST", "/api/blueprints", true, Some(bad)))
    .await
    .expect("response");
  assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn block_create_validated_against_blueprint() {
  let (app, pool) = test_app().await;
  seed_page(&pool).await;
  let fields: Vec<FieldDef> = serde_json::from_value(json!([
    {"name": "quote", "type": "text", "required": true, "bilingual": true},
    {"name": "rating", "type": "number"},
  ]))
  .expect("fields");
  Blueprint::create(&pool, "testimonial", "Testimonial", None, true, &fields)
    .await
    .expect("blueprint");

  let invalid = json!({"type": "testimonial", "data": {"rating": "five"}});
  let response = app
    .clone()
    .oneshot(request("POST", "/api/pages/home/blocks", true, Some(invalid)))
    .await
    .expect("response");
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  let json = body_json(response).await;
  let message = json["error"]["message"].as_str().expect("message");
  assert!(message.contains("quote"));
  assert!(message.contains("rating"));

  let valid = json!({"type": "testimonial", "data": {"quote": {"en": "Superb"}, "rating": 5}});
  let response = app
    .oneshot(request("POST", "/api/pages/home/blocks", true, Some(valid)))
    .await
    .expect("response");
  assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_unregistered_block_type_rejected() {
  let (app, pool) = test_app().await;
  seed_page(&pool).await;

  let payload = json!({"type": "carousel", "data": {}});
  let response = app
    .oneshot(request("POST", "/api/pages/home/blocks", true, Some(payload)))
    .await
    .expect("response");
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
