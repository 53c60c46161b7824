use std::path::Path;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use storage::Database;
use tower::ServiceExt;

async fn test_app() -> Router {
    let db = Database::new_in_memory().await.expect("in-memory database");
    db.run_migrations().await.expect("migrations");
    web::app(db, Path::new("media"))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

fn athlete_payload(name: &str) -> Value {
    json!({
        "name": name,
        "last_name": "Rahimi",
        "father_name": "Karim",
        "current_location": "Kabul",
        "permanent_location": "Herat",
        "date_of_birth": "2001-03-14"
    })
}

fn fee_payload(athlete_id: i64) -> Value {
    json!({
        "athlete_id": athlete_id,
        "fee": "1500.00",
        "taken": "500.00",
        "remainder": "1000.00",
        "starting_date": "2024-01-01"
    })
}

async fn create_athlete(app: &Router, name: &str) -> i64 {
    let (status, body) = send(app, "POST", "/core/athletes", Some(athlete_payload(name))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["athlete_id"].as_i64().expect("athlete_id")
}

#[tokio::test]
async fn create_athlete_returns_record_with_generated_fields() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/core/athletes",
        Some(athlete_payload("Ahmad")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Ahmad");
    assert_eq!(body["last_name"], "Rahimi");
    assert_eq!(body["father_name"], "Karim");
    assert_eq!(body["current_location"], "Kabul");
    assert_eq!(body["permanent_location"], "Herat");
    assert_eq!(body["date_of_birth"], "2001-03-14");
    assert_eq!(body["nic"], Value::Null);
    assert!(body["athlete_id"].as_i64().is_some());
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn create_athlete_with_empty_name_is_rejected() {
    let app = test_app().await;

    let mut payload = athlete_payload("Ahmad");
    payload["name"] = json!("");
    let (status, body) = send(&app, "POST", "/core/athletes", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}

#[tokio::test]
async fn create_athlete_with_missing_field_is_rejected() {
    let app = test_app().await;

    let payload = json!({ "name": "Ahmad" });
    let (status, _) = send(&app, "POST", "/core/athletes", Some(payload)).await;

    // axum answers incomplete JSON payloads with 422 before the handler runs
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_athlete_with_malformed_date_is_rejected() {
    let app = test_app().await;

    let mut payload = athlete_payload("Ahmad");
    payload["date_of_birth"] = json!("not-a-date");
    let (status, _) = send(&app, "POST", "/core/athletes", Some(payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_missing_athlete_returns_404() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/core/athletes/4242", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Resource not found");
}

#[tokio::test]
async fn post_then_get_round_trips_field_values() {
    let app = test_app().await;

    let (_, created) = send(
        &app,
        "POST",
        "/core/athletes",
        Some(athlete_payload("Ahmad")),
    )
    .await;
    let id = created["athlete_id"].as_i64().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/core/athletes/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn patch_updates_single_field_and_refreshes_updated_at() {
    let app = test_app().await;

    let (_, created) = send(
        &app,
        "POST",
        "/core/athletes",
        Some(athlete_payload("Ahmad")),
    )
    .await;
    let id = created["athlete_id"].as_i64().unwrap();

    // timestamps carry millisecond precision; make sure some time passes
    tokio::time::sleep(Duration::from_millis(20)).await;

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/core/athletes/{id}"),
        Some(json!({ "current_location": "Mazar" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["current_location"], "Mazar");
    assert_eq!(updated["name"], created["name"]);
    assert_eq!(updated["permanent_location"], created["permanent_location"]);
    assert_eq!(updated["date_of_birth"], created["date_of_birth"]);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_ne!(updated["updated_at"], created["updated_at"]);
}

#[tokio::test]
async fn put_update_on_missing_athlete_returns_404() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "PUT",
        "/core/athletes/4242",
        Some(json!({ "name": "Ahmad" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_athlete_returns_204_then_404() {
    let app = test_app().await;
    let id = create_athlete(&app, "Ahmad").await;

    let (status, _) = send(&app, "DELETE", &format!("/core/athletes/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/core/athletes/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_fee_round_trips_decimal_fields() {
    let app = test_app().await;
    let athlete_id = create_athlete(&app, "Ahmad").await;

    let (status, created) = send(&app, "POST", "/core/fees", Some(fee_payload(athlete_id))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["athlete_id"].as_i64(), Some(athlete_id));
    assert_eq!(created["fee"], "1500.00");
    assert_eq!(created["taken"], "500.00");
    assert_eq!(created["remainder"], "1000.00");
    assert_eq!(created["starting_date"], "2024-01-01");

    let fee_id = created["fee_id"].as_i64().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/core/fees/{fee_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_fee_with_unknown_athlete_returns_400() {
    let app = test_app().await;

    let (status, _) = send(&app, "POST", "/core/fees", Some(fee_payload(4242))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_fee_with_three_decimal_places_is_rejected() {
    let app = test_app().await;
    let athlete_id = create_athlete(&app, "Ahmad").await;

    let mut payload = fee_payload(athlete_id);
    payload["fee"] = json!("1500.505");
    let (status, body) = send(&app, "POST", "/core/fees", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}

#[tokio::test]
async fn create_fee_with_too_many_digits_is_rejected() {
    let app = test_app().await;
    let athlete_id = create_athlete(&app, "Ahmad").await;

    let mut payload = fee_payload(athlete_id);
    payload["fee"] = json!("100000000.00");
    let (status, _) = send(&app, "POST", "/core/fees", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn remainder_is_stored_verbatim() {
    let app = test_app().await;
    let athlete_id = create_athlete(&app, "Ahmad").await;

    let mut payload = fee_payload(athlete_id);
    payload["remainder"] = json!("1.00"); // deliberately not fee - taken
    let (status, created) = send(&app, "POST", "/core/fees", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["remainder"], "1.00");
}

#[tokio::test]
async fn update_fee_reassigns_to_unknown_athlete_returns_400() {
    let app = test_app().await;
    let athlete_id = create_athlete(&app, "Ahmad").await;

    let (_, created) = send(&app, "POST", "/core/fees", Some(fee_payload(athlete_id))).await;
    let fee_id = created["fee_id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/core/fees/{fee_id}"),
        Some(json!({ "athlete_id": 4242 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn put_updates_fee_amounts() {
    let app = test_app().await;
    let athlete_id = create_athlete(&app, "Ahmad").await;

    let (_, created) = send(&app, "POST", "/core/fees", Some(fee_payload(athlete_id))).await;
    let fee_id = created["fee_id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/core/fees/{fee_id}"),
        Some(json!({ "taken": "750.00", "remainder": "750.00" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["taken"], "750.00");
    assert_eq!(updated["remainder"], "750.00");
    assert_eq!(updated["fee"], created["fee"]);
}

#[tokio::test]
async fn deleting_athlete_cascades_to_fees() {
    let app = test_app().await;
    let athlete_id = create_athlete(&app, "Ahmad").await;

    let (_, first) = send(&app, "POST", "/core/fees", Some(fee_payload(athlete_id))).await;
    let (_, second) = send(&app, "POST", "/core/fees", Some(fee_payload(athlete_id))).await;

    let (status, _) = send(&app, "DELETE", &format!("/core/athletes/{athlete_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    for fee in [&first, &second] {
        let fee_id = fee["fee_id"].as_i64().unwrap();
        let (status, _) = send(&app, "GET", &format!("/core/fees/{fee_id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let (_, fees) = send(&app, "GET", "/core/fees", None).await;
    assert_eq!(fees, json!([]));
}

#[tokio::test]
async fn deleting_fee_leaves_athlete_in_place() {
    let app = test_app().await;
    let athlete_id = create_athlete(&app, "Ahmad").await;

    let (_, created) = send(&app, "POST", "/core/fees", Some(fee_payload(athlete_id))).await;
    let fee_id = created["fee_id"].as_i64().unwrap();

    let (status, _) = send(&app, "DELETE", &format!("/core/fees/{fee_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/core/athletes/{athlete_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn list_athletes_returns_all_in_insertion_order() {
    let app = test_app().await;
    create_athlete(&app, "Ahmad").await;
    create_athlete(&app, "Bashir").await;

    let (status, body) = send(&app, "GET", "/core/athletes", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|athlete| athlete["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Ahmad", "Bashir"]);
}

#[tokio::test]
async fn admin_athletes_search_matches_name_fields() {
    let app = test_app().await;
    create_athlete(&app, "Ahmad").await;
    create_athlete(&app, "Bashir").await;

    let (status, body) = send(&app, "GET", "/admin/athletes?search=bash", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total_items"], 1);
    assert_eq!(body["data"][0]["name"], "Bashir");
}

#[tokio::test]
async fn admin_athletes_paginates_with_metadata() {
    let app = test_app().await;
    for i in 0..3 {
        create_athlete(&app, &format!("Athlete{i}")).await;
    }

    let (status, body) = send(&app, "GET", "/admin/athletes?page=2&page_size=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(body["pagination"]["total_items"], 3);
    assert_eq!(body["pagination"]["total_pages"], 2);
}

#[tokio::test]
async fn admin_athletes_rejects_oversized_page() {
    let app = test_app().await;

    let (status, _) = send(&app, "GET", "/admin/athletes?page_size=5000", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_fees_filters_by_starting_date_and_shows_athlete_name() {
    let app = test_app().await;
    let athlete_id = create_athlete(&app, "Ahmad").await;

    let mut january = fee_payload(athlete_id);
    january["starting_date"] = json!("2024-01-01");
    let mut june = fee_payload(athlete_id);
    june["starting_date"] = json!("2024-06-01");
    send(&app, "POST", "/core/fees", Some(january)).await;
    send(&app, "POST", "/core/fees", Some(june)).await;

    let (status, body) = send(&app, "GET", "/admin/fees?starting_after=2024-03-01", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total_items"], 1);
    assert_eq!(body["data"][0]["starting_date"], "2024-06-01");
    assert_eq!(body["data"][0]["athlete_name"], "Ahmad");
}

#[tokio::test]
async fn admin_fees_search_matches_owning_athlete() {
    let app = test_app().await;
    let ahmad = create_athlete(&app, "Ahmad").await;
    let bashir = create_athlete(&app, "Bashir").await;
    send(&app, "POST", "/core/fees", Some(fee_payload(ahmad))).await;
    send(&app, "POST", "/core/fees", Some(fee_payload(bashir))).await;

    let (status, body) = send(&app, "GET", "/admin/fees?search=ahmad", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total_items"], 1);
    assert_eq!(body["data"][0]["athlete_name"], "Ahmad");
}

#[tokio::test]
async fn openapi_document_lists_every_resource() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/core/athletes"));
    assert!(paths.contains_key("/core/athletes/{id}"));
    assert!(paths.contains_key("/core/fees"));
    assert!(paths.contains_key("/core/fees/{id}"));
    assert!(paths.contains_key("/admin/athletes"));
    assert!(paths.contains_key("/admin/fees"));
}
