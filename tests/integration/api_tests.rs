//! API integration tests
//!
//! These need a running server and database. Run with: cargo test -- --ignored

use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5500/api/v1";

async fn post(client: &Client, path: &str, body: Value) -> Value {
    let response = client
        .post(format!("{}{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201, "POST {}", path);
    response.json().await.expect("Failed to parse response")
}

async fn delete(client: &Client, path: &str) -> u16 {
    client
        .delete(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request")
        .status()
        .as_u16()
}

async fn get_json(client: &Client, path: &str) -> Value {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200, "GET {}", path);
    response.json().await.expect("Failed to parse response")
}

async fn put(client: &Client, path: &str, body: Value) -> Value {
    let response = client
        .put(format!("{}{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200, "PUT {}", path);
    response.json().await.expect("Failed to parse response")
}

fn days_ago(days: i64) -> String {
    (Utc::now().date_naive() - Duration::days(days)).to_string()
}

/// Treat both list shapes (array or message object) as a list
fn as_items(body: &Value) -> Vec<Value> {
    body.as_array().cloned().unwrap_or_default()
}

async fn due_ids(client: &Client, threshold: i64) -> Vec<(i64, i64)> {
    let body: Value = client
        .get(format!("{}/equipment/due?days_threshold={}", BASE_URL, threshold))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    as_items(&body)
        .iter()
        .map(|item| {
            (
                item["equipment"]["id"].as_i64().expect("No equipment ID"),
                item["schedule"]["days_remaining"].as_i64().expect("No days remaining"),
            )
        })
        .collect()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_equipment_type_round_trip() {
    let client = Client::new();

    let created = post(
        &client,
        "/equipment-types",
        json!({
            "label": "Round trip helmet",
            "inspection_interval_days": 365,
            "is_textile": false
        }),
    )
    .await;
    let id = created["id"].as_i64().expect("No type ID");

    let fetched: Value = client
        .get(format!("{}/equipment-types/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(fetched["label"], "Round trip helmet");
    assert_eq!(fetched["inspection_interval_days"], 365);
    assert_eq!(fetched["is_textile"], false);

    assert_eq!(delete(&client, &format!("/equipment-types/{}", id)).await, 200);
    assert_eq!(delete(&client, &format!("/equipment-types/{}", id)).await, 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_id_is_not_found() {
    let client = Client::new();

    for path in [
        "/equipment/2147483647",
        "/equipment-types/2147483647",
        "/managers/2147483647",
        "/inspections/2147483647",
        "/inspection-statuses/2147483647",
    ] {
        assert_eq!(delete(&client, path).await, 404, "DELETE {}", path);
    }
}

#[tokio::test]
#[ignore]
async fn test_manager_password_is_not_returned() {
    let client = Client::new();

    let created = post(
        &client,
        "/managers",
        json!({
            "surname": "Durand",
            "first_name": "Paul",
            "email": "paul.durand@example.org",
            "password": "inspection-2025"
        }),
    )
    .await;

    assert!(created.get("password").is_none());
    assert!(created.get("password_hash").is_none());

    let id = created["id"].as_i64().expect("No manager ID");
    assert_eq!(delete(&client, &format!("/managers/{}", id)).await, 200);
}

#[tokio::test]
#[ignore]
async fn test_due_list_follows_last_inspection() {
    let client = Client::new();

    let equipment_type = post(
        &client,
        "/equipment-types",
        json!({ "label": "Harness", "inspection_interval_days": 180, "is_textile": true }),
    )
    .await;
    let type_id = equipment_type["id"].as_i64().expect("No type ID");

    let equipment = post(
        &client,
        "/equipment",
        json!({
            "internal_id": "HAR-TEST-001",
            "brand": "Petzl",
            "model": "Avao",
            "serial_number": "SN-TEST-001",
            "commissioning_date": days_ago(200),
            "equipment_type_id": type_id
        }),
    )
    .await;
    let equipment_id = equipment["id"].as_i64().expect("No equipment ID");
    assert_eq!(equipment["equipment_type"]["label"], "Harness");

    // Never inspected: 180 - 200 = 20 days overdue
    let due = due_ids(&client, 30).await;
    assert!(due.contains(&(equipment_id, -20)));

    let manager = post(
        &client,
        "/managers",
        json!({
            "surname": "Martin",
            "first_name": "Claire",
            "email": "claire.martin@example.org",
            "password": "inspection-2025"
        }),
    )
    .await;
    let manager_id = manager["id"].as_i64().expect("No manager ID");

    let inspection = post(
        &client,
        "/inspections",
        json!({
            "inspection_date": days_ago(10),
            "remarks": "Stitching checked",
            "manager_id": manager_id,
            "equipment_id": equipment_id,
            "status_id": 1
        }),
    )
    .await;
    let inspection_id = inspection["id"].as_i64().expect("No inspection ID");
    assert_eq!(inspection["manager"]["surname"], "Martin");
    assert_eq!(inspection["equipment"]["internal_id"], "HAR-TEST-001");

    // Inspected 10 days ago: 170 days remaining, outside a 30 day window
    let due = due_ids(&client, 30).await;
    assert!(due.iter().all(|(id, _)| *id != equipment_id));

    let schedule: Value = client
        .get(format!("{}/equipment/{}/schedule", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(schedule["schedule"]["days_remaining"], 170);
    assert_eq!(schedule["schedule"]["urgency"], "current");

    // Equipment with inspections cannot be removed first
    assert_eq!(delete(&client, &format!("/equipment/{}", equipment_id)).await, 409);

    assert_eq!(delete(&client, &format!("/inspections/{}", inspection_id)).await, 200);
    assert_eq!(delete(&client, &format!("/equipment/{}", equipment_id)).await, 200);
    assert_eq!(delete(&client, &format!("/managers/{}", manager_id)).await, 200);
    assert_eq!(delete(&client, &format!("/equipment-types/{}", type_id)).await, 200);
}

#[tokio::test]
#[ignore]
async fn test_inspection_with_unknown_references_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/inspections", BASE_URL))
        .json(&json!({
            "inspection_date": days_ago(0),
            "manager_id": 2147483647,
            "equipment_id": 2147483647,
            "status_id": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_equipment_round_trip_keeps_every_field() {
    let client = Client::new();

    let equipment_type = post(
        &client,
        "/equipment-types",
        json!({ "label": "Lanyard", "inspection_interval_days": 365, "is_textile": true }),
    )
    .await;
    let type_id = equipment_type["id"].as_i64().expect("No type ID");

    let input = json!({
        "internal_id": "LAN-TEST-001",
        "brand": "Beal",
        "model": "Absorber",
        "serial_number": "SN-LAN-001",
        "size": "1.5 m",
        "color": "orange",
        "purchase_date": "2024-01-10",
        "manufacture_date": "2023-11-02",
        "commissioning_date": "2024-02-01",
        "inspection_interval_days": 90,
        "equipment_type_id": type_id
    });
    let created = post(&client, "/equipment", input.clone()).await;
    let id = created["id"].as_i64().expect("No equipment ID");

    let fetched = get_json(&client, &format!("/equipment/{}", id)).await;
    for (field, value) in input.as_object().expect("Input is an object") {
        assert_eq!(&fetched[field.as_str()], value, "field {}", field);
    }
    assert_eq!(fetched["equipment_type"]["label"], "Lanyard");
    assert_eq!(fetched["last_inspection_date"], Value::Null);

    assert_eq!(delete(&client, &format!("/equipment/{}", id)).await, 200);
    assert_eq!(delete(&client, &format!("/equipment-types/{}", type_id)).await, 200);
}

#[tokio::test]
#[ignore]
async fn test_equipment_update_clears_omitted_fields() {
    let client = Client::new();

    let equipment_type = post(
        &client,
        "/equipment-types",
        json!({ "label": "Gloves", "inspection_interval_days": 180 }),
    )
    .await;
    let type_id = equipment_type["id"].as_i64().expect("No type ID");

    let created = post(
        &client,
        "/equipment",
        json!({
            "internal_id": "GLO-TEST-001",
            "brand": "Ansell",
            "model": "HyFlex",
            "serial_number": "SN-GLO-001",
            "size": "9",
            "color": "grey",
            "purchase_date": "2024-05-01",
            "commissioning_date": "2024-05-15",
            "inspection_interval_days": 30,
            "equipment_type_id": type_id
        }),
    )
    .await;
    let id = created["id"].as_i64().expect("No equipment ID");

    let updated = put(
        &client,
        &format!("/equipment/{}", id),
        json!({
            "internal_id": "GLO-TEST-002",
            "brand": "Ansell",
            "model": "HyFlex",
            "serial_number": "SN-GLO-001",
            "equipment_type_id": type_id
        }),
    )
    .await;
    assert_eq!(updated["internal_id"], "GLO-TEST-002");

    let fetched = get_json(&client, &format!("/equipment/{}", id)).await;
    for field in [
        "size",
        "color",
        "purchase_date",
        "manufacture_date",
        "commissioning_date",
        "inspection_interval_days",
    ] {
        assert_eq!(fetched[field], Value::Null, "field {}", field);
    }

    // No dates left, so no next inspection can be computed
    let schedule = get_json(&client, &format!("/equipment/{}/schedule", id)).await;
    assert_eq!(schedule["schedule"], Value::Null);

    assert_eq!(delete(&client, &format!("/equipment/{}", id)).await, 200);
    assert_eq!(delete(&client, &format!("/equipment-types/{}", type_id)).await, 200);
}

#[tokio::test]
#[ignore]
async fn test_inspection_round_trip_and_update() {
    let client = Client::new();

    let equipment_type = post(
        &client,
        "/equipment-types",
        json!({ "label": "Helmet", "inspection_interval_days": 365 }),
    )
    .await;
    let type_id = equipment_type["id"].as_i64().expect("No type ID");

    let equipment = post(
        &client,
        "/equipment",
        json!({
            "internal_id": "HEL-TEST-001",
            "brand": "Kask",
            "model": "Plasma",
            "serial_number": "SN-HEL-001",
            "equipment_type_id": type_id
        }),
    )
    .await;
    let equipment_id = equipment["id"].as_i64().expect("No equipment ID");

    let manager = post(
        &client,
        "/managers",
        json!({
            "surname": "Bernard",
            "first_name": "Luc",
            "email": "luc.bernard@example.org",
            "password": "inspection-2025"
        }),
    )
    .await;
    let manager_id = manager["id"].as_i64().expect("No manager ID");

    let created = post(
        &client,
        "/inspections",
        json!({
            "inspection_date": "2025-03-04",
            "remarks": "Shell scratched, strap fine",
            "manager_id": manager_id,
            "equipment_id": equipment_id,
            "status_id": 2
        }),
    )
    .await;
    let id = created["id"].as_i64().expect("No inspection ID");

    let fetched = get_json(&client, &format!("/inspections/{}", id)).await;
    assert_eq!(fetched["inspection_date"], "2025-03-04");
    assert_eq!(fetched["remarks"], "Shell scratched, strap fine");
    assert_eq!(fetched["manager_id"], manager_id);
    assert_eq!(fetched["equipment_id"], equipment_id);
    assert_eq!(fetched["status_id"], 2);
    assert_eq!(fetched["manager"]["first_name"], "Luc");
    assert_eq!(fetched["equipment"]["model"], "Plasma");
    assert_eq!(fetched["status"]["id"], 2);

    // Full replace: remarks left out are cleared
    put(
        &client,
        &format!("/inspections/{}", id),
        json!({
            "inspection_date": "2025-03-05",
            "manager_id": manager_id,
            "equipment_id": equipment_id,
            "status_id": 1
        }),
    )
    .await;

    let fetched = get_json(&client, &format!("/inspections/{}", id)).await;
    assert_eq!(fetched["inspection_date"], "2025-03-05");
    assert_eq!(fetched["remarks"], Value::Null);
    assert_eq!(fetched["status_id"], 1);

    let history = get_json(&client, &format!("/equipment/{}/inspections", equipment_id)).await;
    let ids: Vec<i64> = as_items(&history)
        .iter()
        .filter_map(|inspection| inspection["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![id]);

    assert_eq!(delete(&client, &format!("/inspections/{}", id)).await, 200);
    assert_eq!(delete(&client, &format!("/equipment/{}", equipment_id)).await, 200);
    assert_eq!(delete(&client, &format!("/managers/{}", manager_id)).await, 200);
    assert_eq!(delete(&client, &format!("/equipment-types/{}", type_id)).await, 200);
}
