use crate::common::{TestStore, body_json, donor_json, empty_request, json_request};

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_list_on_fresh_store_creates_file() {
    let store = TestStore::new();
    let app = store.app();

    let response = app
        .oneshot(empty_request("GET", "/api/donors"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
    assert_eq!(store.stored(), json!([]));
}

#[tokio::test]
async fn test_create_then_list() {
    let store = TestStore::new();
    let app = store.app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/donors",
            &donor_json(None, "Rahim", "A+", "Dhaka"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["isVerified"], json!(false));

    let response = app
        .oneshot(empty_request("GET", "/api/donors"))
        .await
        .unwrap();
    let donors = body_json(response).await;

    assert_eq!(donors, json!([created]));
    assert_eq!(store.stored(), donors);
}

#[tokio::test]
async fn test_create_missing_required_field() {
    let store = TestStore::new();
    let app = store.app();

    for field in ["name", "blood_group", "phone", "address"] {
        let mut body = donor_json(Some("1"), "Rahim", "A+", "Dhaka");
        body.as_object_mut().unwrap().remove(field);

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/donors", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "missing {}", field);
        let error = body_json(response).await;
        assert_eq!(error["errors"][0]["status"], 400);
    }

    let mut body = donor_json(Some("1"), "Rahim", "A+", "Dhaka");
    body["name"] = json!("");
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/donors", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(empty_request("GET", "/api/donors"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_malformed_body() {
    let store = TestStore::new();

    let response = store
        .app()
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/donors")
                .header("content-type", "application/json")
                .body(axum::body::Body::from("{\"name\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_id_is_reassigned() {
    let store = TestStore::new();
    let app = store.app();

    let first = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/donors",
            &donor_json(Some("1718000000000"), "Rahim", "A+", "Dhaka"),
        ))
        .await
        .unwrap();
    let second = app
        .oneshot(json_request(
            "POST",
            "/api/donors",
            &donor_json(Some("1718000000000"), "Karim", "B+", "Sylhet"),
        ))
        .await
        .unwrap();

    let first = body_json(first).await;
    let second = body_json(second).await;
    assert_eq!(first["id"], "1718000000000");
    assert_ne!(second["id"], first["id"]);

    let stored = store.stored();
    let ids: Vec<&str> = stored
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
async fn test_is_verified_always_boolean() {
    let store = TestStore::new();
    let app = store.app();

    for value in [json!("true"), json!(1), json!(null), json!(true)] {
        let mut body = donor_json(None, "Rahim", "O+", "Dhaka");
        body["isVerified"] = value;
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/donors", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(empty_request("GET", "/api/donors"))
        .await
        .unwrap();
    let donors = body_json(response).await;
    let flags: Vec<&serde_json::Value> = donors
        .as_array()
        .unwrap()
        .iter()
        .map(|d| &d["isVerified"])
        .collect();

    assert_eq!(flags, [&json!(false), &json!(false), &json!(false), &json!(true)]);
}

#[tokio::test]
async fn test_update_merges_and_keeps_id() {
    let store = TestStore::new();
    let app = store.app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/donors",
            &donor_json(Some("10"), "Rahim", "A+", "Dhaka"),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/donors/10",
            &json!({ "id": "20", "phone": "01999999999", "isVerified": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], "10");
    assert_eq!(updated["phone"], "01999999999");
    assert_eq!(updated["name"], "Rahim");
    assert_eq!(updated["address"], "Dhaka");
    assert_eq!(updated["isVerified"], true);

    assert_eq!(store.stored(), json!([updated]));
}

#[tokio::test]
async fn test_update_unknown_id() {
    let store = TestStore::new();
    let app = store.app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/donors",
            &donor_json(Some("10"), "Rahim", "A+", "Dhaka"),
        ))
        .await
        .unwrap();
    let before = store.stored();

    let response = app
        .oneshot(json_request("PUT", "/api/donors/11", &json!({ "name": "Ghost" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.stored(), before);
}

#[tokio::test]
async fn test_update_unknown_donor_is_not_found_before_validation() {
    let store = TestStore::new();

    let response = store
        .app()
        .oneshot(json_request("PUT", "/api/donors/11", &json!({ "name": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_donor() {
    let store = TestStore::new();
    let app = store.app();

    for (id, name) in [("1", "Rahim"), ("2", "Karim")] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/donors",
                &donor_json(Some(id), name, "A+", "Dhaka"),
            ))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/donors/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request("DELETE", "/api/donors/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let stored = store.stored();
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["id"], "2");
}

#[tokio::test]
async fn test_reset_empties_collection() {
    let store = TestStore::new();
    let app = store.app();

    for i in 0..3 {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/donors",
                &donor_json(Some(&i.to_string()), "Donor", "AB-", "Rajshahi"),
            ))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/donors/reset"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/donors"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!([]));

    // reset on an already empty store
    let response = app
        .oneshot(empty_request("DELETE", "/api/donors/reset"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(store.stored(), json!([]));
}

#[tokio::test]
async fn test_store_written_by_hand_is_served() {
    let store = TestStore::new();
    std::fs::create_dir_all(store.path.parent().unwrap()).unwrap();
    std::fs::write(
        &store.path,
        r#"[{"id":"5","name":"Legacy","blood_group":"B-","phone":"1","address":"Feni","donated_before":"yes","isVerified":"no"}]"#,
    )
    .unwrap();

    let response = store
        .app()
        .oneshot(empty_request("GET", "/api/donors"))
        .await
        .unwrap();
    let donors = body_json(response).await;

    assert_eq!(donors[0]["name"], "Legacy");
    assert_eq!(donors[0]["isVerified"], false);
}
