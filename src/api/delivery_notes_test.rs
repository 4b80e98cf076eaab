use super::*;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn list_parses_embedded_project_refs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deliverynote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "_id": "dn1",
            "clientId": "c1",
            "projectId": { "name": "Obra", "projectCode": "PR-1" },
            "format": "hours",
            "hours": 6,
            "description": "solado",
            "workdate": "2024-11-20"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let notes = list(&api, Some("tok")).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].project.name, "Obra");
}

#[tokio::test]
async fn create_returns_created_body_and_needs_no_cleanup() {
    // A 201 with a JSON body settles as success; the stored session is not
    // touched by creation, only logout clears it.
    let server = MockServer::start().await;
    let payload = NewDeliveryNote {
        client_id: "c1".into(),
        project_id: "p1".into(),
        format: "material".into(),
        material: Some("cemento".into()),
        hours: 0.0,
        description: "entrega".into(),
        workdate: "2024-11-21".into(),
    };
    Mock::given(method("POST"))
        .and(path("/deliverynote"))
        .and(body_json(serde_json::json!({
            "clientId": "c1", "projectId": "p1", "format": "material",
            "material": "cemento", "hours": 0.0,
            "description": "entrega", "workdate": "2024-11-21"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "_id": "dn9" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let created = create(&api, Some("tok"), &payload).await.unwrap();
    assert_eq!(created["_id"], "dn9");
}

#[tokio::test]
async fn pdf_returns_binary_payload() {
    let server = MockServer::start().await;
    let body = b"%PDF-1.7 minimal".to_vec();
    Mock::given(method("GET"))
        .and(path("/deliverynote/pdf/dn1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.clone(), "application/pdf"))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let bytes = pdf(&api, Some("tok"), "dn1").await.unwrap();
    assert_eq!(bytes, body);
}

#[tokio::test]
async fn get_and_remove_address_single_notes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deliverynote/dn1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "_id": "dn1",
            "projectId": { "name": "Obra" },
            "hours": 2,
            "description": "remate",
            "workdate": "2024-11-22"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/deliverynote/dn1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "deleted": true })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let note = get(&api, Some("tok"), "dn1").await.unwrap();
    assert_eq!(note.id, "dn1");
    remove(&api, Some("tok"), "dn1").await.unwrap();
}
