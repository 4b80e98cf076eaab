use super::*;

#[test]
fn client_deserializes_remote_shape() {
    let json = serde_json::json!({
        "_id": "64f1",
        "name": "Acme",
        "cif": "B12345678",
        "address": {
            "street": "Mayor", "number": 12, "postal": 28001,
            "city": "Madrid", "province": "Madrid"
        }
    });
    let client: Client = serde_json::from_value(json).unwrap();
    assert_eq!(client.id, "64f1");
    assert_eq!(client.address.city, "Madrid");
}

#[test]
fn client_serializes_id_back_as_underscore_id() {
    let client = Client {
        id: "64f1".into(),
        name: "Acme".into(),
        cif: "B12345678".into(),
        address: Address {
            street: "Mayor".into(),
            number: 12,
            postal: 28001,
            city: "Madrid".into(),
            province: "Madrid".into(),
        },
    };
    let value = serde_json::to_value(&client).unwrap();
    assert_eq!(value["_id"], "64f1");
    assert!(value.get("id").is_none());
}

#[test]
fn project_list_entry_with_minimal_fields() {
    let json = serde_json::json!({ "_id": "p1", "name": "Obra", "description": "Reforma" });
    let project: Project = serde_json::from_value(json).unwrap();
    assert_eq!(project.description.as_deref(), Some("Reforma"));
    assert!(project.project_code.is_none());
    assert!(project.address.is_none());
}

#[test]
fn project_optional_fields_are_not_serialized_when_absent() {
    let project = Project {
        id: "p1".into(),
        name: "Obra".into(),
        description: None,
        project_code: None,
        email: None,
        address: None,
        code: None,
        client_id: None,
    };
    let value = serde_json::to_value(&project).unwrap();
    assert!(value.get("projectCode").is_none());
    assert!(value.get("description").is_none());
}

#[test]
fn delivery_note_deserializes_with_embedded_project() {
    let json = serde_json::json!({
        "_id": "dn1",
        "clientId": "c1",
        "projectId": { "name": "Obra", "projectCode": "PR-1" },
        "format": "hours",
        "hours": 8,
        "description": "albañilería",
        "workdate": "2024-11-20"
    });
    let note: DeliveryNote = serde_json::from_value(json).unwrap();
    assert_eq!(note.project.name, "Obra");
    assert_eq!(note.project.project_code.as_deref(), Some("PR-1"));
    assert!((note.hours - 8.0).abs() < f64::EPSILON);
}

#[test]
fn delivery_note_without_hours_defaults_to_zero() {
    let json = serde_json::json!({
        "_id": "dn2",
        "projectId": { "name": "Obra" },
        "format": "material",
        "material": "cemento",
        "description": "entrega",
        "workdate": "2024-11-21"
    });
    let note: DeliveryNote = serde_json::from_value(json).unwrap();
    assert!(note.hours.abs() < f64::EPSILON);
    assert_eq!(note.material.as_deref(), Some("cemento"));
}

#[test]
fn new_project_serializes_camel_case_references() {
    let payload = NewProject {
        name: "Obra".into(),
        project_code: "PR-1".into(),
        email: "obra@example.test".into(),
        address: Address {
            street: "Sol".into(),
            number: 3,
            postal: 41001,
            city: "Sevilla".into(),
            province: "Sevilla".into(),
        },
        code: "INT-7".into(),
        client_id: "c1".into(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["projectCode"], "PR-1");
    assert_eq!(value["clientId"], "c1");
}
