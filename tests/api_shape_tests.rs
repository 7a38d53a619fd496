use serde_json::json;

use rosterly::api::members::{
    create_payload, member_from_envelope, members_from_envelope, parse_member,
};
use rosterly::api::ApiError;
use rosterly::models::{Member, NewMember, Role, Status};

#[test]
fn list_envelope_parses_every_record() {
    let body = json!({
        "status": "ok",
        "data": [
            {"id": "1", "name": "Alex Rivera", "email": "alex.rivera@example.com", "role": "Admin", "status": "Active"},
            {"id": "2", "name": "Sarah Chen", "email": "s.chen@design.co", "role": "Editor", "status": "Active"},
        ]
    });
    let members = members_from_envelope(&body).unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "Alex Rivera");
    assert_eq!(members[1].role, Role::Editor);
}

#[test]
fn numeric_ids_become_strings() {
    let member = parse_member(&json!({
        "id": 42,
        "name": "Marcus Wright",
        "email": "m.wright@tech.io",
        "role": "Viewer",
        "status": "Inactive"
    }))
    .unwrap();
    assert_eq!(member.id, "42");
    assert_eq!(member.status, Status::Inactive);
}

#[test]
fn records_without_an_id_are_dropped() {
    let body = json!({
        "data": [
            {"name": "No Id", "email": "noid@example.com", "role": "Viewer", "status": "Active"},
            {"id": "5", "name": "Has Id", "email": "hasid@example.com", "role": "Viewer", "status": "Active"},
        ]
    });
    let members = members_from_envelope(&body).unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, "5");
}

#[test]
fn avatar_key_is_tolerated_in_both_spellings() {
    let camel = parse_member(&json!({
        "id": "1", "name": "A", "email": "a@x.com", "role": "Admin", "status": "Active",
        "avatarUrl": "https://cdn.example.com/a.png"
    }))
    .unwrap();
    assert_eq!(
        camel.avatar_url.as_deref(),
        Some("https://cdn.example.com/a.png")
    );

    let snake = parse_member(&json!({
        "id": "1", "name": "A", "email": "a@x.com", "role": "Admin", "status": "Active",
        "avatar_url": "https://cdn.example.com/a.png"
    }))
    .unwrap();
    assert_eq!(snake.avatar_url, camel.avatar_url);

    let blank = parse_member(&json!({
        "id": "1", "name": "A", "email": "a@x.com", "role": "Admin", "status": "Active",
        "avatarUrl": ""
    }))
    .unwrap();
    assert!(blank.avatar_url.is_none());
}

#[test]
fn missing_data_field_is_a_malformed_response() {
    let body = json!({"status": "ok"});
    assert!(matches!(
        members_from_envelope(&body),
        Err(ApiError::MalformedResponse("data"))
    ));
    assert!(matches!(
        member_from_envelope(&body),
        Err(ApiError::MalformedResponse("data"))
    ));
}

#[test]
fn non_array_data_is_a_malformed_list() {
    let body = json!({"data": {"id": "1"}});
    assert!(matches!(
        members_from_envelope(&body),
        Err(ApiError::MalformedResponse("data"))
    ));
}

#[test]
fn create_payload_defaults_status_to_active() {
    let new = NewMember {
        name: "Jordan Smith".into(),
        email: "j.smith@company.com".into(),
        role: Role::Editor,
    };
    let payload = create_payload(&new);
    assert_eq!(payload["name"], "Jordan Smith");
    assert_eq!(payload["email"], "j.smith@company.com");
    assert_eq!(payload["role"], "Editor");
    assert_eq!(payload["status"], "Active");
    // the id is assigned by the backend, never sent
    assert!(payload.get("id").is_none());
}

#[test]
fn created_record_is_extracted_from_the_envelope() {
    let body = json!({
        "status": "ok",
        "data": {"id": "9", "name": "Jordan Smith", "email": "j.smith@company.com", "role": "Editor", "status": "Active"}
    });
    let created = member_from_envelope(&body).unwrap();
    assert_eq!(created.id, "9");
    assert_eq!(created.status, Status::Active);
}

#[test]
fn update_payload_uses_camel_case_and_omits_empty_avatar() {
    let member = Member {
        id: "3".into(),
        name: "Marcus Wright".into(),
        email: "m.wright@tech.io".into(),
        role: Role::Viewer,
        status: Status::Inactive,
        avatar_url: None,
    };
    let payload = serde_json::to_value(&member).unwrap();
    assert_eq!(payload["id"], "3");
    assert_eq!(payload["role"], "Viewer");
    assert_eq!(payload["status"], "Inactive");
    assert!(payload.get("avatarUrl").is_none());

    let with_avatar = Member {
        avatar_url: Some("https://cdn.example.com/m.png".into()),
        ..member
    };
    let payload = serde_json::to_value(&with_avatar).unwrap();
    assert_eq!(payload["avatarUrl"], "https://cdn.example.com/m.png");
    assert!(payload.get("avatar_url").is_none());
}
