use super::*;

// =============================================================
// ApiError
// =============================================================

#[test]
fn connection_error_uses_fixed_message() {
    assert_eq!(ApiError::Connection.user_message(), "Connection failed.");
}

#[test]
fn service_error_passes_message_through_verbatim() {
    let err = ApiError::Service("invalid credentials".to_owned());
    assert_eq!(err.user_message(), "invalid credentials");
}

#[test]
fn error_body_parses_with_and_without_error_field() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"Email not found"}"#).expect("error body");
    assert_eq!(body.error.as_deref(), Some("Email not found"));

    let body: ErrorBody = serde_json::from_str(r#"{"message":"ok"}"#).expect("error body");
    assert!(body.error.is_none());
}

// =============================================================
// Generation request shape
// =============================================================

#[test]
fn generate_request_serializes_expected_shape() {
    let request = GenerateRequest {
        message: "something italian".to_owned(),
        history: vec![
            TurnPayload {
                role: "user".to_owned(),
                parts: vec![Part { text: "hi".to_owned() }],
            },
            TurnPayload {
                role: "model".to_owned(),
                parts: vec![Part { text: "hello".to_owned() }],
            },
        ],
        profile: GenerateProfile {
            calorie_limit: 500,
            allergens: vec!["peanuts".to_owned(), "shellfish".to_owned()],
            cuisine_pref: "Italian".to_owned(),
        },
    };

    let value = serde_json::to_value(&request).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "message": "something italian",
            "history": [
                { "role": "user", "parts": [{ "text": "hi" }] },
                { "role": "model", "parts": [{ "text": "hello" }] }
            ],
            "profile": {
                "calorie_limit": 500,
                "allergens": ["peanuts", "shellfish"],
                "cuisine_pref": "Italian"
            }
        })
    );
}

// =============================================================
// Stream records
// =============================================================

#[test]
fn stream_record_parses_text_only() {
    let record: StreamRecord = serde_json::from_str(r###"{"text":"## Pasta"}"###).expect("record");
    assert_eq!(record.text.as_deref(), Some("## Pasta"));
    assert!(record.follow_up.is_none());
}

#[test]
fn stream_record_parses_follow_up_and_ignores_unknown_fields() {
    let record: StreamRecord =
        serde_json::from_str(r#"{"text":"which nuts?","follow_up":true,"model":"x"}"#).expect("record");
    assert_eq!(record.text.as_deref(), Some("which nuts?"));
    assert_eq!(record.follow_up, Some(true));
}

#[test]
fn stream_record_parses_empty_heartbeat() {
    let record: StreamRecord = serde_json::from_str(r#"{"text":""}"#).expect("record");
    assert_eq!(record.text.as_deref(), Some(""));
}

// =============================================================
// Profile wire
// =============================================================

#[test]
fn profile_wire_ignores_extra_fields_from_service() {
    let wire: ProfileWire = serde_json::from_str(
        r#"{"username":"ann","allergens":"peanuts","calorie_limit":2000,"cuisine_pref":"Any","cooking_time":60}"#,
    )
    .expect("profile");
    assert_eq!(wire.allergens, "peanuts");
    assert_eq!(wire.calorie_limit, 2000);
    assert_eq!(wire.cuisine_pref, "Any");
    assert_eq!(wire.cooking_time, 60);
}
