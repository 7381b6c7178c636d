use chrono::{TimeZone, Utc};
use todo_api::types::{LoginResponse, MessageResponse, Todo, User};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_todos() {
    let json = load_fixture("todos.json");
    let todos: Vec<Todo> = serde_json::from_str(&json).unwrap();
    assert_eq!(todos.len(), 2);

    let milk = &todos[0];
    assert_eq!(milk.id, "5b1c8f3e-2d7a-4c1e-9a55-0f6a2b9d1e01");
    assert_eq!(milk.title, "Buy milk");
    assert_eq!(milk.description, "");
    assert!(!milk.completed);
    assert_eq!(
        milk.deadline,
        Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap()
    );

    let taxes = &todos[1];
    assert!(taxes.completed);
    assert_eq!(
        taxes.updated_at,
        Utc.with_ymd_and_hms(2025, 3, 1, 6, 15, 0).unwrap()
    );
}

#[test]
fn todo_round_trip_is_structurally_equal() {
    let json = load_fixture("todos.json");
    let todos: Vec<Todo> = serde_json::from_str(&json).unwrap();
    for todo in &todos {
        let encoded = serde_json::to_string(todo).unwrap();
        let decoded: Todo = serde_json::from_str(&encoded).unwrap();
        assert_eq!(&decoded, todo);
    }
}

#[test]
fn todo_serializes_with_server_field_names() {
    let json = load_fixture("todos.json");
    let todos: Vec<Todo> = serde_json::from_str(&json).unwrap();
    let value = serde_json::to_value(&todos[0]).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        [
            "id",
            "user_id",
            "title",
            "description",
            "completed",
            "created_at",
            "updated_at",
            "deadline"
        ]
    );
}

#[test]
fn deserialize_user() {
    let json = load_fixture("user.json");
    let user: User = serde_json::from_str(&json).unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(user.is_verified);
    assert!(user.oauth_provider.is_empty());
}

#[test]
fn deserialize_user_with_missing_fields() {
    let user: User = serde_json::from_str(r#"{"id":"u1","username":"bob"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "");
    assert!(!user.is_verified);
}

#[test]
fn deserialize_login_response() {
    let json = load_fixture("login.json");
    let resp: LoginResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.token(), Some("eyJhbGciOiJIUzI1NiJ9.test.signature"));
    assert_eq!(resp.user.unwrap().username, "alice");
}

#[test]
fn deserialize_register_response_has_no_token() {
    let json = load_fixture("register.json");
    let resp: LoginResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.token(), None);
    assert!(resp.user.is_none());
    assert!(resp.message.starts_with("User registered successfully"));
}

#[test]
fn deserialize_message_response() {
    let resp: MessageResponse =
        serde_json::from_str(r#"{"message":"Todo deleted successfully"}"#).unwrap();
    assert_eq!(resp.message, "Todo deleted successfully");
}
