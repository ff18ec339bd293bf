//! Domain DTOs for the todo service.
//!
//! # Design
//! One canonical schema: the display text is always `label`. The wire format
//! uses camelCase for the server-assigned timestamp (`createdAt`), which the
//! client treats as an opaque display-only string. These types mirror the
//! mock-server's schema but are defined independently; integration tests
//! catch any drift between the two crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Assigned by the server on creation; immutable afterwards.
    pub id: Uuid,
    /// Display text. Never persisted empty; the store validates before any
    /// request leaves the client.
    pub label: String,
    /// Optional secondary text; empty string when unused.
    #[serde(default)]
    pub detail: String,
    pub completed: bool,
    /// Server-assigned timestamp, opaque to the client.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub label: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_parses_without_optional_fields() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","label":"Buy milk","completed":false}"#,
        )
        .unwrap();
        assert_eq!(todo.label, "Buy milk");
        assert_eq!(todo.detail, "");
        assert!(todo.created_at.is_none());
    }

    #[test]
    fn todo_parses_created_at_wire_name() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","label":"Buy milk","completed":true,"createdAt":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(todo.created_at.as_deref(), Some("2026-01-01T00:00:00Z"));
    }

    #[test]
    fn update_todo_omits_absent_fields() {
        let update = UpdateTodo {
            label: Some("New label".to_string()),
            detail: None,
            completed: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["label"], "New label");
        assert!(json.get("detail").is_none());
        assert!(json.get("completed").is_none());
    }

    #[test]
    fn create_todo_serializes_empty_detail() {
        let input = CreateTodo {
            label: "Walk dog".to_string(),
            detail: String::new(),
            completed: false,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["detail"], "");
        assert_eq!(json["completed"], false);
    }
}
