//! In-memory implementation of the remote todo service contract.
//!
//! Serves the API under `/api`. The list endpoint preserves insertion
//! order, creation stamps `createdAt`, and error responses carry a
//! `{"message": ...}` payload so clients can surface the server's own
//! wording.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub label: String,
    #[serde(default)]
    pub detail: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub label: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub label: Option<String>,
    pub detail: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

type Rejection = (StatusCode, Json<ErrorBody>);

// Vec, not a map: list responses must preserve insertion order.
pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    let api = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo)
                .put(update_todo)
                .patch(update_todo)
                .delete(delete_todo),
        )
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found(id: Uuid) -> Rejection {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: format!("No todo found with id {id}"),
        }),
    )
}

fn empty_label() -> Rejection {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            message: "Todo label cannot be empty".to_string(),
        }),
    )
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), Rejection> {
    let label = input.label.trim().to_string();
    if label.is_empty() {
        return Err(empty_label());
    }
    let todo = Todo {
        id: Uuid::new_v4(),
        label,
        detail: input.detail,
        completed: input.completed,
        created_at: Utc::now().to_rfc3339(),
    };
    db.write().await.push(todo.clone());
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Todo>, Rejection> {
    db.read()
        .await
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(id))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, Rejection> {
    let mut todos = db.write().await;
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| not_found(id))?;
    if let Some(label) = input.label {
        let label = label.trim().to_string();
        if label.is_empty() {
            return Err(empty_label());
        }
        todo.label = label;
    }
    if let Some(detail) = input.detail {
        todo.detail = detail;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Rejection> {
    let mut todos = db.write().await;
    let before = todos.len();
    todos.retain(|t| t.id != id);
    if todos.len() == before {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
