//! The todo synchronization state machine.
//!
//! # Design
//! `TodoStore` owns the in-memory list, one coarse status flag, the active
//! view filter, and the single in-progress edit draft. Every mutation is
//! pessimistic: the store issues a request through its [`Transport`] and
//! reconciles local state from the server's response — it never flips an
//! item or splices the list before the call resolves. The server's returned
//! representation is the source of truth for a reconciled item.
//!
//! Local validation failures (empty label, unknown id) are rejected before
//! any request is issued. Remote failures collapse into one user-facing
//! message, with the underlying cause logged for diagnostics.
//!
//! Operations run on one logical thread of control and suspend only at
//! transport await points. The one fan-out is [`clear_completed`]: all
//! deletions are issued concurrently, joined, and applied as a single state
//! update keeping exactly the successful removals.
//!
//! [`clear_completed`]: TodoStore::clear_completed

use futures::future;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::client::TodoClient;
use crate::config::ApiConfig;
use crate::error::{RemoteFailure, StoreError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{CreateTodo, Todo, UpdateTodo};

const FETCH_FAILED: &str = "Failed to fetch todos. Please check your connection.";
const CREATE_FAILED: &str = "Failed to add todo. Please try again.";
const UPDATE_FAILED: &str = "Failed to update todo. Please try again.";
const DELETE_FAILED: &str = "Failed to delete todo. Please try again.";
const EMPTY_LABEL: &str = "Todo label cannot be empty";

/// Coarse store status, shared by all operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Error(String),
}

/// View filter over the current list. Never mutates `items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

/// The single in-progress edit: which item, and the current draft text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: Uuid,
    pub draft: String,
}

/// Client-side store mirroring the remote todo list.
pub struct TodoStore<T: Transport> {
    client: TodoClient,
    transport: T,
    items: Vec<Todo>,
    status: Status,
    filter: Filter,
    editing: Option<EditDraft>,
}

impl<T: Transport> TodoStore<T> {
    /// A fresh, empty store. Call [`load`](Self::load) once after creation
    /// to populate it.
    pub fn new(config: &ApiConfig, transport: T) -> Self {
        Self {
            client: TodoClient::new(&config.base_url),
            transport,
            items: Vec::new(),
            status: Status::Idle,
            filter: Filter::All,
            editing: None,
        }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    /// The visible subset under the active filter.
    pub fn filtered(&self) -> Vec<&Todo> {
        match self.filter {
            Filter::All => self.items.iter().collect(),
            Filter::Active => self.items.iter().filter(|t| !t.completed).collect(),
            Filter::Completed => self.items.iter().filter(|t| t.completed).collect(),
        }
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    /// Fetch the full list and replace `items` verbatim with the response.
    ///
    /// On failure the current list stays visible, stale but intact. Safe to
    /// call again at any time; each call repeats the full cycle.
    pub async fn load(&mut self) -> Result<(), StoreError> {
        self.status = Status::Loading;
        let request = self.client.build_list_todos();
        let outcome = match self.exchange(request).await {
            Ok(response) => self.client.parse_list_todos(response).map_err(RemoteFailure::from),
            Err(failure) => Err(failure),
        };
        match outcome {
            Ok(items) => {
                self.items = items;
                self.status = Status::Idle;
                Ok(())
            }
            Err(cause) => Err(self.fail_remote(FETCH_FAILED, cause)),
        }
    }

    /// Create a todo from the trimmed label and detail, appending the
    /// server-returned item (which carries the assigned id and timestamp).
    pub async fn create(&mut self, label: &str, detail: &str) -> Result<Todo, StoreError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(self.fail_local(StoreError::Validation(EMPTY_LABEL.to_string())));
        }
        self.status = Status::Loading;
        let input = CreateTodo {
            label: label.to_string(),
            detail: detail.trim().to_string(),
            completed: false,
        };
        let request = match self.client.build_create_todo(&input) {
            Ok(request) => request,
            Err(err) => return Err(self.fail_remote(CREATE_FAILED, err.into())),
        };
        let outcome = match self.exchange(request).await {
            Ok(response) => self.client.parse_create_todo(response).map_err(RemoteFailure::from),
            Err(failure) => Err(failure),
        };
        match outcome {
            Ok(todo) => {
                self.items.push(todo.clone());
                self.status = Status::Idle;
                Ok(todo)
            }
            Err(cause) => Err(self.fail_remote(CREATE_FAILED, cause)),
        }
    }

    /// Set an item's completion flag via the server, replacing the local
    /// entry with the server's returned representation.
    ///
    /// The prior value is retained on failure; the flag is never flipped
    /// before the call resolves.
    pub async fn set_completed(&mut self, id: Uuid, completed: bool) -> Result<Todo, StoreError> {
        if !self.contains(id) {
            return Err(self.fail_local(StoreError::UnknownId(id)));
        }
        self.status = Status::Loading;
        let request = match self.client.build_toggle_todo(id, completed) {
            Ok(request) => request,
            Err(err) => return Err(self.fail_remote(UPDATE_FAILED, err.into())),
        };
        let outcome = match self.exchange(request).await {
            Ok(response) => self.client.parse_update_todo(response).map_err(RemoteFailure::from),
            Err(failure) => Err(failure),
        };
        match outcome {
            Ok(todo) => {
                self.replace_item(todo.clone());
                self.status = Status::Idle;
                Ok(todo)
            }
            Err(cause) => Err(self.fail_remote(UPDATE_FAILED, cause)),
        }
    }

    /// Start editing an item, seeding the draft with its current label.
    /// Any other in-progress edit is silently discarded.
    pub fn begin_edit(&mut self, id: Uuid) -> Result<(), StoreError> {
        let label = match self.items.iter().find(|t| t.id == id) {
            Some(todo) => todo.label.clone(),
            None => return Err(self.fail_local(StoreError::UnknownId(id))),
        };
        self.editing = Some(EditDraft { id, draft: label });
        Ok(())
    }

    /// Drop the in-progress edit without touching the network or the list.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Commit the in-progress edit with a new label.
    ///
    /// An unchanged trimmed label behaves as [`cancel_edit`](Self::cancel_edit)
    /// and issues zero requests. On remote failure the edit stays active,
    /// carrying the attempted draft so the user's input is not lost. A no-op
    /// when no edit is in progress.
    pub async fn commit_edit(&mut self, new_label: &str) -> Result<(), StoreError> {
        let Some(edit) = self.editing.as_ref() else {
            return Ok(());
        };
        let id = edit.id;
        let trimmed = new_label.trim();
        if trimmed.is_empty() {
            return Err(self.fail_local(StoreError::Validation(EMPTY_LABEL.to_string())));
        }
        let current = match self.items.iter().find(|t| t.id == id) {
            Some(todo) => todo.label.clone(),
            None => {
                self.editing = None;
                return Err(self.fail_local(StoreError::UnknownId(id)));
            }
        };
        if trimmed == current {
            self.editing = None;
            return Ok(());
        }
        self.editing = Some(EditDraft {
            id,
            draft: trimmed.to_string(),
        });
        self.status = Status::Loading;
        let update = UpdateTodo {
            label: Some(trimmed.to_string()),
            detail: None,
            completed: None,
        };
        let request = match self.client.build_update_todo(id, &update) {
            Ok(request) => request,
            Err(err) => return Err(self.fail_remote(UPDATE_FAILED, err.into())),
        };
        let outcome = match self.exchange(request).await {
            Ok(response) => self.client.parse_update_todo(response).map_err(RemoteFailure::from),
            Err(failure) => Err(failure),
        };
        match outcome {
            Ok(todo) => {
                self.replace_item(todo);
                self.editing = None;
                self.status = Status::Idle;
                Ok(())
            }
            Err(cause) => Err(self.fail_remote(UPDATE_FAILED, cause)),
        }
    }

    /// Delete an item via the server and drop the local entry.
    pub async fn remove(&mut self, id: Uuid) -> Result<(), StoreError> {
        if !self.contains(id) {
            return Err(self.fail_local(StoreError::UnknownId(id)));
        }
        self.status = Status::Loading;
        let request = self.client.build_delete_todo(id);
        let outcome = match self.exchange(request).await {
            Ok(response) => self.client.parse_delete_todo(response).map_err(RemoteFailure::from),
            Err(failure) => Err(failure),
        };
        match outcome {
            Ok(()) => {
                self.items.retain(|t| t.id != id);
                if self.editing.as_ref().is_some_and(|e| e.id == id) {
                    self.editing = None;
                }
                self.status = Status::Idle;
                Ok(())
            }
            Err(cause) => Err(self.fail_remote(DELETE_FAILED, cause)),
        }
    }

    /// Delete every completed item, issuing all deletions concurrently and
    /// joining before a single state update.
    ///
    /// Best-effort partial semantics: entries whose deletion succeeded are
    /// removed even when others fail, and the first failure's message is
    /// surfaced. Returns the number of entries removed.
    pub async fn clear_completed(&mut self) -> Result<usize, StoreError> {
        let targets: Vec<Uuid> = self
            .items
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.id)
            .collect();
        if targets.is_empty() {
            return Ok(0);
        }
        self.status = Status::Loading;

        let client = &self.client;
        let transport = &self.transport;
        let results = future::join_all(targets.into_iter().map(|id| async move {
            let request = client.build_delete_todo(id);
            let outcome = match transport.execute(request).await {
                Ok(response) => client.parse_delete_todo(response).map_err(RemoteFailure::from),
                Err(err) => Err(RemoteFailure::from(err)),
            };
            (id, outcome)
        }))
        .await;

        let mut removed: Vec<Uuid> = Vec::new();
        let mut first_failure: Option<RemoteFailure> = None;
        for (id, outcome) in results {
            match outcome {
                Ok(()) => removed.push(id),
                Err(cause) => {
                    warn!(%id, %cause, "failed to delete completed todo");
                    first_failure.get_or_insert(cause);
                }
            }
        }

        self.items.retain(|t| !removed.contains(&t.id));
        if self
            .editing
            .as_ref()
            .is_some_and(|e| removed.contains(&e.id))
        {
            self.editing = None;
        }

        match first_failure {
            None => {
                self.status = Status::Idle;
                Ok(removed.len())
            }
            Some(cause) => Err(self.fail_remote(DELETE_FAILED, cause)),
        }
    }

    /// Switch the view filter. Pure local state; no request.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Clear the current error and return to a neutral state. The list
    /// stays whatever it last validly was.
    pub fn dismiss_error(&mut self) {
        if matches!(self.status, Status::Error(_)) {
            self.status = Status::Idle;
        }
    }

    async fn exchange(&self, request: HttpRequest) -> Result<HttpResponse, RemoteFailure> {
        debug!(method = ?request.method, url = %request.url, "issuing request");
        Ok(self.transport.execute(request).await?)
    }

    fn contains(&self, id: Uuid) -> bool {
        self.items.iter().any(|t| t.id == id)
    }

    fn replace_item(&mut self, updated: Todo) {
        if let Some(slot) = self.items.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        }
    }

    fn fail_local(&mut self, err: StoreError) -> StoreError {
        self.status = Status::Error(err.to_string());
        err
    }

    fn fail_remote(&mut self, fallback: &str, cause: RemoteFailure) -> StoreError {
        warn!(%cause, "{fallback}");
        let message = cause.user_message(fallback);
        self.status = Status::Error(message.clone());
        StoreError::Remote { message }
    }
}
