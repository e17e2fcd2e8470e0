//! FFI use-case API for widget-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI runtime via FRB.
//! - Keep error semantics simple for early-stage UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Store calls are stateless per invocation: each call opens the
//!   configured database, hydrates, operates and returns.
//! - Exactly one tooltip controller exists process-wide.

use quickdo_core::db::open_db;
use quickdo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    remaining_count, FilterCategory, HoverTooltipController, PersistenceMirror,
    SqliteSlotRepository, Task, TaskId, TaskStore, ThreadDelayScheduler,
};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

const WIDGET_DB_FILE_NAME: &str = "quickdo_widget.sqlite3";
static WIDGET_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static TOOLTIP: OnceLock<Mutex<HoverTooltipController<ThreadDelayScheduler>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same configuration (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Configures the directory holding the widget database file.
///
/// # FFI contract
/// - Must be called once before any store operation.
/// - Idempotent for the same directory; reconfiguration is rejected.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_storage_dir(dir: String) -> String {
    let trimmed = dir.trim();
    if trimmed.is_empty() {
        return "storage dir cannot be empty".to_string();
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return format!("storage dir must be an absolute path, got `{trimmed}`");
    }

    let configured = WIDGET_DB_PATH.get_or_init(|| path.to_path_buf());
    if configured != path {
        return format!(
            "storage dir already configured at `{}`; refusing to switch to `{trimmed}`",
            configured.display()
        );
    }
    log::info!(
        "event=storage_dir_configured module=ffi status=ok dir={}",
        configured.display()
    );
    String::new()
}

/// Generic action response envelope for store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional affected task ID.
    pub task_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Task item returned by the list API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListItem {
    /// Stable task ID in string form.
    pub id: String,
    /// Full task text.
    pub text: String,
    /// Completion flag.
    pub is_completed: bool,
}

/// List response envelope with the remaining-count display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    /// Whether the read succeeded.
    pub ok: bool,
    /// Filtered projection in insertion order.
    pub items: Vec<TaskListItem>,
    /// Count of not-completed tasks over the unfiltered collection.
    pub remaining: u32,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Currently visible tooltip snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipSnapshot {
    /// Full task text shown by the tooltip.
    pub text: String,
    /// Horizontal reveal position.
    pub x: f64,
    /// Vertical reveal position.
    pub y: f64,
}

/// Appends a new task.
///
/// Empty/whitespace text is a benign no-op reported with `ok = true` and
/// no task ID, matching the widget's silent-reject contract.
#[flutter_rust_bridge::frb(sync)]
pub fn add_task(text: String) -> TaskActionResponse {
    let conn = match open_widget_db() {
        Ok(conn) => conn,
        Err(message) => return failure(message),
    };
    let mut store = match hydrate_store(&conn) {
        Ok(store) => store,
        Err(message) => return failure(message),
    };

    match store.add(&text) {
        Ok(Some(id)) => TaskActionResponse {
            ok: true,
            task_id: Some(id.to_string()),
            message: "task added".to_string(),
        },
        Ok(None) => TaskActionResponse {
            ok: true,
            task_id: None,
            message: "empty text ignored".to_string(),
        },
        Err(err) => failure(err.to_string()),
    }
}

/// Toggles the completion flag of one task by ID.
///
/// An unknown ID is a benign no-op reported with `ok = true`.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_task(id: String) -> TaskActionResponse {
    let task_id = TaskId::from(id);
    let conn = match open_widget_db() {
        Ok(conn) => conn,
        Err(message) => return failure(message),
    };
    let mut store = match hydrate_store(&conn) {
        Ok(store) => store,
        Err(message) => return failure(message),
    };

    match store.toggle_status(&task_id) {
        Ok(true) => TaskActionResponse {
            ok: true,
            task_id: Some(task_id.to_string()),
            message: "task toggled".to_string(),
        },
        Ok(false) => TaskActionResponse {
            ok: true,
            task_id: None,
            message: "unknown task id ignored".to_string(),
        },
        Err(err) => failure(err.to_string()),
    }
}

/// Empties the collection and wipes the durable store.
#[flutter_rust_bridge::frb(sync)]
pub fn clear_tasks() -> TaskActionResponse {
    let conn = match open_widget_db() {
        Ok(conn) => conn,
        Err(message) => return failure(message),
    };
    let mut store = match hydrate_store(&conn) {
        Ok(store) => store,
        Err(message) => return failure(message),
    };

    match store.clear_all() {
        Ok(()) => TaskActionResponse {
            ok: true,
            task_id: None,
            message: "storage cleared".to_string(),
        },
        Err(err) => failure(err.to_string()),
    }
}

/// Lists tasks for a filter name (`all|active|completed`).
///
/// Unknown filter names fall back to `all` and are noted in the message.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tasks(filter: String) -> TaskListResponse {
    let (category, message) = match FilterCategory::parse(&filter) {
        Some(category) => (category, String::new()),
        None => (
            FilterCategory::All,
            format!("unknown filter `{filter}`; defaulted to all"),
        ),
    };

    let conn = match open_widget_db() {
        Ok(conn) => conn,
        Err(message) => return list_failure(message),
    };
    let store = match hydrate_store(&conn) {
        Ok(store) => store,
        Err(message) => return list_failure(message),
    };

    let items = category
        .apply(store.list())
        .into_iter()
        .map(to_list_item)
        .collect();
    TaskListResponse {
        ok: true,
        items,
        remaining: remaining_count(store.list()) as u32,
        message,
    }
}

/// Pointer entered a hover region: schedule the debounced reveal.
#[flutter_rust_bridge::frb(sync)]
pub fn tooltip_enter(text: String, x: f64, y: f64) {
    lock_tooltip().on_enter(&text, x, y);
}

/// Pointer left the hover region: cancel and hide unconditionally.
#[flutter_rust_bridge::frb(sync)]
pub fn tooltip_leave() {
    lock_tooltip().on_leave();
}

/// Returns the currently visible tooltip, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn tooltip_current() -> Option<TooltipSnapshot> {
    lock_tooltip().visible().map(|state| TooltipSnapshot {
        text: state.text,
        x: state.x,
        y: state.y,
    })
}

fn failure(message: String) -> TaskActionResponse {
    TaskActionResponse {
        ok: false,
        task_id: None,
        message,
    }
}

fn to_list_item(task: &Task) -> TaskListItem {
    TaskListItem {
        id: task.id.to_string(),
        text: task.text.clone(),
        is_completed: task.is_completed,
    }
}

fn widget_db_path() -> Result<PathBuf, String> {
    WIDGET_DB_PATH
        .get()
        .map(|dir| dir.join(WIDGET_DB_FILE_NAME))
        .ok_or_else(|| {
            "storage dir not configured; call configure_storage_dir first".to_string()
        })
}

fn open_widget_db() -> Result<Connection, String> {
    let path = widget_db_path()?;
    open_db(path).map_err(|err| err.to_string())
}

fn hydrate_store(
    conn: &Connection,
) -> Result<TaskStore<PersistenceMirror<SqliteSlotRepository<'_>>>, String> {
    let repo = SqliteSlotRepository::try_new(conn).map_err(|err| err.to_string())?;
    TaskStore::hydrate(PersistenceMirror::new(repo)).map_err(|err| err.to_string())
}

fn list_failure(message: String) -> TaskListResponse {
    TaskListResponse {
        ok: false,
        items: Vec::new(),
        remaining: 0,
        message,
    }
}

fn lock_tooltip() -> MutexGuard<'static, HoverTooltipController<ThreadDelayScheduler>> {
    TOOLTIP
        .get_or_init(|| Mutex::new(HoverTooltipController::new(ThreadDelayScheduler::new())))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}
