//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate mirror calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod task_store;
