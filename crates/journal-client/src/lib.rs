//! # Journal Client
//!
//! Headless client logic for the Journal single-page front end: an
//! explicit application model (no process-wide mutable state), a typed
//! view enum instead of string comparison, the compose-flow state
//! machine, REST bindings over reqwest, and markdown rendering.
//!
//! A UI layer owns an [`AppModel`] and an [`ApiClient`], drives
//! transitions on the model, and issues the corresponding requests.
//! After a successful mutation the caller re-fetches the feed rather
//! than patching local state.

pub mod api;
pub mod markdown;
pub mod state;

pub use api::{ApiClient, ApiError};
pub use markdown::{reading_time_minutes, render_markdown};
pub use state::{AppModel, ComposeError, ComposeForm, ComposePhase, SaveAction, Session, View};
