#![forbid(unsafe_code)]

//! Posts board core: a validation gate over two form fields, an in-memory
//! ordered post store, a full-rebuild renderer and the form controller that
//! ties them together.
//!
//! The board renders into a headless [`Document`]. Hosts describe which
//! elements their page provides with [`Markup`], mount a [`Board`] over it,
//! then feed it [`UiEvent`]s through [`Board::dispatch`]. Dispatch is the
//! single delegated entry point; rendering never registers handlers.

pub mod board;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod post;
pub mod render;
pub mod store;
pub mod validator;

pub use board::{Board, IgnoreReason, Outcome, Submission};
pub use config::BoardConfig;
pub use document::{Document, Markup, PostView, Role};
pub use error::{BoardError, Result};
pub use event::{ClickTarget, Field, UiEvent};
pub use post::{Clock, FixedClock, Post, PostDraft, PostId, SystemClock, format_timestamp};
pub use render::{render_posts, render_text};
pub use store::PostStore;
pub use validator::Verdict;
