//! # CLI Module
//!
//! This module provides the command-line interface layer for spafcli, a
//! Spotify API client that exports a playlist's tracks together with their
//! audio-feature vectors. It implements all user-facing commands and
//! coordinates between the API layer, the export management layer, and user
//! interaction.
//!
//! ## Commands
//!
//! - [`export`] - Runs a full export: token exchange, playlist read,
//!   per-track metadata and audio-feature fetches, CSV persistence
//! - [`info`] - Fetches a playlist and prints a summary table of its
//!   entries without touching per-track endpoints
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Export Table)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command delegates to the spotify and management modules while
//! handling user interaction, progress feedback, and error presentation.
//!
//! ## Error Handling Philosophy
//!
//! - **Fatal early**: missing credentials, a failed token exchange, or an
//!   unreadable playlist terminate the run before any per-track work
//! - **Skip-and-continue**: a failed per-track fetch logs the identifier
//!   and the run continues; skipped tracks are recounted in the final
//!   summary
//! - **Fatal late**: an unwritable output destination is reported at the
//!   end with the assembled table intact in memory
//!
//! ## Progress and User Experience
//!
//! Long-running operations provide feedback throughout: a spinner covers
//! the playlist read, a progress bar tracks the per-track fetch loop, and
//! the colored status macros report milestones and skips.

mod export;
mod info;

pub use export::export;
pub use info::info;
