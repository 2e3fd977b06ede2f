//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, input and repository calls into session-level APIs.
//! - Keep host layers decoupled from storage details.

pub mod board_service;

pub use board_service::{BoardService, SessionPhase, TickOutcome};
