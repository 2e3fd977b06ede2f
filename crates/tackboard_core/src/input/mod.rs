//! Pointer and text input state machines.
//!
//! # Responsibility
//! - Track per-sticker drag state and translate pointer events into canvas
//!   positions.
//! - Track draft text for inline editors and decide commit/cancel outcomes.
//!
//! # Invariants
//! - Input state is transient and never persisted; only committed values
//!   reach the board store.

pub mod drag;
pub mod editor;

pub use drag::DragController;
pub use editor::{CommitOutcome, CommitPolicy, EmojiPicker, InlineEditor};
