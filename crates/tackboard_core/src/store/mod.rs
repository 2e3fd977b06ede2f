//! In-memory board state and its mutation surface.
//!
//! # Responsibility
//! - Own the live column/sticker collections for one session.
//! - Expose the narrow mutation API the input and service layers use.
//!
//! # Invariants
//! - Collections preserve insertion order.
//! - Updates replace whole records; partial field writes never leak out.

pub mod board_store;

pub use board_store::{BoardStore, ColumnPatch, StickerPatch};
