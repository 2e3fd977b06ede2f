//! Canonical board domain model.
//!
//! # Responsibility
//! - Define the column/sticker value shapes shared by store, input and
//!   persistence layers.
//! - Keep one wire-compatible serialization shape for persisted records.
//!
//! # Invariants
//! - Every entity is identified by a stable opaque id assigned at creation.
//! - Sticker-to-column containment is id value equality, never structural
//!   nesting.

pub mod board;
