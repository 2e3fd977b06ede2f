//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the per-user board record access contract.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Write paths reject unauthenticated callers before touching SQL.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod board_repo;

pub use board_repo::{BoardRepository, RepoError, RepoResult, SqliteBoardRepository};
