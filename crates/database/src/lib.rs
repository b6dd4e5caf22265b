//! # Libris Database Crate
//!
//! This crate is the application's only interface to PostgreSQL. It owns the
//! connection pool, the embedded schema migrations, and every SQL statement
//! issued against the `books` table.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** all database-specific logic lives here, behind the
//!   [`BookStore`] trait. The HTTP layer never sees SQL or `sqlx` types.
//! - **Parameterized only:** user input is always bound as a placeholder,
//!   never interpolated into the statement text.
//! - **Asynchronous & Pooled:** all operations are asynchronous and share a
//!   `PgPool` that caps concurrent database sessions.
//!
//! ## Public API
//!
//! - `connect`: establish the connection pool from `DATABASE_URL`.
//! - `run_migrations`: apply the embedded migrations.
//! - `BookStore`: the storage trait the web layer depends on.
//! - `BookRepository`: the `sqlx`-backed implementation.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::{BookRepository, BookStore};
