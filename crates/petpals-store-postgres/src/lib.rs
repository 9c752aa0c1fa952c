//! PostgreSQL store implementations
//!
//! `PostgresStore` implements both `SiteStore` and `KennelStore` against a
//! single connection pool. The store is handed into the request pipeline as
//! trait objects; nothing in this crate is a process-wide singleton.

pub mod postgres_store;

pub use postgres_store::PostgresStore;
