//! # GoREST Repository
//!
//! SQLite-backed storage for the four resource tables.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn Repository<T>>      (core interface)
//! SqliteRepository<T>              (generic CRUD + upsert)
//!   ↓  T: SqliteRecord             (per-table columns and row mapping)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! SQLite
//! ```

pub mod pool;
pub mod sqlite;

pub use pool::*;
pub use sqlite::*;
