//! A small SQLite walkthrough built around a single `animals` table.
//!
//! # Intention
//!
//! - Show the elementary lifecycle of an embedded database: open, create the
//!   schema, insert, query, update, delete, close.
//! - Keep every value out of the statement text; all statements bind through
//!   placeholders.
//!
//! # Architectural Boundaries
//!
//! - Only SQLite/database code belongs here.
//! - No pooling, migrations or query building; one connection, one table.

pub mod animal;
pub mod demo;
pub mod error;
pub mod logging;
pub mod schema;
pub mod sqlite;

pub use animal::{Animal, NewAnimal};
pub use demo::{run, DemoReport};
pub use error::{Result, StoreError};
pub use schema::{animal_schema, Schema};
pub use sqlite::{AnimalStore, StoreConfig};
