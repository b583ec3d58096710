//! Domain logic for the fab equipment monitor.
//!
//! Everything in this crate is pure: no database access, no HTTP, no
//! ambient clock reads. The `db` and `api` crates fetch data and pass it in.

pub mod classification;
pub mod clock;
pub mod dashboard;
pub mod equipment;
pub mod error;
pub mod health;
pub mod ingest;
pub mod pagination;
pub mod status;
pub mod types;
