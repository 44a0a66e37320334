//! Core types and trait definitions for the Rolodex contact directory.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The SQLite backend, the HTTP API and the server binary all build on it.

pub mod contact;
pub mod error;
pub mod group;
pub mod store;
pub mod subscription;
pub mod user;

mod validate;

pub use error::{Error, Result};
