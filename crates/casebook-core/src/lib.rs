//! Core types and trait definitions for the casebook site generator.
//!
//! This crate is free of HTML and database dependencies. The store, renderer
//! and site crates all depend on it.

pub mod defence;
pub mod quiz;
pub mod store;
pub mod user;

pub use defence::{slug, title_case};
pub use store::CaseStore;
