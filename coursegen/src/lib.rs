//! `coursegen` - course site scaffolding
//!
//! Command-line front end over `coursegen-core` and `coursegen-docs`.

pub mod cli;
pub mod error;
pub mod observability;
