//! `coursegen` Core - shared course model and naming rules
//!
//! This crate provides the course plan schema, the JSON loader, the static
//! label tables and the filename slug generator shared across `coursegen`
//! (CLI) and `coursegen-docs` (page rendering and document patching).

pub mod config;
pub mod error;
pub mod labels;
pub mod slug;
