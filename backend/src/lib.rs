//! HTTP front end for the move engine
//!
//! - `api` - Axum router, request/response types and error mapping
//! - `config` - Environment-driven server settings

pub mod api;
pub mod config;
