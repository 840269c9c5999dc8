//! Résumé validation and multi-template `.docx` rendering, plus the HTTP
//! surface that exposes them.

pub mod config;
pub mod document;
pub mod errors;
pub mod models;
pub mod resume;
pub mod routes;
pub mod state;
pub mod templates;
