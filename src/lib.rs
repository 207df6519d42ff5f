// Alumni network - in-memory social backend with headless page models on top

// Core types and primitives
pub mod core;

// Entity schemas and the typed entities they guard
pub mod ent_schema;
pub mod entities;
pub mod models;
pub mod schemas;

// Seed data, the mock backend and its decorators
pub mod data_seeder;
pub mod infrastructure;

// Pages and navigation
pub mod shell;
pub mod views;

// Common utilities
pub mod app_state;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use app_state::AppState;
pub use config::Config;
pub use error::{AppError, AppResult};
