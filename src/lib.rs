pub mod backend;
pub mod config;
pub mod embed;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod state;
