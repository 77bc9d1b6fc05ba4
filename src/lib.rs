pub mod app;
pub mod components;
pub mod config;
pub mod errors;
pub mod models;
pub mod storage;
pub mod utils;
pub mod vlibras;
