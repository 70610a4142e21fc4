//! Configuration for repairflow

mod loader;

pub use loader::load_config;
