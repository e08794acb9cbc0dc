pub mod analyze;
pub mod args;
pub mod auto;
pub mod batch;
pub mod config;
pub mod info;
