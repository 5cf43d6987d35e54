pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod source;
pub mod task;
pub mod view;
