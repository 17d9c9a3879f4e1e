pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod file_checkout;
pub mod help;
pub mod session;
pub mod utils;
