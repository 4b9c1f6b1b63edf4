pub mod config;
pub mod db;
pub mod error;
pub mod identity;
pub mod log;
pub mod server;
pub mod services;
