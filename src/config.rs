use color_eyre::eyre::{Report, WrapErr};
use std::env;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Report> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let database_url = env::var("DATABASE_URL").wrap_err("DATABASE_URL must be set")?;
        Ok(Self {
            bind_addr,
            database_url,
        })
    }
}
