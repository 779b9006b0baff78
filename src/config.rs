use std::env;

use crate::error::Error;

pub const MONGODB_URI: &str = "MONGODB_URI";
pub const MONGODB_DATABASE: &str = "MONGODB_DATABASE";

/// Connection values for the remote store, read once at startup. A missing
/// variable is fatal.
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: String,
    pub mongodb_database: String,
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Ok(Config {
            mongodb_uri: require(MONGODB_URI)?,
            mongodb_database: require(MONGODB_DATABASE)?,
        })
    }
}

fn require(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnvironmentVariable { name })
}
