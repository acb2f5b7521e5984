// src/config/env.rs
use std::env;
use std::error::Error;

/// Mail credentials and addressing, from the process environment.
/// A `.env` file next to the binary is honored; real environment wins.
#[derive(Clone, Debug)]
pub struct MailConfig {
    pub sender: String,
    pub receiver: String,
    pub password: String,
}

impl MailConfig {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        dotenvy::dotenv().ok(); // missing .env is fine

        Ok(Self {
            sender: require("SENDER_EMAIL")?,
            receiver: require("RECEIVER_EMAIL")?,
            password: require("EMAIL_PASSWORD")?,
        })
    }
}

fn require(key: &str) -> Result<String, Box<dyn Error>> {
    env::var(key).map_err(|_| format!("Missing environment variable: {key}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_reports_missing_key() {
        let err = require("MP_SCRAPE_NO_SUCH_VAR").unwrap_err();
        assert!(err.to_string().contains("MP_SCRAPE_NO_SUCH_VAR"));
    }
}
