//! Environment-driven service configuration. Mail credentials are
//! required; everything else falls back to the development defaults.

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub port: u16,
    pub allowed_origin: String,
    pub smtp_host: String,
    pub smtp_user: String,
    pub smtp_password: String,
    pub recipient: String,
    pub public_dir: String,
}

impl RelayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an injectable variable source so tests do not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let smtp_user = lookup("EMAIL_USER").context("EMAIL_USER is not set")?;
        let smtp_password = lookup("EMAIL_PASSWORD").context("EMAIL_PASSWORD is not set")?;
        // Mail goes to the site owner; default to the sending account.
        let recipient = lookup("RELAY_RECIPIENT").unwrap_or_else(|| smtp_user.clone());
        let port = lookup("RELAY_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let allowed_origin =
            lookup("RELAY_ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let smtp_host = lookup("RELAY_SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());
        let public_dir = lookup("RELAY_PUBLIC_DIR").unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string());
        Ok(Self {
            port,
            allowed_origin,
            smtp_host,
            smtp_user,
            smtp_password,
            recipient,
            public_dir,
        })
    }
}
