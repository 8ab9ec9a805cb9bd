use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Comma-separated bearer keys for event administrators.
    pub admin_api_keys: String,
    /// Comma-separated bearer keys for the platform operator.
    pub operator_api_keys: String,
    /// Secret used to fingerprint QR payloads.
    pub qr_secret: String,
    /// Public origin used for gateway redirect and notification URLs.
    pub public_base_url: String,
    pub resend_api_key: String,
    pub mail_from: String,
    /// Administrative copy recipient for confirmation emails.
    pub admin_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            admin_api_keys: std::env::var("ADMIN_API_KEYS").unwrap_or_default(),
            operator_api_keys: std::env::var("OPERATOR_API_KEYS").unwrap_or_default(),
            qr_secret: std::env::var("QR_SECRET").context("Cannot load QR_SECRET env variable")?,
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .context("Cannot load PUBLIC_BASE_URL env variable")?,
            resend_api_key: std::env::var("RESEND_API_KEY").unwrap_or_default(),
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "onboarding@resend.dev".to_string()),
            admin_email: std::env::var("ADMIN_EMAIL").unwrap_or_default(),
        })
    }
}
