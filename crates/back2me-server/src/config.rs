use std::net::SocketAddr;

use anyhow::{Context, Result, bail};

use back2me_crypto::CredentialScheme;

/// Server settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub seed_sample_data: bool,
    pub credential_scheme: CredentialScheme,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("BACK2ME_HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("BACK2ME_PORT")
            .unwrap_or_else(|| "8000".into())
            .parse()
            .context("BACK2ME_PORT must be a port number")?;

        let workers: usize = lookup("BACK2ME_WORKERS")
            .unwrap_or_else(|| "10".into())
            .parse()
            .context("BACK2ME_WORKERS must be a positive integer")?;
        if workers == 0 {
            bail!("BACK2ME_WORKERS must be at least 1");
        }

        let seed_sample_data = match lookup("BACK2ME_SEED_SAMPLE_DATA").as_deref() {
            None => true,
            Some("1" | "true" | "yes" | "on") => true,
            Some("0" | "false" | "no" | "off") => false,
            Some(other) => bail!("BACK2ME_SEED_SAMPLE_DATA: expected a boolean, got '{}'", other),
        };

        let credential_scheme: CredentialScheme = lookup("BACK2ME_PASSWORD_SCHEME")
            .as_deref()
            .unwrap_or("sha256")
            .parse()
            .context("BACK2ME_PASSWORD_SCHEME must be 'sha256' or 'argon2'")?;

        Ok(Self {
            host,
            port,
            workers,
            seed_sample_data,
            credential_scheme,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
