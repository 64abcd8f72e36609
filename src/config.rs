use crate::error::CmsError;
use chrono::TimeDelta;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration. Defaults merged with `PDFMASTER_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub session_ttl_minutes: i64,
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:pdfmaster.db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            loglevel: "info".to_string(),
            session_ttl_minutes: 12 * 60,
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("PDFMASTER_"))
    }

    /// Extract and validate. A TTL chrono cannot represent is rejected here.
    pub fn load() -> Result<Self, CmsError> {
        let cfg: Self = Self::figment().extract()?;
        if TimeDelta::try_minutes(cfg.session_ttl_minutes).is_none() {
            return Err(CmsError::Config(figment::Error::from(format!(
                "session_ttl_minutes out of range: {}",
                cfg.session_ttl_minutes
            ))));
        }
        Ok(cfg)
    }

    /// Session lifetime, at least one minute. Saturates instead of panicking
    /// when the config was built without `load`.
    pub fn session_ttl(&self) -> TimeDelta {
        TimeDelta::try_minutes(self.session_ttl_minutes.max(1)).unwrap_or(TimeDelta::MAX)
    }
}
