use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    #[serde(default = "default_max_body_kb")]
    pub max_body_kb: usize,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub tls: TlsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    /// Submissions allowed per client IP within one window.
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
    /// Forward accepted submissions to this Discord webhook.
    #[serde(default)]
    pub discord_webhook_url: Option<String>,
}

impl ContactConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    /// Catalog TOML to serve instead of the bundled one.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlsConfig {
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

impl TlsConfig {
    pub fn is_enabled(&self) -> bool {
        self.cert_path.is_some() && self.key_path.is_some()
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}

fn default_max_body_kb() -> usize { 64 }
fn default_max_requests() -> u32 { 5 }
fn default_window_secs() -> u64 { 15 * 60 }

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
            discord_webhook_url: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_body_kb: default_max_body_kb(),
            contact: ContactConfig::default(),
            content: ContentConfig::default(),
            tls: TlsConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = std::env::var("FOLIO_WEB_CONFIG").map(PathBuf::from).ok();

        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => ServerConfig::default(),
        };

        config.apply_env_overrides()?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Ok(addr) = std::env::var("FOLIO_BIND_ADDR") {
            self.bind_addr = addr.parse()?;
        }

        if let Ok(path) = std::env::var("FOLIO_CONTENT_PATH") {
            self.content.path = Some(PathBuf::from(path));
        }

        if let Ok(val) = std::env::var("FOLIO_CONTACT_MAX_REQUESTS") {
            self.contact.max_requests = val.parse()?;
        }
        if let Ok(val) = std::env::var("FOLIO_CONTACT_WINDOW_SECS") {
            self.contact.window_secs = val.parse()?;
        }
        if let Ok(url) = std::env::var("FOLIO_DISCORD_WEBHOOK_URL") {
            self.contact.discord_webhook_url = Some(url);
        }

        if let Ok(val) = std::env::var("FOLIO_MAX_BODY_KB") {
            if let Ok(kb) = val.parse::<usize>() {
                self.max_body_kb = kb;
            }
        }

        if let Ok(cert) = std::env::var("FOLIO_TLS_CERT") {
            self.tls.cert_path = Some(cert);
        }
        if let Ok(key) = std::env::var("FOLIO_TLS_KEY") {
            self.tls.key_path = Some(key);
        }

        Ok(())
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.contact.max_requests == 0 {
            anyhow::bail!("contact.max_requests must be at least 1");
        }
        if self.contact.window_secs == 0 {
            anyhow::bail!("contact.window_secs must be at least 1");
        }
        if self.tls.cert_path.is_some() != self.tls.key_path.is_some() {
            tracing::warn!("Only one of tls.cert_path / tls.key_path is set; serving plain HTTP");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_contact_policy() {
        let config = ServerConfig::default();
        assert_eq!(config.contact.max_requests, 5);
        assert_eq!(config.contact.window(), Duration::from_secs(900));
        assert!(config.contact.discord_webhook_url.is_none());
        assert!(config.content.path.is_none());
        assert!(!config.tls.is_enabled());
        assert_eq!(config.max_body_kb, 64);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("folio.toml");
        fs::write(
            &path,
            r#"
bind_addr = "127.0.0.1:8080"

[contact]
max_requests = 3
"#,
        )
        .unwrap();

        let config = ServerConfig::from_file(&path).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.contact.max_requests, 3);
        assert_eq!(config.contact.window_secs, 900);
        assert_eq!(config.max_body_kb, 64);
    }

    #[test]
    fn full_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("folio.toml");
        fs::write(
            &path,
            r#"
max_body_kb = 16

[contact]
max_requests = 10
window_secs = 60
discord_webhook_url = "https://discord.example/hook"

[content]
path = "/srv/folio/site.toml"

[tls]
cert_path = "/etc/folio/cert.pem"
key_path = "/etc/folio/key.pem"
"#,
        )
        .unwrap();

        let config = ServerConfig::from_file(&path).unwrap();
        assert_eq!(config.max_body_kb, 16);
        assert_eq!(config.contact.window(), Duration::from_secs(60));
        assert_eq!(
            config.contact.discord_webhook_url.as_deref(),
            Some("https://discord.example/hook")
        );
        assert_eq!(config.content.path, Some(PathBuf::from("/srv/folio/site.toml")));
        assert!(config.tls.is_enabled());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("folio.toml");
        fs::write(&path, "bind_addr = 42").unwrap();
        assert!(ServerConfig::from_file(&path).is_err());
    }

    #[test]
    fn zero_limit_rejected() {
        let mut config = ServerConfig::default();
        config.contact.max_requests = 0;
        assert!(config.check().is_err());
    }
}
