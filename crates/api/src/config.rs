use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root of the static asset tree. `/static/*` is served from here and
    /// `*.html` pages from its `html/` subdirectory.
    pub static_dir: PathBuf,
    /// File holding the admin password hash (PHC string).
    pub admin_hash_file: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default       |
    /// |------------------------|---------------|
    /// | `HOST`                 | `0.0.0.0`     |
    /// | `PORT`                 | `8080`        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`          |
    /// | `STATIC_DIR`           | `static`      |
    /// | `ADMIN_HASH_FILE`      | `.hashedpass` |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Panics on unparseable numeric values: misconfiguration should stop
    /// the server at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = lookup("STATIC_DIR")
            .unwrap_or_else(|| "static".into())
            .into();

        let admin_hash_file = lookup("ADMIN_HASH_FILE")
            .unwrap_or_else(|| ".hashedpass".into())
            .into();

        Self {
            host,
            port,
            request_timeout_secs,
            static_dir,
            admin_hash_file,
        }
    }

    /// Directory that `*.html` passthrough requests are served from.
    pub fn html_dir(&self) -> PathBuf {
        self.static_dir.join("html")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.admin_hash_file, PathBuf::from(".hashedpass"));
    }

    #[test]
    fn port_is_read_from_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "3000")]));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn html_dir_is_under_static_dir() {
        let config = ServerConfig::from_lookup(lookup_from(&[("STATIC_DIR", "/srv/site")]));
        assert_eq!(config.html_dir(), PathBuf::from("/srv/site/html"));
    }

    #[test]
    #[should_panic(expected = "PORT must be a valid u16")]
    fn invalid_port_panics() {
        ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));
    }
}
