use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// When unset, any origin may call the API.
    pub frontend_origin: Option<String>,
    /// Page size for `GET /api/updates` when the caller gives no usable limit.
    pub updates_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            frontend_origin: None,
            updates_limit: 50,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let defaults = Self::default();

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);
        let updates_limit = env::var("UPDATES_LIMIT")
            .ok()
            .and_then(|l| l.trim().parse().ok())
            .unwrap_or(defaults.updates_limit);

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            frontend_origin: env::var("FRONTEND_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            updates_limit,
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_browser_client() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.updates_limit, 50);
        assert!(config.frontend_origin.is_none());
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 3000));
    }
}
