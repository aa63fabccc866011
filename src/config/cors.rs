use std::env;

#[derive(Clone, Debug)]
pub struct CorsConfig {
    /// Origins allowed to call the API. `*` allows any origin (the default),
    /// at the cost of disabling credentialed requests.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self {
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_allows_any() {
        let config = CorsConfig {
            allowed_origins: vec!["*".to_string()],
        };
        assert!(config.allows_any_origin());
    }

    #[test]
    fn explicit_origins_do_not_allow_any() {
        let config = CorsConfig {
            allowed_origins: vec!["https://coachden.example".to_string()],
        };
        assert!(!config.allows_any_origin());
    }
}
