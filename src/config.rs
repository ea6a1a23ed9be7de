use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host (default: 0.0.0.0)
    pub host: String,
    /// Server port (default: 3000)
    pub port: u16,
    /// OpenAI API key
    pub openai_api_key: String,
    /// OpenAI API base URL (default: https://api.openai.com/v1)
    pub openai_base_url: String,
    /// Model used for audits and roadmaps (default: gpt-4o)
    pub openai_model: String,
    /// Supabase project URL
    pub supabase_url: String,
    /// Supabase service-role key
    pub supabase_service_role_key: String,
    /// Directory holding the built front-end (default: dist)
    pub static_dir: String,
    /// Deadline for outbound HTTP calls in seconds (default: 120)
    pub http_timeout_secs: u64,
    /// Log level (default: info)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY"))?,
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            supabase_url: env::var("SUPABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("SUPABASE_URL"))?,
            supabase_service_role_key: env::var("SUPABASE_SERVICE_ROLE_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("SUPABASE_SERVICE_ROLE_KEY"))?,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Invalid HTTP timeout")]
    InvalidTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-wide; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            "HOST",
            "PORT",
            "OPENAI_API_KEY",
            "OPENAI_BASE_URL",
            "OPENAI_MODEL",
            "SUPABASE_URL",
            "SUPABASE_SERVICE_ROLE_KEY",
            "STATIC_DIR",
            "HTTP_TIMEOUT_SECS",
            "LOG_LEVEL",
        ] {
            env::remove_var(key);
        }
    }

    fn set_required() {
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("SUPABASE_URL", "https://project.supabase.co");
        env::set_var("SUPABASE_SERVICE_ROLE_KEY", "service-role-key");
    }

    #[test]
    fn test_from_env_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        set_required();

        let config = Config::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.openai_model, "gpt-4o");
        assert_eq!(config.static_dir, "dist");
        assert_eq!(config.http_timeout_secs, 120);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_env_missing_openai_key() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("SUPABASE_URL", "https://project.supabase.co");
        env::set_var("SUPABASE_SERVICE_ROLE_KEY", "service-role-key");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_from_env_missing_supabase_url() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("SUPABASE_SERVICE_ROLE_KEY", "service-role-key");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("SUPABASE_URL"));
    }

    #[test]
    fn test_from_env_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        set_required();
        env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert_eq!(err.to_string(), "Invalid port number");
    }

    #[test]
    fn test_from_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        set_required();
        env::set_var("PORT", "8081");
        env::set_var("OPENAI_MODEL", "gpt-4o-mini");
        env::set_var("STATIC_DIR", "public");
        env::set_var("HTTP_TIMEOUT_SECS", "30");

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.static_dir, "public");
        assert_eq!(config.http_timeout_secs, 30);
    }
}
