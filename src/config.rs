// ============================================================================
// CONFIG - Configuración de la app (tiempo de compilación)
// ============================================================================
// Una sola URL de backend para ambas páginas, elegida según ENVIRONMENT
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL_DEVELOPMENT: &str = "http://localhost:3000";
const DEFAULT_BACKEND_URL_PRODUCTION: &str = "https://autodeal-backend.onrender.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub default_country_code: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_URL_DEVELOPMENT.to_string(),
            backend_url_production: DEFAULT_BACKEND_URL_PRODUCTION.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            default_country_code: crate::utils::constants::DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            default_country_code: option_env!("DEFAULT_COUNTRY_CODE")
                .map(str::to_string)
                .unwrap_or(defaults.default_country_code),
        }
    }

    /// Obtiene la URL del backend según el entorno actual (sin "/" final)
    pub fn backend_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        };
        url.trim_end_matches('/')
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_is_the_default_environment() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:3000");
        assert_eq!(config.default_country_code, "+91");
    }

    #[test]
    fn production_uses_deployed_backend() {
        let config = AppConfig {
            environment: "production".to_string(),
            backend_url_production: "https://api.example.com/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), "https://api.example.com");
    }

    #[test]
    fn unknown_environment_falls_back_to_development() {
        let config = AppConfig {
            environment: "staging".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), config.backend_url_development);
    }

    #[test]
    fn disabled_logging_only_keeps_warnings() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
