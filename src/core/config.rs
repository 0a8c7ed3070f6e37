use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub store: StoreConfig,
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// In-memory report store settings
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Load the demonstration reports on startup
    pub seed_demo_data: bool,
    /// Artificial delay applied to create and status updates
    pub simulated_latency: Duration,
}

/// Which classifier implementation backs `POST /api/classify`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierBackend {
    Stub,
    Llm,
}

impl std::str::FromStr for ClassifierBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stub" => Ok(ClassifierBackend::Stub),
            "llm" => Ok(ClassifierBackend::Llm),
            other => Err(format!(
                "CLASSIFIER_BACKEND must be 'stub' or 'llm', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub backend: ClassifierBackend,
    /// Artificial delay for the stub backend
    pub simulated_latency: Duration,
    /// Present only when `backend == Llm`
    pub llm: Option<LlmConfig>,
}

/// OpenAI-compatible chat completion endpoint used by the LLM classifier
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            store: StoreConfig::from_env()?,
            classifier: ClassifierConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Civic Reports API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for Civic Reports".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl StoreConfig {
    const DEFAULT_SIMULATED_LATENCY_MS: u64 = 0;

    pub fn from_env() -> Result<Self, String> {
        let seed_demo_data = parse_bool("STORE_SEED_DEMO_DATA", false)?;

        let latency_ms = env::var("STORE_SIMULATED_LATENCY_MS")
            .unwrap_or_else(|_| Self::DEFAULT_SIMULATED_LATENCY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "STORE_SIMULATED_LATENCY_MS must be a valid number".to_string())?;

        Ok(Self {
            seed_demo_data,
            simulated_latency: Duration::from_millis(latency_ms),
        })
    }
}

impl ClassifierConfig {
    const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1500;

    pub fn from_env() -> Result<Self, String> {
        let backend = env::var("CLASSIFIER_BACKEND")
            .unwrap_or_else(|_| "stub".to_string())
            .parse::<ClassifierBackend>()?;

        let latency_ms = env::var("CLASSIFIER_SIMULATED_LATENCY_MS")
            .unwrap_or_else(|_| Self::DEFAULT_SIMULATED_LATENCY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "CLASSIFIER_SIMULATED_LATENCY_MS must be a valid number".to_string())?;

        let llm = match backend {
            ClassifierBackend::Llm => Some(LlmConfig::from_env()?),
            ClassifierBackend::Stub => None,
        };

        Ok(Self {
            backend,
            simulated_latency: Duration::from_millis(latency_ms),
            llm,
        })
    }
}

impl LlmConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("CLASSIFIER_LLM_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string())
            .trim_end_matches('/')
            .to_string();

        let api_key = env::var("CLASSIFIER_LLM_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                "CLASSIFIER_LLM_API_KEY environment variable is required when CLASSIFIER_BACKEND=llm"
                    .to_string()
            })?;

        let model = env::var("CLASSIFIER_LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let timeout_secs = env::var("CLASSIFIER_LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "CLASSIFIER_LLM_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url,
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_bool(key: &str, default: bool) -> Result<bool, String> {
    match env::var(key) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(format!("{} must be a boolean (true/false)", key)),
        },
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_backend_from_str() {
        assert_eq!(
            "stub".parse::<ClassifierBackend>(),
            Ok(ClassifierBackend::Stub)
        );
        assert_eq!(" LLM ".parse::<ClassifierBackend>(), Ok(ClassifierBackend::Llm));
        assert!("gemini".parse::<ClassifierBackend>().is_err());
    }

    #[test]
    fn test_swagger_credentials() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: "t".to_string(),
            version: "v".to_string(),
            description: "d".to_string(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }
}
