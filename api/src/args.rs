use std::path::PathBuf;

use clap::{ArgAction, Parser};
use nutriscan_core::domain::common::{ModelConfig, NutriScanConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriscan-api", version, about = "NutriScan health classification API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub metrics: MetricsArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

impl ServerArgs {
    /// Root path with a leading slash and no trailing slash; empty means no prefix.
    pub fn root_path(&self) -> String {
        let trimmed = self.root_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ModelArgs {
    #[arg(
        long = "model-path",
        env = "MODEL_PATH",
        default_value = "models/health_nutrition_model.json"
    )]
    pub path: PathBuf,

    /// Refuse to start when the model cannot be loaded.
    #[arg(long = "model-required", env = "MODEL_REQUIRED", default_value_t = false)]
    pub required: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MetricsArgs {
    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub enabled: bool,
}

impl From<Args> for NutriScanConfig {
    fn from(args: Args) -> Self {
        Self {
            model: ModelConfig {
                path: args.model.path,
                required: args.model.required,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["nutriscan-api"]);
        assert_eq!(args.server.port, 8000);
        assert_eq!(args.server.root_path(), "");
        assert_eq!(
            args.model.path,
            PathBuf::from("models/health_nutrition_model.json")
        );
        assert!(!args.model.required);
        assert!(args.metrics.enabled);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "nutriscan-api",
            "--server-port",
            "9000",
            "--model-path",
            "/srv/model.json",
            "--model-required",
            "--metrics-enabled",
            "false",
            "--allowed-origins",
            "https://a.example,https://b.example",
        ]);
        assert_eq!(args.server.port, 9000);
        assert!(args.model.required);
        assert!(!args.metrics.enabled);
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = NutriScanConfig::from(args);
        assert_eq!(config.model.path, PathBuf::from("/srv/model.json"));
        assert!(config.model.required);
    }

    #[test]
    fn test_root_path_is_normalized() {
        let mut args = Args::parse_from(["nutriscan-api"]);
        args.server.root_path = "api/".to_string();
        assert_eq!(args.server.root_path(), "/api");
        args.server.root_path = "/".to_string();
        assert_eq!(args.server.root_path(), "");
    }
}
