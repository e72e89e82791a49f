use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent. The name in the message
    /// matches the variable `Config::from_env` was looking for.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
