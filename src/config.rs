use crate::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,

    /// Shared secret for validating HS256 bearer tokens issued by the
    /// identity provider gateway.
    pub jwt_secret: String,
    /// Expected `iss` claim on incoming tokens.
    pub jwt_issuer: String,

    /// Base URL of the external identity/directory service.
    pub directory_api_url: String,
    /// Service token used to authenticate against the directory service.
    pub directory_api_token: String,
    /// Directory group whose members hold the admin role.
    pub directory_admin_group: String,
    /// Directory group whose members hold the mentor role.
    pub directory_mentor_group: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            jwt_secret: require("JWT_SECRET")?,
            jwt_issuer: require("JWT_ISSUER")?,
            directory_api_url: require("DIRECTORY_API_URL")?,
            directory_api_token: require("DIRECTORY_API_TOKEN")?,
            directory_admin_group: require("DIRECTORY_ADMIN_GROUP")?,
            directory_mentor_group: require("DIRECTORY_MENTOR_GROUP")?,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
