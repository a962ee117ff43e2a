use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub leads_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: SecretString::from(
                env::var("MONGO_CONN_STRING")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "viver-bem-local".to_string()),
            leads_collection: env::var("LEADS_COLLECTION").unwrap_or_else(|_| "leads".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string()),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if the deployment still points at developer defaults
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.mongo_conn_string.expose_secret() == "mongodb://localhost:27017" {
            panic!(
                "FATAL: MONGO_CONN_STRING is using the local default! Set MONGO_CONN_STRING environment variable."
            );
        }

        if self.cors_allowed_origin == "*" {
            panic!(
                "FATAL: CORS_ALLOWED_ORIGIN is using the permissive default! Set CORS_ALLOWED_ORIGIN to the site origin."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
            mongo_db_name: "viver-bem-test".to_string(),
            leads_collection: "leads".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "*".to_string(),
        }
    }
}
