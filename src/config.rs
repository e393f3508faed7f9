use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_uri: String,
    pub database_name: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let mongo_uri =
            env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database_name =
            env::var("DATABASE_NAME").unwrap_or_else(|_| "coderoot_bot".to_string());
        Ok(Self {
            mongo_uri,
            database_name,
        })
    }
}
