#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
}

impl AppConfig {
    /// Reads the configuration from the environment. `DATABASE_URL` is
    /// required; the process must not start without it.
    pub fn from_env() -> Result<Self, String> {
        let raw_url = std::env::var("DATABASE_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        if raw_url.is_empty() {
            return Err("DATABASE_URL is not set".to_string());
        }

        // Hosted providers hand out `postgresql://` URLs; the driver wants
        // the `postgres://` scheme.
        let database_url = raw_url.replacen("postgresql://", "postgres://", 1);

        Ok(Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            database_url,
        })
    }
}
