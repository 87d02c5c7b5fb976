use crate::client::DEFAULT_API_URL;

pub struct Config {
    pub database_url: String,
    pub user_agent: String,
    pub api_url: String,
    pub import_corps: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            user_agent: std::env::var("USER_AGENT")?,
            api_url: std::env::var("EVE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            import_corps: std::env::var("IMPORT_CORPS")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}
