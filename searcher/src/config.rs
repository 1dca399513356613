use model::Snowflake;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Overrides the bundled signature font.
    pub font_path: Option<PathBuf>,
    #[serde(default)]
    pub json_log: bool,
}

impl Config {
    pub fn new(discord_token: impl Into<String>) -> Config {
        Config {
            discord_token: discord_token.into(),
            api_base: default_api_base(),
            user_agent: default_user_agent(),
            font_path: None,
            json_log: false,
        }
    }

    pub fn from_envvar() -> Result<Config, envy::Error> {
        envy::from_env()
    }

    pub fn user_url(&self, id: Snowflake) -> String {
        format!("{}/users/{}", self.api_base.trim_end_matches('/'), id)
    }
}

fn default_api_base() -> String {
    "https://discord.com/api/v10".to_string()
}

fn default_user_agent() -> String {
    format!(
        "DiscordBot (https://discordsearcher.pw, {})",
        env!("CARGO_PKG_VERSION")
    )
}
