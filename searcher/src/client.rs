use crate::{Config, Error, Result, UserProfile};
use model::user::User;
use model::Snowflake;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Looks users up through the Discord REST API.
///
/// Cheap to share: the inner `reqwest::Client` is reference counted, so every
/// clone reuses the same connection pool.
#[derive(Clone)]
pub struct Client {
    config: Config,
    http_client: reqwest::Client,
}

impl Client {
    pub fn new(config: Config) -> Result<Client> {
        let http_client = reqwest::ClientBuilder::new()
            .use_rustls_tls()
            .build()
            .map_err(Error::TransportError)?;

        Ok(Self::new_with_client(config, http_client))
    }

    pub fn new_with_client(config: Config, http_client: reqwest::Client) -> Client {
        Client {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Fetches the raw user object.
    pub async fn fetch_user(&self, id: Snowflake) -> Result<User> {
        let url = self.config.user_url(id);
        debug!(%id, %url, "Fetching user");

        let res = self
            .http_client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.discord_token))
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await
            .map_err(Error::TransportError)?;

        match res.status() {
            StatusCode::NOT_FOUND => Error::UserNotFound(id).into(),
            StatusCode::UNAUTHORIZED => Error::Unauthorized.into(),
            status if !status.is_success() => {
                warn!(%id, %status, "Discord returned an error response");
                Error::RemoteError(status).into()
            }
            _ => res.json().await.map_err(Error::DecodeError),
        }
    }

    /// Fetches a user and resolves their avatar URL and badges.
    pub async fn fetch_user_profile(&self, id: Snowflake) -> Result<UserProfile> {
        let user = self.fetch_user(id).await?;
        UserProfile::from_user(id, user)
    }
}
