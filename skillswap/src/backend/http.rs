use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::SkillSwapBackend;
use crate::config::BackendConfig;
use crate::error::{Result, SkillSwapError};
use crate::models::{Match, NewSwipe, Profile, ProfilePhoto, Swipe, User, UserId};

/// Longest upstream error body echoed back in error messages.
const MAX_ERROR_BODY: usize = 200;

/// [`SkillSwapBackend`] over HTTP/JSON.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|error| {
                SkillSwapError::Internal(format!("Failed to create backend HTTP client: {error}"))
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET backend");
        let response = self.client.get(url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            body.chars().take(MAX_ERROR_BODY).collect()
        };
        tracing::warn!(status = status.as_u16(), %message, "Backend request failed");

        Err(SkillSwapError::Upstream {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl SkillSwapBackend for HttpBackend {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.get_json("api/users").await
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        self.get_json("api/profiles").await
    }

    async fn list_swipes_by_user(&self, swiper_id: UserId) -> Result<Vec<Swipe>> {
        self.get_json(&format!("api/swipes/user/{swiper_id}")).await
    }

    async fn create_swipe(&self, swipe: &NewSwipe) -> Result<Swipe> {
        swipe.validate()?;

        let url = self.endpoint("api/swipes")?;
        tracing::debug!(%url, is_like = swipe.is_like, "POST backend swipe");
        let response = self.client.post(url).json(swipe).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn list_photos(&self, profile_id: i64) -> Result<Vec<ProfilePhoto>> {
        self.get_json(&format!("api/photos/{profile_id}")).await
    }

    async fn list_matches(&self) -> Result<Vec<Match>> {
        self.get_json("api/matches").await
    }

    async fn ping(&self) -> Result<()> {
        let url = self.endpoint("api/matches")?;
        let response = self.client.head(url).send().await?;
        // Any HTTP answer means the backend is up.
        if response.status().is_server_error() {
            return Err(SkillSwapError::Upstream {
                status: response.status().as_u16(),
                message: "backend health probe failed".to_string(),
            });
        }
        Ok(())
    }
}
