//! HTTP implementation of the clip API

use async_trait::async_trait;
use serde_json::json;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::feed::{ClipRecord, FeedQuery, LikeResult, NewClip};

use super::ClipApi;

/// Clip API client over reqwest
pub struct HttpClipApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClipApi {
    /// Build a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn clips_url(&self) -> String {
        format!("{}/clips/", self.base_url)
    }

    fn clip_action_url(&self, id: u64, action: &str) -> String {
        format!("{}/clips/{}/{}", self.base_url, id, action)
    }

    /// Map a non-success response to `Error::Api`, keeping the body text as
    /// the user-visible message.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "Clip API returned non-success status");

        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn post_like_action(&self, id: u64, action: &str, user: &str) -> Result<LikeResult> {
        let response = self
            .http
            .post(self.clip_action_url(id, action))
            .json(&json!({ "user": user }))
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ClipApi for HttpClipApi {
    async fn fetch_clips(&self, query: &FeedQuery) -> Result<Vec<ClipRecord>> {
        let response = self
            .http
            .get(self.clips_url())
            .query(&query.to_query_pairs())
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let records: Vec<ClipRecord> = response.json().await?;

        tracing::debug!(count = records.len(), "Fetched clip feed");
        Ok(records)
    }

    async fn submit_clip(&self, clip: &NewClip) -> Result<ClipRecord> {
        let response = self.http.post(self.clips_url()).json(clip).send().await?;

        let response = Self::check_status(response).await?;
        let created: ClipRecord = response.json().await?;

        tracing::info!(clip = created.id, source = %created.source, "Clip submitted");
        Ok(created)
    }

    async fn like_clip(&self, id: u64, user: &str) -> Result<LikeResult> {
        self.post_like_action(id, "like", user).await
    }

    async fn unlike_clip(&self, id: u64, user: &str) -> Result<LikeResult> {
        self.post_like_action(id, "unlike", user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::ClipSource;

    fn test_config(server: &mockito::ServerGuard) -> ClientConfig {
        ClientConfig::with_base_url(server.url())
    }

    #[tokio::test]
    async fn test_fetch_clips_with_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/clips/")
            .match_query(mockito::Matcher::UrlEncoded(
                "tag".to_string(),
                "funny".to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{
                    "id": 1,
                    "url": "https://clips.twitch.tv/Abc",
                    "creator": "someone",
                    "tags": "[\"funny\"]",
                    "source": "twitch",
                    "likes": 2,
                    "liked_by": "[\"a\", \"b\"]"
                }]"#,
            )
            .create_async()
            .await;

        let api = HttpClipApi::new(&test_config(&server)).unwrap();
        let records = api
            .fetch_clips(&FeedQuery::all().tag("funny"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, ClipSource::Twitch);
        assert_eq!(records[0].likes, 2);
        assert_eq!(records[0].tags, vec!["funny"]);
    }

    #[tokio::test]
    async fn test_fetch_clips_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/clips/")
            .with_status(500)
            .with_body("database down")
            .create_async()
            .await;

        let api = HttpClipApi::new(&test_config(&server)).unwrap();
        let err = api.fetch_clips(&FeedQuery::all()).await.unwrap_err();

        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database down");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_clip_posts_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/clips/")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "url": "https://kick.com/u/clips/clip_X",
                "creator": "someone",
                "source": "kick",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id": 9, "url": "https://kick.com/u/clips/clip_X",
                    "creator": "someone", "tags": [], "source": "kick"}"#,
            )
            .create_async()
            .await;

        let api = HttpClipApi::new(&test_config(&server)).unwrap();
        let created = api
            .submit_clip(&NewClip {
                url: "https://kick.com/u/clips/clip_X".to_string(),
                tags: Vec::new(),
                creator: "someone".to_string(),
                source: ClipSource::Kick,
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(created.id, 9);
    }

    #[tokio::test]
    async fn test_like_clip_hits_like_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/clips/5/like")
            .match_body(mockito::Matcher::Json(serde_json::json!({"user": "viewer1"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"likes": 3, "liked_by": ["a", "viewer1"]}"#)
            .create_async()
            .await;

        let api = HttpClipApi::new(&test_config(&server)).unwrap();
        let result = api.like_clip(5, "viewer1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.likes, 3);
        assert_eq!(result.liked_by, vec!["a", "viewer1"]);
    }

    #[tokio::test]
    async fn test_unlike_clip_hits_unlike_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/clips/5/unlike")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"likes": 1, "liked_by": ["a"]}"#)
            .create_async()
            .await;

        let api = HttpClipApi::new(&test_config(&server)).unwrap();
        let result = api.unlike_clip(5, "viewer1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.likes, 1);
    }
}
