use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::{ApiError, FaveApi, IdentityResponse};
use crate::config::ClientConfig;
use crate::model::Post;

/// REST implementation of [`FaveApi`].
pub struct HttpFaveApi {
    http: reqwest::Client,
    base_url: String,
    timeline_path: String,
}

/// The timeline endpoint answers either a bare array or `{"posts": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TimelineBody {
    List(Vec<Post>),
    Wrapped { posts: Vec<Post> },
}

impl HttpFaveApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            timeline_path: config.timeline_path.trim_end_matches('/').to_string(),
        })
    }

    /// `{base}/api/users/{username}`, username encoded as one segment.
    fn user_url(&self, username: &str) -> String {
        format!("{}/api/users/{}", self.base_url, urlencoding::encode(username))
    }

    /// `{base}{timeline_path}/{username}`.
    fn timeline_url(&self, username: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            self.timeline_path,
            urlencoding::encode(username)
        )
    }

    /// Map a non-2xx response to `ApiError::Server`.
    fn check_status(resp: &reqwest::Response) -> Result<u16, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        Ok(status.as_u16())
    }
}

#[async_trait::async_trait]
impl FaveApi for HttpFaveApi {
    async fn establish_user(&self, username: &str) -> Result<IdentityResponse, ApiError> {
        let url = self.user_url(username);
        debug!(%url, "establishing identity");
        let resp = self.http.post(&url).send().await?;
        let status = Self::check_status(&resp)?;
        let body = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(format!("identity response: {}", e)))?;
        Ok(IdentityResponse { status, body })
    }

    async fn fetch_timeline(&self, username: &str) -> Result<Vec<Post>, ApiError> {
        let url = self.timeline_url(username);
        debug!(%url, "fetching timeline");
        let resp = self.http.get(&url).send().await?;
        Self::check_status(&resp)?;
        let body = resp
            .json::<TimelineBody>()
            .await
            .map_err(|e| ApiError::Decode(format!("timeline response: {}", e)))?;
        Ok(match body {
            TimelineBody::List(posts) | TimelineBody::Wrapped { posts } => posts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> HttpFaveApi {
        HttpFaveApi::new(&ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn user_url_encodes_segment() {
        let api = api("http://localhost:8080/test/");
        assert_eq!(api.user_url("alice"), "http://localhost:8080/test/api/users/alice");
        assert_eq!(
            api.user_url("a b/c"),
            "http://localhost:8080/test/api/users/a%20b%2Fc"
        );
        assert_eq!(
            api.user_url("推し"),
            "http://localhost:8080/test/api/users/%E6%8E%A8%E3%81%97"
        );
    }

    #[test]
    fn timeline_url_uses_configured_path() {
        let api = HttpFaveApi::new(&ClientConfig {
            base_url: "http://h".into(),
            timeline_path: "/api/posts/".into(),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(api.timeline_url("bob"), "http://h/api/posts/bob");
    }

    #[test]
    fn timeline_body_accepts_both_shapes() {
        let post = serde_json::json!({
            "id": 1, "message": "m", "fave_id": 2, "date_time": "2024-01-01 00:00",
            "fave_name": "f", "reactions": {"like": 0, "watch": 0, "love": 0, "new_listener": 0}
        });
        let list: TimelineBody = serde_json::from_value(serde_json::json!([post.clone()])).unwrap();
        let wrapped: TimelineBody =
            serde_json::from_value(serde_json::json!({ "posts": [post] })).unwrap();
        assert!(matches!(list, TimelineBody::List(ref p) if p.len() == 1));
        assert!(matches!(wrapped, TimelineBody::Wrapped { ref posts } if posts.len() == 1));
    }
}
