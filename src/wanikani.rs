use std::fmt;

use reqwest::{Method, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::{AssignmentsApi, SubjectsApi, SummaryApi, UserApi, VoiceActorsApi};
use crate::error::{Error, Result, ValidationError};
use crate::query::Query;

pub const DEFAULT_BASE_URL: &str = "https://api.wanikani.com/v2";

const API_REVISION: &str = "20170710";

/// Entry point to the WaniKani v2 API, bound to one API token.
///
/// Creating a client sends no requests. Every operation on the returned namespaces sends
/// exactly one request, with no retries and no caching.
#[derive(Clone)]
pub struct WaniKaniAPIClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl fmt::Debug for WaniKaniAPIClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaniKaniAPIClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl WaniKaniAPIClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::Configuration("the WaniKani API key is empty".to_string()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The account that owns the API key.
    pub fn user(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    /// Progress records, one per subject the user has unlocked.
    pub fn assignments(&self) -> AssignmentsApi<'_> {
        AssignmentsApi::new(self)
    }

    /// Radicals, kanji, vocabulary and kana vocabulary.
    pub fn subjects(&self) -> SubjectsApi<'_> {
        SubjectsApi::new(self)
    }

    /// Lessons and reviews available now and over the next 24 hours.
    pub fn summary(&self) -> SummaryApi<'_> {
        SummaryApi::new(self)
    }

    pub fn voice_actors(&self) -> VoiceActorsApi<'_> {
        VoiceActorsApi::new(self)
    }

    pub(crate) async fn get(&self, path: &str, query: &Query) -> Result<Vec<u8>> {
        self.request(Method::GET, &format!("{}/{path}", self.base_url), query, None)
            .await
    }

    /// Fetches an absolute URL handed out by the API, such as `pages.next_url`.
    ///
    /// The URL must share the base URL's origin, so the token is never sent to another host.
    pub(crate) async fn get_url(&self, url: &Url) -> Result<Vec<u8>> {
        let same_origin = Url::parse(&self.base_url)
            .map(|base| base.origin() == url.origin())
            .unwrap_or(false);
        if !same_origin {
            warn!(%url, base_url = self.base_url, "refusing to follow page URL");
            return Err(ValidationError::ForeignPageUrl(url.to_string()).into());
        }

        self.request(Method::GET, url.as_str(), &Query::new(), None)
            .await
    }

    pub(crate) async fn put(&self, path: &str, body: Option<&Value>) -> Result<Vec<u8>> {
        self.request(
            Method::PUT,
            &format!("{}/{path}", self.base_url),
            &Query::new(),
            body,
        )
        .await
    }

    async fn request(
        &self,
        method: Method,
        url: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<Vec<u8>> {
        debug!(%method, url, "sending request");

        let mut request = self
            .client
            .request(method, url)
            .header("Wanikani-Revision", API_REVISION)
            .bearer_auth(&self.api_key);
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = match request.send().await?.error_for_status() {
            Ok(resp) => resp,
            Err(err) => {
                warn!(status = ?err.status(), url, "request failed");
                return Err(err.into());
            }
        };

        Ok(resp.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_blank_api_key() {
        assert!(matches!(
            WaniKaniAPIClient::new("  "),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = WaniKaniAPIClient::with_base_url("abc123", "http://localhost:1234/").unwrap();

        assert_eq!(client.base_url(), "http://localhost:1234");
    }

    #[tokio::test]
    async fn test_request_headers() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/user")
            .match_header("authorization", "Bearer abc123")
            .match_header("wanikani-revision", API_REVISION)
            .with_status(200)
            .with_body(fixtures::body(&fixtures::user()))
            .create_async()
            .await;

        let client = WaniKaniAPIClient::with_base_url("abc123", &server.url())?;
        client.user().get().await?;

        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn test_error_status_is_transport_error() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/summary")
            .with_status(401)
            .with_body(r#"{"error": "Unauthorized. Nice try.", "code": 401}"#)
            .create_async()
            .await;

        let client = WaniKaniAPIClient::with_base_url("bad-key", &server.url())?;
        let err = client.summary().get().await.unwrap_err();

        match err {
            Error::Transport(err) => {
                assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED))
            }
            other => panic!("expected a transport error, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() -> Result<()> {
        let client = WaniKaniAPIClient::with_base_url("abc123", "http://127.0.0.1:1")?;

        assert!(matches!(
            client.summary().get().await,
            Err(Error::Transport(_))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_body_is_validation_error() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/summary")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = WaniKaniAPIClient::with_base_url("abc123", &server.url())?;
        let err = client.summary().get().await.unwrap_err();

        assert!(err.is_validation());

        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_requests() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let user_mock = server
            .mock("GET", "/user")
            .with_status(200)
            .with_body(fixtures::body(&fixtures::user()))
            .create_async()
            .await;
        let summary_mock = server
            .mock("GET", "/summary")
            .with_status(200)
            .with_body(fixtures::body(&fixtures::summary()))
            .create_async()
            .await;

        let client = WaniKaniAPIClient::with_base_url("abc123", &server.url())?;
        let user = client.user().get();
        let summary = client.summary().get();
        let (user, summary) = tokio::try_join!(user, summary)?;

        user_mock.assert_async().await;
        summary_mock.assert_async().await;
        assert_eq!(user.data.username, "test-user");
        assert_eq!(summary.data.lessons[0].subject_ids, vec![10, 11]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_url_rejects_other_hosts() -> Result<()> {
        let client = WaniKaniAPIClient::with_base_url("abc123", "http://127.0.0.1:1")?;
        let url: Url = "https://elsewhere.example.com/v2/assignments?page_after_id=1"
            .parse()
            .unwrap();

        let err = client.get_url(&url).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::ForeignPageUrl(_))
        ));

        Ok(())
    }
}
