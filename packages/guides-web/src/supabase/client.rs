//! Supabase client for the PostgREST and Auth endpoints

use reqwest::header::ACCEPT;
use reqwest::{Response, Url};
use serde::{de::DeserializeOwned, Deserialize};

use super::SelectQuery;
use crate::types::AuthUser;

const REST_PATH: &str = "rest/v1/";
const AUTH_PATH: &str = "auth/v1/";

/// Error body returned by PostgREST (`message`) and GoTrue (`msg`,
/// `error_description`)
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    hint: Option<String>,
}

impl ApiErrorBody {
    fn into_message(self) -> Option<String> {
        let message = self.message.or(self.msg).or(self.error_description)?;
        Some(match self.hint {
            Some(hint) if !hint.is_empty() => format!("{message} ({hint})"),
            _ => message,
        })
    }
}

/// Error type for Supabase operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Supabase returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid Supabase URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ClientError {
    /// True for 401/403 responses, i.e. an expired or revoked access token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status: 401 | 403, .. })
    }
}

/// Client for a single Supabase project
#[derive(Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl SupabaseClient {
    /// Create a client for the project at `base_url` using its public anon key
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, ClientError> {
        let mut url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a base URL".to_string(),
            });
        }
        // Url::join drops the last segment unless the path ends in a slash
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: url,
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })
    }

    /// Read rows from a table through PostgREST
    pub async fn select<T: DeserializeOwned>(&self, query: &SelectQuery) -> Result<Vec<T>, ClientError> {
        let url = self.endpoint(&format!("{}{}", REST_PATH, query.table()))?;
        let params = query.params();
        tracing::debug!(%url, ?params, "Selecting rows");

        let response = self
            .client
            .get(url)
            .query(&params)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let body = Self::success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Resolve a user access token into the signed-in user
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, ClientError> {
        let url = self.endpoint(&format!("{AUTH_PATH}user"))?;

        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let body = Self::success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Revoke the session behind a user access token
    pub async fn sign_out(&self, access_token: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&format!("{AUTH_PATH}logout"))?;

        let response = self
            .client
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        Self::success_body(response).await?;
        Ok(())
    }

    async fn success_body(response: Response) -> Result<String, ClientError> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(ApiErrorBody::into_message)
            .unwrap_or(body);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        id: String,
    }

    fn client_for(server: &MockServer) -> SupabaseClient {
        SupabaseClient::new(&server.base_url(), "anon-key").unwrap()
    }

    #[tokio::test]
    async fn select_sends_query_and_api_key() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/rest/v1/provider_profiles")
                    .query_param("select", "*")
                    .query_param("subscription_status", "eq.active")
                    .query_param("order", "created_at.desc")
                    .header("apikey", "anon-key")
                    .header("authorization", "Bearer anon-key");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!([{ "id": "a" }, { "id": "b" }]));
            })
            .await;

        let query = SelectQuery::from("provider_profiles")
            .eq("subscription_status", "active")
            .order("created_at", false);
        let rows: Vec<Row> = client_for(&server).select(&query).await.unwrap();

        mock.assert_async().await;
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn postgrest_error_message_is_surfaced() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rest/v1/provider_profiles");
                then.status(400).json_body(json!({
                    "code": "42703",
                    "message": "column provider_profiles.subscription_status does not exist",
                    "details": null,
                    "hint": null
                }));
            })
            .await;

        let err = client_for(&server)
            .select::<Row>(&SelectQuery::from("provider_profiles"))
            .await
            .unwrap_err();

        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("does not exist"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_is_kept_verbatim() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rest/v1/provider_profiles");
                then.status(503).body("upstream unavailable");
            })
            .await;

        let err = client_for(&server)
            .select::<Row>(&SelectQuery::from("provider_profiles"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Supabase returned 503: upstream unavailable");
    }

    #[tokio::test]
    async fn malformed_rows_are_a_serialization_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rest/v1/provider_profiles");
                then.status(200).json_body(json!({ "not": "a list" }));
            })
            .await;

        let err = client_for(&server)
            .select::<Row>(&SelectQuery::from("provider_profiles"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[tokio::test]
    async fn get_user_uses_access_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/auth/v1/user")
                    .header("apikey", "anon-key")
                    .header("authorization", "Bearer user-token");
                then.status(200).json_body(json!({
                    "id": "5f0c1a52-3c1e-4d8e-9d5e-0b7f3c2a9e11",
                    "aud": "authenticated",
                    "email": "tino@example.com",
                    "phone": ""
                }));
            })
            .await;

        let user = client_for(&server).get_user("user-token").await.unwrap();

        mock.assert_async().await;
        assert_eq!(user.email.as_deref(), Some("tino@example.com"));
    }

    #[tokio::test]
    async fn expired_token_is_unauthorized() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/auth/v1/user");
                then.status(401).json_body(json!({
                    "code": 401,
                    "msg": "invalid JWT: token is expired"
                }));
            })
            .await;

        let err = client_for(&server).get_user("stale").await.unwrap_err();

        assert!(err.is_unauthorized());
        assert!(err.to_string().contains("token is expired"));
    }

    #[tokio::test]
    async fn sign_out_posts_logout() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/auth/v1/logout")
                    .header("authorization", "Bearer user-token");
                then.status(204);
            })
            .await;

        client_for(&server).sign_out("user-token").await.unwrap();

        mock.assert_async().await;
    }

    #[test]
    fn base_url_with_path_keeps_its_prefix() {
        let client = SupabaseClient::new("http://localhost:54321/project", "k").unwrap();

        let url = client.endpoint("rest/v1/provider_profiles").unwrap();

        assert_eq!(url.as_str(), "http://localhost:54321/project/rest/v1/provider_profiles");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            SupabaseClient::new("not a url", "k"),
            Err(ClientError::InvalidUrl { .. })
        ));
        assert!(matches!(
            SupabaseClient::new("mailto:guides@example.com", "k"),
            Err(ClientError::InvalidUrl { .. })
        ));
    }
}
