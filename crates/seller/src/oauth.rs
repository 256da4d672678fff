//! OAuth identity provider client.
//!
//! Implements the server side of the authorization-code flow against the
//! configured external identity provider:
//! 1. Build the authorization URL with `authorization_url()`
//! 2. Exchange the callback code for tokens with `exchange_code()`
//! 3. Read the asserted identity with `fetch_email()`
//!
//! The provider is configuration (`OAUTH_*` variables); the service only
//! assumes standard authorize/token/userinfo endpoints.

use secrecy::ExposeSecret;
use serde::Deserialize;
use url::Url;

use crate::config::OauthConfig;

/// Errors from OAuth provider interactions.
#[derive(Debug, thiserror::Error)]
pub enum OauthError {
    /// No provider is configured for this deployment.
    #[error("no oauth provider configured")]
    NotConfigured,

    /// The callback's CSRF state did not match the session.
    #[error("oauth state mismatch")]
    StateMismatch,

    /// The callback carried no authorization code.
    #[error("oauth callback missing code")]
    MissingCode,

    /// The provider denied authorization or returned an error page.
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider's userinfo response carried no email.
    #[error("provider did not assert an email")]
    MissingEmail,

    /// HTTP transport error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider handed back a URL we could not build on.
    #[error("invalid provider url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Userinfo endpoint response. Only the email claim is used.
#[derive(Debug, Deserialize)]
struct UserinfoResponse {
    email: Option<String>,
}

/// Client for the configured OAuth identity provider.
pub struct OauthClient {
    config: OauthConfig,
    http: reqwest::Client,
}

impl OauthClient {
    /// Create a client for the configured provider.
    #[must_use]
    pub fn new(config: OauthConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Build the authorization URL the client is redirected to.
    ///
    /// # Errors
    ///
    /// Returns `OauthError::InvalidUrl` if the configured authorize URL
    /// does not parse.
    pub fn authorization_url(&self, redirect_uri: &str, state: &str) -> Result<String, OauthError> {
        let mut url = Url::parse(&self.config.authorize_url)?;
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", redirect_uri)
            .append_pair("scope", "openid email")
            .append_pair("state", state);

        Ok(url.into())
    }

    /// Exchange an authorization code for an access token, server-side.
    ///
    /// # Errors
    ///
    /// Returns `OauthError::Provider` if the provider rejects the exchange.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<String, OauthError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", &self.config.client_id),
            ("client_secret", self.config.client_secret.expose_secret()),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ];

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(OauthError::Provider(format!("token exchange failed: {text}")));
        }

        let token: TokenResponse = response.json().await?;

        Ok(token.access_token)
    }

    /// Fetch the email the provider asserts for this access token.
    ///
    /// # Errors
    ///
    /// Returns `OauthError::MissingEmail` if the userinfo response has no
    /// email claim.
    pub async fn fetch_email(&self, access_token: &str) -> Result<String, OauthError> {
        let response = self
            .http
            .get(&self.config.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(OauthError::Provider(format!("userinfo failed: {text}")));
        }

        let userinfo: UserinfoResponse = response.json().await?;

        userinfo.email.ok_or(OauthError::MissingEmail)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn client() -> OauthClient {
        OauthClient::new(OauthConfig {
            authorize_url: "https://id.example.com/authorize".to_string(),
            token_url: "https://id.example.com/token".to_string(),
            userinfo_url: "https://id.example.com/userinfo".to_string(),
            client_id: "dukaan-seller".to_string(),
            client_secret: SecretString::from("kJ8#mQ2$vX5@nR9!"),
        })
    }

    #[test]
    fn test_authorization_url_carries_state_and_redirect() {
        let url = client()
            .authorization_url("https://app.example.com/auth/oauth/callback", "abc123")
            .unwrap();

        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.host_str(), Some("id.example.com"));

        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("response_type".to_owned(), "code".to_owned())));
        assert!(pairs.contains(&("state".to_owned(), "abc123".to_owned())));
        assert!(pairs.contains(&(
            "redirect_uri".to_owned(),
            "https://app.example.com/auth/oauth/callback".to_owned()
        )));
    }

    #[test]
    fn test_authorization_url_rejects_bad_config() {
        let bad = OauthClient::new(OauthConfig {
            authorize_url: "not a url".to_string(),
            token_url: String::new(),
            userinfo_url: String::new(),
            client_id: String::new(),
            client_secret: SecretString::from(""),
        });

        assert!(matches!(
            bad.authorization_url("https://x", "s"),
            Err(OauthError::InvalidUrl(_))
        ));
    }
}
