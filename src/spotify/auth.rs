use std::time::Duration;

use reqwest::{Client, Url};

use crate::{
    Res,
    api::RedirectSlot,
    config,
    error::AppError,
    management::CredentialStore,
    types::{ClientConfig, Credentials, TokenResponse},
};

/// Permissions requested during setup.
pub const SCOPES: [&str; 5] = [
    "user-modify-playback-state",
    "user-read-currently-playing",
    "user-read-playback-state",
    "playlist-read-private",
    "playlist-read-collaborative",
];

/// Seconds taken off the reported token lifetime.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// How long `--setup --listen` waits for the browser redirect.
pub const REDIRECT_TIMEOUT: Duration = Duration::from_secs(120);

/// The two grants the token endpoint is asked for.
#[derive(Debug, Clone, Copy)]
pub enum Grant<'a> {
    AuthorizationCode(&'a str),
    RefreshToken(&'a str),
}

impl Grant<'_> {
    fn grant_type(&self) -> &'static str {
        match self {
            Grant::AuthorizationCode(_) => "authorization_code",
            Grant::RefreshToken(_) => "refresh_token",
        }
    }

    fn field(&self) -> (&'static str, &str) {
        match self {
            Grant::AuthorizationCode(code) => ("code", *code),
            Grant::RefreshToken(token) => ("refresh_token", *token),
        }
    }
}

/// A validated token endpoint answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrant {
    pub access_token: String,
    pub expires_in: u64,
    pub refresh_token: Option<String>,
}

/// Computes the absolute expiry stored for a token valid for `expires_in` seconds.
pub fn expires_at(now: i64, expires_in: u64) -> i64 {
    let expires_in = i64::try_from(expires_in).unwrap_or(i64::MAX);
    now.saturating_add(expires_in).saturating_sub(EXPIRY_MARGIN_SECS)
}

/// Extracts the authorization code from the URL the browser was redirected to.
///
/// After approving the application Spotify redirects to the configured
/// callback URL with `?code=...` appended. During setup the operator pastes
/// that full URL back into the terminal.
///
/// # Arguments
///
/// * `redirected` - The complete URL from the browser's address bar
///
/// # Returns
///
/// - `Ok(String)` - The value of the `code` query parameter
/// - `Err(AppError::InvalidUrl)` - The input is not a URL
/// - `Err(AppError::Auth)` - Spotify redirected with an `error` or without a code
///
/// # Example
///
/// ```
/// let code = extract_code("http://localhost:8080/callback?code=AQB3x")?;
/// assert_eq!(code, "AQB3x");
/// ```
pub fn extract_code(redirected: &str) -> Res<String> {
    let url = Url::parse(redirected.trim())
        .map_err(|e| AppError::InvalidUrl(format!("{}: {}", redirected.trim(), e)))?;

    let mut code = None;
    let mut error = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" if code.is_none() => code = Some(value.into_owned()),
            "error" if error.is_none() => error = Some(value.into_owned()),
            _ => {}
        }
    }

    match (code, error) {
        (Some(code), _) if !code.is_empty() => Ok(code),
        (_, Some(error)) => Err(AppError::Auth(format!("Spotify denied access ({})", error))),
        _ => Err(AppError::Auth(
            "the redirect URL carries no authorization code".to_string(),
        )),
    }
}

/// Performs the OAuth 2.0 authorization code and refresh token exchanges.
///
/// The Authorizer owns the two ways into the "authorized" state: first-time
/// setup (authorization code) and renewal (refresh token). Both post the
/// client credentials to the token endpoint and turn the answer into a full
/// [`Credentials`] value that the caller, or [`Authorizer::ensure_fresh`],
/// persists.
pub struct Authorizer {
    http: Client,
    auth_url: String,
    token_url: String,
}

impl Authorizer {
    pub fn new(auth_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        Authorizer {
            http: Client::new(),
            auth_url: auth_url.into(),
            token_url: token_url.into(),
        }
    }

    /// Creates an Authorizer for the endpoints configured in the environment.
    pub fn from_env() -> Self {
        Self::new(config::spotify_apiauth_url(), config::spotify_apitoken_url())
    }

    /// Builds the URL the operator approves the application at.
    ///
    /// The URL requests a `code` response for the client's redirect URI with
    /// all of [`SCOPES`].
    ///
    /// # Example
    ///
    /// ```
    /// let url = authorizer.authorization_url(&client)?;
    /// webbrowser::open(&url)?;
    /// ```
    pub fn authorization_url(&self, client: &ClientConfig) -> Res<String> {
        let scope = SCOPES.join(" ");
        let url = Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", client.client_id.as_str()),
                ("response_type", "code"),
                ("redirect_uri", client.redirect_uri.as_str()),
                ("scope", scope.as_str()),
            ],
        )
        .map_err(|e| AppError::InvalidUrl(format!("{}: {}", self.auth_url, e)))?;

        Ok(url.to_string())
    }

    /// Posts a grant to the token endpoint.
    ///
    /// The form always carries `redirect_uri`, `client_id`, `client_secret` and
    /// `grant_type`, plus either `code` or `refresh_token`.
    ///
    /// # Returns
    ///
    /// - `Ok(TokenGrant)` - The response held `access_token` and `expires_in`
    /// - `Err(AppError::Auth)` - Network failure, non-success status, a body
    ///   that is not JSON, or a body missing one of the two required fields
    ///
    /// There is no retry. A failed exchange means the operator has to set up
    /// again.
    pub async fn exchange(&self, client: &ClientConfig, grant: Grant<'_>) -> Res<TokenGrant> {
        let (field, value) = grant.field();
        let res = self
            .http
            .post(&self.token_url)
            .form(&[
                ("redirect_uri", client.redirect_uri.as_str()),
                ("client_id", client.client_id.as_str()),
                ("client_secret", client.client_secret.as_str()),
                ("grant_type", grant.grant_type()),
                (field, value),
            ])
            .send()
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let status = res.status();
        let body: TokenResponse = res
            .json()
            .await
            .map_err(|e| AppError::Auth(format!("unreadable token response ({}): {}", status, e)))?;

        if !status.is_success() {
            let reason = body
                .error_description
                .or(body.error)
                .unwrap_or_else(|| "no reason given".to_string());
            return Err(AppError::Auth(format!(
                "token endpoint answered {}: {}",
                status, reason
            )));
        }

        let access_token = body
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Auth("token response lacks access_token".to_string()))?;
        let expires_in = body
            .expires_in
            .ok_or_else(|| AppError::Auth("token response lacks expires_in".to_string()))?;

        Ok(TokenGrant {
            access_token,
            expires_in,
            refresh_token: body.refresh_token.filter(|t| !t.is_empty()),
        })
    }

    /// Completes first-time setup by exchanging an authorization code.
    ///
    /// # Arguments
    ///
    /// * `client` - The application credentials entered during setup
    /// * `code` - Authorization code from the redirect URL
    /// * `default_device` - A previously stored default device to carry over
    /// * `now` - Current unix time in seconds
    ///
    /// # Errors
    ///
    /// Besides the failures of [`Authorizer::exchange`], an answer without a
    /// refresh token is rejected: without it the credentials could never be
    /// renewed.
    pub async fn authorize_with_code(
        &self,
        client: ClientConfig,
        code: &str,
        default_device: Option<String>,
        now: i64,
    ) -> Res<Credentials> {
        let grant = self
            .exchange(&client, Grant::AuthorizationCode(code))
            .await?;
        let refresh_token = grant.refresh_token.ok_or_else(|| {
            AppError::Auth("token response lacks refresh_token".to_string())
        })?;

        Ok(Credentials {
            client,
            access_token: grant.access_token,
            refresh_token,
            expires_at: expires_at(now, grant.expires_in),
            default_device,
        })
    }

    /// Renews the access token with the stored refresh token.
    ///
    /// Spotify may or may not rotate the refresh token. When the answer
    /// carries none, the stored one is kept. Client settings and the default
    /// device are carried over unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// let renewed = authorizer.refresh(&credentials, utils::now()).await?;
    /// store.save(&renewed).await?;
    /// ```
    pub async fn refresh(&self, credentials: &Credentials, now: i64) -> Res<Credentials> {
        let grant = self
            .exchange(
                &credentials.client,
                Grant::RefreshToken(&credentials.refresh_token),
            )
            .await?;

        Ok(Credentials {
            client: credentials.client.clone(),
            access_token: grant.access_token,
            refresh_token: grant
                .refresh_token
                .unwrap_or_else(|| credentials.refresh_token.clone()),
            expires_at: expires_at(now, grant.expires_in),
            default_device: credentials.default_device.clone(),
        })
    }

    /// Returns credentials whose access token is valid at `now`.
    ///
    /// Expired credentials are refreshed once and saved to `store` before they
    /// are returned. Valid credentials are returned untouched and nothing is
    /// written.
    pub async fn ensure_fresh(
        &self,
        store: &CredentialStore,
        credentials: Credentials,
        now: i64,
    ) -> Res<Credentials> {
        if !credentials.is_expired(now) {
            return Ok(credentials);
        }

        let renewed = self.refresh(&credentials, now).await?;
        store.save(&renewed).await?;
        Ok(renewed)
    }
}

/// Waits for the redirect listener to deliver an authorization code.
///
/// Polls the shared slot once per second until the callback handler has
/// stored a result or [`REDIRECT_TIMEOUT`] passes.
///
/// # Returns
///
/// - `Ok(String)` - The authorization code
/// - `Err(AppError::Auth)` - Spotify redirected with an error, or the timeout was reached
pub async fn wait_for_code(slot: RedirectSlot) -> Res<String> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < REDIRECT_TIMEOUT {
        let mut lock = slot.lock().await;
        if let Some(result) = lock.take() {
            return result.map_err(AppError::Auth);
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    Err(AppError::Auth(
        "timed out waiting for the authorization redirect".to_string(),
    ))
}
