use crate::{
    Res,
    config::LOGIN_SCOPE,
    types::{Credential, TokenResponse},
    warning,
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Builds the URL the user visits to grant this application access.
    ///
    /// Requests an authorization code for the playlist modify scopes and
    /// redirects back to the configured redirect URI. Pure string
    /// construction; never fails.
    ///
    /// # Example
    ///
    /// ```
    /// let url = client.login_screen_url();
    /// // https://accounts.spotify.com/en/authorize?client_id=...&response_type=code&...
    /// ```
    pub fn login_screen_url(&self) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", LOGIN_SCOPE),
        ];

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.auth_url, query)
    }

    /// Exchanges an authorization code for access and refresh tokens.
    ///
    /// Uses the `authorization_code` grant with Basic client authentication.
    /// The redirect URI must match the one used to build the login URL.
    pub async fn authorize_user(&self, auth_code: &str) -> Result<TokenResponse, reqwest::Error> {
        self.post_token_form(&[
            ("grant_type", "authorization_code"),
            ("code", auth_code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ])
        .await
    }

    /// Turns an authorization code into a [`Credential`].
    ///
    /// Exchanges the code, then looks up the profile of the user the new
    /// access token belongs to for their id. Either step failing fails the
    /// whole operation with that step's error.
    ///
    /// # Errors
    ///
    /// Besides HTTP and decode failures, a token response without a refresh
    /// token is rejected since the credential could never be renewed.
    pub async fn get_user_creds(&self, auth_code: &str) -> Res<Credential> {
        let tokens = self.authorize_user(auth_code).await?;
        let refresh_token = tokens
            .refresh_token
            .ok_or("token response did not contain a refresh token")?;

        let mut user = Credential {
            access_token: tokens.access_token,
            refresh_token,
            id: String::new(),
        };
        user.id = self.get_user_info(&user).await?.id;

        Ok(user)
    }

    /// Obtains a new access token with the credential's refresh token.
    ///
    /// Spotify may or may not rotate the refresh token; the returned
    /// credential always keeps the original refresh token and id.
    pub async fn refresh_user(&self, user: &Credential) -> Result<Credential, reqwest::Error> {
        let tokens: TokenResponse = self
            .post_token_form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", user.refresh_token.as_str()),
            ])
            .await?;

        Ok(Credential {
            access_token: tokens.access_token,
            refresh_token: user.refresh_token.clone(),
            id: user.id.clone(),
        })
    }

    /// Makes sure the credential's access token is still accepted.
    ///
    /// The profile endpoint is used as a liveness probe. If it answers, the
    /// credential is returned unchanged. Any failure, an expired token just
    /// as much as a dropped connection, triggers [`Self::refresh_user`].
    pub async fn update_creds(&self, user: &Credential) -> Result<Credential, reqwest::Error> {
        match self.get_user_info(user).await {
            Ok(_) => Ok(user.clone()),
            Err(e) => {
                warning!("Credential check failed, refreshing access token: {}", e);
                self.refresh_user(user).await
            }
        }
    }
}
