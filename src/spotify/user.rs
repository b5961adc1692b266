use crate::types::{Credential, UserProfile};

use super::SpotifyClient;

impl SpotifyClient {
    /// Fetches the profile of the user the access token belongs to.
    pub async fn get_user_info(&self, user: &Credential) -> Result<UserProfile, reqwest::Error> {
        self.get_json(user, "/me", &[]).await
    }
}
