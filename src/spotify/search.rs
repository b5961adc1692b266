use crate::types::{Credential, SearchResponse, SearchType};

use super::SpotifyClient;

impl SpotifyClient {
    /// Searches the Spotify catalog.
    ///
    /// Only the section matching `search_type` is populated in the returned
    /// [`SearchResponse`]; Spotify's default page size applies. The query is
    /// URL-encoded but otherwise unchanged, so Spotify's field filters
    /// (`artist:`, `year:`, ...) reach the API intact.
    pub async fn search(
        &self,
        user: &Credential,
        query: &str,
        search_type: SearchType,
    ) -> Result<SearchResponse, reqwest::Error> {
        self.get_json(
            user,
            "/search",
            &[("q", query.to_string()), ("type", search_type.to_string())],
        )
        .await
    }
}
