use urlencoding::encode;

use crate::{
    types::{
        AddTracksRequest, CreatePlaylistRequest, Credential, Page, Playlist, PlaylistItem,
        SnapshotResponse,
    },
    utils,
};

use super::{SpotifyClient, pages::PAGE_LIMIT};

/// Owner whose public playlists [`SpotifyClient::get_playlist_page`] lists.
pub const CATALOG_OWNER: &str = "spotify";

impl SpotifyClient {
    /// Creates a new public playlist owned by the user.
    pub async fn create_playlist(
        &self,
        user: &Credential,
        playlist_name: &str,
    ) -> Result<Playlist, reqwest::Error> {
        let body = CreatePlaylistRequest {
            name: playlist_name.to_string(),
            public: true,
        };

        self.post_json(user, &format!("/users/{}/playlists", encode(&user.id)), &body)
            .await
    }

    /// Fetches one page of the playlists published by the `spotify` account.
    ///
    /// Suitable as a page-request function for
    /// [`SpotifyClient::get_all_request_pages`].
    pub async fn get_playlist_page(
        &self,
        user: &Credential,
        offset: u32,
    ) -> Result<Page<Playlist>, reqwest::Error> {
        self.get_json(
            user,
            &format!("/users/{}/playlists", CATALOG_OWNER),
            &[
                ("limit", PAGE_LIMIT.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }

    /// Fetches the first page of a playlist's tracks, at Spotify's default
    /// page size.
    pub async fn get_playlist_tracks(
        &self,
        user: &Credential,
        playlist_id: &str,
    ) -> Result<Page<PlaylistItem>, reqwest::Error> {
        self.get_json(user, &Self::playlist_tracks_path(playlist_id), &[])
            .await
    }

    /// Fetches the page of a playlist's tracks starting at `offset`.
    pub async fn get_playlist_tracks_page(
        &self,
        user: &Credential,
        playlist_id: &str,
        offset: u32,
    ) -> Result<Page<PlaylistItem>, reqwest::Error> {
        self.get_json(
            user,
            &Self::playlist_tracks_path(playlist_id),
            &[
                ("limit", PAGE_LIMIT.to_string()),
                ("offset", offset.to_string()),
            ],
        )
        .await
    }

    /// Inserts tracks at the top of a playlist, keeping the order of `uris`.
    ///
    /// Spotify accepts at most 100 URIs per request; splitting larger lists
    /// is up to the caller.
    pub async fn add_songs_to_playlist(
        &self,
        user: &Credential,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<SnapshotResponse, reqwest::Error> {
        let body = AddTracksRequest {
            uris: uris.to_vec(),
            position: 0,
        };

        self.post_json(
            user,
            &format!(
                "/users/{}/playlists/{}/tracks",
                encode(&user.id),
                encode(playlist_id)
            ),
            &body,
        )
        .await
    }

    /// Fetches the first page of the user's own playlists.
    pub async fn get_playlists(&self, user: &Credential) -> Result<Page<Playlist>, reqwest::Error> {
        self.get_json(user, &format!("/users/{}/playlists", encode(&user.id)), &[])
            .await
    }

    /// Resolves a playlist name to its id.
    ///
    /// Only the first page returned by [`Self::get_playlists`] is searched, so
    /// playlists further down the user's list are not found. Matching is exact
    /// and case-sensitive; the first match wins.
    pub async fn get_playlist_id(
        &self,
        user: &Credential,
        playlist_name: &str,
    ) -> Result<Option<String>, reqwest::Error> {
        let playlists = self.get_playlists(user).await?;
        Ok(utils::find_playlist_id(&playlists.items, playlist_name))
    }

    fn playlist_tracks_path(playlist_id: &str) -> String {
        format!(
            "/users/{}/playlists/{}/tracks",
            CATALOG_OWNER,
            encode(playlist_id)
        )
    }
}
