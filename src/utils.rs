use crate::types::{
    ArtistRef, Playlist, PlaylistItem, PlaylistTableRow, SearchResponse, SearchTableRow,
    TrackTableRow,
};

/// Returns the id of the first playlist whose name equals `name` exactly.
pub fn find_playlist_id(playlists: &[Playlist], name: &str) -> Option<String> {
    playlists
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.id.clone())
}

/// Normalizes a track reference to a `spotify:track:<id>` URI.
///
/// Accepts full URIs, `open.spotify.com/track/<id>` links (with or without
/// query string) and bare ids.
pub fn parse_track_uri(input: &str) -> Result<String, String> {
    let input = input.trim();

    let id = if let Some(id) = input.strip_prefix("spotify:track:") {
        id
    } else if let Some(pos) = input.find("open.spotify.com/") {
        let path = &input[pos + "open.spotify.com/".len()..];
        let path = path.split(['?', '#']).next().unwrap_or_default();
        // links may carry a locale segment, e.g. intl-de/track/<id>
        match path.split('/').skip_while(|s| *s != "track").nth(1) {
            Some(id) => id,
            None => return Err(format!("'{}' is not a track link", input)),
        }
    } else {
        input
    };

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("'{}' is not a valid track id", input));
    }

    Ok(format!("spotify:track:{}", id))
}

/// Most URIs Spotify accepts in one add-tracks request.
pub const ADD_TRACKS_LIMIT: usize = 100;

/// Splits `uris` into add-tracks requests.
///
/// Every request inserts at position 0, so the batches come last-first: once
/// all of them are applied the playlist starts with `uris` in their given
/// order.
pub fn insertion_batches(uris: &[String]) -> impl Iterator<Item = &[String]> {
    uris.chunks(ADD_TRACKS_LIMIT).rev()
}

pub fn format_duration(duration_ms: u64) -> String {
    let secs = duration_ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn artist_names(artists: &[ArtistRef]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn playlist_rows(playlists: Vec<Playlist>) -> Vec<PlaylistTableRow> {
    playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            owner: p
                .owner
                .map(|o| o.display_name.unwrap_or(o.id))
                .unwrap_or_default(),
            tracks: p.tracks.map(|t| t.total.to_string()).unwrap_or_default(),
            name: p.name,
            id: p.id,
        })
        .collect()
}

/// Table rows for playlist entries; entries without a track are skipped.
pub fn track_rows(items: Vec<PlaylistItem>) -> Vec<TrackTableRow> {
    items
        .into_iter()
        .filter_map(|item| item.track)
        .map(|t| TrackTableRow {
            artists: artist_names(&t.artists),
            album: t.album.map(|a| a.name).unwrap_or_default(),
            length: t.duration_ms.map(format_duration).unwrap_or_default(),
            name: t.name,
            uri: t.uri,
        })
        .collect()
}

pub fn search_rows(response: SearchResponse) -> Vec<SearchTableRow> {
    let mut rows = Vec::new();

    if let Some(tracks) = response.tracks {
        rows.extend(tracks.items.into_iter().map(|t| SearchTableRow {
            detail: artist_names(&t.artists),
            name: t.name,
            uri_or_id: t.uri,
        }));
    }
    if let Some(artists) = response.artists {
        rows.extend(artists.items.into_iter().map(|a| SearchTableRow {
            detail: a.genres.iter().take(3).cloned().collect::<Vec<_>>().join(", "),
            name: a.name,
            uri_or_id: a.id,
        }));
    }
    if let Some(albums) = response.albums {
        rows.extend(albums.items.into_iter().map(|a| SearchTableRow {
            detail: artist_names(&a.artists),
            name: a.name,
            uri_or_id: a.id,
        }));
    }
    if let Some(playlists) = response.playlists {
        rows.extend(playlist_rows(playlists.items.into_iter().flatten().collect()).into_iter().map(
            |p| SearchTableRow {
                name: p.name,
                detail: p.owner,
                uri_or_id: p.id,
            },
        ));
    }

    rows
}
