use tabled::Table;

use crate::{
    error, info,
    spotify::{SpotifyClient, pages},
    success,
    types::{Playlist, PlaylistItem},
    utils, warning,
};

use super::{authenticated_user, spinner};

pub async fn playlists(client: &SpotifyClient) {
    let user = authenticated_user(client).await;

    match client.get_playlists(&user).await {
        Ok(page) => {
            if page.items.len() < page.total as usize {
                info!("Showing {} of {} playlists", page.items.len(), page.total);
            }
            println!("{}", Table::new(utils::playlist_rows(page.items)));
        }
        Err(e) => error!("Failed to fetch playlists: {}", e),
    }
}

pub async fn playlist_id(client: &SpotifyClient, name: String) {
    let user = authenticated_user(client).await;

    match client.get_playlist_id(&user, &name).await {
        Ok(Some(id)) => println!("{}", id),
        Ok(None) => warning!("No playlist named '{}' found", name),
        Err(e) => error!("Failed to fetch playlists: {}", e),
    }
}

pub async fn browse(client: &SpotifyClient) {
    let user = authenticated_user(client).await;
    let pb = spinner("Fetching Spotify playlists...");

    let page_client = client.clone();
    let pending = client
        .get_all_request_pages(&user, move |user, offset| {
            let client = page_client.clone();
            async move { client.get_playlist_page(&user, offset).await }
        })
        .await;

    let pending = match pending {
        Ok(pending) => pending,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };

    let mut playlists: Vec<Playlist> = Vec::new();
    for (i, page) in pages::settle_pages(pending).await.into_iter().enumerate() {
        match page {
            Ok(page) => playlists.extend(page.items),
            Err(e) => warning!("Skipping page {}: {}", i + 1, e),
        }
    }
    pb.finish_and_clear();

    println!("{}", Table::new(utils::playlist_rows(playlists)));
}

pub async fn tracks(client: &SpotifyClient, playlist_id: String) {
    let user = authenticated_user(client).await;
    let pb = spinner("Fetching playlist tracks...");

    let page_client = client.clone();
    let id = playlist_id.clone();
    let pending = client
        .get_all_request_pages(&user, move |user, offset| {
            let client = page_client.clone();
            let id = id.clone();
            async move { client.get_playlist_tracks_page(&user, &id, offset).await }
        })
        .await;

    let items: Result<Vec<PlaylistItem>, _> = match pending {
        Ok(pending) => pages::collect_items(pending).await,
        Err(e) => Err(e.into()),
    };
    pb.finish_and_clear();

    match items {
        Ok(items) => println!("{}", Table::new(utils::track_rows(items))),
        Err(e) => error!("Failed to fetch tracks of playlist {}: {}", playlist_id, e),
    }
}

pub async fn create(client: &SpotifyClient, name: String) {
    let user = authenticated_user(client).await;

    match client.create_playlist(&user, &name).await {
        Ok(playlist) => success!("Playlist '{}' created with id {}", playlist.name, playlist.id),
        Err(e) => error!("Failed to create playlist: {}", e),
    }
}

pub async fn add(client: &SpotifyClient, playlist_id: String, tracks: Vec<String>) {
    let mut uris = Vec::with_capacity(tracks.len());
    for track in &tracks {
        match utils::parse_track_uri(track) {
            Ok(uri) => uris.push(uri),
            Err(e) => error!("{}", e),
        }
    }

    let user = authenticated_user(client).await;

    for chunk in utils::insertion_batches(&uris) {
        match client.add_songs_to_playlist(&user, &playlist_id, chunk).await {
            Ok(_) => success!("Added {} tracks to playlist {}", chunk.len(), playlist_id),
            Err(e) => error!("Failed to add tracks to playlist: {}", e),
        }
    }
}
