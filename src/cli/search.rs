use tabled::Table;

use crate::{error, spotify::SpotifyClient, types::SearchType, utils, warning};

use super::authenticated_user;

pub async fn search(client: &SpotifyClient, query: String, search_type: SearchType) {
    let user = authenticated_user(client).await;

    match client.search(&user, &query, search_type).await {
        Ok(response) => {
            let rows = utils::search_rows(response);
            if rows.is_empty() {
                warning!("No {} found for '{}'", search_type, query);
                return;
            }
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Search failed: {}", e),
    }
}
