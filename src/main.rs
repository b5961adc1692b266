use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotlink::{cli, config, error, spotify::SpotifyClient, types::SearchType};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in with Spotify and store the credential
    Login,

    /// Remove the stored credential
    Logout,

    /// Show the logged-in user's profile
    Me,

    /// List your playlists
    Playlists,

    /// Print the id of one of your playlists by name
    PlaylistId(PlaylistIdOptions),

    /// List all playlists published by Spotify
    Browse,

    /// List all tracks of a playlist
    Tracks(TracksOptions),

    /// Create a public playlist
    Create(CreateOptions),

    /// Add tracks to the top of a playlist
    Add(AddOptions),

    /// Search the Spotify catalog
    Search(SearchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistIdOptions {
    /// Exact, case-sensitive playlist name
    name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    playlist_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    playlist_id: String,

    /// Track URIs, open.spotify.com links or track ids
    #[clap(required = true, num_args = 1..)]
    tracks: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    query: String,

    /// Kind of catalog object to search for
    #[clap(long = "type", value_enum, default_value_t = SearchType::Track)]
    search_type: SearchType,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            return;
        }
        Command::Logout => {
            cli::logout().await;
            return;
        }
        _ => {}
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let client = match config::Config::from_env() {
        Ok(config) => SpotifyClient::new(config),
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    match cli.command {
        Command::Login => cli::login(&client).await,
        Command::Me => cli::me(&client).await,
        Command::Playlists => cli::playlists(&client).await,
        Command::PlaylistId(opt) => cli::playlist_id(&client, opt.name).await,
        Command::Browse => cli::browse(&client).await,
        Command::Tracks(opt) => cli::tracks(&client, opt.playlist_id).await,
        Command::Create(opt) => cli::create(&client, opt.name).await,
        Command::Add(opt) => cli::add(&client, opt.playlist_id, opt.tracks).await,
        Command::Search(opt) => cli::search(&client, opt.query, opt.search_type).await,
        Command::Completions(_) | Command::Logout => {}
    }
}
