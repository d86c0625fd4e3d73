use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playsort::{cli, config, error, ranking::SortMethod, types::PkceToken};
use tokio::sync::Mutex;

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
    /// Authorize with Spotify API
    Auth,

    /// List your playlists
    Playlists(PlaylistsOptions),

    /// Show a playlist with tempo, key and lyrics information
    Show(ShowOptions),

    /// Sort a playlist
    Sort(SortOptions),

    /// Sort a playlist and export it to a text file
    Export(ExportOptions),

    /// Run the local JSON API
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Only list playlists whose name contains this text
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowOptions {
    /// Playlist id, URI or link
    pub playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SortOptions {
    /// Playlist id, URI or link
    pub playlist: String,

    /// Sort method
    #[clap(long, value_enum, default_value_t = SortMethod::Bpm)]
    pub method: SortMethod,

    /// Track (0-based position) to compare lyrics against; defaults to the first
    #[clap(long)]
    pub reference: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    #[clap(flatten)]
    pub sort: SortOptions,

    /// Output file (default: EXPORT_DIR/sorted_playlist_<method>.txt)
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Playlists(opt) => cli::list_playlists(opt.search).await,
        Command::Show(opt) => cli::show(opt.playlist).await,
        Command::Sort(opt) => cli::sort(opt.playlist, opt.method, opt.reference).await,
        Command::Export(opt) => {
            cli::export(
                opt.sort.playlist,
                opt.sort.method,
                opt.sort.reference,
                opt.output,
            )
            .await
        }
        Command::Serve => cli::serve().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
