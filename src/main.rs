mod api;
mod app;
mod config;
mod input;
mod lyrics;

use anyhow::Context;
use app::TrackLookup;
use app::state::{Toast, ToastKind};
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;

#[derive(Debug, Parser)]
#[command(name = "lyricdl", version, about = "Fetch timed lyrics for a track and export them as .lrc")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a track URL and print its lyrics.
    Show {
        url: String,
        /// Print the validated track as JSON instead.
        #[arg(long)]
        json: bool,
    },
    /// Look up a page URL (`/track?q=<id>`) and print its lyrics.
    Open {
        page_url: String,
        /// Print the validated track as JSON instead.
        #[arg(long)]
        json: bool,
    },
    /// Look up a track URL and write its lyrics to a .lrc file.
    Export {
        url: String,
        /// Output directory (defaults to config, then the current directory).
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
    /// Print the page URL for a track URL.
    Resolve {
        url: String,
    },
    /// Lyrics API endpoint settings.
    Api {
        #[command(subcommand)]
        cmd: ApiCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ApiCommand {
    /// Set the lyrics API base URL.
    Set { base_url: String },
    /// Restore the default base URL.
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match cli.command {
        Command::Show { url, json } => {
            let page = page_for(&cfg, &url)?;
            let track = run_lookup(&cfg, &page, |_| Ok(None)).await?;
            print_output(&track, json)?;
        }
        Command::Open { page_url, json } => {
            let track = run_lookup(&cfg, &page_url, |_| Ok(None)).await?;
            print_output(&track, json)?;
        }
        Command::Export { url, out } => {
            let page = page_for(&cfg, &url)?;
            let dir = out
                .or_else(|| cfg.export.out_dir.clone())
                .unwrap_or_else(|| std::path::PathBuf::from("."));
            run_lookup(&cfg, &page, |track| {
                let file = lyrics::LrcFile::for_track(track)
                    .context("no lyrics available for this track")?;
                let path = lyrics::lrc::save(&file, &dir)?;
                Ok(Some(Toast::success(format!("Saved {}", path.display()))))
            })
            .await?;
        }
        Command::Resolve { url } => {
            println!("{}", page_for(&cfg, &url)?);
        }
        Command::Api { cmd } => {
            let mut cfg = cfg;
            match cmd {
                ApiCommand::Set { base_url } => cfg.api.base_url = base_url,
                ApiCommand::Clear => cfg.api.base_url = config::defaults::API_BASE_URL.to_string(),
            }
            config::save(&cfg, cli.config.as_deref()).context("save config")?;
            println!("Lyrics API set to {}", cfg.api.base_url);
        }
    }

    Ok(())
}

fn page_for(cfg: &config::Config, url: &str) -> anyhow::Result<String> {
    let id = input::track_id_from_source(url, &cfg.source.track_base_url)?;
    Ok(input::page_url(&id))
}

/// Look up `page_url`, run `on_ready` on success, then flush notifications.
async fn run_lookup<F>(cfg: &config::Config, page_url: &str, on_ready: F) -> anyhow::Result<api::Track>
where
    F: FnOnce(&api::Track) -> anyhow::Result<Option<Toast>>,
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let client = api::HttpLyricsApi::new(&cfg.api)?;
    let mut lookup =
        TrackLookup::new(client, cfg.source.track_base_url.clone()).with_toasts(tx.clone());

    lookup.lookup(page_url).await;
    let state = lookup.state();
    let result = if let Some(track) = state.track() {
        let track = track.clone();
        on_ready(&track).map(|toast| {
            if let Some(toast) = toast {
                let _ = tx.send(toast);
            }
            track
        })
    } else if let Some(e) = state.error() {
        Err(anyhow::anyhow!("{}: {}", e.code(), e))
    } else {
        Err(anyhow::anyhow!("lookup did not finish: {:?}", state))
    };

    drop(lookup);
    drop(tx);
    while let Some(toast) = rx.recv().await {
        print_toast(&toast);
    }
    result
}

fn print_toast(toast: &Toast) {
    match toast.kind {
        ToastKind::Success => eprintln!("✔ {}", toast.message),
        ToastKind::Error => eprintln!("✖ {}", toast.message),
    }
}

fn print_output(track: &api::Track, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(track)?);
    } else {
        print_track(track);
    }
    Ok(())
}

/// `Song - A, B`, the same shape as the export filename.
fn track_header(name: &str, artists: &[&str]) -> String {
    format!("{} - {}", name, artists.join(", "))
}

fn print_track(track: &api::Track) {
    let info = &track.track_info;
    println!("{}", track_header(&info.name, &info.artist_names()));
    println!("{} ({})", info.album.name, track.url);
    println!();

    match &track.lyrics {
        Some(l) => {
            for (time, words) in lyrics::display_lines(l) {
                println!("{:>6}  {}", time, words);
            }
            println!();
            println!("Lyrics provided by Musixmatch");
        }
        None => {
            println!("Sorry we couldn't find any lyrics for this track. Please try another one.");
        }
    }
}
