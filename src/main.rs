mod app;
mod clipboard;
mod config;
mod export;
mod input;
mod palette;
mod service;
mod storage;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Mutex;

#[derive(Debug, Parser)]
#[command(name = "moodpal", version, about = "Turn a mood into a color palette")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Generate a palette for a mood and print it (headless).
    Generate {
        /// Mood description; multiple words are joined with spaces.
        #[arg(required = true)]
        mood: Vec<String>,
        /// Also export the new palette as a PNG.
        #[arg(long)]
        export: bool,
    },
    /// Print recent palettes.
    History {
        /// Forget all stored palettes and the theme setting.
        #[arg(long)]
        clear: bool,
    },
    /// Export a stored palette as a PNG.
    Export {
        /// Position in the history, 0 = most recent.
        #[arg(long, default_value_t = 0)]
        index: usize,
        /// Output directory (defaults to the configured export dir).
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
    /// Show or change the display mode.
    Theme {
        #[arg(value_enum, default_value_t = ThemeCommand::Show)]
        cmd: ThemeCommand,
    },
    /// Show or set the palette service endpoint.
    Endpoint {
        url: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeCommand {
    Show,
    Light,
    Dark,
    Toggle,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let command = cli.command.unwrap_or(Command::Tui);

    if matches!(command, Command::Tui) {
        init_file_logging(&cfg)?;
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    }

    match command {
        Command::Tui => {
            let mut app = app::App::new(cfg.clone())?;
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate { mood, export } => {
            let storage = storage::Storage::open(&cfg.db_path())?;
            let client = service::PaletteClient::new(cfg.service.endpoint.clone(), cfg.timeout())?;
            let palette = client.generate(&mood.join(" ")).await?;

            let history = storage.load_history()?.append(palette.clone());
            storage.save_history(&history)?;
            print_palette(&palette);

            if export {
                let path = export::save(&palette, &cfg.paths.export_dir)?;
                println!("Exported to {}", path.display());
            }
        }
        Command::History { clear } => {
            let storage = storage::Storage::open(&cfg.db_path())?;
            if clear {
                storage.clear()?;
                println!("Cleared stored palettes.");
                return Ok(());
            }
            let history = storage.load_history()?;
            if history.is_empty() {
                println!("No palettes yet.");
            }
            for (i, p) in history.iter().enumerate() {
                println!(
                    "{:02}. \"{}\"  {}  ({})",
                    i,
                    p.mood,
                    p.colors.join(" "),
                    p.created_label()
                );
            }
        }
        Command::Export { index, out } => {
            let storage = storage::Storage::open(&cfg.db_path())?;
            let history = storage.load_history()?;
            let palette = history
                .get(index)
                .with_context(|| format!("no palette at index {index} ({} stored)", history.len()))?;
            let dir = out.unwrap_or_else(|| cfg.paths.export_dir.clone());
            let path = export::save(palette, &dir)?;
            println!("Exported to {}", path.display());
        }
        Command::Theme { cmd } => {
            let storage = storage::Storage::open(&cfg.db_path())?;
            let current = storage.load_display_mode()?;
            let next = match cmd {
                ThemeCommand::Show => current,
                ThemeCommand::Light => storage::DisplayMode::Light,
                ThemeCommand::Dark => storage::DisplayMode::Dark,
                ThemeCommand::Toggle => current.toggled(),
            };
            if next != current {
                storage.save_display_mode(next)?;
            }
            println!("Display mode: {}", next.label());
        }
        Command::Endpoint { url } => match url {
            Some(url) => {
                let mut cfg = cfg;
                cfg.service.endpoint = url;
                config::save(&cfg, cli.config.as_deref()).context("save config")?;
                println!("Updated palette service endpoint.");
            }
            None => println!("{}", cfg.service.endpoint),
        },
    }

    Ok(())
}

/// The TUI owns the terminal, so logs go to a file in the data dir.
fn init_file_logging(cfg: &config::Config) -> anyhow::Result<()> {
    let path = cfg.log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();
    Ok(())
}

fn print_palette(p: &palette::Palette) {
    println!("\"{}\"  (id={})", p.mood, p.id);
    for (i, color) in p.colors.iter().enumerate() {
        println!("  {}. {}", i + 1, color);
    }
}
