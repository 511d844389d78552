use clap::Parser;
use namesplit::app::{App, AppEvent};
use namesplit::engine::{split_names, split_names_bytes, to_multiline, Config};
use namesplit::input::{self, clipboard, text, Clipboard, ClipboardCapability, ClipboardDetector, SystemClipboard};
use namesplit::ui::TuiManager;
use std::fs::File;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Split pasted lists of names, IDs and company names into one clean entry per line.
#[derive(Parser, Debug)]
#[command(name = "namesplit", version, about)]
struct Cli {
    /// File to split (.pdf or UTF-8 text), or `-` for stdin
    input: Option<String>,

    /// Read the input from the system clipboard
    #[arg(long, conflicts_with = "input")]
    clipboard: bool,

    /// Keep case-insensitive duplicates
    #[arg(long)]
    no_dedupe: bool,

    /// Keep whitespace inside segments as pasted
    #[arg(long)]
    keep_spaces: bool,

    /// Copy the result to the clipboard after printing
    #[arg(long)]
    copy: bool,

    /// Copy through the terminal (OSC 52) without trying the system clipboard
    #[arg(long)]
    osc52: bool,

    /// Print the number of entries to stderr
    #[arg(long)]
    count: bool,

    /// Start the interactive editor; INPUT or --clipboard is loaded into it
    #[arg(long)]
    tui: bool,

    /// Configuration file (defaults to $NAMESPLIT_CONFIG)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let interactive = cli.tui
        || (cli.input.is_none() && !cli.clipboard && std::io::stdin().is_terminal());
    init_tracing(cli.log_file.as_deref(), interactive)?;

    let mut config = Config::discover(cli.config.as_deref())?;
    if cli.no_dedupe {
        config.split.deduplicate = false;
    }
    if cli.keep_spaces {
        config.split.trim_whitespace = false;
    }

    if interactive {
        info!("starting interactive editor");
        let capability = clipboard_capability(cli.osc52);
        let mut app = App::new(config, Box::new(SystemClipboard::new(capability)));
        let mut tui = TuiManager::new()?;

        match (cli.clipboard, cli.input) {
            (true, _) => app.handle_event(AppEvent::LoadClipboard),
            (false, Some(path)) if path == "-" => {
                let bytes = text::read_stdin()?;
                app.handle_event(AppEvent::Paste(String::from_utf8_lossy(&bytes).into_owned()));
            }
            (false, Some(path)) => app.handle_event(AppEvent::LoadFile(path)),
            (false, None) => {}
        }

        tui.run_event_loop(&mut app)?;
        return Ok(());
    }

    let names = match (cli.clipboard, cli.input.as_deref()) {
        (true, _) => {
            let loaded = clipboard::load(&mut SystemClipboard::headless(clipboard_capability(cli.osc52)))?;
            split_names(&loaded.text, &config.split)
        }
        (false, Some(path)) if path != "-" => {
            let loaded = input::load_path(path)?;
            info!(source = %loaded.source, "loaded input");
            split_names(&loaded.text, &config.split)
        }
        _ => split_names_bytes(&text::read_stdin()?, &config.split),
    };

    if !names.is_empty() {
        println!("{}", to_multiline(&names));
    }
    if cli.count {
        eprintln!("{} names", names.len());
    }
    if cli.copy && !names.is_empty() {
        let mut clipboard = SystemClipboard::headless(clipboard_capability(cli.osc52));
        if !clipboard.write_text(&to_multiline(&names)) {
            eprintln!("Could not copy automatically");
        }
    }

    Ok(())
}

fn clipboard_capability(osc52: bool) -> ClipboardCapability {
    let detector = ClipboardDetector::new();
    detector
        .detect_from_override(osc52)
        .unwrap_or_else(|| detector.detect())
}

/// Headless runs log to stderr. The editor owns the screen, so it only logs
/// when a file is given.
fn init_tracing(log_file: Option<&Path>, interactive: bool) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if !interactive => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}
