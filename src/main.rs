//! synpad - open a file, highlight it, print it
//!
//! The terminal stands in for the host UI: the file is loaded through an
//! editor session, rendered with colors, and optionally exported.

use std::env;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::process;

use synpad::error::{EditorError, Result};
use synpad::render::render;
use synpad::{BookmarkStore, Config, EditorSession};

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    file: Option<PathBuf>,
    export: Option<PathBuf>,
    language: Option<String>,
    plain: bool,
    reopen: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    // A panicking classifier is caught and logged by the session; keep the
    // default hook's backtrace text off the rendered output.
    panic::set_hook(Box::new(|info| log::debug!("{}", info)));

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(options) = parse_args(&args)? else {
        return Ok(());
    };

    let config = Config::load();
    let mut session = EditorSession::with_config(&config);
    let store = BookmarkStore::default_location();

    if let Some(path) = &options.file {
        session.open_file(path)?;
    } else if options.reopen {
        let handle = store
            .as_ref()
            .and_then(BookmarkStore::recall)
            .ok_or(EditorError::NoFile)?;
        if handle.bookmark().map_or(false, |b| b.stale) {
            log::warn!("bookmark for {} may be out of date", handle.name());
        }
        session.reopen(handle)?;
    } else {
        print_usage();
        return Err(EditorError::NoFile);
    }

    if let Some(name) = &options.language {
        if !session.set_language(name) {
            log::warn!(
                "unknown language {}; keeping {} (known: {})",
                name,
                session.language_label(),
                session.languages().join(", ")
            );
        }
    }
    log::info!("highlighting as {}", session.language_label());

    let mut stdout = io::stdout().lock();
    render(session.buffer(), session.theme(), &mut stdout, !options.plain)?;

    if let Some(path) = &options.export {
        session.save_as(path)?;
    }

    if let (Some(store), Some(handle)) = (&store, session.file()) {
        if let Err(e) = store.store(handle) {
            log::warn!("could not remember {}: {}", handle.name(), e);
        }
    }

    Ok(())
}

/// Parse arguments. `Ok(None)` means help or version was printed.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                println!("synpad {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--plain" | "-p" => options.plain = true,
            "--reopen" | "-r" => options.reopen = true,
            "--export" | "-o" => {
                let path = iter
                    .next()
                    .ok_or_else(|| EditorError::Message(format!("{} needs a path", arg)))?;
                options.export = Some(PathBuf::from(path));
            }
            "--language" | "-l" => {
                let name = iter
                    .next()
                    .ok_or_else(|| EditorError::Message(format!("{} needs a name", arg)))?;
                options.language = Some(name.clone());
            }
            other if other.starts_with('-') => {
                return Err(EditorError::Message(format!("unknown option {}", other)));
            }
            file => options.file = Some(PathBuf::from(file)),
        }
    }

    Ok(Some(options))
}

fn print_usage() {
    println!("synpad {} - highlight a source file", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: synpad [OPTIONS] [FILE]");
    println!();
    println!("Options:");
    println!("  -o, --export PATH    Save a copy of the document to PATH");
    println!("  -l, --language NAME  Highlight as NAME instead of guessing");
    println!("  -p, --plain          Print without colors");
    println!("  -r, --reopen         Open the file from the last run");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
}
