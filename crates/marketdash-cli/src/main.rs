//! marketdash - marketplace dashboard from the command line.
//!
//! Loads the dashboard the same way the web page does (parallel fetch,
//! session cache, render) and prints the rendered regions. `watch` keeps the
//! live sockets open and prints incoming notifications as toasts.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use marketdash_core::auth::TokenStore;
use marketdash_core::clipboard::{Clipboard, ClipboardError};
use marketdash_core::dom::Element;
use marketdash_core::notify::ToastReceiver;
use marketdash_core::{
    nav, ApiClient, CategoriesLoader, Config, Dashboard, Document, FileStore, SessionCache,
    Toaster,
};

/// Directory for an additional plain-text log file
const LOG_DIR_ENV_VAR: &str = "MARKETDASH_LOG_DIR";

const LOG_FILE: &str = "marketdash.log";

const USAGE: &str = "\
Usage: marketdash [COMMAND]

Commands:
  dashboard        Load and print the dashboard (default)
  watch            Load the dashboard, then print live notifications until Ctrl-C
  copy-referral    Print the referral link
  categories       Load and print the full category list
  search <query>   Print the job search link for a query
  login            Store an auth token
  logout           Remove the stored auth token";

/// Initialize the tracing subscriber for logging.
///
/// `RUST_LOG` controls the level (default `warn`). When `MARKETDASH_LOG_DIR`
/// is set, logs are also written to a file there; the returned guard must be
/// held until exit to flush it.
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer().with_writer(io::stderr);

    match std::env::var(LOG_DIR_ENV_VAR) {
        Ok(dir) if !dir.trim().is_empty() => {
            let appender = tracing_appender::rolling::never(dir.trim(), LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            None
        }
    }
}

/// The terminal has no clipboard we can rely on; the link goes to stdout.
struct StdoutClipboard;

#[async_trait]
impl Clipboard for StdoutClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        println!("{text}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let _guard = init_tracing();
    info!("marketdash starting");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("dashboard");

    let result = match command {
        "dashboard" => show_dashboard(false).await,
        "watch" => show_dashboard(true).await,
        "copy-referral" => copy_referral().await,
        "categories" => show_categories().await,
        "search" => {
            println!("{}", nav::search_href(&args[1..].join(" ")));
            Ok(())
        }
        "login" => login(),
        "logout" => logout(),
        "-h" | "--help" | "help" => {
            println!("{USAGE}");
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    info!("marketdash shutting down");
    result
}

fn api_client(config: &Config) -> Result<ApiClient> {
    let client = ApiClient::new(&config.api_base())
        .context("Invalid API base")?
        .with_timeout(config.request_timeout());
    Ok(client)
}

fn dashboard(config: &Config) -> Result<Dashboard<ApiClient>> {
    let store = FileStore::new(config.cache_dir()?).context("Failed to open session cache")?;
    let cache = SessionCache::new(Arc::new(store)).with_ttl(config.cache_ttl());
    Ok(Dashboard::new(
        api_client(config)?,
        cache,
        TokenStore::keychain(),
        config.origin(),
    ))
}

/// Print every toast still queued.
fn drain_toasts(toasts: &mut ToastReceiver) {
    while let Ok(toast) = toasts.try_recv() {
        let prefix = if toast.is_error() { "error" } else { "info" };
        eprintln!("[{prefix}] {}", toast.message);
    }
}

async fn show_dashboard(watch: bool) -> Result<()> {
    let config = Config::load()?;
    let dashboard = dashboard(&config)?;
    let (toaster, mut toasts) = Toaster::channel();

    let mut doc = Document::skeleton();
    let mut page = dashboard.run(&mut doc, &toaster).await;
    // Everything is "in view" on a terminal.
    if let Some(page) = page.as_mut() {
        page.reveal.reveal_all(&mut doc);
    }
    println!("{}", doc.to_html());
    drain_toasts(&mut toasts);

    let Some(mut page) = page else {
        return Ok(());
    };
    if !watch {
        return Ok(());
    }
    if page.live.is_none() {
        eprintln!("Not signed in; live updates need a token (marketdash login)");
        return Ok(());
    }

    let printer = tokio::spawn(async move {
        while let Some(toast) = toasts.recv().await {
            eprintln!("[notification] {}", toast.message);
        }
    });

    tokio::select! {
        _ = page.forward_live(&toaster) => info!("Live feed closed"),
        _ = tokio::signal::ctrl_c() => info!("Interrupted"),
    }

    drop(page);
    drop(toaster);
    let _ = printer.await;
    Ok(())
}

async fn copy_referral() -> Result<()> {
    let config = Config::load()?;
    let dashboard = dashboard(&config)?;
    let (toaster, mut toasts) = Toaster::channel();

    let mut doc = Document::skeleton();
    let page = dashboard.run(&mut doc, &toaster).await;
    if let Some(referral) = page.as_ref().and_then(|p| p.referral.as_ref()) {
        referral.copy(&StdoutClipboard, &toaster).await;
    }
    drain_toasts(&mut toasts);
    Ok(())
}

async fn show_categories() -> Result<()> {
    let config = Config::load()?;
    let loader = CategoriesLoader::new(api_client(&config)?);

    let mut doc = Document::new();
    doc.insert(Element::new("div", "categories"));
    let count = match loader.load(&mut doc).await {
        Ok(count) => count,
        Err(e) => {
            error!(error = %e, "Failed to load categories");
            return Err(e.into());
        }
    };

    println!("{}", doc.to_html());
    info!(count, "Categories loaded");
    Ok(())
}

fn login() -> Result<()> {
    let token = rpassword::prompt_password("Auth token: ")?;
    if token.trim().is_empty() {
        anyhow::bail!("Token must not be empty");
    }
    TokenStore::keychain().save(&token)?;
    println!("Token saved");
    Ok(())
}

fn logout() -> Result<()> {
    TokenStore::keychain().clear()?;
    println!("Token removed");
    Ok(())
}
