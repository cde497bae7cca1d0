//! Folder Picker - drive the folder picker from the command line
//!
//! Loads the folder forest through the in-memory gateway, applies the
//! requested creations, moves, search and selection in that order, and
//! prints the visible tree.

mod args;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use common::picker::{render_rows, search_channel, FolderPicker};
use common::service::FolderService;
use common::tree::{flatten, DropInfo};

use args::Args;
use config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    // Initialize tracing
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = EnvFilter::builder()
        .with_default_directive(config.log_level().into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();

    tracing::info!("Starting Folder Picker");
    tracing::debug!("config: {:?}", config);

    let service = FolderService::memory(config.seed()?, config.latency());
    let mut picker = FolderPicker::new(service);
    picker.focus();
    picker.load().await;

    for title in &args.add {
        let key = picker.add_pending();
        if let Some(form) = picker.pending_mut(&key) {
            form.set_title(title.as_str());
        }
        picker.save_pending(&key);
    }

    for mv in &args.moves {
        let event = DropInfo::onto(mv.dragged.as_str(), mv.target.as_str());
        let outcome = picker.drop_folder(&event);
        tracing::info!("move {} onto {}: {:?}", mv.dragged, mv.target, outcome);
    }

    if !args.search.is_empty() {
        let (input, mut debouncer) = search_channel(config.debounce());
        for text in &args.search {
            input.send(text.as_str());
        }
        drop(input);
        picker.next_search(&mut debouncer).await;
    }

    if args.expand_all {
        let keys: Vec<String> = flatten(picker.forest())
            .into_iter()
            .filter(|folder| folder.has_children())
            .map(|folder| folder.key.clone())
            .collect();
        picker.expand(keys);
    }

    if let Some(key) = &args.select {
        picker.select(key);
    }

    println!("{}", render_rows(&picker.rows()));
    match picker.selected_title() {
        Some(title) => println!("\nCopy data to: {}", title),
        None => println!("\nPlease select folder"),
    }

    Ok(())
}
