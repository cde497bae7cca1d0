//! Shared test utilities for picker integration tests
#![allow(dead_code)]

use std::time::Duration;

use common::folder::Folder;
use common::gateway::{seed_folders, MemoryFolderGateway};
use common::picker::FolderPicker;
use common::service::FolderService;
use tracing_subscriber::EnvFilter;

pub const LATENCY: Duration = Duration::from_millis(250);

/// Route `tracing` output to the test harness, honoring RUST_LOG
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A picker over the demo forest that has not been loaded yet
pub fn seeded_picker() -> FolderPicker<MemoryFolderGateway> {
    picker_with(Some(seed_folders()))
}

/// A picker over an arbitrary fixture, or over nothing at all
pub fn picker_with(seed: Option<Vec<Folder>>) -> FolderPicker<MemoryFolderGateway> {
    init_tracing();
    FolderPicker::new(FolderService::memory(seed, LATENCY))
}

/// Set up a loaded picker over the demo forest
pub async fn setup_loaded_picker() -> FolderPicker<MemoryFolderGateway> {
    let mut picker = seeded_picker();
    picker.load().await;
    picker
}

/// Every key in the forest, pre-order
pub fn all_keys(forest: &[Folder]) -> Vec<String> {
    common::tree::flatten(forest)
        .into_iter()
        .map(|folder| folder.key.clone())
        .collect()
}
