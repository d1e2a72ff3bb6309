//! `wwdc show <path>` – summarize a saved catalog.

use anyhow::Result;
use std::path::Path;
use wwdc_core::{store, Catalog};

pub fn run_show(path: &Path) -> Result<()> {
    let catalog: Catalog = store::load(path)?;
    print_summary(&catalog);
    Ok(())
}

pub(super) fn print_summary(catalog: &Catalog) {
    let s = catalog.summary();
    println!("Snapshot {} (updated {})", s.snapshot_id, s.updated.to_rfc3339());
    println!(
        "{:<8} {:<8} {:<8} {:<8} {:<8} {}",
        "EVENTS", "CONTENT", "VIDEOS", "TOPICS", "ROOMS", "RESOURCES"
    );
    println!(
        "{:<8} {:<8} {:<8} {:<8} {:<8} {}",
        s.events, s.contents, s.videos, s.topics, s.rooms, s.resources
    );
    for event in &catalog.events {
        let count = catalog.contents_for_event(&event.id).count();
        println!("  {:<12} {:<24} {count} items", event.id, event.name);
    }
}
