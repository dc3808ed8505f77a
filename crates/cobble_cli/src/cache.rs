//! `cobble cache` — fingerprint cache maintenance.

use crate::project::load_project;
use crate::{CacheArgs, CacheCommand, GlobalArgs};

/// Runs the `cobble cache` command.
pub fn run(args: &CacheArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (root, _config) = load_project()?;

    match args.command {
        CacheCommand::Stats => {
            let stats = cobble_build::cache_stats(&root);
            println!("cache entries: {}", stats.entry_count);
            println!("manifest size: {}", format_size(stats.disk_size));
        }
        CacheCommand::Clear => {
            cobble_build::cache_clear(&root)?;
            if !global.quiet {
                eprintln!("   Cache cleared");
            }
        }
    }
    Ok(0)
}

/// Formats a byte count with a binary unit suffix.
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
