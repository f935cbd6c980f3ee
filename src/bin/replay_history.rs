use std::path::PathBuf;

use clap::Parser;
use log::info;
use naishin::history::{trend, HistoryEntry};
use naishin_utils::fs_json_util::read_json;

#[derive(Parser)]
struct Opts {
    /// JSON array of saved entries.
    history_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let entries: Vec<HistoryEntry> = read_json(opts.history_path)?;
    info!("Loaded {} entries", entries.len());

    for point in trend(&entries) {
        let entry = point.entry();
        let result = point.result();
        let delta = match (point.total_delta(), point.percent_delta()) {
            (Some(total), Some(percent)) => format!("{total:+} ({percent:+}%)"),
            (None, Some(percent)) => format!("prefecture changed ({percent:+}%)"),
            _ => "-".to_owned(),
        };
        let memo = entry.memo().as_deref().unwrap_or_default();
        println!(
            "{} {:<10} {:>4}/{:<4} {:>3}% {} {delta}  {memo}",
            entry.saved_at().format("%Y-%m-%d %H:%M"),
            entry.prefecture_code(),
            result.total(),
            result.max(),
            result.percent(),
            result.rank(),
        );
    }
    Ok(())
}
