use std::process::ExitCode;

use clap::Args;
use dirtab_runtime::history::VisitLog;
use log::{error, info};

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Number of entries to display
    #[arg(long, short = 'n', default_value = "20")]
    pub limit: usize,

    /// Clear all history
    #[arg(long)]
    pub clear: bool,
}

pub fn run(args: HistoryArgs) -> ExitCode {
    let Some(visits_log) = VisitLog::new() else {
        info!("[history] history is disabled");
        println!("History is disabled.");
        return ExitCode::SUCCESS;
    };

    if args.clear {
        return match visits_log.clear() {
            Ok(()) => {
                println!("History cleared");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("[history] failed to clear {}: {e}", visits_log.path().display());
                eprintln!("[history] {e}");
                ExitCode::from(1)
            }
        };
    }

    let visits = visits_log.recent(args.limit);
    if visits.is_empty() {
        println!("No history yet.");
        return ExitCode::SUCCESS;
    }

    println!("{:<20}  {:>6}  PATH", "TIMESTAMP", "ROWS");
    println!("{}", "-".repeat(72));

    for visit in visits {
        let ts = visit.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
        println!("{:<20}  {:>6}  {}", ts, visit.rows, visit.path);
    }

    let total = visits_log.count();
    if total > args.limit {
        println!(
            "\n({} more entries, use --limit to show more)",
            total - args.limit
        );
    }

    ExitCode::SUCCESS
}
