//! CLI entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lazytask_core` linkage.
//! - Order an exported task list (`order <file.json>`) for quick inspection.
//!
//! Output is deterministic: one line per task, top to bottom.

use clap::{Parser, Subcommand};
use lazytask_core::model::record::format_timestamp;
use lazytask_core::{
    init_logging_from_config, order_tasks, tasks_from_records, CoreConfig, Task, TaskRecord,
};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser, Debug)]
#[command(name = "lazytask_cli")]
#[command(about = "Inspect LazyTask data from the command line", long_about = None)]
struct Cli {
    /// Prints the core linkage check when omitted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print an exported task list in display order
    Order {
        /// JSON array of API task records
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        None => {
            println!("lazytask_core ping={}", lazytask_core::ping());
            println!("lazytask_core version={}", lazytask_core::core_version());
            ExitCode::SUCCESS
        }
        Some(Command::Order { path }) => match run_order(&path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run_order(path: &Path) -> CliResult<()> {
    let config = CoreConfig::from_env();
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("warning: logging disabled: {err}");
    }

    let file = File::open(path)?;
    let stdout = io::stdout();
    let count = order_records(BufReader::new(file), &mut stdout.lock())?;
    log::info!("event=cli_order module=cli status=ok count={count}");
    Ok(())
}

/// Reads a JSON array of API records from `input` and writes them to `out`
/// in display order. Returns the number of tasks written.
fn order_records<R: Read, W: Write>(mut input: R, out: &mut W) -> CliResult<usize> {
    let mut raw = String::new();
    input.read_to_string(&mut raw)?;
    let records: Vec<TaskRecord> = serde_json::from_str(&raw)?;
    let tasks = tasks_from_records(records)?;

    for task in order_tasks(&tasks) {
        writeln!(out, "{}", render_line(task)?)?;
    }
    out.flush()?;
    Ok(tasks.len())
}

fn render_line(task: &Task) -> CliResult<String> {
    let mark = if task.is_completed { "[x]" } else { "[ ]" };
    Ok(format!(
        "{mark} {:<6} due {}  {}",
        task.priority.as_str(),
        format_timestamp("deadline", task.deadline)?,
        task.title
    ))
}

#[cfg(test)]
mod tests {
    use super::{order_records, Cli, Command};
    use clap::Parser;
    use std::io::{self, Read};
    use std::path::PathBuf;

    const RECORDS: &str = r#"[
        {"_id": "a", "title": "file taxes", "dateTime": "2026-03-01T08:00:00Z",
         "deadline": "2026-03-04T10:00:00Z", "priority": "low",
         "createdAt": "2026-02-01T09:00:00Z"},
        {"_id": "b", "title": "call bank", "dateTime": "2026-03-01T08:00:00Z",
         "deadline": "2026-03-02T10:00:00Z", "priority": "high", "isCompleted": true,
         "createdAt": "2026-02-01T09:00:00Z"},
        {"_id": "c", "title": "book dentist", "dateTime": "2026-03-01T08:00:00Z",
         "deadline": "2026-03-03T10:00:00Z", "priority": "high",
         "createdAt": "2026-02-01T09:00:00Z"}
    ]"#;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn order_writes_one_line_per_task_in_display_order() {
        let mut out = Vec::new();
        let count = order_records(RECORDS.as_bytes(), &mut out).unwrap();

        assert_eq!(count, 3);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[ ] high   due 2026-03-03T10:00:00.000Z  book dentist",
                "[ ] low    due 2026-03-04T10:00:00.000Z  file taxes",
                "[x] high   due 2026-03-02T10:00:00.000Z  call bank",
            ]
        );
    }

    #[test]
    fn order_reports_unknown_priority() {
        let input = RECORDS.replace(r#""priority": "low""#, r#""priority": "urgent""#);
        let mut out = Vec::new();

        let err = order_records(input.as_bytes(), &mut out).unwrap_err();
        assert!(
            err.to_string().contains("priority"),
            "unexpected error: {err}"
        );
        assert!(out.is_empty());
    }

    #[test]
    fn order_reports_unreadable_input() {
        let mut out = Vec::new();

        let err = order_records(FailingReader, &mut out).unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
        assert!(out.is_empty());
    }

    #[test]
    fn order_rejects_malformed_json() {
        let mut out = Vec::new();
        assert!(order_records("not json".as_bytes(), &mut out).is_err());
    }

    #[test]
    fn cli_parses_order_subcommand_and_bare_invocation() {
        let args = ["lazytask_cli", "order", "tasks.json"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Order { path }) if path == PathBuf::from("tasks.json")
        ));

        let bare = Cli::try_parse_from(["lazytask_cli"]).unwrap();
        assert!(bare.command.is_none());

        assert!(Cli::try_parse_from(["lazytask_cli", "order"]).is_err());
    }
}
