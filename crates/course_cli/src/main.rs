//! Command-line front end for course storage.
//!
//! # Responsibility
//! - Map subcommands onto `course_core` public operations.
//! - Print records as JSON and errors with their kind.
//!
//! Numeric arguments are forwarded as loosely-typed values so that bad
//! input surfaces as a validation error from the core, not a clap error.

use clap::{Parser, Subcommand};
use course_core::{CourseDraft, CourseError, CoursePatch, CourseService, FieldValue};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "course", version, about = "Manage the Courses table", long_about = None)]
struct Cli {
    /// Store location; defaults to $COURSE_DB_PATH or ./college.db
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the Courses table if it does not exist
    Init,
    /// Insert a new course
    Add {
        #[arg(allow_hyphen_values = true)]
        id: String,
        name: String,
        #[arg(allow_hyphen_values = true)]
        fee: String,
        #[arg(allow_hyphen_values = true)]
        duration: String,
    },
    /// Print one course
    Show {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Change some fields of a course
    Update {
        #[arg(allow_hyphen_values = true)]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        fee: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        duration: Option<String>,
    },
    /// Delete a course
    #[command(alias = "rm")]
    Remove {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Print every course ordered by id
    #[command(alias = "ls")]
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or_else(|| course_core::default_log_level());
        if let Err(err) = course_core::init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    }

    let service = match cli.db {
        Some(path) => CourseService::new(path),
        None => CourseService::default(),
    };

    match run(&service, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error [{}]: {err}", err.kind());
            if err.is_retryable() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}

fn run(service: &CourseService, command: Command) -> Result<(), CourseError> {
    match command {
        Command::Init => {
            service.ensure_schema()?;
            println!("initialized {}", service.location().display());
        }
        Command::Add {
            id,
            name,
            fee,
            duration,
        } => {
            let draft = CourseDraft::new(
                parse_value(&id),
                name,
                parse_value(&fee),
                parse_value(&duration),
            );
            service.create(&draft)?;
            print_json(&service.get(parse_value(&id))?);
        }
        Command::Show { id } => print_json(&service.get(parse_value(&id))?),
        Command::Update {
            id,
            name,
            fee,
            duration,
        } => {
            let patch = CoursePatch {
                name: name.map(FieldValue::Text),
                fee: fee.as_deref().map(parse_value),
                duration: duration.as_deref().map(parse_value),
            };
            service.update(parse_value(&id), &patch)?;
            print_json(&service.get(parse_value(&id))?);
        }
        Command::Remove { id } => {
            service.delete(parse_value(&id))?;
            println!("deleted {}", id.trim());
        }
        Command::List => print_json(&service.list()?),
    }
    Ok(())
}

/// Integer when the text is one, then real, otherwise raw text.
fn parse_value(raw: &str) -> FieldValue {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return FieldValue::Integer(value);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return FieldValue::Real(value);
    }
    FieldValue::Text(raw.to_string())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("error: failed to encode output: {err}"),
    }
}
