//! Student Roster CLI - build, search and list a roster of students
//!
//! Architecture: Application Layer - CLI coordinates user interactions with the library
//! - Translates user commands to roster operations
//! - Handles external concerns like config discovery, process exit codes, and terminal output

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use student_roster::{
    format_error, OutputFormat, ReportFormatter, ReportOptions, Roster, RosterConfig,
    RosterResult,
};
use tracing_subscriber::EnvFilter;

/// Student Roster - validated students grouped into classes
#[derive(Parser)]
#[command(name = "student-roster")]
#[command(version = "0.1.0")]
#[command(about = "Validate, search and list a roster of students grouped into classes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Roster definition file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Upper bound for birth dates (YYYY-MM-DD), defaults to today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Highlight group headings
    #[arg(long, global = true)]
    color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a student, sort every group and list the roster
    Show {
        /// Student id to look up (defaults to the definition's search id)
        #[arg(long)]
        id: Option<String>,

        /// Output format: human or json
        #[arg(short, long, default_value = "human", value_parser = parse_format)]
        format: OutputFormat,
    },

    /// Look up a single student by id
    Find {
        /// Six-digit student id
        student_id: String,
    },

    /// Validate a roster definition file
    ValidateConfig {
        /// Roster file to validate
        config_file: Option<PathBuf>,
    },
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(value).ok_or_else(|| {
        format!(
            "unknown format '{}', expected one of: {}",
            value,
            OutputFormat::all_formats().join(", ")
        )
    })
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run_command(cli) {
        Ok(output) => {
            print!("{output}");
        }
        // A rejected record ends the run normally with a single message
        Err(e) if e.is_validation() => {
            println!("{}", format_error(&e));
        }
        Err(e) => {
            eprintln!("{}", format_error(&e));
            process::exit(1);
        }
    }
}

fn run_command(cli: Cli) -> RosterResult<String> {
    let options = ReportOptions { use_colors: cli.color };

    match cli.command {
        Some(Commands::Show { id, format }) => {
            run_show(cli.config.as_deref(), cli.today, id, format, options)
        }
        None => run_show(cli.config.as_deref(), cli.today, None, OutputFormat::Human, options),
        Some(Commands::Find { student_id }) => {
            run_find(cli.config.as_deref(), cli.today, &student_id)
        }
        Some(Commands::ValidateConfig { config_file }) => {
            run_validate_config(config_file.as_deref().or(cli.config.as_deref()), cli.today)
        }
    }
}

fn run_show(
    config_path: Option<&Path>,
    today: Option<NaiveDate>,
    search_id: Option<String>,
    format: OutputFormat,
    options: ReportOptions,
) -> RosterResult<String> {
    let config = load_config(config_path)?;
    let mut roster = build_roster(&config, today)?;

    let search_id = search_id.unwrap_or_else(|| config.search_id.clone());
    let found = roster.find_student_by_id(&search_id).cloned();

    roster.sort_all();

    ReportFormatter::new(options).format_roster(found.as_ref(), roster.groups(), format)
}

fn run_find(
    config_path: Option<&Path>,
    today: Option<NaiveDate>,
    student_id: &str,
) -> RosterResult<String> {
    let config = load_config(config_path)?;
    let roster = build_roster(&config, today)?;

    Ok(ReportFormatter::default().format_found(roster.find_student_by_id(student_id)))
}

fn run_validate_config(
    config_path: Option<&Path>,
    today: Option<NaiveDate>,
) -> RosterResult<String> {
    let config = load_config(config_path)?;
    let roster = build_roster(&config, today)?;

    let students: usize = roster.groups().iter().map(|g| g.len()).sum();
    Ok(format!(
        "Configuration is valid: {} groups, {} students\n",
        roster.groups().len(),
        students
    ))
}

/// Load the given definition, a discovered one, or the built-in sample
fn load_config(config_path: Option<&Path>) -> RosterResult<RosterConfig> {
    if let Some(path) = config_path {
        return RosterConfig::load_from_file(path);
    }

    let default_configs = ["roster.yaml", "roster.yml", ".roster.yaml"];
    for config_name in &default_configs {
        if Path::new(config_name).exists() {
            return RosterConfig::load_from_file(config_name);
        }
    }

    Ok(RosterConfig::default())
}

fn build_roster(config: &RosterConfig, today: Option<NaiveDate>) -> RosterResult<Roster> {
    match today {
        Some(today) => Roster::from_config_at(config, today),
        None => Roster::from_config(config),
    }
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` is honoured, defaulting to warn
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use student_roster::RosterError;
    use tempfile::TempDir;

    fn today() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 6, 1)
    }

    fn write_config(dir: &TempDir, first_name: &str) -> PathBuf {
        let mut config = RosterConfig::default();
        config.groups[0].students[0].first_name = first_name.to_string();
        let path = dir.path().join("roster.yaml");
        fs::write(&path, config.to_yaml().unwrap()).unwrap();
        path
    }

    #[test]
    fn test_show_command() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "John");

        let output = run_show(
            Some(path.as_path()),
            today(),
            None,
            OutputFormat::Human,
            ReportOptions::default(),
        )
        .unwrap();

        assert!(output.starts_with("Found student: Bob Brown\nStudents in 402:\nAlice Johnson\n"));
    }

    #[test]
    fn test_show_with_unknown_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "John");

        let output = run_show(
            Some(path.as_path()),
            today(),
            Some("999999".to_string()),
            OutputFormat::Human,
            ReportOptions::default(),
        )
        .unwrap();

        assert!(output.starts_with("Students in 402:\n"));
    }

    #[test]
    fn test_show_reports_validation_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "john");

        let err = run_show(
            Some(path.as_path()),
            today(),
            None,
            OutputFormat::Human,
            ReportOptions::default(),
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(format_error(&err), "Error: First name is invalid");
    }

    #[test]
    fn test_find_command() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "John");

        assert_eq!(
            run_find(Some(path.as_path()), today(), "456789").unwrap(),
            "Found student: Charlie Davis\n"
        );
        assert_eq!(run_find(Some(path.as_path()), today(), "000000").unwrap(), "");
    }

    #[test]
    fn test_verbose_log_filter() {
        use tracing::level_filters::LevelFilter;

        assert_eq!(log_filter(true).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_format_argument() {
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert_eq!(parse_format("Human").unwrap(), OutputFormat::Human);

        let err = parse_format("xml").unwrap_err();
        assert!(err.contains("human, json"));

        let cli = Cli::try_parse_from(["student-roster", "show", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Show { format: OutputFormat::Json, .. })
        ));
        assert!(Cli::try_parse_from(["student-roster", "show", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_validate_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "John");

        let output = run_validate_config(Some(path.as_path()), today()).unwrap();
        assert_eq!(output, "Configuration is valid: 2 groups, 5 students\n");

        let missing = temp_dir.path().join("missing.yaml");
        let err = run_validate_config(Some(missing.as_path()), today()).unwrap_err();
        assert!(matches!(err, RosterError::Configuration { .. }));
    }
}
