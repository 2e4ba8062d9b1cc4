//! Command-line landmark lookup.
//!
//! # Responsibility
//! - Resolve free text given as arguments and print the outcome.
//! - Run the same config, logging, table loading and history paths as the bot.
//!
//! # Invariants
//! - Exit code is 0 on success (found or not), 1 on any usage or setup error.

use clap::Parser;
use langhelper_core::db::open_db;
use langhelper_core::{
    builtin_tables, init_logging, CoreConfig, LandmarkService, LandmarkTables, Resolution,
    Resolver, SqliteHistoryRepository, UserId,
};
use log::info;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "langhelper_cli")]
#[command(about = "Resolve free text to a known landmark")]
#[command(version)]
struct Cli {
    /// Print the resolution as JSON
    #[arg(long)]
    json: bool,

    /// User id the lookup is recorded under in history
    #[arg(long, default_value_t = 0)]
    user: UserId,

    /// Text to resolve; several words are joined with spaces
    #[arg(required = true)]
    text: Vec<String>,
}

impl Cli {
    fn text(&self) -> String {
        self.text.join(" ")
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match CoreConfig::from_env()
        .map_err(|err| err.to_string())
        .and_then(|config| start_logging(&config).and_then(|()| run(&cli, &config)))
    {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging(config: &CoreConfig) -> Result<(), String> {
    match &config.log_dir {
        Some(log_dir) => init_logging(config.log_level, log_dir).map_err(|err| err.to_string()),
        None => Ok(()),
    }
}

/// Resolves the text and records a found landmark in the history database.
fn run(cli: &Cli, config: &CoreConfig) -> Result<String, String> {
    let loaded;
    let tables = match &config.tables_path {
        Some(path) => {
            loaded = LandmarkTables::from_json_file(path).map_err(|err| err.to_string())?;
            &loaded
        }
        None => builtin_tables(),
    };

    let conn = open_db(&config.db_path).map_err(|err| err.to_string())?;
    let service = LandmarkService::new(
        Resolver::new(tables),
        SqliteHistoryRepository::new(&conn),
    );

    let text = cli.text();
    let resolution = service
        .lookup_text(cli.user, &text)
        .map_err(|err| err.to_string())?;
    info!(
        "event=cli_resolve module=cli status=ok text_chars={} found={}",
        text.chars().count(),
        resolution.is_found()
    );

    if cli.json {
        serde_json::to_string_pretty(&resolution).map_err(|err| err.to_string())
    } else {
        Ok(render_plain(&resolution))
    }
}

fn render_plain(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Found(found) => format!(
            "{} ({})\n{}\n{}",
            found.display_name, found.secondary_name, found.description, found.fact
        ),
        Resolution::NotFound => "not found".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{render_plain, run, Cli};
    use clap::error::ErrorKind;
    use clap::Parser;
    use langhelper_core::db::open_db;
    use langhelper_core::{
        resolve, CoreConfig, HistoryKind, HistoryRepository, SqliteHistoryRepository,
    };

    fn config_with_db(dir: &tempfile::TempDir) -> CoreConfig {
        CoreConfig {
            db_path: dir.path().join("langhelper.sqlite3"),
            ..CoreConfig::default()
        }
    }

    #[test]
    fn parses_json_flag_anywhere_and_joins_words() {
        let cli =
            Cli::try_parse_from(["langhelper_cli", "--json", "красная", "площадь"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.user, 0);
        assert_eq!(cli.text(), "красная площадь");

        let cli =
            Cli::try_parse_from(["langhelper_cli", "eiffel", "--json", "--user", "7"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.user, 7);
        assert_eq!(cli.text(), "eiffel");
    }

    #[test]
    fn text_is_required() {
        let err = Cli::try_parse_from(["langhelper_cli", "--json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn render_plain_shows_name_and_fact() {
        let rendered = render_plain(&resolve("red square"));
        assert!(rendered.starts_with("Красная площадь (Red Square)"));
        assert_eq!(render_plain(&resolve("xyz")), "not found");
    }

    #[test]
    fn run_records_found_landmark_in_configured_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_db(&dir);
        let cli =
            Cli::try_parse_from(["langhelper_cli", "--json", "--user", "9", "big", "ben"])
                .unwrap();

        let output = run(&cli, &config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["secondary_name"], "Big Ben");

        let conn = open_db(&config.db_path).unwrap();
        let history = SqliteHistoryRepository::new(&conn).recent(9, None).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, HistoryKind::TextLandmark);
        assert_eq!(history[0].original_text, "big ben");
    }

    #[test]
    fn run_rejects_too_short_text() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from(["langhelper_cli", " я "]).unwrap();

        let message = run(&cli, &config_with_db(&dir)).unwrap_err();
        assert!(message.contains("too short"));
    }
}
