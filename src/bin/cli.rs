//! Registrar CLI
//!
//! Read-only queries and deletions against the registrar API, printed as
//! JSON `{ success, data, message, errors }` results.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use registrar::{
    ActionResult, Outcome, Registrar, Session,
    error::{AppError, Result},
    models::{Config, CourseFilter, FormFilter, LocaleConfig, LookupKind, StudentFilter},
    services::LookupKey,
};
use serde::Serialize;

/// registrar - university academic-administration client
#[derive(Parser, Debug)]
#[command(
    name = "registrar",
    version,
    about = "Query and maintain academic records over the registrar API"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Path to the locale (messages) file
    #[arg(short, long, default_value = "locale.toml")]
    locale: PathBuf,

    /// Bearer token; falls back to REGISTRAR_TOKEN
    #[arg(short, long)]
    token: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate configuration files
    Validate,

    /// List courses
    Courses {
        #[arg(long)]
        department: Option<i64>,
        #[arg(long)]
        degree: Option<i64>,
        #[arg(long)]
        track: Option<i64>,
    },

    /// List departments
    Departments {
        /// Only departments of this program
        #[arg(long)]
        program: Option<i64>,
    },

    /// List degrees
    Degrees {
        /// Only degrees of this department
        #[arg(long)]
        department: Option<i64>,
    },

    /// List tracks
    Tracks {
        /// Only tracks of this degree (as lookup items)
        #[arg(long)]
        degree: Option<i64>,
    },

    /// List intakes
    Intakes,

    /// List students, or fetch one by national id
    Students {
        #[arg(long)]
        national_id: Option<String>,
        #[arg(long)]
        department: Option<i64>,
        #[arg(long)]
        degree: Option<i64>,
        #[arg(long)]
        track: Option<i64>,
    },

    /// List registration forms
    Forms {
        #[arg(long)]
        department: Option<i64>,
        #[arg(long)]
        degree: Option<i64>,
        #[arg(long)]
        track: Option<i64>,
        #[arg(long)]
        search: Option<String>,
    },

    /// List colleges
    Colleges,

    /// List universities
    Universities,

    /// Fetch a lookup list (e.g. departments, programs, governorates)
    Lookup { kind: LookupKind },

    /// Delete a record
    Delete { target: Target, id: String },
}

/// Record kinds that can be deleted from the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Target {
    Course,
    Department,
    Degree,
    Track,
    Intake,
    Student,
    Form,
    College,
    University,
}

/// Initialize logging; `--verbose` wins over the configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Print an outcome as a pretty JSON result.
fn print<T: Serialize>(outcome: Outcome<T>) -> Result<()> {
    let result = ActionResult::from(outcome);
    if !result.success {
        log::warn!("Request failed: {}", result.message);
    }
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn numeric_id(id: &str) -> Result<i64> {
    id.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("'{id}' is not a numeric id")))
}

async fn delete(registrar: &Registrar, target: Target, id: &str) -> Result<()> {
    match target {
        Target::Course => print(registrar.courses().delete(id).await),
        Target::Student => print(registrar.students().delete(id).await),
        Target::Department => print(registrar.departments().delete(numeric_id(id)?).await),
        Target::Degree => print(registrar.degrees().delete(numeric_id(id)?).await),
        Target::Track => print(registrar.tracks().delete(numeric_id(id)?).await),
        Target::Intake => print(registrar.intakes().delete(numeric_id(id)?).await),
        Target::Form => print(registrar.registration_forms().delete(numeric_id(id)?).await),
        Target::College => print(registrar.colleges().delete(numeric_id(id)?).await),
        Target::University => print(registrar.universities().delete(numeric_id(id)?).await),
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The log level comes from the config file, so a load failure is
    // reported once the logger is up.
    let loaded = Config::load(&cli.config);
    let config = loaded
        .as_ref()
        .map(Config::clone)
        .unwrap_or_default()
        .with_env_overrides();
    init_logging(cli.verbose, &config.logging.level);

    if let Err(e) = &loaded {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        );
    }
    let locale = LocaleConfig::load_or_default(&cli.locale);
    let session = cli.token.map(Session::new).unwrap_or_else(Session::from_env);

    if let Command::Validate = cli.command {
        log::info!("Validating configuration...");
        if let Err(e) = config.validate() {
            log::error!("Config validation failed: {}", e);
            return Err(e);
        }
        match config.api.base_url() {
            Some(url) => log::info!("✓ Config OK (base URL {})", url),
            None => log::warn!("Config OK but no base URL is set; every call will fail"),
        }
        if !session.is_authenticated() {
            log::warn!("No token given; authenticated endpoints will be refused locally");
        }
        return Ok(());
    }

    let registrar = Registrar::new(&config, locale, session)?;

    match cli.command {
        Command::Validate => {}

        Command::Courses {
            department,
            degree,
            track,
        } => {
            let filter = CourseFilter {
                department_id: department,
                degree_id: degree,
                msar_id: track,
            };
            print(registrar.courses().get_all(&filter).await)?;
        }

        Command::Departments { program } => match program {
            Some(id) => print(registrar.departments().by_program(id).await)?,
            None => print(registrar.departments().get_all().await)?,
        },

        Command::Degrees { department } => match department {
            Some(id) => print(registrar.degrees().by_department(id).await)?,
            None => print(registrar.degrees().get_all().await)?,
        },

        Command::Tracks { degree } => match degree {
            Some(id) => print(registrar.tracks().by_degree(id).await)?,
            None => print(registrar.tracks().get_all().await)?,
        },

        Command::Intakes => print(registrar.intakes().get_all().await)?,

        Command::Students {
            national_id: Some(nid),
            ..
        } => print(registrar.students().by_national_id(&nid).await)?,

        Command::Students {
            national_id: None,
            department,
            degree,
            track,
        } => {
            let filter = StudentFilter {
                department_id: department,
                degree_id: degree,
                msar_id: track,
                national_id: None,
            };
            print(registrar.students().list(&filter).await)?;
        }

        Command::Forms {
            department,
            degree,
            track,
            search,
        } => {
            let filter = FormFilter {
                department_id: department,
                degree_id: degree,
                msar_id: track,
                search,
            };
            print(registrar.registration_forms().list(&filter).await)?;
        }

        Command::Colleges => print(registrar.colleges().get_all().await)?,

        Command::Universities => print(registrar.universities().get_all().await)?,

        Command::Lookup { kind } => print(registrar.lookups().fetch(LookupKey::Kind(kind)).await)?,

        Command::Delete { target, id } => delete(&registrar, target, &id).await?,
    }

    Ok(())
}
