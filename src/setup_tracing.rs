use time::macros::format_description;
use tracing_subscriber::{filter::Directive, fmt::time::OffsetTime, EnvFilter};

use crate::cli::Commands;

/// Third-party targets that are too chatty at the server's default level.
const QUIET_TARGETS: [&str; 2] = [
    "sqlx::postgres::notice=warn",
    "sea_orm_migration::migrator=warn",
];

/// Default filter level when `RUST_LOG` is not set.
///
/// CLI commands stay quiet; the server logs at the configured level.
pub fn default_level<'a>(command: &Option<Commands>, server_log_level: &'a str) -> &'a str {
    match command {
        Some(Commands::Migrate { .. }) => "warn",
        Some(Commands::Version | Commands::GenerateJwtSecret) => "error",
        Some(Commands::Serve) | None => server_log_level,
    }
}

pub fn setup_tracing_for_command(command: &Option<Commands>, server_log_level: &str) {
    let default_level = default_level(command, server_log_level);

    let env_filter = QUIET_TARGETS
        .iter()
        .filter_map(|directive| directive.parse::<Directive>().ok())
        .fold(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
            EnvFilter::add_directive,
        );

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_level(true)
        .with_ansi(true)
        .with_timer(OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC),
            format_description!("[hour]:[minute]:[second].[subsecond digits:2]"),
        ))
        .compact()
        .init();
}
