//! Command implementations.

use std::net::SocketAddr;
use std::sync::Arc;

use settings::infra::{cache, db};
use settings::{ConfigError, Settings};
use tracing::{debug, error, info, warn};

use crate::cli::{ServeArgs, UrlsArgs};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Log every problem in a failed load.
pub fn report_config_error(err: &ConfigError) {
    match err {
        ConfigError::Validation(errors) => {
            error!("{} validation error(s) for settings", errors.len());
            for field_error in errors {
                error!(
                    field = field_error.field(),
                    code = field_error.code(),
                    "{}",
                    field_error
                );
            }
        }
        other => error!(code = other.code(), "{}", other),
    }
}

/// Summarize a successful load.
pub fn check(settings: &Settings) -> CommandResult {
    info!(project = %settings.app.project_name, "Settings are valid");
    info!(engine = %settings.database.engine, url = %settings.database.redacted_url(), "SQL database");
    info!(url = %settings.redis.redacted_url(), "Redis cache");

    if settings.mongodb.is_configured() {
        info!(url = %settings.mongodb.redacted_url(), "MongoDB");
    } else {
        info!("MongoDB not configured");
    }
    if !settings.mail.is_enabled() {
        warn!("SMTP_HOST is empty; outbound mail is disabled");
    }

    Ok(())
}

/// Print the settings record. Secrets are never serialized.
pub fn show(settings: &Settings) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}

/// Print the connection strings, masked unless `--reveal` is given.
pub fn urls(settings: &Settings, args: &UrlsArgs) -> CommandResult {
    let (sql, redis, mongodb) = if args.reveal {
        (settings.sql_url(), settings.redis_url(), settings.mongodb_url())
    } else {
        (
            settings.database.redacted_url(),
            settings.redis.redacted_url(),
            settings.mongodb.redacted_url(),
        )
    };

    println!("sql      {}", sql);
    println!("redis    {}", redis);
    println!("mongodb  {}", mongodb);
    Ok(())
}

/// Connect to the SQL database and the cache.
pub async fn ping(settings: &Settings) -> CommandResult {
    let connection = db::connect(settings).await?;
    connection.close().await?;

    cache::ping(&settings.redis).await?;

    info!("All backing services reachable");
    Ok(())
}

/// Run the HTTP server with `settings`.
pub async fn serve(settings: Settings, args: &ServeArgs) -> CommandResult {
    let addr = SocketAddr::new(
        args.host.unwrap_or(settings.server.host),
        args.port.unwrap_or(settings.server.port),
    );

    if settings.server.reload {
        debug!("RELOAD is set; restart the process to pick up changes");
    }
    if settings.server.debug {
        info!("Debug mode enabled");
    }

    gateway_lib::run_server(Arc::new(settings), addr).await
}
