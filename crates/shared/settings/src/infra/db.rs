//! Relational database options built from settings.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::settings::Settings;

/// Connection options for the configured relational database.
///
/// SQL statement logging follows `ECHO_SQL`.
pub fn connect_options(settings: &Settings) -> ConnectOptions {
    let mut options = ConnectOptions::new(settings.database.driver_url());
    options.sqlx_logging(settings.app.echo_sql);
    options
}

/// Open a connection and verify it answers.
pub async fn connect(settings: &Settings) -> Result<DatabaseConnection, DbErr> {
    tracing::debug!(url = %settings.database.redacted_url(), "Connecting to database");

    let connection = Database::connect(connect_options(settings)).await?;
    connection.ping().await?;

    tracing::info!("Database connected");
    Ok(connection)
}
