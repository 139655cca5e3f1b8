//! Redis client built from settings.

use redis::{aio::ConnectionManager, Client, RedisResult};

use crate::settings::RedisSettings;

/// Create a client for the configured cache. Does not connect.
pub fn open_client(redis: &RedisSettings) -> RedisResult<Client> {
    Client::open(redis.connection_url().as_str())
}

/// Connect and issue a `PING`.
pub async fn ping(redis: &RedisSettings) -> RedisResult<()> {
    tracing::debug!(url = %redis.redacted_url(), "Connecting to Redis");

    let client = open_client(redis)?;
    let mut connection = ConnectionManager::new(client).await?;
    let _: String = redis::cmd("PING").query_async(&mut connection).await?;

    tracing::info!("Redis cache connected");
    Ok(())
}
