//! Backend settings.
//!
//! Typed configuration for the web backend, read once at startup from
//! the process environment and an optional `.env` override file, and
//! passed explicitly to whatever needs it.
//!
//! # Modules
//!
//! - **constants**: recognized keys and their defaults
//! - **settings**: the settings record and its loader
//! - **types**: value types for typed fields
//! - **urls**: connection strings for the database, cache and document store
//! - **infra**: sea-orm and redis client adapters
//!
//! ```rust,ignore
//! use settings::{LoadOptions, Settings};
//!
//! let settings = Settings::load(&LoadOptions::default())?;
//! println!("{}", settings.database.redacted_url());
//! ```

pub mod constants;
pub mod infra;
pub mod settings;
pub mod types;
pub mod urls;

pub use settings::{
    AppSettings, DatabaseSettings, JobSettings, LoadOptions, MailSettings, MongoSettings,
    RedisSettings, ServerSettings, Settings, SuperuserSeed, SuperuserSettings,
};
pub use secrecy::{ExposeSecret, SecretString};
pub use types::{EngineFamily, Sniffer, SqlEngine};

pub use common::{ConfigError, ConfigResult, FieldError};
