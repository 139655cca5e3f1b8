//! Configuration keys and their defaults.
//!
//! Centralized location for every recognized key so loaders, docs and
//! tests agree on spelling.

use std::net::{IpAddr, Ipv4Addr};

// =============================================================================
// Sources
// =============================================================================

/// Override file name, relative to the base directory
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// Application
// =============================================================================

pub const ENV_PROJECT_NAME: &str = "PROJECT_NAME";
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_LOGGING_CONFIG_FILE: &str = "LOGGING_CONFIG_FILE";
pub const ENV_ECHO_SQL: &str = "ECHO_SQL";
pub const ENV_AUTO_ADD_PERM_LABEL: &str = "AUTO_ADD_PERM_LABEL";
pub const ENV_API_DOMAIN: &str = "API_DOMAIN";
pub const ENV_WEB_DOMAIN: &str = "WEB_DOMAIN";
pub const ENV_BACKEND_CORS_ORIGINS: &str = "BACKEND_CORS_ORIGINS";
pub const ENV_JWT_ALGORITHM: &str = "JWT_ALGORITHM";
pub const ENV_EMAIL_TEMPLATES_DIR: &str = "EMAIL_TEMPLATES_DIR";
pub const ENV_WEB_TEMPLATES_DIR: &str = "WEB_TEMPLATES_DIR";
pub const ENV_DATABASE_UPDATE_AUTH: &str = "DATABASE_UPDATE_AUTH";
pub const ENV_NOTES_PATH: &str = "NOTES_PATH";
pub const ENV_CACHE_TTL: &str = "CACHE_TTL";
pub const ENV_USERS_OPEN_REGISTRATION: &str = "USERS_OPEN_REGISTRATION";
pub const ENV_LOGIN_WITH_CAPTCHA: &str = "LOGIN_WITH_CAPTCHA";
pub const ENV_LOG_CAPTCHA_ERROR: &str = "LOG_CAPTCHA_ERROR";

pub const DEFAULT_PROJECT_NAME: &str = "app-backend";
/// Relative to the base directory
pub const DEFAULT_LOGGING_CONFIG_FILE: &str = "configs/logging_config.conf";
pub const DEFAULT_API_DOMAIN: &str = "http://127.0.0.1:5707";
pub const DEFAULT_WEB_DOMAIN: &str = "http://127.0.0.1:8080";
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["*"];
pub const DEFAULT_JWT_ALGORITHM: &str = "HS256";
pub const DEFAULT_EMAIL_TEMPLATES_DIR: &str = "./email-templates/";
/// Relative to the base directory
pub const DEFAULT_WEB_TEMPLATES_DIR: &str = "templates";
pub const DEFAULT_DATABASE_UPDATE_AUTH: &str = "upgrade";
pub const DEFAULT_NOTES_PATH: &str = "./log/notes.json";
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;

// =============================================================================
// Server (direct execution only)
// =============================================================================

pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_RELOAD: &str = "RELOAD";
pub const ENV_DEBUG: &str = "DEBUG";

pub const DEFAULT_SERVER_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_SERVER_PORT: u16 = 9898;

// =============================================================================
// Relational database
// =============================================================================

pub const ENV_SQL_USERNAME: &str = "SQL_USERNAME";
pub const ENV_SQL_PASSWORD: &str = "SQL_PASSWORD";
pub const ENV_SQL_HOST: &str = "SQL_HOST";
pub const ENV_SQL_PORT: &str = "SQL_PORT";
pub const ENV_SQL_DATABASE: &str = "SQL_DATABASE";
pub const ENV_SQL_TABLE_PREFIX: &str = "SQL_TABLE_PREFIX";
pub const ENV_SQL_ENGINE: &str = "SQL_ENGINE";
/// Older name for `SQL_ENGINE`, read when `SQL_ENGINE` is unset
pub const ENV_SQL_ENGINE_ALIAS: &str = "SQLALCHEMY_ENGINE";

pub const DEFAULT_SQL_HOST: &str = "127.0.0.1";
pub const DEFAULT_SQL_PORT: u16 = 3306;
pub const DEFAULT_SQL_TABLE_PREFIX: &str = "t_";
pub const DEFAULT_SQL_ENGINE: &str = "mysql";

/// Directory under the base directory holding sqlite files
pub const SQLITE_DIR: &str = "db";

// =============================================================================
// Cache (Redis)
// =============================================================================

pub const ENV_REDIS_HOST: &str = "REDIS_HOST";
pub const ENV_REDIS_PASSWORD: &str = "REDIS_PASSWORD";
pub const ENV_REDIS_DB: &str = "REDIS_DB";
pub const ENV_REDIS_PORT: &str = "REDIS_PORT";

pub const DEFAULT_REDIS_DB: u32 = 0;
pub const DEFAULT_REDIS_PORT: u16 = 6379;

// =============================================================================
// Document store (MongoDB)
// =============================================================================

pub const ENV_MONGODB_HOST: &str = "MONGODB_HOST";
pub const ENV_MONGODB_PORT: &str = "MONGODB_PORT";
pub const ENV_MONGODB_USERNAME: &str = "MONGODB_USERNAME";
pub const ENV_MONGODB_PASSWORD: &str = "MONGODB_PASSWORD";
pub const ENV_MONGODB_DB_NAME: &str = "MONGODB_DB_NAME";

// =============================================================================
// Mail
// =============================================================================

pub const ENV_SMTP_TLS: &str = "SMTP_TLS";
pub const ENV_SMTP_PORT: &str = "SMTP_PORT";
pub const ENV_SMTP_HOST: &str = "SMTP_HOST";
pub const ENV_SMTP_USER: &str = "SMTP_USER";
pub const ENV_SMTP_PASSWORD: &str = "SMTP_PASSWORD";
pub const ENV_EMAIL_FROM_EMAIL: &str = "EMAIL_FROM_EMAIL";

pub const DEFAULT_SMTP_PORT: u16 = 587;

// =============================================================================
// Superuser seeds
// =============================================================================

pub const ENV_FIRST_SUPERUSER: &str = "FIRST_SUPERUSER";
pub const ENV_FIRST_SUPERUSER_EMAIL: &str = "FIRST_SUPERUSER_EMAIL";
pub const ENV_FIRST_SUPERUSER_PASSWORD: &str = "FIRST_SUPERUSER_PASSWORD";
pub const ENV_SECOND_SUPERUSER: &str = "SECOND_SUPERUSER";
pub const ENV_SECOND_SUPERUSER_EMAIL: &str = "SECOND_SUPERUSER_EMAIL";
pub const ENV_SECOND_SUPERUSER_PASSWORD: &str = "SECOND_SUPERUSER_PASSWORD";

pub const DEFAULT_FIRST_SUPERUSER: &str = "admin";
pub const DEFAULT_FIRST_SUPERUSER_EMAIL: &str = "admin@example.com";
pub const DEFAULT_SECOND_SUPERUSER: &str = "operator";
pub const DEFAULT_SECOND_SUPERUSER_EMAIL: &str = "operator@example.com";
pub const DEFAULT_SUPERUSER_PASSWORD: &str = "changeme";

// =============================================================================
// Background jobs & sniffing
// =============================================================================

pub const ENV_JOB_DELTA: &str = "JOB_DELTA";
pub const ENV_IP_AGENTS: &str = "IP_AGENTS";
pub const ENV_PIP_PROXY: &str = "PIP_PROXY";
pub const ENV_DEFAULT_SNIFFER: &str = "DEFAULT_SNIFFER";
pub const ENV_SNIFFER_URL: &str = "SNIFFER_URL";

/// Job schedule refresh interval in seconds
pub const DEFAULT_JOB_DELTA_SECONDS: u64 = 10;
pub const DEFAULT_PIP_PROXY: &str = "https://mirrors.cloud.tencent.com/pypi/simple";
pub const DEFAULT_SNIFFER_URL: &str = "http://127.0.0.1:5708";

// =============================================================================
// Rendering
// =============================================================================

/// Stand-in for passwords in logged connection strings
pub const REDACTED: &str = "***";
