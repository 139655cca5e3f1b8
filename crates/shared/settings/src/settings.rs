//! Application settings loaded from the environment and an override file.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use common::{ConfigError, ConfigResult, EnvSource, FieldError, FieldReader};
use secrecy::SecretString;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::constants::*;
use crate::types::{parse_sql_host, parse_url, Sniffer, SqlEngine};

/// Where to look for settings.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Override file; absence is not an error
    pub env_file: PathBuf,
    /// Base directory for the sqlite file and default template/log paths
    pub base_dir: PathBuf,
}

impl LoadOptions {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            env_file: base_dir.join(DEFAULT_ENV_FILE),
            base_dir,
        }
    }

    pub fn with_env_file(mut self, env_file: impl Into<PathBuf>) -> Self {
        self.env_file = env_file.into();
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

/// Application configuration, built once at startup and shared read-only.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub app: AppSettings,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub redis: RedisSettings,
    pub mongodb: MongoSettings,
    pub mail: MailSettings,
    pub superusers: SuperuserSettings,
    pub jobs: JobSettings,
}

/// General application behavior.
#[derive(Debug, Clone, Serialize)]
pub struct AppSettings {
    pub project_name: String,
    /// Token signing key; random per process unless configured
    #[serde(skip_serializing)]
    pub secret_key: SecretString,
    pub logging_config_file: PathBuf,
    pub echo_sql: bool,
    pub auto_add_perm_label: bool,
    pub api_domain: Url,
    pub web_domain: Url,
    /// Allowed cross-origin hosts, in order
    pub cors_origins: Vec<String>,
    pub jwt_algorithm: String,
    pub web_templates_dir: PathBuf,
    #[serde(skip_serializing)]
    pub database_update_auth: SecretString,
    pub notes_path: PathBuf,
    pub cache_ttl_seconds: u64,
    pub users_open_registration: bool,
    pub login_with_captcha: bool,
    pub log_captcha_error: bool,
}

impl AppSettings {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

/// Bind settings, used only when the binary serves HTTP directly.
#[derive(Debug, Clone, Serialize)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
    pub reload: bool,
    pub debug: bool,
}

impl ServerSettings {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Relational database connectivity.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseSettings {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: Option<SecretString>,
    /// Validated host in connection-string form
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Table name prefix; empty for none
    pub table_prefix: String,
    pub engine: SqlEngine,
    #[serde(skip_serializing)]
    pub base_dir: PathBuf,
}

impl DatabaseSettings {
    /// On-disk location used by file-based engines.
    pub fn sqlite_path(&self) -> PathBuf {
        self.base_dir
            .join(SQLITE_DIR)
            .join(format!("{}.db", self.database))
    }

    /// Prefix a table name with the configured prefix.
    pub fn table_name(&self, name: &str) -> String {
        format!("{}{}", self.table_prefix, name)
    }
}

/// Cache (Redis) connectivity.
#[derive(Debug, Clone, Serialize)]
pub struct RedisSettings {
    pub host: String,
    #[serde(skip_serializing)]
    pub password: Option<SecretString>,
    pub db: u32,
    pub port: u16,
}

/// Document store (MongoDB) connectivity.
#[derive(Debug, Clone, Serialize)]
pub struct MongoSettings {
    pub host: String,
    pub port: Option<u16>,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<SecretString>,
    pub db_name: String,
}

impl MongoSettings {
    pub fn is_configured(&self) -> bool {
        !self.host.is_empty()
    }
}

/// Outbound mail. Mail features are off unless an SMTP host is set.
#[derive(Debug, Clone, Serialize)]
pub struct MailSettings {
    pub tls: bool,
    pub port: u16,
    pub host: String,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: SecretString,
    pub from_email: String,
    pub templates_dir: PathBuf,
}

impl MailSettings {
    /// Check before attempting to send anything.
    pub fn is_enabled(&self) -> bool {
        !self.host.is_empty()
    }
}

/// Bootstrap account seed.
#[derive(Debug, Clone, Serialize)]
pub struct SuperuserSeed {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: SecretString,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuperuserSettings {
    pub first: SuperuserSeed,
    pub second: SuperuserSeed,
}

impl SuperuserSettings {
    /// Seeds in provisioning order.
    pub fn seeds(&self) -> [&SuperuserSeed; 2] {
        [&self.first, &self.second]
    }
}

/// Scheduled job and scraping behavior.
#[derive(Debug, Clone, Serialize)]
pub struct JobSettings {
    /// Job schedule refresh interval in seconds
    pub job_delta_seconds: u64,
    pub ip_agents: Vec<String>,
    pub pip_proxy: Url,
    pub default_sniffer: Sniffer,
    pub sniffer_url: Url,
}

impl JobSettings {
    pub fn job_interval(&self) -> Duration {
        Duration::from_secs(self.job_delta_seconds)
    }
}

impl Settings {
    /// Load from the process environment and the override file.
    ///
    /// A missing override file falls back to the environment alone.
    /// Any missing required field or uncoercible value fails the load.
    pub fn load(options: &LoadOptions) -> ConfigResult<Self> {
        let source = EnvSource::from_process(&options.env_file)?;
        let settings = Self::from_source(&source, &options.base_dir)?;

        tracing::info!(
            project = %settings.app.project_name,
            override_file = ?source.override_file(),
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Build from already-resolved raw values.
    pub fn from_source(source: &EnvSource, base_dir: &Path) -> ConfigResult<Self> {
        let mut reader = FieldReader::new(source);

        let app = read_app(&mut reader, base_dir)?;
        let engine_key = if source.get(ENV_SQL_ENGINE).is_some() {
            ENV_SQL_ENGINE
        } else {
            ENV_SQL_ENGINE_ALIAS
        };
        let server = ServerSettings {
            host: reader.parse(ENV_HOST, DEFAULT_SERVER_HOST),
            port: reader.parse(ENV_PORT, DEFAULT_SERVER_PORT),
            reload: reader.flag(ENV_RELOAD, true),
            debug: reader.flag(ENV_DEBUG, false),
        };
        let database = DatabaseSettings {
            username: reader.required(ENV_SQL_USERNAME),
            password: reader.optional(ENV_SQL_PASSWORD).map(SecretString::from),
            host: reader.parse_with(ENV_SQL_HOST, DEFAULT_SQL_HOST.to_string(), parse_sql_host),
            port: reader.parse(ENV_SQL_PORT, DEFAULT_SQL_PORT),
            database: reader.required(ENV_SQL_DATABASE),
            table_prefix: reader.string(ENV_SQL_TABLE_PREFIX, DEFAULT_SQL_TABLE_PREFIX),
            engine: reader.parse(engine_key, SqlEngine::default()),
            base_dir: base_dir.to_path_buf(),
        };
        let redis = RedisSettings {
            host: reader.required(ENV_REDIS_HOST),
            password: reader.optional(ENV_REDIS_PASSWORD).map(SecretString::from),
            db: reader.parse(ENV_REDIS_DB, DEFAULT_REDIS_DB),
            port: reader.parse(ENV_REDIS_PORT, DEFAULT_REDIS_PORT),
        };
        let mongodb = MongoSettings {
            host: reader.string(ENV_MONGODB_HOST, ""),
            port: reader.parse_optional(ENV_MONGODB_PORT),
            username: reader.optional(ENV_MONGODB_USERNAME),
            password: reader.optional(ENV_MONGODB_PASSWORD).map(SecretString::from),
            db_name: reader.string(ENV_MONGODB_DB_NAME, ""),
        };
        let mail = MailSettings {
            tls: reader.flag(ENV_SMTP_TLS, false),
            port: reader.parse(ENV_SMTP_PORT, DEFAULT_SMTP_PORT),
            host: reader.string(ENV_SMTP_HOST, ""),
            user: reader.string(ENV_SMTP_USER, ""),
            password: SecretString::from(reader.string(ENV_SMTP_PASSWORD, "")),
            from_email: reader.string(ENV_EMAIL_FROM_EMAIL, ""),
            templates_dir: PathBuf::from(
                reader.string(ENV_EMAIL_TEMPLATES_DIR, DEFAULT_EMAIL_TEMPLATES_DIR),
            ),
        };
        let superusers = SuperuserSettings {
            first: SuperuserSeed {
                username: reader.string(ENV_FIRST_SUPERUSER, DEFAULT_FIRST_SUPERUSER),
                email: reader.string(ENV_FIRST_SUPERUSER_EMAIL, DEFAULT_FIRST_SUPERUSER_EMAIL),
                password: SecretString::from(
                    reader.string(ENV_FIRST_SUPERUSER_PASSWORD, DEFAULT_SUPERUSER_PASSWORD),
                ),
            },
            second: SuperuserSeed {
                username: reader.string(ENV_SECOND_SUPERUSER, DEFAULT_SECOND_SUPERUSER),
                email: reader.string(ENV_SECOND_SUPERUSER_EMAIL, DEFAULT_SECOND_SUPERUSER_EMAIL),
                password: SecretString::from(
                    reader.string(ENV_SECOND_SUPERUSER_PASSWORD, DEFAULT_SUPERUSER_PASSWORD),
                ),
            },
        };
        let jobs = JobSettings {
            job_delta_seconds: reader.parse(ENV_JOB_DELTA, DEFAULT_JOB_DELTA_SECONDS),
            ip_agents: reader.list(ENV_IP_AGENTS, &[]),
            pip_proxy: reader.parse_with(
                ENV_PIP_PROXY,
                default_url(ENV_PIP_PROXY, DEFAULT_PIP_PROXY)?,
                parse_url,
            ),
            default_sniffer: reader.parse(ENV_DEFAULT_SNIFFER, Sniffer::default()),
            sniffer_url: reader.parse_with(
                ENV_SNIFFER_URL,
                default_url(ENV_SNIFFER_URL, DEFAULT_SNIFFER_URL)?,
                parse_url,
            ),
        };

        reader.finish()?;

        Ok(Self {
            app,
            server,
            database,
            redis,
            mongodb,
            mail,
            superusers,
            jobs,
        })
    }
}

fn read_app(reader: &mut FieldReader<'_>, base_dir: &Path) -> ConfigResult<AppSettings> {
    Ok(AppSettings {
        project_name: reader.string(ENV_PROJECT_NAME, DEFAULT_PROJECT_NAME),
        secret_key: SecretString::from(
            reader
                .optional(ENV_SECRET_KEY)
                .unwrap_or_else(generate_secret_key),
        ),
        logging_config_file: reader.existing_file(
            ENV_LOGGING_CONFIG_FILE,
            base_dir.join(DEFAULT_LOGGING_CONFIG_FILE),
        ),
        echo_sql: reader.flag(ENV_ECHO_SQL, false),
        auto_add_perm_label: reader.flag(ENV_AUTO_ADD_PERM_LABEL, false),
        api_domain: reader.parse_with(
            ENV_API_DOMAIN,
            default_url(ENV_API_DOMAIN, DEFAULT_API_DOMAIN)?,
            parse_url,
        ),
        web_domain: reader.parse_with(
            ENV_WEB_DOMAIN,
            default_url(ENV_WEB_DOMAIN, DEFAULT_WEB_DOMAIN)?,
            parse_url,
        ),
        cors_origins: reader.list(ENV_BACKEND_CORS_ORIGINS, DEFAULT_CORS_ORIGINS),
        jwt_algorithm: reader.string(ENV_JWT_ALGORITHM, DEFAULT_JWT_ALGORITHM),
        web_templates_dir: reader
            .optional(ENV_WEB_TEMPLATES_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| base_dir.join(DEFAULT_WEB_TEMPLATES_DIR)),
        database_update_auth: SecretString::from(
            reader.string(ENV_DATABASE_UPDATE_AUTH, DEFAULT_DATABASE_UPDATE_AUTH),
        ),
        notes_path: PathBuf::from(reader.string(ENV_NOTES_PATH, DEFAULT_NOTES_PATH)),
        cache_ttl_seconds: reader.parse(ENV_CACHE_TTL, DEFAULT_CACHE_TTL_SECONDS),
        users_open_registration: reader.flag(ENV_USERS_OPEN_REGISTRATION, false),
        login_with_captcha: reader.flag(ENV_LOGIN_WITH_CAPTCHA, false),
        log_captcha_error: reader.flag(ENV_LOG_CAPTCHA_ERROR, false),
    })
}

fn default_url(field: &'static str, raw: &str) -> ConfigResult<Url> {
    parse_url(raw).map_err(|reason| ConfigError::Validation(vec![FieldError::invalid(field, reason)]))
}

/// 64 hex characters of v4 UUID randomness.
fn generate_secret_key() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}
