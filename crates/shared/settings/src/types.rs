//! Value types for typed settings fields.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::Serialize;
use url::{Host, Url};

use crate::constants::DEFAULT_SQL_ENGINE;

/// Relational database engine selector, used verbatim as the URL scheme.
///
/// Anything after a `+` names a driver (`mysql+pymysql`); the family is
/// decided by the part before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SqlEngine(String);

/// Engine families with distinct connection-string handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineFamily {
    /// File-based; no server connection
    Sqlite,
    Postgres,
    Mysql,
    Other,
}

impl SqlEngine {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Engine name without the driver suffix.
    pub fn dialect(&self) -> &str {
        self.0.split('+').next().unwrap_or_default()
    }

    pub fn family(&self) -> EngineFamily {
        if self.dialect() == "sqlite" {
            EngineFamily::Sqlite
        } else if self.0.contains("postgres") {
            EngineFamily::Postgres
        } else if self.0.contains("mysql") {
            EngineFamily::Mysql
        } else {
            EngineFamily::Other
        }
    }

    pub fn is_file_based(&self) -> bool {
        self.family() == EngineFamily::Sqlite
    }
}

impl Default for SqlEngine {
    fn default() -> Self {
        Self(DEFAULT_SQL_ENGINE.to_string())
    }
}

impl FromStr for SqlEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if starts_alpha && valid_rest {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(format!("'{}' is not a valid engine name", s))
        }
    }
}

impl fmt::Display for SqlEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Page-sniffing backend used by the scraping jobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sniffer {
    #[default]
    Selenium,
    HipySniffer,
    Playwright,
}

impl FromStr for Sniffer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "selenium" => Ok(Sniffer::Selenium),
            "hipy-sniffer" => Ok(Sniffer::HipySniffer),
            "playwright" => Ok(Sniffer::Playwright),
            _ => Err(format!(
                "'{}' is not one of selenium, hipy-sniffer, playwright",
                s
            )),
        }
    }
}

impl fmt::Display for Sniffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sniffer::Selenium => write!(f, "selenium"),
            Sniffer::HipySniffer => write!(f, "hipy-sniffer"),
            Sniffer::Playwright => write!(f, "playwright"),
        }
    }
}

/// Validate a database host given as an IP address, an http(s) URL, or a
/// host name. Returns the host in connection-string form (IPv6 bracketed).
pub fn parse_sql_host(raw: &str) -> Result<String, String> {
    if let Ok(ip) = raw.parse::<IpAddr>() {
        let host: Host<String> = match ip {
            IpAddr::V4(v4) => Host::Ipv4(v4),
            IpAddr::V6(v6) => Host::Ipv6(v6),
        };
        return Ok(host.to_string());
    }

    if raw.contains("://") {
        let url = Url::parse(raw).map_err(|e| format!("invalid URL: {}", e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("URL scheme '{}' is not http or https", url.scheme()));
        }
        return url
            .host()
            .map(|host| host.to_string())
            .ok_or_else(|| "URL has no host".to_string());
    }

    Host::parse(raw)
        .map(|host| host.to_string())
        .map_err(|e| format!("invalid host: {}", e))
}

/// Validate an absolute URL.
pub fn parse_url(raw: &str) -> Result<Url, String> {
    Url::parse(raw).map_err(|e| format!("invalid URL: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_families() {
        let family = |s: &str| s.parse::<SqlEngine>().unwrap().family();

        assert_eq!(family("sqlite"), EngineFamily::Sqlite);
        assert_eq!(family("sqlite+aiosqlite"), EngineFamily::Sqlite);
        assert_eq!(family("postgresql"), EngineFamily::Postgres);
        assert_eq!(family("postgresql+psycopg2"), EngineFamily::Postgres);
        assert_eq!(family("postgres"), EngineFamily::Postgres);
        assert_eq!(family("mysql"), EngineFamily::Mysql);
        assert_eq!(family("mysql+pymysql"), EngineFamily::Mysql);
        assert_eq!(family("oracle+cx_oracle"), EngineFamily::Other);
    }

    #[test]
    fn test_engine_names_are_validated() {
        assert!("".parse::<SqlEngine>().is_err());
        assert!("1sql".parse::<SqlEngine>().is_err());
        assert!("my sql".parse::<SqlEngine>().is_err());
        assert_eq!("MySQL".parse::<SqlEngine>().unwrap().as_str(), "mysql");
    }

    #[test]
    fn test_sniffer_parse() {
        assert_eq!("selenium".parse::<Sniffer>(), Ok(Sniffer::Selenium));
        assert_eq!("hipy-sniffer".parse::<Sniffer>(), Ok(Sniffer::HipySniffer));
        assert_eq!("Playwright".parse::<Sniffer>(), Ok(Sniffer::Playwright));
        assert!("puppeteer".parse::<Sniffer>().is_err());
        assert_eq!(Sniffer::HipySniffer.to_string(), "hipy-sniffer");
    }

    #[test]
    fn test_sql_host_forms() {
        assert_eq!(parse_sql_host("127.0.0.1").unwrap(), "127.0.0.1");
        assert_eq!(parse_sql_host("::1").unwrap(), "[::1]");
        assert_eq!(parse_sql_host("http://db.internal:8080").unwrap(), "db.internal");
        assert_eq!(parse_sql_host("mysql-primary").unwrap(), "mysql-primary");
    }

    #[test]
    fn test_sql_host_rejects_garbage() {
        assert!(parse_sql_host("bad host").is_err());
        assert!(parse_sql_host("ftp://db.internal").is_err());
        assert!(parse_sql_host("").is_err());
    }
}
