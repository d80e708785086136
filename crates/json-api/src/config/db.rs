//! Database Config

use std::num::ParseIntError;

use clap::{Args, ValueEnum};
use thiserror::Error;

use recipebook_app::database::{PgConnectOptions, with_statement_logging};

/// Supported database kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DatabaseKind {
    /// `PostgreSQL`
    Postgres,
}

/// Raised when the database settings cannot be turned into connection options.
#[derive(Debug, Error)]
pub enum DatabaseConfigError {
    #[error("invalid DATABASE_URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("{0} must be set when DATABASE_URL is not")]
    Missing(&'static str),

    #[error("invalid port in DB_PROTOCOL \"{protocol}\"")]
    InvalidPort {
        protocol: String,
        #[source]
        source: ParseIntError,
    },
}

/// Database settings.
///
/// Either `DATABASE_URL` or the `DB_*` component variables describe the
/// connection; the URL wins when both are present.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// Database kind
    #[arg(long, env = "DB_KIND", value_enum, default_value_t = DatabaseKind::Postgres)]
    pub db_kind: DatabaseKind,

    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database address as `host`, `host:port` or `tcp(host:port)`
    #[arg(long, env = "DB_PROTOCOL")]
    pub db_protocol: Option<String>,

    /// Database name
    #[arg(long, env = "DB_NAME")]
    pub db_name: Option<String>,

    /// Log every SQL statement at debug level
    #[arg(long, env = "ENABLE_DB_LOG", default_value_t = false)]
    pub enable_db_log: bool,
}

impl DatabaseConfig {
    /// Build connection options from the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is malformed or a required component is missing.
    pub fn connect_options(&self) -> Result<PgConnectOptions, DatabaseConfigError> {
        let options = match &self.database_url {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .map_err(DatabaseConfigError::InvalidUrl)?,
            None => self.options_from_parts()?,
        };

        Ok(with_statement_logging(options, self.enable_db_log))
    }

    fn options_from_parts(&self) -> Result<PgConnectOptions, DatabaseConfigError> {
        let user = self
            .db_user
            .as_deref()
            .ok_or(DatabaseConfigError::Missing("DB_USER"))?;

        let name = self
            .db_name
            .as_deref()
            .ok_or(DatabaseConfigError::Missing("DB_NAME"))?;

        let mut options = PgConnectOptions::new().username(user).database(name);

        if let Some(password) = self.db_password.as_deref() {
            options = options.password(password);
        }

        if let Some(protocol) = self.db_protocol.as_deref() {
            let (host, port) = parse_protocol(protocol)?;

            options = options.host(host);

            if let Some(port) = port {
                options = options.port(port);
            }
        }

        Ok(options)
    }
}

fn parse_protocol(protocol: &str) -> Result<(&str, Option<u16>), DatabaseConfigError> {
    let address = protocol
        .strip_prefix("tcp(")
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(protocol);

    let Some((host, port)) = address.rsplit_once(':') else {
        return Ok((address, None));
    };

    let port = port
        .parse::<u16>()
        .map_err(|source| DatabaseConfigError::InvalidPort {
            protocol: protocol.to_string(),
            source,
        })?;

    Ok((host, Some(port)))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn config() -> DatabaseConfig {
        DatabaseConfig {
            db_kind: DatabaseKind::Postgres,
            database_url: None,
            db_user: Some("chef".to_string()),
            db_password: Some("secret".to_string()),
            db_protocol: Some("tcp(db:5433)".to_string()),
            db_name: Some("recipes".to_string()),
            enable_db_log: false,
        }
    }

    #[test]
    fn components_build_connect_options() -> TestResult {
        let options = config().connect_options()?;

        assert_eq!(options.get_username(), "chef");
        assert_eq!(options.get_database(), Some("recipes"));
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 5433);

        Ok(())
    }

    #[test]
    fn database_url_takes_precedence() -> TestResult {
        let config = DatabaseConfig {
            database_url: Some("postgres://url_user:pw@url-host:6543/url_db".to_string()),
            ..config()
        };

        let options = config.connect_options()?;

        assert_eq!(options.get_username(), "url_user");
        assert_eq!(options.get_host(), "url-host");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("url_db"));

        Ok(())
    }

    #[test]
    fn missing_user_is_reported() {
        let config = DatabaseConfig {
            db_user: None,
            ..config()
        };

        let error = config.connect_options().err().map(|e| e.to_string());

        assert_eq!(
            error.as_deref(),
            Some("DB_USER must be set when DATABASE_URL is not")
        );
    }

    #[test]
    fn protocol_accepts_bare_host() -> TestResult {
        assert_eq!(parse_protocol("localhost")?, ("localhost", None));
        assert_eq!(parse_protocol("db:5432")?, ("db", Some(5432)));
        assert_eq!(parse_protocol("tcp(db:5432)")?, ("db", Some(5432)));

        Ok(())
    }

    #[test]
    fn protocol_rejects_non_numeric_port() {
        assert!(
            matches!(
                parse_protocol("db:abc"),
                Err(DatabaseConfigError::InvalidPort { .. })
            ),
            "expected InvalidPort"
        );
    }
}
