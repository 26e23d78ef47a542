use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "sportdir.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_ADMIN_TOKEN: &str = "SPORTDIR_ADMIN_TOKEN";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_with(env::var(ENV_NAME_DB_URL).ok(), env::var(ENV_NAME_ADMIN_TOKEN).ok());
        Ok(cfg)
    }

    // Values from the environment take precedence over the file.
    fn override_with(&mut self, db_url: Option<String>, admin_token: Option<String>) {
        if let Some(db_url) = db_url {
            self.db.conn_sqlite = db_url;
        }
        if let Some(admin_token) = admin_token {
            self.webserver.admin_token = non_blank(admin_token);
        }
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
    pub connection_timeout: Duration,
    pub busy_timeout: Duration,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub admin_token: Option<String>,
}

fn non_blank(s: String) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, webserver } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
            connection_timeout,
            busy_timeout,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
            connection_timeout,
            busy_timeout,
        };

        let raw::WebServer { cors, admin_token } = webserver.unwrap_or_default();
        let webserver = WebServer {
            enable_cors: cors,
            admin_token: admin_token.and_then(non_blank),
        };

        Ok(Self { db, webserver })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn reject_empty_pool() {
        let raw_config: raw::Config = toml::from_str(
            r#"
            [db]
            connection-sqlite = "sportdir.db"
            connection-pool-size = 0
            connection-timeout = "5s"
            busy-timeout = "5s"
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw_config).is_err());
    }

    #[test]
    fn ignore_blank_admin_token() {
        let raw_config: raw::Config = toml::from_str(
            r#"
            [webserver]
            cors = false
            admin-token = "  "
            "#,
        )
        .unwrap();
        let cfg = Config::try_from(raw_config).unwrap();
        assert!(cfg.webserver.admin_token.is_none());
        assert_eq!("sportdir.db", cfg.db.conn_sqlite);
    }

    #[test]
    fn override_with_environment() {
        let mut cfg = Config::try_from(raw::Config::default()).unwrap();
        cfg.override_with(Some("other.db".into()), Some(" token ".into()));
        assert_eq!("other.db", cfg.db.conn_sqlite);
        assert_eq!(Some("token"), cfg.webserver.admin_token.as_deref());
        cfg.override_with(None, None);
        assert_eq!("other.db", cfg.db.conn_sqlite);
        assert_eq!(Some("token"), cfg.webserver.admin_token.as_deref());
    }
}
