use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sportdir_db_sqlite::{self as sqlite, Timeouts};

use crate::config::Config;

/// Registration backend of the sportdir facility directory
#[derive(Parser, Debug)]
#[command(name = "sportdir", version)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }
    let Config { db, webserver } = cfg;

    info!(
        "Connecting to SQLite database '{}' with {} connection(s)",
        db.conn_sqlite, db.conn_pool_size
    );
    let connections = sqlite::Connections::init_with_timeouts(
        &db.conn_sqlite,
        db.conn_pool_size,
        Timeouts {
            connection: db.connection_timeout,
            busy: db.busy_timeout,
        },
    )?;
    sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let web_cfg = sportdir_webserver::Cfg {
        admin_token: webserver.admin_token,
    };
    sportdir_webserver::run(connections, webserver.enable_cors, web_cfg).await;
    Ok(())
}
