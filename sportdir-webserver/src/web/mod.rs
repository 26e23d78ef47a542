use rocket::{config::Config as RocketCfg, Rocket, Route};

use crate::core::usecases::CredentialsGenerator;

pub mod api;
mod guards;
mod sqlite;


#[derive(Debug, Clone, Default)]
pub struct Cfg {
    /// Bearer token of administrators, moderation
    /// is disabled if missing.
    pub admin_token: Option<String>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    credentials: Box<dyn CredentialsGenerator + Send + Sync>,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    if cfg.admin_token.is_none() {
        warn!("No admin token configured, moderation is disabled");
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(guards::CredentialsSource(credentials))
        .manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    credentials: Box<dyn CredentialsGenerator + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db, credentials);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                error!("Invalid CORS options: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
