//! Browser front end for the lecture library.

use std::net::{IpAddr, Ipv4Addr};

use rocket::{
    data::{Limits, ToByteUnit},
    fairing::AdHoc,
    Build, Rocket,
};
use tracing::{error, info};

pub mod error;
pub mod routes;
pub mod state;
pub mod views;

use state::AppState;

#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub address: IpAddr,
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
        }
    }
}

pub fn build(config: lecturai::Config, options: ServerOptions) -> Rocket<Build> {
    let limit = config.upload_limit.bytes();
    let limits = Limits::default()
        .limit("file", limit)
        .limit("data-form", limit);

    let figment = rocket::Config::figment()
        .merge(("address", options.address))
        .merge(("port", options.port))
        .merge(("limits", limits));

    rocket::custom(figment)
        .manage(config)
        .attach(AdHoc::try_on_ignite("Lecture library", |rocket| async move {
            let Some(config) = rocket.state::<lecturai::Config>().cloned() else {
                error!("lecture library configuration missing");
                return Err(rocket);
            };

            match AppState::open(&config).await {
                Ok(state) => {
                    info!(data_dir = %config.data_dir.display(), "lecture library ready");
                    Ok(rocket.manage(state))
                }
                Err(e) => {
                    error!(error = %e, data_dir = %config.data_dir.display(), "failed to open lecture library");
                    Err(rocket)
                }
            }
        }))
        .mount("/", routes::routes())
}
