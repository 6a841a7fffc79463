#[macro_use]
extern crate log;

use std::io;
use std::sync::Arc;

use actix_web::{
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};
use dotenv::dotenv;
use env_logger::Env;

mod config;
mod handlers;
mod routes;
#[cfg(test)]
mod tests;
mod validate;

use crate::config::Config;
use crate::routes::{cors, default_headers, not_found, routes};
use db::{PgStore, Store};

fn startup_error(message: String) -> io::Error {
    error!("{}", message);
    io::Error::new(io::ErrorKind::Other, message)
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    let pool = db::new_pool(&config.database)
        .map_err(|err| startup_error(format!("Could not connect to the database - {}", err)))?;
    let store = PgStore::new(pool);
    store
        .ensure_schema()
        .map_err(|err| startup_error(format!("Could not create tables - {}", err)))?;
    let store: Arc<dyn Store> = Arc::new(store);

    info!("Listening on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(default_headers())
            .wrap(Logger::default())
            .app_data(Data::from(store.clone()))
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
