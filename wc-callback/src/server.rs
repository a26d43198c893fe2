use actix_web::{
    middleware::Logger,
    web,
    web::{resource, Data},
    App, HttpServer,
};
use std::sync::Arc;

use crate::handlers::{self, LogHandler, MessageHandler};
use crate::middleware::metrics::collect_metrics;
use crate::opts::*;
use crate::util::read_secrets;
use crate::CallbackError;

use wc_core::client::MsgCrypt;

use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

lazy_static! {
    pub(crate) static ref WORKCHAT_CALLBACKS: IntCounterVec = register_int_counter_vec!(
        "workchat_callbacks",
        "Contains information about callbacks received from the platform.",
        &["path", "kind", "status"]
    )
    .expect("could not initialize metrics");
}

/// Maximum size of an inbound message body (64 KiB).
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Registers the callback resource: `GET` answers the handshake, `POST` receives messages.
pub(crate) fn callback(
    path: String,
    crypt: Data<MsgCrypt>,
    handler: Data<dyn MessageHandler>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(
            resource(path)
                .wrap_fn(collect_metrics)
                .app_data(crypt)
                .app_data(handler)
                .app_data(web::JsonConfig::default().limit(MAX_BODY_SIZE))
                .route(web::get().to(handlers::verify))
                .route(web::post().to(handlers::message)),
        );
    }
}

#[actix_rt::main]
pub async fn exec(server_opts: ServerOpts) -> Result<(), CallbackError> {
    let ServerOpts {
        host,
        port,
        path,
        config,
    } = server_opts;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let (secrets, crypt) = read_secrets(&config)?;
    log::info!(
        "loaded secrets for corp {} from {config}, receiver {}",
        secrets.corp_id,
        crypt.receiver_id()
    );

    let crypt = Data::new(crypt);
    let handler: Data<dyn MessageHandler> =
        Data::from(Arc::new(LogHandler) as Arc<dyn MessageHandler>);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Logger::new("request=%{PATH}xi, status=%s, response_time=%D ms")
                    .custom_request_replace("PATH", |req| {
                        req.match_pattern().unwrap_or("-".to_string())
                    }),
            )
            .service(resource("/metrics").route(web::get().to(handlers::metrics)))
            .service(resource("/health").route(web::get().to(handlers::health)))
            .configure(callback(path.clone(), crypt.clone(), handler.clone()))
    })
    .bind(format!("{host}:{port}"))?
    .shutdown_timeout(1)
    .run()
    .await?;

    Ok(())
}
