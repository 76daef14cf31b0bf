use actix_cors::Cors;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use hr_portal::{
    config::Config,
    db::init_db,
    docs::ApiDoc,
    model::notification::NotificationStore,
    routes::{self, RateLimiters},
    utils::email_registry,
};
use tracing::{Level, error, info};
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let level: Level = config
        .log_level
        .parse()
        .with_context(|| format!("LOG_LEVEL {:?} is not a valid level", config.log_level))?;

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(addr = %config.server_addr, "Server starting...");

    let pool = init_db(&config.database_url, config.db_max_connections)
        .await
        .context("failed to connect to the database")?;

    let pool_for_warmup = pool.clone();

    actix_web::rt::spawn(async move {
        // ids cached for the last 30 days of logins, 250 rows per batch
        if let Err(e) = email_registry::warmup(&pool_for_warmup, 30, 250).await {
            error!(error = %e, "Failed to warm up email registry");
        }
    });

    let limiters = RateLimiters::from_config(&config)?;
    let notifications = Data::new(NotificationStore::default());
    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .wrap(Cors::permissive())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(pool.clone()))
            .app_data(Data::new(config.clone()))
            .app_data(notifications.clone())
            .configure(|cfg| routes::configure(cfg, limiters.clone()))
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
