use axum::extract::DefaultBodyLimit;
use blog_comments::{
    config::Config,
    infrastructure::{
        database::pool::create_pool, repositories::sqlx_comment_repository::SqlxCommentRepository,
        security::profanity_filter::ProfanityFilter,
    },
    presentation::http::{routes::create_router, state::AppState},
    workers::moderation_worker::{ModerationWorker, build_engine},
};
use http::{HeaderValue, Method, header};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // RUST_LOG wins; otherwise verbose for this crate and tower_http
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new("info,blog_comments=debug,tower_http=debug")
        })
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let db = create_pool(&config.database_url, config.database_max_connections).await?;
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(config.ignore_missing_migrations);
    migrator.run(&db).await?;

    let repository = Arc::new(SqlxCommentRepository::new(db));

    let state = AppState {
        config: config.clone(),
        comment_repo: repository.clone(),
        admin_repo: repository.clone(),
        profanity: Arc::new(ProfanityFilter::default()),
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker_handle = if config.enable_moderation_worker {
        match build_engine(&config, repository.clone())? {
            Some(engine) => {
                let worker =
                    ModerationWorker::new(Arc::new(engine), config.moderation_interval_seconds);
                Some(tokio::spawn(async move { worker.start(shutdown_rx).await }))
            }
            None => {
                tracing::warn!("GEMINI_API_KEY not set; comments will stay unverified");
                None
            }
        }
    } else {
        tracing::info!("moderation worker disabled");
        None
    };

    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let allowed_headers = [header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT];
    let cors = if config.is_production() {
        let origins = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(methods)
            .allow_headers(allowed_headers)
            .allow_credentials(true)
            .max_age(Duration::from_secs(3600))
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(allowed_headers)
            .max_age(Duration::from_secs(3600))
    };

    let app = create_router(state)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("comments api listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Let an in-flight moderation run finish before exiting.
    let _ = shutdown_tx.send(true);
    if let Some(handle) = worker_handle {
        tracing::info!("waiting for moderation worker to stop");
        if let Err(e) = handle.await {
            tracing::error!("moderation worker task failed: {}", e);
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
