use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};
mod api;
mod app;
mod catalog;
mod cli;
mod config;
mod shutdown;
use crate::app::AppServices;
use crate::cli::{Cli, Command};
use crate::shutdown::ShutdownCoordinator;

fn startup_error(message: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, message)
}

/// Console output plus daily rotating files per level
/// (logs/info.log.2024-12-22, logs/error.log.2024-12-22, ...)
fn init_tracing(log_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let info_file = tracing_appender::rolling::daily(log_dir, "info.log");
    let warn_file = tracing_appender::rolling::daily(log_dir, "warn.log");
    let error_file = tracing_appender::rolling::daily(log_dir, "error.log");
    let debug_file = tracing_appender::rolling::daily(log_dir, "debug.log");

    let info_layer = tracing_subscriber::fmt::layer()
        .with_writer(info_file)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let warn_layer = tracing_subscriber::fmt::layer()
        .with_writer(warn_file)
        .with_ansi(false)
        .with_filter(LevelFilter::WARN);

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(error_file)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let debug_layer = tracing_subscriber::fmt::layer()
        .with_writer(debug_file)
        .with_ansi(false)
        .with_filter(LevelFilter::DEBUG);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    // init() also bridges `log` records from actix middleware
    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(info_layer)
        .with(warn_layer)
        .with(error_layer)
        .with(debug_layer)
        .init();

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> std::io::Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    println!("{}", rendered);
    Ok(())
}

async fn serve(config: config::Config, services: AppServices) -> std::io::Result<()> {
    info!("Starting job-matcher application");
    info!("Configuration loaded successfully:");
    info!("  - Max payload size: {} bytes", config.max_payload_size);
    info!("  - Allowed resume extensions: {:?}", config.allowed_extensions);
    info!("  - Skill extractor: {:?}", config.skill_extractor);
    info!("  - Skill match mode: {:?}", config.skill_match_mode);

    let server = HttpServer::new(move || {
        let services = services.clone();
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| services.configure(cfg))
            .default_service(web::to(api::not_found))
    });

    info!("Server starting on http://{}:{}", config.host, config.port);

    let server = server.bind((config.host.as_str(), config.port))?.run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    ShutdownCoordinator::new(server_handle, server_task)
        .wait_for_shutdown()
        .await
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let mut config = config::Config::from_env().map_err(startup_error)?;
    cli.apply(&mut config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            init_tracing(&config.log_dir)?;
            let services = AppServices::from_config(&config).map_err(|e| {
                error!("Startup failed: {}", e);
                startup_error(e)
            })?;
            serve(config, services).await
        }
        Command::Jobs => {
            let services = AppServices::from_config(&config).map_err(startup_error)?;
            print_json(&services.jobs.list_jobs())
        }
        Command::Match { skills } => {
            let services = AppServices::from_config(&config).map_err(startup_error)?;
            print_json(&services.matcher.match_jobs(&skills))
        }
    }
}
