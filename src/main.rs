use fittrack_rs::config::Config;
use fittrack_rs::error::AppError;
use fittrack_rs::pipeline::dispatch;
use fittrack_rs::routes;
use fittrack_rs::samples::SAMPLE_PACKAGES;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Logs go to stderr, summaries to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fittrack_rs=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    for (workout_type, data) in SAMPLE_PACKAGES {
        let workout = dispatch::read_package(workout_type, data)?;
        let summary = workout.show_training_info()?;
        println!("{}", summary.message());
    }

    if !config.serve {
        return Ok(());
    }

    let app = routes::app(&config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("FitTrack-RS listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Summarize: POST http://{}/api/workout", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))
}
