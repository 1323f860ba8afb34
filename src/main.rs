use color_eyre::eyre::{eyre, Result};
use dotenv::dotenv;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use uchionline_client::lessons::LessonWatcher;
use uchionline_client::{ClientConfig, HttpApi, Session};
use uchionline_core::countdown::CountdownState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Initialize tracing for logging
    let log_level = match std::env::var("LOG_LEVEL").as_deref() {
        Ok("trace") => Level::TRACE,
        Ok("debug") => Level::DEBUG,
        Ok("warn") => Level::WARN,
        Ok("error") => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration and session
    let config = ClientConfig::from_env()?;
    let token = std::env::var("API_TOKEN")
        .map_err(|_| eyre!("API_TOKEN environment variable not set"))?;
    let api = HttpApi::new(&config, Session::new(token))?;

    // Watch the next lesson and print the countdown until it starts
    let mut watcher = LessonWatcher::new();
    watcher.load(&api).await?;

    match watcher.countdown().state() {
        CountdownState::NoLesson => {
            info!("No upcoming lessons scheduled");
            return Ok(());
        }
        _ => {
            if let Some(lesson) = watcher.lesson() {
                info!(
                    counterpart = %lesson.counterpart.full_name(),
                    duration_minutes = lesson.duration,
                    "Next lesson found"
                );
            }
        }
    }

    watcher
        .run(&api, |countdown| {
            info!(label = %countdown.label(), link = ?countdown.link(), "Countdown");
        })
        .await;

    info!("Lesson started");
    Ok(())
}
