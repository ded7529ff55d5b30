use pomodoro::app::App;
use pomodoro::config::Cli;
use pomodoro::{error, logging, plain, Result};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", error::user_friendly_message(&e));
            std::process::exit(2);
        }
    };

    // The timer works without a log file
    match logging::log_file_path() {
        Ok(path) => {
            if let Err(e) = logging::init_file_logging(&path, &config.log_level) {
                eprintln!("{}", error::user_friendly_message(&e));
            }
        }
        Err(e) => eprintln!("{}", error::user_friendly_message(&e)),
    }

    // the logger starts after config loading
    if let Ok(path) = cli.config_path() {
        if path.exists() {
            info!("Loaded configuration from {}", path.display());
        } else {
            info!("No config file at {}, using defaults", path.display());
        }
    }

    info!(
        "Starting pomodoro: focus={}min break={}min tick={}ms",
        config.focus_minutes, config.break_minutes, config.tick_millis
    );

    if cli.plain {
        return plain::run(&config, cli.cycles).await;
    }

    let mut app = App::new(&config)?;
    app.init()?;

    if let Err(e) = app.run().await {
        let _ = app.restore();
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }

    info!("Application finished");
    Ok(())
}
