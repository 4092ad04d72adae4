use geohunter::{app::App, error::user_friendly_message, APP_NAME, LOG_FILE};
use std::fs::{self, File};

/// Log to a file; the terminal belongs to the UI while the game runs.
/// `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    let Some(dir) = dirs::data_dir().map(|d| d.join(APP_NAME)) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join(LOG_FILE)) else {
        return;
    };

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();
    log::info!("Starting {} {}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let mut app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{}", user_friendly_message(&e));
            std::process::exit(1);
        }
    };

    if let Err(e) = app.init() {
        eprintln!("{}", user_friendly_message(&e));
        std::process::exit(1);
    }

    if let Err(e) = app.run().await {
        eprintln!("{}", user_friendly_message(&e));
        std::process::exit(1);
    }
}
