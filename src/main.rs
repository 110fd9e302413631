use std::str::FromStr;

use tracing::Level;

use cinedex::app;
use cinedex::config::Config;

#[dotenvy::load(path = "./.env", required = false)]
#[tokio::main]
async fn main() {
    let config = match Config::init() {
        Ok(c) => c,
        Err(e) => {
            init_logging(&Config::default());
            tracing::error!("Failed to initialize configuration: {e}");
            std::process::exit(e.exit_code());
        }
    };
    init_logging(&config);

    let outcome = match app::run(&config).await {
        Ok(o) => o,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(e.exit_code());
        }
    };

    let exit_code = outcome.exit_code();
    match app::render(&outcome.into_body(), config.output.pretty) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            tracing::error!("Failed to render output: {e}");
            std::process::exit(e.exit_code());
        }
    }
    std::process::exit(exit_code);
}

fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::from_str(&config.logs.level).unwrap_or(Level::INFO))
        .init();
}
