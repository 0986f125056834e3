use miette::IntoDiagnostic;
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordbook::menu::render;
use wordbook::{config, Dictionary, Session};

fn main() -> miette::Result<()> {
    // Set up logging on stderr so it stays out of the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordbook=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting dictionary application");

    let config = config::load_config();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    render::write_banner(&mut out).into_diagnostic()?;

    // A missing or empty file still leaves a usable, empty session
    let loaded = Dictionary::open(&config.dictionary_path);
    render::write_load_status(&mut out, &loaded).into_diagnostic()?;
    let dictionary = loaded.unwrap_or_default();

    let stdin = io::stdin();
    let mut session = Session::new(&dictionary, stdin.lock(), out, rand::thread_rng());
    session.run()?;

    info!("Session finished");

    Ok(())
}
