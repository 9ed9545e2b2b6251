use once_cell::sync::Lazy;
use tracing::subscriber::set_global_default;
use tracing_forest::{ForestLayer, Printer};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

static TRACING: Lazy<()> = Lazy::new(setup_global_subscriber);

// stdout carries the extracted text, so the tree goes to stderr
fn setup_global_subscriber() {
    let env_filter = EnvFilter::from_default_env();
    let subscriber = Registry::default()
        .with(env_filter)
        .with(ForestLayer::from(Printer::new().writer(std::io::stderr)));
    if let Err(e) = set_global_default(subscriber) {
        eprintln!("failed to set global tracing subscriber: {e}");
    }
}

pub fn init_tracing() {
    Lazy::force(&TRACING);
}
