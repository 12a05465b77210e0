use config::Config;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::Arc;
use waste_app::main::WasteApp;
use waste_classifier::impl_fake::WasteClassifierFake;
use waste_classifier::impl_http::WasteClassifierHttp;
use waste_classifier::interface::WasteClassifier;

mod config;
mod library;
mod prediction;
mod upload;
mod waste_app;
mod waste_classifier;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let waste_classifier: Arc<dyn WasteClassifier + Send + Sync> = if config.use_fake_classifier {
        Arc::new(WasteClassifierFake::new(logger.clone()))
    } else {
        Arc::new(WasteClassifierHttp::new(&config, logger.clone())?)
    };

    let app = WasteApp::new(config, logger, waste_classifier);

    app.run()?;

    Ok(())
}
