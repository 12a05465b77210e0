use crate::config::Config;
use crate::library::logger::{impl_console::LoggerConsole, interface::Logger};
use crate::upload::{test_images, UploadedImage};
use crate::waste_app::main::WasteApp;
use crate::waste_classifier::impl_fake::WasteClassifierFake;
use crate::waste_classifier::interface::{ClassificationResponse, ClassifyError, WasteClassifier};
use std::sync::Arc;

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub waste_classifier: Arc<dyn WasteClassifier + Send + Sync>,
    pub app: WasteApp,
}

impl Fixture {
    pub fn new(result: Result<ClassificationResponse, ClassifyError>) -> Self {
        let config = Config::default();
        let logger: Arc<dyn Logger + Send + Sync> =
            Arc::new(LoggerConsole::new(config.logger_timezone));
        let waste_classifier: Arc<dyn WasteClassifier + Send + Sync> =
            Arc::new(WasteClassifierFake::scripted(logger.clone(), result));
        let app = WasteApp::new(config.clone(), logger.clone(), waste_classifier.clone());

        Self {
            config,
            logger,
            waste_classifier,
            app,
        }
    }
}

pub fn image(name: &str) -> UploadedImage {
    UploadedImage::from_bytes(name, test_images::png()).unwrap()
}

pub fn response(entries: &[(&str, f64)]) -> ClassificationResponse {
    entries.iter().map(|(c, p)| (*c, *p)).collect()
}
