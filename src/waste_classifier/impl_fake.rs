use crate::library::logger::interface::Logger;
use crate::upload::UploadedImage;
use crate::waste_classifier::interface::{ClassificationResponse, ClassifyError, WasteClassifier};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

const VOCABULARY: [&str; 8] = [
    "battery",
    "biological",
    "cardboard",
    "glass",
    "metal",
    "paper",
    "plastic",
    "trash",
];

pub struct WasteClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    scripted: Option<Result<ClassificationResponse, ClassifyError>>,
    latency: Duration,
}

impl WasteClassifierFake {
    /// Answers with random, normalized probabilities after a short delay.
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("waste_classifier").with_namespace("fake"),
            scripted: None,
            latency: Duration::from_millis(500),
        }
    }

    /// Answers every request with the same result, immediately.
    #[cfg(test)]
    pub fn scripted(
        logger: Arc<dyn Logger + Send + Sync>,
        result: Result<ClassificationResponse, ClassifyError>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("waste_classifier").with_namespace("fake"),
            scripted: Some(result),
            latency: Duration::ZERO,
        }
    }

    fn random_response() -> ClassificationResponse {
        let mut rng = rand::rng();

        let weights: Vec<f64> = VOCABULARY
            .iter()
            .map(|_| rng.random::<f64>().powi(3))
            .collect();
        let total: f64 = weights.iter().sum::<f64>().max(f64::EPSILON);

        VOCABULARY
            .iter()
            .zip(weights)
            .map(|(category, weight)| (*category, weight / total))
            .collect()
    }
}

impl WasteClassifier for WasteClassifierFake {
    fn classify(&self, image: &UploadedImage) -> Result<ClassificationResponse, ClassifyError> {
        let _ = self
            .logger
            .info(&format!("Classifying {} with fake classifier...", image.name()));

        std::thread::sleep(self.latency);

        match &self.scripted {
            Some(result) => result.clone(),
            None => Ok(Self::random_response()),
        }
    }
}
