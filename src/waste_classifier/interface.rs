use crate::upload::UploadedImage;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProbability {
    pub category: String,
    pub probability: f64,
}

/// Category probabilities as returned by the service, in the order they were sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassificationResponse {
    entries: Vec<CategoryProbability>,
}

impl ClassificationResponse {
    pub fn new(entries: Vec<CategoryProbability>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryProbability] {
        &self.entries
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ClassificationResponse {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(category, probability)| CategoryProbability {
                    category: category.into(),
                    probability,
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Error {status}: {body}")]
    ClassificationRequestFailed { status: u16, body: String },
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("The classification service sent a response that could not be read")]
    MalformedResponse { reason: String },
    #[error("No valid classification results")]
    NoConfidentResult,
}

pub trait WasteClassifier {
    fn classify(&self, image: &UploadedImage) -> Result<ClassificationResponse, ClassifyError>;
}
