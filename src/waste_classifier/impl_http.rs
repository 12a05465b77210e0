use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::upload::UploadedImage;
use crate::waste_classifier::interface::{ClassificationResponse, ClassifyError, WasteClassifier};
use crate::waste_classifier::response::parse_response;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::sync::Arc;

const IMAGE_FIELD: &str = "img";

pub struct WasteClassifierHttp {
    client: Client,
    endpoint: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl WasteClassifierHttp {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self::with_client(client, config.endpoint.clone(), logger))
    }

    pub fn with_client(
        client: Client,
        endpoint: String,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            client,
            endpoint,
            logger: logger.with_namespace("waste_classifier").with_namespace("http"),
        }
    }

    fn send(&self, image: &UploadedImage) -> Result<(u16, String), ClassifyError> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.name().to_string())
            .mime_str(image.mime_type())
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        Ok((status, body))
    }
}

impl WasteClassifier for WasteClassifierHttp {
    fn classify(&self, image: &UploadedImage) -> Result<ClassificationResponse, ClassifyError> {
        let _ = self.logger.info(&format!(
            "POST {} ({}, {} bytes)",
            self.endpoint,
            image.name(),
            image.bytes().len()
        ));

        let result = self
            .send(image)
            .and_then(|(status, body)| {
                let _ = self.logger.info(&format!("Reply status {}", status));
                parse_response(status, &body)
            });

        match &result {
            Ok(response) => {
                let _ = self
                    .logger
                    .info(&format!("Received {} categories", response.entries().len()));
            }
            Err(ClassifyError::MalformedResponse { reason }) => {
                let _ = self.logger.warn(&format!("Malformed response: {}", reason));
            }
            Err(e) => {
                let _ = self.logger.error(&e.to_string());
            }
        }

        result
    }
}
