use crate::prediction::category::CategoryTable;
use crate::prediction::ranking::RankingRules;
use chrono::Offset;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub request_timeout: Duration,
    pub confidence_threshold: f64,
    pub max_confidence_entries: usize,
    pub category_table: CategoryTable,
    pub logger_timezone: chrono::FixedOffset,
    pub window_size: [f32; 2],
    pub use_fake_classifier: bool,
}

impl Config {
    pub fn ranking_rules(&self) -> RankingRules {
        RankingRules {
            confidence_threshold: self.confidence_threshold,
            max_entries: self.max_confidence_entries,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://wasteclassification-559456352882.europe-west1.run.app/predict"
                .to_string(),
            request_timeout: Duration::from_secs(30),
            confidence_threshold: 0.15,
            max_confidence_entries: 3,
            category_table: CategoryTable::default(),
            logger_timezone: local_offset(),
            window_size: [720.0, 820.0],
            use_fake_classifier: false,
        }
    }
}

fn local_offset() -> chrono::FixedOffset {
    chrono::Local::now().offset().fix()
}
