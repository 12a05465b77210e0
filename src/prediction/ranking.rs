use crate::prediction::category::{CategoryTable, Rgb};
use crate::waste_classifier::interface::{ClassificationResponse, ClassifyError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingRules {
    pub confidence_threshold: f64,
    pub max_entries: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedPrediction {
    pub category: String,
    pub probability: f64,
    pub color: Rgb,
    pub bin_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub primary: RankedPrediction,
    /// Descending, at least the primary, at most `max_entries`.
    pub confident: Vec<RankedPrediction>,
    /// More categories cleared the threshold than could be shown.
    pub low_confidence: bool,
}

/// Ties keep the order in which the service listed the categories.
pub fn rank(
    response: &ClassificationResponse,
    table: &CategoryTable,
    rules: &RankingRules,
) -> Result<Ranking, ClassifyError> {
    let mut sorted: Vec<_> = response.entries().iter().collect();
    sorted.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    if sorted.is_empty() {
        return Err(ClassifyError::MalformedResponse {
            reason: "the response has no categories".to_string(),
        });
    }

    let to_ranked = |category: &str, probability: f64| {
        let metadata = table.lookup(category);
        RankedPrediction {
            category: category.to_string(),
            probability,
            color: metadata.color,
            bin_label: metadata.bin_label.clone(),
        }
    };

    let mut confident: Vec<RankedPrediction> = sorted
        .iter()
        .filter(|entry| entry.probability >= rules.confidence_threshold)
        .map(|entry| to_ranked(entry.category.as_str(), entry.probability))
        .collect();

    if confident.is_empty() {
        return Err(ClassifyError::NoConfidentResult);
    }

    let max_entries = rules.max_entries.max(1);
    let low_confidence = confident.len() > max_entries;
    confident.truncate(max_entries);

    let primary = to_ranked(sorted[0].category.as_str(), sorted[0].probability);

    Ok(Ranking {
        primary,
        confident,
        low_confidence,
    })
}
