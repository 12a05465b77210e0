use crate::prediction::category::{CategoryTable, Rgb};
use crate::prediction::ranking::{rank, RankingRules};
use crate::waste_classifier::interface::{ClassificationResponse, ClassifyError};

#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryLine {
    pub category: String,
    pub bin_label: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBar {
    pub category: String,
    pub percent: i64,
    /// Bar length in `0.0..=1.0`.
    pub fill: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub category: String,
    pub percent: i64,
}

/// Everything the UI shows for one classified image.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub primary: PrimaryLine,
    pub bars: Vec<ConfidenceBar>,
    pub breakdown: Vec<BreakdownRow>,
    pub low_confidence: bool,
}

impl DisplayModel {
    pub fn build(
        response: &ClassificationResponse,
        table: &CategoryTable,
        rules: &RankingRules,
    ) -> Result<Self, ClassifyError> {
        let ranking = rank(response, table, rules)?;

        let primary = PrimaryLine {
            category: capitalize(&ranking.primary.category),
            bin_label: ranking.primary.bin_label.clone(),
            color: ranking.primary.color,
        };

        let bars = ranking
            .confident
            .iter()
            .map(|prediction| ConfidenceBar {
                category: capitalize(&prediction.category),
                percent: to_percent(prediction.probability),
                fill: prediction.probability.clamp(0.0, 1.0) as f32,
                color: prediction.color,
            })
            .collect();

        let breakdown = response
            .entries()
            .iter()
            .map(|entry| BreakdownRow {
                category: capitalize(&entry.category),
                percent: to_percent(entry.probability),
            })
            .collect();

        Ok(Self {
            primary,
            bars,
            breakdown,
            low_confidence: ranking.low_confidence,
        })
    }
}

/// Halves go to the even neighbour, so 12.5 shows as 12.
pub fn to_percent(probability: f64) -> i64 {
    (probability * 100.0).round_ties_even() as i64
}

/// First letter upper case, the rest lower case.
pub fn capitalize(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
