use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLUE: Rgb = Rgb(30, 100, 210);
    pub const WHITE: Rgb = Rgb(245, 245, 245);
    pub const YELLOW: Rgb = Rgb(240, 200, 30);
    pub const BLACK: Rgb = Rgb(25, 25, 25);
    pub const GREEN: Rgb = Rgb(40, 150, 70);
    pub const BROWN: Rgb = Rgb(130, 85, 40);
    pub const ORANGE: Rgb = Rgb(240, 130, 30);
    pub const PURPLE: Rgb = Rgb(130, 70, 170);
    pub const RED: Rgb = Rgb(210, 40, 40);
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMetadata {
    pub color: Rgb,
    pub bin_label: String,
}

impl CategoryMetadata {
    pub fn new(color: Rgb, bin_label: &str) -> Self {
        Self {
            color,
            bin_label: bin_label.to_string(),
        }
    }
}

/// Display color and disposal bin per category. Unknown categories get the fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    entries: HashMap<String, CategoryMetadata>,
    fallback: CategoryMetadata,
}

impl CategoryTable {
    pub fn new(fallback: CategoryMetadata) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    pub fn with_category(mut self, category: &str, color: Rgb, bin_label: &str) -> Self {
        self.entries.insert(
            category.to_lowercase(),
            CategoryMetadata::new(color, bin_label),
        );
        self
    }

    /// Case-insensitive. Never fails.
    pub fn lookup(&self, category: &str) -> &CategoryMetadata {
        self.entries
            .get(&category.to_lowercase())
            .unwrap_or(&self.fallback)
    }

    #[cfg(test)]
    pub fn fallback(&self) -> &CategoryMetadata {
        &self.fallback
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        CategoryTable::new(CategoryMetadata::new(Rgb::RED, "General trash"))
            .with_category("cardboard", Rgb::BLUE, "Blue bin (paper & cardboard)")
            .with_category("paper", Rgb::BLUE, "Blue bin (paper & cardboard)")
            .with_category("glass", Rgb::WHITE, "Bottle bank (glass)")
            .with_category("glass_white", Rgb::WHITE, "Bottle bank (clear glass)")
            .with_category("glass_green", Rgb::GREEN, "Bottle bank (green glass)")
            .with_category("glass_brown", Rgb::BROWN, "Bottle bank (brown glass)")
            .with_category("metal", Rgb::YELLOW, "Yellow bin (packaging)")
            .with_category("plastic", Rgb::YELLOW, "Yellow bin (packaging)")
            .with_category("biological", Rgb::BROWN, "Brown bin (organic waste)")
            .with_category("battery", Rgb::ORANGE, "Battery collection point")
            .with_category("clothes", Rgb::PURPLE, "Textile container")
            .with_category("shoes", Rgb::PURPLE, "Textile container")
            .with_category("trash", Rgb::BLACK, "Black bin (general waste)")
    }
}
