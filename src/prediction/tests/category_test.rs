use crate::prediction::category::{CategoryMetadata, CategoryTable, Rgb};

#[test]
fn test_known_category_has_its_own_bin() {
    let table = CategoryTable::default();

    let metadata = table.lookup("cardboard");

    assert_eq!(metadata.color, Rgb::BLUE);
    assert_eq!(metadata.bin_label, "Blue bin (paper & cardboard)");
}

#[test]
fn test_lookup_ignores_case() {
    let table = CategoryTable::default();

    assert_eq!(table.lookup("Glass_Green"), table.lookup("glass_green"));
}

#[test]
fn test_unknown_category_uses_fallback() {
    let table = CategoryTable::default();

    let metadata = table.lookup("spaceship");

    assert_eq!(metadata, table.fallback());
    assert_eq!(metadata.color, Rgb::RED);
    assert_eq!(metadata.bin_label, "General trash");
}

#[test]
fn test_lookup_is_stable() {
    let table = CategoryTable::default();

    assert_eq!(table.lookup("battery"), table.lookup("battery"));
    assert_eq!(table.lookup("unknown"), table.lookup("unknown"));
}

#[test]
fn test_alternate_vocabulary() {
    let table = CategoryTable::new(CategoryMetadata::new(Rgb::BLACK, "Ask staff"))
        .with_category("compost", Rgb::GREEN, "Green caddy");

    assert_eq!(table.lookup("compost").bin_label, "Green caddy");
    assert_eq!(table.lookup("paper").bin_label, "Ask staff");
}
