use super::*;

// =============================================================
// latest_products
// =============================================================

#[test]
fn latest_products_orders_newest_first() {
    let latest = latest_products(PRODUCTS, 3);
    let names: Vec<_> = latest.iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Nastar", "Cheesecake Keju", "Tart Buah"]);
}

#[test]
fn latest_products_breaks_date_ties_by_higher_id() {
    let latest = latest_products(PRODUCTS, PRODUCTS.len());
    let brownies = latest.iter().position(|p| p.id == 5).unwrap();
    let bika = latest.iter().position(|p| p.id == 10).unwrap();
    assert!(bika < brownies);
}

#[test]
fn latest_products_respects_limit() {
    assert_eq!(latest_products(PRODUCTS, LATEST_LIMIT).len(), LATEST_LIMIT);
    assert_eq!(latest_products(PRODUCTS, 100).len(), PRODUCTS.len());
    assert!(latest_products(&[], LATEST_LIMIT).is_empty());
}

#[test]
fn catalog_product_ids_are_unique() {
    for (i, a) in PRODUCTS.iter().enumerate() {
        for b in &PRODUCTS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

// =============================================================
// Sizes and prices
// =============================================================

#[test]
fn size_options_follow_listing_order() {
    let product = PRODUCTS[1];
    let labels: Vec<_> = product.size_options().into_iter().map(|o| o.label).collect();
    assert_eq!(labels, vec!["Diameter 16 cm", "Diameter 20 cm", "Diameter 24 cm"]);
}

#[test]
fn default_size_is_first_listed() {
    assert_eq!(PRODUCTS[0].default_size(), Some(OptionValue::Number(1)));
}

#[test]
fn price_for_uses_chosen_size() {
    let product = PRODUCTS[1];
    assert_eq!(product.price_for(Some(&OptionValue::Number(3))), Some(285_000));
}

#[test]
fn price_for_falls_back_to_starting_price() {
    let product = PRODUCTS[1];
    assert_eq!(product.price_for(None), Some(150_000));
    assert_eq!(product.price_for(Some(&OptionValue::Number(99))), Some(150_000));
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_rupiah_groups_thousands_with_dots() {
    assert_eq!(format_rupiah(0), "Rp 0");
    assert_eq!(format_rupiah(950), "Rp 950");
    assert_eq!(format_rupiah(1_000), "Rp 1.000");
    assert_eq!(format_rupiah(150_000), "Rp 150.000");
    assert_eq!(format_rupiah(1_250_000), "Rp 1.250.000");
}

#[test]
fn star_counts_always_total_five() {
    assert_eq!(star_counts(4), (4, 1));
    assert_eq!(star_counts(0), (0, 5));
    assert_eq!(star_counts(9), (5, 0));
}
