//! Built-in storefront catalog: products, sizes, and testimonials.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page sections render from this static data. Prices are whole
//! Rupiah.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::state::select::{OptionValue, SelectOption};

/// Number of products shown in the home page "latest" grid.
pub const LATEST_LIMIT: usize = 8;

/// Highest testimonial rating.
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductSize {
    pub id: u32,
    pub label: &'static str,
    pub price: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    /// ISO date (`YYYY-MM-DD`) the product was listed.
    pub added_on: &'static str,
    pub sizes: &'static [ProductSize],
}

impl Product {
    /// Size options for the size selector, in listing order.
    pub fn size_options(&self) -> Vec<SelectOption> {
        self.sizes.iter().map(|s| SelectOption::new(s.id, s.label)).collect()
    }

    /// Size preselected on the product card.
    pub fn default_size(&self) -> Option<OptionValue> {
        self.sizes.first().map(|s| OptionValue::from(s.id))
    }

    /// Price of the chosen size, or the cheapest size when nothing matches.
    pub fn price_for(&self, size: Option<&OptionValue>) -> Option<u64> {
        self.sizes
            .iter()
            .find(|s| size.is_some_and(|v| *v == OptionValue::from(s.id)))
            .map(|s| s.price)
            .or_else(|| self.starting_price())
    }

    pub fn starting_price(&self) -> Option<u64> {
        self.sizes.iter().map(|s| s.price).min()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub city: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

const ROUND_SIZES: &[ProductSize] = &[
    ProductSize { id: 1, label: "Diameter 16 cm", price: 150_000 },
    ProductSize { id: 2, label: "Diameter 20 cm", price: 210_000 },
    ProductSize { id: 3, label: "Diameter 24 cm", price: 285_000 },
];

const LOAF_SIZES: &[ProductSize] = &[
    ProductSize { id: 1, label: "Setengah loyang", price: 65_000 },
    ProductSize { id: 2, label: "Satu loyang", price: 120_000 },
];

const JAR_SIZES: &[ProductSize] = &[
    ProductSize { id: 1, label: "Toples 250 gr", price: 75_000 },
    ProductSize { id: 2, label: "Toples 500 gr", price: 140_000 },
];

const BOX_SIZES: &[ProductSize] = &[
    ProductSize { id: 1, label: "Isi 6", price: 45_000 },
    ProductSize { id: 2, label: "Isi 12", price: 85_000 },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Bolu Pandan",
        category: "Bolu",
        image: "/images/products/bolu-pandan.jpg",
        added_on: "2024-11-02",
        sizes: LOAF_SIZES,
    },
    Product {
        id: 2,
        name: "Black Forest",
        category: "Tart",
        image: "/images/products/black-forest.jpg",
        added_on: "2025-01-18",
        sizes: ROUND_SIZES,
    },
    Product {
        id: 3,
        name: "Lapis Legit",
        category: "Kue Lapis",
        image: "/images/products/lapis-legit.jpg",
        added_on: "2024-12-20",
        sizes: LOAF_SIZES,
    },
    Product {
        id: 4,
        name: "Red Velvet",
        category: "Tart",
        image: "/images/products/red-velvet.jpg",
        added_on: "2025-03-05",
        sizes: ROUND_SIZES,
    },
    Product {
        id: 5,
        name: "Brownies Kukus",
        category: "Brownies",
        image: "/images/products/brownies-kukus.jpg",
        added_on: "2025-02-11",
        sizes: LOAF_SIZES,
    },
    Product {
        id: 6,
        name: "Kue Lumpur",
        category: "Kue Basah",
        image: "/images/products/kue-lumpur.jpg",
        added_on: "2024-10-09",
        sizes: BOX_SIZES,
    },
    Product {
        id: 7,
        name: "Cheesecake Keju",
        category: "Tart",
        image: "/images/products/cheesecake.jpg",
        added_on: "2025-04-22",
        sizes: ROUND_SIZES,
    },
    Product {
        id: 8,
        name: "Tart Buah",
        category: "Tart",
        image: "/images/products/tart-buah.jpg",
        added_on: "2025-03-30",
        sizes: ROUND_SIZES,
    },
    Product {
        id: 9,
        name: "Nastar",
        category: "Kue Kering",
        image: "/images/products/nastar.jpg",
        added_on: "2025-05-14",
        sizes: JAR_SIZES,
    },
    Product {
        id: 10,
        name: "Bika Ambon",
        category: "Kue Basah",
        image: "/images/products/bika-ambon.jpg",
        added_on: "2025-02-11",
        sizes: BOX_SIZES,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Rina Marlina",
        city: "Bandung",
        quote: "Black forest-nya lembut dan tidak terlalu manis. Anak-anak langsung habiskan!",
        rating: 5,
    },
    Testimonial {
        name: "Dimas Pratama",
        city: "Jakarta",
        quote: "Pesan lapis legit untuk acara kantor, semua tamu menanyakan tokonya.",
        rating: 5,
    },
    Testimonial {
        name: "Sari Wulandari",
        city: "Bogor",
        quote: "Pengiriman tepat waktu dan kemasannya rapi. Nastarnya wajib dicoba.",
        rating: 4,
    },
];

/// Newest `limit` products, newest first. Ties keep the higher id first.
pub fn latest_products(products: &[Product], limit: usize) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| b.added_on.cmp(a.added_on).then(b.id.cmp(&a.id)));
    sorted.truncate(limit);
    sorted
}

/// Format whole Rupiah with dot thousands separators: `Rp 150.000`.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

/// Split a rating into (filled, empty) star counts, clamped to `MAX_RATING`.
pub fn star_counts(rating: u8) -> (u8, u8) {
    let filled = rating.min(MAX_RATING);
    (filled, MAX_RATING - filled)
}
