//! Customer order history shown on the dashboard "Orderan Saya" tab.
//!
//! DESIGN
//! ======
//! `OrdersState` is provided through context by the app shell, seeded with
//! the built-in order history. The tab only filters and renders it.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use crate::state::select::{OptionValue, SelectOption};

/// Filter value meaning "every status".
pub const ALL_STATUSES: &str = "semua";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [Self::Pending, Self::Processing, Self::Shipped, Self::Completed, Self::Cancelled];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Menunggu Pembayaran",
            Self::Processing => "Diproses",
            Self::Shipped => "Dikirim",
            Self::Completed => "Selesai",
            Self::Cancelled => "Dibatalkan",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    /// ISO date the order was placed.
    pub placed_on: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub shipping: u64,
}

impl Order {
    pub fn subtotal(&self) -> u64 {
        self.items.iter().map(|i| i.price * u64::from(i.quantity)).sum()
    }

    pub fn total(&self) -> u64 {
        self.subtotal() + self.shipping
    }
}

/// Orders visible to the signed-in customer.
#[derive(Clone, Debug, Default)]
pub struct OrdersState {
    pub items: Vec<Order>,
}

impl OrdersState {
    /// State holding the built-in order history.
    pub fn seeded() -> Self {
        Self { items: demo_orders() }
    }
}

type DemoOrder = (&'static str, &'static str, OrderStatus, &'static [(&'static str, u32, u64)], u64);

const DEMO_ORDERS: &[DemoOrder] = &[
    ("YC-2025-0012", "2025-01-18", OrderStatus::Completed, &[("Bolu Pandan - Satu loyang", 1, 120_000)], 15_000),
    (
        "YC-2025-0027",
        "2025-02-09",
        OrderStatus::Cancelled,
        &[("Red Velvet - Diameter 16 cm", 1, 150_000)],
        15_000,
    ),
    (
        "YC-2025-0041",
        "2025-03-02",
        OrderStatus::Shipped,
        &[("Nastar - Toples 500 gr", 2, 140_000), ("Kue Lumpur - Isi 12", 1, 85_000)],
        20_000,
    ),
    (
        "YC-2025-0048",
        "2025-03-11",
        OrderStatus::Processing,
        &[("Black Forest - Diameter 20 cm", 1, 210_000)],
        15_000,
    ),
    ("YC-2025-0053", "2025-03-14", OrderStatus::Pending, &[("Brownies Kukus - Satu loyang", 2, 120_000)], 15_000),
];

/// Built-in order history, in placement order.
pub fn demo_orders() -> Vec<Order> {
    DEMO_ORDERS
        .iter()
        .map(|&(id, placed_on, status, items, shipping)| Order {
            id: id.to_owned(),
            placed_on: placed_on.to_owned(),
            status,
            items: items
                .iter()
                .map(|&(name, quantity, price)| OrderItem { name: name.to_owned(), quantity, price })
                .collect(),
            shipping,
        })
        .collect()
}

/// Options for the status filter, "all" first.
pub fn status_filter_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ALL_STATUSES, "Semua Status"))
        .chain(OrderStatus::ALL.into_iter().map(|s| SelectOption::new(s.slug(), s.label())))
        .collect()
}

/// Orders matching the filter value, newest first. Unknown filter values
/// match nothing.
pub fn filter_orders<'a>(orders: &'a [Order], filter: &OptionValue) -> Vec<&'a Order> {
    let wanted = match filter {
        OptionValue::Text(slug) if slug == ALL_STATUSES => None,
        OptionValue::Text(slug) => match OrderStatus::from_slug(slug) {
            Some(status) => Some(status),
            None => return Vec::new(),
        },
        OptionValue::Number(_) => return Vec::new(),
    };
    let mut matched: Vec<&Order> = orders
        .iter()
        .filter(|o| wanted.is_none_or(|status| o.status == status))
        .collect();
    matched.sort_by(|a, b| b.placed_on.cmp(&a.placed_on));
    matched
}
