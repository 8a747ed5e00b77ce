//! Site-wide constants.

pub const BRAND: &str = "Yulita Cakes";

pub const HOME_TITLE: &str = "Yulita Cakes";

pub const DASHBOARD_TITLE: &str = "Yulita Cakes - Dashboard";

pub const NOT_FOUND_TITLE: &str = "Yulita Cakes - Halaman tidak ditemukan";
