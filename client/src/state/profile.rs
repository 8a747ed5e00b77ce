//! Address and account forms on the customer dashboard.
//!
//! Validation is local only: saving checks required fields and reports which
//! ones are missing. Nothing is persisted.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::state::select::{OptionValue, SelectOption};

const PROVINCES: &[(&str, &str)] = &[
    ("banten", "Banten"),
    ("dki-jakarta", "DKI Jakarta"),
    ("jawa-barat", "Jawa Barat"),
    ("jawa-tengah", "Jawa Tengah"),
    ("di-yogyakarta", "DI Yogyakarta"),
    ("jawa-timur", "Jawa Timur"),
    ("bali", "Bali"),
];

/// Provinces offered in the shipping address form.
pub fn province_options() -> Vec<SelectOption> {
    PROVINCES.iter().map(|&(value, label)| SelectOption::new(value, label)).collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressForm {
    pub recipient: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub province: Option<OptionValue>,
    pub postal_code: String,
}

impl AddressForm {
    /// Labels of fields that block saving, in form order.
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if self.recipient.trim().is_empty() {
            problems.push("Nama penerima");
        }
        if !is_phone(&self.phone) {
            problems.push("Nomor telepon");
        }
        if self.street.trim().is_empty() {
            problems.push("Alamat");
        }
        if self.city.trim().is_empty() {
            problems.push("Kota");
        }
        if self.province.is_none() {
            problems.push("Provinsi");
        }
        if !is_postal_code(&self.postal_code) {
            problems.push("Kode pos");
        }
        problems
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl AccountForm {
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("Nama");
        }
        if !is_email(&self.email) {
            problems.push("Email");
        }
        if !self.phone.trim().is_empty() && !is_phone(&self.phone) {
            problems.push("Nomor telepon");
        }
        problems
    }
}

/// Result of the last save attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Saved,
    Invalid(Vec<&'static str>),
}

impl FormStatus {
    pub fn from_problems(problems: Vec<&'static str>) -> Self {
        if problems.is_empty() { Self::Saved } else { Self::Invalid(problems) }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Saved => Some("Perubahan disimpan.".to_owned()),
            Self::Invalid(fields) => Some(format!("Periksa kembali: {}.", fields.join(", "))),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

fn is_phone(raw: &str) -> bool {
    let digits: String = raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    let digits = digits.strip_prefix('+').unwrap_or(&digits);
    (9..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_postal_code(raw: &str) -> bool {
    let raw = raw.trim();
    raw.len() == 5 && raw.chars().all(|c| c.is_ascii_digit())
}

fn is_email(raw: &str) -> bool {
    let raw = raw.trim();
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.contains('@') && domain.split('.').count() >= 2 && domain.split('.').all(|p| !p.is_empty())
}
