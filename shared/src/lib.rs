use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;

pub mod fake;
pub mod generate;
pub mod ids;

pub use generate::{DataGenerator, Purchase, ReferenceData};

pub const NUM_STORES: usize = 10;
pub const NUM_PRODUCTS: usize = 75;
pub const NUM_CUSTOMERS: usize = 200;
pub const NUM_TRANSACTIONS: usize = 10_000;
pub const SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub store_type: StoreType,
    pub city: String,
    pub region: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreType {
    Hyper,
    Super,
    Express,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: ProductCategory,
    pub brand: String,
    pub ean: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    Alimentaire,
    Boissons,
    Hygiene,
    Maison,
    Electronique,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub signup_date: Option<NaiveDate>,
    pub loyalty_card: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub store_id: Uuid,
    pub customer_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Card,
    Check,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionItem {
    pub id: Uuid,
    pub transaction_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: Amount,
    pub is_promo: bool,
    pub promo_discount: Amount,
}

/// Money in whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(i64);

impl StoreType {
    pub const ALL: [StoreType; 3] = [StoreType::Hyper, StoreType::Super, StoreType::Express];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreType::Hyper => "Hyper",
            StoreType::Super => "Super",
            StoreType::Express => "Express",
        }
    }
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::Alimentaire,
        ProductCategory::Boissons,
        ProductCategory::Hygiene,
        ProductCategory::Maison,
        ProductCategory::Electronique,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Alimentaire => "Alimentaire",
            ProductCategory::Boissons => "Boissons",
            ProductCategory::Hygiene => "Hygiene",
            ProductCategory::Maison => "Maison",
            ProductCategory::Electronique => "Electronique",
        }
    }
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Check];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Check => "check",
        }
    }
}

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// `percent` of this amount, rounded half-up to the cent.
    pub fn percent(&self, percent: i64) -> Self {
        let scaled = self.0 * percent;
        Self((scaled + scaled.signum() * 50) / 100)
    }

    pub fn times(&self, quantity: i32) -> Self {
        Self(self.0 * i64::from(quantity))
    }
}

impl std::ops::Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, amount| acc + amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl TransactionItem {
    /// Extended price after the promotional discount.
    pub fn line_total(&self) -> Amount {
        (self.unit_price - self.promo_discount).times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up_to_the_cent() {
        assert_eq!(Amount::from_cents(1000).percent(20), Amount::from_cents(200));
        // 20% of 0.03 is 0.006
        assert_eq!(Amount::from_cents(3).percent(20), Amount::from_cents(1));
        // 20% of 0.02 is 0.004
        assert_eq!(Amount::from_cents(2).percent(20), Amount::from_cents(0));
        assert_eq!(Amount::from_cents(9999).percent(20), Amount::from_cents(2000));
    }

    #[test]
    fn display_formats_two_decimals() {
        assert_eq!(Amount::from_cents(100).to_string(), "1.00");
        assert_eq!(Amount::from_cents(12345).to_string(), "123.45");
        assert_eq!(Amount::from_cents(7).to_string(), "0.07");
        assert_eq!(Amount::from_cents(-250).to_string(), "-2.50");
    }

    #[test]
    fn line_total_applies_discount_before_quantity() {
        let item = TransactionItem {
            id: Uuid::nil(),
            transaction_id: Uuid::nil(),
            product_id: Uuid::nil(),
            quantity: 3,
            unit_price: Amount::from_cents(1050),
            is_promo: true,
            promo_discount: Amount::from_cents(210),
        };
        assert_eq!(item.line_total(), Amount::from_cents(2520));
    }

    #[test]
    fn enum_labels_match_stored_values() {
        assert_eq!(StoreType::Express.as_str(), "Express");
        assert_eq!(ProductCategory::Hygiene.as_str(), "Hygiene");
        assert_eq!(PaymentMethod::Check.as_str(), "check");
    }
}
