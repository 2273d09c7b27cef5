use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{
    fake, ids, Amount, Customer, PaymentMethod, Product, ProductCategory, Store, StoreType,
    Transaction, TransactionItem,
};

const SHARED_LOCATIONS: usize = 3;
const SHARED_LOCATION_PROBABILITY: f64 = 0.35;
const LOYALTY_PROBABILITY: f64 = 0.5;
const PROMO_PROBABILITY: f64 = 0.2;
const PROMO_PERCENT: i64 = 20;
const MAX_ITEMS_PER_TRANSACTION: usize = 7;
const MAX_QUANTITY: i32 = 5;
const MIN_UNIT_PRICE: f64 = 1.0;
const MAX_UNIT_PRICE: f64 = 100.0;
const SIGNUP_WINDOW: Months = Months::new(12);
const TRANSACTION_WINDOW: Months = Months::new(3);

/// Stores, products and customers that transactions draw from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub stores: Vec<Store>,
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
}

/// One transaction header with its line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub transaction: Transaction,
    pub items: Vec<TransactionItem>,
}

impl Purchase {
    pub fn total_amount(&self) -> Amount {
        self.items.iter().map(TransactionItem::line_total).sum()
    }
}

/// Produces the retail dataset from an injected RNG.
///
/// Time windows are measured back from `anchor` rather than the wall
/// clock, so a fixed seed and anchor always give the same entities.
pub struct DataGenerator<R = ChaCha8Rng> {
    rng: R,
    anchor: DateTime<Utc>,
    signup_start: NaiveDate,
    signup_days: i64,
    transaction_start: DateTime<Utc>,
    transaction_seconds: i64,
}

impl DataGenerator<ChaCha8Rng> {
    pub fn new(seed: u64, anchor: DateTime<Utc>) -> Result<Self> {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed), anchor)
    }
}

impl<R: Rng> DataGenerator<R> {
    pub fn from_rng(rng: R, anchor: DateTime<Utc>) -> Result<Self> {
        let today = anchor.date_naive();
        let signup_start = today
            .checked_sub_months(SIGNUP_WINDOW)
            .ok_or_else(|| anyhow!("Signup window underflows before {}", today))?;
        let transaction_start = anchor
            .checked_sub_months(TRANSACTION_WINDOW)
            .ok_or_else(|| anyhow!("Transaction window underflows before {}", anchor))?;

        Ok(Self {
            rng,
            anchor,
            signup_start,
            signup_days: (today - signup_start).num_days(),
            transaction_start,
            transaction_seconds: (anchor - transaction_start).num_seconds(),
        })
    }

    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    pub fn reference_data(&mut self, stores: usize, products: usize, customers: usize) -> ReferenceData {
        ReferenceData {
            stores: self.stores(stores),
            products: self.products(products),
            customers: self.customers(customers),
        }
    }

    pub fn stores(&mut self, count: usize) -> Vec<Store> {
        let rng = &mut self.rng;
        let shared_cities: Vec<String> = (0..SHARED_LOCATIONS).map(|_| fake::city(rng)).collect();
        let shared_regions: Vec<String> = (0..SHARED_LOCATIONS).map(|_| fake::state(rng)).collect();

        (0..count)
            .map(|i| {
                let store_type = StoreType::ALL[rng.gen_range(0..StoreType::ALL.len())];
                let (city, region) = if rng.gen::<f64>() < SHARED_LOCATION_PROBABILITY {
                    (
                        shared_cities[rng.gen_range(0..SHARED_LOCATIONS)].clone(),
                        shared_regions[rng.gen_range(0..SHARED_LOCATIONS)].clone(),
                    )
                } else {
                    (fake::city(rng), fake::state(rng))
                };

                Store {
                    id: ids::store_id(i),
                    name: fake::company(rng),
                    store_type,
                    city,
                    region,
                }
            })
            .collect()
    }

    pub fn products(&mut self, count: usize) -> Vec<Product> {
        let rng = &mut self.rng;
        (0..count)
            .map(|i| Product {
                id: ids::product_id(i),
                name: fake::capitalized_word(rng),
                category: ProductCategory::ALL[rng.gen_range(0..ProductCategory::ALL.len())],
                brand: fake::company(rng),
                ean: fake::ean13(rng),
            })
            .collect()
    }

    pub fn customers(&mut self, count: usize) -> Vec<Customer> {
        (0..count)
            .map(|i| {
                let loyalty_card = self.rng.gen_bool(LOYALTY_PROBABILITY);
                let signup_date = if loyalty_card {
                    let offset = self.rng.gen_range(0..=self.signup_days);
                    Some(self.signup_start + Duration::days(offset))
                } else {
                    None
                };

                Customer {
                    id: ids::customer_id(i),
                    signup_date,
                    loyalty_card,
                }
            })
            .collect()
    }

    /// Builds transaction number `index` against the given pools.
    pub fn transaction(&mut self, index: usize, reference: &ReferenceData) -> Result<Purchase> {
        if reference.stores.is_empty() || reference.customers.is_empty() || reference.products.is_empty() {
            return Err(anyhow!(
                "Cannot generate transaction {}: reference data is incomplete ({} stores, {} products, {} customers)",
                index,
                reference.stores.len(),
                reference.products.len(),
                reference.customers.len()
            ));
        }

        let rng = &mut self.rng;
        let transaction_id = ids::transaction_id(index);
        let store = &reference.stores[rng.gen_range(0..reference.stores.len())];
        let customer = &reference.customers[rng.gen_range(0..reference.customers.len())];
        let timestamp = self.transaction_start + Duration::seconds(rng.gen_range(0..=self.transaction_seconds));
        let payment_method = PaymentMethod::ALL[rng.gen_range(0..PaymentMethod::ALL.len())];

        let item_count = rng.gen_range(1..=MAX_ITEMS_PER_TRANSACTION);
        let items = (0..item_count)
            .map(|line| {
                let product = &reference.products[rng.gen_range(0..reference.products.len())];
                let quantity = rng.gen_range(1..=MAX_QUANTITY);
                let price: f64 = rng.gen_range(MIN_UNIT_PRICE..=MAX_UNIT_PRICE);
                let unit_price = Amount::from_cents((price * 100.0).round() as i64);
                let is_promo = rng.gen_bool(PROMO_PROBABILITY);
                let promo_discount = if is_promo {
                    unit_price.percent(PROMO_PERCENT)
                } else {
                    Amount::ZERO
                };

                TransactionItem {
                    id: ids::transaction_item_id(index, line),
                    transaction_id,
                    product_id: product.id,
                    quantity,
                    unit_price,
                    is_promo,
                    promo_discount,
                }
            })
            .collect();

        Ok(Purchase {
            transaction: Transaction {
                id: transaction_id,
                store_id: store.id,
                customer_id: customer.id,
                timestamp,
                payment_method,
            },
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn stores_use_indexed_ids() {
        let mut generator = DataGenerator::new(42, anchor()).unwrap();
        let stores = generator.stores(4);
        let store_ids: Vec<_> = stores.iter().map(|s| s.id).collect();
        assert_eq!(store_ids, (0..4).map(ids::store_id).collect::<Vec<_>>());
    }

    #[test]
    fn store_locations_cluster_on_shared_pool() {
        let mut generator = DataGenerator::new(42, anchor()).unwrap();
        let stores = generator.stores(300);
        let mut counts = std::collections::HashMap::new();
        for store in &stores {
            *counts.entry(store.city.as_str()).or_insert(0usize) += 1;
        }
        // About a third of stores land on one of three shared cities.
        let mut top: Vec<usize> = counts.values().copied().collect();
        top.sort_unstable_by(|a, b| b.cmp(a));
        let shared: usize = top.iter().take(SHARED_LOCATIONS).sum();
        assert!(shared > 60, "expected clustering, top three cities cover {}", shared);
    }

    #[test]
    fn signup_date_only_with_loyalty_card() {
        let mut generator = DataGenerator::new(3, anchor()).unwrap();
        let customers = generator.customers(500);
        assert!(customers.iter().any(|c| c.loyalty_card));
        assert!(customers.iter().any(|c| !c.loyalty_card));

        let earliest = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let latest = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        for customer in customers {
            assert_eq!(customer.signup_date.is_some(), customer.loyalty_card);
            if let Some(date) = customer.signup_date {
                assert!(date >= earliest && date <= latest, "{} out of window", date);
            }
        }
    }

    #[test]
    fn transaction_needs_reference_data() {
        let mut generator = DataGenerator::new(42, anchor()).unwrap();
        let err = generator.transaction(0, &ReferenceData::default()).unwrap_err();
        assert!(err.to_string().contains("reference data is incomplete"));
    }

    #[test]
    fn transaction_items_respect_bounds() {
        let mut generator = DataGenerator::new(42, anchor()).unwrap();
        let reference = generator.reference_data(2, 5, 3);
        let window_start = anchor() - Duration::days(92);

        for i in 0..200 {
            let purchase = generator.transaction(i, &reference).unwrap();
            let transaction = &purchase.transaction;
            assert_eq!(transaction.id, ids::transaction_id(i));
            assert!(transaction.timestamp <= anchor() && transaction.timestamp >= window_start);
            assert!((1..=MAX_ITEMS_PER_TRANSACTION).contains(&purchase.items.len()));

            for (line, item) in purchase.items.iter().enumerate() {
                assert_eq!(item.id, ids::transaction_item_id(i, line));
                assert_eq!(item.transaction_id, transaction.id);
                assert!((1..=MAX_QUANTITY).contains(&item.quantity));
                assert!(item.unit_price >= Amount::from_cents(100));
                assert!(item.unit_price <= Amount::from_cents(10_000));
                if item.is_promo {
                    assert_eq!(item.promo_discount, item.unit_price.percent(20));
                } else {
                    assert_eq!(item.promo_discount, Amount::ZERO);
                }
            }
        }
    }

    #[test]
    fn total_is_sum_of_discounted_lines() {
        let mut generator = DataGenerator::new(9, anchor()).unwrap();
        let reference = generator.reference_data(1, 3, 1);
        let purchase = generator.transaction(0, &reference).unwrap();
        let expected = purchase
            .items
            .iter()
            .map(|item| (item.unit_price.cents() - item.promo_discount.cents()) * i64::from(item.quantity))
            .sum::<i64>();
        assert_eq!(purchase.total_amount(), Amount::from_cents(expected));
    }
}
