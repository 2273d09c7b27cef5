use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use shared::*;
use uuid::Uuid;

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::stores)]
pub struct NewStore {
    pub store_id: Uuid,
    pub store_name: String,
    pub store_type: String,
    pub city: String,
    pub region: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub product_id: Uuid,
    pub product_name: String,
    pub category: String,
    pub brand: String,
    pub ean: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer {
    pub customer_id: Uuid,
    pub signup_date: Option<NaiveDate>,
    pub loyalty_card: bool,
}

/// Header row; `total_amount` is filled in by a later update.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransaction {
    pub transaction_id: Uuid,
    pub store_id: Uuid,
    pub customer_id: Uuid,
    pub transaction_timestamp: DateTime<Utc>,
    pub payment_method: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::transaction_items)]
pub struct NewTransactionItem {
    pub transaction_item_id: Uuid,
    pub transaction_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub is_promo: bool,
    pub promo_discount: BigDecimal,
}

/// Two-decimal `NUMERIC` value for an amount in cents.
pub fn numeric(amount: Amount) -> BigDecimal {
    BigDecimal::new(amount.cents().into(), 2)
}

impl From<&Store> for NewStore {
    fn from(store: &Store) -> Self {
        Self {
            store_id: store.id,
            store_name: store.name.clone(),
            store_type: store.store_type.as_str().to_string(),
            city: store.city.clone(),
            region: store.region.clone(),
        }
    }
}

impl From<&Product> for NewProduct {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            category: product.category.as_str().to_string(),
            brand: product.brand.clone(),
            ean: product.ean.clone(),
        }
    }
}

impl From<&Customer> for NewCustomer {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id,
            signup_date: customer.signup_date,
            loyalty_card: customer.loyalty_card,
        }
    }
}

impl From<&Transaction> for NewTransaction {
    fn from(transaction: &Transaction) -> Self {
        Self {
            transaction_id: transaction.id,
            store_id: transaction.store_id,
            customer_id: transaction.customer_id,
            transaction_timestamp: transaction.timestamp,
            payment_method: transaction.payment_method.as_str().to_string(),
        }
    }
}

impl From<&TransactionItem> for NewTransactionItem {
    fn from(item: &TransactionItem) -> Self {
        Self {
            transaction_item_id: item.id,
            transaction_id: item.transaction_id,
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: numeric(item.unit_price),
            is_promo: item.is_promo,
            promo_discount: numeric(item.promo_discount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn numeric_keeps_two_decimals() {
        assert_eq!(numeric(Amount::from_cents(1999)), BigDecimal::from_str("19.99").unwrap());
        assert_eq!(numeric(Amount::from_cents(5)), BigDecimal::from_str("0.05").unwrap());
        assert_eq!(numeric(Amount::ZERO), BigDecimal::from(0));
    }

    #[test]
    fn item_row_carries_discount() {
        let item = TransactionItem {
            id: Uuid::nil(),
            transaction_id: Uuid::nil(),
            product_id: Uuid::nil(),
            quantity: 2,
            unit_price: Amount::from_cents(4550),
            is_promo: true,
            promo_discount: Amount::from_cents(910),
        };
        let row = NewTransactionItem::from(&item);
        assert_eq!(row.quantity, 2);
        assert!(row.is_promo);
        assert_eq!(row.unit_price, BigDecimal::from_str("45.50").unwrap());
        assert_eq!(row.promo_discount, BigDecimal::from_str("9.10").unwrap());
    }

    #[test]
    fn enum_columns_use_labels() {
        let store = Store {
            id: Uuid::nil(),
            name: "Parker LLC".to_string(),
            store_type: StoreType::Hyper,
            city: "Springfield".to_string(),
            region: "Ohio".to_string(),
        };
        assert_eq!(NewStore::from(&store).store_type, "Hyper");
    }
}
