use anyhow::Result;
use diesel::prelude::*;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use shared::*;
use tracing::info;
use crate::models::*;
use crate::schema::*;

/// Rows actually written per table; conflicts are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub stores: usize,
    pub products: usize,
    pub customers: usize,
    pub transactions: usize,
    pub transaction_items: usize,
}

impl SeedReport {
    pub fn merge(self, other: SeedReport) -> SeedReport {
        SeedReport {
            stores: self.stores + other.stores,
            products: self.products + other.products,
            customers: self.customers + other.customers,
            transactions: self.transactions + other.transactions,
            transaction_items: self.transaction_items + other.transaction_items,
        }
    }
}

/// Writes generated data over a single connection.
///
/// Each phase runs in its own database transaction, so reference data
/// and transactional data are committed separately.
pub struct Seeder {
    conn: AsyncPgConnection,
}

impl Seeder {
    pub fn new(conn: AsyncPgConnection) -> Self {
        Self { conn }
    }

    pub async fn seed_reference_data(&mut self, reference: &ReferenceData) -> Result<SeedReport> {
        let new_stores: Vec<NewStore> = reference.stores.iter().map(NewStore::from).collect();
        let new_products: Vec<NewProduct> = reference.products.iter().map(NewProduct::from).collect();
        let new_customers: Vec<NewCustomer> = reference.customers.iter().map(NewCustomer::from).collect();

        let report = self.conn.transaction::<_, anyhow::Error, _>(|conn| {
            Box::pin(async move {
                let stores = diesel::insert_into(stores::table)
                    .values(&new_stores)
                    .on_conflict(stores::store_id)
                    .do_nothing()
                    .execute(conn)
                    .await?;

                let products = diesel::insert_into(products::table)
                    .values(&new_products)
                    .on_conflict(products::product_id)
                    .do_nothing()
                    .execute(conn)
                    .await?;

                let customers = diesel::insert_into(customers::table)
                    .values(&new_customers)
                    .on_conflict(customers::customer_id)
                    .do_nothing()
                    .execute(conn)
                    .await?;

                Ok(SeedReport { stores, products, customers, ..SeedReport::default() })
            })
        }).await?;

        info!(
            "Reference data committed: {} stores, {} products, {} customers inserted",
            report.stores, report.products, report.customers
        );

        Ok(report)
    }

    /// Inserts each transaction, then its items, then writes its total.
    pub async fn seed_purchases(&mut self, purchases: Vec<Purchase>) -> Result<SeedReport> {
        let report = self.conn.transaction::<_, anyhow::Error, _>(|conn| {
            Box::pin(async move {
                let mut report = SeedReport::default();

                for purchase in &purchases {
                    report.transactions += diesel::insert_into(transactions::table)
                        .values(NewTransaction::from(&purchase.transaction))
                        .on_conflict(transactions::transaction_id)
                        .do_nothing()
                        .execute(conn)
                        .await?;

                    let new_items: Vec<NewTransactionItem> =
                        purchase.items.iter().map(NewTransactionItem::from).collect();
                    report.transaction_items += diesel::insert_into(transaction_items::table)
                        .values(&new_items)
                        .on_conflict(transaction_items::transaction_item_id)
                        .do_nothing()
                        .execute(conn)
                        .await?;

                    diesel::update(transactions::table.find(purchase.transaction.id))
                        .set(transactions::total_amount.eq(numeric(purchase.total_amount())))
                        .execute(conn)
                        .await?;
                }

                Ok(report)
            })
        }).await?;

        info!(
            "Transactional data committed: {} transactions, {} transaction items inserted",
            report.transactions, report.transaction_items
        );

        Ok(report)
    }

    pub fn close(self) {
        drop(self.conn);
        info!("Database connection closed");
    }
}
