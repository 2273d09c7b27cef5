//! Stable identifiers derived from an entity kind and its index.
//!
//! Reruns produce the same ids, which is what lets the seeder rely on
//! `ON CONFLICT DO NOTHING` for idempotence.

use uuid::Uuid;

pub fn store_id(index: usize) -> Uuid {
    derive(&format!("store-{}", index))
}

pub fn product_id(index: usize) -> Uuid {
    derive(&format!("product-{}", index))
}

pub fn customer_id(index: usize) -> Uuid {
    derive(&format!("customer-{}", index))
}

pub fn transaction_id(index: usize) -> Uuid {
    derive(&format!("transaction-{}", index))
}

pub fn transaction_item_id(transaction_index: usize, line: usize) -> Uuid {
    derive(&format!("transaction-{}-item-{}", transaction_index, line))
}

fn derive(name: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_DNS, name.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_version_5_and_stable() {
        let id = store_id(0);
        assert_eq!(id.get_version_num(), 5);
        assert_eq!(id, store_id(0));
        assert_eq!(id, Uuid::new_v5(&Uuid::NAMESPACE_DNS, b"store-0"));
    }

    #[test]
    fn kinds_do_not_collide() {
        let ids: HashSet<Uuid> = [
            store_id(1),
            product_id(1),
            customer_id(1),
            transaction_id(1),
            transaction_item_id(1, 0),
        ]
        .into_iter()
        .collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn item_ids_differ_per_line() {
        assert_ne!(transaction_item_id(3, 0), transaction_item_id(3, 1));
        assert_ne!(transaction_item_id(3, 0), transaction_item_id(4, 0));
    }
}
