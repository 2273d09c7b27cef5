diesel::table! {
    stores (store_id) {
        store_id -> Uuid,
        store_name -> Varchar,
        store_type -> Varchar,
        city -> Varchar,
        region -> Varchar,
    }
}

diesel::table! {
    products (product_id) {
        product_id -> Uuid,
        product_name -> Varchar,
        category -> Varchar,
        brand -> Varchar,
        ean -> Varchar,
    }
}

diesel::table! {
    customers (customer_id) {
        customer_id -> Uuid,
        signup_date -> Nullable<Date>,
        loyalty_card -> Bool,
    }
}

diesel::table! {
    transactions (transaction_id) {
        transaction_id -> Uuid,
        store_id -> Uuid,
        customer_id -> Uuid,
        transaction_timestamp -> Timestamptz,
        payment_method -> Varchar,
        total_amount -> Nullable<Numeric>,
    }
}

diesel::table! {
    transaction_items (transaction_item_id) {
        transaction_item_id -> Uuid,
        transaction_id -> Uuid,
        product_id -> Uuid,
        quantity -> Int4,
        unit_price -> Numeric,
        is_promo -> Bool,
        promo_discount -> Numeric,
    }
}

diesel::joinable!(transactions -> stores (store_id));
diesel::joinable!(transactions -> customers (customer_id));
diesel::joinable!(transaction_items -> transactions (transaction_id));
diesel::joinable!(transaction_items -> products (product_id));

diesel::allow_tables_to_appear_in_same_query!(
    stores,
    products,
    customers,
    transactions,
    transaction_items,
);
