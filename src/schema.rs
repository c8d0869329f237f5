diesel::table! {
    products (id) {
        id -> Integer,
        name -> Text,
        unit -> Text,
        category -> Text,
        brand -> Text,
        stock -> Integer,
        status -> Text,
        image -> Text,
    }
}

diesel::table! {
    inventory_logs (id) {
        id -> Integer,
        product_id -> Integer,
        old_stock -> Integer,
        new_stock -> Integer,
        changed_by -> Text,
        timestamp -> Timestamp,
    }
}

diesel::joinable!(inventory_logs -> products (product_id));

diesel::allow_tables_to_appear_in_same_query!(products, inventory_logs);
