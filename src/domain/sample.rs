//! The built-in demo catalog: six products and four orders.

use crate::domain::model::{Dataset, LineItem, Order, Product};

fn product(id: u32, name: &str, category: &str, price: f64, in_stock: bool) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        in_stock,
    }
}

fn order(id: &str, items: &[(u32, u32)], created_at: &str) -> Order {
    Order {
        id: id.to_string(),
        items: items
            .iter()
            .map(|&(product_id, qty)| LineItem { product_id, qty })
            .collect(),
        created_at: created_at.to_string(),
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Laptop Pro 15", "Electronics", 1499.99, true),
        product(2, "Wireless Mouse", "Electronics", 24.5, false),
        product(3, "Mechanical Keyboard", "Electronics", 79.0, true),
        product(4, "Water Bottle", "Lifestyle", 12.0, true),
        product(5, "Notebook", "Stationery", 4.5, true),
        product(6, "Pencil", "Stationery", 1.2, true),
    ]
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        order("A100", &[(1, 1), (3, 1)], "2025-08-10"),
        order("A101", &[(5, 3), (6, 5)], "2025-08-11"),
        order("A102", &[(3, 1), (4, 2)], "2025-08-12"),
        // product 2 is out of stock but the sale still counts
        order("A103", &[(2, 1)], "2025-08-12"),
    ]
}

pub fn sample_dataset() -> Dataset {
    Dataset {
        products: sample_products(),
        orders: sample_orders(),
    }
}
