//! Seed catalog data for Larder tests, benches, and demos.
//!
//! A deterministic stand-in for the real data source: fixed ids, three
//! categories, nine foods. Tests rely on the exact contents staying
//! stable, so additions belong at the end and existing ids never change.

use larder_model::{Category, CategoryId, Food, RecordId};

fn category(id: &str, name: &str) -> Category {
    Category {
        id: CategoryId::from(id),
        name: name.to_string(),
    }
}

fn food(id: &str, name: &str, category: &Category, price: f64, number_in_stock: u32) -> Food {
    Food {
        id: RecordId::from(id),
        name: name.to_string(),
        category: category.clone(),
        price,
        number_in_stock,
        is_favored: false,
    }
}

/// The three seed categories, in display order.
#[must_use]
pub fn seed_categories() -> Vec<Category> {
    vec![
        category("cat-fruit", "Fruit"),
        category("cat-vegetables", "Vegetables"),
        category("cat-dairy", "Dairy"),
    ]
}

/// The nine seed foods, three per category, none favored.
#[must_use]
pub fn seed_foods() -> Vec<Food> {
    let categories = seed_categories();
    let fruit = &categories[0];
    let vegetables = &categories[1];
    let dairy = &categories[2];

    vec![
        food("food-001", "Apple", fruit, 1.5, 10),
        food("food-002", "Banana", fruit, 1.2, 40),
        food("food-003", "Orange", fruit, 2.0, 15),
        food("food-004", "Carrot", vegetables, 0.9, 30),
        food("food-005", "Broccoli", vegetables, 2.5, 8),
        food("food-006", "Spinach", vegetables, 1.8, 12),
        food("food-007", "Milk", dairy, 1.1, 25),
        food("food-008", "Cheese", dairy, 4.5, 6),
        food("food-009", "Yogurt", dairy, 0.8, 18),
    ]
}
