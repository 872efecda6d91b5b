//! Static menu catalog
//!
//! Constant data supplied to the ordering client. Nothing here is computed
//! from user input.

use crate::models::MenuItem;
use rust_decimal::Decimal;

pub const HOTEL_NAME: &str = "Gobite Premium Dining";

/// Category filter labels; `"All"` selects the whole menu
pub const CATEGORIES: [&str; 5] = ["All", "Appetizers", "Main Course", "Desserts", "Beverages"];

/// Category label that matches every item
pub const ALL_CATEGORIES: &str = "All";

pub const COMMON_ALLERGIES: [&str; 8] = [
    "Peanuts",
    "Dairy",
    "Gluten",
    "Shellfish",
    "Soy",
    "Eggs",
    "Tree Nuts",
    "Fish",
];

pub const AVAILABLE_TABLES: [&str; 10] = [
    "T-01", "T-02", "T-03", "T-04", "T-05", "T-06", "T-07", "T-08", "T-09", "T-10",
];

fn entry(
    id: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    category: &str,
    image: &str,
    popular: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(price_cents, 2),
        category: category.to_string(),
        image: image.to_string(),
        popular,
    }
}

/// Full menu in display order
pub fn menu_items() -> Vec<MenuItem> {
    vec![
        entry(
            "1",
            "Crispy Calamari",
            "Tender squid rings, lightly battered and fried to golden perfection. Served with spicy marinara.",
            1299,
            "Appetizers",
            "https://images.pexels.com/photos/1583884/pexels-photo-1583884.jpeg?auto=compress&cs=tinysrgb&w=800",
            true,
        ),
        entry(
            "2",
            "Classic Bruschetta",
            "Grilled country bread topped with Roma tomatoes, fresh basil, garlic, and extra virgin olive oil.",
            899,
            "Appetizers",
            "https://images.pexels.com/photos/566566/pexels-photo-566566.jpeg?auto=compress&cs=tinysrgb&w=800",
            false,
        ),
        entry(
            "3",
            "Spicy Chicken Wings",
            "Jumbo wings tossed in our signature buffalo sauce, served with blue cheese dip and celery.",
            1450,
            "Appetizers",
            "https://images.pexels.com/photos/60616/fried-chicken-chicken-fried-crunchy-60616.jpeg?auto=compress&cs=tinysrgb&w=800",
            false,
        ),
        entry(
            "4",
            "Grilled Salmon",
            "Atlantic salmon fillet grilled with lemon herb butter, served with asparagus and wild rice.",
            2499,
            "Main Course",
            "https://images.pexels.com/photos/3763847/pexels-photo-3763847.jpeg?auto=compress&cs=tinysrgb&w=800",
            true,
        ),
        entry(
            "5",
            "Gourmet Burger",
            "Angus beef patty, caramelized onions, gruyere cheese, arugula, and truffle mayo on a brioche bun.",
            1850,
            "Main Course",
            "https://images.pexels.com/photos/1639557/pexels-photo-1639557.jpeg?auto=compress&cs=tinysrgb&w=800",
            false,
        ),
        entry(
            "6",
            "Truffle Pasta",
            "Fresh tagliatelle tossed in a creamy truffle mushroom sauce topped with parmesan shavings.",
            2100,
            "Main Course",
            "https://images.pexels.com/photos/1527603/pexels-photo-1527603.jpeg?auto=compress&cs=tinysrgb&w=800",
            false,
        ),
        entry(
            "7",
            "Margherita Pizza",
            "San Marzano tomato sauce, fresh mozzarella di bufala, basil, and extra virgin olive oil.",
            1600,
            "Main Course",
            "https://images.pexels.com/photos/2147491/pexels-photo-2147491.jpeg?auto=compress&cs=tinysrgb&w=800",
            false,
        ),
        entry(
            "8",
            "Molten Lava Cake",
            "Warm chocolate cake with a gooey center, served with a scoop of vanilla bean ice cream.",
            999,
            "Desserts",
            "https://images.pexels.com/photos/3026804/pexels-photo-3026804.jpeg?auto=compress&cs=tinysrgb&w=800",
            true,
        ),
        entry(
            "9",
            "Tiramisu",
            "Classic Italian dessert made with coffee-soaked ladyfingers and mascarpone cream.",
            850,
            "Desserts",
            "https://images.pexels.com/photos/691152/pexels-photo-691152.jpeg?auto=compress&cs=tinysrgb&w=800",
            false,
        ),
        entry(
            "10",
            "Fresh Orange Juice",
            "Freshly squeezed oranges, served chilled.",
            500,
            "Beverages",
            "https://images.pexels.com/photos/1337825/pexels-photo-1337825.jpeg?auto=compress&cs=tinysrgb&w=800",
            false,
        ),
        entry(
            "11",
            "Iced Coffee",
            "Cold brew coffee served over ice with a splash of milk.",
            450,
            "Beverages",
            "https://images.pexels.com/photos/2615323/pexels-photo-2615323.jpeg?auto=compress&cs=tinysrgb&w=800",
            false,
        ),
    ]
}

/// Look up a menu item by id
pub fn find_item(id: &str) -> Option<MenuItem> {
    menu_items().into_iter().find(|item| item.id == id)
}

/// Items shown under a category tab, in catalog order
pub fn items_in_category(category: &str) -> Vec<MenuItem> {
    if category == ALL_CATEGORIES {
        return menu_items();
    }
    menu_items()
        .into_iter()
        .filter(|item| item.category == category)
        .collect()
}

/// Whether a table identifier is one the restaurant seats
pub fn is_known_table(table: &str) -> bool {
    AVAILABLE_TABLES.contains(&table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let items = menu_items();
        assert_eq!(items.len(), 11);
        assert!(items.iter().all(|i| i.price >= Decimal::ZERO));
        assert_eq!(items.iter().filter(|i| i.popular).count(), 3);
        assert_eq!(items[0].price, Decimal::new(1299, 2));
    }

    #[test]
    fn test_every_item_has_a_listed_category() {
        for item in menu_items() {
            assert!(CATEGORIES[1..].contains(&item.category.as_str()), "{}", item.category);
        }
    }

    #[test]
    fn test_items_in_category() {
        assert_eq!(items_in_category("All").len(), 11);
        let desserts: Vec<_> = items_in_category("Desserts")
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(desserts, vec!["Molten Lava Cake", "Tiramisu"]);
        assert!(items_in_category("Soups").is_empty());
    }

    #[test]
    fn test_find_item() {
        assert_eq!(find_item("4").map(|i| i.name), Some("Grilled Salmon".to_string()));
        assert!(find_item("99").is_none());
        assert!(is_known_table("T-07"));
        assert!(!is_known_table("T-11"));
    }
}
