//! Static ingredient catalog with substring filtering and category browse.

pub const ALL_INGREDIENTS: &[&str] = &[
    // Proteins
    "Chicken", "Beef", "Pork", "Turkey", "Lamb",
    "Salmon", "Tuna", "Shrimp", "Tofu", "Eggs",
    "Tempeh", "Seitan", "Ground Beef", "Chicken Breast",
    // Vegetables
    "Tomatoes", "Onions", "Garlic", "Bell Peppers", "Spinach",
    "Broccoli", "Carrots", "Zucchini", "Eggplant", "Mushrooms",
    "Cucumber", "Lettuce", "Kale", "Cauliflower", "Asparagus",
    "Green Beans", "Sweet Potato", "Potato", "Corn", "Peas",
    // Fruits
    "Apples", "Bananas", "Oranges", "Lemons", "Limes",
    "Strawberries", "Blueberries", "Raspberries", "Avocado",
    "Mango", "Pineapple", "Grapes", "Kiwi", "Peach",
    // Grains and starches
    "Rice", "Pasta", "Bread", "Quinoa", "Couscous",
    "Noodles", "Tortillas", "Oats", "Bulgur", "Barley",
    // Dairy and alternatives
    "Milk", "Cheese", "Yogurt", "Butter", "Cream",
    "Sour Cream", "Almond Milk", "Coconut Milk",
    // Herbs and spices
    "Basil", "Oregano", "Thyme", "Rosemary", "Parsley",
    "Cilantro", "Mint", "Dill", "Cumin", "Paprika",
    "Cinnamon", "Ginger", "Turmeric", "Chili Powder",
    // Legumes
    "Black Beans", "Kidney Beans", "Chickpeas", "Lentils",
    "Green Beans", "Edamame", "Pinto Beans",
    // Nuts and seeds
    "Almonds", "Walnuts", "Pecans", "Cashews", "Peanuts",
    "Sunflower Seeds", "Chia Seeds", "Pumpkin Seeds",
    // Condiments and sauces
    "Olive Oil", "Soy Sauce", "Honey", "Maple Syrup", "Mustard",
    "Ketchup", "Vinegar", "Hot Sauce", "Mayonnaise", "Salsa",
    // Baking
    "Flour", "Sugar", "Baking Powder", "Baking Soda", "Cocoa Powder",
    "Vanilla Extract", "Chocolate Chips",
    // International
    "Coconut", "Kimchi", "Miso", "Saffron", "Tahini",
    "Curry Paste", "Harissa", "Seaweed", "Wasabi",
];

pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("Proteins", &[
        "Chicken", "Beef", "Pork", "Turkey", "Lamb",
        "Salmon", "Tuna", "Shrimp", "Tofu", "Eggs",
    ]),
    ("Vegetables", &[
        "Tomatoes", "Onions", "Garlic", "Bell Peppers",
        "Spinach", "Broccoli", "Carrots", "Zucchini",
    ]),
    ("Fruits", &[
        "Apples", "Bananas", "Oranges", "Lemons",
        "Strawberries", "Blueberries", "Avocado",
    ]),
    ("Grains", &["Rice", "Pasta", "Bread", "Quinoa", "Oats", "Tortillas"]),
    ("Dairy and Alternatives", &["Milk", "Cheese", "Yogurt", "Butter", "Almond Milk"]),
    ("Herbs and Spices", &["Basil", "Oregano", "Thyme", "Rosemary", "Cumin", "Paprika"]),
    ("Legumes", &["Black Beans", "Kidney Beans", "Chickpeas", "Lentils"]),
    ("Nuts and Seeds", &["Almonds", "Walnuts", "Pecans", "Cashews", "Sunflower Seeds"]),
    ("Condiments and Sauces", &["Olive Oil", "Soy Sauce", "Honey", "Mustard", "Ketchup"]),
    ("International Ingredients", &["Coconut", "Kimchi", "Miso", "Curry Paste", "Harissa"]),
];

/// Entries containing `query` as a case-insensitive substring, catalog order
/// preserved. An empty query returns the full catalog.
pub fn filter(query: &str) -> Vec<&'static str> {
    let query = query.to_lowercase();
    ALL_INGREDIENTS
        .iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .copied()
        .collect()
}

/// Route slug for an ingredient detail page: lower-cased, whitespace runs
/// replaced with hyphens.
pub fn slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_full_catalog_in_order() {
        assert_eq!(filter(""), ALL_INGREDIENTS.to_vec());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let hits = filter("CHICK");
        assert_eq!(hits, vec!["Chicken", "Chicken Breast", "Chickpeas"]);
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        assert!(filter("xylophone").is_empty());
    }

    #[test]
    fn every_category_member_is_in_the_catalog() {
        for &(category, members) in CATEGORIES {
            for &name in members {
                assert!(
                    ALL_INGREDIENTS.contains(&name),
                    "{category}: {name} missing from catalog"
                );
            }
        }
    }

    #[test]
    fn slugs_lowercase_and_hyphenate() {
        assert_eq!(slug("Ground Beef"), "ground-beef");
        assert_eq!(slug("Garlic"), "garlic");
    }
}
