use uuid::Uuid;

use crate::menu::{Menu, MenuItem, OptionGroup, OptionKind, Topping};
use crate::restaurant::Restaurant;

/// The storefront's seeded restaurant directory
pub fn default_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            id: Uuid::new_v4(),
            name: "Bella Italia Trattoria".to_string(),
            address: "12 Via Roma, Foodville".to_string(),
            cuisine_types: vec!["Italian".to_string(), "Pizza".to_string()],
            rating: 4.7,
            review_count: 320,
            delivery_time: "25-35 min".to_string(),
            opening_hours: "11:00 AM - 11:00 PM".to_string(),
            promotional_tag: Some("Free Delivery".to_string()),
            description: Some(
                "Authentic Italian pasta, wood-fired pizzas, and delightful desserts.".to_string(),
            ),
            image_url: "https://images.example.com/restaurants/bella-italia.jpg".to_string(),
        },
        Restaurant {
            id: Uuid::new_v4(),
            name: "Taco Fiesta Express".to_string(),
            address: "48 Mission Blvd, Foodville".to_string(),
            cuisine_types: vec!["Mexican".to_string(), "Fast Food".to_string()],
            rating: 4.3,
            review_count: 180,
            delivery_time: "20-30 min".to_string(),
            opening_hours: "10:00 AM - 10:00 PM".to_string(),
            promotional_tag: None,
            description: Some(
                "Sizzling tacos, loaded burritos, and refreshing agua frescas.".to_string(),
            ),
            image_url: "https://images.example.com/restaurants/taco-fiesta.jpg".to_string(),
        },
        Restaurant {
            id: Uuid::new_v4(),
            name: "Dragon Wok Palace".to_string(),
            address: "88 Lantern St, Foodville".to_string(),
            cuisine_types: vec!["Chinese".to_string(), "Asian".to_string()],
            rating: 4.5,
            review_count: 250,
            delivery_time: "30-40 min".to_string(),
            opening_hours: "11:30 AM - 10:30 PM".to_string(),
            promotional_tag: Some("15% Off Orders $30+".to_string()),
            description: Some(
                "A wide variety of classic Chinese dishes, from dim sum to kung pao chicken."
                    .to_string(),
            ),
            image_url: "https://images.example.com/restaurants/dragon-wok.jpg".to_string(),
        },
        Restaurant {
            id: Uuid::new_v4(),
            name: "The Curry House".to_string(),
            address: "7 Saffron Lane, Foodville".to_string(),
            cuisine_types: vec!["Indian".to_string(), "Vegetarian".to_string()],
            rating: 4.8,
            review_count: 410,
            delivery_time: "35-45 min".to_string(),
            opening_hours: "12:00 PM - 11:00 PM".to_string(),
            promotional_tag: None,
            description: Some(
                "Rich and aromatic Indian curries, biryanis, and freshly baked naan.".to_string(),
            ),
            image_url: "https://images.example.com/restaurants/curry-house.jpg".to_string(),
        },
        Restaurant {
            id: Uuid::new_v4(),
            name: "Burger Bliss Joint".to_string(),
            address: "230 Grove Ave, Foodville".to_string(),
            cuisine_types: vec!["Burgers".to_string(), "American".to_string()],
            rating: 4.2,
            review_count: 150,
            delivery_time: "20-30 min".to_string(),
            opening_hours: "10:00 AM - 12:00 AM".to_string(),
            promotional_tag: None,
            description: Some(
                "Juicy gourmet burgers, crispy fries, and creamy milkshakes.".to_string(),
            ),
            image_url: "https://images.example.com/restaurants/burger-bliss.jpg".to_string(),
        },
        Restaurant {
            id: Uuid::new_v4(),
            name: "Sushi Heaven".to_string(),
            address: "5 Harbor Walk, Foodville".to_string(),
            cuisine_types: vec!["Japanese".to_string(), "Sushi".to_string()],
            rating: 4.6,
            review_count: 290,
            delivery_time: "30-40 min".to_string(),
            opening_hours: "11:00 AM - 10:00 PM".to_string(),
            promotional_tag: Some("Sushi Combo Deals".to_string()),
            description: Some(
                "Fresh and artfully crafted sushi rolls, sashimi, and Japanese appetizers."
                    .to_string(),
            ),
            image_url: "https://images.example.com/restaurants/sushi-heaven.jpg".to_string(),
        },
    ]
}

/// The restaurant used by the menu browsing flow
pub fn sample_restaurant() -> Restaurant {
    Restaurant {
        id: Uuid::new_v4(),
        name: "The Gourmet Place".to_string(),
        address: "123 Culinary Ave, Food City, FC 54321".to_string(),
        cuisine_types: vec![
            "Italian".to_string(),
            "Pizza".to_string(),
            "Desserts".to_string(),
        ],
        rating: 4.7,
        review_count: 350,
        delivery_time: "25-35 min".to_string(),
        opening_hours: "10:00 AM - 10:00 PM".to_string(),
        promotional_tag: None,
        description: None,
        image_url: "https://images.example.com/restaurants/gourmet-place.jpg".to_string(),
    }
}

/// The Gourmet Place menu
pub fn sample_menu(restaurant_id: Uuid) -> Menu {
    let items = vec![
        MenuItem {
            id: Uuid::new_v4(),
            restaurant_id,
            name: "Margherita Pizza".to_string(),
            description:
                "Classic delight with 100% real mozzarella cheese, fresh tomatoes, and basil."
                    .to_string(),
            price: 12.99,
            image_url: Some("https://images.example.com/menu/margherita.jpg".to_string()),
            options: Some(vec![
                OptionGroup {
                    key: "size".to_string(),
                    label: "Size".to_string(),
                    kind: OptionKind::Single {
                        choices: vec![
                            "Small".to_string(),
                            "Medium".to_string(),
                            "Large".to_string(),
                        ],
                    },
                },
                OptionGroup {
                    key: "crust".to_string(),
                    label: "Crust".to_string(),
                    kind: OptionKind::Single {
                        choices: vec![
                            "Thin".to_string(),
                            "Regular".to_string(),
                            "Stuffed".to_string(),
                        ],
                    },
                },
                OptionGroup {
                    key: "extra_toppings".to_string(),
                    label: "Extra Toppings".to_string(),
                    kind: OptionKind::Multi {
                        choices: vec![
                            Topping {
                                name: "Mushrooms".to_string(),
                                surcharge: 1.50,
                            },
                            Topping {
                                name: "Olives".to_string(),
                                surcharge: 1.00,
                            },
                            Topping {
                                name: "Pepperoni".to_string(),
                                surcharge: 2.00,
                            },
                        ],
                    },
                },
            ]),
            metadata: serde_json::json!({ "vegetarian": true }),
        },
        MenuItem {
            id: Uuid::new_v4(),
            restaurant_id,
            name: "Pasta Carbonara".to_string(),
            description: "Spaghetti with creamy egg sauce, pancetta, and pecorino cheese."
                .to_string(),
            price: 15.50,
            image_url: Some("https://images.example.com/menu/carbonara.jpg".to_string()),
            options: None,
            metadata: serde_json::json!({}),
        },
        MenuItem {
            id: Uuid::new_v4(),
            restaurant_id,
            name: "Tiramisu".to_string(),
            description:
                "A classic Italian dessert made with mascarpone cheese, coffee, and ladyfingers."
                    .to_string(),
            price: 7.00,
            image_url: Some("https://images.example.com/menu/tiramisu.jpg".to_string()),
            options: Some(vec![OptionGroup {
                key: "serving_size".to_string(),
                label: "Serving Size".to_string(),
                kind: OptionKind::Single {
                    choices: vec!["Single".to_string(), "Double".to_string()],
                },
            }]),
            metadata: serde_json::json!({ "vegetarian": true }),
        },
        MenuItem {
            id: Uuid::new_v4(),
            restaurant_id,
            name: "Caesar Salad".to_string(),
            description: "Crisp romaine lettuce, croutons, Parmesan cheese, and Caesar dressing."
                .to_string(),
            price: 9.25,
            image_url: Some("https://images.example.com/menu/caesar.jpg".to_string()),
            options: Some(vec![OptionGroup {
                key: "protein".to_string(),
                label: "Add Protein".to_string(),
                kind: OptionKind::Single {
                    choices: vec![
                        "None".to_string(),
                        "Chicken".to_string(),
                        "Shrimp".to_string(),
                    ],
                },
            }]),
            metadata: serde_json::json!({}),
        },
    ];

    Menu::new(restaurant_id, items)
}

/// Items surfaced in the "you might also like" strip
pub fn suggested_items(restaurant_id: Uuid) -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: Uuid::new_v4(),
            restaurant_id,
            name: "Chocolate Lava Cake".to_string(),
            description:
                "Warm, gooey chocolate cake with a molten center. The perfect end to any meal."
                    .to_string(),
            price: 6.00,
            image_url: Some("https://images.example.com/menu/lava-cake.jpg".to_string()),
            options: None,
            metadata: serde_json::json!({}),
        },
        MenuItem {
            id: Uuid::new_v4(),
            restaurant_id,
            name: "Garlic Bread Sticks".to_string(),
            description: "Crispy on the outside, soft on the inside, served with marinara sauce."
                .to_string(),
            price: 4.50,
            image_url: Some("https://images.example.com/menu/garlic-bread.jpg".to_string()),
            options: None,
            metadata: serde_json::json!({}),
        },
    ]
}
