use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dish offered on a restaurant menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub options: Option<Vec<OptionGroup>>,
    pub metadata: serde_json::Value,
}

impl MenuItem {
    /// Whether the item offers a customize flow
    pub fn customization_available(&self) -> bool {
        self.options.is_some()
    }

    /// Look up one option group of the customization schema
    pub fn option_group(&self, key: &str) -> Option<&OptionGroup> {
        self.options.as_deref()?.iter().find(|g| g.key == key)
    }
}

/// One customization dimension of a menu item (size, crust, toppings...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionGroup {
    pub key: String,
    pub label: String,
    pub kind: OptionKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionKind {
    /// Radio semantics: exactly one choice may be selected
    Single { choices: Vec<String> },
    /// Checkbox semantics: any subset of choices may be selected.
    /// Surcharges are display data; they do not change the unit price.
    Multi { choices: Vec<Topping> },
}

impl OptionKind {
    /// Whether a choice label belongs to this group
    pub fn has_choice(&self, choice: &str) -> bool {
        match self {
            OptionKind::Single { choices } => choices.iter().any(|c| c == choice),
            OptionKind::Multi { choices } => choices.iter().any(|t| t.name == choice),
        }
    }
}

/// A multi-choice entry with its display surcharge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topping {
    pub name: String,
    pub surcharge: f64,
}

/// The menu of one restaurant, seeded once
pub struct Menu {
    restaurant_id: Uuid,
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(restaurant_id: Uuid, items: Vec<MenuItem>) -> Self {
        Self { restaurant_id, items }
    }

    pub fn restaurant_id(&self) -> Uuid {
        self.restaurant_id
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Get a menu item by ID
    pub fn get(&self, item_id: &Uuid) -> Option<&MenuItem> {
        self.items.iter().find(|i| &i.id == item_id)
    }
}
