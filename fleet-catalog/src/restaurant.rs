use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cuisine categories shown as filter chips on the home screen.
/// Fixed ordered list, constructed once.
pub const CUISINE_CATEGORIES: [&str; 9] = [
    "Italian",
    "Mexican",
    "Chinese",
    "Indian",
    "Burgers",
    "Sushi",
    "Pizza",
    "Vegan",
    "Desserts",
];

/// A restaurant listed in the storefront directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub cuisine_types: Vec<String>,
    pub rating: f64,
    pub review_count: i32,
    pub delivery_time: String,
    pub opening_hours: String,
    pub promotional_tag: Option<String>,
    pub description: Option<String>,
    pub image_url: String,
}

/// Read-only restaurant directory, seeded once at startup
pub struct RestaurantDirectory {
    restaurants: Vec<Restaurant>,
}

impl RestaurantDirectory {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    pub fn all(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Get a restaurant by ID
    pub fn get(&self, id: &Uuid) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| &r.id == id)
    }

    /// Filter by a selected cuisine chip and/or a free-text search term.
    /// The search term matches restaurant names and cuisine types,
    /// case-insensitively. Both predicates compose.
    pub fn filter(&self, cuisine: Option<&str>, search_term: &str) -> Vec<&Restaurant> {
        let term = search_term.to_lowercase();

        self.restaurants
            .iter()
            .filter(|r| match cuisine {
                Some(c) => r.cuisine_types.iter().any(|ct| ct == c),
                None => true,
            })
            .filter(|r| {
                if term.is_empty() {
                    return true;
                }
                r.name.to_lowercase().contains(&term)
                    || r.cuisine_types.iter().any(|c| c.to_lowercase().contains(&term))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_restaurants;

    #[test]
    fn test_filter_by_cuisine() {
        let directory = RestaurantDirectory::new(default_restaurants());

        let italian = directory.filter(Some("Italian"), "");
        assert_eq!(italian.len(), 1);
        assert_eq!(italian[0].name, "Bella Italia Trattoria");
    }

    #[test]
    fn test_filter_composes_cuisine_and_search() {
        let directory = RestaurantDirectory::new(default_restaurants());

        // "house" matches The Curry House by name
        let matches = directory.filter(None, "house");
        assert_eq!(matches.len(), 1);

        // but not when the cuisine chip excludes it
        let matches = directory.filter(Some("Sushi"), "house");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_filter_matches_cuisine_types_in_search() {
        let directory = RestaurantDirectory::new(default_restaurants());

        // "pizza" is a cuisine type of Bella Italia, not part of its name
        let matches = directory.filter(None, "pizza");
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_filter_unknown_cuisine_is_empty() {
        let directory = RestaurantDirectory::new(default_restaurants());
        assert!(directory.filter(Some("Ethiopian"), "").is_empty());
    }
}
