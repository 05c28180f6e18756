pub mod restaurant;
pub mod menu;
pub mod customization;
pub mod seed;

pub use restaurant::{Restaurant, RestaurantDirectory, CUISINE_CATEGORIES};
pub use menu::{Menu, MenuItem, OptionGroup, OptionKind, Topping};
pub use customization::{CustomizationDraft, CustomizationError, Selection, Selections};
