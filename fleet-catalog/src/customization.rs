use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

use crate::menu::{MenuItem, OptionGroup, OptionKind};

/// A committed choice for one option group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Selection {
    Single(String),
    Multi(BTreeSet<String>),
}

/// All committed choices for a line item, keyed by option group.
/// Equality is structural: set-valued fields compare order-independently,
/// never by serialization order.
pub type Selections = BTreeMap<String, Selection>;

#[derive(Debug, thiserror::Error)]
pub enum CustomizationError {
    #[error("Item is not customizable: {0}")]
    NotCustomizable(String),

    #[error("Unknown option group: {0}")]
    UnknownOption(String),

    #[error("Unknown choice {choice:?} for option group {group}")]
    UnknownChoice { group: String, choice: String },

    #[error("Option group {0} is multi-choice, use toggle")]
    NotSingleChoice(String),

    #[error("Option group {0} is single-choice, use select")]
    NotMultiChoice(String),
}

/// In-flight selection state for the customize dialog.
/// `save` commits the selections; dropping the draft discards them.
#[derive(Debug, Clone)]
pub struct CustomizationDraft {
    item_id: Uuid,
    groups: Vec<OptionGroup>,
    selections: Selections,
}

impl CustomizationDraft {
    /// Open a draft for a customizable item
    pub fn begin(item: &MenuItem) -> Result<Self, CustomizationError> {
        let groups = item
            .options
            .clone()
            .ok_or_else(|| CustomizationError::NotCustomizable(item.name.clone()))?;

        Ok(Self {
            item_id: item.id,
            groups,
            selections: BTreeMap::new(),
        })
    }

    pub fn item_id(&self) -> Uuid {
        self.item_id
    }

    /// Set the choice of a single-choice group, replacing any previous one
    pub fn select(&mut self, key: &str, choice: &str) -> Result<(), CustomizationError> {
        let group = self
            .groups
            .iter()
            .find(|g| g.key == key)
            .ok_or_else(|| CustomizationError::UnknownOption(key.to_string()))?;

        match &group.kind {
            OptionKind::Single { .. } => {
                if !group.kind.has_choice(choice) {
                    return Err(CustomizationError::UnknownChoice {
                        group: key.to_string(),
                        choice: choice.to_string(),
                    });
                }
                self.selections
                    .insert(key.to_string(), Selection::Single(choice.to_string()));
                Ok(())
            }
            OptionKind::Multi { .. } => Err(CustomizationError::NotSingleChoice(key.to_string())),
        }
    }

    /// Toggle one choice of a multi-choice group: absent choices are added,
    /// present ones removed. An emptied group is dropped entirely so it
    /// compares equal to a group that was never touched.
    pub fn toggle(&mut self, key: &str, choice: &str) -> Result<(), CustomizationError> {
        let group = self
            .groups
            .iter()
            .find(|g| g.key == key)
            .ok_or_else(|| CustomizationError::UnknownOption(key.to_string()))?;

        match &group.kind {
            OptionKind::Multi { .. } => {
                if !group.kind.has_choice(choice) {
                    return Err(CustomizationError::UnknownChoice {
                        group: key.to_string(),
                        choice: choice.to_string(),
                    });
                }

                let entry = self
                    .selections
                    .entry(key.to_string())
                    .or_insert_with(|| Selection::Multi(BTreeSet::new()));

                let mut now_empty = false;
                if let Selection::Multi(set) = entry {
                    if !set.remove(choice) {
                        set.insert(choice.to_string());
                    }
                    now_empty = set.is_empty();
                }
                if now_empty {
                    self.selections.remove(key);
                }
                Ok(())
            }
            OptionKind::Single { .. } => Err(CustomizationError::NotMultiChoice(key.to_string())),
        }
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Commit the draft, consuming it
    pub fn save(self) -> Selections {
        self.selections
    }
}
