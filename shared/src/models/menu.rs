//! Menu Model

use serde::{Deserialize, Serialize};

/// Icon identifier used when a category carries none
pub const DEFAULT_CATEGORY_ICON: &str = "Utensils";

/// Menu category with its items attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Opaque icon identifier (e.g. "Coffee"); resolved by the presentation layer
    pub icon: String,
    pub display_order: i32,
    pub is_active: bool,
    /// Items whose `category` references this category's id
    #[serde(default)]
    pub items: Vec<MenuItem>,
    pub created_at: String,
    pub updated_at: String,
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Category reference (category id, or "unknown")
    pub category: String,
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_signature: bool,
    #[serde(default)]
    pub is_latest: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl MenuCategory {
    /// Attach every item referencing this category, keeping the items' order
    pub fn with_items_from(mut self, items: &[MenuItem]) -> Self {
        self.items = items
            .iter()
            .filter(|item| item.category == self.id)
            .cloned()
            .collect();
        self
    }
}

/// Resolved menu: grouped categories plus the raw item list
///
/// `items` is the unfiltered list as fetched, so it still contains items whose
/// category reference matched none of `categories`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuData {
    pub categories: Vec<MenuCategory>,
    pub items: Vec<MenuItem>,
}

impl MenuData {
    /// Group `items` under `categories` by reference id
    pub fn group(categories: Vec<MenuCategory>, items: Vec<MenuItem>) -> Self {
        let categories = categories
            .into_iter()
            .map(|category| category.with_items_from(&items))
            .collect();
        Self { categories, items }
    }

    /// Build from categories that already carry their items
    pub fn from_grouped(categories: Vec<MenuCategory>) -> Self {
        let items = categories
            .iter()
            .flat_map(|category| category.items.iter().cloned())
            .collect();
        Self { categories, items }
    }

    /// All grouped items across categories, in category order
    pub fn grouped_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|category| category.items.iter())
    }
}
