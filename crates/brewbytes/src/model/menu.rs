use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a menu item, as used in order requests.
pub type MenuItemId = u32;

/// Menu section a dish belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Coffee,
    Food,
    Dessert,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Coffee => "Coffee",
            Category::Food => "Food",
            Category::Dessert => "Dessert",
        };
        f.write_str(name)
    }
}

/// A dish on the menu.
///
/// `prep_time` is in whole minutes and must be positive; the catalog rejects
/// items that violate this when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(alias = "prep_time")]
    pub prep_time: u32,
    pub category: Category,
}

impl MenuItem {
    pub fn new(id: MenuItemId, name: impl Into<String>, prep_time: u32, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            prep_time,
            category,
        }
    }
}
