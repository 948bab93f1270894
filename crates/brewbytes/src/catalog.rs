//! The static menu the floor resolves order requests against.

use crate::error::CafeError;
use crate::model::{Category, MenuItem, MenuItemId};
use std::collections::HashSet;

/// Ordered, validated set of menu items.
///
/// Built once at startup and shared read-only; every item has a positive prep
/// time and a unique id.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CafeError> {
        if items.is_empty() {
            return Err(CafeError::EmptyMenu);
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CafeError::DuplicateMenuItem(item.id));
            }
            if item.prep_time == 0 {
                return Err(CafeError::InvalidPrepTime {
                    item_id: item.id,
                    prep_time: item.prep_time,
                });
            }
        }
        Ok(Self { items })
    }

    /// Items in menu order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Resolves an order request's item id.
    pub fn lookup(&self, id: MenuItemId) -> Result<&MenuItem, CafeError> {
        self.get(id).ok_or(CafeError::UnknownMenuItem(id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self {
            items: default_menu(),
        }
    }
}

/// The house menu.
pub fn default_menu() -> Vec<MenuItem> {
    use Category::{Coffee, Dessert, Food};

    [
        (1, "Espresso", 4, Coffee),
        (2, "Latte", 6, Coffee),
        (3, "Cappuccino", 7, Coffee),
        (4, "Americano", 5, Coffee),
        (5, "Mocha", 8, Coffee),
        (6, "Macchiato", 5, Coffee),
        (7, "Iced Coffee", 6, Coffee),
        (8, "Cold Brew", 9, Coffee),
        (9, "Sandwich", 10, Food),
        (10, "Burger", 12, Food),
        (11, "Pizza Slice", 11, Food),
        (12, "Pasta", 13, Food),
        (13, "Salad", 7, Food),
        (14, "Fries", 6, Food),
        (15, "Taco", 9, Food),
        (16, "Wrap", 8, Food),
        (17, "Cake Slice", 5, Dessert),
        (18, "Cookie", 3, Dessert),
        (19, "Muffin", 4, Dessert),
        (20, "Smoothie", 7, Dessert),
    ]
    .into_iter()
    .map(|(id, name, prep_time, category)| MenuItem::new(id, name, prep_time, category))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_menu_is_valid() {
        let catalog = MenuCatalog::new(default_menu()).unwrap();
        assert_eq!(catalog, MenuCatalog::default());
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.lookup(18).unwrap().name, "Cookie");
        assert_eq!(catalog.lookup(12).unwrap().prep_time, 13);
    }

    #[test]
    fn lookup_unknown_item_fails() {
        let catalog = MenuCatalog::default();
        assert_eq!(catalog.lookup(99), Err(CafeError::UnknownMenuItem(99)));
    }

    #[test]
    fn rejects_zero_prep_time() {
        let items = vec![MenuItem::new(1, "Air", 0, Category::Dessert)];
        assert_eq!(
            MenuCatalog::new(items),
            Err(CafeError::InvalidPrepTime {
                item_id: 1,
                prep_time: 0
            })
        );
    }

    #[test]
    fn rejects_duplicate_ids_and_empty_menu() {
        let items = vec![
            MenuItem::new(1, "Espresso", 4, Category::Coffee),
            MenuItem::new(1, "Doppio", 5, Category::Coffee),
        ];
        assert_eq!(MenuCatalog::new(items), Err(CafeError::DuplicateMenuItem(1)));
        assert_eq!(MenuCatalog::new(vec![]), Err(CafeError::EmptyMenu));
    }
}
