//! Structural invariants of a list collection.

use std::collections::HashSet;

use crate::model::TodoList;

/// Check invariants of a list collection:
/// - No duplicate list ids
/// - No two lists whose names match ignoring case
/// - Within each list, no duplicate item ids and no matching item names
pub fn validate_invariants(lists: &[TodoList]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut list_ids = HashSet::new();
    let mut list_names = HashSet::new();

    for list in lists {
        if !list_ids.insert(list.id) {
            errors.push(format!("duplicate list id {}", list.id));
        }
        if !list_names.insert(list.name.to_lowercase()) {
            errors.push(format!("duplicate list name '{}'", list.name));
        }
        validate_items(list, &mut errors);
    }

    errors
}

fn validate_items(list: &TodoList, errors: &mut Vec<String>) {
    let mut item_ids = HashSet::new();
    let mut item_names = HashSet::new();

    for item in &list.items {
        if !item_ids.insert(item.id) {
            errors.push(format!("list {}: duplicate item id {}", list.id, item.id));
        }
        if !item_names.insert(item.name.to_lowercase()) {
            errors.push(format!(
                "list {}: duplicate item name '{}'",
                list.id, item.name
            ));
        }
    }
}
