//! Menu Filtering
//!
//! Category, vegetarian and free-text predicates combined conjunctively.

use crate::config::ALL_CATEGORIES;
use crate::models::MenuItem;

/// Current state of the three filter inputs
#[derive(Debug, Clone, PartialEq)]
pub struct MenuFilter {
    /// Active category button value ("all" disables the predicate)
    pub category: String,
    pub vegetarian_only: bool,
    /// Raw search input; empty matches everything
    pub search: String,
}

impl Default for MenuFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            vegetarian_only: false,
            search: String::new(),
        }
    }
}

impl MenuFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        let category_match = self.category == ALL_CATEGORIES || item.category == self.category;
        let veg_match = !self.vegetarian_only || item.vegetarian;

        let term = self.search.to_lowercase();
        let search_match = item.name.to_lowercase().contains(&term)
            || item.ingredients.iter().any(|ing| ing.to_lowercase().contains(&term));

        category_match && veg_match && search_match
    }

    /// Matching items in menu order
    pub fn apply(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_item;

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            make_item(1, "Borscht", "soup", &["beet", "cabbage"], true),
            make_item(2, "Chicken Soup", "soup", &["chicken", "noodles"], false),
            make_item(3, "Greek Salad", "salad", &["tomato", "Feta"], true),
            make_item(4, "Ribeye", "main", &["beef", "pepper"], false),
        ]
    }

    fn ids(items: &[MenuItem]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_default_filter_returns_full_menu() {
        let menu = sample_menu();
        assert_eq!(MenuFilter::default().apply(&menu), menu);
    }

    #[test]
    fn test_category_filter() {
        let filter = MenuFilter { category: "soup".to_string(), ..Default::default() };
        assert_eq!(ids(&filter.apply(&sample_menu())), vec![1, 2]);
    }

    #[test]
    fn test_vegetarian_filter() {
        let filter = MenuFilter { vegetarian_only: true, ..Default::default() };
        assert_eq!(ids(&filter.apply(&sample_menu())), vec![1, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_ingredients() {
        let menu = sample_menu();

        let by_name = MenuFilter { search: "SOUP".to_string(), ..Default::default() };
        assert_eq!(ids(&by_name.apply(&menu)), vec![2]);

        let by_ingredient = MenuFilter { search: "feta".to_string(), ..Default::default() };
        assert_eq!(ids(&by_ingredient.apply(&menu)), vec![3]);

        let substring = MenuFilter { search: "ee".to_string(), ..Default::default() };
        assert_eq!(ids(&substring.apply(&menu)), vec![1, 3, 4]);
    }

    #[test]
    fn test_combined_filters_intersect() {
        let filter = MenuFilter {
            category: "soup".to_string(),
            vegetarian_only: true,
            search: "cab".to_string(),
        };
        assert_eq!(ids(&filter.apply(&sample_menu())), vec![1]);

        let none = MenuFilter {
            category: "main".to_string(),
            vegetarian_only: true,
            search: String::new(),
        };
        assert!(none.apply(&sample_menu()).is_empty());
    }

    #[test]
    fn test_borscht_scenario() {
        let menu = vec![make_item(1, "Borscht", "soup", &["beet", "cabbage"], true)];

        let veg = MenuFilter { vegetarian_only: true, ..Default::default() };
        assert_eq!(veg.apply(&menu).len(), 1);

        let beet = MenuFilter { search: "beet".to_string(), ..Default::default() };
        assert_eq!(beet.apply(&menu).len(), 1);

        let pizza = MenuFilter { search: "pizza".to_string(), ..Default::default() };
        assert!(pizza.apply(&menu).is_empty());
    }
}
