//! The menu collection and its mutation API
//!
//! This module owns the authoritative in-memory sequence of menu items
//! and every operation that may change or summarize it: validated
//! add, removal by dish name, per-course price averages, and the two
//! stable sort orders. It has no knowledge of screens, input, or
//! rendering.

use crate::domain::course::Course;
use crate::domain::item::{ItemId, MenuItem};
use thiserror::Error;

/// Errors reported by collection operations
///
/// None of these are fatal: a failed operation leaves the collection
/// exactly as it was, and the message is suitable for showing to the
/// user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// A required add-form field was blank after trimming
    #[error("Please fill in all fields.")]
    MissingField,
    /// The price text did not parse as a finite non-negative number
    #[error("Please enter a valid positive price.")]
    InvalidPrice { input: String },
    /// The removal name was blank after trimming
    #[error("Enter the dish name to remove.")]
    BlankRemovalName,
    /// No item matched the removal name
    #[error("No menu item named '{name}'.")]
    NotFound { name: String },
}

/// Raw form input for a new menu item
///
/// Text fields arrive exactly as typed; trimming and price parsing
/// happen inside `Menu::add` so that validation has a single home.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price_text: String,
}

/// Average price for one course
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseAverage {
    pub course: Course,
    pub average: f64,
}

/// Ordered collection of menu items
///
/// Insertion order is the natural order; only the explicit sort
/// operations reorder it. Duplicate names are allowed.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<MenuItem>,
    next_id: u64,
}

impl Menu {
    /// Creates an empty menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the items in their current order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Returns the number of items on the menu
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the menu has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validates a draft and appends it as a new item
    ///
    /// `name` and `description` are stored trimmed; the price text is
    /// parsed as a decimal number. The new item goes to the end of the
    /// collection and receives a fresh id that will never be reused.
    ///
    /// # Arguments
    /// * `draft` - Raw form input for the new item
    ///
    /// # Returns
    /// The id of the stored item, or a `MenuError` describing the
    /// first validation failure. On error the collection is unchanged.
    pub fn add(&mut self, draft: &ItemDraft) -> Result<ItemId, MenuError> {
        let name = draft.name.trim();
        let description = draft.description.trim();
        let price_text = draft.price_text.trim();

        if name.is_empty() || description.is_empty() || price_text.is_empty() {
            return Err(MenuError::MissingField);
        }

        let price = parse_price(price_text)?;

        let id = ItemId::new(self.next_id);
        self.next_id += 1;

        self.items.push(MenuItem {
            id,
            name: name.to_string(),
            description: description.to_string(),
            course: draft.course,
            price,
        });

        Ok(id)
    }

    /// Removes the first item whose name matches, case-insensitively
    ///
    /// The lookup name is trimmed before matching. When several items
    /// share the name, only the earliest one in the current order is
    /// removed; later duplicates stay on the menu.
    ///
    /// # Arguments
    /// * `name` - Dish name to remove, as typed by the user
    ///
    /// # Returns
    /// The removed item, `MenuError::BlankRemovalName` for a blank
    /// input, or `MenuError::NotFound` when nothing matches. On error
    /// the collection is unchanged.
    pub fn remove_by_name(&mut self, name: &str) -> Result<MenuItem, MenuError> {
        let needle = name.trim();
        if needle.is_empty() {
            return Err(MenuError::BlankRemovalName);
        }

        let needle_lower = needle.to_lowercase();
        let position = self
            .items
            .iter()
            .position(|item| item.name.to_lowercase() == needle_lower);

        match position {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(MenuError::NotFound {
                name: needle.to_string(),
            }),
        }
    }

    /// Computes the arithmetic mean price per course
    ///
    /// Pure summary over the current items. The result always holds
    /// exactly three entries in menu-reading order (Starter, Main,
    /// Dessert); a course with no items averages exactly 0.
    pub fn averages_by_course(&self) -> [CourseAverage; 3] {
        Course::ALL.map(|course| {
            let mut count = 0u32;
            let mut total = 0.0f64;
            for item in self.items.iter().filter(|i| i.course == course) {
                count += 1;
                total += item.price;
            }
            let average = if count == 0 { 0.0 } else { total / f64::from(count) };
            CourseAverage { course, average }
        })
    }

    /// Reorders the collection by course label, alphabetically
    ///
    /// Sorts by the lexicographic order of the course labels, so
    /// Dessert comes before Main before Starter. The sort is stable:
    /// items of the same course keep their relative order.
    pub fn sort_by_course(&mut self) {
        self.items
            .sort_by(|a, b| a.course.label().cmp(b.course.label()));
    }

    /// Reorders the collection by ascending price
    ///
    /// Stable: items with equal prices keep their relative order.
    /// Stored prices are always finite, so `total_cmp` agrees with the
    /// usual numeric order here.
    pub fn sort_by_price(&mut self) {
        self.items.sort_by(|a, b| a.price.total_cmp(&b.price));
    }
}

/// Parses raw price text into a validated price value
///
/// Accepts any decimal representation `f64` understands, then rejects
/// everything a price must not be: NaN, infinities, and negatives.
fn parse_price(text: &str) -> Result<f64, MenuError> {
    let invalid = || MenuError::InvalidPrice {
        input: text.to_string(),
    };

    let value: f64 = text.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, description: &str, course: Course, price: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            description: description.to_string(),
            course,
            price_text: price.to_string(),
        }
    }

    fn sample_menu() -> Menu {
        let mut menu = Menu::new();
        menu.add(&draft("Caesar Salad", "Fresh greens", Course::Starter, "49.99"))
            .unwrap();
        menu.add(&draft("Steak", "Grilled ribeye", Course::Main, "20.00"))
            .unwrap();
        menu.add(&draft("Pasta", "Handmade tagliatelle", Course::Main, "30.00"))
            .unwrap();
        menu.add(&draft("Tiramisu", "Coffee and mascarpone", Course::Dessert, "35.50"))
            .unwrap();
        menu
    }

    #[test]
    fn add_appends_trimmed_and_parsed_item() {
        let mut menu = Menu::new();
        let id = menu
            .add(&draft("  Caesar Salad  ", " Fresh greens ", Course::Starter, " 49.99 "))
            .unwrap();

        assert_eq!(menu.len(), 1);
        let item = &menu.items()[0];
        assert_eq!(item.id, id);
        assert_eq!(item.name, "Caesar Salad");
        assert_eq!(item.description, "Fresh greens");
        assert_eq!(item.course, Course::Starter);
        assert_eq!(item.price, 49.99);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let menu = sample_menu();
        let names: Vec<&str> = menu.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Caesar Salad", "Steak", "Pasta", "Tiramisu"]);
    }

    #[test]
    fn add_assigns_unique_ids_even_after_removal() {
        let mut menu = Menu::new();
        let first = menu
            .add(&draft("Soup", "Tomato", Course::Starter, "12"))
            .unwrap();
        menu.remove_by_name("Soup").unwrap();
        let second = menu
            .add(&draft("Soup", "Tomato", Course::Starter, "12"))
            .unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn add_rejects_blank_fields() {
        let mut menu = Menu::new();
        let blanks = [
            draft("   ", "Fresh greens", Course::Starter, "10"),
            draft("Caesar Salad", " \t ", Course::Starter, "10"),
            draft("Caesar Salad", "Fresh greens", Course::Starter, ""),
        ];
        for candidate in blanks {
            assert_eq!(menu.add(&candidate), Err(MenuError::MissingField));
            assert!(menu.is_empty());
        }
    }

    #[test]
    fn add_rejects_unparsable_or_negative_price() {
        let mut menu = Menu::new();
        for bad in ["abc", "-1", "-0.01", "12,50", "NaN", "inf", "1e999"] {
            let result = menu.add(&draft("Dish", "Desc", Course::Main, bad));
            assert!(
                matches!(result, Err(MenuError::InvalidPrice { .. })),
                "price {bad:?} should be rejected, got {result:?}"
            );
            assert!(menu.is_empty());
        }
    }

    #[test]
    fn add_accepts_zero_and_integer_prices() {
        let mut menu = Menu::new();
        menu.add(&draft("Water", "Tap", Course::Starter, "0")).unwrap();
        menu.add(&draft("Bread", "Sourdough", Course::Starter, "15"))
            .unwrap();
        assert_eq!(menu.items()[0].price, 0.0);
        assert_eq!(menu.items()[1].price, 15.0);
    }

    #[test]
    fn remove_matches_case_insensitively_and_trims() {
        let mut menu = sample_menu();
        let removed = menu.remove_by_name("  caesar SALAD ").unwrap();
        assert_eq!(removed.name, "Caesar Salad");
        assert_eq!(menu.len(), 3);
    }

    #[test]
    fn remove_takes_only_the_first_duplicate() {
        let mut menu = Menu::new();
        menu.add(&draft("Soup", "Tomato", Course::Starter, "10")).unwrap();
        menu.add(&draft("Soup", "Pumpkin", Course::Starter, "12")).unwrap();

        menu.remove_by_name("soup").unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.items()[0].description, "Pumpkin");
    }

    #[test]
    fn remove_unknown_name_is_not_found_and_leaves_menu_unchanged() {
        let mut menu = sample_menu();
        let before = menu.items().to_vec();
        let result = menu.remove_by_name("Sushi");
        assert_eq!(
            result,
            Err(MenuError::NotFound {
                name: "Sushi".to_string()
            })
        );
        assert_eq!(menu.items(), before.as_slice());
    }

    #[test]
    fn remove_fails_identically_after_a_successful_removal() {
        let mut menu = sample_menu();
        menu.remove_by_name("Tiramisu").unwrap();
        for _ in 0..2 {
            assert!(matches!(
                menu.remove_by_name("Tiramisu"),
                Err(MenuError::NotFound { .. })
            ));
            assert_eq!(menu.len(), 3);
        }
    }

    #[test]
    fn remove_blank_name_is_a_validation_error() {
        let mut menu = sample_menu();
        assert_eq!(menu.remove_by_name("   "), Err(MenuError::BlankRemovalName));
        assert_eq!(menu.len(), 4);
    }

    #[test]
    fn averages_on_empty_menu_are_three_zeros() {
        let averages = Menu::new().averages_by_course();
        assert_eq!(averages.len(), 3);
        let courses: Vec<Course> = averages.iter().map(|a| a.course).collect();
        assert_eq!(courses, vec![Course::Starter, Course::Main, Course::Dessert]);
        for entry in averages {
            assert_eq!(entry.average, 0.0);
        }
    }

    #[test]
    fn average_of_single_starter_fills_other_courses_with_zero() {
        let mut menu = Menu::new();
        menu.add(&draft("Caesar Salad", "Fresh greens", Course::Starter, "49.99"))
            .unwrap();

        let [starter, main, dessert] = menu.averages_by_course();
        assert_eq!(starter.average, 49.99);
        assert_eq!(main.average, 0.0);
        assert_eq!(dessert.average, 0.0);
    }

    #[test]
    fn average_of_two_mains_is_their_mean() {
        let menu = sample_menu();
        let [_, main, _] = menu.averages_by_course();
        assert_eq!(main.average, 25.00);
    }

    #[test]
    fn averages_do_not_mutate_the_menu() {
        let menu = sample_menu();
        let before = menu.items().to_vec();
        let _ = menu.averages_by_course();
        assert_eq!(menu.items(), before.as_slice());
    }

    #[test]
    fn sort_by_course_groups_dessert_main_starter() {
        let mut menu = sample_menu();
        menu.sort_by_course();
        let labels: Vec<&str> = menu.items().iter().map(|i| i.course.label()).collect();
        assert_eq!(labels, vec!["Dessert", "Main", "Main", "Starter"]);
    }

    #[test]
    fn sort_by_course_is_stable_within_a_course() {
        let mut menu = sample_menu();
        menu.sort_by_course();
        let mains: Vec<&str> = menu
            .items()
            .iter()
            .filter(|i| i.course == Course::Main)
            .map(|i| i.name.as_str())
            .collect();
        // Steak was inserted before Pasta and must stay ahead of it
        assert_eq!(mains, vec!["Steak", "Pasta"]);
    }

    #[test]
    fn sort_by_price_is_ascending_and_idempotent() {
        let mut menu = sample_menu();
        menu.sort_by_price();
        let once: Vec<f64> = menu.items().iter().map(|i| i.price).collect();
        assert!(once.windows(2).all(|w| w[0] <= w[1]));

        menu.sort_by_price();
        let twice: Vec<f64> = menu.items().iter().map(|i| i.price).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_by_price_keeps_equal_prices_in_insertion_order() {
        let mut menu = Menu::new();
        menu.add(&draft("Flat White", "Double shot", Course::Dessert, "32")).unwrap();
        menu.add(&draft("Espresso", "Single origin", Course::Dessert, "32")).unwrap();

        menu.sort_by_price();
        let names: Vec<&str> = menu.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Flat White", "Espresso"]);
    }
}
