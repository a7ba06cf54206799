//! Page category constants.
//!
//! Every page rendered in the content area declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_deal--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector and it leads straight to `domain/a002_deal/`.

/// List of records with an inline create form.
pub const PAGE_CAT_LIST: &str = "list";

/// Overview / summary dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System page (sign-in).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && !cat.is_empty())
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// A page id is consistent with its declared category when the category is
/// known and the id ends in `--{category}`.
pub fn is_consistent_page(id: &str, category: &str) -> bool {
    is_known_category(category)
        && matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && cat == category)
}
