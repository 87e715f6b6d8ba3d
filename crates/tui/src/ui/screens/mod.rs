pub mod categories;
pub mod edit_category;
