pub mod categories;
pub mod rentable_items;
