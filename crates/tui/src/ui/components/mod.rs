pub mod banner;
pub mod hints;
