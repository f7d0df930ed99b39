mod categories;
mod errors;
mod health;
mod items;
mod subcategories;

pub use categories::*;
pub use errors::*;
pub use health::*;
pub use items::*;
pub use subcategories::*;
