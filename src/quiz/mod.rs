pub mod loader;
pub mod types;

pub use loader::load_campaign;
pub use types::{Campaign, Level, Question};
