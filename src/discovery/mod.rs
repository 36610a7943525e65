pub mod locator;
pub mod options;

pub use locator::{locate, locate_with, Locator, Matches};
pub use options::LocateOptions;
