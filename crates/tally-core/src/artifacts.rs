pub mod locator;
pub mod marker;

pub use locator::Locator;
