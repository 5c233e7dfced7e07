pub mod owner;
pub mod property;

pub use owner::*;
pub use property::*;
