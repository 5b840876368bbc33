pub mod error;
pub mod inventory;
pub mod parser;

pub use error::Error;
