pub mod growth;
pub mod scorer;

pub use growth::*;
pub use scorer::*;
