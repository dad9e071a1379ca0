pub mod records;
pub mod reports;

pub use records::*;
pub use reports::*;
