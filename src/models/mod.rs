mod configs;
mod generate;
mod records;

pub use configs::*;
pub use generate::*;
pub use records::*;
