pub mod parser;
pub mod types;

// Re-export main types
pub use parser::{class_list, parse_class, ParseError};
pub use types::{ParsedClass, ValueKind};
