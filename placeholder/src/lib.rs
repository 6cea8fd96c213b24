pub use errors;
pub use errors::PlaceholderError;
pub use provider::{EnvironmentProvider, StructuredFileProvider, ValueProvider, ValuesFormat};

pub use delimiter::{DEFAULT_END, DEFAULT_START, Delimiter, PLACEHOLDER_NAME_PATTERN};
pub use operations::{list, replace, replace_in};
pub use resolver::{ValueMapping, resolve};
pub use scanner::{Scanner, list_unique, scan, scan_files, sort_unique, uniq};

pub mod delimiter;
pub mod operations;
pub mod prelude;
pub mod resolver;
pub mod rewriter;
pub mod scanner;
