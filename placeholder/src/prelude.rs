pub use crate::delimiter::Delimiter;
pub use crate::errors::PlaceholderError;
pub use crate::operations::{list, replace, replace_in};
pub use crate::{EnvironmentProvider, StructuredFileProvider, ValueProvider};
