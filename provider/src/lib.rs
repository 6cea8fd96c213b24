pub use env::EnvironmentProvider;
pub use file::{StructuredFileProvider, ValuesFormat};
pub use properties::parse_properties;

mod env;
mod file;
mod properties;

/// A source of placeholder values
///
/// Returns `None` when the provider has no value for `key`. A value that is
/// present but empty is still `Some("")`.
pub trait ValueProvider {
    fn resolve(&self, key: &str) -> Option<String>;
}

impl<T: ValueProvider + ?Sized> ValueProvider for &T {
    fn resolve(&self, key: &str) -> Option<String> {
        (**self).resolve(key)
    }
}

impl<T: ValueProvider + ?Sized> ValueProvider for Box<T> {
    fn resolve(&self, key: &str) -> Option<String> {
        (**self).resolve(key)
    }
}
