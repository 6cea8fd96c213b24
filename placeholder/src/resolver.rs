use std::collections::{BTreeMap, BTreeSet};

use errors::ResolverError;
use provider::ValueProvider;

/// Placeholder names mapped to their resolved values
pub type ValueMapping = BTreeMap<String, String>;

/// Look up a value for every key
///
/// Keys without a value don't stop the lookup. They are all reported
/// together, sorted, in [ResolverError::UnresolvedKeys].
pub fn resolve<V: ValueProvider + ?Sized>(
    keys: &[String],
    provider: &V,
) -> Result<ValueMapping, ResolverError> {
    let mut values = ValueMapping::new();
    let mut missing = BTreeSet::new();

    for key in keys {
        match provider.resolve(key) {
            Some(value) => {
                values.insert(key.clone(), value);
            }
            None => {
                missing.insert(key.clone());
            }
        }
    }

    if !missing.is_empty() {
        return Err(ResolverError::UnresolvedKeys(missing.into_iter().collect()));
    }

    Ok(values)
}
