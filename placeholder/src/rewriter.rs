use aho_corasick::{AhoCorasick, MatchKind};
use errors::RewriteError;

use crate::{delimiter::Delimiter, resolver::ValueMapping};

/// Replace every placeholder for a key in `values` with its value
///
/// All keys are replaced in a single pass over `input`. Inserted values are
/// never scanned again, so a value containing placeholder text is written
/// as is. Placeholders for keys not in `values` are left untouched.
pub fn apply(
    input: &[u8],
    values: &ValueMapping,
    delimiter: &Delimiter,
) -> Result<Vec<u8>, RewriteError> {
    if values.is_empty() {
        return Ok(input.to_vec());
    }

    let (placeholders, replacements): (Vec<String>, Vec<&[u8]>) = values
        .iter()
        .map(|(key, value)| (delimiter.placeholder(key), value.as_bytes()))
        .unzip();

    // Leftmost-longest so a key never matches as the prefix of another
    let matcher = AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(&placeholders)
        .map_err(|err| RewriteError::MatcherError {
            keys: placeholders.len(),
            message: err.to_string(),
        })?;

    Ok(matcher.replace_all_bytes(input, &replacements))
}
