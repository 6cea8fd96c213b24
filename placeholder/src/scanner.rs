use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::Path,
};

use regex::bytes::Regex;
use tracing::{debug, error};

use crate::delimiter::Delimiter;

/// Finds placeholder names in file contents
pub struct Scanner {
    pattern: Regex,
}

impl Scanner {
    pub fn new(delimiter: &Delimiter) -> Self {
        Self {
            pattern: Regex::new(&delimiter.pattern())
                .expect("escaped delimiters always form a valid pattern"),
        }
    }

    /// Every placeholder name in `input`, in order of appearance, duplicates included
    ///
    /// Text between delimiters that isn't a valid name is skipped.
    pub fn scan(&self, input: &[u8]) -> Vec<String> {
        self.pattern
            .captures_iter(input)
            .filter_map(|captures| captures.get(1))
            .map(|name| String::from_utf8_lossy(name.as_bytes()).into_owned())
            .collect()
    }

    /// Placeholder names across files, sorted and without duplicates
    ///
    /// A file that can't be read is logged and contributes no names.
    pub fn scan_files<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<String> {
        let mut names = vec![];

        for path in paths {
            let path = path.as_ref();

            match fs::read(path) {
                Ok(content) => {
                    let found = self.scan(&content);
                    debug!(path = %path.display(), placeholders = found.len(), "scanned file");
                    names.extend(found);
                }
                Err(err) => {
                    error!(path = %path.display(), error = %err, "Couldn't read file");
                }
            }
        }

        sort_unique(names)
    }
}

/// Every placeholder name in `input`, in order of appearance, duplicates included
pub fn scan(input: &[u8], delimiter: &Delimiter) -> Vec<String> {
    Scanner::new(delimiter).scan(input)
}

/// Placeholder names in `input`, sorted and without duplicates
pub fn list_unique(input: &[u8], delimiter: &Delimiter) -> Vec<String> {
    sort_unique(scan(input, delimiter))
}

/// Placeholder names across files, sorted and without duplicates
pub fn scan_files<P: AsRef<Path>>(paths: &[P], delimiter: &Delimiter) -> Vec<String> {
    Scanner::new(delimiter).scan_files(paths)
}

/// Remove duplicate names. The order of the result is unspecified.
pub fn uniq(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .collect::<HashSet<String>>()
        .into_iter()
        .collect()
}

/// Remove duplicate names and sort the rest in ascending order
pub fn sort_unique(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
