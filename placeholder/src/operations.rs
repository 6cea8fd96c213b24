use std::{fs, path::Path};

use errors::{IoError, PlaceholderError};
use provider::ValueProvider;
use tracing::{debug, info};

use crate::{
    delimiter::Delimiter,
    resolver::resolve,
    rewriter::apply,
    scanner::{Scanner, sort_unique},
};

/// List the placeholder names used across files, sorted and without duplicates
///
/// Files that can't be read are logged and skipped.
pub fn list<P: AsRef<Path>>(paths: &[P], delimiter: &Delimiter) -> Vec<String> {
    Scanner::new(delimiter).scan_files(paths)
}

/// Replace placeholders in files with values from `provider`, in place
///
/// Every placeholder across all files is resolved before any file is
/// written. If a value is missing no file is modified. Files are then
/// rewritten one at a time in the order given, and a failure stops at that
/// file without undoing earlier writes.
pub fn replace<P, V>(
    paths: &[P],
    delimiter: &Delimiter,
    provider: &V,
) -> Result<(), PlaceholderError>
where
    P: AsRef<Path>,
    V: ValueProvider + ?Sized,
{
    let scanner = Scanner::new(delimiter);
    let keys = scanner.scan_files(paths);
    let values = resolve(&keys, provider)?;

    debug!(keys = keys.len(), "resolved placeholder values");

    for path in paths {
        let path = path.as_ref();

        let content = fs::read(path).map_err(|err| IoError::read(path, &err))?;
        let replaced = apply(&content, &values, delimiter)?;
        fs::write(path, replaced).map_err(|err| IoError::write(path, &err))?;

        info!(path = %path.display(), "replaced placeholders");
    }

    Ok(())
}

/// Replace placeholders in a buffer with values from `provider`
///
/// Fails without a result if any placeholder has no value.
pub fn replace_in<V: ValueProvider + ?Sized>(
    input: &[u8],
    delimiter: &Delimiter,
    provider: &V,
) -> Result<Vec<u8>, PlaceholderError> {
    let keys = sort_unique(Scanner::new(delimiter).scan(input));
    let values = resolve(&keys, provider)?;

    Ok(apply(input, &values, delimiter)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use errors::ResolverError;
    use pretty_assertions::assert_eq;
    use provider::{EnvironmentProvider, StructuredFileProvider, ValuesFormat};
    use rstest::rstest;

    use super::*;

    const HTML: &str = concat!(
        "<html>\n",
        "<title>%#TITLE#%</title>\n",
        "<p>%#MESSAGE_WITH_COMPOSED_KEY#%</p>\n",
        "<p>%#INDEX#%</p>\n",
        "</html>\n"
    );
    const JS: &str = concat!(
        "var index = %#INDEX#%;\n",
        "var message = \"%#MESSAGE_WITH_COMPOSED_KEY#%\";\n"
    );

    fn env() -> EnvironmentProvider {
        EnvironmentProvider::from_vars([
            ("TITLE", "My title"),
            ("MESSAGE_WITH_COMPOSED_KEY", "This is my message"),
            ("INDEX", "0"),
        ])
    }

    #[test]
    fn replace_in_buffer() {
        let provider = EnvironmentProvider::from_vars([
            ("FIRST", "first"),
            ("SECOND", "second"),
            ("THIRD", "third"),
        ]);

        assert_eq!(
            Ok(b"first azpoerkjapzoje third \n second".to_vec()),
            replace_in(
                b"%#FIRST#% azpoerkjapzoje %#THIRD#% \n %#SECOND#%",
                &Delimiter::default(),
                &provider
            )
        );
    }

    #[test]
    fn replace_in_buffer_with_missing_value() {
        let provider = EnvironmentProvider::from_vars([("FIRST", "first"), ("SECOND", "second")]);

        assert_eq!(
            Err(PlaceholderError::ResolverError(ResolverError::UnresolvedKeys(
                vec!["THIRD".to_string()]
            ))),
            replace_in(
                b"%#FIRST#% azpoerkjapzoje %#THIRD#% \n %#SECOND#%",
                &Delimiter::default(),
                &provider
            )
        );
    }

    #[test]
    fn list_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("example.html");
        let js = dir.path().join("example.js");
        fs::write(&html, HTML).unwrap();
        fs::write(&js, JS).unwrap();

        assert_eq!(
            vec!["INDEX", "MESSAGE_WITH_COMPOSED_KEY", "TITLE"],
            list(&[html, js], &Delimiter::default())
        );
    }

    #[test]
    fn replace_files() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("example.html");
        let js = dir.path().join("example.js");
        fs::write(&html, HTML).unwrap();
        fs::write(&js, JS).unwrap();

        replace(&[&html, &js], &Delimiter::default(), &env()).unwrap();

        assert_eq!(
            "<html>\n<title>My title</title>\n<p>This is my message</p>\n<p>0</p>\n</html>\n",
            fs::read_to_string(&html).unwrap()
        );
        assert_eq!(
            "var index = 0;\nvar message = \"This is my message\";\n",
            fs::read_to_string(&js).unwrap()
        );
    }

    #[test]
    fn replace_files_with_missing_value_modifies_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("example.html");
        let js = dir.path().join("example.js");
        fs::write(&html, HTML).unwrap();
        fs::write(&js, JS).unwrap();

        let provider = EnvironmentProvider::from_vars([("TITLE", "My title"), ("INDEX", "0")]);

        let result = replace(&[&html, &js], &Delimiter::default(), &provider);

        assert_eq!(
            Err(PlaceholderError::ResolverError(ResolverError::UnresolvedKeys(
                vec!["MESSAGE_WITH_COMPOSED_KEY".to_string()]
            ))),
            result
        );
        assert_eq!(HTML, fs::read_to_string(&html).unwrap());
        assert_eq!(JS, fs::read_to_string(&js).unwrap());
    }

    #[test]
    fn replace_files_with_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let js = dir.path().join("example.js");
        let missing = dir.path().join("missing.js");
        fs::write(&js, JS).unwrap();

        let result = replace(&[&js, &missing], &Delimiter::default(), &env());

        assert!(matches!(
            result,
            Err(PlaceholderError::IoError(IoError::ReadError { .. }))
        ));
        assert_eq!(
            "var index = 0;\nvar message = \"This is my message\";\n",
            fs::read_to_string(&js).unwrap()
        );
    }

    #[test]
    fn replace_file_without_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("plain.txt");
        fs::write(&txt, "nothing to see").unwrap();

        let provider = EnvironmentProvider::from_vars(Vec::<(String, String)>::new());

        replace(&[&txt], &Delimiter::default(), &provider).unwrap();

        assert_eq!("nothing to see", fs::read_to_string(&txt).unwrap());
    }

    #[rstest]
    #[case(ValuesFormat::Json, "{\"INDEX\": \"1\", \"MAX_VALUE3\": \"20\"}")]
    #[case(ValuesFormat::Yaml, "INDEX: \"1\"\nMAX_VALUE3: \"20\"\n")]
    #[case(ValuesFormat::Properties, "INDEX=1\nMAX_VALUE3=20\n")]
    fn replace_with_structured_file(#[case] format: ValuesFormat, #[case] content: &str) {
        let dir = tempfile::tempdir().unwrap();
        let js = dir.path().join("loop.js");
        fs::write(&js, "for (i = {{INDEX}}; i < {{MAX_VALUE3}}; i++) {}\n").unwrap();

        let provider = StructuredFileProvider::parse(content, format).unwrap();

        replace(&[&js], &Delimiter::from_literals("{{", "}}"), &provider).unwrap();

        assert_eq!(
            "for (i = 1; i < 20; i++) {}\n",
            fs::read_to_string(&js).unwrap()
        );
    }

    #[test]
    fn replace_in_buffer_with_many_values() {
        let pairs: Vec<(String, String)> = (0..15_000)
            .map(|i| (format!("SOME_LONG_CONFIGURATION_KEY_{i:06}"), i.to_string()))
            .collect();
        let input: String = pairs.iter().map(|(key, _)| format!("%#{key}#%,")).collect();
        let expected: String = pairs.iter().map(|(_, value)| format!("{value},")).collect();

        let provider = EnvironmentProvider::from_vars(pairs);

        assert_eq!(
            Ok(expected.into_bytes()),
            replace_in(input.as_bytes(), &Delimiter::default(), &provider)
        );
    }

    #[test]
    fn replace_with_boxed_provider() {
        let provider: Box<dyn ValueProvider> =
            Box::new(EnvironmentProvider::from_vars([("NAME", "value")]));

        assert_eq!(
            Ok(b"value".to_vec()),
            replace_in(b"%#NAME#%", &Delimiter::default(), provider.as_ref())
        );
    }
}
