//! Marker-driven line injection.
//!
//! A *marker* is a literal substring. Wherever a line contains it, the line directly below is
//! handed to a [`Substitute`] strategy, and the strategy's result replaces that line. A file is
//! only rewritten once every substitution has succeeded in memory.
//!
//! ```
//! use verstamp::prelude::*;
//!
//! let injector = VersionInjector::new(&Version::parse("v9.99.999").unwrap());
//! let text = format!("{}\nlocal version = \"v2.4.1\"\n", VersionInjector::DEFAULT_MARKER);
//! let mut lines = split_lines(&text);
//! assert_eq!(1, inject_lines(&mut lines, &injector).unwrap());
//! assert_eq!("local version = \"v9.99.999\"\n", lines[1]);
//! ```
mod date;
mod fuzzy;
mod version;

pub use self::date::{DateInjector, Runs};
pub use self::fuzzy::{find_date, FoundDate};
pub use self::version::VersionInjector;

use crate::error::InjectError;
use std::{fs, path::Path};
use tracing::{debug, info};

/// A strategy that rewrites the line below each of its markers.
pub trait Substitute {
    /// The marker designating the line below it as a target.
    fn marker(&self) -> &str;

    /// Returns the replacement for `line`. `line` includes its line terminator, if it had one,
    /// and the replacement should keep it.
    fn substitute(&self, line: &str) -> Result<String, InjectError>;
}

/// Splits `text` into lines that keep their terminators, so that concatenating them gives back
/// `text` exactly.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}

/// Runs one substitution pass over `lines` in place and returns the number of lines substituted.
///
/// A line substituted as a target is not itself scanned for the marker. A marker on the last line
/// has no target and is ignored.
///
/// # Errors
///
/// - Returns [`InjectError::MarkerNotFound`] if nothing was substituted. `lines` is unchanged.
/// - Returns whatever the strategy returns on its first failure. `lines` may be partly
///   substituted, so callers should discard it.
pub fn inject_lines<S: Substitute + ?Sized>(
    lines: &mut [String],
    strategy: &S,
) -> Result<usize, InjectError> {
    let marker = strategy.marker();
    let mut substituted = 0;
    let mut index = 0;

    while index < lines.len() {
        let target = index + 1;
        if lines[index].contains(marker) && target < lines.len() {
            let replacement = strategy.substitute(&lines[target])?;
            debug!(line = target + 1, "substituted line below marker");
            lines[target] = replacement;
            substituted += 1;
            index = target + 1;
        } else {
            index += 1;
        }
    }

    if substituted == 0 {
        return Err(InjectError::MarkerNotFound {
            marker: marker.to_owned(),
        });
    }
    Ok(substituted)
}

/// Reads `path`, runs [`inject_lines`] over it, and rewrites it in a single write. On any error
/// the file is left untouched.
///
/// Returns the number of lines substituted.
pub fn inject_file<S: Substitute + ?Sized>(
    path: impl AsRef<Path>,
    strategy: &S,
) -> Result<usize, InjectError> {
    let path = path.as_ref();
    let io_error = |source| InjectError::Io {
        path: path.to_owned(),
        source,
    };

    let text = fs::read_to_string(path).map_err(io_error)?;
    let mut lines = split_lines(&text);
    let substituted = inject_lines(&mut lines, strategy)?;
    fs::write(path, lines.concat()).map_err(io_error)?;

    info!(path = %path.display(), substituted, "injected");
    Ok(substituted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Upper-cases the target, or fails on lines containing `boom`.
    struct Shout;

    impl Substitute for Shout {
        fn marker(&self) -> &str {
            "@@"
        }

        fn substitute(&self, line: &str) -> Result<String, InjectError> {
            if line.contains("boom") {
                return Err(InjectError::NoVersionToken {
                    line: line.to_owned(),
                });
            }
            Ok(line.to_uppercase())
        }
    }

    fn run(text: &str) -> Result<String, InjectError> {
        let mut lines = split_lines(text);
        inject_lines(&mut lines, &Shout)?;
        Ok(lines.concat())
    }

    #[test]
    fn test_split_lines_is_lossless() {
        let texts = ["", "a", "a\n", "a\r\nb", "\n\n", "a\nb\n\nc"];
        for text in texts {
            assert_eq!(text, split_lines(text).concat());
        }
    }

    #[test]
    fn test_substitutes_line_below_marker() {
        let args = [
            ("@@\na\nb\n", "@@\nA\nb\n"),
            ("x @@ y\na", "x @@ y\nA"),
            ("@@\na\n@@\nb\n", "@@\nA\n@@\nB\n"),
            ("a\r\n@@\r\nb\r\n", "a\r\n@@\r\nB\r\n"),
        ];

        for (text, expected) in args {
            assert_eq!(expected, run(text).unwrap());
        }
    }

    #[test]
    fn test_substituted_line_is_not_a_marker() {
        // the target contains the marker too, but is consumed rather than scanned
        assert_eq!("@@\nA @@\nc\n", run("@@\na @@\nc\n").unwrap());
    }

    #[test]
    fn test_consecutive_markers() {
        // the second marker line is the target of the first
        assert_eq!("@@\n@@\nc\n", run("@@\n@@\nc\n").unwrap());
    }

    #[test]
    fn test_marker_on_last_line() {
        assert_eq!("@@\nA\n@@", run("@@\na\n@@").unwrap());
        assert!(matches!(run("a\n@@"), Err(InjectError::MarkerNotFound { .. })));
        assert!(matches!(run("a\n@@\n"), Err(InjectError::MarkerNotFound { .. })));
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        struct Letters;
        impl Substitute for Letters {
            fn marker(&self) -> &str {
                "Mark"
            }
            fn substitute(&self, line: &str) -> Result<String, InjectError> {
                Ok(line.to_uppercase())
            }
        }

        let mut lines = split_lines("mark\na\n");
        assert!(matches!(
            inject_lines(&mut lines, &Letters),
            Err(InjectError::MarkerNotFound { .. })
        ));
    }

    #[test]
    fn test_no_marker() {
        for text in ["", "a\nb\n", "@\n@\n"] {
            assert!(matches!(run(text), Err(InjectError::MarkerNotFound { .. })));
        }
    }

    #[test]
    fn test_file_rewritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, "keep\n@@\nchange\n@@\nalso\ttab\r\nend").unwrap();

        assert_eq!(2, inject_file(&path, &Shout).unwrap());
        assert_eq!(
            "keep\n@@\nCHANGE\n@@\nALSO\tTAB\r\nend",
            fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn test_file_untouched_on_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.txt");
        let args = [
            "nothing to see\n",
            // first substitution succeeds in memory, second fails
            "@@\nfine\n@@\nboom\n",
        ];

        for text in args {
            fs::write(&path, text).unwrap();
            assert!(inject_file(&path, &Shout).is_err());
            assert_eq!(text, fs::read_to_string(&path).unwrap());
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            inject_file(dir.path().join("absent"), &Shout),
            Err(InjectError::Io { .. })
        ));
    }
}
