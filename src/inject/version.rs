use super::Substitute;
use crate::{error::InjectError, version::Version};
use regex::Regex;
use std::sync::LazyLock;

/// Version-like tokens, most specific first. Group 1 is everything before the token, group 2
/// everything after it.
static VERSION_TOKEN_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        // v2.09.01-alpha
        r"(?s)^(.*?)[vV]?[0-9]+\.[0-9]+\.[0-9]+-[A-Za-z0-9]+(.*)$",
        // v1.0-beta
        r"(?s)^(.*?)[vV]?[0-9]+\.[0-9]+-[A-Za-z0-9]+(.*)$",
        // v99.999.9
        r"(?s)^(.*?)[vV]?[0-9]+\.[0-9]+\.[0-9]+(.*)$",
        // v1.0
        r"(?s)^(.*?)[vV]?[0-9]+\.[0-9]+(.*)$",
    ]
    .map(|pattern| Regex::new(pattern).expect("version token pattern should compile"))
});

/// Replaces the version token on the line below each marker with a rendered [`Version`].
///
/// The token may carry a `v` prefix, a patch number, and a build tag. Everything around it is
/// kept as is.
///
/// ```
/// use verstamp::prelude::*;
///
/// let injector = VersionInjector::new(&Version::parse("v9.99.999").unwrap());
/// assert_eq!(
///     "local version = \"v9.99.999\"\n",
///     injector.substitute("local version = \"v2.4.1\"\n").unwrap(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct VersionInjector {
    version: String,
    marker: String,
}

impl VersionInjector {
    /// Marker used unless [`VersionInjector::with_marker`] says otherwise.
    pub const DEFAULT_MARKER: &'static str = "/-- DO NOT MODIFY /--/ [deploy Version Marker] --/";

    /// An injector for `version`, rendered once up front.
    pub fn new(version: &Version) -> Self {
        Self {
            version: version.to_string(),
            marker: Self::DEFAULT_MARKER.to_owned(),
        }
    }

    /// Uses `marker` instead of [`VersionInjector::DEFAULT_MARKER`].
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}

impl Substitute for VersionInjector {
    fn marker(&self) -> &str {
        &self.marker
    }

    fn substitute(&self, line: &str) -> Result<String, InjectError> {
        VERSION_TOKEN_PATTERNS
            .iter()
            .find_map(|pattern| pattern.captures(line))
            .map(|captures| format!("{}{}{}", &captures[1], self.version, &captures[2]))
            .ok_or_else(|| InjectError::NoVersionToken {
                line: line.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inject::inject_file;
    use rstest::rstest;
    use std::fs;
    use tempfile::tempdir;

    fn injector(version: &str) -> VersionInjector {
        VersionInjector::new(&Version::parse(version).unwrap())
    }

    #[rstest]
    #[case("local version = \"v2.4.1\"\n", "local version = \"v9.99.999\"\n")]
    #[case("VERSION = 'v2.09.01-alpha' -- keep", "VERSION = 'v9.99.999' -- keep")]
    #[case("v1.0-beta", "v9.99.999")]
    #[case("release 1.0 (stable)\r\n", "release v9.99.999 (stable)\r\n")]
    #[case("a v1.2 and v3.4", "a v9.99.999 and v3.4")]
    #[case("prefix-v12.0.3-rc1-suffix", "prefix-v9.99.999-suffix")]
    fn test_substitute(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(expected, injector("v9.99.999").substitute(line).unwrap());
    }

    #[test]
    fn test_most_specific_pattern_wins() {
        // the build+patch pattern matches first, even though a plain pattern would match earlier
        let line = "1.2 then 3.4.5-x";
        assert_eq!("1.2 then v2.0", injector("2.0").substitute(line).unwrap());
    }

    #[test]
    fn test_build_tag_injected() {
        let line = "ver: v1.0";
        assert_eq!("ver: v1.3.0-gold", injector("1.3.0-gold").substitute(line).unwrap());
    }

    #[test]
    fn test_no_version_token() {
        for line in ["", "no version here\n", "v1", "1-2-3", "v.1"] {
            assert!(matches!(
                injector("1.0").substitute(line),
                Err(InjectError::NoVersionToken { .. })
            ));
        }
    }

    #[test]
    fn test_inject_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("init.lua");
        let text = format!(
            "-- header\n-- {}\nlocal version = \"v2.4.1\"\nlocal other = \"v2.4.1\"\n",
            VersionInjector::DEFAULT_MARKER
        );
        fs::write(&path, &text).unwrap();

        assert_eq!(1, inject_file(&path, &injector("v9.99.999")).unwrap());
        assert_eq!(
            text.replacen("\"v2.4.1\"", "\"v9.99.999\"", 1),
            fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn test_custom_marker() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "# stamp\nversion = \"0.1.0\"\n").unwrap();

        let custom = injector("0.2.0").with_marker("# stamp");
        inject_file(&path, &custom).unwrap();
        assert_eq!("# stamp\nversion = \"v0.2.0\"\n", fs::read_to_string(&path).unwrap());

        let default = injector("0.3.0");
        assert!(matches!(
            inject_file(&path, &default),
            Err(InjectError::MarkerNotFound { .. })
        ));
    }
}
