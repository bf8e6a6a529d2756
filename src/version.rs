use crate::{error::VersionError, level::SemLevel};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};
use regex::Regex;
use std::sync::LazyLock;

/// `major.minor`, then an optional `.patch` and an optional `-build`, found anywhere in the text.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\.([0-9]+)(?:\.([0-9]+))?(?:-([A-Za-z0-9]+))?")
        .expect("version pattern should compile")
});

/// A semantic version: a major and minor number, an optional patch number, and an optional build
/// tag.
///
/// The shape is fixed at parse time: a version parsed from `1.2` has no patch field, while one
/// parsed from `1.2.0` does. Both compare equal, because ordering looks only at
/// `(major, minor, patch-or-0)`. The build tag is decorative: it is rendered, but never affects
/// equality or ordering.
///
/// # Examples
///
/// ```
/// use verstamp::prelude::*;
///
/// let mut version: Version = "v01.12.0001-vanilla".parse().unwrap();
/// assert_eq!("v1.12.1-vanilla", version.to_string());
/// assert_eq!(Some("vanilla"), version.build());
///
/// let next = version.bump(SemLevel::Patch, 2).unwrap();
/// assert_eq!("v1.12.3-vanilla", next);
///
/// let alpha: Version = "1.2.3-alpha".parse().unwrap();
/// let beta: Version = "1.2.3-beta".parse().unwrap();
/// assert_eq!(alpha, beta);
/// ```
#[derive(Debug, Clone)]
pub enum Version {
    /// `v{major}.{minor}`
    Plain {
        /// Major number.
        major: u64,
        /// Minor number.
        minor: u64,
    },
    /// `v{major}.{minor}.{patch}`
    WithPatch {
        /// Major number.
        major: u64,
        /// Minor number.
        minor: u64,
        /// Patch number.
        patch: u64,
    },
    /// `{inner}-{build}`. The inner version is never itself a `WithBuild`.
    WithBuild {
        /// The numeric part. All numeric operations are forwarded to it.
        inner: Box<Version>,
        /// Alphanumeric build tag.
        build: String,
    },
}

impl Version {
    /// A version without a patch field.
    pub fn plain(major: u64, minor: u64) -> Self {
        Version::Plain { major, minor }
    }

    /// A version with a patch field.
    pub fn with_patch(major: u64, minor: u64, patch: u64) -> Self {
        Version::WithPatch {
            major,
            minor,
            patch,
        }
    }

    /// Decorates this version with a build tag, replacing any tag it already had.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::InvalidArgument`] if `build` is empty or not alphanumeric.
    pub fn with_build(self, build: impl Into<String>) -> Result<Self, VersionError> {
        let build = build.into();
        if build.is_empty() || !build.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(VersionError::InvalidArgument {
                reason: format!("Build tag `{build}` should be one or more ASCII alphanumerics"),
            });
        }
        Ok(Version::WithBuild {
            inner: Box::new(self.without_build()),
            build,
        })
    }

    /// Returns this version with its build tag (if any) removed.
    pub fn without_build(self) -> Self {
        match self {
            Version::WithBuild { inner, .. } => *inner,
            other => other,
        }
    }

    /// Parses the first `major.minor[.patch][-build]` found in `text`.
    ///
    /// Text before the numbers (such as a `v` prefix or `release-`) is ignored, as is text after
    /// them. Leading zeros are dropped: `01` parses as `1`.
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::InvalidFormat`] if no `major.minor` pair is present, or a number
    ///   does not fit in 64 bits.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let invalid = || VersionError::InvalidFormat {
            input: text.to_owned(),
        };
        let number = |digits: &str| digits.parse::<u64>().map_err(|_| invalid());

        let captures = VERSION_PATTERN.captures(text).ok_or_else(invalid)?;
        let major = number(&captures[1])?;
        let minor = number(&captures[2])?;

        let version = match captures.get(3) {
            Some(patch) => Version::with_patch(major, minor, number(patch.as_str())?),
            None => Version::plain(major, minor),
        };

        match captures.get(4) {
            Some(build) => version.with_build(build.as_str()),
            None => Ok(version),
        }
    }

    /// The major number.
    pub fn major(&self) -> u64 {
        match self {
            Version::Plain { major, .. } | Version::WithPatch { major, .. } => *major,
            Version::WithBuild { inner, .. } => inner.major(),
        }
    }

    /// The minor number.
    pub fn minor(&self) -> u64 {
        match self {
            Version::Plain { minor, .. } | Version::WithPatch { minor, .. } => *minor,
            Version::WithBuild { inner, .. } => inner.minor(),
        }
    }

    /// The patch number, or `0` if this version's shape has no patch field.
    pub fn patch(&self) -> u64 {
        match self {
            Version::Plain { .. } => 0,
            Version::WithPatch { patch, .. } => *patch,
            Version::WithBuild { inner, .. } => inner.patch(),
        }
    }

    /// Whether this version's shape carries a patch field.
    pub fn has_patch(&self) -> bool {
        match self {
            Version::Plain { .. } => false,
            Version::WithPatch { .. } => true,
            Version::WithBuild { inner, .. } => inner.has_patch(),
        }
    }

    /// The build tag, if any.
    pub fn build(&self) -> Option<&str> {
        match self {
            Version::WithBuild { build, .. } => Some(build),
            _ => None,
        }
    }

    /// Bumps `level` by `amount` in place and returns the new rendered version.
    ///
    /// - [`SemLevel::Major`]: major increases, minor and patch (if present) reset to zero.
    /// - [`SemLevel::Minor`]: minor increases, patch (if present) resets to zero.
    /// - [`SemLevel::Patch`]: patch increases. A version without a patch field gains one, set to
    ///   `amount`.
    ///
    /// The build tag is kept.
    ///
    /// # Example
    ///
    /// ```
    /// use verstamp::prelude::*;
    ///
    /// let mut version = Version::parse("34.999.5").unwrap();
    /// assert_eq!("v34.999.6", version.bump(SemLevel::Patch, 1).unwrap());
    /// assert_eq!("v34.1000.0", version.bump(SemLevel::Minor, 1).unwrap());
    /// assert_eq!("v35.0.0", version.bump(SemLevel::Major, 1).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::InvalidArgument`] if `amount` is less than one. The version is
    ///   left unchanged.
    /// - Returns [`VersionError::Overflow`] if the bumped field would not fit in 64 bits. The
    ///   version is left unchanged.
    pub fn bump(&mut self, level: SemLevel, amount: i64) -> Result<String, VersionError> {
        let amount = u64::try_from(amount)
            .ok()
            .filter(|amount| *amount >= 1)
            .ok_or_else(|| VersionError::InvalidArgument {
                reason: format!("Version bump amount must be positive: {amount}"),
            })?;
        self.bump_by(level, amount)?;
        Ok(self.to_string())
    }

    fn bump_by(&mut self, level: SemLevel, amount: u64) -> Result<(), VersionError> {
        let add = |value: u64| value.checked_add(amount).ok_or(VersionError::Overflow { level });

        match self {
            Version::WithBuild { inner, .. } => inner.bump_by(level, amount)?,
            Version::Plain { major, minor } => match level {
                SemLevel::Major => {
                    *major = add(*major)?;
                    *minor = 0;
                }
                SemLevel::Minor => *minor = add(*minor)?,
                SemLevel::Patch => {
                    let promoted = Version::with_patch(*major, *minor, amount);
                    *self = promoted;
                }
            },
            Version::WithPatch {
                major,
                minor,
                patch,
            } => match level {
                SemLevel::Major => {
                    *major = add(*major)?;
                    *minor = 0;
                    *patch = 0;
                }
                SemLevel::Minor => {
                    *minor = add(*minor)?;
                    *patch = 0;
                }
                SemLevel::Patch => *patch = add(*patch)?,
            },
        }

        Ok(())
    }

    fn key(&self) -> (u64, u64, u64) {
        (self.major(), self.minor(), self.patch())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// See [`Version::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    /// Versions are equal when `(major, minor, patch-or-0)` match. Shape and build tag are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Lexicographic on `(major, minor, patch-or-0)`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Display for Version {
    /// Renders `v{major}.{minor}`, then `.{patch}` if the shape has one, then `-{build}` if
    /// tagged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Plain { major, minor } => write!(f, "v{major}.{minor}"),
            Version::WithPatch {
                major,
                minor,
                patch,
            } => write!(f, "v{major}.{minor}.{patch}"),
            Version::WithBuild { inner, build } => write!(f, "{inner}-{build}"),
        }
    }
}
