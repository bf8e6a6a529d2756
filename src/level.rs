use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

use crate::error::VersionError;

/// A level of a semantic version that can be bumped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemLevel {
    /// The major level. It is greater than the minor and patch levels.
    Major,
    /// The minor level. It is less than the major level and greater than the patch level.
    Minor,
    /// The patch level. It is less than the major and minor levels.
    Patch,
}

impl SemLevel {
    /// All levels, most significant first.
    pub const ALL: [SemLevel; 3] = [SemLevel::Major, SemLevel::Minor, SemLevel::Patch];

    /// Lowercase name of this level.
    pub fn name(&self) -> &'static str {
        match self {
            SemLevel::Major => "major",
            SemLevel::Minor => "minor",
            SemLevel::Patch => "patch",
        }
    }

    fn order_key(&self) -> u8 {
        match self {
            SemLevel::Major => 0,
            SemLevel::Minor => 1,
            SemLevel::Patch => 2,
        }
    }
}

impl PartialOrd for SemLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse it so e.g. major > minor
        other.order_key().cmp(&self.order_key())
    }
}

impl Display for SemLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SemLevel {
    type Err = VersionError;

    /// Case-insensitive: `"MAJOR"`, `"Minor"` and `"patch"` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemLevel::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VersionError::InvalidArgument {
                reason: format!("Unknown bump level `{s}`, expected one of major, minor, patch"),
            })
    }
}
