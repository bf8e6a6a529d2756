//! # verstamp
//!
//! A library for bumping semantic versions and stamping them, together with build dates, into
//! arbitrary text files ahead of a release.
//!
//! ## Examples
//!
//! Bump a version and persist it between runs:
//!
//! ```
//! use verstamp::prelude::*;
//!
//! let dir = std::env::temp_dir();
//! let store = VersionStore::new(&dir).with_file_name("verstamp-doctest.ser");
//!
//! let mut version = Version::parse("v2.09.01-alpha").unwrap();
//! assert_eq!("v2.9.2-alpha", version.bump(SemLevel::Patch, 1).unwrap());
//! store.save(&version).unwrap();
//! assert_eq!(version, store.load().unwrap());
//! # store.remove().unwrap();
//! ```
//!
//! Stamp it into a line below a marker:
//!
//! ```
//! use verstamp::prelude::*;
//!
//! let injector = VersionInjector::new(&Version::parse("1.3.0").unwrap());
//! let text = format!("-- {}\nlocal version = \"v1.2.9\"\n", VersionInjector::DEFAULT_MARKER);
//! let mut lines = split_lines(&text);
//! inject_lines(&mut lines, &injector).unwrap();
//! assert_eq!("local version = \"v1.3.0\"\n", lines[1]);
//! ```
//!
//! Or stamp a date, written however the line already writes one:
//!
//! ```
//! use verstamp::prelude::*;
//!
//! let date = Date::explicit(2024, 3, 15).unwrap();
//! let injector = DateInjector::new(&date, &DateFormat::new("%b %-d, %Y").unwrap());
//! assert_eq!(
//!     "Released:\tMar 15, 2024 (stable)\n",
//!     injector.substitute("Released:\t24.09.2023 (stable)\n").unwrap(),
//! );
//! ```
//!
//! ## Important Terms
//!
//! - **Version**: `major.minor`, an optional `.patch`, and an optional `-build` tag. It's modeled
//!   by the [`Version`] enum and always renders with a leading `v`.
//! - **Marker**: A literal substring. The line directly below each line holding it is a *target*.
//! - **Strategy**: Something that rewrites a target line. See [`Substitute`],
//!   [`VersionInjector`] and [`DateInjector`].
//!
//! ## Prelude
//!
//! verstamp provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use verstamp::prelude::*;
//! ```
#![warn(missing_docs)]

mod date;
mod error;
mod inject;
mod level;
mod program;
mod store;
mod version;

pub use crate::date::{Date, DateFormat};
pub use crate::error::{DateError, InjectError, ProgramError, StoreError, VersionError};
pub use crate::inject::{
    find_date, inject_file, inject_lines, split_lines, DateInjector, FoundDate, Runs, Substitute,
    VersionInjector,
};
pub use crate::level::SemLevel;
pub use crate::program::{LineCallback, Program};
pub use crate::store::VersionStore;
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use verstamp::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::inject_file;
    #[doc(no_inline)]
    pub use crate::inject_lines;
    #[doc(no_inline)]
    pub use crate::split_lines;
    #[doc(no_inline)]
    pub use crate::Date;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::DateFormat;
    #[doc(no_inline)]
    pub use crate::DateInjector;
    #[doc(no_inline)]
    pub use crate::InjectError;
    #[doc(no_inline)]
    pub use crate::Program;
    #[doc(no_inline)]
    pub use crate::ProgramError;
    #[doc(no_inline)]
    pub use crate::SemLevel;
    #[doc(no_inline)]
    pub use crate::StoreError;
    #[doc(no_inline)]
    pub use crate::Substitute;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
    #[doc(no_inline)]
    pub use crate::VersionInjector;
    #[doc(no_inline)]
    pub use crate::VersionStore;
}
