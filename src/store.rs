//! Persists a [`Version`] to a fixed file inside a directory, so that a version can be bumped
//! across invocations.
//!
//! ## Blob format
//!
//! All integers are little-endian.
//!
//! ```text
//! magic:   [u8; 4] = "VSTP"
//! format:  u8      = 1
//! version: shape
//!
//! shape := 0x00 major:u64 minor:u64                       (plain)
//!        | 0x01 major:u64 minor:u64 patch:u64             (with patch)
//!        | 0x02 shape len:u32 build:[u8; len]             (with build, inner shape is 0 or 1)
//! ```
use crate::{error::StoreError, version::Version};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

const MAGIC: &[u8; 4] = b"VSTP";
const FORMAT_VERSION: u8 = 1;

const TAG_PLAIN: u8 = 0;
const TAG_WITH_PATCH: u8 = 1;
const TAG_WITH_BUILD: u8 = 2;

/// Saves and loads a [`Version`] at `<dir>/<file name>`.
///
/// ```
/// use verstamp::prelude::*;
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = VersionStore::new(dir.path());
/// assert!(!store.loadable());
///
/// store.save(&Version::parse("2.9.1-beta").unwrap()).unwrap();
/// assert!(store.loadable());
/// assert_eq!("v2.9.1-beta", store.load().unwrap().to_string());
/// ```
#[derive(Debug, Clone)]
pub struct VersionStore {
    dir: PathBuf,
    file: PathBuf,
}

impl VersionStore {
    /// File name used unless [`VersionStore::with_file_name`] says otherwise.
    pub const DEFAULT_FILE_NAME: &'static str = "Version.ser";

    /// A store for the directory `dir`. Nothing is touched on disk until a method is called.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let file = dir.join(Self::DEFAULT_FILE_NAME);
        Self { dir, file }
    }

    /// Uses `file_name` inside the same directory instead of the default.
    pub fn with_file_name(mut self, file_name: impl AsRef<Path>) -> Self {
        self.file = self.dir.join(file_name);
        self
    }

    /// Full path of the blob.
    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Whether a version can be loaded: the directory exists and the blob is a regular file.
    /// Never fails.
    pub fn loadable(&self) -> bool {
        self.check_dir().is_ok() && self.check_file().is_ok()
    }

    /// Writes `version` to the blob, overwriting any previous one.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the directory does not exist.
    /// - [`StoreError::InvalidState`] if the directory path is not a directory.
    /// - [`StoreError::Io`] if writing fails.
    pub fn save(&self, version: &Version) -> Result<(), StoreError> {
        self.check_dir()?;
        fs::write(&self.file, encode(version))?;
        debug!(path = %self.file.display(), %version, "saved version");
        Ok(())
    }

    /// Reads the version previously written by [`VersionStore::save`], with its exact shape and
    /// build tag.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the directory or the blob does not exist.
    /// - [`StoreError::InvalidState`] if either exists but is of the wrong kind.
    /// - [`StoreError::Corrupt`] if the blob cannot be decoded.
    pub fn load(&self) -> Result<Version, StoreError> {
        self.check_dir()?;
        self.check_file()?;
        let version = decode(&fs::read(&self.file)?)?;
        debug!(path = %self.file.display(), %version, "loaded version");
        Ok(version)
    }

    /// Deletes the blob.
    ///
    /// # Errors
    ///
    /// Same as [`VersionStore::load`], minus [`StoreError::Corrupt`].
    pub fn remove(&self) -> Result<(), StoreError> {
        self.check_dir()?;
        self.check_file()?;
        fs::remove_file(&self.file)?;
        Ok(())
    }

    fn check_dir(&self) -> Result<(), StoreError> {
        check_path(&self.dir, Path::is_dir)
    }

    fn check_file(&self) -> Result<(), StoreError> {
        check_path(&self.file, Path::is_file)
    }
}

fn check_path(path: &Path, is_kind: fn(&Path) -> bool) -> Result<(), StoreError> {
    if !path.exists() {
        Err(StoreError::NotFound {
            path: path.to_owned(),
        })
    } else if !is_kind(path) {
        Err(StoreError::InvalidState {
            path: path.to_owned(),
        })
    } else {
        Ok(())
    }
}

/// Encodes `version` as a blob. See the [module docs](self) for the layout.
fn encode(version: &Version) -> Vec<u8> {
    let mut buf = Vec::with_capacity(64);
    buf.extend_from_slice(MAGIC);
    buf.push(FORMAT_VERSION);
    encode_shape(version, &mut buf);
    buf
}

fn encode_shape(version: &Version, buf: &mut Vec<u8>) {
    match version {
        Version::Plain { major, minor } => {
            buf.push(TAG_PLAIN);
            buf.extend_from_slice(&major.to_le_bytes());
            buf.extend_from_slice(&minor.to_le_bytes());
        }
        Version::WithPatch {
            major,
            minor,
            patch,
        } => {
            buf.push(TAG_WITH_PATCH);
            buf.extend_from_slice(&major.to_le_bytes());
            buf.extend_from_slice(&minor.to_le_bytes());
            buf.extend_from_slice(&patch.to_le_bytes());
        }
        Version::WithBuild { inner, build } => {
            buf.push(TAG_WITH_BUILD);
            encode_shape(inner, buf);
            // build tags are validated alphanumerics, far below u32::MAX bytes
            buf.extend_from_slice(&(build.len() as u32).to_le_bytes());
            buf.extend_from_slice(build.as_bytes());
        }
    }
}

/// Decodes a blob produced by [`encode`].
///
/// # Errors
///
/// - Returns [`StoreError::Corrupt`] on a bad magic, an unknown format version or shape tag, a
///   truncated blob, trailing bytes, or an invalid build tag.
fn decode(bytes: &[u8]) -> Result<Version, StoreError> {
    let mut reader = Reader { bytes };

    if reader.take(MAGIC.len())? != MAGIC {
        return Err(corrupt("bad magic"));
    }
    let format = reader.u8()?;
    if format != FORMAT_VERSION {
        return Err(corrupt(format!("unsupported format version {format}")));
    }

    let version = decode_shape(&mut reader, true)?;
    if !reader.bytes.is_empty() {
        return Err(corrupt(format!("{} trailing bytes", reader.bytes.len())));
    }
    Ok(version)
}

fn decode_shape(reader: &mut Reader<'_>, allow_build: bool) -> Result<Version, StoreError> {
    match reader.u8()? {
        TAG_PLAIN => Ok(Version::plain(reader.u64()?, reader.u64()?)),
        TAG_WITH_PATCH => Ok(Version::with_patch(
            reader.u64()?,
            reader.u64()?,
            reader.u64()?,
        )),
        TAG_WITH_BUILD if allow_build => {
            let inner = decode_shape(reader, false)?;
            let len = reader.u32()? as usize;
            let build = std::str::from_utf8(reader.take(len)?)
                .map_err(|_| corrupt("build tag is not UTF-8"))?;
            inner
                .with_build(build)
                .map_err(|e| corrupt(e.to_string()))
        }
        TAG_WITH_BUILD => Err(corrupt("nested build tag")),
        tag => Err(corrupt(format!("unknown shape tag {tag}"))),
    }
}

fn corrupt(reason: impl Into<String>) -> StoreError {
    StoreError::Corrupt {
        reason: reason.into(),
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], StoreError> {
        if self.bytes.len() < len {
            return Err(corrupt("unexpected end of blob"));
        }
        let (head, rest) = self.bytes.split_at(len);
        self.bytes = rest;
        Ok(head)
    }

    fn u8(&mut self) -> Result<u8, StoreError> {
        Ok(self.take(1)?[0])
    }

    fn u32(&mut self) -> Result<u32, StoreError> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(buf))
    }

    fn u64(&mut self) -> Result<u64, StoreError> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(buf))
    }
}
