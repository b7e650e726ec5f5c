//! Whole-value persistence of one serializable record per path key.
//!
//! Each call opens its backing file, transfers the full bincode encoding and
//! closes the handle before returning. Nothing is cached across calls, and
//! the handle is dropped on every exit path, including decode and I/O
//! failures. Concurrent calls against the same path race at the OS level;
//! callers needing that must serialize access themselves.

use std::{
    fs,
    io::{self, BufReader, BufWriter},
    marker::PhantomData,
    path::{Path, PathBuf},
};

use derive_more::with_trait::IsVariant;
use log::{debug, trace};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("parent path `{0}` exists but is not a directory")]
    NotADirectory(PathBuf),
    #[error("no data found at `{0}`")]
    NotFound(PathBuf),
    #[error("store at `{0}` is read-only")]
    ReadOnly(PathBuf),
    #[error("storage i/o failed")]
    Io(#[from] io::Error),
    #[error("encode/decode failed")]
    Codec(#[from] bincode::Error),
}

/// How the backing store behaves.
///
/// `Resource` is read-only bundled data living at `{path}.bytes`; it can be
/// loaded but never written or deleted. `File` is an ordinary read-write file
/// at `{path}` whose parent directories are created on demand.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[derive(IsVariant)]
pub enum StorageMode {
    Resource,
    File,
}

/// Saves, loads and deletes one value of `T` under a single path key.
///
/// The error policy is chosen per instance: with `bypass_errors` set,
/// validation and I/O failures degrade to `Ok(false)` / `Ok(None)` instead of
/// propagating. Parse leniency elsewhere in the crate is unconditional; this
/// flag governs storage failures only.
pub struct DataSerializer<T> {
    path: PathBuf,
    mode: StorageMode,
    bypass_errors: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> DataSerializer<T> {
    /// Binds a serializer to `path`.
    ///
    /// File mode eagerly creates the parent directory chain; a parent that
    /// exists but is not a directory fails here rather than on first use.
    /// Construction is fail-fast regardless of `bypass_errors`; the flag
    /// only softens the per-call operations of a validly constructed
    /// instance.
    pub fn new(
        path: impl Into<PathBuf>,
        mode: StorageMode,
        bypass_errors: bool,
    ) -> Result<Self, StorageError> {
        let path = path.into();
        if mode.is_file() {
            ensure_parent_dir(&path)?;
        }
        Ok(DataSerializer { path, mode, bypass_errors, _marker: PhantomData })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn mode(&self) -> StorageMode {
        self.mode
    }

    pub const fn bypass_errors(&self) -> bool {
        self.bypass_errors
    }

    /// Whether the backing store currently exists, without opening it.
    pub fn exists(&self) -> bool {
        self.backing_path().is_file()
    }

    /// Serializes `value` into the backing file, creating or truncating it.
    ///
    /// Returns `Ok(true)` on success. Resource mode is read-only and fails
    /// with [`StorageError::ReadOnly`]. With `bypass_errors`, every failure
    /// degrades to `Ok(false)`.
    pub fn save_or_create(&self, value: &T) -> Result<bool, StorageError>
    where
        T: Serialize,
    {
        self.soften(self.save_inner(value).map(|()| true), false)
    }

    fn save_inner(&self, value: &T) -> Result<(), StorageError>
    where
        T: Serialize,
    {
        if self.mode.is_resource() {
            return Err(StorageError::ReadOnly(self.backing_path()));
        }
        ensure_parent_dir(&self.path)?;

        let target = self.backing_path();
        trace!("writing {}", target.display());
        let file = fs::File::create(&target)?;
        bincode::serialize_into(BufWriter::new(file), value)?;
        Ok(())
    }

    /// Reads the whole value back.
    ///
    /// A missing backing store is [`StorageError::NotFound`], or `Ok(None)`
    /// with `bypass_errors`; decode failures follow the same policy.
    pub fn load(&self) -> Result<Option<T>, StorageError>
    where
        T: DeserializeOwned,
    {
        self.soften(self.load_inner().map(Some), None)
    }

    fn load_inner(&self) -> Result<T, StorageError>
    where
        T: DeserializeOwned,
    {
        let target = self.backing_path();
        if !target.is_file() {
            return Err(StorageError::NotFound(target));
        }
        trace!("reading {}", target.display());
        let file = fs::File::open(&target)?;
        Ok(bincode::deserialize_from(BufReader::new(file))?)
    }

    /// Removes the backing file and its `.meta` sidecar if present.
    ///
    /// Resource stores cannot be deleted: in resource mode this is a no-op
    /// returning `Ok(false)` regardless of `bypass_errors`. In file mode the
    /// result is whether a file was actually removed.
    pub fn delete(&self) -> Result<bool, StorageError> {
        if self.mode.is_resource() {
            debug!("delete ignored for read-only store {}", self.path.display());
            return Ok(false);
        }
        self.soften(self.delete_inner(), false)
    }

    fn delete_inner(&self) -> Result<bool, StorageError> {
        let target = self.backing_path();
        if !target.exists() {
            return Ok(false);
        }
        trace!("deleting {}", target.display());
        fs::remove_file(&target)?;

        let sidecar = append_suffix(&target, ".meta");
        if sidecar.exists() {
            fs::remove_file(&sidecar)?;
        }
        Ok(true)
    }

    fn backing_path(&self) -> PathBuf {
        match self.mode {
            StorageMode::File => self.path.clone(),
            // Bundled data mirrors the `.bytes` convention.
            StorageMode::Resource => append_suffix(&self.path, ".bytes"),
        }
    }

    fn soften<V>(&self, result: Result<V, StorageError>, fallback: V) -> Result<V, StorageError> {
        match result {
            Err(err) if self.bypass_errors => {
                debug!("suppressed storage failure for {}: {err}", self.path.display());
                Ok(fallback)
            }
            other => other,
        }
    }
}

/// `{path}{suffix}`, appended after any existing extension.
fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw = path.to_path_buf().into_os_string();
    raw.push(suffix);
    PathBuf::from(raw)
}

fn ensure_parent_dir(path: &Path) -> Result<(), StorageError> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.exists() && !parent.is_dir() {
        return Err(StorageError::NotADirectory(parent.to_path_buf()));
    }
    fs::create_dir_all(parent)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use assertables::{assert_none, assert_ok, assert_some_eq_x};
    use serde::Deserialize;
    use tempfile::tempdir;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SaveGame {
        checkpoint: String,
        score: u32,
        position: (f32, f32, f32),
    }

    fn sample() -> SaveGame {
        let _ = env_logger::builder().is_test(true).try_init();
        SaveGame {
            checkpoint: "chapter-3/bridge".to_string(),
            score: 12_800,
            position: (14.5, 0.0, -3.25),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store: DataSerializer<SaveGame> =
            DataSerializer::new(dir.path().join("slot0.sav"), StorageMode::File, false).unwrap();

        assert_ok!(store.save_or_create(&sample()));
        assert_some_eq_x!(store.load().unwrap(), sample());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("saves").join("profile-a").join("slot1.sav");
        let store: DataSerializer<SaveGame> =
            DataSerializer::new(&nested, StorageMode::File, false).unwrap();

        assert_eq!(store.save_or_create(&sample()).unwrap(), true);
        assert!(nested.is_file());
    }

    #[test]
    fn load_missing_is_not_found_or_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.sav");

        let strict: DataSerializer<SaveGame> =
            DataSerializer::new(&path, StorageMode::File, false).unwrap();
        assert!(matches!(strict.load(), Err(StorageError::NotFound(_))));

        let soft: DataSerializer<SaveGame> =
            DataSerializer::new(&path, StorageMode::File, true).unwrap();
        assert_none!(soft.load().unwrap());
    }

    #[test]
    fn delete_then_soft_load_returns_none() {
        let dir = tempdir().unwrap();
        let store: DataSerializer<SaveGame> =
            DataSerializer::new(dir.path().join("slot0.sav"), StorageMode::File, true).unwrap();

        store.save_or_create(&sample()).unwrap();
        assert!(store.exists());
        assert_eq!(store.delete().unwrap(), true);
        assert!(!store.exists());
        assert_none!(store.load().unwrap());
    }

    #[test]
    fn delete_removes_meta_sidecar() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("slot0.sav");
        let sidecar = dir.path().join("slot0.sav.meta");
        let store: DataSerializer<SaveGame> =
            DataSerializer::new(&path, StorageMode::File, false).unwrap();

        store.save_or_create(&sample()).unwrap();
        fs::write(&sidecar, b"guid: 1234").unwrap();
        assert_eq!(store.delete().unwrap(), true);
        assert!(!sidecar.exists());
    }

    #[test]
    fn delete_of_absent_file_is_false() {
        let dir = tempdir().unwrap();
        let store: DataSerializer<SaveGame> =
            DataSerializer::new(dir.path().join("nothing.sav"), StorageMode::File, false).unwrap();
        assert_eq!(store.delete().unwrap(), false);
    }

    #[test]
    fn resource_mode_reads_bundled_bytes() {
        let dir = tempdir().unwrap();
        let key = dir.path().join("bundled/config");
        fs::create_dir_all(key.parent().unwrap()).unwrap();
        fs::write(
            key.with_file_name("config.bytes"),
            bincode::serialize(&sample()).unwrap(),
        )
        .unwrap();

        let store: DataSerializer<SaveGame> =
            DataSerializer::new(&key, StorageMode::Resource, false).unwrap();
        assert!(store.exists());
        assert_some_eq_x!(store.load().unwrap(), sample());
    }

    #[test]
    fn resource_mode_never_deletes() {
        let dir = tempdir().unwrap();
        let key = dir.path().join("bundled");
        let bytes_path = dir.path().join("bundled.bytes");
        fs::write(&bytes_path, bincode::serialize(&sample()).unwrap()).unwrap();

        for bypass in [false, true] {
            let store: DataSerializer<SaveGame> =
                DataSerializer::new(&key, StorageMode::Resource, bypass).unwrap();
            assert_eq!(store.delete().unwrap(), false);
            assert!(bytes_path.is_file(), "bundled data must survive delete");
        }
    }

    #[test]
    fn resource_mode_rejects_save() {
        let dir = tempdir().unwrap();
        let store: DataSerializer<SaveGame> =
            DataSerializer::new(dir.path().join("bundled"), StorageMode::Resource, false).unwrap();
        assert!(matches!(store.save_or_create(&sample()), Err(StorageError::ReadOnly(_))));

        let soft: DataSerializer<SaveGame> =
            DataSerializer::new(dir.path().join("bundled"), StorageMode::Resource, true).unwrap();
        assert_eq!(soft.save_or_create(&sample()).unwrap(), false);
    }

    #[test]
    fn constructor_rejects_non_directory_parent() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"plain file").unwrap();

        let result = DataSerializer::<SaveGame>::new(
            blocker.join("slot0.sav"),
            StorageMode::File,
            false,
        );
        assert!(matches!(result, Err(StorageError::NotADirectory(_))));
    }

    #[test]
    fn decode_failure_follows_bypass_policy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.sav");
        // A length prefix far past the end of the file.
        fs::write(&path, u64::MAX.to_le_bytes()).unwrap();

        let strict: DataSerializer<SaveGame> =
            DataSerializer::new(&path, StorageMode::File, false).unwrap();
        assert!(strict.load().is_err());

        let soft: DataSerializer<SaveGame> =
            DataSerializer::new(&path, StorageMode::File, true).unwrap();
        assert_none!(soft.load().unwrap());
    }
}
