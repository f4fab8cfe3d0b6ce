//! Copy and move
//!
//! Move is copy followed by removal of the source. It is not atomic: when the
//! remove step fails the copy stays at the destination and the error is
//! returned. Nothing here cleans up after a failure; a copy that fails part
//! way leaves the partial destination file behind.

use super::FileHandle;
use crate::error::{FsError, IoOp};
use crate::fs::FileSystem;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};

impl FileHandle {
    /// Copy into `dest_dir`, keeping the file name.
    pub fn copy(
        &self,
        fs: &dyn FileSystem,
        dest_dir: impl AsRef<Path>,
    ) -> Result<FileHandle, FsError> {
        self.copy_and_rename(fs, dest_dir, self.name())
    }

    /// Copy into `dest_dir` under `new_name`. The destination is truncated
    /// first, so repeating a copy overwrites rather than appends. A
    /// destination that reaches the source file (same path, symlinked
    /// directory, hard link) is rejected before either side is opened.
    pub fn copy_and_rename(
        &self,
        fs: &dyn FileSystem,
        dest_dir: impl AsRef<Path>,
        new_name: impl AsRef<str>,
    ) -> Result<FileHandle, FsError> {
        let dest = FileHandle::new(fs, dest_dir.as_ref().join(new_name.as_ref()))?;
        let src_path = self.full_path();
        let dest_path = dest.full_path();

        let aliased = dest == *self
            || fs
                .same_file(&src_path, &dest_path)
                .map_err(|e| FsError::io(IoOp::Copy, &dest_path, e))?;
        if aliased {
            return Err(FsError::io(
                IoOp::Copy,
                dest_path,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "source and destination are the same file",
                ),
            ));
        }

        let mut reader = self.open(fs)?;
        let mut writer = dest.create(fs)?;
        let bytes = io::copy(&mut reader, &mut writer)
            .map_err(|e| FsError::io(IoOp::Copy, &dest_path, e))?;
        writer
            .flush()
            .map_err(|e| FsError::io(IoOp::Flush, &dest_path, e))?;
        writer
            .sync_all()
            .map_err(|e| FsError::io(IoOp::Sync, &dest_path, e))?;

        debug!(
            src = %src_path.display(),
            dest = %dest_path.display(),
            bytes,
            "Copied file"
        );
        Ok(dest)
    }

    /// Copy into `dest_dir`, then remove the source.
    pub fn move_to(
        &self,
        fs: &dyn FileSystem,
        dest_dir: impl AsRef<Path>,
    ) -> Result<FileHandle, FsError> {
        self.move_and_rename(fs, dest_dir, self.name())
    }

    pub fn move_and_rename(
        &self,
        fs: &dyn FileSystem,
        dest_dir: impl AsRef<Path>,
        new_name: impl AsRef<str>,
    ) -> Result<FileHandle, FsError> {
        let dest = self.copy_and_rename(fs, dest_dir, new_name)?;
        if let Err(e) = self.remove(fs) {
            warn!(
                src = %self.full_path().display(),
                dest = %dest.full_path().display(),
                error = %e,
                "Move copied the file but could not remove the source"
            );
            return Err(e);
        }
        info!(
            src = %self.full_path().display(),
            dest = %dest.full_path().display(),
            "Moved file"
        );
        Ok(dest)
    }
}
