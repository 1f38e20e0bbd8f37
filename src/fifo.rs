use std::error;
use std::fmt;

use nix::errno::Errno;
use nix::sys::stat;
use nix::unistd;
use nix::NixPath;

use crate::permissions::Mode;

/// Why the OS refused to create the pipe. The errno it reported is kept;
/// callers decide how much of it to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FifoError {
    AlreadyExists,
    MissingParent,
    PermissionDenied,
    NotADirectory,
    ReadOnlyFilesystem,
    NameTooLong,
    Other(Errno),
}

impl From<nix::Error> for FifoError {
    fn from(errno: nix::Error) -> Self {
        match errno {
            Errno::EEXIST => FifoError::AlreadyExists,
            Errno::ENOENT => FifoError::MissingParent,
            Errno::EACCES => FifoError::PermissionDenied,
            Errno::ENOTDIR => FifoError::NotADirectory,
            Errno::EROFS => FifoError::ReadOnlyFilesystem,
            Errno::ENAMETOOLONG => FifoError::NameTooLong,
            other => FifoError::Other(other),
        }
    }
}

impl fmt::Display for FifoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FifoError::AlreadyExists => write!(f, "an object already exists at that path"),
            FifoError::MissingParent => write!(f, "the parent directory does not exist"),
            FifoError::PermissionDenied => write!(f, "permission denied"),
            FifoError::NotADirectory => write!(f, "a path component is not a directory"),
            FifoError::ReadOnlyFilesystem => write!(f, "the filesystem is read-only"),
            FifoError::NameTooLong => write!(f, "the path name is too long"),
            FifoError::Other(errno) => write!(f, "{}", errno),
        }
    }
}

impl error::Error for FifoError {}

/// Asks the OS for a FIFO special file at `path`. Create-if-absent is atomic
/// on the OS side; the process umask applies to `mode` as with any creation
/// call. No handle to the pipe is held afterward.
pub fn create<P: ?Sized + NixPath>(path: &P, mode: Mode) -> Result<(), FifoError> {
    unistd::mkfifo(path, stat::Mode::from_bits_truncate(mode.as_mode_t()))?;
    Ok(())
}
