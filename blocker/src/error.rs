use std::io;

use aya::{
    maps::{perf::PerfBufferError, MapError},
    programs::ProgramError,
    BpfError,
};
use thiserror::Error;

/// Blocker errors.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // Aya's errors seem clear enough to just let them bubble up
    /// Error when accessing or writing the blocklist map.
    #[error(transparent)]
    MapError(#[from] MapError),
    /// Error while loading or attaching the eBPF program.
    #[error(transparent)]
    ProgramError(#[from] ProgramError),
    /// eBPF-related error
    #[error(transparent)]
    BpfError(#[from] BpfError),
    /// IO error
    #[error(transparent)]
    IoError(#[from] io::Error),
    /// Error while reading buffers for logging.
    #[error(transparent)]
    PerfBufferError(#[from] PerfBufferError),
}
