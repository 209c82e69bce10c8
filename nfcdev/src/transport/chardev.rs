// nfcdev/src/transport/chardev.rs
//! Blocking transport over the `/dev/nfcN` character device.

#![cfg(feature = "chardev")]

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::NFC_RD_GET_PROTOCOL_VERSION;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Transport over the driver's character device (`/dev/nfcN`).
///
/// Every `send` is a single write so the driver sees the whole message at
/// once. Reads block until the requested bytes arrive.
pub struct CharDevTransport {
    file: File,
    path: PathBuf,
}

impl CharDevTransport {
    /// Open the device node read/write.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::DeviceNotFound,
                _ => Error::Io(e),
            })?;
        debug!("opened {}", path.display());
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Path the transport was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for CharDevTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.file.write_all(data)?;
        Ok(())
    }

    fn receive_exact(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.file.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn protocol_version(&mut self) -> Result<u64> {
        let mut version: u64 = 0;
        // SAFETY: the request writes exactly one u64 into `version`, which
        // outlives the call; the fd is owned by `self.file`.
        let rc = unsafe {
            libc::ioctl(
                self.file.as_raw_fd(),
                NFC_RD_GET_PROTOCOL_VERSION as _,
                &mut version as *mut u64,
            )
        };
        if rc < 0 {
            return Err(Error::Io(std::io::Error::last_os_error()));
        }
        Ok(version)
    }
}
