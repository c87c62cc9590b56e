use std::fs::File;
use std::io::Read;
use std::path::Path;

use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Digest};

use crate::models::FileDigests;

/// Compute the MD5/SHA-1/SHA-256 digest triple over a byte slice.
pub fn digest_bytes(data: &[u8]) -> FileDigests {
    FileDigests {
        md5: format!("{:x}", Md5::digest(data)),
        sha1: format!("{:x}", Sha1::digest(data)),
        sha256: format!("{:x}", Sha256::digest(data)),
    }
}

/// Compute the digest triple over a file's full contents.
///
/// The whole file is read into memory in one pass; the hash targets are
/// small system files, so streaming is not needed.
///
/// Returns `None` if the file cannot be opened (missing or unreadable), and
/// the all-empty triple if it opened but failed mid-read.
pub fn digest_file(path: &Path) -> Option<FileDigests> {
    let mut file = File::open(path).ok()?;
    let mut data = Vec::new();
    match file.read_to_end(&mut data) {
        Ok(_) => Some(digest_bytes(&data)),
        Err(_) => Some(FileDigests::default()),
    }
}
