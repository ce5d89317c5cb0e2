//! PDF header sniffing.
//!
//! Cheap check run before handing a file to the PDF parser, so that a
//! text file or an HTML error page renamed to `.pdf` fails with
//! [`Error::UnknownFormat`] instead of an opaque parser message.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3;

/// Some producers write junk (BOMs, mail headers) before `%PDF-`; the PDF
/// reference tolerates the marker anywhere in the first kilobyte.
const HEADER_SEARCH_WINDOW: usize = 1024;

/// Version taken from a PDF header, e.g. `"1.7"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfVersion(pub String);

impl std::fmt::Display for PdfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.0)
    }
}

/// Read the header of the file at `path`.
pub fn sniff_path(path: &Path) -> Result<PdfVersion> {
    let mut head = Vec::with_capacity(HEADER_SEARCH_WINDOW);
    File::open(path)?
        .take(HEADER_SEARCH_WINDOW as u64)
        .read_to_end(&mut head)?;
    sniff_bytes(&head)
}

/// Read the header at the start of `data`.
pub fn sniff_bytes(data: &[u8]) -> Result<PdfVersion> {
    let window = &data[..data.len().min(HEADER_SEARCH_WINDOW)];
    let start = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;

    let version = data
        .get(start + PDF_MAGIC.len()..start + PDF_MAGIC.len() + VERSION_LEN)
        .ok_or(Error::UnknownFormat)?;
    let version = String::from_utf8_lossy(version).into_owned();

    match version.as_bytes() {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(PdfVersion(version))
        }
        _ => Err(Error::UnsupportedVersion(version)),
    }
}
