use std::collections::HashSet;
use std::io::{Cursor, Write};

use tracing::debug;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::entry::ArchiveEntry;
use crate::error::{Error, Result};

/// Fixed output name for the assembled archive.
pub const ARCHIVE_NAME: &str = "documents.zip";

/// Pack the given entries into a single in-memory zip archive.
///
/// Entry order inside the archive follows input order but is not part of
/// the contract; only names and contents are. Duplicate names are resolved
/// deterministically via [`disambiguate`]: the first occurrence keeps the
/// bare name, later ones get a ` (n)` suffix before the extension.
///
/// Fails with [`Error::Empty`] when given no entries; an archive of
/// nothing is never produced.
pub fn assemble(entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
    if entries.is_empty() {
        return Err(Error::Empty);
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut taken = HashSet::new();
    for entry in entries {
        let name = disambiguate(&entry.name, &mut taken);
        writer
            .start_file(&name, options)
            .map_err(|source| Error::EntryWrite {
                name: name.clone(),
                source,
            })?;
        writer.write_all(&entry.bytes)?;
    }

    let cursor = writer.finish().map_err(Error::Finalize)?;
    let archive = cursor.into_inner();
    debug!(
        entries = entries.len(),
        bytes = archive.len(),
        "assembled archive"
    );
    Ok(archive)
}

/// Resolve `name` against the set of names already written.
///
/// Returns the first free candidate among `name`, `stem (1).ext`,
/// `stem (2).ext`, ... and records it in `taken`. Names without an
/// extension (or dotfiles like `.env`) are suffixed whole.
pub fn disambiguate(name: &str, taken: &mut HashSet<String>) -> String {
    if taken.insert(name.to_string()) {
        return name.to_string();
    }

    for n in 1.. {
        let candidate = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({n}).{ext}"),
            _ => format!("{name} ({n})"),
        };
        if taken.insert(candidate.clone()) {
            return candidate;
        }
    }
    unreachable!("suffix counter exhausted")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(assemble(&[]), Err(Error::Empty)));
    }

    #[test]
    fn first_occurrence_keeps_bare_name() {
        let mut taken = HashSet::new();
        assert_eq!(disambiguate("a.pdf", &mut taken), "a.pdf");
        assert_eq!(disambiguate("a.pdf", &mut taken), "a (1).pdf");
        assert_eq!(disambiguate("a.pdf", &mut taken), "a (2).pdf");
    }

    #[test]
    fn suffix_skips_names_already_in_use() {
        let mut taken = HashSet::new();
        assert_eq!(disambiguate("a (1).pdf", &mut taken), "a (1).pdf");
        assert_eq!(disambiguate("a.pdf", &mut taken), "a.pdf");
        // "a (1).pdf" is taken, so the counter moves on.
        assert_eq!(disambiguate("a.pdf", &mut taken), "a (2).pdf");
    }

    #[test]
    fn names_without_extension_are_suffixed_whole() {
        let mut taken = HashSet::new();
        assert_eq!(disambiguate("README", &mut taken), "README");
        assert_eq!(disambiguate("README", &mut taken), "README (1)");
        assert_eq!(disambiguate(".env", &mut taken), ".env");
        assert_eq!(disambiguate(".env", &mut taken), ".env (1)");
    }
}
