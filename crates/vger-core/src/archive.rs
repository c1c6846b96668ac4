//! Archive digest extraction.
//!
//! A container holding any member whose name ends with the nested extension
//! is treated as nested: every such member is hashed and the container bytes
//! are never hashed. Otherwise the container file is hashed as one unit.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use tracing::debug;
use tracing::info;
use zip::result::ZipError;

use crate::VerifyConfig;
use crate::digest::HashBuffer;
use crate::digest::hash_reader;
use crate::error::ArchiveError;
use crate::progress::ProgressCallback;
use crate::types::ArchiveLayout;
use crate::types::DigestEntry;
use crate::types::DigestSet;

/// Computes one digest per nested archive, or one for the whole file when
/// there are none.
///
/// Entries follow the container's member enumeration order.
///
/// # Errors
///
/// - [`ArchiveError::NotFound`] if `path` does not exist
/// - [`ArchiveError::NotAValidArchive`] if `path` is not a ZIP container,
///   in which case nothing is hashed
/// - [`ArchiveError::Other`] for read failures while hashing
///
/// # Examples
///
/// ```no_run
/// use vger_core::NoopProgress;
/// use vger_core::VerifyConfig;
/// use vger_core::extract_digests;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let set = extract_digests("12345678-20250101-1.zip", &VerifyConfig::default(), &mut NoopProgress)?;
/// for entry in &set {
///     println!("{entry}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn extract_digests<P: AsRef<Path>>(
    path: P,
    config: &VerifyConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<DigestSet, ArchiveError> {
    let path = path.as_ref();
    let result = extract(path, config, progress);
    progress.on_complete();

    if let Ok(set) = &result {
        info!(
            archive = %path.display(),
            layout = %set.layout(),
            entries = set.len(),
            "extracted archive digests"
        );
    }
    result
}

fn extract(
    path: &Path,
    config: &VerifyConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<DigestSet, ArchiveError> {
    let file = File::open(path).map_err(|e| ArchiveError::from_io(path, &e))?;
    let mut archive =
        zip::ZipArchive::new(BufReader::new(file)).map_err(|e| open_error(path, e))?;

    let nested = nested_members(&mut archive, &config.nested_extension, path)?;
    let mut buffer = HashBuffer::new(config.chunk_size);

    if nested.is_empty() {
        let mut reader = archive.into_inner();
        reader.rewind().map_err(|e| ArchiveError::from_io(path, &e))?;
        let entry = hash_flat(&mut reader, path, config, &mut buffer, progress)?;
        return Ok(DigestSet::new(vec![entry], ArchiveLayout::Flat));
    }

    let total = nested.len();
    let mut entries = Vec::with_capacity(total);

    for (position, (index, name)) in nested.into_iter().enumerate() {
        progress.on_entry_start(&name, position + 1, total);

        let mut member = archive
            .by_index(index)
            .map_err(|e| member_error(path, &name, &e))?;
        let digest = hash_reader(&mut member, config.algorithm, &mut buffer, &mut |n| {
            progress.on_bytes_hashed(n);
        })
        .map_err(|e| member_error(path, &name, &e))?;

        debug!(member = %name, digest = %digest, "hashed nested archive");
        progress.on_entry_complete(&name);
        entries.push(DigestEntry::new(name, digest));
    }

    Ok(DigestSet::new(entries, ArchiveLayout::Nested))
}

/// Returns `(index, name)` for every member whose name ends with `extension`,
/// in enumeration order. Only headers are read.
fn nested_members<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
    extension: &str,
    path: &Path,
) -> Result<Vec<(usize, String)>, ArchiveError> {
    let mut nested = Vec::new();
    for index in 0..archive.len() {
        let member = archive
            .by_index_raw(index)
            .map_err(|e| open_error(path, e))?;
        if member.name().ends_with(extension) {
            nested.push((index, member.name().to_string()));
        }
    }
    Ok(nested)
}

fn hash_flat<R: Read>(
    reader: &mut R,
    path: &Path,
    config: &VerifyConfig,
    buffer: &mut HashBuffer,
    progress: &mut dyn ProgressCallback,
) -> Result<DigestEntry, ArchiveError> {
    let label = base_name(path);
    progress.on_entry_start(&label, 1, 1);

    let digest = hash_reader(reader, config.algorithm, buffer, &mut |n| {
        progress.on_bytes_hashed(n);
    })
    .map_err(|e| ArchiveError::from_io(path, &e))?;

    debug!(archive = %label, digest = %digest, "hashed flat archive");
    progress.on_entry_complete(&label);
    Ok(DigestEntry::new(label, digest))
}

fn base_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn open_error(path: &Path, err: ZipError) -> ArchiveError {
    match err {
        ZipError::Io(io_err) => ArchiveError::from_io(path, &io_err),
        other => ArchiveError::NotAValidArchive {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    }
}

fn member_error(path: &Path, member: &str, err: &dyn std::fmt::Display) -> ArchiveError {
    ArchiveError::Other {
        path: path.to_path_buf(),
        message: format!("failed to hash member '{member}': {err}"),
    }
}
