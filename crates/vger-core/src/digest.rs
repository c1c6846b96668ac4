//! Chunked digest computation with a reusable buffer.
//!
//! Archive members can be arbitrarily large, so hashing always streams
//! through a fixed-size [`HashBuffer`] and never materializes a member.

use std::fmt;
use std::io::Read;
use std::io::{self};

use sha2::Digest;
use sha2::Sha256;
use sha2::Sha512;

/// Default read size for hashing, in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Largest read size a [`HashBuffer`] allocates, in bytes.
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// Hash algorithm used to fingerprint archive units.
///
/// The algorithm must match the one declared in the manifest document, since
/// its name also determines the prefix marker stripped from the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    /// SHA-512 (the format used by current return letters).
    #[default]
    Sha512,
    /// SHA-256.
    Sha256,
}

impl DigestAlgorithm {
    /// Returns the upper-case algorithm name, e.g. `SHA512`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha512 => "SHA512",
            Self::Sha256 => "SHA256",
        }
    }

    /// Returns the marker that precedes each digest in the manifest text.
    ///
    /// # Examples
    ///
    /// ```
    /// use vger_core::DigestAlgorithm;
    ///
    /// assert_eq!(DigestAlgorithm::Sha512.manifest_prefix(), "SHA512-");
    /// ```
    #[must_use]
    pub const fn manifest_prefix(self) -> &'static str {
        match self {
            Self::Sha512 => "SHA512-",
            Self::Sha256 => "SHA256-",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reusable read buffer for streaming hashes.
#[derive(Debug)]
pub struct HashBuffer {
    buf: Box<[u8]>,
}

impl HashBuffer {
    /// Creates a buffer of `chunk_size` bytes. A zero size falls back to
    /// [`DEFAULT_CHUNK_SIZE`]; larger sizes are capped at [`MAX_CHUNK_SIZE`].
    #[must_use]
    pub fn new(chunk_size: usize) -> Self {
        let size = if chunk_size == 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            chunk_size.min(MAX_CHUNK_SIZE)
        };
        Self {
            buf: vec![0u8; size].into_boxed_slice(),
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for HashBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

/// Streams `reader` through `algorithm` and returns the lowercase hex digest.
///
/// `on_chunk` is called with the size of every chunk consumed, which lets
/// callers report progress without this module knowing about it.
///
/// # Errors
///
/// Returns the first read error other than `Interrupted`.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use vger_core::DigestAlgorithm;
/// use vger_core::digest::HashBuffer;
/// use vger_core::digest::hash_reader;
///
/// let mut buffer = HashBuffer::default();
/// let digest = hash_reader(
///     &mut Cursor::new(b"abc"),
///     DigestAlgorithm::Sha256,
///     &mut buffer,
///     &mut |_| {},
/// )?;
/// assert!(digest.starts_with("ba7816bf"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn hash_reader<R: Read + ?Sized>(
    reader: &mut R,
    algorithm: DigestAlgorithm,
    buffer: &mut HashBuffer,
    on_chunk: &mut dyn FnMut(u64),
) -> io::Result<String> {
    match algorithm {
        DigestAlgorithm::Sha512 => stream::<Sha512, R>(reader, buffer, on_chunk),
        DigestAlgorithm::Sha256 => stream::<Sha256, R>(reader, buffer, on_chunk),
    }
}

/// Hashes an in-memory byte slice.
#[must_use]
pub fn hash_bytes(algorithm: DigestAlgorithm, data: &[u8]) -> String {
    match algorithm {
        DigestAlgorithm::Sha512 => hex::encode(Sha512::digest(data)),
        DigestAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
    }
}

fn stream<D: Digest, R: Read + ?Sized>(
    reader: &mut R,
    buffer: &mut HashBuffer,
    on_chunk: &mut dyn FnMut(u64),
) -> io::Result<String> {
    let mut hasher = D::new();

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        hasher.update(&buffer.buf[..bytes_read]);
        on_chunk(bytes_read as u64);
    }

    Ok(hex::encode(hasher.finalize()))
}
