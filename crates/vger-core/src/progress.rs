//! Progress reporting while hashing archive units.

/// Callback trait for progress updates during digest extraction.
///
/// # Examples
///
/// ```
/// use vger_core::ProgressCallback;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_entry_start(&mut self, label: &str, current: usize, total: usize) {
///         println!("Hashing {current}/{total}: {label}");
///     }
///
///     fn on_bytes_hashed(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, label: &str) {
///         println!("Hashed {label}");
///     }
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback {
    /// Called before a unit is hashed. `current` is 1-indexed.
    fn on_entry_start(&mut self, label: &str, current: usize, total: usize);

    /// Called after each chunk is fed to the hasher.
    fn on_bytes_hashed(&mut self, bytes: u64);

    /// Called once a unit's digest is final.
    fn on_entry_complete(&mut self, label: &str);

    /// Called when extraction finishes, successfully or not.
    fn on_complete(&mut self);
}

/// Progress callback that ignores every update.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _label: &str, _current: usize, _total: usize) {}

    fn on_bytes_hashed(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _label: &str) {}

    fn on_complete(&mut self) {}
}
