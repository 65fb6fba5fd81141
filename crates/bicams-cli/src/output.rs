use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;

/// Write `bytes` to `dir/file_name` via a temp file in the same directory,
/// so a half-written report never appears under the final name.
///
/// `file_name` must be a single plain path component.
pub fn write_atomic(dir: &Path, file_name: &str, bytes: &[u8]) -> eyre::Result<PathBuf> {
    let mut components = Path::new(file_name).components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) {
        eyre::bail!("refusing to write {file_name:?}: not a plain file name");
    }

    std::fs::create_dir_all(dir)
        .map_err(|e| eyre::eyre!("failed to create {}: {e}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;

    let path = dir.join(file_name);
    tmp.persist(&path)
        .map_err(|e| eyre::eyre!("failed to write {}: {}", path.display(), e.error))?;
    Ok(path)
}
