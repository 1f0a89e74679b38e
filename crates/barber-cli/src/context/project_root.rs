use std::path::{Path, PathBuf};

/// Walk upwards from `start` until a `.barber` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".barber").is_dir())
        .map(Path::to_path_buf)
}
