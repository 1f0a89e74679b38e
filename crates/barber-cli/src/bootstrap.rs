use std::path::{Path, PathBuf};

use anyhow::Context;
use barber_config::BarberConfig;

use crate::context::find_project_root;

/// Change into the project root so `.barber/` paths resolve against it.
///
/// With `--project`, that directory (or the parent of a `.barber` path) is
/// used as-is. Otherwise the nearest ancestor holding `.barber` wins, and the
/// current directory stays put when there is none.
pub fn enter_project(project_override: Option<&str>) -> anyhow::Result<()> {
    let root = match project_override {
        Some(path) => explicit_root(Path::new(path))?,
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            match find_project_root(&cwd) {
                Some(root) => root,
                None => return Ok(()),
            }
        }
    };

    tracing::debug!(root = %root.display(), "entering project root");
    std::env::set_current_dir(&root)
        .with_context(|| format!("failed to enter project root {}", root.display()))
}

fn explicit_root(path: &Path) -> anyhow::Result<PathBuf> {
    let is_barber_dir = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == ".barber");
    if is_barber_dir {
        return path
            .parent()
            .map(Path::to_path_buf)
            .context("invalid --project path: '.barber' directory has no parent");
    }
    if path.is_dir() {
        return Ok(path.to_path_buf());
    }
    anyhow::bail!(
        "invalid --project '{}': directory does not exist",
        path.display()
    );
}

/// Load `.env` from the project root, then the layered config.
pub fn load_config() -> anyhow::Result<BarberConfig> {
    let env_path = PathBuf::from(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    BarberConfig::load().context("failed to load barber configuration")
}
