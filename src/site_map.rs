use std::{fs, io, path::{Path, PathBuf}};
use crate::config::{SiteMap, EXCLUDE_DIRS, INCLUDE_EXT, WELL_KNOWN_DIR};

/// Collect every page file below `source_dir`, relative to it.
///
/// Dot-prefixed entries are skipped except `.well-known`, and directories
/// named in `EXCLUDE_DIRS` are pruned wherever they occur. Symlinks are
/// neither followed nor reported. Any read failure aborts the walk.
pub fn build_site_map(source_dir: &Path) -> io::Result<SiteMap> {
    let mut site_map = Vec::new();
    let mut stack = vec![source_dir.to_path_buf()];

    while let Some(current_dir) = stack.pop() {
        let entries = fs::read_dir(&current_dir).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Unable to read directory {}: {}", current_dir.display(), e),
            )
        })?;

        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();

            if name.starts_with('.') && name != WELL_KNOWN_DIR {
                continue;
            }

            let file_type = entry.file_type()?;
            let path = entry.path();

            if file_type.is_dir() {
                if EXCLUDE_DIRS.contains(&&*name) {
                    continue;
                }
                stack.push(path);
            } else if file_type.is_file() && is_page(&path) {
                site_map.push(relative_path(&path, source_dir)?);
            }
        }
    }

    Ok(site_map)
}

fn is_page(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .map_or(false, |ext| INCLUDE_EXT.contains(&ext.as_str()))
}

fn relative_path(path: &Path, source_root: &Path) -> io::Result<PathBuf> {
    pathdiff::diff_paths(path, source_root).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{} cannot be expressed relative to {}",
                path.display(),
                source_root.display()
            ),
        )
    })
}
