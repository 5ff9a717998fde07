use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use tracing::{debug, warn};

/// One carousel's worth of images: the files directly inside a directory.
pub struct Album {
    pub label: String,
    pub image_paths: Vec<PathBuf>,
}

fn is_image_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    matches!(
        ext.to_lowercase().as_str(),
        "png" | "jpg" | "jpeg" | "bmp" | "gif"
    )
}

// Image files directly inside `dir`, sorted by file name. An empty result is
// not an error; the caller decides what an empty album means.
fn collect_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && is_image_file(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn album_label(dir: &Path) -> String {
    dir.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(".")
        .to_string()
}

/// Find every album under `root`: images directly in `root` form one album,
/// and each immediate subdirectory holding images forms another. Directories
/// without any image are skipped. With `shuffle` each album's slide order is
/// randomized independently.
pub fn discover_albums(root: &Path, shuffle: bool) -> Result<Vec<Album>> {
    let mut albums = Vec::new();

    let root_images = collect_image_paths(root)?;
    if !root_images.is_empty() {
        albums.push(Album {
            label: album_label(root),
            image_paths: root_images,
        });
    }

    let mut subdirs: Vec<PathBuf> = fs::read_dir(root)
        .with_context(|| format!("failed to read directory {}", root.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    subdirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    for subdir in subdirs {
        match collect_image_paths(&subdir) {
            Ok(paths) if paths.is_empty() => {
                debug!(dir = %subdir.display(), "no images, skipping album");
            }
            Ok(paths) => albums.push(Album {
                label: album_label(&subdir),
                image_paths: paths,
            }),
            Err(e) => {
                warn!(dir = %subdir.display(), error = %e, "skipping unreadable album");
            }
        }
    }

    if shuffle {
        let mut rng = rand::rng();
        for album in &mut albums {
            album.image_paths.shuffle(&mut rng);
        }
    }

    debug!(albums = albums.len(), "album discovery finished");
    Ok(albums)
}
