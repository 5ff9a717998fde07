use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

// EXIF orientation tag from a JPEG byte stream, if present. Other formats
// rarely carry the tag and raylib decodes them upright already.
fn exif_orientation(bytes: &[u8], path: &Path) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Value::Short(values) = &field.value {
                    if let Some(&value) = values.first() {
                        return value;
                    }
                }
            }
            1
        }
        Err(e) => {
            debug!(file = %path.display(), error = %e, "no usable EXIF data");
            1
        }
    }
}

/// Load an image file as a texture, baking JPEG EXIF orientation into the
/// pixels so the rest of the program never deals with rotation.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut orientation = 1;
    if extension == "jpg" || extension == "jpeg" {
        orientation = exif_orientation(&file_bytes, image_path);
    }

    // raylib needs an extension hint to pick a decoder for in-memory data.
    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("failed to decode {}: {}", image_path.display(), e))?;

    // 1 = upright, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
    // Mirrored orientations are rare and left as-is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => {
            image.rotate_cw();
        }
        8 => {
            image.rotate_ccw();
        }
        1 => {}
        other => {
            warn!(file = %image_path.display(), orientation = other, "unsupported EXIF orientation, keeping as-is");
        }
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", image_path.display(), e))?;
    debug!(file = %image_path.display(), width = texture.width(), height = texture.height(), "texture loaded");

    Ok(texture)
}
