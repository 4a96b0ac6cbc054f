//! PNG decoding and path-keyed texture cache.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use egui::{ColorImage, Context, TextureHandle, TextureOptions};

/// Decoded depiction textures keyed by image path.
///
/// The asset set is static for a given data directory, so entries live
/// until the directory changes. Decode failures are cached too: a broken
/// asset reports the same inline error every frame instead of re-reading
/// the file.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<PathBuf, Result<TextureHandle, String>>,
}

impl TextureCache {
    /// Fetch the texture for `path`, decoding the file on first use.
    pub fn get(&mut self, ctx: &Context, path: &Path) -> Result<TextureHandle, String> {
        if let Some(cached) = self.entries.get(path) {
            return cached.clone();
        }
        let loaded = load_color_image(path).map(|img| {
            ctx.load_texture(path.display().to_string(), img, TextureOptions::LINEAR)
        });
        self.entries.insert(path.to_path_buf(), loaded.clone());
        loaded
    }

    /// Drop every cached entry (after the data directory changes).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Decode an image file into an egui color image.
#[allow(clippy::cast_possible_truncation)]
fn load_color_image(path: &Path) -> Result<ColorImage, String> {
    let decoded = image::open(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
