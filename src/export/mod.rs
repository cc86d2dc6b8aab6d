//! PNG export of a palette as equal vertical color bands.

use crate::palette::Palette;
use crate::palette::color::Rgba;
use anyhow::Context;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 200;

/// Paint each color as a full-height band, left to right.
///
/// Unparseable colors reuse the previous band's fill, starting from black.
pub fn render(palette: &Palette) -> RgbaImage {
    let mut img = RgbaImage::new(WIDTH, HEIGHT);
    let n = palette.colors.len() as u32;
    if n == 0 {
        return img;
    }

    let mut fill = Rgba::BLACK;
    for (i, color) in palette.colors.iter().enumerate() {
        let i = i as u32;
        match Rgba::parse(color) {
            Some(c) => fill = c,
            None => tracing::debug!(color = %color, "unparseable color, keeping previous fill"),
        }
        let x0 = i * WIDTH / n;
        let x1 = (i + 1) * WIDTH / n;
        let px = image::Rgba([fill.r, fill.g, fill.b, fill.a]);
        for x in x0..x1 {
            for y in 0..HEIGHT {
                img.put_pixel(x, y, px);
            }
        }
    }
    img
}

/// PNG bytes of [`render`].
pub fn encode(palette: &Palette) -> anyhow::Result<Vec<u8>> {
    let img = render(palette);
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .context("encode png")?;
    Ok(out.into_inner())
}

/// `mood-palette-<mood>.png` with whitespace runs collapsed to one hyphen.
pub fn file_name(mood: &str) -> String {
    let mut slug = String::with_capacity(mood.len());
    let mut in_space = false;
    for c in mood.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        slug.push(if matches!(c, '/' | '\\') { '-' } else { c });
    }
    format!("mood-palette-{slug}.png")
}

/// Write the palette image into `dir`, returning the file path.
pub fn save(palette: &Palette, dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
    let path = dir.join(file_name(&palette.mood));
    let bytes = encode(palette)?;
    std::fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "palette exported");
    Ok(path)
}
