//! Icon extraction seam, the on-disk icon cache layout and `.ico` output.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageError, ImageFormat, ImageResult, RgbaImage};

use crate::model::constants::{ICON_EXTENSION, ICON_NAMESPACE};

/// Largest edge an `.ico` image may have.
pub const MAX_ICON_EDGE: u32 = 256;

/// Produces an image file representing an executable's icon.
///
/// Extraction never fails loudly: any problem yields `None` and the entry is
/// shown without an icon.
pub trait IconService {
    fn extract_icon(&self, exe: &Path) -> Option<PathBuf>;
}

/// Icon service that never produces icons.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl IconService for NoIcons {
    fn extract_icon(&self, _exe: &Path) -> Option<PathBuf> {
        None
    }
}

/// Directory of extracted icons and their naming scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconCache {
    dir: PathBuf,
}

impl IconCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<temp>/enlaut_icons`
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir().join(ICON_NAMESPACE))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Target file for `exe`'s icon.
    ///
    /// The name keeps the executable's file name for readability and adds a
    /// hash of the full path, so `a/game.exe` and `b/game.exe` do not share
    /// an icon file.
    pub fn icon_path(&self, exe: &Path) -> PathBuf {
        let file_name = exe
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "icon".to_string());
        let hash = fnv1a_64(exe.to_string_lossy().as_bytes());
        self.dir
            .join(format!("{}-{:016x}.{}", file_name, hash, ICON_EXTENSION))
    }
}

impl Default for IconCache {
    fn default() -> Self {
        Self::in_temp_dir()
    }
}

/// Convert top-down BGRA pixels (as GDI returns them) to an RGBA image.
///
/// Returns `None` for zero or oversized dimensions or a buffer of the wrong
/// length. Bitmaps whose alpha channel is entirely zero are legacy icons that
/// rely on their mask; they come out fully opaque.
pub fn icon_image(width: u32, height: u32, bgra_top_down: &[u8]) -> Option<RgbaImage> {
    if width == 0 || height == 0 || width > MAX_ICON_EDGE || height > MAX_ICON_EDGE {
        return None;
    }
    if bgra_top_down.len() != width as usize * height as usize * 4 {
        return None;
    }
    let opaque = bgra_top_down.chunks_exact(4).all(|px| px[3] == 0);
    let rgba = bgra_top_down
        .chunks_exact(4)
        .flat_map(|px| [px[2], px[1], px[0], if opaque { 0xFF } else { px[3] }])
        .collect();
    RgbaImage::from_raw(width, height, rgba)
}

/// Write `image` as an `.ico` file, creating the parent directory.
pub fn save_icon(image: &RgbaImage, target: &Path) -> ImageResult<()> {
    if let Some(dir) = target.parent() {
        fs::create_dir_all(dir).map_err(ImageError::IoError)?;
    }
    image.save_with_format(target, ImageFormat::Ico)
}

/// 64-bit FNV-1a.
fn fnv1a_64(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(PRIME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_known_vectors() {
        assert_eq!(fnv1a_64(b""), 0xcbf29ce484222325);
        assert_eq!(fnv1a_64(b"a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn icon_path_keeps_file_name() {
        let cache = IconCache::new("/tmp/icons");
        let path = cache.icon_path(Path::new("/games/doom/doom.exe"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("doom.exe-"));
        assert!(name.ends_with(".ico"));
        assert_eq!(name.len(), "doom.exe-".len() + 16 + ".ico".len());
        assert_eq!(path.parent().unwrap(), Path::new("/tmp/icons"));
    }

    #[test]
    fn same_file_name_in_different_folders_gets_distinct_icons() {
        let cache = IconCache::new("/tmp/icons");
        let a = cache.icon_path(Path::new("/games/a/game.exe"));
        let b = cache.icon_path(Path::new("/games/b/game.exe"));
        assert_ne!(a, b);
    }

    #[test]
    fn icon_image_swaps_red_and_blue() {
        let image = icon_image(1, 1, &[10, 20, 30, 40]).unwrap();
        assert_eq!(image.get_pixel(0, 0).0, [30, 20, 10, 40]);
    }

    #[test]
    fn zero_alpha_bitmap_becomes_opaque() {
        let image = icon_image(2, 1, &[10, 20, 30, 0, 1, 2, 3, 0]).unwrap();
        assert_eq!(image.get_pixel(0, 0).0, [30, 20, 10, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [3, 2, 1, 255]);
    }

    #[test]
    fn rows_stay_top_down() {
        // 1x2: top pixel red, bottom pixel blue (BGRA)
        let image = icon_image(1, 2, &[0, 0, 255, 255, 255, 0, 0, 255]).unwrap();
        assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(0, 1).0, [0, 0, 255, 255]);
    }

    #[test]
    fn no_icons_returns_none() {
        assert_eq!(NoIcons.extract_icon(Path::new("/x.exe")), None);
    }
}
