//! Saving rendered pages to disk.

use crate::error::HandwriteError;
use crate::render::RenderedPage;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Save every page as `{index}.png` inside `dir`, creating the directory if
/// needed, and return where each page went, keyed by page index.
///
/// Existing files with the same names are overwritten.
pub fn save_pages<P: AsRef<Path>>(
    pages: &[RenderedPage],
    dir: P,
) -> Result<BTreeMap<usize, PathBuf>, HandwriteError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut saved = BTreeMap::new();
    for page in pages {
        let path = dir.join(format!("{}.png", page.index));
        page.image
            .save_with_format(&path, image::ImageFormat::Png)?;
        log::debug!("saved page {} to {}", page.index, path.display());
        saved.insert(page.index, path);
    }
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn pages_are_saved_by_index() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("outputs");
        let pages: Vec<RenderedPage> = (0..2)
            .map(|index| RenderedPage {
                index,
                image: RgbaImage::from_pixel(3, 2, Rgba([index as u8, 0, 0, 255])),
            })
            .collect();

        let saved = save_pages(&pages, &out).unwrap();
        assert_eq!(saved.keys().copied().collect::<Vec<_>>(), [0, 1]);
        assert_eq!(saved[&1], out.join("1.png"));

        let reread = image::open(&saved[&1]).unwrap().to_rgba8();
        assert_eq!(reread, pages[1].image);
    }

    #[test]
    fn no_pages_still_creates_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty");
        let saved = save_pages(&[], &out).unwrap();
        assert!(saved.is_empty());
        assert!(out.is_dir());
    }
}
