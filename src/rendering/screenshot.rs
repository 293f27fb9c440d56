//! PNG export of the window and of the bare board.
//!
//! The board image is one-way: white alive cells on black, `scale` pixels
//! per cell. It is not meant to be loaded back.

use crate::domain::Snapshot;
use crate::error::{LifeError, Result};
use image::error::{ParameterError, ParameterErrorKind};
use image::{GrayImage, ImageError, Luma, RgbaImage};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Pixels per cell in the exported board image
pub const BOARD_SCALE: u32 = 4;

/// Files written by one screenshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotFiles {
    pub window: PathBuf,
    pub board: PathBuf,
}

/// Render a snapshot to a grayscale image
pub fn board_image(snapshot: &Snapshot, scale: u32) -> GrayImage {
    let scale = scale.max(1);
    let (width, height) = snapshot.dimensions();
    GrayImage::from_fn(width as u32 * scale, height as u32 * scale, |x, y| {
        let alive = snapshot.get((x / scale) as usize, (y / scale) as usize);
        Luma([if alive { 255 } else { 0 }])
    })
}

pub fn save_board(snapshot: &Snapshot, path: &Path) -> Result<()> {
    board_image(snapshot, BOARD_SCALE).save(path)?;
    Ok(())
}

/// Save the current framebuffer
pub fn save_window(path: &Path) -> Result<()> {
    let screen = macroquad::texture::get_screen_data();
    let mut image = RgbaImage::from_raw(screen.width as u32, screen.height as u32, screen.bytes)
        .ok_or_else(|| {
            LifeError::Export(ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )))
        })?;
    // Framebuffer rows come bottom-up
    image::imageops::flip_vertical_in_place(&mut image);
    image.save(path)?;
    Ok(())
}

/// File names for a screenshot taken at `timestamp` (milliseconds since the epoch)
pub fn screenshot_paths(dir: &Path, timestamp: u64) -> ScreenshotFiles {
    ScreenshotFiles {
        window: dir.join(format!("game_of_life_{timestamp}.png")),
        board: dir.join(format!("board_{timestamp}.png")),
    }
}

/// Write both the window capture and the board image into `dir`
pub fn take_screenshot(snapshot: &Snapshot, dir: &Path) -> Result<ScreenshotFiles> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64);
    let files = screenshot_paths(dir, timestamp);

    save_window(&files.window)?;
    save_board(snapshot, &files.board)?;
    log::info!("Saved screenshot to {}", files.window.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FillMode, GridState};

    #[test]
    fn test_board_image_scales_cells() {
        let mut grid = GridState::new(5, 4, FillMode::Empty).unwrap();
        grid.set_cell(2, 1, true);

        let image = board_image(&grid.snapshot(), 3);

        assert_eq!(image.dimensions(), (15, 12));
        assert_eq!(image.get_pixel(6, 3).0, [255]);
        assert_eq!(image.get_pixel(8, 5).0, [255]);
        assert_eq!(image.get_pixel(9, 5).0, [0]);
        assert_eq!(image.get_pixel(0, 0).0, [0]);
    }

    #[test]
    fn test_zero_scale_treated_as_one() {
        let grid = GridState::new(3, 3, FillMode::Empty).unwrap();
        assert_eq!(board_image(&grid.snapshot(), 0).dimensions(), (3, 3));
    }

    #[test]
    fn test_screenshot_paths() {
        let files = screenshot_paths(Path::new("shots"), 1_700_000_000_123);

        assert_eq!(files.window, Path::new("shots/game_of_life_1700000000123.png"));
        assert_eq!(files.board, Path::new("shots/board_1700000000123.png"));
    }

    #[test]
    fn test_screenshots_in_same_second_get_distinct_names() {
        let first = screenshot_paths(Path::new("."), 1_700_000_000_100);
        let second = screenshot_paths(Path::new("."), 1_700_000_000_900);

        assert_ne!(first.window, second.window);
        assert_ne!(first.board, second.board);
    }

    #[test]
    fn test_save_board_writes_png() {
        let mut grid = GridState::new(6, 6, FillMode::Empty).unwrap();
        grid.set_cell(3, 3, true);
        let path = std::env::temp_dir().join(format!("board_test_{}.png", std::process::id()));

        save_board(&grid.snapshot(), &path).unwrap();

        let loaded = image::open(&path).unwrap().into_luma8();
        assert_eq!(loaded.dimensions(), (6 * BOARD_SCALE, 6 * BOARD_SCALE));
        assert_eq!(loaded.get_pixel(3 * BOARD_SCALE, 3 * BOARD_SCALE).0, [255]);
        std::fs::remove_file(&path).unwrap();
    }
}
