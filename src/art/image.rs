use std::path::Path;

use log::debug;

/// Pixel size of a cover image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ArtDimensions {
    pub width: u32,
    pub height: u32,
}

impl ArtDimensions {
    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.width, self.height)
    }
}

/// Width over height; a zero height gives a square.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        return 1.0;
    }
    width as f32 / height as f32
}

/// Read the image header only; `None` when the file is not a readable image.
pub fn probe_dimensions(path: &Path) -> Option<ArtDimensions> {
    match ::image::image_dimensions(path) {
        Ok((width, height)) => {
            debug!("img aspect ratio == {}", aspect_ratio(width, height));
            Some(ArtDimensions { width, height })
        }
        Err(e) => {
            debug!("cannot read image size of {}: {e}", path.display());
            None
        }
    }
}

/// Largest `(width, height)` with the given aspect that fits in the box.
pub fn fit_within(max_width: u16, max_height: u16, aspect: f32) -> (u16, u16) {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };

    let height_for_full_width = (max_width as f32 / aspect).floor();
    if height_for_full_width <= max_height as f32 {
        (max_width, height_for_full_width as u16)
    } else {
        let width = (max_height as f32 * aspect).floor().min(max_width as f32);
        (width as u16, max_height)
    }
}
