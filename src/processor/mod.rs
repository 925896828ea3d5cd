//! Image processors: one per loaded sprite texture
//!
//! A processor pairs a sprite image with the live generation settings the
//! map generators would consume. The preset subsystem drives the named
//! setters below; the properties panel edits the settings directly.

mod settings;

pub use settings::{ParallaxType, ProcessorSettings};

use image::RgbaImage;

/// Edge length of the square preview thumbnails shown in texture lists.
pub const THUMBNAIL_SIZE: u32 = 48;

/// One loaded sprite texture and its generation settings.
pub struct ImageProcessor {
    name: String,
    image: RgbaImage,
    settings: ProcessorSettings,
}

impl ImageProcessor {
    /// Create a processor for a loaded sprite.
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
            settings: ProcessorSettings::default(),
        }
    }

    /// Display name used in texture lists and preset targeting.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The loaded sprite image.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn settings(&self) -> &ProcessorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ProcessorSettings {
        &mut self.settings
    }

    /// Downscaled copy of the sprite for list previews.
    pub fn thumbnail(&self) -> RgbaImage {
        image::imageops::thumbnail(&self.image, THUMBNAIL_SIZE, THUMBNAIL_SIZE)
    }

    // Named setters, one per preset parameter. Preset application dispatches
    // through these; values arrive already parsed from their on-disk form.

    pub fn set_normal_depth(&mut self, value: i32) {
        self.settings.normal_depth = value;
    }

    pub fn set_normal_blur_radius(&mut self, value: i32) {
        self.settings.normal_blur_radius = value;
    }

    pub fn set_normal_bisel_depth(&mut self, value: i32) {
        self.settings.normal_bisel_depth = value;
    }

    pub fn set_normal_bisel_distance(&mut self, value: i32) {
        self.settings.normal_bisel_distance = value;
    }

    pub fn set_normal_bisel_blur_radius(&mut self, value: i32) {
        self.settings.normal_bisel_blur_radius = value;
    }

    pub fn set_normal_bisel_soft(&mut self, soft: bool) {
        self.settings.normal_bisel_soft = soft;
    }

    pub fn set_tileable(&mut self, tileable: bool) {
        self.settings.tileable = tileable;
    }

    /// Inverted X stores a direction sign: `true` becomes `-1`.
    pub fn set_normal_invert_x(&mut self, inverted: bool) {
        self.settings.normal_invert_x = if inverted { -1 } else { 1 };
    }

    /// Inverted Y stores a direction sign: `true` becomes `-1`.
    pub fn set_normal_invert_y(&mut self, inverted: bool) {
        self.settings.normal_invert_y = if inverted { -1 } else { 1 };
    }

    pub fn set_parallax_type(&mut self, mode: ParallaxType) {
        self.settings.parallax_type = mode;
    }

    pub fn set_parallax_thresh(&mut self, value: i32) {
        self.settings.parallax_max = value;
    }

    pub fn set_parallax_focus(&mut self, value: i32) {
        self.settings.parallax_focus = value;
    }

    pub fn set_parallax_soft(&mut self, value: i32) {
        self.settings.parallax_soft = value;
    }

    pub fn set_parallax_min(&mut self, value: i32) {
        self.settings.parallax_min = value;
    }

    pub fn set_parallax_erode_dilate(&mut self, value: i32) {
        self.settings.parallax_erode_dilate = value;
    }

    pub fn set_parallax_brightness(&mut self, value: i32) {
        self.settings.parallax_brightness = value;
    }

    /// Contrast arrives as the 1000-scaled integer stored in preset files.
    pub fn set_parallax_contrast(&mut self, permille: i32) {
        self.settings.parallax_contrast = permille as f32 / 1000.0;
    }

    pub fn set_parallax_invert(&mut self, inverted: bool) {
        self.settings.parallax_invert = inverted;
    }

    pub fn set_specular_blur(&mut self, value: i32) {
        self.settings.specular_blur = value;
    }

    pub fn set_specular_bright(&mut self, value: i32) {
        self.settings.specular_bright = value;
    }

    /// Contrast arrives as the 1000-scaled integer stored in preset files.
    pub fn set_specular_contrast(&mut self, permille: i32) {
        self.settings.specular_contrast = permille as f32 / 1000.0;
    }

    pub fn set_specular_thresh(&mut self, value: i32) {
        self.settings.specular_thresh = value;
    }

    pub fn set_specular_invert(&mut self, inverted: bool) {
        self.settings.specular_invert = inverted;
    }

    pub fn set_occlusion_blur(&mut self, value: i32) {
        self.settings.occlusion_blur = value;
    }

    pub fn set_occlusion_bright(&mut self, value: i32) {
        self.settings.occlusion_bright = value;
    }

    pub fn set_occlusion_invert(&mut self, inverted: bool) {
        self.settings.occlusion_invert = inverted;
    }

    pub fn set_occlusion_thresh(&mut self, value: i32) {
        self.settings.occlusion_thresh = value;
    }

    /// Contrast arrives as the 1000-scaled integer stored in preset files.
    pub fn set_occlusion_contrast(&mut self, permille: i32) {
        self.settings.occlusion_contrast = permille as f32 / 1000.0;
    }

    pub fn set_occlusion_distance(&mut self, value: i32) {
        self.settings.occlusion_distance = value;
    }

    pub fn set_occlusion_distance_mode(&mut self, enabled: bool) {
        self.settings.occlusion_distance_mode = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_processor() -> ImageProcessor {
        ImageProcessor::new("sprite", RgbaImage::new(4, 4))
    }

    #[test]
    fn test_invert_setters_store_direction_sign() {
        let mut p = test_processor();
        p.set_normal_invert_x(true);
        p.set_normal_invert_y(false);
        assert_eq!(p.settings().normal_invert_x, -1);
        assert_eq!(p.settings().normal_invert_y, 1);
    }

    #[test]
    fn test_contrast_setters_descale_permille() {
        let mut p = test_processor();
        p.set_parallax_contrast(1500);
        p.set_specular_contrast(250);
        p.set_occlusion_contrast(1000);
        assert!((p.settings().parallax_contrast - 1.5).abs() < 1e-6);
        assert!((p.settings().specular_contrast - 0.25).abs() < 1e-6);
        assert!((p.settings().occlusion_contrast - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_thumbnail_is_bounded() {
        let p = ImageProcessor::new("big", RgbaImage::new(512, 256));
        let thumb = p.thumbnail();
        assert!(thumb.width() <= THUMBNAIL_SIZE);
        assert!(thumb.height() <= THUMBNAIL_SIZE);
    }
}
