//! Live generation settings for one image processor
//!
//! One field per tunable parameter of the normal / height / specular /
//! occlusion map generators. The preset subsystem reads and writes these
//! through the parameter catalog; the properties panel edits them directly.

/// How the height (parallax) map is derived from the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallaxType {
    /// Hard threshold against the alpha/luminance channel
    #[default]
    Binary,
    /// Continuous height from luminance
    HeightMap,
    /// Stepped height intervals
    Intervals,
    /// Quantized luminance buckets
    Quantization,
}

impl ParallaxType {
    /// Decode from the integer stored in preset files.
    ///
    /// Out-of-range values fall back to `Binary`, matching the permissive
    /// parsing policy of the preset format.
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => ParallaxType::HeightMap,
            2 => ParallaxType::Intervals,
            3 => ParallaxType::Quantization,
            _ => ParallaxType::Binary,
        }
    }

    /// Integer form used on disk and in the mode selector.
    pub fn index(self) -> i32 {
        match self {
            ParallaxType::Binary => 0,
            ParallaxType::HeightMap => 1,
            ParallaxType::Intervals => 2,
            ParallaxType::Quantization => 3,
        }
    }

    /// Get display name for UI
    pub fn display_name(self) -> &'static str {
        match self {
            ParallaxType::Binary => "Binary",
            ParallaxType::HeightMap => "Height Map",
            ParallaxType::Intervals => "Intervals",
            ParallaxType::Quantization => "Quantization",
        }
    }
}

/// All tunable generation settings for one texture.
///
/// The X/Y inversion fields hold a direction sign (`1` or `-1`) rather than
/// a bool; the preset format serializes `-1` as `"1"` (inverted) and `1` as
/// `"0"`. Contrast fields are unit floats stored on disk as 1000-scaled
/// integers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorSettings {
    // Normal map (enhance + bevel)
    pub normal_depth: i32,
    pub normal_blur_radius: i32,
    pub normal_bisel_depth: i32,
    pub normal_bisel_distance: i32,
    pub normal_bisel_blur_radius: i32,
    pub normal_bisel_soft: bool,
    pub tileable: bool,
    pub normal_invert_x: i32,
    pub normal_invert_y: i32,

    // Height (parallax) map
    pub parallax_type: ParallaxType,
    pub parallax_max: i32,
    pub parallax_focus: i32,
    pub parallax_soft: i32,
    pub parallax_min: i32,
    pub parallax_erode_dilate: i32,
    pub parallax_brightness: i32,
    pub parallax_contrast: f32,
    pub parallax_invert: bool,

    // Specular map
    pub specular_blur: i32,
    pub specular_bright: i32,
    pub specular_contrast: f32,
    pub specular_thresh: i32,
    pub specular_invert: bool,

    // Occlusion map
    pub occlusion_blur: i32,
    pub occlusion_bright: i32,
    pub occlusion_invert: bool,
    pub occlusion_thresh: i32,
    pub occlusion_contrast: f32,
    pub occlusion_distance: i32,
    pub occlusion_distance_mode: bool,
}

impl Default for ProcessorSettings {
    fn default() -> Self {
        Self {
            normal_depth: 100,
            normal_blur_radius: 5,
            normal_bisel_depth: 100,
            normal_bisel_distance: 60,
            normal_bisel_blur_radius: 16,
            normal_bisel_soft: true,
            tileable: false,
            normal_invert_x: 1,
            normal_invert_y: 1,

            parallax_type: ParallaxType::Binary,
            parallax_max: 140,
            parallax_focus: 3,
            parallax_soft: 10,
            parallax_min: 0,
            parallax_erode_dilate: 1,
            parallax_brightness: 0,
            parallax_contrast: 1.0,
            parallax_invert: false,

            specular_blur: 10,
            specular_bright: 0,
            specular_contrast: 1.0,
            specular_thresh: 127,
            specular_invert: false,

            occlusion_blur: 10,
            occlusion_bright: 16,
            occlusion_invert: false,
            occlusion_thresh: 1,
            occlusion_contrast: 1.0,
            occlusion_distance: 10,
            occlusion_distance_mode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_type_round_trip() {
        for mode in [
            ParallaxType::Binary,
            ParallaxType::HeightMap,
            ParallaxType::Intervals,
            ParallaxType::Quantization,
        ] {
            assert_eq!(ParallaxType::from_index(mode.index()), mode);
        }
    }

    #[test]
    fn test_parallax_type_out_of_range_falls_back_to_binary() {
        assert_eq!(ParallaxType::from_index(-1), ParallaxType::Binary);
        assert_eq!(ParallaxType::from_index(99), ParallaxType::Binary);
    }

    #[test]
    fn test_default_inversion_is_upright() {
        let settings = ProcessorSettings::default();
        assert_eq!(settings.normal_invert_x, 1);
        assert_eq!(settings.normal_invert_y, 1);
    }
}
