//! Parameter catalog: the link between preset file codes and processor setters
//!
//! One ordered table of 30 records, each pairing an on-disk code with the
//! setter it drives and the snapshot of its live value. The code strings are
//! the wire contract and are kept byte-for-byte as the format has always
//! written them, trailing-space quirks included (`"BumpDistance"` and
//! `"ParallaxType"` are the two without one).
//!
//! Historical note: the original catalog accidentally fused
//! `"OcclusionContrast "` and `"OcclusionDistance "` into a single string,
//! so old files may carry the fused token with a contrast value under it.
//! The table below carries the two intended codes; [`find`] accepts the
//! fused token as an alias for the contrast entry.

use crate::processor::{ImageProcessor, ParallaxType};

/// Number of parameters in the catalog.
pub const PARAM_COUNT: usize = 30;

/// Fused code written by historical builds in place of the separate
/// occlusion contrast and distance codes. The value stored under it was the
/// contrast.
pub const LEGACY_FUSED_OCCLUSION_CODE: &str = "OcclusionContrast OcclusionDistance ";

/// Value type a parameter expects on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Plain decimal integer
    Integer,
    /// `"0"` / `"1"`, applied via nonzero test
    Boolean,
    /// Integer cast to [`ParallaxType`]
    ParallaxMode,
}

/// Section of the selection tree a parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamGroup {
    Normal,
    Bevel,
    Parallax,
    Specular,
    Occlusion,
}

impl ParamGroup {
    /// All groups in selection-tree order.
    pub const ALL: [ParamGroup; 5] = [
        ParamGroup::Normal,
        ParamGroup::Bevel,
        ParamGroup::Parallax,
        ParamGroup::Specular,
        ParamGroup::Occlusion,
    ];

    /// Get display name for UI
    pub fn display_name(self) -> &'static str {
        match self {
            ParamGroup::Normal => "Normal",
            ParamGroup::Bevel => "Bevel",
            ParamGroup::Parallax => "Height / Parallax",
            ParamGroup::Specular => "Specular",
            ParamGroup::Occlusion => "Occlusion",
        }
    }
}

/// One catalog entry: on-disk code plus its setter and snapshot thunks.
pub struct Parameter {
    /// On-disk identifier, verbatim including any trailing space.
    pub code: &'static str,
    /// Human-readable label for the selection tree.
    pub label: &'static str,
    pub group: ParamGroup,
    pub kind: ParamKind,
    set: fn(&mut ImageProcessor, i32),
    read: fn(&ImageProcessor) -> String,
}

impl Parameter {
    /// Apply a raw on-disk value through this parameter's setter.
    ///
    /// Values parse as decimal integers; unparsable text falls back to 0,
    /// which is what the format's readers have always done.
    pub fn apply(&self, processor: &mut ImageProcessor, raw: &str) {
        let value = raw.trim().parse::<i32>().unwrap_or(0);
        (self.set)(processor, value);
    }

    /// Render the live value to its on-disk string form.
    pub fn snapshot(&self, processor: &ImageProcessor) -> String {
        (self.read)(processor)
    }
}

fn bool_str(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

fn sign_str(direction: i32) -> String {
    bool_str(direction == -1)
}

fn permille_str(value: f32) -> String {
    ((value * 1000.0).round() as i32).to_string()
}

/// The full ordered catalog. Append-only: existing entries never move or
/// change their code.
pub const PARAMETERS: [Parameter; PARAM_COUNT] = [
    Parameter {
        code: "EnhanceHeight ",
        label: "Enhance height",
        group: ParamGroup::Normal,
        kind: ParamKind::Integer,
        set: |p, v| p.set_normal_depth(v),
        read: |p| p.settings().normal_depth.to_string(),
    },
    Parameter {
        code: "EnhanceSoft ",
        label: "Enhance softness",
        group: ParamGroup::Normal,
        kind: ParamKind::Integer,
        set: |p, v| p.set_normal_blur_radius(v),
        read: |p| p.settings().normal_blur_radius.to_string(),
    },
    Parameter {
        code: "BumpHeight ",
        label: "Bevel height",
        group: ParamGroup::Bevel,
        kind: ParamKind::Integer,
        set: |p, v| p.set_normal_bisel_depth(v),
        read: |p| p.settings().normal_bisel_depth.to_string(),
    },
    Parameter {
        code: "BumpDistance",
        label: "Bevel distance",
        group: ParamGroup::Bevel,
        kind: ParamKind::Integer,
        set: |p, v| p.set_normal_bisel_distance(v),
        read: |p| p.settings().normal_bisel_distance.to_string(),
    },
    Parameter {
        code: "BumpSoft ",
        label: "Bevel softness",
        group: ParamGroup::Bevel,
        kind: ParamKind::Integer,
        set: |p, v| p.set_normal_bisel_blur_radius(v),
        read: |p| p.settings().normal_bisel_blur_radius.to_string(),
    },
    Parameter {
        code: "BumpCut ",
        label: "Soft bevel",
        group: ParamGroup::Bevel,
        kind: ParamKind::Boolean,
        set: |p, v| p.set_normal_bisel_soft(v != 0),
        read: |p| bool_str(p.settings().normal_bisel_soft),
    },
    Parameter {
        code: "Tile ",
        label: "Tileable",
        group: ParamGroup::Normal,
        kind: ParamKind::Boolean,
        set: |p, v| p.set_tileable(v != 0),
        read: |p| bool_str(p.settings().tileable),
    },
    Parameter {
        code: "InvertX ",
        label: "Invert X",
        group: ParamGroup::Normal,
        kind: ParamKind::Boolean,
        set: |p, v| p.set_normal_invert_x(v != 0),
        read: |p| sign_str(p.settings().normal_invert_x),
    },
    Parameter {
        code: "InvertY ",
        label: "Invert Y",
        group: ParamGroup::Normal,
        kind: ParamKind::Boolean,
        set: |p, v| p.set_normal_invert_y(v != 0),
        read: |p| sign_str(p.settings().normal_invert_y),
    },
    Parameter {
        code: "ParallaxType",
        label: "Parallax mode",
        group: ParamGroup::Parallax,
        kind: ParamKind::ParallaxMode,
        set: |p, v| p.set_parallax_type(ParallaxType::from_index(v)),
        read: |p| p.settings().parallax_type.index().to_string(),
    },
    Parameter {
        code: "BinaryThreshold ",
        label: "Threshold",
        group: ParamGroup::Parallax,
        kind: ParamKind::Integer,
        set: |p, v| p.set_parallax_thresh(v),
        read: |p| p.settings().parallax_max.to_string(),
    },
    Parameter {
        code: "BinaryFocus ",
        label: "Focus",
        group: ParamGroup::Parallax,
        kind: ParamKind::Integer,
        set: |p, v| p.set_parallax_focus(v),
        read: |p| p.settings().parallax_focus.to_string(),
    },
    Parameter {
        code: "ParallaxSoft ",
        label: "Softness",
        group: ParamGroup::Parallax,
        kind: ParamKind::Integer,
        set: |p, v| p.set_parallax_soft(v),
        read: |p| p.settings().parallax_soft.to_string(),
    },
    Parameter {
        code: "BinaryMinHeight ",
        label: "Minimum height",
        group: ParamGroup::Parallax,
        kind: ParamKind::Integer,
        set: |p, v| p.set_parallax_min(v),
        read: |p| p.settings().parallax_min.to_string(),
    },
    Parameter {
        code: "BinaryErodeDilate ",
        label: "Erode / dilate",
        group: ParamGroup::Parallax,
        kind: ParamKind::Integer,
        set: |p, v| p.set_parallax_erode_dilate(v),
        read: |p| p.settings().parallax_erode_dilate.to_string(),
    },
    Parameter {
        code: "HeightMapBrightness ",
        label: "Brightness",
        group: ParamGroup::Parallax,
        kind: ParamKind::Integer,
        set: |p, v| p.set_parallax_brightness(v),
        read: |p| p.settings().parallax_brightness.to_string(),
    },
    Parameter {
        code: "HeightMapContrast ",
        label: "Contrast",
        group: ParamGroup::Parallax,
        kind: ParamKind::Integer,
        set: |p, v| p.set_parallax_contrast(v),
        read: |p| permille_str(p.settings().parallax_contrast),
    },
    Parameter {
        code: "InvertParallax ",
        label: "Invert",
        group: ParamGroup::Parallax,
        kind: ParamKind::Boolean,
        set: |p, v| p.set_parallax_invert(v != 0),
        read: |p| bool_str(p.settings().parallax_invert),
    },
    Parameter {
        code: "SpecularBlur ",
        label: "Blur",
        group: ParamGroup::Specular,
        kind: ParamKind::Integer,
        set: |p, v| p.set_specular_blur(v),
        read: |p| p.settings().specular_blur.to_string(),
    },
    Parameter {
        code: "SpecularBright ",
        label: "Brightness",
        group: ParamGroup::Specular,
        kind: ParamKind::Integer,
        set: |p, v| p.set_specular_bright(v),
        read: |p| p.settings().specular_bright.to_string(),
    },
    Parameter {
        code: "SpecularContrast ",
        label: "Contrast",
        group: ParamGroup::Specular,
        kind: ParamKind::Integer,
        set: |p, v| p.set_specular_contrast(v),
        read: |p| permille_str(p.settings().specular_contrast),
    },
    Parameter {
        code: "SpecularThresh ",
        label: "Threshold",
        group: ParamGroup::Specular,
        kind: ParamKind::Integer,
        set: |p, v| p.set_specular_thresh(v),
        read: |p| p.settings().specular_thresh.to_string(),
    },
    Parameter {
        code: "SpecularInvert ",
        label: "Invert",
        group: ParamGroup::Specular,
        kind: ParamKind::Boolean,
        set: |p, v| p.set_specular_invert(v != 0),
        read: |p| bool_str(p.settings().specular_invert),
    },
    Parameter {
        code: "OcclusionBlur ",
        label: "Blur",
        group: ParamGroup::Occlusion,
        kind: ParamKind::Integer,
        set: |p, v| p.set_occlusion_blur(v),
        read: |p| p.settings().occlusion_blur.to_string(),
    },
    Parameter {
        code: "OcclusionBright ",
        label: "Brightness",
        group: ParamGroup::Occlusion,
        kind: ParamKind::Integer,
        set: |p, v| p.set_occlusion_bright(v),
        read: |p| p.settings().occlusion_bright.to_string(),
    },
    Parameter {
        code: "OcclusionInvert ",
        label: "Invert",
        group: ParamGroup::Occlusion,
        kind: ParamKind::Boolean,
        set: |p, v| p.set_occlusion_invert(v != 0),
        read: |p| bool_str(p.settings().occlusion_invert),
    },
    Parameter {
        code: "OcclusionThresh ",
        label: "Threshold",
        group: ParamGroup::Occlusion,
        kind: ParamKind::Integer,
        set: |p, v| p.set_occlusion_thresh(v),
        read: |p| p.settings().occlusion_thresh.to_string(),
    },
    Parameter {
        code: "OcclusionContrast ",
        label: "Contrast",
        group: ParamGroup::Occlusion,
        kind: ParamKind::Integer,
        set: |p, v| p.set_occlusion_contrast(v),
        read: |p| permille_str(p.settings().occlusion_contrast),
    },
    Parameter {
        code: "OcclusionDistance ",
        label: "Distance",
        group: ParamGroup::Occlusion,
        kind: ParamKind::Integer,
        set: |p, v| p.set_occlusion_distance(v),
        read: |p| p.settings().occlusion_distance.to_string(),
    },
    Parameter {
        code: "OcclusionDistanceMode ",
        label: "Distance mode",
        group: ParamGroup::Occlusion,
        kind: ParamKind::Boolean,
        set: |p, v| p.set_occlusion_distance_mode(v != 0),
        read: |p| bool_str(p.settings().occlusion_distance_mode),
    },
];

/// Look up a parameter by its exact on-disk code.
///
/// Unknown codes return `None` and are ignored by the applier, so files
/// written by newer catalogs stay loadable. The fused legacy occlusion code
/// resolves to the contrast entry.
pub fn find(code: &str) -> Option<&'static Parameter> {
    if code == LEGACY_FUSED_OCCLUSION_CODE {
        return PARAMETERS.iter().find(|p| p.code == "OcclusionContrast ");
    }
    PARAMETERS.iter().find(|p| p.code == code)
}

/// Capture the on-disk string form of every parameter, in catalog order.
///
/// The presets manager calls this once when it opens; the snapshot is never
/// refreshed while the dialog stays open.
pub fn snapshot_values(processor: &ImageProcessor) -> Vec<String> {
    PARAMETERS.iter().map(|p| p.snapshot(processor)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn test_processor() -> ImageProcessor {
        ImageProcessor::new("sprite", RgbaImage::new(4, 4))
    }

    #[test]
    fn test_catalog_has_thirty_unique_codes() {
        assert_eq!(PARAMETERS.len(), PARAM_COUNT);
        for (i, a) in PARAMETERS.iter().enumerate() {
            for b in &PARAMETERS[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }

    #[test]
    fn test_trailing_space_quirks_preserved() {
        // Every code carries its historical trailing space except these two.
        for p in &PARAMETERS {
            let expects_space = p.code != "BumpDistance" && p.code != "ParallaxType";
            assert_eq!(p.code.ends_with(' '), expects_space, "code {:?}", p.code);
        }
    }

    #[test]
    fn test_find_requires_exact_match() {
        assert!(find("Tile ").is_some());
        assert!(find("Tile").is_none());
        assert!(find("UnknownParam").is_none());
    }

    #[test]
    fn test_fused_legacy_code_resolves_to_contrast() {
        let param = find(LEGACY_FUSED_OCCLUSION_CODE).unwrap();
        assert_eq!(param.code, "OcclusionContrast ");

        let mut p = test_processor();
        param.apply(&mut p, "500");
        assert!((p.settings().occlusion_contrast - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_snapshot_matches_catalog_order_and_encoding() {
        let mut p = test_processor();
        p.set_tileable(true);
        p.set_normal_invert_x(true);
        p.set_parallax_contrast(1250);

        let values = snapshot_values(&p);
        assert_eq!(values.len(), PARAM_COUNT);

        let index_of = |code: &str| PARAMETERS.iter().position(|prm| prm.code == code).unwrap();
        assert_eq!(values[index_of("Tile ")], "1");
        assert_eq!(values[index_of("InvertX ")], "1");
        assert_eq!(values[index_of("InvertY ")], "0");
        assert_eq!(values[index_of("HeightMapContrast ")], "1250");
        assert_eq!(values[index_of("EnhanceHeight ")], "100");
    }

    #[test]
    fn test_apply_parses_decimal_and_falls_back_to_zero() {
        let mut p = test_processor();
        let blur = find("SpecularBlur ").unwrap();
        blur.apply(&mut p, "25");
        assert_eq!(p.settings().specular_blur, 25);
        blur.apply(&mut p, "not a number");
        assert_eq!(p.settings().specular_blur, 0);
    }

    #[test]
    fn test_boolean_apply_uses_nonzero_test() {
        let mut p = test_processor();
        let tile = find("Tile ").unwrap();
        tile.apply(&mut p, "2");
        assert!(p.settings().tileable);
        tile.apply(&mut p, "0");
        assert!(!p.settings().tileable);
    }

    #[test]
    fn test_parallax_mode_applies_enum_cast() {
        let mut p = test_processor();
        let mode = find("ParallaxType").unwrap();
        assert_eq!(mode.kind, ParamKind::ParallaxMode);
        mode.apply(&mut p, "1");
        assert_eq!(p.settings().parallax_type, ParallaxType::HeightMap);
    }
}
