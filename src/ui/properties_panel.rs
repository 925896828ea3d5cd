//! Properties panel for the selected texture
//!
//! Sliders and toggles over the live generation settings. Edits go straight
//! to the settings struct; the preset subsystem snapshots and restores the
//! same fields through the parameter catalog.

use crate::processor::{ImageProcessor, ParallaxType};

/// Render the settings panel for one processor.
pub fn render(ui: &mut egui::Ui, processor: &mut ImageProcessor) {
    ui.heading(egui::RichText::new(processor.name()).size(14.0));
    ui.add_space(8.0);

    let settings = processor.settings_mut();

    ui.collapsing("Normal", |ui| {
        ui.add(egui::Slider::new(&mut settings.normal_depth, 0..=300).text("Height"));
        ui.add(egui::Slider::new(&mut settings.normal_blur_radius, 0..=30).text("Softness"));
        ui.checkbox(&mut settings.tileable, "Tileable");

        let mut invert_x = settings.normal_invert_x == -1;
        if ui.checkbox(&mut invert_x, "Invert X").changed() {
            settings.normal_invert_x = if invert_x { -1 } else { 1 };
        }
        let mut invert_y = settings.normal_invert_y == -1;
        if ui.checkbox(&mut invert_y, "Invert Y").changed() {
            settings.normal_invert_y = if invert_y { -1 } else { 1 };
        }
    });

    ui.collapsing("Bevel", |ui| {
        ui.add(egui::Slider::new(&mut settings.normal_bisel_depth, 0..=300).text("Height"));
        ui.add(egui::Slider::new(&mut settings.normal_bisel_distance, 0..=300).text("Distance"));
        ui.add(egui::Slider::new(&mut settings.normal_bisel_blur_radius, 0..=30).text("Softness"));
        ui.checkbox(&mut settings.normal_bisel_soft, "Soft bevel");
    });

    ui.collapsing("Height / Parallax", |ui| {
        egui::ComboBox::from_id_source("parallax_mode_selector")
            .selected_text(settings.parallax_type.display_name())
            .show_ui(ui, |ui| {
                for mode in [
                    ParallaxType::Binary,
                    ParallaxType::HeightMap,
                    ParallaxType::Intervals,
                    ParallaxType::Quantization,
                ] {
                    ui.selectable_value(&mut settings.parallax_type, mode, mode.display_name());
                }
            });
        ui.add(egui::Slider::new(&mut settings.parallax_max, 0..=255).text("Threshold"));
        ui.add(egui::Slider::new(&mut settings.parallax_focus, 0..=10).text("Focus"));
        ui.add(egui::Slider::new(&mut settings.parallax_soft, 0..=30).text("Softness"));
        ui.add(egui::Slider::new(&mut settings.parallax_min, 0..=255).text("Minimum height"));
        ui.add(egui::Slider::new(&mut settings.parallax_erode_dilate, -10..=10).text("Erode / dilate"));
        ui.add(egui::Slider::new(&mut settings.parallax_brightness, -255..=255).text("Brightness"));
        ui.add(egui::Slider::new(&mut settings.parallax_contrast, 0.0..=2.0).text("Contrast"));
        ui.checkbox(&mut settings.parallax_invert, "Invert");
    });

    ui.collapsing("Specular", |ui| {
        ui.add(egui::Slider::new(&mut settings.specular_blur, 0..=30).text("Blur"));
        ui.add(egui::Slider::new(&mut settings.specular_bright, -255..=255).text("Brightness"));
        ui.add(egui::Slider::new(&mut settings.specular_contrast, 0.0..=2.0).text("Contrast"));
        ui.add(egui::Slider::new(&mut settings.specular_thresh, 0..=255).text("Threshold"));
        ui.checkbox(&mut settings.specular_invert, "Invert");
    });

    ui.collapsing("Occlusion", |ui| {
        ui.add(egui::Slider::new(&mut settings.occlusion_blur, 0..=30).text("Blur"));
        ui.add(egui::Slider::new(&mut settings.occlusion_bright, -255..=255).text("Brightness"));
        ui.add(egui::Slider::new(&mut settings.occlusion_contrast, 0.0..=2.0).text("Contrast"));
        ui.add(egui::Slider::new(&mut settings.occlusion_thresh, 0..=255).text("Threshold"));
        ui.add(egui::Slider::new(&mut settings.occlusion_distance, 0..=255).text("Distance"));
        ui.checkbox(&mut settings.occlusion_distance_mode, "Distance mode");
        ui.checkbox(&mut settings.occlusion_invert, "Invert");
    });
}
