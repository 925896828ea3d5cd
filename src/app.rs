//! Main application state and UI
//!
//! Owns the authoritative processor collection, the preview, and the
//! presets manager window. Map generation itself happens elsewhere; this
//! window is the host the preset subsystem reports back to.

use crate::preferences::AppPreferences;
use crate::presets::PresetStore;
use crate::processor::ImageProcessor;
use crate::ui::{properties_panel, PresetsAction, PresetsManagerWindow};
use eframe::egui;
use image::RgbaImage;
use std::path::Path;

/// Main application state
pub struct LaigterApp {
    /// Loaded sprite textures, in load order. Preset application visits
    /// this collection in this order.
    processors: Vec<ImageProcessor>,
    /// Index of the texture shown in the preview and properties panel
    selected: usize,
    /// Built-in sample texture edited before anything is loaded
    sample: ImageProcessor,

    presets_window: PresetsManagerWindow,
    preferences: AppPreferences,

    /// Cached preview texture, keyed by processor name
    preview: Option<(String, egui::TextureHandle)>,
    status_text: String,
}

impl LaigterApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("Initializing Laigter...");

        let preferences = AppPreferences::load();
        let store = match PresetStore::new() {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Falling back to local preset directory: {}", e);
                PresetStore::with_dir("presets")
            }
        };
        log::info!("Preset directory: {}", store.dir().display());

        Self {
            processors: Vec::new(),
            selected: 0,
            sample: ImageProcessor::new("Sample", sample_sprite()),
            presets_window: PresetsManagerWindow::new(store),
            preferences,
            preview: None,
            status_text: String::new(),
        }
    }

    /// The processor currently shown in the preview and panel.
    fn active_processor(&mut self) -> &mut ImageProcessor {
        if self.processors.is_empty() {
            &mut self.sample
        } else {
            let idx = self.selected.min(self.processors.len() - 1);
            &mut self.processors[idx]
        }
    }

    /// Load sprite files into new processors.
    pub fn open_sprites(&mut self, paths: &[std::path::PathBuf]) {
        for path in paths {
            match image::open(path) {
                Ok(img) => {
                    let name = unique_name(&self.processors, &stem_of(path));
                    log::info!("Loaded sprite '{}' from {}", name, path.display());
                    self.processors.push(ImageProcessor::new(name, img.to_rgba8()));
                    self.selected = self.processors.len() - 1;
                }
                Err(e) => {
                    log::error!("Failed to load sprite {}: {}", path.display(), e);
                    self.status_text = format!("Could not load {}", path.display());
                }
            }
        }
        if let Some(dir) = paths.first().and_then(|p| p.parent()) {
            self.preferences.set_last_open_dir(dir);
        }
    }

    fn open_sprite_dialog(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "tga"])
            .add_filter("All Files", &["*"]);
        if let Some(dir) = self.preferences.get_last_open_dir() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(paths) = dialog.pick_files() {
            self.open_sprites(&paths);
        }
    }

    fn open_presets_manager(&mut self) {
        let count = self.processors.len();
        // Snapshot comes from whichever texture is active right now.
        if self.processors.is_empty() {
            self.presets_window.open_with(&self.sample, count);
        } else {
            let idx = self.selected.min(count - 1);
            self.presets_window.open_with(&self.processors[idx], count);
        }
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Sprite...").clicked() {
                        ui.close_menu();
                        self.open_sprite_dialog();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Tools", |ui| {
                    if ui.button("Presets Manager...").clicked() {
                        ui.close_menu();
                        self.open_presets_manager();
                    }
                });
            });
        });
    }

    fn show_texture_list(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("texture_list")
            .default_width(160.0)
            .show(ctx, |ui| {
                ui.heading("Textures");
                ui.add_space(4.0);
                if ui.button("Open Sprite...").clicked() {
                    self.open_sprite_dialog();
                }
                ui.separator();
                if self.processors.is_empty() {
                    ui.label(egui::RichText::new("No sprites loaded").weak());
                }
                for i in 0..self.processors.len() {
                    let name = self.processors[i].name().to_string();
                    if ui.selectable_label(self.selected == i, name).clicked() {
                        self.selected = i;
                    }
                }
            });
    }

    fn show_properties(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("properties_panel")
            .default_width(240.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        properties_panel::render(ui, self.active_processor());
                    });
            });
    }

    fn show_preview(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let name = self.active_processor().name().to_string();
            let stale = self.preview.as_ref().map(|(n, _)| n != &name).unwrap_or(true);
            if stale {
                let img = self.active_processor().image().clone();
                let size = [img.width() as usize, img.height() as usize];
                let color = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
                // Nearest filtering keeps pixel art crisp when zoomed.
                let handle =
                    ctx.load_texture(format!("preview_{}", name), color, egui::TextureOptions::NEAREST);
                self.preview = Some((name, handle));
            }

            if let Some((_, texture)) = &self.preview {
                let available = ui.available_size();
                let tex_size = texture.size_vec2();
                let scale = (available.x / tex_size.x).min(available.y / tex_size.y).min(4.0);
                ui.centered_and_justified(|ui| {
                    ui.image((texture.id(), tex_size * scale.max(0.1)));
                });
            }
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.status_text.is_empty() {
                    ui.label(egui::RichText::new(format!("{} texture(s)", self.processors.len())).weak());
                } else {
                    ui.label(&self.status_text);
                }
            });
        });
    }
}

impl eframe::App for LaigterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_menu_bar(ctx);
        self.show_status_bar(ctx);
        self.show_texture_list(ctx);
        self.show_properties(ctx);
        self.show_preview(ctx);

        let actions = self
            .presets_window
            .render(ctx, &mut self.processors, &mut self.preferences);
        for action in actions {
            match action {
                PresetsAction::Applied => {
                    // Re-enable our side of things now that the loop is done.
                    self.status_text = "Preset applied".to_string();
                    self.preview = None; // settings may have changed the active texture
                }
            }
        }
    }
}

/// Striped sample sprite used before any texture is loaded.
fn sample_sprite() -> RgbaImage {
    RgbaImage::from_fn(64, 64, |x, y| {
        let v = if (x / 8 + y / 8) % 2 == 0 { 192 } else { 64 };
        image::Rgba([v, v, v, 255])
    })
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "texture".to_string())
}

/// Texture names must be unique: preset targeting is by display name.
fn unique_name(processors: &[ImageProcessor], base: &str) -> String {
    if !processors.iter().any(|p| p.name() == base) {
        return base.to_string();
    }
    let mut n = 2;
    loop {
        let candidate = format!("{} ({})", base, n);
        if !processors.iter().any(|p| p.name() == candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_name_suffixes_duplicates() {
        let processors = vec![
            ImageProcessor::new("rock", RgbaImage::new(2, 2)),
            ImageProcessor::new("rock (2)", RgbaImage::new(2, 2)),
        ];
        assert_eq!(unique_name(&processors, "rock"), "rock (3)");
        assert_eq!(unique_name(&processors, "moss"), "moss");
    }

    #[test]
    fn test_stem_of_strips_extension() {
        assert_eq!(stem_of(Path::new("/sprites/rock.png")), "rock");
    }
}
