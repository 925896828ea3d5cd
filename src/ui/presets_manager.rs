//! Presets Manager window
//!
//! Save the current generation settings as a named preset, and apply stored
//! presets to any selection of loaded textures. The value snapshot is taken
//! once when the window opens and is not refreshed while it stays open.
//!
//! Applying runs to completion with the window's controls disabled: one
//! texture is processed per frame so the interface stays responsive, but
//! there is no cancellation once started.

use std::collections::{HashMap, VecDeque};

use crate::preferences::AppPreferences;
use crate::presets::{catalog, ParamGroup, Preset, PresetStore, PARAMETERS, PARAM_COUNT};
use crate::processor::ImageProcessor;

/// Actions emitted for the host window to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetsAction {
    /// A preset finished applying to every selected texture
    Applied,
}

/// In-flight application of one preset to a queue of processors.
struct ApplyJob {
    preset: Preset,
    /// Processor indices still to visit, in collection order
    remaining: VecDeque<usize>,
}

/// Presets manager window state.
pub struct PresetsManagerWindow {
    /// Whether the window is open
    pub open: bool,
    store: PresetStore,
    /// Names from the last catalog scan, backing the dropdown
    preset_names: Vec<String>,
    selected_preset: Option<usize>,
    new_preset_name: String,
    /// Checked state per catalog index; only checked parameters are saved
    checked: [bool; PARAM_COUNT],
    /// Value snapshot captured when the window opened
    current_values: Vec<String>,
    /// Multi-selection over the processor list, parallel by index
    selected_textures: Vec<bool>,
    /// Modal message shown over the window, if any
    message: Option<String>,
    /// Status line shown during apply
    status: String,
    apply_job: Option<ApplyJob>,
    /// Cached list thumbnails keyed by processor name
    thumbnails: HashMap<String, egui::TextureHandle>,
}

impl PresetsManagerWindow {
    /// Create a presets manager over the given store (closed by default).
    pub fn new(store: PresetStore) -> Self {
        Self {
            open: false,
            store,
            preset_names: Vec::new(),
            selected_preset: None,
            new_preset_name: String::new(),
            checked: [false; PARAM_COUNT],
            current_values: Vec::new(),
            selected_textures: Vec::new(),
            message: None,
            status: String::new(),
            apply_job: None,
            thumbnails: HashMap::new(),
        }
    }

    /// Open the window, snapshotting the reference processor's live values.
    pub fn open_with(&mut self, reference: &ImageProcessor, processor_count: usize) {
        self.open = true;
        self.current_values = catalog::snapshot_values(reference);
        self.selected_textures = vec![false; processor_count];
        self.message = None;
        self.status.clear();
        self.refresh_presets();
    }

    /// Re-scan the preset directory, replacing the dropdown contents.
    fn refresh_presets(&mut self) {
        self.preset_names = self.store.scan();
        self.selected_preset = if self.preset_names.is_empty() { None } else { Some(0) };
    }

    fn selected_preset_name(&self) -> Option<&str> {
        self.selected_preset
            .and_then(|i| self.preset_names.get(i))
            .map(String::as_str)
    }

    /// Render the window and advance any in-flight apply job.
    ///
    /// Returns actions for the host window to process.
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        processors: &mut [ImageProcessor],
        prefs: &mut AppPreferences,
    ) -> Vec<PresetsAction> {
        let mut actions = Vec::new();

        if self.selected_textures.len() != processors.len() {
            self.selected_textures.resize(processors.len(), false);
        }

        // One processor per frame keeps the UI responsive through a long
        // selection; the disabled controls below prevent re-entrant edits.
        if let Some(job) = &mut self.apply_job {
            if let Some(idx) = job.remaining.pop_front() {
                if let Some(p) = processors.get_mut(idx) {
                    self.status = format!("Applying {} to {}...", job.preset.name, p.name());
                    job.preset.apply_to(p);
                }
                ctx.request_repaint();
            } else {
                log::info!("Preset '{}' applied", job.preset.name);
                self.status.clear();
                self.apply_job = None;
                actions.push(PresetsAction::Applied);
            }
        }

        if !self.open {
            return actions;
        }

        let mut open = self.open;
        egui::Window::new("Presets Manager")
            .id(egui::Id::new("presets_manager_window"))
            .open(&mut open)
            .default_size([420.0, 560.0])
            .resizable(true)
            .show(ctx, |ui| {
                let busy = self.apply_job.is_some() || self.message.is_some();
                ui.add_enabled_ui(!busy, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            self.render_contents(ui, processors, prefs);
                        });
                });

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(egui::RichText::new(&self.status).small());
                }
            });
        self.open = open;

        self.render_message_modal(ctx);

        actions
    }

    fn render_contents(
        &mut self,
        ui: &mut egui::Ui,
        processors: &[ImageProcessor],
        prefs: &mut AppPreferences,
    ) {
        // ========== STORED PRESETS ==========
        ui.heading("Stored Presets");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let selected_text = self.selected_preset_name().unwrap_or("(none)").to_string();
            egui::ComboBox::from_id_source("preset_selector")
                .selected_text(selected_text)
                .width(180.0)
                .show_ui(ui, |ui| {
                    for (i, name) in self.preset_names.iter().enumerate() {
                        if ui.selectable_label(self.selected_preset == Some(i), name).clicked() {
                            self.selected_preset = Some(i);
                        }
                    }
                });

            if ui.button("Apply").clicked() {
                self.start_apply();
            }
            if ui.button("Delete").clicked() {
                if let Some(name) = self.selected_preset_name().map(str::to_string) {
                    if let Err(e) = self.store.delete(&name) {
                        log::warn!("Failed to delete preset '{}': {}", name, e);
                    }
                    self.refresh_presets();
                }
            }
        });

        ui.horizontal(|ui| {
            if ui.button("Export...").clicked() {
                self.export_selected(prefs);
            }
            if ui.button("Import...").clicked() {
                self.import_preset(prefs);
            }
        });

        ui.add_space(8.0);
        ui.separator();

        // ========== TEXTURES ==========
        ui.add_space(4.0);
        ui.heading("Apply To");
        ui.label(egui::RichText::new("Select the textures that receive the preset").small().weak());
        ui.add_space(4.0);

        if processors.is_empty() {
            ui.label(egui::RichText::new("No textures loaded").weak());
        }
        for (i, processor) in processors.iter().enumerate() {
            let texture = self.thumbnail_for(ui.ctx(), processor);
            ui.horizontal(|ui| {
                ui.image((texture, egui::vec2(24.0, 24.0)));
                let selected = self.selected_textures[i];
                if ui.selectable_label(selected, processor.name()).clicked() {
                    self.selected_textures[i] = !selected;
                }
            });
        }

        ui.add_space(8.0);
        ui.separator();

        // ========== PARAMETERS ==========
        ui.add_space(4.0);
        ui.heading("Parameters To Save");
        ui.add_space(4.0);

        for group in ParamGroup::ALL {
            self.render_group(ui, group);
        }

        ui.add_space(8.0);
        ui.separator();

        // ========== SAVE ==========
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.add(
                egui::TextEdit::singleline(&mut self.new_preset_name)
                    .desired_width(160.0)
                    .hint_text("my_preset"),
            );
            if ui.button("Save Preset").clicked() {
                self.save_preset();
            }
        });
    }

    /// One collapsible section of the parameter selection tree.
    fn render_group(&mut self, ui: &mut egui::Ui, group: ParamGroup) {
        let indices: Vec<usize> = PARAMETERS
            .iter()
            .enumerate()
            .filter(|(_, p)| p.group == group)
            .map(|(i, _)| i)
            .collect();

        ui.collapsing(group.display_name(), |ui| {
            let mut all = indices.iter().all(|&i| self.checked[i]);
            if ui.checkbox(&mut all, "Select all").changed() {
                for &i in &indices {
                    self.checked[i] = all;
                }
            }
            ui.separator();
            for &i in &indices {
                ui.checkbox(&mut self.checked[i], PARAMETERS[i].label);
            }
        });
    }

    fn save_preset(&mut self) {
        let name = self.new_preset_name.trim().to_string();
        match self.store.save(&name, &self.checked, &self.current_values) {
            Ok(()) => {
                self.new_preset_name.clear();
                self.refresh_presets();
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Queue the selected preset against the selected textures.
    ///
    /// Targets are visited in collection order, not selection order.
    fn start_apply(&mut self) {
        let Some(name) = self.selected_preset_name().map(str::to_string) else {
            return;
        };
        match self.store.load(&name) {
            Ok(preset) => {
                let remaining: VecDeque<usize> = self
                    .selected_textures
                    .iter()
                    .enumerate()
                    .filter(|(_, &sel)| sel)
                    .map(|(i, _)| i)
                    .collect();
                self.apply_job = Some(ApplyJob { preset, remaining });
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn export_selected(&mut self, prefs: &mut AppPreferences) {
        let Some(name) = self.selected_preset_name().map(str::to_string) else {
            return;
        };
        let mut dialog = rfd::FileDialog::new();
        if let Some(dir) = prefs.get_last_preset_dir() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(dest) = dialog.pick_folder() {
            if let Err(e) = self.store.export(&name, &dest) {
                self.message = Some(e.to_string());
            } else {
                prefs.set_last_preset_dir(&dest);
            }
        }
    }

    fn import_preset(&mut self, prefs: &mut AppPreferences) {
        let mut dialog = rfd::FileDialog::new();
        if let Some(dir) = prefs.get_last_preset_dir() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(source) = dialog.pick_file() {
            match self.store.import(&source) {
                Ok(_) => {
                    if let Some(dir) = source.parent() {
                        prefs.set_last_preset_dir(dir);
                    }
                }
                Err(e) => self.message = Some(e.to_string()),
            }
        }
        self.refresh_presets();
    }

    /// Modal message for failed operations; dismissing leaves the window
    /// open and usable.
    fn render_message_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.message.clone() else {
            return;
        };
        egui::Window::new("Presets")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.message = None;
                }
            });
    }

    fn thumbnail_for(&mut self, ctx: &egui::Context, processor: &ImageProcessor) -> egui::TextureId {
        self.thumbnails
            .entry(processor.name().to_string())
            .or_insert_with(|| {
                let thumb = processor.thumbnail();
                let size = [thumb.width() as usize, thumb.height() as usize];
                let image = egui::ColorImage::from_rgba_unmultiplied(size, thumb.as_raw());
                ctx.load_texture(
                    format!("thumb_{}", processor.name()),
                    image,
                    egui::TextureOptions::LINEAR,
                )
            })
            .id()
    }
}
