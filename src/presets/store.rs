//! Preset file store: scan, save, load, delete, export and import
//!
//! Presets are flat text files in one directory. First line is the literal
//! magic header `[Laigter Preset]`; each following line is `<code>\t<value>`
//! with the code verbatim from the parameter catalog. No escaping, comments
//! or version field; malformed data lines are skipped, not rejected, so
//! hand-edited files keep loading.

use std::fmt::Write as _;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::catalog::{self, PARAM_COUNT};
use crate::processor::ImageProcessor;

/// Magic first line of every preset file.
pub const MAGIC_HEADER: &str = "[Laigter Preset]";

/// One `code → value` pair parsed from a preset file.
///
/// Codes are kept as read; unknown ones simply find no catalog entry at
/// apply time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetEntry {
    pub code: String,
    pub value: String,
}

/// A parsed preset, ready to apply to processors.
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: String,
    pub entries: Vec<PresetEntry>,
}

impl Preset {
    /// Parse preset file contents.
    ///
    /// The first `\n`-separated field must equal the magic header exactly.
    /// Remaining lines split once on tab; lines without a tab (stray or
    /// trailing text) are skipped silently.
    pub fn parse(name: impl Into<String>, contents: &str) -> Result<Self, PresetError> {
        let mut lines = contents.split('\n');
        if lines.next() != Some(MAGIC_HEADER) {
            return Err(PresetError::Format);
        }

        let entries = lines
            .filter_map(|line| {
                let (code, value) = line.split_once('\t')?;
                Some(PresetEntry {
                    code: code.to_string(),
                    value: value.to_string(),
                })
            })
            .collect();

        Ok(Self {
            name: name.into(),
            entries,
        })
    }

    /// Dispatch every recognized entry through the catalog to one processor.
    ///
    /// Setters cannot fail, so application is plain iteration; entries with
    /// unknown codes are ignored. Applying the same preset twice leaves the
    /// processor in the same state as applying it once.
    pub fn apply_to(&self, processor: &mut ImageProcessor) {
        for entry in &self.entries {
            if let Some(param) = catalog::find(&entry.code) {
                param.apply(processor, &entry.value);
            }
        }
    }
}

/// Store rooted at the preset directory.
pub struct PresetStore {
    dir: PathBuf,
}

impl PresetStore {
    /// Store over the default preset directory for this build.
    ///
    /// Normal builds use the platform application-data location; `portable`
    /// builds keep a `presets` directory next to the working directory.
    pub fn new() -> Result<Self, PresetError> {
        let dir = Self::default_dir().ok_or(PresetError::NoDataDir)?;
        Ok(Self { dir })
    }

    /// Store over an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[cfg(not(feature = "portable"))]
    fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|mut p| {
            p.push("Laigter");
            p.push("presets");
            p
        })
    }

    #[cfg(feature = "portable")]
    fn default_dir() -> Option<PathBuf> {
        Some(PathBuf::from("./presets"))
    }

    /// The directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn preset_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn ensure_dir(&self) -> Result<(), PresetError> {
        fs::create_dir_all(&self.dir).map_err(PresetError::Io)
    }

    /// List preset files. A missing or empty directory yields an empty list.
    ///
    /// Order is whatever the directory enumeration yields; callers must not
    /// assume alphabetical.
    pub fn scan(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        entries
            .flatten()
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect()
    }

    /// Write a new preset holding the checked subset of the value snapshot.
    ///
    /// `checked` and `values` are indexed by catalog position. Unchecked
    /// parameters are omitted entirely; partial presets are valid.
    pub fn save(
        &self,
        name: &str,
        checked: &[bool; PARAM_COUNT],
        values: &[String],
    ) -> Result<(), PresetError> {
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }
        self.ensure_dir()?;
        let path = self.preset_path(name);
        if path.exists() {
            return Err(PresetError::AlreadyExists);
        }

        let mut out = String::from(MAGIC_HEADER);
        for (i, param) in catalog::PARAMETERS.iter().enumerate() {
            if checked[i] {
                // Infallible: writing to a String.
                let _ = write!(out, "\n{}\t{}", param.code, values[i]);
            }
        }

        fs::write(&path, out).map_err(PresetError::Io)?;
        log::info!("Saved preset '{}' to {}", name, path.display());
        Ok(())
    }

    /// Read and parse a stored preset.
    pub fn load(&self, name: &str) -> Result<Preset, PresetError> {
        let contents = fs::read_to_string(self.preset_path(name)).map_err(PresetError::Open)?;
        Preset::parse(name, &contents)
    }

    /// Remove a stored preset file.
    pub fn delete(&self, name: &str) -> Result<(), PresetError> {
        fs::remove_file(self.preset_path(name)).map_err(PresetError::Io)
    }

    /// Copy a stored preset verbatim into `dest_dir`.
    pub fn export(&self, name: &str, dest_dir: &Path) -> Result<(), PresetError> {
        fs::copy(self.preset_path(name), dest_dir.join(name)).map_err(PresetError::Open)?;
        Ok(())
    }

    /// Copy an external preset file into the store.
    ///
    /// The stored name is the source base name (up to the first dot). The
    /// source's first line, terminator included, must be exactly the magic
    /// header; headerless single-line files are rejected as the format
    /// always has. Returns the stored name.
    pub fn import(&self, source: &Path) -> Result<String, PresetError> {
        let name = base_name(source);
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }
        let dest = self.preset_path(&name);
        if dest.exists() {
            return Err(PresetError::AlreadyExists);
        }

        let file = fs::File::open(source).map_err(PresetError::Open)?;
        let mut first_line = String::new();
        BufReader::new(file)
            .read_line(&mut first_line)
            .map_err(PresetError::Open)?;
        if first_line != format!("{}\n", MAGIC_HEADER) {
            return Err(PresetError::Format);
        }

        self.ensure_dir()?;
        fs::copy(source, &dest).map_err(PresetError::Io)?;
        log::info!("Imported preset '{}' from {}", name, source.display());
        Ok(name)
    }
}

/// File name up to the first dot, e.g. `rocks.laigter.bak` → `rocks`.
fn base_name(path: &Path) -> String {
    let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    file_name.split('.').next().unwrap_or_default().to_string()
}

/// Errors from preset store operations.
///
/// All of these surface as modal messages; none abort more than the current
/// operation.
#[derive(Debug)]
pub enum PresetError {
    /// Save requested with a blank preset name
    EmptyName,
    /// A preset of that name already exists in the store
    AlreadyExists,
    /// The preset file could not be opened or read
    Open(std::io::Error),
    /// The first line is not the magic header
    Format,
    /// No platform application-data directory available
    NoDataDir,
    Io(std::io::Error),
}

impl std::fmt::Display for PresetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetError::EmptyName => write!(f, "A name for the preset is required"),
            PresetError::AlreadyExists => write!(f, "A preset with that name already exists"),
            PresetError::Open(e) => write!(f, "Could not open the specified preset: {}", e),
            PresetError::Format => write!(f, "Incorrect preset file format"),
            PresetError::NoDataDir => write!(f, "Could not find application data directory"),
            PresetError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PresetError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::catalog::PARAMETERS;
    use image::RgbaImage;
    use tempfile::TempDir;

    fn test_processor() -> ImageProcessor {
        ImageProcessor::new("sprite", RgbaImage::new(4, 4))
    }

    fn store() -> (TempDir, PresetStore) {
        let dir = TempDir::new().unwrap();
        let store = PresetStore::with_dir(dir.path());
        (dir, store)
    }

    fn checked_for(codes: &[&str]) -> [bool; PARAM_COUNT] {
        let mut checked = [false; PARAM_COUNT];
        for (i, param) in PARAMETERS.iter().enumerate() {
            if codes.contains(&param.code) {
                checked[i] = true;
            }
        }
        checked
    }

    #[test]
    fn test_scan_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = PresetStore::with_dir(dir.path().join("nope"));
        assert!(store.scan().is_empty());
    }

    #[test]
    fn test_save_writes_exact_example_bytes() {
        let (dir, store) = store();
        let mut p = test_processor();
        p.set_tileable(true);

        let values = catalog::snapshot_values(&p);
        store.save("metal", &checked_for(&["Tile "]), &values).unwrap();

        let written = fs::read_to_string(dir.path().join("metal")).unwrap();
        assert_eq!(written, "[Laigter Preset]\nTile \t1");
    }

    #[test]
    fn test_save_empty_name_rejected_without_file() {
        let (dir, store) = store();
        let values = catalog::snapshot_values(&test_processor());
        let err = store.save("", &checked_for(&["Tile "]), &values).unwrap_err();
        assert!(matches!(err, PresetError::EmptyName));
        assert!(fs::read_dir(dir.path()).map(|mut d| d.next().is_none()).unwrap_or(true));
    }

    #[test]
    fn test_save_existing_name_keeps_original_content() {
        let (dir, store) = store();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join("metal"), "original").unwrap();

        let values = catalog::snapshot_values(&test_processor());
        let err = store.save("metal", &checked_for(&["Tile "]), &values).unwrap_err();
        assert!(matches!(err, PresetError::AlreadyExists));
        assert_eq!(fs::read_to_string(dir.path().join("metal")).unwrap(), "original");
    }

    #[test]
    fn test_round_trip_restores_checked_and_only_checked() {
        let (_dir, store) = store();
        let mut source = test_processor();
        source.set_tileable(true);
        source.set_normal_depth(250);
        source.set_parallax_contrast(1750);

        let values = catalog::snapshot_values(&source);
        let checked = checked_for(&["Tile ", "EnhanceHeight ", "HeightMapContrast "]);
        store.save("rt", &checked, &values).unwrap();

        let mut target = test_processor();
        target.set_specular_blur(77); // unchecked, must survive
        store.load("rt").unwrap().apply_to(&mut target);

        assert!(target.settings().tileable);
        assert_eq!(target.settings().normal_depth, 250);
        assert!((target.settings().parallax_contrast - 1.75).abs() < 1e-6);
        assert_eq!(target.settings().specular_blur, 77);
    }

    #[test]
    fn test_double_apply_is_idempotent() {
        let (_dir, store) = store();
        let mut source = test_processor();
        source.set_occlusion_distance(42);

        let values = catalog::snapshot_values(&source);
        store.save("once", &checked_for(&["OcclusionDistance "]), &values).unwrap();

        let preset = store.load("once").unwrap();
        let mut target = test_processor();
        preset.apply_to(&mut target);
        let after_first = target.settings().clone();
        preset.apply_to(&mut target);
        assert_eq!(*target.settings(), after_first);
    }

    #[test]
    fn test_load_rejects_bad_header() {
        let (dir, store) = store();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join("bad"), "[Not A Preset]\nTile \t1").unwrap();
        assert!(matches!(store.load("bad"), Err(PresetError::Format)));
    }

    #[test]
    fn test_load_missing_file_is_open_error() {
        let (_dir, store) = store();
        assert!(matches!(store.load("absent"), Err(PresetError::Open(_))));
    }

    #[test]
    fn test_unknown_codes_and_stray_lines_are_skipped() {
        let contents = "[Laigter Preset]\nUnknownParam\t5\nTile \t1\nstray line without tab\n";
        let preset = Preset::parse("fwd", contents).unwrap();
        // Unknown code is kept in the entry list but has no effect on apply.
        assert_eq!(preset.entries.len(), 2);

        let mut target = test_processor();
        preset.apply_to(&mut target);
        assert!(target.settings().tileable);
        assert_eq!(*target.settings(), {
            let mut expect = test_processor();
            expect.set_tileable(true);
            expect.settings().clone()
        });
    }

    #[test]
    fn test_fused_legacy_line_applies_contrast() {
        let contents = "[Laigter Preset]\nOcclusionContrast OcclusionDistance \t1500";
        let preset = Preset::parse("legacy", contents).unwrap();
        let mut target = test_processor();
        preset.apply_to(&mut target);
        assert!((target.settings().occlusion_contrast - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_delete_then_scan_empty() {
        let (_dir, store) = store();
        let values = catalog::snapshot_values(&test_processor());
        store.save("gone", &checked_for(&["Tile "]), &values).unwrap();
        assert_eq!(store.scan(), vec!["gone".to_string()]);
        store.delete("gone").unwrap();
        assert!(store.scan().is_empty());
    }

    #[test]
    fn test_export_copies_verbatim() {
        let (_dir, store) = store();
        let values = catalog::snapshot_values(&test_processor());
        store.save("exp", &checked_for(&["Tile ", "InvertX "]), &values).unwrap();

        let dest = TempDir::new().unwrap();
        store.export("exp", dest.path()).unwrap();
        assert_eq!(
            fs::read_to_string(dest.path().join("exp")).unwrap(),
            fs::read_to_string(store.dir().join("exp")).unwrap()
        );
    }

    #[test]
    fn test_import_requires_header_with_terminator() {
        let (_dir, store) = store();
        let outside = TempDir::new().unwrap();

        // Header present but no line terminator: rejected.
        let bare = outside.path().join("bare.laigter");
        fs::write(&bare, "[Laigter Preset]").unwrap();
        assert!(matches!(store.import(&bare), Err(PresetError::Format)));
        assert!(store.scan().is_empty());

        let good = outside.path().join("rocks.laigter");
        fs::write(&good, "[Laigter Preset]\nTile \t1").unwrap();
        assert_eq!(store.import(&good).unwrap(), "rocks");
        assert_eq!(store.scan(), vec!["rocks".to_string()]);
    }

    #[test]
    fn test_import_existing_name_rejected_without_copy() {
        let (_dir, store) = store();
        let values = catalog::snapshot_values(&test_processor());
        store.save("rocks", &checked_for(&["Tile "]), &values).unwrap();
        let original = fs::read_to_string(store.dir().join("rocks")).unwrap();

        let outside = TempDir::new().unwrap();
        let incoming = outside.path().join("rocks.laigter");
        fs::write(&incoming, "[Laigter Preset]\nInvertX \t1").unwrap();

        assert!(matches!(store.import(&incoming), Err(PresetError::AlreadyExists)));
        assert_eq!(fs::read_to_string(store.dir().join("rocks")).unwrap(), original);
    }

    #[test]
    fn test_base_name_strips_from_first_dot() {
        assert_eq!(base_name(Path::new("/tmp/rocks.laigter")), "rocks");
        assert_eq!(base_name(Path::new("rocks.laigter.bak")), "rocks");
        assert_eq!(base_name(Path::new("plain")), "plain");
    }
}
