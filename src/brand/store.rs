use super::{BrandKit, BrandKitError, CustomColor, Logo};
use chrono::Utc;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

const STORE_FILE: &str = "brand_kit.json";

/// File-backed persistence for the singleton brand kit.
///
/// Every mutating operation persists synchronously before returning, so the
/// on-disk kit always reflects the last completed call.
pub struct BrandKitStore {
    path: PathBuf,
}

impl BrandKitStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The store at the platform config location.
    pub fn default_location() -> Option<Self> {
        let dirs = directories::ProjectDirs::from("", "", "prospectus")?;
        Some(Self::new(dirs.config_dir().join(STORE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted kit.
    ///
    /// A missing file means a fresh default kit. A file that fails to parse
    /// also degrades to the default: the kit is user-recoverable state, not
    /// something worth failing the editor over.
    pub fn load(&self) -> BrandKit {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return BrandKit::default(),
            Err(e) => {
                log::warn!("failed to read brand kit from {}: {e}", self.path.display());
                return BrandKit::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(kit) => kit,
            Err(e) => {
                log::warn!("discarding corrupted brand kit at {}: {e}", self.path.display());
                BrandKit::default()
            }
        }
    }

    /// Stamp `updated_at` and persist the kit.
    pub fn save(&self, kit: &mut BrandKit) -> Result<(), BrandKitError> {
        kit.updated_at = Utc::now();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(kit)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Set a dotted-path field and persist.
    pub fn update(&self, kit: &mut BrandKit, path: &str, value: &str) -> Result<(), BrandKitError> {
        kit.set(path, value)?;
        self.save(kit)
    }

    /// Apply a preset and persist.
    pub fn apply_preset(&self, kit: &mut BrandKit, preset_id: &str) -> Result<(), BrandKitError> {
        kit.apply_preset(preset_id)?;
        self.save(kit)
    }

    pub fn add_logo(&self, kit: &mut BrandKit, logo: Logo) -> Result<(), BrandKitError> {
        kit.logos.push(logo);
        self.save(kit)
    }

    pub fn remove_logo(&self, kit: &mut BrandKit, logo_id: &str) -> Result<(), BrandKitError> {
        kit.logos.retain(|logo| logo.id != logo_id);
        self.save(kit)
    }

    pub fn add_custom_color(&self, kit: &mut BrandKit, color: CustomColor) -> Result<(), BrandKitError> {
        kit.custom_colors.push(color);
        self.save(kit)
    }

    pub fn remove_custom_color(&self, kit: &mut BrandKit, color_id: &str) -> Result<(), BrandKitError> {
        kit.custom_colors.retain(|color| color.id != color_id);
        self.save(kit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Color;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> BrandKitStore {
        BrandKitStore::new(dir.path().join("brand_kit.json"))
    }

    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("creating tempdir");
        let store = store_in(&dir);
        let kit = store.load();
        let fresh = BrandKit::default();
        assert_eq!(kit.name, fresh.name);
        assert_eq!(kit.colors, fresh.colors);
        assert_eq!(kit.fonts, fresh.fonts);
        assert!(kit.logos.is_empty());
        assert!(kit.custom_colors.is_empty());
    }

    #[test]
    fn round_trip_preserves_content() {
        let dir = tempdir().expect("creating tempdir");
        let store = store_in(&dir);
        let mut kit = store.load();
        kit.set("colors.primary", "#112233").expect("set failed");
        store.save(&mut kit).expect("save failed");

        let loaded = store.load();
        assert_eq!(loaded.colors.primary, Color::new(0x11, 0x22, 0x33));
        assert_eq!(loaded.created_at, kit.created_at);
        assert_eq!(loaded.updated_at, kit.updated_at);
    }

    #[test]
    fn save_only_touches_updated_at() {
        let dir = tempdir().expect("creating tempdir");
        let store = store_in(&dir);
        let mut kit = store.load();
        store.save(&mut kit).expect("save failed");
        let before = store.load();

        let mut kit = store.load();
        store.save(&mut kit).expect("save failed");
        let after = store.load();

        assert_eq!(before.name, after.name);
        assert_eq!(before.colors, after.colors);
        assert_eq!(before.fonts, after.fonts);
        assert_eq!(before.created_at, after.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[test]
    fn corrupted_store_degrades_to_default() {
        let dir = tempdir().expect("creating tempdir");
        let store = store_in(&dir);
        fs::write(store.path(), "{not json at all").expect("writing store");
        let kit = store.load();
        assert_eq!(kit.name, BrandKit::default().name);
        assert_eq!(kit.colors, BrandKit::default().colors);
    }

    #[test]
    fn logo_list_mutations_persist() {
        let dir = tempdir().expect("creating tempdir");
        let store = store_in(&dir);
        let mut kit = store.load();
        let logo = Logo {
            id: "logo_1".into(),
            name: "Main".into(),
            url: "logo.svg".into(),
            kind: "image/svg+xml".into(),
            format: "svg".into(),
            is_svg: true,
        };
        store.add_logo(&mut kit, logo).expect("add failed");
        assert_eq!(store.load().logos.len(), 1);

        store.remove_logo(&mut kit, "logo_1").expect("remove failed");
        assert!(store.load().logos.is_empty());
    }

    #[test]
    fn custom_color_mutations_persist() {
        let dir = tempdir().expect("creating tempdir");
        let store = store_in(&dir);
        let mut kit = store.load();
        let swatch = CustomColor { id: "cc_1".into(), color: Color::new(1, 2, 3), name: "Trim".into() };
        store.add_custom_color(&mut kit, swatch).expect("add failed");
        assert_eq!(store.load().custom_colors.len(), 1);

        store.remove_custom_color(&mut kit, "cc_1").expect("remove failed");
        assert!(store.load().custom_colors.is_empty());
    }
}
