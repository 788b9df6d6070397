use super::{Layout, PageKind};
use std::{collections::BTreeMap, fs, io, path::Path, rc::Rc};
use strum::IntoEnumIterator;

include!(concat!(env!("OUT_DIR"), "/layouts.rs"));

/// The layout catalog: one ordered table per page kind.
///
/// Layout ids are file stems. Registering a layout whose id already exists in
/// any table is an error; the original editor silently let the last
/// registration win, which shadowed one cover layout, so collisions are
/// rejected at load instead.
pub struct LayoutRegistry {
    tables: BTreeMap<PageKind, Vec<Rc<Layout>>>,
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        let tables = PageKind::iter().map(|kind| (kind, Vec::new())).collect();
        Self { tables }
    }
}

impl LayoutRegistry {
    /// The embedded layout catalog.
    pub fn built_in() -> Self {
        let mut registry = Self::default();
        for (id, contents) in LAYOUTS.iter() {
            // This is going to be caught by the test down here.
            let mut layout: Layout = serde_yaml::from_slice(contents).expect("corrupted layout");
            layout.id = id.to_string();
            layout.validate().expect("duplicate element id in layout");
            registry.tables.entry(layout.page).or_default().push(Rc::new(layout));
        }
        registry
    }

    /// Register all the layouts in the given directory.
    pub fn register_from_directory<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadLayoutError> {
        let handle = match fs::read_dir(&path) {
            Ok(handle) => handle,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        let mut entries: Vec<_> = handle.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by_key(|e| e.path());
        for entry in entries {
            let metadata = entry.metadata()?;
            let Some(file_name) = entry.file_name().to_str().map(ToOwned::to_owned) else {
                continue;
            };
            if !metadata.is_file() || !file_name.ends_with(".yaml") {
                continue;
            }
            let layout_id = file_name.trim_end_matches(".yaml");
            if self.get(layout_id).is_some() {
                return Err(LoadLayoutError::Duplicate(layout_id.into()));
            }
            let contents = fs::read_to_string(entry.path())?;
            let mut layout: Layout = serde_yaml::from_str(&contents)
                .map_err(|e| LoadLayoutError::Corrupted(layout_id.into(), e.into()))?;
            layout.id = layout_id.to_string();
            layout
                .validate()
                .map_err(|element_id| LoadLayoutError::DuplicateElementId(layout_id.into(), element_id))?;
            self.tables.entry(layout.page).or_default().push(Rc::new(layout));
        }
        Ok(())
    }

    /// Look up a layout by id across all tables.
    pub fn get(&self, id: &str) -> Option<Rc<Layout>> {
        self.iter().find(|layout| layout.id == id).cloned()
    }

    /// The layouts for one page kind, in registration order.
    pub fn table(&self, page: PageKind) -> &[Rc<Layout>] {
        self.tables.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate all layouts, table by table.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Layout>> {
        self.tables.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An error loading a layout.
#[derive(thiserror::Error, Debug)]
pub enum LoadLayoutError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("layout '{0}' is corrupted: {1}")]
    Corrupted(String, Box<dyn std::error::Error>),

    #[error("duplicate layout '{0}'")]
    Duplicate(String),

    #[error("layout '{0}' uses element id '{1}' more than once")]
    DuplicateElementId(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn validate_builtin_layouts() {
        // Parsing and validation panics happen inside built_in.
        let registry = LayoutRegistry::built_in();
        assert!(!registry.is_empty());
        for kind in PageKind::iter() {
            assert!(!registry.table(kind).is_empty(), "no {kind} layouts");
        }
        for layout in registry.iter() {
            assert!(!layout.name.is_empty(), "layout '{}' has no name", layout.id);
            assert!(!layout.elements.is_empty(), "layout '{}' has no elements", layout.id);
        }
    }

    #[test]
    fn builtin_ids_unique() {
        let registry = LayoutRegistry::built_in();
        let mut ids: Vec<_> = registry.iter().map(|layout| layout.id.clone()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn register_custom_layout() {
        let directory = tempdir().expect("creating tempdir");
        let contents = "name: Custom\npage: cover\nelements:\n  - type: text\n    role: address\n";
        fs::write(directory.path().join("my_cover.yaml"), contents).expect("writing layout");

        let mut registry = LayoutRegistry::built_in();
        let before = registry.len();
        registry.register_from_directory(directory.path()).expect("loading layouts");
        assert_eq!(registry.len(), before + 1);
        assert!(registry.get("my_cover").is_some());
    }

    #[test]
    fn duplicate_layout_rejected() {
        let directory = tempdir().expect("creating tempdir");
        let registry = LayoutRegistry::built_in();
        let existing = registry.iter().next().expect("no builtin layouts").id.clone();
        let contents = "name: Clash\npage: cover\nelements:\n  - type: text\n";
        fs::write(directory.path().join(format!("{existing}.yaml")), contents).expect("writing layout");

        let mut registry = LayoutRegistry::built_in();
        let err = registry.register_from_directory(directory.path()).expect_err("loading succeeded");
        assert!(matches!(err, LoadLayoutError::Duplicate(_)));
    }

    #[test]
    fn duplicate_element_id_rejected() {
        let directory = tempdir().expect("creating tempdir");
        let contents = "name: Broken\npage: cover\nelements:\n  - type: image\n    id: hero\n  - type: image\n    id: hero\n";
        fs::write(directory.path().join("broken.yaml"), contents).expect("writing layout");

        let mut registry = LayoutRegistry::default();
        let err = registry.register_from_directory(directory.path()).expect_err("loading succeeded");
        assert!(matches!(err, LoadLayoutError::DuplicateElementId(..)));
    }

    #[test]
    fn register_from_missing_directory() {
        let mut registry = LayoutRegistry::default();
        registry
            .register_from_directory("/tmp/prospectus/8ee2027983915ec78acc45027d874316")
            .expect("loading failed");
    }
}
