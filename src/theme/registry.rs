use super::ColorScheme;
use std::{collections::BTreeMap, fs, io, path::Path};

include!(concat!(env!("OUT_DIR"), "/schemes.rs"));

/// The color scheme catalog.
///
/// Built-in schemes are embedded at compile time; additional schemes can be
/// registered from a directory of YAML files. Scheme ids are file stems and
/// must be unique across both sources.
#[derive(Default)]
pub struct SchemeRegistry {
    custom_schemes: BTreeMap<String, ColorScheme>,
}

impl SchemeRegistry {
    /// Loads a scheme from its id.
    pub fn load_by_id(&self, id: &str) -> Option<ColorScheme> {
        match SCHEMES.get(id) {
            Some(contents) => {
                // This is going to be caught by the test down here.
                let scheme = serde_yaml::from_slice(contents).expect("corrupted scheme");
                Some(scheme)
            }
            None => self.custom_schemes.get(id).cloned(),
        }
    }

    /// Register all the schemes in the given directory.
    pub fn register_from_directory<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadSchemeError> {
        let handle = match fs::read_dir(&path) {
            Ok(handle) => handle,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        for entry in handle {
            let entry = entry?;
            let metadata = entry.metadata()?;
            let Some(file_name) = entry.file_name().to_str().map(ToOwned::to_owned) else {
                continue;
            };
            if metadata.is_file() && file_name.ends_with(".yaml") {
                let scheme_id = file_name.trim_end_matches(".yaml");
                if SCHEMES.contains_key(scheme_id) || self.custom_schemes.contains_key(scheme_id) {
                    return Err(LoadSchemeError::Duplicate(scheme_id.into()));
                }
                let contents = fs::read_to_string(entry.path())?;
                let scheme = serde_yaml::from_str(&contents)
                    .map_err(|e| LoadSchemeError::Corrupted(scheme_id.into(), e.into()))?;
                self.custom_schemes.insert(scheme_id.into(), scheme);
            }
        }
        Ok(())
    }

    /// Get all the registered scheme ids.
    pub fn scheme_ids(&self) -> Vec<String> {
        let builtin = SCHEMES.keys().map(|id| id.to_string());
        builtin.chain(self.custom_schemes.keys().cloned()).collect()
    }

    /// Iterate all schemes in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (String, ColorScheme)> + '_ {
        self.scheme_ids().into_iter().map(|id| {
            let scheme = self.load_by_id(&id).expect("scheme disappeared");
            (id, scheme)
        })
    }

    pub fn len(&self) -> usize {
        SCHEMES.len() + self.custom_schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An error loading a color scheme.
#[derive(thiserror::Error, Debug)]
pub enum LoadSchemeError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("scheme '{0}' is corrupted: {1}")]
    Corrupted(String, Box<dyn std::error::Error>),

    #[error("duplicate scheme '{0}'")]
    Duplicate(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Color;
    use tempfile::tempdir;

    #[test]
    fn validate_builtin_schemes() {
        let registry = SchemeRegistry::default();
        assert!(!registry.is_empty());
        for id in SCHEMES.keys() {
            let Some(scheme) = registry.load_by_id(id) else {
                panic!("scheme '{id}' is corrupted");
            };
            assert!(!scheme.name.is_empty(), "scheme '{id}' has no name");
        }
    }

    #[test]
    fn load_custom() {
        let directory = tempdir().expect("creating tempdir");
        let contents = "name: Potato\nprimary: \"#101010\"\nsecondary: \"#202020\"\naccent: \"#303030\"\nbackground: \"#ffffff\"\ntext: \"#000000\"\n";
        fs::write(directory.path().join("potato.yaml"), contents).expect("writing scheme");

        let mut registry = SchemeRegistry::default();
        registry.register_from_directory(directory.path()).expect("loading schemes");
        let scheme = registry.load_by_id("potato").expect("scheme not found");
        assert_eq!(scheme.primary, Color::new(0x10, 0x10, 0x10));
        assert!(registry.scheme_ids().contains(&"potato".to_string()));
    }

    #[test]
    fn duplicate_custom_scheme() {
        let directory = tempdir().expect("creating tempdir");
        let id = SCHEMES.keys().next().expect("no builtin schemes");
        let contents = "name: Clash\nprimary: \"#101010\"\nsecondary: \"#202020\"\naccent: \"#303030\"\nbackground: \"#ffffff\"\ntext: \"#000000\"\n";
        fs::write(directory.path().join(format!("{id}.yaml")), contents).expect("writing scheme");

        let mut registry = SchemeRegistry::default();
        let err = registry.register_from_directory(directory.path()).expect_err("loading succeeded");
        assert!(matches!(err, LoadSchemeError::Duplicate(_)));
    }

    #[test]
    fn corrupted_custom_scheme() {
        let directory = tempdir().expect("creating tempdir");
        fs::write(directory.path().join("broken.yaml"), "name: Broken\nprimary: \"#nothex\"\n")
            .expect("writing scheme");

        let mut registry = SchemeRegistry::default();
        let err = registry.register_from_directory(directory.path()).expect_err("loading succeeded");
        assert!(matches!(err, LoadSchemeError::Corrupted(..)));
    }

    #[test]
    fn register_from_missing_directory() {
        let mut registry = SchemeRegistry::default();
        let result = registry.register_from_directory("/tmp/prospectus/8ee2027983915ec78acc45027d874316");
        result.expect("loading failed");
    }
}
