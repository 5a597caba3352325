use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const MODELS_DIR_NAME: &str = "Models";
pub const INPUT_FILE_NAME: &str = "inventory.json";
pub const OUTPUT_FILE_NAME: &str = "vans.json";

/// Where the inventory is read from and where the cleaned copy goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ModelPaths {
    /// `inventory.json` and `vans.json` inside `models_dir`.
    pub fn in_dir(models_dir: impl AsRef<Path>) -> Self {
        let dir = models_dir.as_ref();
        Self {
            input: dir.join(INPUT_FILE_NAME),
            output: dir.join(OUTPUT_FILE_NAME),
        }
    }

    /// Resolves the `Models` directory relative to `anchor`: two levels up,
    /// then into `Models`. For `root/bin/tool` that is `root/Models`.
    pub fn beside(anchor: impl AsRef<Path>) -> Result<Self> {
        let anchor = anchor.as_ref();
        let root = anchor
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| Error::Location {
                anchor: anchor.to_path_buf(),
            })?;
        Ok(Self::in_dir(root.join(MODELS_DIR_NAME)))
    }

    /// [`ModelPaths::beside`] the running executable.
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| Error::io("current executable", e))?;
        // Follow symlinks so an installed link resolves to the real tree.
        let exe = exe.canonicalize().map_err(|e| Error::io(&exe, e))?;
        Self::beside(exe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_names_both_files() {
        let p = ModelPaths::in_dir("/srv/shop/Models");
        assert_eq!(p.input, PathBuf::from("/srv/shop/Models/inventory.json"));
        assert_eq!(p.output, PathBuf::from("/srv/shop/Models/vans.json"));
    }

    #[test]
    fn beside_goes_two_levels_up() -> Result<()> {
        let p = ModelPaths::beside("/srv/shop/Scripts/sanitize-inventory")?;
        assert_eq!(p.input, PathBuf::from("/srv/shop/Models/inventory.json"));
        assert_eq!(p.output, PathBuf::from("/srv/shop/Models/vans.json"));
        Ok(())
    }

    #[test]
    fn beside_rejects_shallow_anchor() {
        let err = ModelPaths::beside("tool").unwrap_err();
        assert!(matches!(err, Error::Location { .. }));
    }
}
