use crate::{GenerateError, emit, naming, plan::WrapperPlan};
use std::{
    fs,
    path::{Path, PathBuf},
};

const HEADER: &str = "// @generated by wirewrap. Do not edit.\n\n";

///
/// GeneratedUnit
///
/// One rendered compilation unit: formatted source plus its destination
/// relative to the output root (the model's module path, then the
/// snake_case wrapper file name). Write-once; never mutated after render.
///

#[derive(Clone, Debug)]
pub struct GeneratedUnit {
    pub file_name: String,
    pub relative_dir: PathBuf,
    pub source: String,
}

impl GeneratedUnit {
    /// Render a resolved plan into formatted source. Re-parsing the
    /// emitted tokens is the well-formedness gate; a failure here is a
    /// generator bug surfaced before anything touches the filesystem.
    pub fn render(plan: &WrapperPlan) -> Result<Self, GenerateError> {
        let tokens = emit::generate(plan);
        let file = syn::parse2::<syn::File>(tokens).map_err(|e| GenerateError::Render {
            model: plan.wrapper_ident.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            file_name: naming::unit_file_name(&plan.wrapper_ident),
            relative_dir: plan.module.split("::").collect(),
            source: format!("{HEADER}{}", prettyplease::unparse(&file)),
        })
    }

    /// Destination relative to the output root.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        self.relative_dir.join(&self.file_name)
    }

    /// Persist under `out_root`. The unit is fully rendered before any
    /// filesystem work, and the write goes through a sibling temp file
    /// plus rename, so a failure never leaves a partial unit behind.
    pub fn persist(&self, out_root: &Path) -> Result<PathBuf, GenerateError> {
        let dir = out_root.join(&self.relative_dir);
        let target = dir.join(&self.file_name);

        let io_err = |path: &Path, source: std::io::Error| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        };

        fs::create_dir_all(&dir).map_err(|e| io_err(&dir, e))?;

        let staging = dir.join(format!(".{}.tmp", self.file_name));
        fs::write(&staging, &self.source).map_err(|e| io_err(&staging, e))?;
        if let Err(e) = fs::rename(&staging, &target) {
            let _ = fs::remove_file(&staging);
            return Err(io_err(&target, e));
        }

        Ok(target)
    }
}

///
/// TESTS
///
