use std::path::{Path, PathBuf};

use crate::domain::LayoutDefinition;
use crate::error::Result;
use crate::repo::{LayoutRepo, StoreParams};
use crate::store;

pub struct FsLayoutRepo {
    dir: PathBuf,
}

impl FsLayoutRepo {
    pub fn new(params: StoreParams) -> Self {
        Self {
            dir: params.settings_dir,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl LayoutRepo for FsLayoutRepo {
    fn save(&self, layouts: &[LayoutDefinition]) -> Result<()> {
        store::save(&self.dir, layouts)
    }

    fn load(&self) -> Result<Vec<LayoutDefinition>> {
        store::load(&self.dir)
    }
}
