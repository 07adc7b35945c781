// fixcol_core/src/repo.rs
use crate::domain::LayoutDefinition;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct StoreParams {
    pub settings_dir: std::path::PathBuf,
}

pub trait LayoutRepo: Send + Sync {
    /// Full replace: after success the store holds exactly `layouts`.
    fn save(&self, layouts: &[LayoutDefinition]) -> Result<()>;

    fn load(&self) -> Result<Vec<LayoutDefinition>>;
}
