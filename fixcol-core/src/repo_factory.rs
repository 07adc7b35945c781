use crate::repo::{LayoutRepo, StoreParams};
use crate::repo_fs::FsLayoutRepo;

pub enum Backend {
    Fs,
}

pub fn open_store(backend: Backend, p: StoreParams) -> Box<dyn LayoutRepo> {
    match backend {
        Backend::Fs => Box::new(FsLayoutRepo::new(p)),
    }
}
