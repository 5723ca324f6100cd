use include_dir::{Dir, include_dir};

use crate::domain::wrapper::WRAPPER_ASSET_NAME;
use crate::ports::BundledWrapper;

static WINSW_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/winsw");

/// Wrapper binary embedded from `src/assets/winsw/` when present at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedBundledWrapper;

impl EmbeddedBundledWrapper {
    pub fn new() -> Self {
        Self
    }
}

impl BundledWrapper for EmbeddedBundledWrapper {
    fn wrapper_binary(&self) -> Option<&[u8]> {
        WINSW_DIR.get_file(WRAPPER_ASSET_NAME).map(|file| file.contents()).filter(|b| !b.is_empty())
    }
}
