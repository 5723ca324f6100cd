use crate::ports::BundledWrapper;

pub struct StaticBundledWrapper(pub &'static [u8]);

impl BundledWrapper for StaticBundledWrapper {
    fn wrapper_binary(&self) -> Option<&[u8]> {
        Some(self.0)
    }
}

pub struct NoBundledWrapper;

impl BundledWrapper for NoBundledWrapper {
    fn wrapper_binary(&self) -> Option<&[u8]> {
        None
    }
}
