/// Source of a wrapper binary shipped inside this tool.
pub trait BundledWrapper {
    /// The embedded executable, if one was bundled at build time.
    fn wrapper_binary(&self) -> Option<&[u8]>;
}
