//! Assets embedded into the binary at build time.

mod bundled_wrapper_embedded;
mod templates;

pub use bundled_wrapper_embedded::EmbeddedBundledWrapper;
pub(crate) use templates::template_source;
