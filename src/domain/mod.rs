pub mod artifacts;
pub mod config;
pub mod descriptor;
mod error;
pub mod identifiers;
pub mod layout;
pub mod lifecycle;
pub mod paths;
pub mod pipeline;
pub mod request;
pub mod summary;
pub mod wrapper;

pub use artifacts::ArtifactSet;
pub use config::BundleConfig;
pub use descriptor::ServiceDescriptor;
pub use error::AppError;
pub use identifiers::ServiceId;
pub use layout::{LogLocation, MirrorTarget, ResolvedLayout};
pub use lifecycle::{LifecycleScript, LifecycleScriptSet};
pub use pipeline::{FailurePolicy, PipelinePolicy, PipelineStep};
pub use request::GenerationRequest;
pub use summary::{GenerationSummary, StepWarning, WrapperReport};
pub use wrapper::{ProvisionTier, WrapperSource};
