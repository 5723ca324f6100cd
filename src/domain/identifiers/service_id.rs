use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated Windows service identifier.
///
/// Used verbatim as the file stem of the wrapper executable, the descriptor,
/// and the pid file, so it must be filesystem-safe.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - No path traversal components (/, \, ., ..)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceId(String);

impl_validated_id!(ServiceId, true, AppError::InvalidServiceId);

impl ServiceId {
    /// File name of the wrapper executable for this service.
    pub fn executable_name(&self) -> String {
        format!("{}.exe", self.0)
    }

    /// File name of the service descriptor for this service.
    pub fn descriptor_name(&self) -> String {
        format!("{}.xml", self.0)
    }
}
