pub mod validation;

mod service_id;

pub use service_id::ServiceId;
