mod coordinator;
mod types;

pub use coordinator::{UploadCoordinator, NO_FILES_UPLOADED};
