mod client;
#[cfg(test)]
pub(crate) mod fake;
mod types;

pub use client::{HttpBackend, ResumeBackend};
pub use types::{
    JobDescriptionResponse, MessageResponse, PreviewResponse, ResumeIdentity, ResumeListing,
    ScreeningResponse, ScreeningResult, UploadResponse, UploadResult,
};
