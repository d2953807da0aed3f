use crate::api::{
    JobDescriptionResponse, MessageResponse, PreviewResponse, ResumeBackend, ResumeIdentity,
    ResumeListing, ScreeningResult, UploadResult,
};
use crate::error::ClientError;
use std::future::Future;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use tempfile::TempPath;
use tokio::runtime::Handle;
use tracing::warn;

/// Completed background work, handed back to the UI thread.
#[derive(Debug)]
pub enum Event {
    UploadFinished(Result<Vec<UploadResult>, ClientError>),
    ListingLoaded {
        generation: u64,
        result: Result<ResumeListing, ClientError>,
    },
    PreviewLoaded {
        generation: u64,
        id: ResumeIdentity,
        result: Result<PreviewResponse, ClientError>,
    },
    ResumeFetched {
        id: ResumeIdentity,
        result: Result<TempPath, ClientError>,
    },
    ScreeningFinished(Result<Vec<ScreeningResult>, ClientError>),
    KeywordsLoaded(Result<JobDescriptionResponse, ClientError>),
    JobDescriptionUpdated(Result<MessageResponse, ClientError>),
}

/// Spawns requests on the runtime and reports each one back as exactly one event.
#[derive(Clone)]
pub struct TaskSpawner {
    handle: Handle,
    sender: Sender<Event>,
    backend: Arc<dyn ResumeBackend>,
}

impl TaskSpawner {
    pub fn new(handle: Handle, sender: Sender<Event>, backend: Arc<dyn ResumeBackend>) -> Self {
        Self {
            handle,
            sender,
            backend,
        }
    }

    pub fn backend(&self) -> Arc<dyn ResumeBackend> {
        Arc::clone(&self.backend)
    }

    /// Runs `work` and sends `wrap(result)`. A panicking task still produces an event.
    pub fn spawn<T, Fut, W>(&self, work: Fut, wrap: W)
    where
        T: Send + 'static,
        Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
        W: FnOnce(Result<T, ClientError>) -> Event + Send + 'static,
    {
        let sender = self.sender.clone();
        let inner = self.handle.spawn(work);
        self.handle.spawn(async move {
            let result = match inner.await {
                Ok(result) => result,
                Err(e) => Err(ClientError::Task(e.to_string())),
            };
            if sender.send(wrap(result)).is_err() {
                warn!("Window closed before a request finished");
            }
        });
    }
}
