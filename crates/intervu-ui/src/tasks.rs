use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use intervu_api::{CreateSessionPayload, CreateSessionResponse};

use crate::backend::SessionBackend;

pub(crate) const TASK_EVENT_CHANNEL_CAPACITY: usize = 1;

#[derive(Debug)]
pub(crate) enum SessionTaskEvent {
    Created(CreateSessionResponse),
    Failed { message: String },
}

#[derive(Debug)]
pub(crate) enum AnalyzingEvent {
    Done,
}

/// An in-flight async operation owned by a screen. Dropping it aborts the
/// task, which is how teardown invalidates pending work on every exit path.
#[derive(Debug)]
pub(crate) struct PendingTask<E> {
    pub receiver: mpsc::Receiver<E>,
    handle: JoinHandle<()>,
}

impl<E> PendingTask<E> {
    pub fn new(receiver: mpsc::Receiver<E>, handle: JoinHandle<()>) -> Self {
        Self { receiver, handle }
    }
}

impl<E> Drop for PendingTask<E> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub(crate) async fn run_create_session_task(
    backend: Arc<dyn SessionBackend>,
    payload: CreateSessionPayload,
    sender: mpsc::Sender<SessionTaskEvent>,
) {
    match backend.create_session(payload).await {
        Ok(response) => {
            let _ = sender.send(SessionTaskEvent::Created(response)).await;
        }
        Err(error) => {
            tracing::warn!(error = %error, "session creation failed");
            let _ = sender
                .send(SessionTaskEvent::Failed {
                    message: error.user_message(),
                })
                .await;
        }
    }
}

pub(crate) async fn run_analyzing_delay_task(
    delay: Duration,
    sender: mpsc::Sender<AnalyzingEvent>,
) {
    tokio::time::sleep(delay).await;
    let _ = sender.send(AnalyzingEvent::Done).await;
}
