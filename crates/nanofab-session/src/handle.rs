use nanofab_mask::PhotomaskRasterizer;
use nanofab_process::ProcessStep;
use tokio::sync::{mpsc, oneshot, watch};

use crate::error::SessionError;
use crate::session::{ResetReport, Session, SessionView, StepReport};

enum Request {
    Apply(ProcessStep, oneshot::Sender<StepReport>),
    SaveMask(Vec<u8>, oneshot::Sender<bool>),
    ClearMask(oneshot::Sender<bool>),
    Reset(oneshot::Sender<ResetReport>),
    SwitchLevel(String, oneshot::Sender<Result<SessionView, SessionError>>),
    View(oneshot::Sender<SessionView>),
}

/// Cloneable front end to a session running on its own tokio task.
///
/// Requests are handled one at a time, in the order they were sent. After
/// each one the latest [`SessionView`] is published on a watch channel.
#[derive(Clone)]
pub struct SessionHandle {
    requests: mpsc::Sender<Request>,
    view: watch::Receiver<SessionView>,
}

impl SessionHandle {
    /// Move `session` onto a new task. Must be called inside a tokio runtime.
    pub fn spawn<R: PhotomaskRasterizer>(session: Session<R>) -> Self {
        let capacity = session.config().queue_capacity.max(1);
        let (requests, rx) = mpsc::channel(capacity);
        let (view_tx, view) = watch::channel(session.view());
        tokio::spawn(run(session, rx, view_tx));
        Self { requests, view }
    }

    pub async fn apply(&self, step: ProcessStep) -> Result<StepReport, SessionError> {
        self.request(|reply| Request::Apply(step, reply)).await
    }

    pub async fn save_mask(&self, image: Vec<u8>) -> Result<bool, SessionError> {
        self.request(|reply| Request::SaveMask(image, reply)).await
    }

    pub async fn clear_mask(&self) -> Result<bool, SessionError> {
        self.request(Request::ClearMask).await
    }

    pub async fn reset(&self) -> Result<ResetReport, SessionError> {
        self.request(Request::Reset).await
    }

    pub async fn switch_level(&self, level_id: &str) -> Result<SessionView, SessionError> {
        let level_id = level_id.to_string();
        self.request(|reply| Request::SwitchLevel(level_id, reply)).await?
    }

    /// Current view, after every request queued before this one.
    pub async fn view(&self) -> Result<SessionView, SessionError> {
        self.request(Request::View).await
    }

    /// Latest published view, without queueing.
    pub fn latest(&self) -> SessionView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.view.clone()
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Request,
    ) -> Result<T, SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.requests
            .send(make(reply_tx))
            .await
            .map_err(|_| SessionError::Closed)?;
        reply_rx.await.map_err(|_| SessionError::Closed)
    }
}

async fn run<R: PhotomaskRasterizer>(
    mut session: Session<R>,
    mut rx: mpsc::Receiver<Request>,
    view_tx: watch::Sender<SessionView>,
) {
    while let Some(request) = rx.recv().await {
        // A caller that stopped waiting just drops its reply.
        match request {
            Request::Apply(step, reply) => {
                let _ = reply.send(session.apply(step).await);
            }
            Request::SaveMask(image, reply) => {
                let _ = reply.send(session.save_mask(image));
            }
            Request::ClearMask(reply) => {
                let _ = reply.send(session.clear_mask());
            }
            Request::Reset(reply) => {
                let _ = reply.send(session.reset());
            }
            Request::SwitchLevel(level_id, reply) => {
                let _ = reply.send(session.switch_level(&level_id));
            }
            Request::View(reply) => {
                let _ = reply.send(session.view());
                continue;
            }
        }
        view_tx.send_replace(session.view());
    }
    log::debug!("Session for '{}' shut down", session.level().id);
}
