use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use snippet_core::RequestId;
use snippet_logging::{snippet_info, snippet_warn};

use crate::{CatalogLoader, EngineEvent};

enum EngineCommand {
    Load { request_id: RequestId, url: String },
}

/// Sending half: queue loads onto the engine's runtime thread.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving half: results of queued loads, in completion order.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Starts the engine thread with its own tokio runtime.
    pub fn spawn(loader: CatalogLoader) -> io::Result<(Self, EngineEvents)> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let loader = Arc::new(loader);

        thread::Builder::new()
            .name("snippet-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let loader = loader.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(loader.as_ref(), command, event_tx).await;
                    });
                }
                // Let in-flight loads finish; their receivers may already be gone.
                runtime.shutdown_timeout(Duration::from_secs(1));
            })?;

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    pub fn load(&self, request_id: RequestId, url: impl Into<String>) {
        if self
            .cmd_tx
            .send(EngineCommand::Load {
                request_id,
                url: url.into(),
            })
            .is_err()
        {
            snippet_warn!("engine stopped; dropping load request {}", request_id);
        }
    }
}

impl EngineEvents {
    /// Blocks until the next event; `None` once the engine is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    loader: &CatalogLoader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Load { request_id, url } => {
            snippet_info!("load {} started for {}", request_id, url);
            let result = loader.load(&url).await;
            if let Err(err) = &result {
                snippet_warn!("load {} failed: {}", request_id, err);
            }
            // A torn-down receiver just means nobody wants the result anymore.
            let _ = event_tx.send(EngineEvent::CatalogLoaded { request_id, result });
        }
    }
}
