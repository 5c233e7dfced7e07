use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument};

use crate::app_system::{Config, SystemError};
use crate::interpreter::CommandInterpreter;

// =============================================================================
// 1. THE MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum RegistryRequest {
    Execute {
        line: String,
        respond_to: Response<Vec<String>>,
    },
}

// =============================================================================
// 2. THE ACTOR
// =============================================================================

/// Sole owner of the registry state.
///
/// Requests are handled one at a time in arrival order, so id assignment and
/// the uniqueness/integrity checks never interleave between callers.
pub struct RegistryActor {
    receiver: mpsc::Receiver<RegistryRequest>,
    interpreter: CommandInterpreter,
}

impl RegistryActor {
    pub fn new(buffer_size: usize, interpreter: CommandInterpreter) -> (Self, RegistryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            interpreter,
        };
        (actor, RegistryClient::new(sender))
    }

    /// Serves requests until every client has been dropped.
    #[instrument(name = "registry_actor", skip(self))]
    pub async fn run(mut self) {
        info!("Registry starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::Execute { line, respond_to } => {
                    let output = self.interpreter.execute(&line);
                    if respond_to.send(output).is_err() {
                        debug!("Caller went away before the reply");
                    }
                }
            }
        }
        info!("Registry stopped");
    }
}

// =============================================================================
// 3. THE CLIENT
// =============================================================================

#[derive(Clone)]
pub struct RegistryClient {
    sender: mpsc::Sender<RegistryRequest>,
}

impl RegistryClient {
    pub fn new(sender: mpsc::Sender<RegistryRequest>) -> Self {
        Self { sender }
    }

    /// Runs one command line and returns its output lines.
    #[instrument(skip(self))]
    pub async fn execute(&self, line: String) -> Result<Vec<String>, SystemError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Execute { line, respond_to })
            .await
            .map_err(|_| SystemError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| SystemError::ActorCommunicationError("Actor dropped".to_string()))
    }
}

// =============================================================================
// 4. THE SYSTEM
// =============================================================================

/// Starts the registry task and hands out its client.
pub struct RegistrySystem {
    pub client: RegistryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl RegistrySystem {
    pub fn start(config: &Config) -> Self {
        let interpreter = CommandInterpreter::new(config.price_parser());
        let (actor, client) = RegistryActor::new(config.buffer_size, interpreter);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down registry...");
        // The actor exits once the last client is dropped.
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Registry task failed: {:?}", e);
            return Err(SystemError::ActorCommunicationError(format!(
                "Registry task failed: {:?}",
                e
            )));
        }

        info!("Registry shutdown complete.");
        Ok(())
    }
}
