use anyhow::{Context, Result};
use log::debug;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::gateway::{GatewayError, QuizGateway};
use crate::output::SessionOutput;
use crate::session::SessionHandle;


/// Runs quiz requests off the input thread and feeds results back into the session.
pub struct Dispatcher<G, O: SessionOutput> {
    gateway: Arc<G>,
    session: SessionHandle<O>,
}

impl<G, O> Dispatcher<G, O>
where
    G: QuizGateway + Send + Sync + 'static,
    O: SessionOutput + Send + 'static,
{
    pub fn new(gateway: G, session: SessionHandle<O>) -> Self {
        Dispatcher {
            gateway: Arc::new(gateway),
            session,
        }
    }

    pub fn generate(&self) -> Result<JoinHandle<()>> {
        let request = self.session.lock().submit()?;
        debug!("Dispatching request {:?}", request.id);

        let id = request.id;
        let gateway = Arc::clone(&self.gateway);
        let session = Arc::clone(&self.session);
        let spawned = thread::Builder::new()
            .name("quiz-request".to_owned())
            .spawn(move || {
                let result = gateway.generate_quiz(&request.file, &request.question_count);
                session.lock().complete(request.id, result);
            });

        match spawned {
            Ok(handle) => Ok(handle),
            Err(e) => {
                self.session
                    .lock()
                    .complete(id, Err(GatewayError::Transport(e.to_string())));
                Err(e).context("Could not start quiz request thread")
            }
        }
    }
}
