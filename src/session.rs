use anyhow::Result;
use log::info;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::provider::ClaudeClient;
use crate::web::models::Message;

/// An ordered, append-only transcript owned by one session. Order is the
/// chronological turn order and is the entire context sent to the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// In-memory conversation state for the interactive chat page, keyed by
/// session id. Created on first visit, discarded when the process exits.
/// The lock is never held across a provider call.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Conversation>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Conversation>>> {
        self.sessions
            .lock()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))
    }

    /// Appends a user turn to the session (creating it on first use) and
    /// returns a snapshot of the full history to send to the model.
    pub fn record_user_turn(&self, session_id: Uuid, text: &str) -> Result<Vec<Message>> {
        let mut sessions = self.lock()?;
        let conversation = sessions.entry(session_id).or_default();
        conversation.push(Message::user(text));
        Ok(conversation.messages().to_vec())
    }

    pub fn record_assistant_turn(&self, session_id: Uuid, text: &str) -> Result<()> {
        let mut sessions = self.lock()?;
        let conversation = sessions.entry(session_id).or_default();
        conversation.push(Message::assistant(text));
        Ok(())
    }

    pub fn transcript(&self, session_id: Uuid) -> Result<Vec<Message>> {
        let sessions = self.lock()?;
        Ok(sessions
            .get(&session_id)
            .map(|c| c.messages().to_vec())
            .unwrap_or_default())
    }
}

/// One interactive turn: append the user message, send the accumulated
/// history to the model, append and return the reply. Blocks until the reply
/// arrives; a provider failure leaves the user turn recorded with no reply.
pub async fn run_turn(
    client: &ClaudeClient,
    sessions: &SessionStore,
    session_id: Uuid,
    text: &str,
) -> Result<String> {
    let history = sessions.record_user_turn(session_id, text)?;
    info!(
        "Session {} turn {} ({} message(s) of context)",
        session_id,
        history.len() / 2 + 1,
        history.len()
    );

    let reply = client.complete(&history).await?;
    sessions.record_assistant_turn(session_id, &reply)?;
    Ok(reply)
}
