//! Line-oriented front end
//!
//! Reads one JSON client message per line, dispatches it and writes every
//! frame this connection should see as a JSON line:
//! `{"to": "sender" | "game" | "others", "gameId": ..., "message": {...}}`.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;

use crate::io::OutputWriter;
use crate::store::SessionStore;
use crate::transport::hub::{ConnectionId, Envelope, Hub};
use crate::transport::protocol::{ClientMessage, ServerMessage};
use crate::transport::{dispatch, Audience};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutboundLine<'a> {
    to: Audience,
    #[serde(skip_serializing_if = "Option::is_none")]
    game_id: Option<&'a str>,
    message: &'a ServerMessage,
}

pub struct Console<W: OutputWriter> {
    store: Arc<SessionStore>,
    hub: Hub,
    connection: ConnectionId,
    subscriptions: HashMap<String, Receiver<Envelope>>,
    output: W,
}

impl<W: OutputWriter> Console<W> {
    pub fn new(store: Arc<SessionStore>, output: W) -> Self {
        Console {
            store,
            hub: Hub::default(),
            connection: 0,
            subscriptions: HashMap::new(),
            output,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Handle lines until the input ends.
    pub async fn run<R>(&mut self, input: R) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            self.handle_line(&line).await;
        }
        log::info!("input closed");
        Ok(())
    }

    pub async fn handle_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        let message = match serde_json::from_str::<ClientMessage>(line) {
            Ok(message) => message,
            Err(e) => {
                log::warn!("unreadable message: {}", e);
                self.emit(Audience::Sender, None, &ServerMessage::malformed(&e.to_string()));
                return;
            }
        };

        let delivery = dispatch(&self.store, message).await;
        let routed = self.hub.route(self.connection, &delivery).await;
        for message in &routed.direct {
            self.emit(Audience::Sender, Some(&delivery.game_id), message);
        }
        if let Some(rx) = routed.subscription {
            self.subscriptions.insert(delivery.game_id.clone(), rx);
        }
        self.drain();
    }

    /// Write out everything queued on this connection's game channels.
    fn drain(&mut self) {
        let mut pending = Vec::new();
        let mut closed = Vec::new();
        for (game_id, rx) in self.subscriptions.iter_mut() {
            loop {
                match rx.try_recv() {
                    Ok(envelope) => {
                        if envelope.visible_to(self.connection) {
                            pending.push((game_id.clone(), envelope));
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Lagged(skipped)) => {
                        log::warn!("{} frames dropped for {}", skipped, game_id);
                    }
                    Err(TryRecvError::Closed) => {
                        closed.push(game_id.clone());
                        break;
                    }
                }
            }
        }
        for game_id in closed {
            self.subscriptions.remove(&game_id);
        }
        for (game_id, envelope) in pending {
            self.emit(envelope.audience, Some(&game_id), &envelope.message);
        }
    }

    fn emit(&mut self, to: Audience, game_id: Option<&str>, message: &ServerMessage) {
        let line = OutboundLine {
            to,
            game_id,
            message,
        };
        match serde_json::to_string(&line) {
            Ok(json) => self.output.writeln(&json),
            Err(e) => log::error!("failed to encode {}: {}", message.kind(), e),
        }
    }
}
