//! Per-game fan-out
//!
//! One `broadcast` channel per game id. A connection subscribes when it
//! creates or joins a game; a reset drops the sender, which ends every
//! receiver once the frames already queued have been read.

use std::collections::HashMap;

use tokio::sync::broadcast;
use tokio::sync::RwLock;

use super::protocol::ServerMessage;
use super::{Audience, Delivery, Membership};

pub type ConnectionId = u64;

const DEFAULT_CAPACITY: usize = 64;

/// A group frame as it travels through a game channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub origin: ConnectionId,
    pub audience: Audience,
    pub message: ServerMessage,
}

impl Envelope {
    pub fn visible_to(&self, connection: ConnectionId) -> bool {
        !(self.audience == Audience::Others && self.origin == connection)
    }
}

/// What routing a delivery leaves for the sending connection.
#[derive(Debug)]
pub struct Routed {
    /// Frames addressed to the sender alone.
    pub direct: Vec<ServerMessage>,
    /// New subscription if the sender entered the game.
    pub subscription: Option<broadcast::Receiver<Envelope>>,
}

pub struct Hub {
    groups: RwLock<HashMap<String, broadcast::Sender<Envelope>>>,
    capacity: usize,
}

impl Default for Hub {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Hub {
    pub fn new(capacity: usize) -> Self {
        Self {
            groups: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    pub async fn subscribe(&self, game_id: &str) -> broadcast::Receiver<Envelope> {
        let mut groups = self.groups.write().await;
        groups
            .entry(game_id.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe()
    }

    /// Returns how many receivers got the frame.
    pub async fn publish(&self, game_id: &str, envelope: Envelope) -> usize {
        match self.groups.read().await.get(game_id) {
            Some(tx) => tx.send(envelope).unwrap_or(0),
            None => 0,
        }
    }

    pub async fn close(&self, game_id: &str) -> bool {
        let closed = self.groups.write().await.remove(game_id).is_some();
        if closed {
            log::debug!("closed group {}", game_id);
        }
        closed
    }

    pub async fn len(&self) -> usize {
        self.groups.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.groups.read().await.is_empty()
    }

    /// Carry out a delivery on behalf of `origin`.
    pub async fn route(&self, origin: ConnectionId, delivery: &Delivery) -> Routed {
        let subscription = match delivery.membership {
            Membership::Enter => Some(self.subscribe(&delivery.game_id).await),
            _ => None,
        };

        let mut direct = Vec::new();
        for frame in &delivery.frames {
            match frame.audience {
                Audience::Sender => direct.push(frame.message.clone()),
                Audience::Game | Audience::Others => {
                    let envelope = Envelope {
                        origin,
                        audience: frame.audience,
                        message: frame.message.clone(),
                    };
                    let reached = self.publish(&delivery.game_id, envelope).await;
                    log::debug!(
                        "{} to {} connections in {}",
                        frame.message.kind(),
                        reached,
                        delivery.game_id
                    );
                }
            }
        }

        if delivery.membership == Membership::Close {
            self.close(&delivery.game_id).await;
        }
        Routed {
            direct,
            subscription,
        }
    }
}
