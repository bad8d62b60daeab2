//! Session store
//!
//! Owns every live game. The map of sessions sits behind an async read/write
//! lock that is only held to look up, insert or remove an entry; each entry
//! carries its own mutex, so actions on one game never wait on another.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tokio::task::JoinHandle;

use crate::game_engine::{Action, GameEngine};
use crate::models::actor::ActorProfile;
use crate::models::draw::{LocationDraw, SeededDraw};
use crate::models::errors::{GameError, GameResult};
use crate::models::session::Session;
use crate::models::snapshot::SessionSnapshot;
use crate::models::world_map::WorldMap;
use crate::services::cards::{CardRules, UnenforcedCardRules};

type Entry = Arc<Mutex<GameEngine>>;

/// Builds the random source for each new game.
pub type DrawFactory = Box<dyn Fn() -> Box<dyn LocationDraw> + Send + Sync>;

/// Runtime knobs for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// A game untouched for longer than this is dropped by the sweep.
    pub idle_timeout: Duration,
    pub sweep_interval: Duration,
    /// Base seed for every game's draw. Each game gets `seed + n`.
    pub seed: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(24 * 60 * 60),
            sweep_interval: Duration::from_secs(6 * 60 * 60),
            seed: None,
        }
    }
}

pub struct SessionStore {
    map: Arc<WorldMap>,
    sessions: RwLock<HashMap<String, Entry>>,
    draws: DrawFactory,
    cards: Arc<dyn CardRules>,
    config: StoreConfig,
}

impl SessionStore {
    /// Store over the reference board with unenforced card costs.
    pub fn new(config: StoreConfig) -> GameResult<Self> {
        let map = Arc::new(WorldMap::reference()?);
        let draws = seeded_draws(config.seed);
        Ok(Self::with_parts(map, config, draws, Arc::new(UnenforcedCardRules)))
    }

    /// Store with an explicit board, draw source and card policy.
    pub fn with_parts(
        map: Arc<WorldMap>,
        config: StoreConfig,
        draws: DrawFactory,
        cards: Arc<dyn CardRules>,
    ) -> Self {
        Self {
            map,
            sessions: RwLock::new(HashMap::new()),
            draws,
            cards,
            config,
        }
    }

    // ========== Accessor Methods ==========

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    // ========== Operations ==========

    /// Open a new lobby with `host` seated.
    ///
    /// Two racing creates for the same id produce exactly one game; the
    /// loser sees `SessionAlreadyExists`.
    pub async fn create_session(
        &self,
        game_id: &str,
        host: ActorProfile,
    ) -> GameResult<SessionSnapshot> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(game_id) {
            log::warn!("game {} already exists", game_id);
            return Err(GameError::SessionAlreadyExists(game_id.to_string()));
        }
        let session = Session::new(game_id, self.map.clone(), host, (self.draws)())?;
        let engine = GameEngine::new(session, self.cards.clone());
        let snapshot = engine.snapshot();
        sessions.insert(game_id.to_string(), Arc::new(Mutex::new(engine)));
        log::info!("created game {}", game_id);
        Ok(snapshot)
    }

    pub async fn join_session(
        &self,
        game_id: &str,
        profile: ActorProfile,
    ) -> GameResult<SessionSnapshot> {
        let mut engine = self.lock(game_id).await?;
        engine
            .join(profile)
            .inspect_err(|e| log::warn!("join {} refused: {}", game_id, e))
    }

    pub async fn start_session(&self, game_id: &str) -> GameResult<SessionSnapshot> {
        let mut engine = self.lock(game_id).await?;
        engine
            .start()
            .inspect_err(|e| log::warn!("start {} refused: {}", game_id, e))
    }

    pub async fn apply_action(
        &self,
        game_id: &str,
        actor_id: &str,
        action: Action,
    ) -> GameResult<SessionSnapshot> {
        let mut engine = self.lock(game_id).await?;
        engine.apply(actor_id, action).inspect_err(|e| {
            log::warn!("game {}: {} refused for {}: {}", game_id, e.code(), actor_id, e)
        })
    }

    /// Drop a game outright. Returns whether it existed.
    ///
    /// Returns only once an action already running on the game has finished;
    /// actions still waiting for the game see `SessionNotFound`.
    pub async fn reset_session(&self, game_id: &str) -> bool {
        let removed = self.sessions.write().await.remove(game_id);
        match removed {
            Some(entry) => {
                drop(entry.lock().await);
                log::info!("reset game {}", game_id);
                true
            }
            None => false,
        }
    }

    pub async fn snapshot(&self, game_id: &str) -> Option<SessionSnapshot> {
        let engine = self.lock(game_id).await.ok()?;
        Some(engine.snapshot())
    }

    /// Remove every game idle for longer than the timeout as of `now`.
    ///
    /// A game whose lock is held is mid-action and therefore not idle; it is
    /// left for the next sweep.
    pub async fn evict_idle(&self, now: Instant) -> usize {
        let timeout = self.config.idle_timeout;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, entry| match entry.try_lock() {
            Ok(engine) => {
                let idle = now.saturating_duration_since(engine.session().last_activity());
                if idle > timeout {
                    log::warn!("evicting game {} after {:?} idle", id, idle);
                    false
                } else {
                    true
                }
            }
            Err(_) => true,
        });
        before - sessions.len()
    }

    /// Run `evict_idle` every sweep interval until the store is dropped by
    /// all other owners.
    pub fn spawn_sweeper(self: Arc<Self>) -> JoinHandle<()> {
        let weak = Arc::downgrade(&self);
        let period = self.config.sweep_interval;
        drop(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // the first tick fires immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(store) = weak.upgrade() else { break };
                let evicted = store.evict_idle(Instant::now()).await;
                if evicted > 0 {
                    log::info!("sweep evicted {} idle games", evicted);
                }
            }
        })
    }

    async fn entry(&self, game_id: &str) -> GameResult<Entry> {
        self.sessions
            .read()
            .await
            .get(game_id)
            .cloned()
            .ok_or_else(|| GameError::SessionNotFound(game_id.to_string()))
    }

    async fn lock(&self, game_id: &str) -> GameResult<OwnedMutexGuard<GameEngine>> {
        let entry = self.entry(game_id).await?;
        self.lock_current(game_id, entry).await
    }

    /// Lock `entry` and confirm it is still the game registered under
    /// `game_id`. Eviction or reset may remove it between the lookup and the
    /// lock; a removed game must not take any more actions.
    async fn lock_current(
        &self,
        game_id: &str,
        entry: Entry,
    ) -> GameResult<OwnedMutexGuard<GameEngine>> {
        let engine = entry.clone().lock_owned().await;
        let current = self
            .sessions
            .read()
            .await
            .get(game_id)
            .is_some_and(|live| Arc::ptr_eq(live, &entry));
        if !current {
            log::debug!("game {} was removed while waiting for its lock", game_id);
            return Err(GameError::SessionNotFound(game_id.to_string()));
        }
        Ok(engine)
    }
}

/// Seeded draws get a distinct seed per game so two games never replay each
/// other; without a seed every game draws from entropy.
fn seeded_draws(seed: Option<u64>) -> DrawFactory {
    let count = AtomicU64::new(0);
    Box::new(move || -> Box<dyn LocationDraw> {
        match seed {
            Some(base) => {
                let n = count.fetch_add(1, Ordering::Relaxed);
                Box::new(SeededDraw::new(base.wrapping_add(n)))
            }
            None => Box::new(SeededDraw::from_entropy()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::Role;
    use crate::models::draw::ScriptedDraw;

    fn store() -> SessionStore {
        let map = Arc::new(WorldMap::reference().unwrap());
        let draws: DrawFactory =
            Box::new(|| -> Box<dyn LocationDraw> { Box::new(ScriptedDraw::new((1..40).collect())) });
        SessionStore::with_parts(
            map,
            StoreConfig::default(),
            draws,
            Arc::new(UnenforcedCardRules),
        )
    }

    fn host() -> ActorProfile {
        ActorProfile::new("p1", "Ada", Role::Medic)
    }

    #[tokio::test]
    async fn create_then_snapshot() {
        let store = store();
        let snap = store.create_session("G1", host()).await.unwrap();
        assert_eq!(snap.game_id, "G1");
        assert!(!snap.started);
        assert_eq!(store.snapshot("G1").await, Some(snap));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn create_twice_is_refused() {
        let store = store();
        store.create_session("G1", host()).await.unwrap();
        assert_eq!(
            store.create_session("G1", host()).await,
            Err(GameError::SessionAlreadyExists("G1".to_string()))
        );
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let store = store();
        assert_eq!(
            store.start_session("nope").await,
            Err(GameError::SessionNotFound("nope".to_string()))
        );
        assert_eq!(
            store.apply_action("nope", "p1", Action::EndTurn).await,
            Err(GameError::SessionNotFound("nope".to_string()))
        );
        assert_eq!(store.snapshot("nope").await, None);
    }

    #[tokio::test]
    async fn join_start_and_play() {
        let store = store();
        store.create_session("G1", host()).await.unwrap();
        store
            .join_session("G1", ActorProfile::new("p2", "Bo", Role::Scientist))
            .await
            .unwrap();
        let snap = store.start_session("G1").await.unwrap();
        assert!(snap.started);
        assert_eq!(snap.total_cubes(), 18);

        let snap = store
            .apply_action("G1", "p1", Action::EndTurn)
            .await
            .unwrap();
        assert_eq!(snap.current_player_index, 1);
    }

    #[tokio::test]
    async fn reset_removes_the_game() {
        let store = store();
        store.create_session("G1", host()).await.unwrap();
        assert!(store.reset_session("G1").await);
        assert!(!store.reset_session("G1").await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn idle_games_are_evicted() {
        let store = store();
        store.create_session("old", host()).await.unwrap();
        let later = Instant::now() + Duration::from_secs(25 * 60 * 60);
        assert_eq!(store.evict_idle(Instant::now()).await, 0);
        assert_eq!(store.evict_idle(later).await, 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn locked_games_survive_the_sweep() {
        let store = store();
        store.create_session("busy", host()).await.unwrap();
        let entry = store.entry("busy").await.unwrap();
        let _guard = entry.lock().await;

        let later = Instant::now() + Duration::from_secs(25 * 60 * 60);
        assert_eq!(store.evict_idle(later).await, 0);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn evicted_game_refuses_a_waiting_action() {
        let store = store();
        store.create_session("G1", host()).await.unwrap();
        store
            .join_session("G1", ActorProfile::new("p2", "Bo", Role::Scientist))
            .await
            .unwrap();
        store.start_session("G1").await.unwrap();

        // looked up before the sweep, locked after it
        let entry = store.entry("G1").await.unwrap();
        let later = Instant::now() + Duration::from_secs(25 * 60 * 60);
        assert_eq!(store.evict_idle(later).await, 1);

        assert_eq!(
            store.lock_current("G1", entry).await.err(),
            Some(GameError::SessionNotFound("G1".to_string()))
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn recreated_game_is_not_mistaken_for_the_old_one() {
        let store = store();
        store.create_session("G1", host()).await.unwrap();
        let stale = store.entry("G1").await.unwrap();
        assert!(store.reset_session("G1").await);
        store.create_session("G1", host()).await.unwrap();

        assert!(store.lock_current("G1", stale).await.is_err());
        assert!(store.lock("G1").await.is_ok());
    }

    #[tokio::test]
    async fn reset_waits_out_and_refuses_queued_actions() {
        let store = Arc::new(store());
        store.create_session("G1", host()).await.unwrap();
        store
            .join_session("G1", ActorProfile::new("p2", "Bo", Role::Scientist))
            .await
            .unwrap();
        store.start_session("G1").await.unwrap();

        let entry = store.entry("G1").await.unwrap();
        let guard = entry.lock().await;

        let queued = {
            let store = store.clone();
            tokio::spawn(async move { store.apply_action("G1", "p1", Action::EndTurn).await })
        };
        tokio::task::yield_now().await;
        let reset = {
            let store = store.clone();
            tokio::spawn(async move { store.reset_session("G1").await })
        };
        tokio::task::yield_now().await;
        assert!(!reset.is_finished());

        drop(guard);
        assert_eq!(
            queued.await.unwrap(),
            Err(GameError::SessionNotFound("G1".to_string()))
        );
        assert!(reset.await.unwrap());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn station_needs_the_city_card() {
        let store = store();
        assert_eq!(store.config(), &StoreConfig::default());
        let chicago = store.map().location("Chicago").unwrap();
        let atlanta = store.map().location("Atlanta").unwrap();
        assert!(store.map().are_connected(atlanta, chicago));

        store
            .create_session("G1", host().with_cards(&["Chicago"]))
            .await
            .unwrap();
        store
            .join_session("G1", ActorProfile::new("p2", "Bo", Role::Scientist))
            .await
            .unwrap();
        store.start_session("G1").await.unwrap();

        store
            .apply_action("G1", "p1", Action::Move { to: "Chicago".to_string() })
            .await
            .unwrap();
        let snap = store
            .apply_action("G1", "p1", Action::BuildStation)
            .await
            .unwrap();
        assert!(snap.research_stations.contains(&"Chicago".to_string()));

        store
            .apply_action("G1", "p1", Action::Move { to: "San Francisco".to_string() })
            .await
            .unwrap();
        assert_eq!(
            store.apply_action("G1", "p1", Action::BuildStation).await,
            Err(GameError::MissingRequiredCard("San Francisco".to_string()))
        );
    }

    #[tokio::test]
    async fn concurrent_creates_have_one_winner() {
        let store = Arc::new(store());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.create_session("race", host()).await })
            })
            .collect();
        let mut wins = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => wins += 1,
                Err(e) => assert_eq!(e, GameError::SessionAlreadyExists("race".to_string())),
            }
        }
        assert_eq!(wins, 1);
    }

    #[test]
    fn seeded_games_get_their_own_seed() {
        let draws = seeded_draws(Some(7));
        let mut first = draws();
        let mut second = draws();
        let a: Vec<usize> = (0..16).map(|_| first.pick(1000)).collect();
        let b: Vec<usize> = (0..16).map(|_| second.pick(1000)).collect();
        assert_ne!(a, b);
    }
}
