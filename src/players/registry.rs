//! Player registry for harnesses.
//!
//! Maps a strategy name to a factory that builds a boxed [`Player`].
//! Harnesses fill it at startup and look strategies up by name.

use rustc_hash::FxHashMap;

use super::{BigMoneyPlayer, Player, RandomPlayer};

/// Builds a player from a display name and a seed.
pub type PlayerFactory = Box<dyn Fn(&str, u64) -> Box<dyn Player>>;

/// Registry of player factories.
///
/// ```
/// use atg_engine::players::PlayerRegistry;
///
/// let registry = PlayerRegistry::with_defaults();
/// let player = registry.create("big_money", "alice", 0).unwrap();
/// assert_eq!(player.name(), "alice");
/// ```
#[derive(Default)]
pub struct PlayerRegistry {
    factories: FxHashMap<String, PlayerFactory>,
}

impl PlayerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `"random"` and `"big_money"`.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("random", |name, seed| Box::new(RandomPlayer::new(name, seed)));
        registry.register("big_money", |name, _| Box::new(BigMoneyPlayer::new(name)));
        registry
    }

    /// Register a factory under a strategy name.
    ///
    /// Panics if the name is already registered.
    pub fn register<F>(&mut self, kind: impl Into<String>, factory: F)
    where
        F: Fn(&str, u64) -> Box<dyn Player> + 'static,
    {
        let kind = kind.into();
        if self.factories.contains_key(&kind) {
            panic!("Player factory {kind:?} already registered");
        }
        self.factories.insert(kind, Box::new(factory));
    }

    /// Build a player of the given strategy, or `None` if it is unknown.
    #[must_use]
    pub fn create(&self, kind: &str, name: &str, seed: u64) -> Option<Box<dyn Player>> {
        self.factories.get(kind).map(|factory| factory(name, seed))
    }

    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Registered strategy names, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<_> = self.factories.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for PlayerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
