//! The referee.
//!
//! An [`Engine`] owns the supply, both decks and the turn counters. It
//! drives the turn loop, asks players for decisions from the legal set,
//! applies the chosen decisions (including nested card effects) and
//! reports everything to its observers. It stops when the Framework pile
//! is empty and returns the ranked scores.
//!
//! ```
//! use atg_engine::core::EngineConfig;
//! use atg_engine::engine::Engine;
//! use atg_engine::events::NullObserver;
//! use atg_engine::players::BigMoneyPlayer;
//!
//! let mut engine = Engine::new(
//!     EngineConfig::new().with_seed(3),
//!     Box::new(BigMoneyPlayer::new("alice")),
//!     Box::new(BigMoneyPlayer::new("bob")),
//!     Box::new(NullObserver),
//! )
//! .unwrap();
//!
//! let scores = engine.play().unwrap();
//! assert_eq!(scores.len(), 2);
//! assert!(engine.is_game_over());
//! ```

mod prompt;
mod resolver;
mod turn;

#[cfg(test)]
mod tests;

use crate::cards::{CardIdAllocator, CardType};
use crate::core::config::{EngineConfig, STARTING_DECK};
use crate::core::decision::Decision;
use crate::core::error::{ConfigError, EngineError};
use crate::core::phase::TurnPhase;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::events::{Event, GameObserver};
use crate::players::Player;
use crate::rules::options::TurnCounters;
use crate::rules::scoring::{rank, score_deck, ScorePair};
use crate::zones::{PlayerDeck, Supply};

/// Two-player game referee.
pub struct Engine {
    config: EngineConfig,
    rng: GameRng,
    ids: CardIdAllocator,
    supply: Supply,
    decks: PlayerMap<PlayerDeck>,
    players: PlayerMap<Box<dyn Player>>,
    names: PlayerMap<String>,
    observer: Box<dyn GameObserver>,
    seat_observers: PlayerMap<Option<Box<dyn GameObserver>>>,

    active: PlayerId,
    counters: TurnCounters,
    turn_number: u32,
    started: bool,
    game_over: bool,
    reported: bool,
    halted: Option<String>,

    last_snapshot: Option<GameState>,
    last_decision: Option<Decision>,
}

impl Engine {
    /// Validate the configuration and deal both starting decks.
    ///
    /// `first` takes the first turn.
    pub fn new(
        config: EngineConfig,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        observer: Box<dyn GameObserver>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(config.seed);
        let mut ids = CardIdAllocator::new();
        let supply = config.initial_supply();

        let decks = PlayerMap::new(|_| {
            let cards = STARTING_DECK
                .iter()
                .flat_map(|&(card_type, count)| std::iter::repeat(card_type).take(count as usize))
                .map(|card_type| ids.mint(card_type))
                .collect();
            let mut deck = PlayerDeck::new(cards);
            deck.shuffle_draw_pile(&mut rng);
            deck.draw(config.hand_size, &mut rng);
            deck
        });

        let players = PlayerMap::pair(first, second);
        let names = PlayerMap::new(|seat| players[seat].name().to_string());

        Ok(Self {
            config,
            rng,
            ids,
            supply,
            decks,
            players,
            names,
            observer,
            seat_observers: PlayerMap::new(|_| None),
            active: PlayerId::FIRST,
            counters: TurnCounters::start_of_turn(),
            turn_number: 0,
            started: false,
            game_over: false,
            reported: false,
            halted: None,
            last_snapshot: None,
            last_decision: None,
        })
    }

    /// Install a private observer for one seat.
    ///
    /// It receives every event, each paired with a snapshot of its own
    /// seat rather than of the player the event concerns.
    #[must_use]
    pub fn with_player_observer(mut self, seat: PlayerId, observer: Box<dyn GameObserver>) -> Self {
        self.seat_observers[seat] = Some(observer);
        self
    }

    /// Play until the Framework pile is empty and return the ranked scores.
    ///
    /// Stops early with an error if a player violates the protocol or the
    /// configured turn limit is exceeded. The engine stays inspectable
    /// afterwards either way. A stopped run never resumes: later calls
    /// return `Halted` without prompting anyone, and a finished game
    /// returns its scores again without notifying observers.
    pub fn play(&mut self) -> Result<Vec<ScorePair>, EngineError> {
        if let Some(cause) = &self.halted {
            return Err(EngineError::Halted {
                cause: cause.clone(),
            });
        }
        if self.reported {
            return Ok(self.scores());
        }

        if !self.started {
            self.started = true;
            tracing::info!(
                seed = self.config.seed,
                first = %self.names[PlayerId(0)],
                second = %self.names[PlayerId(1)],
                "game started"
            );
            let description = format!(
                "Game started: {} vs {}",
                self.names[PlayerId(0)],
                self.names[PlayerId(1)]
            );
            self.emit(PlayerId::FIRST, TurnPhase::Action, Event::game(description));
        }

        if let Err(err) = self.run_turns() {
            self.halted = Some(err.to_string());
            return Err(err);
        }

        let scores = self.scores();
        let summary = scores
            .iter()
            .map(|s| format!("{} {}", s.name, s.score))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!(turns = self.turn_number, %summary, "game over");
        self.emit(self.active, TurnPhase::Cleanup, Event::game(format!("Game over: {summary}")));
        self.reported = true;
        Ok(scores)
    }

    fn run_turns(&mut self) -> Result<(), EngineError> {
        while !self.game_over {
            if let Some(limit) = self.config.turn_limit {
                if self.turn_number >= limit {
                    tracing::warn!(limit, "turn limit exceeded");
                    return Err(EngineError::TurnLimitExceeded { limit });
                }
            }
            self.take_turn()?;
        }
        Ok(())
    }

    /// Current scores, highest first. Ties keep seat order.
    #[must_use]
    pub fn scores(&self) -> Vec<ScorePair> {
        rank(
            PlayerId::all()
                .map(|seat| ScorePair {
                    seat,
                    name: self.names[seat].clone(),
                    score: score_deck(&self.decks[seat]),
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Live supply counts.
    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    #[must_use]
    pub fn deck(&self, seat: PlayerId) -> &PlayerDeck {
        &self.decks[seat]
    }

    #[must_use]
    pub fn player_name(&self, seat: PlayerId) -> &str {
        &self.names[seat]
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Number of turns started so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The snapshot handed to the most recent prompt.
    /// Whether a violation or the turn limit stopped the run.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    #[must_use]
    pub fn last_snapshot(&self) -> Option<&GameState> {
        self.last_snapshot.as_ref()
    }

    /// The most recent reply a player returned, including one rejected
    /// as a violation.
    #[must_use]
    pub fn last_decision(&self) -> Option<&Decision> {
        self.last_decision.as_ref()
    }

    /// Counters as seen by `seat`: the live ones for the active player,
    /// zeros for anyone else.
    fn counters_for(&self, seat: PlayerId) -> TurnCounters {
        if seat == self.active {
            self.counters
        } else {
            TurnCounters::off_turn()
        }
    }

    fn snapshot(&self, seat: PlayerId, phase: TurnPhase) -> GameState {
        let counters = self.counters_for(seat);
        GameState::new(
            self.names[seat].clone(),
            self.decks[seat].hand_view(),
            counters.money,
            counters.buys,
            counters.actions,
            phase,
            self.supply.clone(),
        )
    }

    /// Notify the primary observer with `subject`'s view and every seat
    /// observer with its own seat's view.
    fn emit(&mut self, subject: PlayerId, phase: TurnPhase, event: Event) {
        let state = self.snapshot(subject, phase);
        self.observer.notify(&state, &event);

        for seat in PlayerId::all() {
            if self.seat_observers[seat].is_none() {
                continue;
            }
            let view = if seat == subject {
                state.clone()
            } else {
                self.snapshot(seat, phase)
            };
            if let Some(observer) = self.seat_observers[seat].as_mut() {
                observer.notify(&view, &event);
            }
        }
    }

    /// Move one card from the supply into `seat`'s discard pile and end
    /// the game if that emptied the Framework pile.
    fn gain_from_supply(&mut self, seat: PlayerId, card_type: CardType, phase: TurnPhase) {
        self.supply.take(card_type);
        let card = self.ids.mint(card_type);
        self.decks[seat].gain(card);

        let event = Event::gain_card(card_type, self.names[seat].clone());
        self.emit(seat, phase, event);

        if crate::rules::is_game_over(&self.supply) {
            tracing::info!(player = %self.names[seat], "framework pile empty");
            self.game_over = true;
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("active", &self.active)
            .field("turn_number", &self.turn_number)
            .field("counters", &self.counters)
            .field("game_over", &self.game_over)
            .field("halted", &self.halted)
            .finish_non_exhaustive()
    }
}
