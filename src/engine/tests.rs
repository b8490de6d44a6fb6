use std::cell::RefCell;
use std::rc::Rc;

use super::Engine;
use crate::cards::{Card, CardId, CardType};
use crate::core::config::EngineConfig;
use crate::core::decision::{Decision, DecisionSet};
use crate::core::phase::TurnPhase;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::events::{Event, Recording, RecordingObserver};
use crate::players::{DecideError, Player};
use crate::zones::{PlayerDeck, Supply};

type Prompts = Rc<RefCell<Vec<(GameState, DecisionSet)>>>;

struct Scripted<F> {
    name: String,
    prompts: Prompts,
    choose: F,
}

impl<F> Player for Scripted<F>
where
    F: FnMut(&GameState, &DecisionSet) -> Decision,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, state: &GameState, options: &DecisionSet) -> Result<Decision, DecideError> {
        self.prompts.borrow_mut().push((state.clone(), options.clone()));
        Ok((self.choose)(state, options))
    }
}

fn scripted<F>(name: &str, choose: F) -> (Box<dyn Player>, Prompts)
where
    F: FnMut(&GameState, &DecisionSet) -> Decision + 'static,
{
    let prompts = Prompts::default();
    let player = Scripted {
        name: name.to_string(),
        prompts: Rc::clone(&prompts),
        choose,
    };
    (Box::new(player), prompts)
}

/// Play a card when one is offered, otherwise end the phase, otherwise
/// take the first option.
fn eager(state: &GameState, options: &DecisionSet) -> Decision {
    let end = Decision::end_phase(state.phase());
    options
        .iter()
        .find(|d| matches!(d, Decision::PlayCard { .. }))
        .copied()
        .or_else(|| options.contains(&end).then_some(end))
        .unwrap_or(options.as_slice()[0])
}

/// End every optional phase; take the first option otherwise.
fn passive(state: &GameState, options: &DecisionSet) -> Decision {
    let end = Decision::end_phase(state.phase());
    if options.contains(&end) {
        end
    } else {
        options.as_slice()[0]
    }
}

struct Table {
    engine: Engine,
    alice: Prompts,
    bob: Prompts,
    recording: Recording,
}

fn table<A, B>(alice: A, bob: B) -> Table
where
    A: FnMut(&GameState, &DecisionSet) -> Decision + 'static,
    B: FnMut(&GameState, &DecisionSet) -> Decision + 'static,
{
    let (a, alice) = scripted("alice", alice);
    let (b, bob) = scripted("bob", bob);
    let observer = RecordingObserver::new();
    let recording = observer.handle();
    let engine = Engine::new(EngineConfig::new().with_seed(1), a, b, Box::new(observer)).unwrap();
    Table {
        engine,
        alice,
        bob,
        recording,
    }
}

fn cards(types: &[CardType], first_id: u32) -> Vec<Card> {
    types
        .iter()
        .zip(first_id..)
        .map(|(t, id)| Card::new(*t, CardId(id)))
        .collect()
}

fn bitcoins(count: usize, first_id: u32) -> Vec<Card> {
    cards(&vec![CardType::Bitcoin; count], first_id)
}

const ALICE: PlayerId = PlayerId(0);
const BOB: PlayerId = PlayerId(1);

fn stack(engine: &mut Engine, seat: PlayerId, hand: Vec<Card>, first_draw_id: u32) {
    engine.decks[seat] = PlayerDeck::from_zones(bitcoins(10, first_draw_id), hand, vec![]);
}

fn phases(prompts: &Prompts) -> Vec<TurnPhase> {
    prompts.borrow().iter().map(|(s, _)| s.phase()).collect()
}

fn events(recording: &Recording) -> Vec<Event> {
    recording.borrow().iter().map(|(_, e)| e.clone()).collect()
}

#[test]
fn test_opening_turn() {
    let mut t = table(eager, passive);
    let opening = t.engine.deck(ALICE).hand_view();
    assert_eq!(opening.unplayed().len(), 5);
    assert_eq!(t.engine.deck(ALICE).owned_count(), 10);

    t.engine.take_turn().unwrap();

    let prompts = t.alice.borrow();
    let (first_state, first_options) = &prompts[0];
    assert_eq!(first_state.phase(), TurnPhase::Action);
    assert_eq!(first_state.available_actions(), 1);
    assert_eq!(first_state.available_buys(), 1);
    assert_eq!(first_options.as_slice(), &[Decision::end_phase(TurnPhase::Action)]);

    let (money_state, money_options) = &prompts[1];
    assert_eq!(money_state.phase(), TurnPhase::Money);
    let money_cards: Vec<_> = opening.unplayed().iter().filter(|c| c.is_money()).collect();
    assert_eq!(money_options.len(), money_cards.len() + 1);
    for card in money_cards {
        assert!(money_options.contains(&Decision::play(*card)));
    }
    assert_eq!(money_options.as_slice().last(), Some(&Decision::end_phase(TurnPhase::Money)));
}

#[test]
fn test_turn_passes_to_next_seat() {
    let mut t = table(passive, passive);

    t.engine.take_turn().unwrap();

    assert_eq!(t.engine.active_player(), BOB);
    assert_eq!(t.engine.turn_number(), 1);
    assert!(t.bob.borrow().is_empty());
    assert_eq!(t.engine.deck(ALICE).unplayed().len(), 5);
    assert!(events(&t.recording).contains(&Event::end_turn("alice")));
}

#[test]
fn test_afford_check() {
    let mut t = table(eager, passive);
    t.engine.supply = Supply::new([
        (CardType::Framework, 8),
        (CardType::Module, 3),
        (CardType::Hack, 1),
    ]);
    let mut hand = bitcoins(4, 0);
    hand.extend(cards(&[CardType::Method], 4));
    stack(&mut t.engine, ALICE, hand, 100);

    t.engine.take_turn().unwrap();

    let prompts = t.alice.borrow();
    let (buy_state, buy_options) = prompts
        .iter()
        .find(|(s, _)| s.phase() == TurnPhase::Buy)
        .unwrap();
    assert_eq!(buy_state.spendable_money(), 4);
    assert_eq!(
        buy_options.as_slice(),
        &[Decision::buy(CardType::Hack), Decision::end_phase(TurnPhase::Buy)]
    );
}

#[test]
fn test_buy_spends_money_and_buys() {
    let mut bought = false;
    let alice = move |state: &GameState, options: &DecisionSet| {
        if state.phase() == TurnPhase::Buy && !bought {
            bought = true;
            return Decision::buy(CardType::Ethereum);
        }
        eager(state, options)
    };
    let mut t = table(alice, passive);
    stack(&mut t.engine, ALICE, bitcoins(5, 0), 100);

    t.engine.take_turn().unwrap();

    assert_eq!(t.engine.supply().count(CardType::Ethereum), 39);
    assert_eq!(t.engine.deck(ALICE).owned_count(), 16);
    assert!(events(&t.recording).contains(&Event::gain_card(CardType::Ethereum, "alice")));
    // The only buy was used, so the phase ended without another prompt.
    assert_eq!(phases(&t.alice).iter().filter(|p| **p == TurnPhase::Buy).count(), 1);
}

#[test]
fn test_zero_actions_still_prompts() {
    let mut t = table(eager, passive);
    let mut hand = cards(&[CardType::Hack, CardType::Hack], 0);
    hand.extend(bitcoins(3, 2));
    stack(&mut t.engine, ALICE, hand, 100);
    t.engine.decks[BOB] = PlayerDeck::from_zones(vec![], bitcoins(3, 200), vec![]);

    t.engine.take_turn().unwrap();

    let prompts = t.alice.borrow();
    let actions: Vec<_> = prompts
        .iter()
        .filter(|(s, _)| s.phase() == TurnPhase::Action)
        .collect();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[1].0.available_actions(), 0);
    assert_eq!(actions[1].1.as_slice(), &[Decision::end_phase(TurnPhase::Action)]);
}

#[test]
fn test_forced_discard_to_three() {
    let mut t = table(eager, passive);
    let mut hand = cards(&[CardType::Hack], 0);
    hand.extend(bitcoins(4, 1));
    stack(&mut t.engine, ALICE, hand, 100);
    let bob_hand = cards(
        &[
            CardType::Method,
            CardType::Bitcoin,
            CardType::Bitcoin,
            CardType::Ethereum,
            CardType::Method,
        ],
        200,
    );
    t.engine.decks[BOB] = PlayerDeck::from_zones(vec![], bob_hand, vec![]);

    t.engine.take_turn().unwrap();

    let bob_prompts = t.bob.borrow();
    assert_eq!(bob_prompts.len(), 2);
    for (state, options) in bob_prompts.iter() {
        assert_eq!(state.phase(), TurnPhase::Discard);
        assert_eq!(state.player_name(), "bob");
        assert_eq!(state.available_actions(), 0);
        assert_eq!(state.spendable_money(), 0);
        assert!(!options.has_end_phase());
        assert!(options.iter().all(|d| matches!(d, Decision::Discard { .. })));
    }
    assert_eq!(bob_prompts[0].1.len(), 5);
    assert_eq!(bob_prompts[1].1.len(), 4);
    assert_eq!(t.engine.deck(BOB).unplayed().len(), 3);
    assert_eq!(t.engine.deck(BOB).discard_pile().len(), 2);

    let discards = events(&t.recording)
        .into_iter()
        .filter(|e| matches!(e, Event::DiscardCard { .. }))
        .count();
    assert_eq!(discards, 2);

    // Hack's own bonus still applies.
    let buy_state = t
        .alice
        .borrow()
        .iter()
        .find(|(s, _)| s.phase() == TurnPhase::Buy)
        .map(|(s, _)| s.clone())
        .unwrap();
    assert_eq!(buy_state.spendable_money(), 6);
}

#[test]
fn test_reaction_exempts_from_attack() {
    let mut t = table(eager, eager);
    let mut hand = cards(&[CardType::Hack], 0);
    hand.extend(bitcoins(4, 1));
    stack(&mut t.engine, ALICE, hand, 100);
    let monitoring = Card::new(CardType::Monitoring, CardId(200));
    let mut bob_hand = vec![monitoring];
    bob_hand.extend(bitcoins(4, 201));
    t.engine.decks[BOB] = PlayerDeck::from_zones(vec![], bob_hand, vec![]);

    t.engine.take_turn().unwrap();

    let bob_prompts = t.bob.borrow();
    assert_eq!(bob_prompts.len(), 1);
    let (state, options) = &bob_prompts[0];
    assert_eq!(state.phase(), TurnPhase::Reaction);
    assert_eq!(
        options.as_slice(),
        &[Decision::play(monitoring), Decision::end_phase(TurnPhase::Reaction)]
    );

    let bob = t.engine.deck(BOB);
    assert_eq!(bob.unplayed().len(), 5);
    assert!(bob.unplayed().contains(&monitoring));
    assert!(events(&t.recording).contains(&Event::play_card(monitoring, "bob")));
}

#[test]
fn test_declined_reaction_still_discards() {
    let mut t = table(eager, passive);
    let mut hand = cards(&[CardType::Hack], 0);
    hand.extend(bitcoins(4, 1));
    stack(&mut t.engine, ALICE, hand, 100);
    let mut bob_hand = cards(&[CardType::Monitoring], 200);
    bob_hand.extend(bitcoins(4, 201));
    t.engine.decks[BOB] = PlayerDeck::from_zones(vec![], bob_hand, vec![]);

    t.engine.take_turn().unwrap();

    assert_eq!(
        phases(&t.bob),
        vec![TurnPhase::Reaction, TurnPhase::Discard, TurnPhase::Discard]
    );
    assert_eq!(t.engine.deck(BOB).unplayed().len(), 3);
}

#[test]
fn test_evergreen_test_gives_bug() {
    let mut t = table(eager, passive);
    let mut hand = cards(&[CardType::EvergreenTest], 0);
    hand.extend(bitcoins(4, 1));
    stack(&mut t.engine, ALICE, hand, 100);

    t.engine.take_turn().unwrap();

    assert_eq!(t.engine.supply().count(CardType::Bug), 9);
    assert_eq!(t.engine.deck(BOB).owned_count(), 11);
    assert!(t
        .engine
        .deck(BOB)
        .owned_cards()
        .any(|c| c.card_type() == CardType::Bug));
    assert!(events(&t.recording).contains(&Event::gain_card(CardType::Bug, "bob")));
    assert!(t.bob.borrow().is_empty());
}

#[test]
fn test_daily_scrum_others_draw() {
    let mut t = table(eager, passive);
    let mut hand = cards(&[CardType::DailyScrum], 0);
    hand.extend(bitcoins(4, 1));
    stack(&mut t.engine, ALICE, hand, 100);

    t.engine.take_turn().unwrap();

    assert_eq!(t.engine.deck(BOB).unplayed().len(), 6);
    let buy_state = t
        .alice
        .borrow()
        .iter()
        .find(|(s, _)| s.phase() == TurnPhase::Buy)
        .map(|(s, _)| s.clone())
        .unwrap();
    assert_eq!(buy_state.available_buys(), 2);
    assert_eq!(buy_state.spendable_money(), 8);
}

#[test]
fn test_parallelization_resolves_twice() {
    let mut t = table(eager, passive);
    let hand = cards(&[CardType::Parallelization, CardType::CodeReview], 0);
    stack(&mut t.engine, ALICE, hand, 100);

    t.engine.take_turn().unwrap();

    let prompts = t.alice.borrow();
    // Action, PlayTwice (reported as ACTION), then back in the action loop.
    let (after, _) = &prompts[2];
    assert_eq!(after.phase(), TurnPhase::Action);
    assert_eq!(after.available_actions(), 4);
    assert_eq!(after.hand().played().len(), 2);
    assert_eq!(after.hand().unplayed().len(), 2);
    assert_eq!(prompts[1].1.as_slice().last(), Some(&Decision::end_phase(TurnPhase::Action)));
}

#[test]
fn test_declined_parallelization_keeps_action_phase() {
    let mut asked = 0;
    let alice = move |state: &GameState, options: &DecisionSet| {
        asked += 1;
        if asked == 2 {
            Decision::end_phase(TurnPhase::Action)
        } else {
            eager(state, options)
        }
    };
    let mut t = table(alice, passive);
    let hand = cards(&[CardType::Parallelization, CardType::CodeReview], 0);
    stack(&mut t.engine, ALICE, hand, 100);

    t.engine.take_turn().unwrap();

    let prompts = t.alice.borrow();
    let (after, options) = &prompts[2];
    assert_eq!(after.phase(), TurnPhase::Action);
    assert_eq!(after.hand().unplayed().len(), 1);
    assert_eq!(options.as_slice(), &[Decision::end_phase(TurnPhase::Action)]);

    let descriptions: Vec<_> = events(&t.recording).iter().map(Event::description).collect();
    assert!(descriptions.contains(&"alice declined to play an action twice".to_string()));
    assert_eq!(
        descriptions
            .iter()
            .filter(|d| d.as_str() == "alice ended action phase")
            .count(),
        1
    );
}

#[test]
fn test_refactor_trashes_then_gains() {
    let refactor = Card::new(CardType::Refactor, CardId(0));
    let bitcoin = Card::new(CardType::Bitcoin, CardId(1));
    let alice = move |state: &GameState, options: &DecisionSet| match state.phase() {
        TurnPhase::Trash => Decision::trash(bitcoin),
        TurnPhase::Gain => Decision::gain(CardType::Ethereum),
        _ => eager(state, options),
    };
    let mut t = table(alice, passive);
    stack(&mut t.engine, ALICE, vec![refactor, bitcoin], 100);

    t.engine.take_turn().unwrap();

    let prompts = t.alice.borrow();
    let (_, trash_options) = prompts
        .iter()
        .find(|(s, _)| s.phase() == TurnPhase::Trash)
        .unwrap();
    assert_eq!(trash_options.as_slice(), &[Decision::trash(bitcoin)]);

    let (_, gain_options) = prompts
        .iter()
        .find(|(s, _)| s.phase() == TurnPhase::Gain)
        .unwrap();
    assert!(!gain_options.has_end_phase());
    assert!(gain_options.contains(&Decision::gain(CardType::Ethereum)));
    assert!(gain_options.contains(&Decision::gain(CardType::CodeReview)));
    assert!(!gain_options.contains(&Decision::gain(CardType::Hack)));
    assert!(!gain_options.contains(&Decision::gain(CardType::Bug)));

    let owned: Vec<_> = t.engine.deck(ALICE).owned_cards().copied().collect();
    assert_eq!(owned.len(), 12);
    assert!(!owned.contains(&bitcoin));
    assert!(owned.iter().any(|c| c.card_type() == CardType::Ethereum));
    assert_eq!(t.engine.supply().count(CardType::Ethereum), 39);

    let log = events(&t.recording);
    assert!(log.contains(&Event::trash_card(CardType::Bitcoin, "alice")));
    assert!(log.contains(&Event::gain_card(CardType::Ethereum, "alice")));
}

#[test]
fn test_tech_debt_discards_per_empty_pile() {
    let mut t = table(eager, passive);
    t.engine.supply = Supply::new([
        (CardType::Framework, 8),
        (CardType::Hack, 0),
        (CardType::Ipo, 0),
        (CardType::Bitcoin, 60),
    ]);
    let mut hand = cards(&[CardType::TechDebt], 0);
    hand.extend(bitcoins(4, 1));
    stack(&mut t.engine, ALICE, hand, 100);

    t.engine.take_turn().unwrap();

    let discards = phases(&t.alice)
        .into_iter()
        .filter(|p| *p == TurnPhase::Discard)
        .count();
    assert_eq!(discards, 2);
}

#[test]
fn test_backlog_redraws_discarded() {
    let mut discarded = 0;
    let alice = move |state: &GameState, options: &DecisionSet| {
        if state.phase() == TurnPhase::Discard && discarded < 2 {
            discarded += 1;
            return options.as_slice()[0];
        }
        eager(state, options)
    };
    let mut t = table(alice, passive);
    let mut hand = cards(&[CardType::Backlog], 0);
    hand.extend(cards(&[CardType::Method, CardType::Method], 1));
    hand.extend(bitcoins(2, 3));
    stack(&mut t.engine, ALICE, hand, 100);

    t.engine.take_turn().unwrap();

    let prompts = t.alice.borrow();
    let discard_prompts: Vec<_> = prompts
        .iter()
        .filter(|(s, _)| s.phase() == TurnPhase::Discard)
        .collect();
    assert_eq!(discard_prompts.len(), 3);
    assert!(discard_prompts.iter().all(|(_, o)| o.has_end_phase()));

    let (money_state, _) = prompts
        .iter()
        .find(|(s, _)| s.phase() == TurnPhase::Money)
        .unwrap();
    assert_eq!(money_state.hand().unplayed().len(), 4);
}

#[test]
fn test_game_ends_when_framework_runs_out() {
    let alice = |state: &GameState, options: &DecisionSet| {
        let framework = Decision::buy(CardType::Framework);
        if options.contains(&framework) {
            framework
        } else {
            eager(state, options)
        }
    };
    let mut t = table(alice, passive);
    t.engine.supply = Supply::new([(CardType::Framework, 1), (CardType::Bitcoin, 60)]);
    stack(&mut t.engine, ALICE, bitcoins(8, 0), 100);

    let scores = t.engine.play().unwrap();

    assert!(t.engine.is_game_over());
    assert_eq!(t.engine.turn_number(), 1);
    assert_eq!(t.engine.supply().count(CardType::Framework), 0);
    assert_eq!(t.engine.last_decision(), Some(&Decision::buy(CardType::Framework)));
    assert!(t.bob.borrow().is_empty());

    assert_eq!(scores[0].name, "alice");
    assert_eq!(scores[0].score, 6);
    assert_eq!(scores[1].name, "bob");
    assert_eq!(scores[1].score, 3);

    let log = events(&t.recording);
    assert!(matches!(log.first(), Some(Event::GameEvent { description }) if description.starts_with("Game started")));
    assert!(matches!(log.last(), Some(Event::GameEvent { description }) if description.starts_with("Game over")));
    assert!(!log.iter().any(|e| matches!(e, Event::EndTurn { .. })));
}

#[test]
fn test_every_decision_emits_one_event() {
    let mut t = table(eager, passive);
    stack(&mut t.engine, ALICE, bitcoins(5, 0), 100);

    t.engine.take_turn().unwrap();

    // Turn start, end action, five plays, end money, end buy, end turn.
    let log = events(&t.recording);
    assert_eq!(t.alice.borrow().len(), 8);
    assert_eq!(log.len(), 10);
    assert_eq!(
        log.iter().filter(|e| matches!(e, Event::PlayCard { .. })).count(),
        5
    );
}

#[test]
fn test_last_snapshot_tracks_prompts() {
    let mut t = table(passive, passive);
    assert!(t.engine.last_snapshot().is_none());

    t.engine.take_turn().unwrap();

    let last = t.engine.last_snapshot().unwrap();
    assert_eq!(last.phase(), TurnPhase::Buy);
    assert_eq!(last.player_name(), "alice");
    assert_eq!(t.engine.last_decision(), Some(&Decision::end_phase(TurnPhase::Buy)));
}
