//! Property tests for decision generation, deck bookkeeping and
//! termination.

use proptest::prelude::*;

use atg_engine::cards::{Card, CardId, CardType};
use atg_engine::core::{Decision, GameRng};
use atg_engine::rules::{is_game_over, legal_decisions, Prompt, TurnCounters};
use atg_engine::zones::{PlayerDeck, Supply};

fn card_type() -> impl Strategy<Value = CardType> {
    let all: Vec<CardType> = CardType::all().collect();
    prop::sample::select(all)
}

fn supply() -> impl Strategy<Value = Supply> {
    let all: Vec<CardType> = CardType::all().collect();
    prop::collection::vec(0u32..4, all.len())
        .prop_map(move |counts| Supply::new(all.iter().copied().zip(counts)))
}

fn counters() -> impl Strategy<Value = TurnCounters> {
    (0u32..3, 0u32..3, 0u32..12).prop_map(|(actions, buys, money)| TurnCounters {
        actions,
        buys,
        money,
    })
}

fn deck() -> impl Strategy<Value = PlayerDeck> {
    (
        prop::collection::vec(card_type(), 0..12),
        prop::collection::vec(card_type(), 0..8),
        prop::collection::vec(card_type(), 0..12),
    )
        .prop_map(|(draw, hand, discard)| {
            let mut next = 0;
            let mut mint = |types: Vec<CardType>| -> Vec<Card> {
                types
                    .into_iter()
                    .map(|t| {
                        next += 1;
                        Card::new(t, CardId(next))
                    })
                    .collect()
            };
            let draw = mint(draw);
            let hand = mint(hand);
            let discard = mint(discard);
            PlayerDeck::from_zones(draw, hand, discard)
        })
}

fn prompt() -> impl Strategy<Value = Prompt> {
    prop_oneof![
        Just(Prompt::Action),
        Just(Prompt::Money),
        Just(Prompt::Buy),
        any::<bool>().prop_map(|mandatory| Prompt::Discard { mandatory }),
        (0u32..10).prop_map(|max_cost| Prompt::Gain { max_cost }),
        Just(Prompt::Trash),
        Just(Prompt::Reaction),
        Just(Prompt::PlayTwice),
    ]
}

#[derive(Clone, Debug)]
enum DeckOp {
    Draw(usize),
    Play(usize),
    Discard(usize),
    Cleanup,
}

fn deck_op() -> impl Strategy<Value = DeckOp> {
    prop_oneof![
        (0usize..6).prop_map(DeckOp::Draw),
        (0usize..8).prop_map(DeckOp::Play),
        (0usize..8).prop_map(DeckOp::Discard),
        Just(DeckOp::Cleanup),
    ]
}

proptest! {
    /// BUY offers exactly the non-empty, buyable piles the player can afford.
    #[test]
    fn prop_buy_offers_exactly_affordable_piles(
        supply in supply(),
        counters in counters(),
        deck in deck(),
    ) {
        let set = legal_decisions(Prompt::Buy, &deck, &supply, &counters);

        for card_type in CardType::all() {
            let expected = counters.buys >= 1
                && supply.count(card_type) > 0
                && card_type.is_buyable()
                && card_type.cost() <= counters.money;
            prop_assert_eq!(set.contains(&Decision::buy(card_type)), expected);
        }
        prop_assert!(set.has_end_phase());
    }

    /// Only optional prompts can be declined, and the decline comes last.
    #[test]
    fn prop_end_phase_only_when_optional(
        prompt in prompt(),
        supply in supply(),
        counters in counters(),
        deck in deck(),
    ) {
        let set = legal_decisions(prompt, &deck, &supply, &counters);

        prop_assert_eq!(set.has_end_phase(), prompt.is_optional());
        if prompt.is_optional() {
            let last = set.as_slice().last().copied();
            prop_assert_eq!(last, Some(Decision::end_phase(prompt.phase())));
        }
    }

    /// Card decisions only ever name cards in the unplayed hand.
    #[test]
    fn prop_card_decisions_come_from_hand(
        prompt in prompt(),
        supply in supply(),
        counters in counters(),
        deck in deck(),
    ) {
        let set = legal_decisions(prompt, &deck, &supply, &counters);

        for decision in set.iter() {
            match decision {
                Decision::PlayCard { card } | Decision::Discard { card } | Decision::Trash { card } => {
                    prop_assert!(deck.unplayed().contains(card));
                }
                Decision::Buy { card_type } | Decision::Gain { card_type } => {
                    prop_assert!(supply.count(*card_type) > 0);
                }
                Decision::EndPhase { .. } => {}
            }
        }
    }

    /// Generating twice from the same inputs gives the same ordered set.
    #[test]
    fn prop_generation_is_repeatable(
        prompt in prompt(),
        supply in supply(),
        counters in counters(),
        deck in deck(),
    ) {
        let first = legal_decisions(prompt, &deck, &supply, &counters);
        let second = legal_decisions(prompt, &deck, &supply, &counters);
        prop_assert_eq!(first, second);
    }

    /// Drawing, playing, discarding and cleanup never create or lose cards.
    #[test]
    fn prop_deck_conserves_cards(
        deck in deck(),
        ops in prop::collection::vec(deck_op(), 0..30),
        seed in any::<u64>(),
    ) {
        let mut deck = deck;
        let mut rng = GameRng::new(seed);
        let mut before: Vec<CardId> = deck.owned_cards().map(|c| c.id()).collect();
        before.sort();

        for op in ops {
            match op {
                DeckOp::Draw(n) => {
                    deck.draw(n, &mut rng);
                }
                DeckOp::Play(i) => {
                    if let Some(card) = deck.unplayed().get(i).copied() {
                        prop_assert!(deck.play(card));
                    }
                }
                DeckOp::Discard(i) => {
                    if let Some(card) = deck.unplayed().get(i).copied() {
                        prop_assert!(deck.discard_from_hand(card));
                    }
                }
                DeckOp::Cleanup => deck.cleanup(),
            }
        }

        let mut after: Vec<CardId> = deck.owned_cards().map(|c| c.id()).collect();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// The game is over exactly when the Framework pile is empty.
    #[test]
    fn prop_game_over_iff_framework_empty(supply in supply()) {
        prop_assert_eq!(is_game_over(&supply), supply.count(CardType::Framework) == 0);
    }
}
