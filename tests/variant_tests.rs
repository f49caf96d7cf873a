//! Built-in skin integration tests.

mod common;

use common::{pairs, solve_pair};
use match_pairs::core::{CardUid, GameRng, ItemId};
use match_pairs::engine::{IgnoreReason, MatchEngine, Selection};
use match_pairs::games::GameVariant;
use match_pairs::round::{compose_round, CardKind, FaceState};
use match_pairs::theme::ItemDisplay;
use match_pairs::AssetManifest;

fn started(variant: GameVariant, seed: u64) -> MatchEngine {
    let mut engine = MatchEngine::builder(variant.config().unwrap().with_seed(seed))
        .build()
        .unwrap();
    engine.new_round();
    engine
}

// =============================================================================
// Every Skin
// =============================================================================

/// Every skin builds, deals, and can be played to a win.
#[test]
fn test_every_variant_plays_to_win() {
    for (i, variant) in GameVariant::ALL.into_iter().enumerate() {
        let mut engine = started(variant, i as u64);
        assert_eq!(engine.state().cards().len(), 12, "{}", variant);

        for (first, second) in pairs(&engine) {
            solve_pair(&mut engine, first, second);
        }
        engine.run_until_idle();

        assert!(engine.is_won(), "{}", variant);
        assert!(engine.state().is_celebrated(), "{}", variant);
    }
}

/// Every card's face resolves against the round's catalog.
#[test]
fn test_cards_resolve_to_displays() {
    for variant in GameVariant::ALL {
        let engine = started(variant, 12);
        let selection = engine.state().selection();
        for card in engine.state().cards() {
            let item = selection.get(card.item).unwrap();
            let _display: &ItemDisplay = card.display(item);
        }
    }
}

/// Image skins only reference files in the offline manifest.
#[test]
fn test_images_are_cached() {
    let manifest = AssetManifest::standard().unwrap();
    for variant in [GameVariant::Family, GameVariant::Flag] {
        for item in variant.theme().unwrap().iter() {
            let path = item.display.image_path().unwrap();
            assert!(manifest.contains(&format!("/{}/{}", variant.slug(), path)), "{}", path);
        }
    }
}

// =============================================================================
// Family Skin
// =============================================================================

/// Scenario D: the pinned family members are in every round.
#[test]
fn test_family_always_has_pinned() {
    let config = GameVariant::Family.config().unwrap();
    let pinned = [ItemId::new(1), ItemId::new(2)];

    for seed in 0..50 {
        let mut rng = GameRng::new(seed);
        let selection = compose_round(config.theme.items(), config.pairs, &config.pinned, &mut rng);
        let ids: Vec<_> = selection.ids().collect();

        assert_eq!(ids.len(), 6);
        assert_eq!(&ids[..2], &pinned);

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 6);
        assert!(ids.iter().all(|id| config.theme.contains(*id)));
    }
}

/// The non-pinned family slots vary between rounds.
#[test]
fn test_family_fill_varies() {
    let mut engine = started(GameVariant::Family, 1);
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..20 {
        seen.extend(engine.state().selection().ids());
        engine.new_round();
    }
    assert!(seen.len() > 6);
}

// =============================================================================
// Number Skin
// =============================================================================

/// Each number appears once as a numeral and once as dice.
#[test]
fn test_number_deal_kinds() {
    let engine = started(GameVariant::Number, 4);
    for item in engine.state().selection().ids() {
        let kinds: Vec<_> = engine
            .state()
            .cards()
            .iter()
            .filter(|c| c.item == item)
            .map(|c| c.kind)
            .collect();
        assert_eq!(kinds.len(), 2);
        assert!(kinds.contains(&CardKind::Numeral));
        assert!(kinds.contains(&CardKind::Pattern));
    }
}

/// Two numerals never match, even for the same number.
#[test]
fn test_numeral_never_matches_numeral() {
    let mut engine = started(GameVariant::Number, 4);
    let numerals: Vec<CardUid> = engine
        .state()
        .cards()
        .iter()
        .filter(|c| c.kind == CardKind::Numeral)
        .map(|c| c.uid)
        .collect();

    engine.select(numerals[0]);
    assert_eq!(engine.select(numerals[1]), Selection::Resolving { matched: false });
    engine.run_until_idle();
    assert!(engine.state().matched().is_empty());
}

/// A numeral and its dice face match.
#[test]
fn test_numeral_matches_its_dice() {
    let mut engine = started(GameVariant::Number, 4);
    let numeral = engine.state().cards().iter().find(|c| c.kind == CardKind::Numeral).unwrap().clone();
    let dice = engine
        .state()
        .cards()
        .iter()
        .find(|c| c.kind == CardKind::Pattern && c.item == numeral.item)
        .unwrap()
        .uid;

    engine.select(numeral.uid);
    assert_eq!(engine.select(dice), Selection::Resolving { matched: true });
    engine.run_until_idle();
    assert_eq!(engine.state().card(dice).unwrap().face, FaceState::Matched);
    assert_eq!(engine.select(dice), Selection::Ignored(IgnoreReason::AlreadyMatched));
}

/// Numerals show the number, dice cards show the pattern.
#[test]
fn test_number_displays() {
    let engine = started(GameVariant::Number, 4);
    let selection = engine.state().selection();
    for card in engine.state().cards() {
        let item = selection.get(card.item).unwrap();
        let shown = card.display(item);
        match card.kind {
            CardKind::Numeral => assert_eq!(shown, &item.display),
            CardKind::Pattern => assert_eq!(Some(shown), item.pattern.as_ref()),
            CardKind::Twin => panic!("twin card in number skin"),
        }
    }
}
