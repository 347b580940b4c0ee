//! End-to-end match scenarios.
//!
//! These drive whole nine-round duels through the public `Match` API, with
//! the human side scripted by the test and the opponent behind reference
//! or deliberately broken providers.

use plus_minus::{
    BattlePlay, CardId, Deal, FirstAvailable, Match, MatchResult, MoveProvider, Phase, Progress,
    ProviderError, ProviderView, RevealChoice, RoundRecord, Side, TokenPlacement,
};

/// First unused user card id.
fn first_unused(m: &Match<impl MoveProvider>, side: Side) -> CardId {
    m.player(side).first_unused().map(|c| c.id).unwrap()
}

/// First unused user card that can still absorb a minus token.
fn first_minus_target(m: &Match<impl MoveProvider>) -> CardId {
    m.player(Side::User)
        .unused()
        .find(|c| c.final_value() >= 1)
        .map(|c| c.id)
        .unwrap()
}

/// Reveal the first hidden opponent card if the round asks for one.
fn reveal_if_due(m: &mut Match<impl MoveProvider>) {
    if m.phase() == Phase::Reveal {
        let target = m
            .player(Side::Opponent)
            .unused()
            .find(|c| c.is_hidden())
            .map(|c| c.id)
            .unwrap();
        m.reveal(target).unwrap();
    }
}

/// Play one round mirroring `FirstAvailable`: self-cancelling tokens on
/// the first minus-capable card, reveal first hidden, play first unused.
fn mirror_round(m: &mut Match<impl MoveProvider>) -> RoundRecord {
    let target = first_minus_target(m);
    m.place_tokens(target, target).unwrap();
    reveal_if_due(m);
    let card = first_unused(m, Side::User);
    m.play(card).unwrap()
}

/// Sequential decks, tokens always self-cancelling, both sides playing in
/// increasing base order: nine ties, 0-0, draw.
#[test]
fn test_all_tie_match_is_a_draw() {
    let mut m = Match::new(FirstAvailable, &Deal::sequential());

    for round in 1..=9u8 {
        let record = mirror_round(&mut m);
        assert!(record.is_tie(), "round {round} should tie");
        assert_eq!(record.round, round);

        match m.advance().unwrap() {
            Progress::NextRound(n) => assert_eq!(n, round + 1),
            Progress::Finished(result) => {
                assert_eq!(round, 9);
                assert_eq!(result, MatchResult::Draw);
            }
        }
    }

    assert!(m.is_over());
    assert_eq!(m.result(), Some(MatchResult::Draw));
    assert_eq!(m.player(Side::User).score(), 0);
    assert_eq!(m.player(Side::Opponent).score(), 0);
    assert_eq!(m.history().len(), 9);
}

/// A boosted base-1 win for the user and a conceded base-2 round for the
/// opponent leave the score 1-1; the lower raw sum decides.
#[test]
fn test_tie_break_rewards_the_cheaper_win() {
    let mut m = Match::new(FirstAvailable, &Deal::sequential());

    // Round 1: +1 on the base-1 card, -1 on the base-2 card, then play the
    // boosted 1 against the opponent's 1.
    m.place_tokens(CardId::new(0), CardId::new(1)).unwrap();
    reveal_if_due(&mut m);
    let record = m.play(CardId::new(0)).unwrap();
    assert_eq!(record.winner, Some(Side::User));
    assert_eq!((record.user_base, record.user_final), (1, 2));
    m.advance().unwrap();

    // Rounds 2-9 mirror the opponent; the weakened base-2 card loses round
    // 2 and everything after ties.
    for _ in 2..=9 {
        mirror_round(&mut m);
        m.advance().unwrap();
    }

    assert_eq!(m.player(Side::User).score(), 1);
    assert_eq!(m.player(Side::Opponent).score(), 1);
    assert_eq!(m.player(Side::User).win_raw_sum(), 1);
    assert_eq!(m.player(Side::Opponent).win_raw_sum(), 2);
    assert_eq!(m.result(), Some(MatchResult::Winner(Side::User)));
}

/// Playing one step ahead of the opponent's ladder wins eight rounds; the
/// higher score settles it before raw sums are even consulted.
#[test]
fn test_higher_score_beats_cheaper_wins() {
    let mut m = Match::new(FirstAvailable, &Deal::sequential());

    // Play base 2,3,..,9 against 1,2,..,8, then the leftover 1 against 9.
    let order = [1u8, 2, 3, 4, 5, 6, 7, 8, 0];
    for &index in &order {
        let card = CardId::new(index);
        m.place_tokens(card, card).unwrap();
        reveal_if_due(&mut m);
        m.play(card).unwrap();
        m.advance().unwrap();
    }

    assert_eq!(m.player(Side::User).score(), 8);
    assert_eq!(m.player(Side::Opponent).score(), 1);
    // The user spent far more raw value winning; score still dominates.
    assert!(m.player(Side::User).win_raw_sum() > m.player(Side::Opponent).win_raw_sum());
    assert_eq!(m.result(), Some(MatchResult::Winner(Side::User)));
}

/// Score always equals the number of history entries won, and every card
/// is consumed by the end.
#[test]
fn test_bookkeeping_matches_history() {
    let mut m = Match::new(FirstAvailable, &Deal::shuffled(99));

    while !m.is_over() {
        mirror_round(&mut m);
        m.advance().unwrap();
    }

    for side in [Side::User, Side::Opponent] {
        let player = m.player(side);
        let wins = m.history().iter().filter(|r| r.won_by(side)).count();
        assert_eq!(player.score() as usize, wins);
        assert!(player.score() <= 9);

        let raw: u32 = m
            .history()
            .iter()
            .filter(|r| r.won_by(side))
            .map(|r| match side {
                Side::User => r.user_base as u32,
                Side::Opponent => r.opponent_base as u32,
            })
            .sum();
        assert_eq!(player.win_raw_sum(), raw);

        assert!(player.cards().iter().all(|c| c.is_used));
    }
}

/// A provider that answers placement and reveal but throws on battle.
struct BattleDrops;

impl MoveProvider for BattleDrops {
    fn place_tokens(&mut self, view: &ProviderView) -> Result<TokenPlacement, ProviderError> {
        FirstAvailable.place_tokens(view)
    }
    fn reveal(&mut self, view: &ProviderView) -> Result<RevealChoice, ProviderError> {
        FirstAvailable.reveal(view)
    }
    fn play(&mut self, _: &ProviderView) -> Result<BattlePlay, ProviderError> {
        Err(ProviderError::Transport("connection reset".into()))
    }
}

/// A battle-phase provider failure falls back to the lowest-id unused
/// card; the round resolves and the match carries on to a verdict.
#[test]
fn test_battle_provider_failure_does_not_stop_the_match() {
    let mut m = Match::new(BattleDrops, &Deal::sequential());

    let target = first_minus_target(&m);
    m.place_tokens(target, target).unwrap();
    reveal_if_due(&mut m);
    let record = m.play(first_unused(&m, Side::User)).unwrap();

    // Fallback commits the opponent's lowest-id unused card: base 1.
    assert_eq!(record.opponent_base, 1);
    m.advance().unwrap();
    assert_eq!(m.round_number(), 2);

    while !m.is_over() {
        mirror_round(&mut m);
        m.advance().unwrap();
    }
    assert_eq!(m.history().len(), 9);
    assert!(m.result().is_some());
}

/// Once the verdict is in, every further request bounces.
#[test]
fn test_finished_match_rejects_further_moves() {
    let mut m = Match::new(FirstAvailable, &Deal::sequential());
    while !m.is_over() {
        mirror_round(&mut m);
        m.advance().unwrap();
    }

    assert!(m.place_tokens(CardId::new(0), CardId::new(0)).is_err());
    assert!(m.reveal(CardId::new(0)).is_err());
    assert!(m.play(CardId::new(0)).is_err());
    assert!(m.advance().is_err());
}
