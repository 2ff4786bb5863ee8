//! Full round lifecycle driven through the session gateway.

mod common;

use backend::domain::{PlayerView, NO_CARD};
use backend::store::SessionKey;
use backend::RoundService;

fn seat<'a>(view: &'a PlayerView, id: &str) -> &'a backend::domain::PlayerPublic {
    view.players
        .iter()
        .find(|p| p.id == id)
        .expect("player should be listed")
}

#[tokio::test]
async fn a_complete_round_updates_scores_hands_and_prompt() {
    let (_store, gateway) = common::test_gateway(1);
    let key = SessionKey::default();

    let alice = common::join(&gateway, &key, "Alice").await;
    let bob = common::join(&gateway, &key, "Bob").await;
    let carol = common::join(&gateway, &key, "Carol").await;

    let prompt_before = alice.black.clone();
    let alice_card = alice.hand[0].id;
    let bob_card = bob.hand[0].id;

    for (pid, card) in [(&alice.player_id, alice_card), (&bob.player_id, bob_card)] {
        gateway
            .with_session(&key, |state, _| RoundService.play_card(state, pid, card))
            .await
            .unwrap();
    }

    // judge reveals both submissions with their corpus text
    let revealed = gateway
        .with_session(&key, |state, _| {
            RoundService.reveal_submissions(state, gateway.corpus(), &carol.player_id)
        })
        .await
        .unwrap();
    assert_eq!(revealed.submissions.len(), 2);
    assert_eq!(revealed.submissions[&alice.player_id].id, alice_card);

    let after = gateway
        .with_session(&key, |state, _| {
            RoundService.resolve_round(state, &carol.player_id, &alice.player_id)
        })
        .await
        .unwrap();

    assert_eq!(seat(&after, &alice.player_id).score, 1);
    assert_eq!(seat(&after, &bob.player_id).score, 0);
    assert!(!seat(&after, &alice.player_id).has_played);
    assert_ne!(after.black, prompt_before);

    // submitted cards were swapped for fresh ones, hands back to full size
    let alice_after = gateway
        .with_session(&key, |state, _| {
            RoundService.query(state, &alice.player_id)
        })
        .await
        .unwrap();
    assert_eq!(alice_after.hand.len(), alice.hand.len());
    assert!(alice_after.hand.iter().all(|c| c.id != alice_card));
    assert_eq!(alice_after.selected, NO_CARD);
}

#[tokio::test]
async fn rejoining_by_name_keeps_the_same_seat() {
    let (_store, gateway) = common::test_gateway(2);
    let key = SessionKey::default();

    let first = common::join(&gateway, &key, "Dana").await;
    let second = common::join(&gateway, &key, "DANA").await;

    assert_eq!(first.player_id, second.player_id);
    assert_eq!(second.players.len(), 1);
    assert_eq!(second.hand, first.hand);
}

#[tokio::test]
async fn reset_wipes_the_session_and_players_must_rejoin() {
    let (_store, gateway) = common::test_gateway(3);
    let key = SessionKey::default();

    let alice = common::join(&gateway, &key, "Alice").await;
    gateway
        .with_session(&key, |state, rng| {
            RoundService.reset(state, gateway.corpus(), rng)
        })
        .await
        .unwrap();

    let err = gateway
        .with_session(&key, |state, _| {
            RoundService.query(state, &alice.player_id)
        })
        .await
        .unwrap_err();
    assert!(matches!(err, backend::AppError::NotFound { .. }));

    let rejoined = common::join(&gateway, &key, "Alice").await;
    assert_ne!(rejoined.player_id, alice.player_id);
}
