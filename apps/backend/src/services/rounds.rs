//! Round controller: the state-machine transitions a player action can
//! trigger on the shared session.
//!
//! Every method takes the current session plus request arguments and either
//! mutates it (an [`Outcome::persist`]) or rejects without mutation. Phase
//! is never stored; it is derived from submission and player counts
//! (see [`crate::domain::phase`]).

use std::collections::BTreeMap;

use rand::{Rng, RngCore};
use tracing::{debug, info};

use crate::config::CardCorpus;
use crate::domain::phase::{round_phase, RoundPhase};
use crate::domain::view::{player_view, PlayerView, RevealedSubmissions};
use crate::domain::{Card, CardId, Deck, Player, PlayerId, SessionState, HAND_SIZE, NO_CARD};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::services::Outcome;

/// Round controller service. Stateless; all state lives in the session.
#[derive(Default)]
pub struct RoundService;

impl RoundService {
    /// Join the session under a display name.
    ///
    /// Joining is idempotent by case-insensitive name: a returning player
    /// gets their existing id back and no new seat is created. A fresh
    /// player gets a generated id and [`HAND_SIZE`] white cards.
    pub fn join(
        &self,
        state: &mut SessionState,
        rng: &mut dyn RngCore,
        name: &str,
    ) -> Result<Outcome<PlayerView>, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidName,
                "player name must not be blank",
            ));
        }

        if let Some(existing_id) = state.find_player_by_name(name).map(|p| p.id.clone()) {
            debug!(player_id = %existing_id, name, "re-join under existing name");
            return Ok(Outcome::read(player_view(state, &existing_id)));
        }

        let id = generate_player_id(state, rng);
        let mut hand = Deck::default();
        hand.add(state.white_deck.deal(HAND_SIZE));

        state.players.insert(
            id.clone(),
            Player {
                id: id.clone(),
                name: name.to_string(),
                hand,
            },
        );

        info!(player_id = %id, name, players = state.players.len(), "player joined");
        Ok(Outcome::persist(player_view(state, &id)))
    }

    /// Current view for a joined player. Read-only.
    pub fn query(
        &self,
        state: &SessionState,
        player_id: &str,
    ) -> Result<Outcome<PlayerView>, DomainError> {
        state.require_player(player_id)?;
        Ok(Outcome::read(player_view(state, player_id)))
    }

    /// Record (or withdraw, with [`NO_CARD`]) a player's submission for the
    /// current round. Re-submitting overwrites the earlier pick.
    pub fn play_card(
        &self,
        state: &mut SessionState,
        player_id: &str,
        card_id: CardId,
    ) -> Result<Outcome<PlayerView>, DomainError> {
        let player = state.require_player(player_id)?;
        reject_if_game_over(state)?;

        if card_id == NO_CARD {
            state.submissions.remove(player_id);
            debug!(player_id, "submission withdrawn");
        } else {
            if !player.hand.contains(card_id) {
                return Err(DomainError::validation(
                    ValidationKind::CardNotInHand,
                    format!("card {card_id} is not in player {player_id}'s hand"),
                ));
            }
            state.submissions.insert(player_id.to_string(), card_id);
            debug!(player_id, card_id, "submission recorded");
        }

        Ok(Outcome::persist(player_view(state, player_id)))
    }

    /// The judge's reveal: every pending submission, resolved to card text.
    ///
    /// Rejected unless the caller sat out this round and everyone else has
    /// submitted. Read-only either way; the reveal itself is never stored.
    pub fn reveal_submissions(
        &self,
        state: &SessionState,
        corpus: &CardCorpus,
        player_id: &str,
    ) -> Result<Outcome<RevealedSubmissions>, DomainError> {
        state.require_player(player_id)?;
        reject_if_game_over(state)?;

        if state.has_played(player_id) {
            return Err(DomainError::validation(
                ValidationKind::AlreadySubmitted,
                "a player who submitted this round cannot reveal it",
            ));
        }

        if round_phase(state.submissions.len(), state.players.len()) != RoundPhase::Revealable {
            return Err(DomainError::validation(
                ValidationKind::RevealNotReady,
                format!(
                    "{} of {} non-judge submissions are in",
                    state.submissions.len(),
                    state.players.len().saturating_sub(1)
                ),
            ));
        }

        let mut submissions = BTreeMap::new();
        for (pid, &cid) in &state.submissions {
            let text = corpus.white_text(cid).ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("submitted card id {cid} is outside the white corpus"),
                )
            })?;
            submissions.insert(pid.clone(), Card::new(cid, text));
        }

        debug!(player_id, submissions = submissions.len(), "round revealed");
        Ok(Outcome::read(RevealedSubmissions { submissions }))
    }

    /// Close out the round: replace every submitted card with a fresh deal,
    /// clear submissions, credit the winner, and deal the next prompt.
    ///
    /// When the black pile is exhausted the session enters its terminal
    /// state; only `join`, `query`, and `reset` remain available.
    pub fn resolve_round(
        &self,
        state: &mut SessionState,
        player_id: &str,
        winning_player_id: &str,
    ) -> Result<Outcome<PlayerView>, DomainError> {
        state.require_player(player_id)?;
        state.require_player(winning_player_id)?;
        reject_if_game_over(state)?;

        let submitted: Vec<(PlayerId, CardId)> = state
            .submissions
            .iter()
            .map(|(pid, &cid)| (pid.clone(), cid))
            .collect();

        for (pid, cid) in submitted {
            let replacement = state.white_deck.deal(1);
            if let Some(player) = state.players.get_mut(&pid) {
                player.hand.remove(cid);
                player.hand.add(replacement);
            }
        }
        state.submissions.clear();

        *state
            .scores
            .entry(winning_player_id.to_string())
            .or_insert(0) += 1;

        match state.black_deck.deal(1).into_iter().next() {
            Some(card) => state.current_black = card,
            None => {
                state.game_over = true;
                info!("black deck exhausted, session is over");
            }
        }

        info!(
            winner = winning_player_id,
            score = state.score(winning_player_id),
            "round resolved"
        );
        Ok(Outcome::persist(player_view(state, player_id)))
    }

    /// Start the session over from the full corpora. Every player is wiped
    /// and must rejoin.
    pub fn reset(
        &self,
        state: &mut SessionState,
        corpus: &CardCorpus,
        rng: &mut dyn RngCore,
    ) -> Result<Outcome<()>, DomainError> {
        *state = SessionState::reset(corpus.black(), corpus.white(), rng)?;
        info!(
            black_cards = state.black_deck.len() + 1,
            white_cards = state.white_deck.len(),
            "session reset"
        );
        Ok(Outcome::persist(()))
    }
}

fn reject_if_game_over(state: &SessionState) -> Result<(), DomainError> {
    if state.game_over {
        return Err(DomainError::validation(
            ValidationKind::GameOver,
            "the black deck is exhausted; reset to start a new game",
        ));
    }
    Ok(())
}

/// Fresh unique player id: a random non-negative 31-bit integer, rendered
/// as a decimal string. Regenerates on the rare collision.
fn generate_player_id(state: &SessionState, rng: &mut dyn RngCore) -> PlayerId {
    loop {
        let id = rng.random_range(0..=i32::MAX).to_string();
        if !state.players.contains_key(&id) {
            return id;
        }
    }
}
