//! Hold-to-reveal flow: the phone is passed around, each player selects
//! themselves, holds the card to fill the progress meter, and confirms
//! once their role has been seen. Releasing early resets the meter so a
//! glance over someone's shoulder never shows a partially revealed card.

use std::time::Duration;

use crate::types::{Player, PlayerId};

/// Meter gained per millisecond of holding. Filling the meter from zero
/// takes roughly two thirds of a second.
pub const PROGRESS_PER_MS: f64 = 0.15;

/// Meter value at which the card unlocks.
pub const UNLOCK_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum HoldState {
    Idle,
    Holding { progress: f64 },
    Unlocked,
}

/// The role card content shown to one player, only ever produced while
/// their hold is unlocked.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RoleCard {
    pub player_name: String,
    pub is_impostor: bool,
    pub word: Option<String>,
    /// Category clue for impostors, present only when hints are enabled.
    pub hint: Option<String>,
}

/// Per-reveal-phase machine: which player currently has the device and
/// where their hold stands.
#[derive(Debug, Default)]
pub struct RevealMachine {
    active: Option<(PlayerId, HoldState)>,
}

impl RevealMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_player(&self) -> Option<&PlayerId> {
        self.active.as_ref().map(|(id, _)| id)
    }

    /// Meter value for rendering, zero when nobody is holding.
    pub fn progress(&self) -> f64 {
        match self.active {
            Some((_, HoldState::Holding { progress })) => progress,
            Some((_, HoldState::Unlocked)) => UNLOCK_THRESHOLD,
            _ => 0.0,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self.active, Some((_, HoldState::Unlocked)))
    }

    /// Hand the device to a player. Re-selecting the current player resets
    /// their hold; selecting a player who already viewed their role is a
    /// no-op; switching away from someone mid-reveal is refused.
    pub fn select_player(&mut self, players: &[Player], id: &str) -> Result<(), String> {
        let player = players
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| format!("No player with id {id}"))?;

        if player.has_viewed_role {
            return Ok(());
        }

        if let Some((active_id, state)) = &self.active {
            if active_id != id && *state != HoldState::Idle {
                return Err(format!(
                    "Player {active_id} is mid-reveal, confirm or release first"
                ));
            }
        }

        self.active = Some((id.to_string(), HoldState::Idle));
        Ok(())
    }

    pub fn begin_hold(&mut self) -> Result<(), String> {
        match &mut self.active {
            Some((_, state @ HoldState::Idle)) => {
                *state = HoldState::Holding { progress: 0.0 };
                Ok(())
            }
            // Already holding or unlocked: pressing again changes nothing.
            Some(_) => Ok(()),
            None => Err("No player selected".to_string()),
        }
    }

    /// Advance the meter by elapsed hold time. Returns whether the card is
    /// now unlocked.
    pub fn advance_hold(&mut self, elapsed: Duration) -> Result<bool, String> {
        match &mut self.active {
            Some((_, state @ HoldState::Holding { .. })) => {
                if let HoldState::Holding { progress } = state {
                    let next = *progress + PROGRESS_PER_MS * elapsed.as_millis() as f64;
                    if next >= UNLOCK_THRESHOLD {
                        *state = HoldState::Unlocked;
                        return Ok(true);
                    }
                    *progress = next;
                }
                Ok(false)
            }
            Some((_, HoldState::Unlocked)) => Ok(true),
            Some((_, HoldState::Idle)) => Err("Hold has not started".to_string()),
            None => Err("No player selected".to_string()),
        }
    }

    /// Letting go before the threshold discards all progress. An unlocked
    /// card stays unlocked.
    pub fn release_hold(&mut self) -> Result<(), String> {
        match &mut self.active {
            Some((_, state @ HoldState::Holding { .. })) => {
                *state = HoldState::Idle;
                Ok(())
            }
            Some(_) => Ok(()),
            None => Err("No player selected".to_string()),
        }
    }

    /// The card content, only while unlocked. The hint goes to impostors
    /// with no word at all (classic/chaos) when hints are enabled; a spy
    /// impostor already holds the fake word and gets nothing extra.
    pub fn role_card(
        &self,
        players: &[Player],
        hint_enabled: bool,
        category_name: &str,
        related_hint: Option<&str>,
    ) -> Option<RoleCard> {
        let (id, HoldState::Unlocked) = self.active.as_ref()? else {
            return None;
        };
        let player = players.iter().find(|p| &p.id == id)?;

        let hint = (player.is_impostor && player.word.is_none() && hint_enabled)
            .then(|| related_hint.unwrap_or(category_name).to_string());

        Some(RoleCard {
            player_name: player.name.clone(),
            is_impostor: player.is_impostor,
            word: player.word.clone(),
            hint,
        })
    }

    /// Player confirms they saw the card. Marks them viewed, clears the
    /// active slot, and reports whether every player has now viewed.
    pub fn confirm_viewed(&mut self, players: &mut [Player]) -> Result<bool, String> {
        let Some((id, HoldState::Unlocked)) = &self.active else {
            return Err("Role card is not unlocked".to_string());
        };

        let player = players
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| format!("No player with id {id}"))?;
        player.has_viewed_role = true;
        self.active = None;

        Ok(players.iter().all(|p| p.has_viewed_role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::roles::assign_roles;
    use crate::types::{GameMode, WordPack};

    fn roster() -> Vec<Player> {
        let names: Vec<String> = ["Ana", "Luis", "Marta"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assign_roles(&names, GameMode::Classic, 1, &WordPack::plain("Espejo")).players
    }

    #[test]
    fn test_hold_accumulates_and_unlocks() {
        let players = roster();
        let mut machine = RevealMachine::new();
        machine.select_player(&players, &players[0].id).unwrap();
        machine.begin_hold().unwrap();

        // 400ms -> progress 60, still locked.
        assert!(!machine.advance_hold(Duration::from_millis(400)).unwrap());
        assert!((machine.progress() - 60.0).abs() < 1e-9);

        // Another 300ms crosses the threshold.
        assert!(machine.advance_hold(Duration::from_millis(300)).unwrap());
        assert!(machine.is_unlocked());
        assert_eq!(machine.progress(), UNLOCK_THRESHOLD);
    }

    #[test]
    fn test_release_resets_progress_to_zero() {
        let players = roster();
        let mut machine = RevealMachine::new();
        machine.select_player(&players, &players[0].id).unwrap();
        machine.begin_hold().unwrap();
        machine.advance_hold(Duration::from_millis(500)).unwrap();

        machine.release_hold().unwrap();
        assert_eq!(machine.progress(), 0.0);
        assert!(!machine.is_unlocked());

        // A fresh hold starts from zero.
        machine.begin_hold().unwrap();
        assert!(!machine.advance_hold(Duration::from_millis(400)).unwrap());
    }

    #[test]
    fn test_unlock_is_sticky() {
        let players = roster();
        let mut machine = RevealMachine::new();
        machine.select_player(&players, &players[0].id).unwrap();
        machine.begin_hold().unwrap();
        machine.advance_hold(Duration::from_millis(700)).unwrap();
        assert!(machine.is_unlocked());

        machine.release_hold().unwrap();
        assert!(machine.is_unlocked());
    }

    #[test]
    fn test_role_card_requires_unlock() {
        let players = roster();
        let mut machine = RevealMachine::new();
        machine.select_player(&players, &players[0].id).unwrap();
        assert!(machine.role_card(&players, false, "General", None).is_none());

        machine.begin_hold().unwrap();
        machine.advance_hold(Duration::from_millis(200)).unwrap();
        assert!(machine.role_card(&players, false, "General", None).is_none());

        machine.advance_hold(Duration::from_millis(500)).unwrap();
        let card = machine
            .role_card(&players, false, "General", None)
            .unwrap();
        assert_eq!(card.player_name, players[0].name);
    }

    #[test]
    fn test_hint_only_for_impostor_when_enabled() {
        let mut players = roster();
        let impostor_id = players.iter().find(|p| p.is_impostor).unwrap().id.clone();
        let crew_id = players.iter().find(|p| !p.is_impostor).unwrap().id.clone();

        let mut machine = RevealMachine::new();
        machine.select_player(&players, &impostor_id).unwrap();
        machine.begin_hold().unwrap();
        machine.advance_hold(Duration::from_millis(700)).unwrap();

        let card = machine
            .role_card(&players, true, "Animales", Some("Felinos"))
            .unwrap();
        assert_eq!(card.hint.as_deref(), Some("Felinos"));

        // Hints disabled: nothing.
        let card = machine.role_card(&players, false, "Animales", None).unwrap();
        assert!(card.hint.is_none());

        machine.confirm_viewed(&mut players).unwrap();

        // Crew member never gets a hint.
        machine.select_player(&players, &crew_id).unwrap();
        machine.begin_hold().unwrap();
        machine.advance_hold(Duration::from_millis(700)).unwrap();
        let card = machine
            .role_card(&players, true, "Animales", Some("Felinos"))
            .unwrap();
        assert!(card.hint.is_none());
    }

    #[test]
    fn test_spy_impostor_gets_fake_word_but_no_hint() {
        let names: Vec<String> = ["Ana", "Luis", "Marta"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let pack = WordPack {
            secret_word: "Playa".to_string(),
            fake_word: Some("Piscina".to_string()),
            related_hint: Some("Lugares con agua".to_string()),
        };
        let players = assign_roles(&names, GameMode::Spy, 1, &pack).players;
        let impostor_id = players.iter().find(|p| p.is_impostor).unwrap().id.clone();

        let mut machine = RevealMachine::new();
        machine.select_player(&players, &impostor_id).unwrap();
        machine.begin_hold().unwrap();
        machine.advance_hold(Duration::from_millis(700)).unwrap();

        let card = machine
            .role_card(&players, true, "Lugares", Some("Lugares con agua"))
            .unwrap();
        assert_eq!(card.word.as_deref(), Some("Piscina"));
        assert!(card.hint.is_none());
    }

    #[test]
    fn test_hint_falls_back_to_category_name() {
        let players = roster();
        let impostor_id = players.iter().find(|p| p.is_impostor).unwrap().id.clone();

        let mut machine = RevealMachine::new();
        machine.select_player(&players, &impostor_id).unwrap();
        machine.begin_hold().unwrap();
        machine.advance_hold(Duration::from_millis(700)).unwrap();

        let card = machine.role_card(&players, true, "Animales", None).unwrap();
        assert_eq!(card.hint.as_deref(), Some("Animales"));
    }

    #[test]
    fn test_confirm_requires_unlock() {
        let mut players = roster();
        let mut machine = RevealMachine::new();
        machine.select_player(&players, &players[0].id.clone()).unwrap();
        assert!(machine.confirm_viewed(&mut players).is_err());

        machine.begin_hold().unwrap();
        machine.advance_hold(Duration::from_millis(300)).unwrap();
        assert!(machine.confirm_viewed(&mut players).is_err());
    }

    #[test]
    fn test_confirm_marks_viewed_and_reports_completion() {
        let mut players = roster();
        let ids: Vec<String> = players.iter().map(|p| p.id.clone()).collect();
        let mut machine = RevealMachine::new();

        for (i, id) in ids.iter().enumerate() {
            machine.select_player(&players, id).unwrap();
            machine.begin_hold().unwrap();
            machine.advance_hold(Duration::from_millis(700)).unwrap();
            let done = machine.confirm_viewed(&mut players).unwrap();
            assert_eq!(done, i == ids.len() - 1);
        }

        assert!(players.iter().all(|p| p.has_viewed_role));
    }

    #[test]
    fn test_selecting_viewed_player_is_noop() {
        let mut players = roster();
        let id = players[0].id.clone();
        let mut machine = RevealMachine::new();

        machine.select_player(&players, &id).unwrap();
        machine.begin_hold().unwrap();
        machine.advance_hold(Duration::from_millis(700)).unwrap();
        machine.confirm_viewed(&mut players).unwrap();

        machine.select_player(&players, &id).unwrap();
        assert!(machine.active_player().is_none());
    }

    #[test]
    fn test_cannot_switch_player_mid_reveal() {
        let players = roster();
        let mut machine = RevealMachine::new();
        machine.select_player(&players, &players[0].id).unwrap();
        machine.begin_hold().unwrap();
        machine.advance_hold(Duration::from_millis(200)).unwrap();

        assert!(machine.select_player(&players, &players[1].id).is_err());

        // After releasing, switching is fine again.
        machine.release_hold().unwrap();
        assert!(machine.select_player(&players, &players[1].id).is_ok());
    }

    #[test]
    fn test_unknown_player_and_missing_selection_errors() {
        let players = roster();
        let mut machine = RevealMachine::new();

        assert!(machine.select_player(&players, "nope").is_err());
        assert!(machine.begin_hold().is_err());
        assert!(machine.advance_hold(Duration::from_millis(100)).is_err());
        assert!(machine.release_hold().is_err());
    }
}
