//! Session lifecycle: setup, pass-and-reveal, discussion, rematch.
//!
//! A round moves strictly forward: a validated `RoundSetup` starts a
//! `Session` in the reveal phase, the reveal machine walks every player
//! through their card, and once everyone has viewed, discussion opens.
//! Rematches produce a fresh `RoundSetup` carrying the settings over.

pub mod reveal;
pub mod roles;

use crate::content::ContentSelector;
use crate::types::{
    Category, GameMode, PhaseKind, Player, PlayerId, SessionId, WordPack, CATEGORIES, MIN_PLAYERS,
};

use reveal::{RevealMachine, RoleCard};
use roles::Roster;

/// Mission prompts shown during discussion: questions about the secret
/// word that everyone must answer, so impostors are forced to improvise.
pub const MISSIONS: &[&str] = &[
    "¿De qué material está hecho?",
    "¿Cuánto cuesta aproximadamente?",
    "¿Dónde se puede comprar?",
    "¿Es útil para sobrevivir?",
    "¿Lo usaría un niño?",
    "¿Cabe en una mochila?",
    "Describe su color sin decir el nombre.",
    "¿A qué huele?",
    "¿Es peligroso?",
    "¿Lo tienes en tu casa?",
];

/// Mutable pre-round configuration. Every mutation re-clamps the impostor
/// count so the stored request is always valid for the current roster.
#[derive(Debug, Clone)]
pub struct RoundSetup {
    pub names: Vec<String>,
    pub category: &'static Category,
    pub mode: GameMode,
    pub impostor_count: usize,
    pub impostor_hint_enabled: bool,
}

impl Default for RoundSetup {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            category: &CATEGORIES[0],
            mode: GameMode::Classic,
            impostor_count: 1,
            impostor_hint_enabled: false,
        }
    }
}

impl RoundSetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_player(&mut self, name: &str) -> Result<(), String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Player name cannot be empty".to_string());
        }
        if self.names.iter().any(|n| n == name) {
            return Err(format!("Player {name} already in the roster"));
        }
        self.names.push(name.to_string());
        self.clamp();
        Ok(())
    }

    pub fn remove_player(&mut self, name: &str) -> Result<(), String> {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        if self.names.len() == before {
            return Err(format!("No player named {name}"));
        }
        self.clamp();
        Ok(())
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.clamp();
    }

    pub fn set_category(&mut self, category: &'static Category) {
        self.category = category;
    }

    pub fn set_impostor_count(&mut self, count: usize) {
        self.impostor_count = count;
        self.clamp();
    }

    pub fn set_impostor_hint(&mut self, enabled: bool) {
        self.impostor_hint_enabled = enabled;
    }

    pub fn max_impostors(&self) -> usize {
        roles::max_impostors(self.names.len())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.names.len() < MIN_PLAYERS {
            return Err(format!(
                "Need at least {MIN_PLAYERS} players, have {}",
                self.names.len()
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for name in &self.names {
            if name.trim().is_empty() {
                return Err("Player name cannot be empty".to_string());
            }
            if !seen.insert(name.as_str()) {
                return Err(format!("Player {name} appears twice"));
            }
        }
        Ok(())
    }

    /// Keep the stored count inside what the roster and mode allow. An
    /// out-of-range request snaps back to one rather than the nearest
    /// bound; chaos pins the count to all-but-one.
    fn clamp(&mut self) {
        let n = self.names.len();
        if self.mode == GameMode::Chaos {
            self.impostor_count = n.saturating_sub(1).max(1);
            return;
        }
        let max = roles::max_impostors(n);
        if self.impostor_count < 1 || self.impostor_count > max {
            self.impostor_count = 1;
        }
    }
}

enum Phase {
    Reveal(RevealMachine),
    Discuss,
}

/// One running round from first reveal through discussion.
pub struct Session {
    pub id: SessionId,
    players: Vec<Player>,
    phase: Phase,
    word_pack: WordPack,
    pub mode: GameMode,
    pub category: &'static Category,
    starting_player_id: PlayerId,
    impostor_hint_enabled: bool,
    requested_impostors: usize,
    mission: Option<&'static str>,
}

/// Roster entry safe to show before roles are revealed.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlayerListEntry {
    pub id: PlayerId,
    pub name: String,
    pub has_viewed_role: bool,
}

impl Session {
    /// Deal a round from a validated setup and the acquired word pack.
    /// The effective impostor count is recomputed here; a stale request
    /// never leaks through.
    pub fn start(setup: &RoundSetup, word_pack: WordPack) -> Result<Session, String> {
        setup.validate()?;

        let Roster {
            players,
            starting_player_id,
        } = roles::assign_roles(&setup.names, setup.mode, setup.impostor_count, &word_pack);

        let id = ulid::Ulid::new().to_string();
        tracing::info!(
            session_id = id,
            players = players.len(),
            mode = ?setup.mode,
            category = setup.category.id,
            "round started"
        );

        Ok(Session {
            id,
            players,
            phase: Phase::Reveal(RevealMachine::new()),
            word_pack,
            mode: setup.mode,
            category: setup.category,
            starting_player_id,
            impostor_hint_enabled: setup.impostor_hint_enabled,
            requested_impostors: setup.impostor_count,
            mission: None,
        })
    }

    /// Acquire content and start in one call.
    pub async fn start_with_selector(
        setup: &RoundSetup,
        selector: &mut ContentSelector,
    ) -> Result<Session, String> {
        setup.validate()?;
        let pack = selector.word_pack(setup.category, setup.mode).await;
        Self::start(setup, pack)
    }

    pub fn phase_kind(&self) -> PhaseKind {
        match self.phase {
            Phase::Reveal(_) => PhaseKind::Reveal,
            Phase::Discuss => PhaseKind::Discuss,
        }
    }

    /// Roster view with no role information.
    pub fn player_list(&self) -> Vec<PlayerListEntry> {
        self.players
            .iter()
            .map(|p| PlayerListEntry {
                id: p.id.clone(),
                name: p.name.clone(),
                has_viewed_role: p.has_viewed_role,
            })
            .collect()
    }

    fn reveal_machine(&mut self) -> Result<&mut RevealMachine, String> {
        match &mut self.phase {
            Phase::Reveal(machine) => Ok(machine),
            Phase::Discuss => Err("Reveal phase is over".to_string()),
        }
    }

    pub fn select_player(&mut self, id: &str) -> Result<(), String> {
        match &mut self.phase {
            Phase::Reveal(machine) => machine.select_player(&self.players, id),
            Phase::Discuss => Err("Reveal phase is over".to_string()),
        }
    }

    pub fn begin_hold(&mut self) -> Result<(), String> {
        self.reveal_machine()?.begin_hold()
    }

    pub fn advance_hold(&mut self, elapsed: std::time::Duration) -> Result<bool, String> {
        self.reveal_machine()?.advance_hold(elapsed)
    }

    pub fn release_hold(&mut self) -> Result<(), String> {
        self.reveal_machine()?.release_hold()
    }

    /// The unlocked card for the active player, or None while locked.
    pub fn role_card(&self) -> Option<RoleCard> {
        match &self.phase {
            Phase::Reveal(machine) => machine.role_card(
                &self.players,
                self.impostor_hint_enabled,
                self.category.name,
                self.word_pack.related_hint.as_deref(),
            ),
            Phase::Discuss => None,
        }
    }

    /// Confirm the active player's card. When the last player confirms,
    /// the session moves to discussion on its own.
    pub fn confirm_viewed(&mut self) -> Result<bool, String> {
        let all_viewed = match &mut self.phase {
            Phase::Reveal(machine) => machine.confirm_viewed(&mut self.players)?,
            Phase::Discuss => return Err("Reveal phase is over".to_string()),
        };

        if all_viewed {
            self.enter_discussion();
        }
        Ok(all_viewed)
    }

    /// Explicit reveal -> discuss transition; only legal once every player
    /// has viewed their role.
    pub fn begin_discussion(&mut self) -> Result<(), String> {
        match self.phase {
            Phase::Discuss => return Err("Discussion already started".to_string()),
            Phase::Reveal(_) => {}
        }
        if !self.players.iter().all(|p| p.has_viewed_role) {
            return Err("Not all players have viewed their role".to_string());
        }
        self.enter_discussion();
        Ok(())
    }

    fn enter_discussion(&mut self) {
        use rand::seq::IndexedRandom;
        self.phase = Phase::Discuss;
        self.mission = MISSIONS.choose(&mut rand::rng()).copied();
        tracing::info!(session_id = self.id, "discussion started");
    }

    pub fn starting_player(&self) -> Option<PlayerListEntry> {
        self.players
            .iter()
            .find(|p| p.id == self.starting_player_id)
            .map(|p| PlayerListEntry {
                id: p.id.clone(),
                name: p.name.clone(),
                has_viewed_role: p.has_viewed_role,
            })
    }

    fn require_discussion(&self) -> Result<(), String> {
        match self.phase {
            Phase::Discuss => Ok(()),
            Phase::Reveal(_) => Err("Discussion has not started".to_string()),
        }
    }

    /// The round's answer key, only once the round is in open discussion.
    pub fn impostors(&self) -> Result<Vec<&Player>, String> {
        self.require_discussion()?;
        Ok(self.players.iter().filter(|p| p.is_impostor).collect())
    }

    pub fn secret_word(&self) -> Result<&str, String> {
        self.require_discussion()?;
        Ok(&self.word_pack.secret_word)
    }

    pub fn discussion_prompt(&self) -> Result<Option<&'static str>, String> {
        self.require_discussion()?;
        Ok(self.mission)
    }

    /// Reroll the mission prompt, avoiding an immediate repeat.
    pub fn next_discussion_prompt(&mut self) -> Result<Option<&'static str>, String> {
        use rand::seq::IndexedRandom;
        self.require_discussion()?;

        let current = self.mission;
        let candidates: Vec<&'static str> = MISSIONS
            .iter()
            .copied()
            .filter(|m| Some(*m) != current)
            .collect();
        self.mission = candidates.choose(&mut rand::rng()).copied().or(current);
        Ok(self.mission)
    }

    /// Prepare a rematch. Settings always carry over; the roster does only
    /// when asked for.
    pub fn new_round(&self, keep_players: bool) -> Result<RoundSetup, String> {
        self.require_discussion()?;

        let mut setup = RoundSetup {
            names: if keep_players {
                self.players.iter().map(|p| p.name.clone()).collect()
            } else {
                Vec::new()
            },
            category: self.category,
            mode: self.mode,
            impostor_count: self.requested_impostors,
            impostor_hint_enabled: self.impostor_hint_enabled,
        };
        setup.clamp();
        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn setup_with(names: &[&str]) -> RoundSetup {
        let mut setup = RoundSetup::new();
        for name in names {
            setup.add_player(name).unwrap();
        }
        setup
    }

    fn reveal_all(session: &mut Session) {
        let ids: Vec<String> = session.player_list().iter().map(|p| p.id.clone()).collect();
        for id in ids {
            session.select_player(&id).unwrap();
            session.begin_hold().unwrap();
            session.advance_hold(Duration::from_millis(700)).unwrap();
            session.confirm_viewed().unwrap();
        }
    }

    #[test]
    fn test_setup_rejects_bad_names() {
        let mut setup = RoundSetup::new();
        assert!(setup.add_player("   ").is_err());
        setup.add_player("Ana").unwrap();
        assert!(setup.add_player("Ana").is_err());
        assert!(setup.add_player("  Ana  ").is_err());
        assert!(setup.remove_player("Luis").is_err());
    }

    #[test]
    fn test_setup_requires_three_players() {
        let setup = setup_with(&["Ana", "Luis"]);
        assert!(setup.validate().is_err());
        assert!(Session::start(&setup, WordPack::plain("Espejo")).is_err());

        let setup = setup_with(&["Ana", "Luis", "Marta"]);
        assert!(setup.validate().is_ok());
    }

    #[test]
    fn test_impostor_count_reclamps_on_roster_change() {
        let mut setup = setup_with(&["Ana", "Luis", "Marta", "Pedro", "Sofía"]);
        setup.set_impostor_count(2);
        assert_eq!(setup.impostor_count, 2);

        // Dropping to 4 players makes 2 invalid; it snaps back to 1.
        setup.remove_player("Sofía").unwrap();
        assert_eq!(setup.impostor_count, 1);

        setup.set_impostor_count(99);
        assert_eq!(setup.impostor_count, 1);
    }

    #[test]
    fn test_chaos_pins_impostor_count() {
        let mut setup = setup_with(&["Ana", "Luis", "Marta", "Pedro"]);
        setup.set_mode(GameMode::Chaos);
        assert_eq!(setup.impostor_count, 3);

        setup.add_player("Sofía").unwrap();
        assert_eq!(setup.impostor_count, 4);
    }

    #[test]
    fn test_full_round_reaches_discussion() {
        let setup = setup_with(&["Ana", "Luis", "Marta", "Pedro"]);
        let mut session = Session::start(&setup, WordPack::plain("Guitarra")).unwrap();
        assert_eq!(session.phase_kind(), PhaseKind::Reveal);

        reveal_all(&mut session);
        assert_eq!(session.phase_kind(), PhaseKind::Discuss);

        assert_eq!(session.secret_word().unwrap(), "Guitarra");
        assert_eq!(session.impostors().unwrap().len(), 1);
        assert!(session.discussion_prompt().unwrap().is_some());
        assert!(session.starting_player().is_some());
    }

    #[test]
    fn test_answer_key_gated_until_discussion() {
        let setup = setup_with(&["Ana", "Luis", "Marta"]);
        let mut session = Session::start(&setup, WordPack::plain("Dron")).unwrap();

        assert!(session.impostors().is_err());
        assert!(session.secret_word().is_err());
        assert!(session.discussion_prompt().is_err());
        assert!(session.new_round(true).is_err());
        assert!(session.begin_discussion().is_err());

        reveal_all(&mut session);
        assert!(session.impostors().is_ok());
    }

    #[test]
    fn test_player_list_hides_roles() {
        let setup = setup_with(&["Ana", "Luis", "Marta"]);
        let session = Session::start(&setup, WordPack::plain("Dron")).unwrap();

        for entry in session.player_list() {
            assert!(!entry.has_viewed_role);
            assert!(!entry.name.is_empty());
        }
    }

    #[test]
    fn test_reveal_operations_rejected_in_discussion() {
        let setup = setup_with(&["Ana", "Luis", "Marta"]);
        let mut session = Session::start(&setup, WordPack::plain("Dron")).unwrap();
        reveal_all(&mut session);

        let id = session.player_list()[0].id.clone();
        assert!(session.select_player(&id).is_err());
        assert!(session.begin_hold().is_err());
        assert!(session.confirm_viewed().is_err());
        assert!(session.role_card().is_none());
        assert!(session.begin_discussion().is_err());
    }

    #[test]
    fn test_mission_interrogates_the_secret_word() {
        // Missions probe the word itself, not generic debate topics.
        assert!(MISSIONS.contains(&"¿De qué material está hecho?"));
        assert!(MISSIONS.contains(&"¿Lo tienes en tu casa?"));

        let setup = setup_with(&["Ana", "Luis", "Marta"]);
        let mut session = Session::start(&setup, WordPack::plain("Dron")).unwrap();
        reveal_all(&mut session);

        let mission = session.discussion_prompt().unwrap().unwrap();
        assert!(MISSIONS.contains(&mission));
    }

    #[test]
    fn test_next_prompt_avoids_immediate_repeat() {
        let setup = setup_with(&["Ana", "Luis", "Marta"]);
        let mut session = Session::start(&setup, WordPack::plain("Dron")).unwrap();
        reveal_all(&mut session);

        for _ in 0..20 {
            let before = session.discussion_prompt().unwrap();
            let after = session.next_discussion_prompt().unwrap();
            assert_ne!(before, after);
        }
    }

    #[test]
    fn test_new_round_carries_settings() {
        let mut setup = setup_with(&["Ana", "Luis", "Marta", "Pedro", "Sofía"]);
        setup.set_mode(GameMode::Spy);
        setup.set_impostor_count(2);
        setup.set_impostor_hint(true);

        let mut session = Session::start(
            &setup,
            WordPack {
                secret_word: "Playa".to_string(),
                fake_word: Some("Piscina".to_string()),
                related_hint: None,
            },
        )
        .unwrap();
        reveal_all(&mut session);

        let rematch = session.new_round(true).unwrap();
        assert_eq!(rematch.names.len(), 5);
        assert_eq!(rematch.mode, GameMode::Spy);
        assert_eq!(rematch.impostor_count, 2);
        assert!(rematch.impostor_hint_enabled);

        let fresh = session.new_round(false).unwrap();
        assert!(fresh.names.is_empty());
        assert_eq!(fresh.mode, GameMode::Spy);
    }

    #[test]
    fn test_spy_session_role_cards() {
        let mut setup = setup_with(&["Ana", "Luis", "Marta"]);
        setup.set_mode(GameMode::Spy);

        let mut session = Session::start(
            &setup,
            WordPack {
                secret_word: "Playa".to_string(),
                fake_word: Some("Piscina".to_string()),
                related_hint: None,
            },
        )
        .unwrap();

        let ids: Vec<String> = session.player_list().iter().map(|p| p.id.clone()).collect();
        for id in &ids {
            session.select_player(id).unwrap();
            session.begin_hold().unwrap();
            session.advance_hold(Duration::from_millis(700)).unwrap();

            let card = session.role_card().unwrap();
            if card.is_impostor {
                assert_eq!(card.word.as_deref(), Some("Piscina"));
            } else {
                assert_eq!(card.word.as_deref(), Some("Playa"));
            }

            session.confirm_viewed().unwrap();
        }
    }
}
