//! Role assignment for one round: who is an impostor, what each player's
//! card says, and who opens the discussion.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::types::{GameMode, Player, PlayerId, WordPack};

/// What spy-mode impostors see when no fake word was acquired.
pub const SPY_WORD_PLACEHOLDER: &str = "???";

/// Impostors must stay a strict minority, but one is always allowed.
pub fn max_impostors(player_count: usize) -> usize {
    if player_count == 0 {
        return 1;
    }
    ((player_count - 1) / 2).max(1)
}

/// The count a round actually uses, regardless of what was requested.
/// Chaos overrides everything: all but one player.
pub fn effective_impostor_count(player_count: usize, mode: GameMode, requested: usize) -> usize {
    if mode == GameMode::Chaos {
        return player_count.saturating_sub(1).max(1);
    }
    requested.clamp(1, max_impostors(player_count))
}

/// The dealt state of a round: every player with their role and word, plus
/// the randomly drawn starting player.
#[derive(Debug, Clone)]
pub struct Roster {
    pub players: Vec<Player>,
    pub starting_player_id: PlayerId,
}

/// Deal roles for a round. Impostor selection is a uniform draw over the
/// roster; the starting player is an independent draw and may or may not
/// be an impostor.
pub fn assign_roles(
    names: &[String],
    mode: GameMode,
    requested_impostors: usize,
    pack: &WordPack,
) -> Roster {
    let mut rng = rand::rng();
    let count = names.len();
    let impostor_count = effective_impostor_count(count, mode, requested_impostors);

    let mut indices: Vec<usize> = (0..count).collect();
    indices.shuffle(&mut rng);
    let impostor_indices: HashSet<usize> = indices.into_iter().take(impostor_count).collect();

    let players: Vec<Player> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let is_impostor = impostor_indices.contains(&i);
            let word = if !is_impostor {
                Some(pack.secret_word.clone())
            } else if mode == GameMode::Spy {
                Some(
                    pack.fake_word
                        .clone()
                        .unwrap_or_else(|| SPY_WORD_PLACEHOLDER.to_string()),
                )
            } else {
                None
            };

            Player {
                id: ulid::Ulid::new().to_string(),
                name: name.clone(),
                is_impostor,
                has_viewed_role: false,
                word,
            }
        })
        .collect();

    let starting_index = rng.random_range(0..players.len());
    let starting_player_id = players[starting_index].id.clone();

    Roster {
        players,
        starting_player_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Jugador {}", i + 1)).collect()
    }

    #[test]
    fn test_max_impostors_keeps_minority() {
        assert_eq!(max_impostors(3), 1);
        assert_eq!(max_impostors(4), 1);
        assert_eq!(max_impostors(5), 2);
        assert_eq!(max_impostors(6), 2);
        assert_eq!(max_impostors(7), 3);
        assert_eq!(max_impostors(9), 4);
    }

    #[test]
    fn test_effective_count_clamps_request() {
        assert_eq!(effective_impostor_count(4, GameMode::Classic, 0), 1);
        assert_eq!(effective_impostor_count(4, GameMode::Classic, 3), 1);
        assert_eq!(effective_impostor_count(5, GameMode::Classic, 2), 2);
        assert_eq!(effective_impostor_count(5, GameMode::Classic, 99), 2);
    }

    #[test]
    fn test_chaos_overrides_request() {
        assert_eq!(effective_impostor_count(5, GameMode::Chaos, 1), 4);
        assert_eq!(effective_impostor_count(3, GameMode::Chaos, 99), 2);
    }

    #[test]
    fn test_classic_round_with_four_players() {
        let pack = WordPack::plain("Guitarra");
        let roster = assign_roles(&names(4), GameMode::Classic, 1, &pack);

        assert_eq!(roster.players.len(), 4);
        let impostors: Vec<_> = roster.players.iter().filter(|p| p.is_impostor).collect();
        assert_eq!(impostors.len(), 1);
        assert!(impostors[0].word.is_none());

        for player in roster.players.iter().filter(|p| !p.is_impostor) {
            assert_eq!(player.word.as_deref(), Some("Guitarra"));
        }

        assert!(roster
            .players
            .iter()
            .any(|p| p.id == roster.starting_player_id));
    }

    #[test]
    fn test_spy_round_impostors_get_fake_word() {
        let pack = WordPack {
            secret_word: "Playa".to_string(),
            fake_word: Some("Piscina".to_string()),
            related_hint: None,
        };
        let roster = assign_roles(&names(5), GameMode::Spy, 2, &pack);

        let impostors: Vec<_> = roster.players.iter().filter(|p| p.is_impostor).collect();
        assert_eq!(impostors.len(), 2);
        for impostor in &impostors {
            assert_eq!(impostor.word.as_deref(), Some("Piscina"));
        }
        for player in roster.players.iter().filter(|p| !p.is_impostor) {
            assert_eq!(player.word.as_deref(), Some("Playa"));
        }
    }

    #[test]
    fn test_spy_round_without_fake_word_uses_placeholder() {
        let pack = WordPack::plain("Playa");
        let roster = assign_roles(&names(4), GameMode::Spy, 1, &pack);

        let impostor = roster.players.iter().find(|p| p.is_impostor).unwrap();
        assert_eq!(impostor.word.as_deref(), Some(SPY_WORD_PLACEHOLDER));
    }

    #[test]
    fn test_chaos_round_all_but_one() {
        let pack = WordPack::plain("Kebab");
        let roster = assign_roles(&names(6), GameMode::Chaos, 1, &pack);

        let impostors = roster.players.iter().filter(|p| p.is_impostor).count();
        assert_eq!(impostors, 5);
    }

    #[test]
    fn test_player_ids_are_unique_across_rounds() {
        let pack = WordPack::plain("Espejo");
        let first = assign_roles(&names(4), GameMode::Classic, 1, &pack);
        let second = assign_roles(&names(4), GameMode::Classic, 1, &pack);

        let mut ids = HashSet::new();
        for player in first.players.iter().chain(second.players.iter()) {
            assert!(ids.insert(player.id.clone()), "duplicate player id");
        }
    }

    #[test]
    fn test_impostor_selection_is_roughly_uniform() {
        let pack = WordPack::plain("Brújula");
        let roster_names = names(4);
        let iterations = 6000;

        let mut hits = vec![0usize; 4];
        for _ in 0..iterations {
            let roster = assign_roles(&roster_names, GameMode::Classic, 1, &pack);
            let idx = roster.players.iter().position(|p| p.is_impostor).unwrap();
            hits[idx] += 1;
        }

        // Expect ~1500 each; allow generous slack.
        for count in hits {
            assert!(
                (1000..=2000).contains(&count),
                "impostor distribution skewed: {count}"
            );
        }
    }

    #[test]
    fn test_impostor_pairs_are_roughly_uniform() {
        let pack = WordPack::plain("Brújula");
        let roster_names = names(5);
        let iterations = 10_000;

        // C(5,2) = 10 possible impostor pairs, ~1000 hits each.
        let mut hits = std::collections::HashMap::new();
        for _ in 0..iterations {
            let roster = assign_roles(&roster_names, GameMode::Classic, 2, &pack);
            let mut pair: Vec<usize> = roster
                .players
                .iter()
                .enumerate()
                .filter(|(_, p)| p.is_impostor)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(pair.len(), 2);
            pair.sort_unstable();
            *hits.entry((pair[0], pair[1])).or_insert(0usize) += 1;
        }

        assert_eq!(hits.len(), 10, "some pair never selected");
        for (pair, count) in hits {
            assert!(
                (700..=1300).contains(&count),
                "pair {pair:?} distribution skewed: {count}"
            );
        }
    }
}
