use serde::{Deserialize, Serialize};

/// Opaque ID types for type safety
pub type PlayerId = String;
pub type SessionId = String;

/// Minimum roster size for a playable round.
pub const MIN_PLAYERS: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Impostors know they are impostors; everyone else shares the word.
    Classic,
    /// Impostors receive a related but different word.
    Spy,
    /// All but one player are impostors.
    Chaos,
}

/// Intensity levels for the never-have-I-ever content kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NeverMode {
    Soft,
    Party,
    Spicy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseKind {
    /// The pre-round form. A `Session` never reports this kind (it only
    /// exists once dealt); the host shell uses it as the serialized
    /// marker for its `RoundSetup` screen.
    Setup,
    Reveal,
    Discuss,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_impostor: bool,
    /// Monotonic: set once by the reveal flow, never reverts.
    pub has_viewed_role: bool,
    /// None for classic/chaos impostors; the UI renders the impostor card instead.
    pub word: Option<String>,
}

/// Static content category descriptor. The prompt seed is the phrase handed
/// to the text provider when asking for a word in this category.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub prompt_seed: &'static str,
}

impl Category {
    pub fn by_id(id: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.id == id)
    }
}

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "general",
        name: "General",
        prompt_seed: "objetos cotidianos, conceptos generales o lugares comunes",
    },
    Category {
        id: "famous",
        name: "Famosos",
        prompt_seed: "famosos mundialmente conocidos (actores, cantantes, influencers, políticos)",
    },
    Category {
        id: "movies",
        name: "Cine y Series",
        prompt_seed: "películas, series de TV o personajes de ficción populares",
    },
    Category {
        id: "tv",
        name: "TV y Shows",
        prompt_seed: "programas de televisión, reality shows, dibujos animados o concursos",
    },
    Category {
        id: "sports",
        name: "Deportes",
        prompt_seed: "deportes, deportistas famosos (fútbol, baloncesto, tenis, etc.) o equipos",
    },
    Category {
        id: "food",
        name: "Comida",
        prompt_seed: "comidas, platos típicos, frutas o ingredientes",
    },
    Category {
        id: "places",
        name: "Lugares",
        prompt_seed: "países, ciudades turísticas o monumentos famosos",
    },
    Category {
        id: "animals",
        name: "Animales",
        prompt_seed: "animales conocidos",
    },
    Category {
        id: "music",
        name: "Música",
        prompt_seed: "instrumentos musicales, géneros, bandas o cantantes famosos",
    },
    Category {
        id: "history",
        name: "Historia",
        prompt_seed: "personajes históricos, eventos históricos o imperios antiguos",
    },
];

/// One round's worth of acquired content. Read-only after acquisition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordPack {
    pub secret_word: String,
    /// The impostor word in spy mode.
    pub fake_word: Option<String>,
    /// Sub-category clue disclosed to impostors when hints are enabled.
    pub related_hint: Option<String>,
}

impl WordPack {
    pub fn plain(secret_word: impl Into<String>) -> Self {
        Self {
            secret_word: secret_word.into(),
            fake_word: None,
            related_hint: None,
        }
    }

    /// Dedup key: pairs are recorded by their raw joined form so the
    /// identical pair cannot recur within a history cycle.
    pub fn history_key(&self) -> String {
        match &self.fake_word {
            Some(fake) => format!("{}|{}", self.secret_word, fake),
            None => self.secret_word.clone(),
        }
    }
}
