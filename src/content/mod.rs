//! Content selection: one place that decides what a round is played with.
//!
//! Every acquisition follows the same shape: build a seeded Spanish prompt,
//! issue at most one provider request, validate the reply against the
//! session history, and fall back to the curated pools when the provider is
//! missing, slow, malformed, or repeats itself. Callers always get usable
//! content; provider trouble is logged and absorbed here.

mod history;
mod pools;

use std::time::Duration;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::llm::{GenerateRequest, LlmProvider};
use crate::types::{Category, GameMode, NeverMode, WordPack};

pub use history::History;

/// The distinct kinds of content the selector can produce. Each kind keeps
/// its own dedup history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Word,
    NeverHaveIEver,
    MostLikely,
    Bomb,
    Confession,
    ThreeInFive,
    WouldYouRather,
}

pub struct ContentSelector {
    provider: Option<Box<dyn LlmProvider>>,
    history: History,
    timeout: Duration,
}

impl ContentSelector {
    /// A selector without a provider is fully functional and deals from the
    /// pools only.
    pub fn new(provider: Option<Box<dyn LlmProvider>>) -> Self {
        Self {
            provider,
            history: History::new(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Issue a single provider request. Every failure mode collapses to
    /// None: the caller falls back to the pools and the round goes on.
    async fn request(
        &self,
        prompt: String,
        temperature: f32,
        max_tokens: Option<u32>,
    ) -> Option<String> {
        let provider = self.provider.as_deref()?;

        let request = GenerateRequest {
            prompt,
            temperature,
            max_tokens,
            timeout: self.timeout,
        };

        match provider.generate(request).await {
            Ok(response) => {
                let text = response.text.trim().to_string();
                if text.is_empty() {
                    tracing::warn!(
                        provider = response.metadata.provider,
                        "provider returned empty text, using fallback"
                    );
                    None
                } else {
                    tracing::debug!(
                        provider = response.metadata.provider,
                        latency_ms = response.metadata.latency_ms,
                        "generated content"
                    );
                    Some(text)
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "provider request failed, using fallback");
                None
            }
        }
    }

    /// Acquire the word content for one round. Spy mode needs a related
    /// pair; every other mode needs a single word, with a sub-category
    /// hint for the general category.
    pub async fn word_pack(&mut self, category: &Category, mode: GameMode) -> WordPack {
        let seed = seed();
        let prompt = match mode {
            GameMode::Spy => format!(
                "Genera 2 palabras muy relacionadas pero claramente distintas para el juego \"El Espía\".\n\
                 Categoría: {}.\n\
                 Formato de respuesta: \"PalabraComun|PalabraEspia\".\n\
                 Ejemplo: \"Playa|Piscina\" o \"Guitarra|Violin\".\n\
                 Semilla: {}.\n\
                 Solo las palabras, separadas por barra vertical.",
                category.prompt_seed, seed
            ),
            _ => format!(
                "Genera una palabra específica y divertida para el juego \"Impostor\".\n\
                 Categoría: {}.\n\
                 Semilla: {}.\n\
                 Si la categoría es \"General\", devuelve también una subcategoría entre paréntesis. \
                 Ej: \"Microondas (Electrodoméstico)\".\n\
                 Respuesta corta.",
                category.prompt_seed, seed
            ),
        };

        let pack = match self.request(prompt, 1.5, None).await {
            Some(text) => {
                let parsed = match mode {
                    GameMode::Spy => parse_word_pair(&text),
                    _ => Some(parse_word_with_hint(&text)),
                };
                match parsed {
                    Some(pack) if !self.history.contains(ContentKind::Word, &pack.history_key()) => {
                        Some(pack)
                    }
                    Some(_) => {
                        tracing::debug!("provider repeated a word this session, using fallback");
                        None
                    }
                    None => {
                        tracing::warn!(text, "malformed spy pair, using fallback");
                        None
                    }
                }
            }
            None => None,
        };

        let pack = pack.unwrap_or_else(|| self.fallback_pack(category, mode));
        self.history.record(ContentKind::Word, &pack.history_key());
        pack
    }

    fn fallback_pack(&mut self, category: &Category, mode: GameMode) -> WordPack {
        if mode == GameMode::Spy {
            let joined: Vec<String> = pools::pairs(category.id)
                .iter()
                .map(|(a, b)| format!("{a}|{b}"))
                .collect();
            let refs: Vec<&str> = joined.iter().map(String::as_str).collect();
            let picked = self.pick_unique_uncommitted(ContentKind::Word, &refs);
            return match picked.split_once('|') {
                Some((secret, fake)) => WordPack {
                    secret_word: secret.to_string(),
                    fake_word: Some(fake.to_string()),
                    related_hint: None,
                },
                None => WordPack::plain(picked),
            };
        }

        if category.id == "general" {
            let joined: Vec<&str> = pools::GENERAL_STRUCTURED.iter().map(|(w, _)| *w).collect();
            let word = self.pick_unique_uncommitted(ContentKind::Word, &joined);
            let hint = pools::GENERAL_STRUCTURED
                .iter()
                .find(|(w, _)| *w == word)
                .map(|(_, h)| h.to_string());
            return WordPack {
                secret_word: word,
                fake_word: None,
                related_hint: hint,
            };
        }

        let word = self.pick_unique_uncommitted(ContentKind::Word, pools::words(category.id));
        WordPack::plain(word)
    }

    pub async fn never_have_i_ever(&mut self, mode: NeverMode) -> String {
        let mode_label = match mode {
            NeverMode::Soft => "soft",
            NeverMode::Party => "party",
            NeverMode::Spicy => "spicy",
        };
        let prompt = format!(
            "Genera una frase de \"Yo nunca\" para jugar con amigos.\n\
             Modo: {} (soft = inocente, party = fiesta/alcohol, spicy = atrevido/picante).\n\
             Semilla: {}.\n\
             La frase debe empezar por \"Yo nunca...\".\n\
             Respuesta corta.",
            mode_label,
            seed()
        );

        let pool = pools::never_phrases(mode);
        self.acquire(ContentKind::NeverHaveIEver, prompt, 1.6, Some(30), pool)
            .await
    }

    pub async fn most_likely(&mut self) -> String {
        let prompt = format!(
            "Genera una pregunta divertida de \"¿Quién es más probable que...?\" \
             para un grupo de amigos.\n\
             Semilla: {}.\n\
             Respuesta corta.",
            seed()
        );
        self.acquire(ContentKind::MostLikely, prompt, 1.7, Some(30), pools::MOST_LIKELY)
            .await
    }

    pub async fn bomb_category(&mut self) -> String {
        let prompt = format!(
            "Genera una categoría para un juego de palabras rápidas (tipo \"Word Bomb\" o \
             \"Patata Caliente\").\n\
             Ejemplos: \"Marcas de coches\", \"Cosas que encuentras en el baño\", \"Frutas rojas\".\n\
             Semilla: {}.\n\
             Respuesta muy corta (2-5 palabras).",
            seed()
        );
        self.acquire(ContentKind::Bomb, prompt, 1.6, Some(15), pools::BOMB_CATEGORIES)
            .await
    }

    pub async fn confession(&mut self) -> String {
        let prompt = format!(
            "Genera un tema para \"Confesiones Anónimas\" en grupo. Ej: \"Mi mayor miedo\". \
             Semilla: {}. Respuesta corta.",
            seed()
        );
        self.acquire(
            ContentKind::Confession,
            prompt,
            1.7,
            Some(20),
            pools::CONFESSION_PROMPTS,
        )
        .await
    }

    pub async fn three_in_five(&mut self) -> String {
        let prompt = format!(
            "Genera una categoría simple para el juego \"Di 3 cosas en 5 segundos\". \
             Ej: \"3 cosas verdes\". Semilla: {}. Respuesta corta.",
            seed()
        );
        self.acquire(
            ContentKind::ThreeInFive,
            prompt,
            1.7,
            Some(20),
            pools::THREE_IN_FIVE,
        )
        .await
    }

    /// Returns the two options of a would-you-rather dilemma.
    pub async fn would_you_rather(&mut self) -> (String, String) {
        let prompt = format!(
            "Genera un dilema \"Qué preferirías\" difícil. Formato: \"Opción A|Opción B\". \
             Semilla: {}.",
            seed()
        );

        if let Some(text) = self.request(prompt, 1.8, Some(40)).await {
            if let Some((a, b)) = text.split_once('|') {
                let (a, b) = (a.trim(), b.trim());
                if !a.is_empty()
                    && !b.is_empty()
                    && !self.history.contains(ContentKind::WouldYouRather, &text)
                {
                    self.history.record(ContentKind::WouldYouRather, &text);
                    return (a.to_string(), b.to_string());
                }
            }
            tracing::warn!(text, "unusable dilemma, using fallback");
        }

        let scenario = self.pick_unique(ContentKind::WouldYouRather, pools::WOULD_YOU_RATHER);
        match scenario.split_once(" o ") {
            Some((a, b)) => (
                a.trim_start_matches('¿').trim().to_string(),
                b.trim_end_matches('?').trim().to_string(),
            ),
            None => ("Ser invisible".to_string(), "Poder volar".to_string()),
        }
    }

    /// Shared path for the single-string content kinds: one provider
    /// attempt, duplicate rejection, pool fallback, history record.
    async fn acquire(
        &mut self,
        kind: ContentKind,
        prompt: String,
        temperature: f32,
        max_tokens: Option<u32>,
        pool: &[&str],
    ) -> String {
        if let Some(text) = self.request(prompt, temperature, max_tokens).await {
            if !self.history.contains(kind, &text) {
                self.history.record(kind, &text);
                return text;
            }
            tracing::debug!(?kind, "provider repeated itself this session, using fallback");
        }
        self.pick_unique(kind, pool)
    }

    fn pick_unique(&mut self, kind: ContentKind, pool: &[&str]) -> String {
        let item = self.pick_unique_uncommitted(kind, pool);
        self.history.record(kind, &item);
        item
    }

    /// Pick an unseen pool item without recording it. When the whole pool
    /// has been seen, the history cycles: the seen-set resets, and the
    /// immediately preceding item is excluded so no item repeats
    /// back-to-back (unless the pool has only one entry).
    fn pick_unique_uncommitted(&mut self, kind: ContentKind, pool: &[&str]) -> String {
        let mut rng = rand::rng();

        let available: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|item| !self.history.contains(kind, item))
            .collect();

        if let Some(item) = available.choose(&mut rng) {
            return item.to_string();
        }

        // Exhausted: start a fresh cycle.
        self.history.clear(kind);
        let fresh: Vec<&str> = if pool.len() > 1 {
            let last = self.history.last(kind).map(str::to_string);
            pool.iter()
                .copied()
                .filter(|item| last.as_deref() != Some(*item))
                .collect()
        } else {
            pool.to_vec()
        };

        fresh
            .choose(&mut rng)
            .or_else(|| pool.first())
            .map(|s| s.to_string())
            .unwrap_or_default()
    }
}

fn seed() -> u32 {
    rand::rng().random_range(0..100_000)
}

/// "Palabra (Subcategoría)" -> word plus hint; anything else is a bare word.
fn parse_word_with_hint(text: &str) -> WordPack {
    if let Some(stripped) = text.strip_suffix(')') {
        if let Some((word, hint)) = stripped.rsplit_once('(') {
            let (word, hint) = (word.trim(), hint.trim());
            if !word.is_empty() && !hint.is_empty() {
                return WordPack {
                    secret_word: word.to_string(),
                    fake_word: None,
                    related_hint: Some(hint.to_string()),
                };
            }
        }
    }
    WordPack::plain(text.trim())
}

/// "PalabraComun|PalabraEspia" -> pair; None when the delimiter or either
/// side is missing.
fn parse_word_pair(text: &str) -> Option<WordPack> {
    let (secret, fake) = text.split_once('|')?;
    let (secret, fake) = (secret.trim(), fake.trim());
    if secret.is_empty() || fake.is_empty() {
        return None;
    }
    Some(WordPack {
        secret_word: secret.to_string(),
        fake_word: Some(fake.to_string()),
        related_hint: None,
    })
}
