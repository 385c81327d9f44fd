use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use impostor::content::ContentSelector;
use impostor::llm::LlmConfig;
use impostor::session::{RoundSetup, Session};
use impostor::types::{Category, GameMode, NeverMode};

/// Scripted round: builds a roster, deals roles, walks every player through
/// the reveal, then prints the discussion state and a sample of every other
/// content kind. Exercises the whole engine against whatever provider the
/// environment configures.
#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "impostor=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Impostor demo round...");

    let llm_config = LlmConfig::from_env();
    let provider = match llm_config.build_provider() {
        Ok(provider) => {
            tracing::info!(provider = provider.name(), "LLM provider initialized");
            Some(provider)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to initialize an LLM provider: {}. Using fallback pools.",
                e
            );
            None
        }
    };

    let mut selector =
        ContentSelector::new(provider).with_request_timeout(llm_config.default_timeout);

    let mut setup = RoundSetup::new();
    for name in ["Ana", "Luis", "Marta", "Pedro"] {
        setup.add_player(name).unwrap();
    }
    setup.set_mode(GameMode::Classic);
    setup.set_category(Category::by_id("general").unwrap());
    setup.set_impostor_hint(true);

    let mut session = Session::start_with_selector(&setup, &mut selector)
        .await
        .unwrap();

    // Pass-and-reveal: each player holds long enough to unlock their card.
    let ids: Vec<String> = session.player_list().iter().map(|p| p.id.clone()).collect();
    for id in &ids {
        session.select_player(id).unwrap();
        session.begin_hold().unwrap();
        session.advance_hold(Duration::from_millis(700)).unwrap();

        let card = session.role_card().unwrap();
        tracing::info!(
            player = card.player_name,
            impostor = card.is_impostor,
            word = card.word.as_deref().unwrap_or("-"),
            hint = card.hint.as_deref().unwrap_or("-"),
            "role card viewed"
        );

        session.confirm_viewed().unwrap();
    }

    let starter = session.starting_player().unwrap();
    tracing::info!(starter = starter.name, "discussion begins");
    tracing::info!(word = session.secret_word().unwrap(), "secret word");
    for impostor in session.impostors().unwrap() {
        tracing::info!(name = impostor.name, "impostor was");
    }
    if let Some(mission) = session.discussion_prompt().unwrap() {
        tracing::info!(mission, "mission question");
    }

    // One of each of the side-game content kinds.
    let phrase = selector.never_have_i_ever(NeverMode::Party).await;
    tracing::info!(phrase, "never have I ever");
    let question = selector.most_likely().await;
    tracing::info!(question, "most likely");
    let category = selector.bomb_category().await;
    tracing::info!(category, "word bomb");
    let topic = selector.confession().await;
    tracing::info!(topic, "confession");
    let category = selector.three_in_five().await;
    tracing::info!(category, "three in five");
    let (a, b) = selector.would_you_rather().await;
    tracing::info!(option_a = a, option_b = b, "would you rather");

    // Rematch with the same roster to show settings carry over.
    let rematch = session.new_round(true).unwrap();
    tracing::info!(
        players = rematch.names.len(),
        mode = ?rematch.mode,
        "ready for a rematch"
    );
}
