//! Command-line entry point for Prompt Tapestry

use prompt_tapestry::{
    client::HttpGenerationClient,
    config::Settings,
    orchestrator::Orchestrator,
    prompt,
    response::ImageSaver,
    session::{SessionState, SlotStatus},
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;

    // Assemble the prompt from arguments; --surprise picks a sample prompt
    let args: Vec<String> = std::env::args().skip(1).collect();
    let base_prompt = if args.iter().any(|a| a == "--surprise") {
        prompt::surprise().to_string()
    } else {
        args.join(" ")
    };

    let client = Arc::new(HttpGenerationClient::new(&settings.api)?);
    let orchestrator = Orchestrator::new(client);
    let session = SessionState::new();

    info!(prompt = %base_prompt, "Generating four variations");

    if let Err(e) = session.submit(&orchestrator, &base_prompt).await {
        if let Some(message) = session.error() {
            error!("{}", message);
        }
        return Err(e.into());
    }

    // Persist whatever settled successfully; failed slots are reported but
    // never block the others.
    let saver = ImageSaver::new(&settings.output.dir);
    let mut saved = 0usize;

    for (index, slot) in session.slots().iter().enumerate() {
        match slot.status {
            SlotStatus::Loaded => {
                if let Some(image) = &slot.image {
                    let payload = prompt_tapestry::ImagePayload::from_base64(
                        image
                            .split(',')
                            .last()
                            .unwrap_or_default()
                            .to_string(),
                    );
                    let path = saver.save(&payload, &base_prompt, index).await?;
                    info!(slot = index, path = ?path, "Saved image");
                    saved += 1;
                }
            }
            SlotStatus::Error => {
                warn!(
                    slot = index,
                    error = slot.error.as_deref().unwrap_or("unknown"),
                    "Slot did not produce an image"
                );
            }
            SlotStatus::Loading => {}
        }
    }

    info!(saved, total = session.slots().len(), "Submission complete");

    Ok(())
}
