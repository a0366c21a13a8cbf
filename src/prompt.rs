//! Sample prompt convenience ("surprise me")

use rand::seq::SliceRandom;

/// Built-in prompts offered when the user has nothing in mind
pub const SAMPLE_PROMPTS: &[&str] = &[
    "A whimsical bookstore in a giant, hollowed-out tree, lit by glowing mushrooms, detailed digital painting.",
    "A retro-futuristic cityscape at sunset with flying cars and neon signs, synthwave aesthetic.",
    "A majestic phoenix rising from ashes, surrounded by swirling embers and smoke, cinematic fantasy art.",
    "A close-up portrait of a robot with intricate gears and glowing blue eyes, hyperrealistic.",
    "An underwater coral reef teeming with bioluminescent creatures, otherworldly and vibrant.",
    "A serene Japanese garden in spring with cherry blossoms and a tranquil koi pond, watercolor style.",
];

/// Pick a random sample prompt
pub fn surprise() -> &'static str {
    SAMPLE_PROMPTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SAMPLE_PROMPTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surprise_returns_known_prompt() {
        for _ in 0..20 {
            let prompt = surprise();
            assert!(SAMPLE_PROMPTS.contains(&prompt));
            assert!(!prompt.trim().is_empty());
        }
    }
}
