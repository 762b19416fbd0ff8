//! Synapse — neural sphere hero scene. Runs the hero_scene app.

use bevy::prelude::*;
use hero_scene::prelude::*;

fn main() {
    let _ = dotenvy::dotenv();

    HeroSceneBuilder::new()
        .window_title("Synapse")
        .clear_color(Color::srgb(0.02, 0.03, 0.06))
        .build()
        .run();
}
