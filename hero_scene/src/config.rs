//! Env parsing and scene tuning constants.

use bevy::prelude::Resource;
use url::Url;

use crate::chat::ChatConfig;

const CHAT_ENDPOINT_ENV: &str = "CHAT_ENDPOINT_URL";
const NODE_COUNT_ENV: &str = "HERO_NODE_COUNT";
const REDUCED_MOTION_ENV: &str = "REDUCED_MOTION";

const DEFAULT_CHAT_ENDPOINT: &str = "http://127.0.0.1:8000/chatbot/";

/// Nodes on the sphere surface.
pub const NODE_COUNT: usize = 220;
/// Radius of the node sphere.
pub const SPHERE_RADIUS: f32 = 55.0;
/// Maximum node distance that still produces an edge.
pub const EDGE_THRESHOLD: f32 = 24.0;
/// Size of the recycled pulse pool.
pub const PULSE_COUNT: usize = 14;

/// Returns the chat endpoint based on `CHAT_ENDPOINT_URL`.
/// An invalid URL in the env var is reported and the default is used.
pub fn chat_config() -> ChatConfig {
    if let Ok(raw) = std::env::var(CHAT_ENDPOINT_ENV) {
        match raw.parse::<Url>() {
            Ok(endpoint) => return ChatConfig { endpoint },
            Err(err) => {
                eprintln!("synapse: invalid URL in {CHAT_ENDPOINT_ENV}: {raw:?} ({err})");
            }
        }
    }
    let endpoint = DEFAULT_CHAT_ENDPOINT.parse().unwrap_or_else(|err| {
        panic!("synapse: invalid default chat endpoint: {err}");
    });
    ChatConfig { endpoint }
}

/// Geometry constants for the sphere layout and pulse pool.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SceneTuning {
    pub node_count: usize,
    pub sphere_radius: f32,
    pub edge_threshold: f32,
    pub pulse_count: usize,
}

impl Default for SceneTuning {
    fn default() -> Self {
        Self {
            node_count: NODE_COUNT,
            sphere_radius: SPHERE_RADIUS,
            edge_threshold: EDGE_THRESHOLD,
            pulse_count: PULSE_COUNT,
        }
    }
}

/// Returns the default tuning with any env overrides applied.
/// `HERO_NODE_COUNT` is clamped to at least two nodes.
pub fn scene_tuning() -> SceneTuning {
    let mut tuning = SceneTuning::default();
    if let Ok(raw) = std::env::var(NODE_COUNT_ENV) {
        match raw.parse::<usize>() {
            Ok(count) => tuning.node_count = count.max(2),
            Err(err) => {
                eprintln!("synapse: invalid {NODE_COUNT_ENV}: {raw:?} ({err})");
            }
        }
    }
    tuning
}

/// Whether `REDUCED_MOTION` requests a static scene (the native analogue of
/// the `prefers-reduced-motion` media query).
pub fn reduced_motion() -> bool {
    matches!(
        std::env::var(REDUCED_MOTION_ENV).as_deref(),
        Ok("1") | Ok("true")
    )
}
