//! Minimal prelude for SDK consumers.

pub use crate::chat::{ChatChannel, ChatClient, ChatConfig, ChatTransport};
pub use crate::config::{chat_config, scene_tuning, SceneTuning};
pub use crate::render::{MeshDotsRenderer, SphereRenderer};
pub use crate::scene::{fibonacci_sphere, nearby_edges, SphereLayout};
pub use crate::sdk::HeroSceneBuilder;
