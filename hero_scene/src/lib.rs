//! Neural-sphere hero scene — 3D visualization of a golden-angle node cloud
//! with distance-thresholded edges, traveling data pulses, accent geometry,
//! and a chat overlay proxying messages to an HTTP endpoint.
//!
//! Library root: chat, config, and render modules.

pub mod chat;
pub mod config;
pub mod render;
mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use chat::{init_chat_channel, ChatChannel, ChatClient, ChatConfig, ChatTransport};
pub use scene::{fibonacci_sphere, nearby_edges, SphereLayout};
