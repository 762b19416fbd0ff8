pub(crate) mod accents;
pub(crate) mod edges;
pub(crate) mod layout;
pub(crate) mod motion;
mod nodes;
pub(crate) mod pulses;

pub use accents::{accent_plugin, particle_plugin};
pub use edges::{edge_plugin, EdgeSettings};
pub use layout::{fibonacci_sphere, nearby_edges, SphereLayout};
pub use motion::motion_plugin;
pub use nodes::{setup_scene, NodeDot, NodeMaterial, PulsingLight, SphereGroup, WireShell};
pub use pulses::pulse_plugin;
