//! Edge lines between nearby nodes, drawn with gizmos in group space.

use bevy::prelude::*;

use crate::scene::{SphereGroup, SphereLayout};

const EDGE_COLOR: Color = Color::srgb(0.427, 0.49, 1.0);
const BASE_ALPHA: f32 = 0.18;
const ALPHA_SWING: f32 = 0.07;
const ALPHA_RATE: f32 = 0.8;

/// Controls edge visibility and the alpha swing. Visibility is toggled with
/// `E`; reduced-motion builds turn the swing off and hold the base alpha.
#[derive(Resource)]
pub struct EdgeSettings {
    pub enabled: bool,
    pub breathing: bool,
}

impl Default for EdgeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            breathing: true,
        }
    }
}

pub fn edge_plugin(app: &mut App) {
    app.init_resource::<EdgeSettings>()
        .add_systems(Update, (toggle_edges_system, draw_edges_system));
}

fn toggle_edges_system(keys: Res<ButtonInput<KeyCode>>, mut settings: ResMut<EdgeSettings>) {
    if keys.just_pressed(KeyCode::KeyE) {
        settings.enabled = !settings.enabled;
    }
}

/// Draws every edge as a line between its endpoint nodes, transformed by the
/// group's global transform so the lines follow the sphere's rotation. The
/// alpha swings slowly around its base for a breathing effect unless the
/// settings hold it steady.
fn draw_edges_system(
    mut gizmos: Gizmos,
    settings: Res<EdgeSettings>,
    layout: Res<SphereLayout>,
    time: Res<Time>,
    group: Query<&GlobalTransform, With<SphereGroup>>,
) {
    if !settings.enabled {
        return;
    }
    let Ok(group) = group.get_single() else {
        return;
    };

    let color = EDGE_COLOR.with_alpha(edge_alpha(settings.breathing, time.elapsed_secs()));

    for &[a, b] in &layout.edges {
        gizmos.line(
            group.transform_point(layout.nodes[a]),
            group.transform_point(layout.nodes[b]),
            color,
        );
    }
}

/// Alpha for the current frame. With breathing off the lines hold steady at
/// the base alpha.
fn edge_alpha(breathing: bool, elapsed: f32) -> f32 {
    if breathing {
        BASE_ALPHA + ALPHA_SWING * (elapsed * ALPHA_RATE).sin()
    } else {
        BASE_ALPHA
    }
}
