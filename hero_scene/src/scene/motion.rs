//! Per-frame motion: group rotation with mouse parallax, node color cycle,
//! light pulse, and accent drift. All of it is skipped in reduced-motion
//! mode, leaving the static scene in place.

use bevy::color::Mix;
use bevy::prelude::*;

use crate::scene::accents::{DriftDot, FloatingRing, TorusKnot, FIELD_HALF_HEIGHT};
use crate::scene::{NodeMaterial, PulsingLight, SphereGroup, WireShell};

/// Pointer offset normalized to [-1, 1] per axis, plus the smoothed target
/// the rotation systems chase. Written by the pointer listener, read by the
/// next frame.
#[derive(Resource, Default, Clone, Debug)]
pub struct ParallaxState {
    pub mouse: Vec2,
    pub target: Vec2,
}

const GROUP_SPIN_RATE: f32 = 0.06;
const SHELL_SPIN_RATE: f32 = 0.04;
const PARALLAX_GAIN: Vec2 = Vec2::new(0.25, 0.15);
// Original smoothing moved 3% of the gap per 60 fps frame.
const PARALLAX_SMOOTHING: f32 = 1.8;

const COLOR_A: Color = Color::srgb(0.133, 0.765, 1.0);
const COLOR_B: Color = Color::srgb(0.655, 0.545, 0.98);
const COLOR_C: Color = Color::srgb(0.22, 0.741, 0.973);

pub fn motion_plugin(app: &mut App) {
    app.init_resource::<ParallaxState>().add_systems(
        Update,
        (
            pointer_parallax_system,
            rotate_group_system,
            color_cycle_system,
            pulse_lights_system,
            spin_knot_system,
            bob_ring_system,
            drift_particles_system,
        ),
    );
}

fn pointer_parallax_system(
    mut moves: EventReader<CursorMoved>,
    windows: Query<&Window>,
    mut parallax: ResMut<ParallaxState>,
) {
    let Some(event) = moves.read().last() else {
        return;
    };
    let Ok(window) = windows.get_single() else {
        return;
    };
    parallax.mouse = Vec2::new(
        (event.position.x / window.width() - 0.5) * 2.0,
        (event.position.y / window.height() - 0.5) * 2.0,
    );
}

/// Eases the parallax target toward the pointer and applies the combined
/// spin + parallax rotation to the sphere group and the wire shell.
#[allow(clippy::type_complexity)]
fn rotate_group_system(
    time: Res<Time>,
    mut parallax: ResMut<ParallaxState>,
    mut group: Query<&mut Transform, (With<SphereGroup>, Without<WireShell>)>,
    mut shells: Query<&mut Transform, (With<WireShell>, Without<SphereGroup>)>,
) {
    let t = time.elapsed_secs();
    let blend = 1.0 - (-PARALLAX_SMOOTHING * time.delta_secs()).exp();
    let goal = parallax.mouse * PARALLAX_GAIN;
    let delta = (goal - parallax.target) * blend;
    parallax.target += delta;

    let yaw_offset = parallax.target.x;
    let pitch = parallax.target.y;

    for mut transform in &mut group {
        transform.rotation =
            Quat::from_euler(EulerRot::YXZ, t * GROUP_SPIN_RATE + yaw_offset, pitch, 0.0);
    }
    for mut transform in &mut shells {
        transform.rotation =
            Quat::from_euler(EulerRot::YXZ, t * SHELL_SPIN_RATE + yaw_offset, pitch, 0.0);
    }
}

/// Slowly shifts the shared node material between the three palette colors.
fn color_cycle_system(
    time: Res<Time>,
    node_material: Option<Res<NodeMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(node_material) = node_material else {
        return;
    };
    let Some(material) = materials.get_mut(&node_material.0) else {
        return;
    };

    let t = time.elapsed_secs();
    let ab = ((t * 0.3).sin() + 1.0) * 0.5;
    let color = COLOR_A.mix(&COLOR_B, ab).mix(&COLOR_C, (t * 0.5).sin().abs());
    material.base_color = color;
    material.emissive = color.to_linear() * 0.6;
}

fn pulse_lights_system(time: Res<Time>, mut lights: Query<(&PulsingLight, &mut PointLight)>) {
    let t = time.elapsed_secs();
    for (pulse, mut light) in &mut lights {
        light.intensity = pulse.base + pulse.amplitude * (t * pulse.frequency + pulse.phase).sin();
    }
}

fn spin_knot_system(time: Res<Time>, mut knots: Query<&mut Transform, With<TorusKnot>>) {
    let dt = time.delta_secs();
    for mut transform in &mut knots {
        transform.rotate_x(0.24 * dt);
        transform.rotate_y(0.42 * dt);
    }
}

fn bob_ring_system(time: Res<Time>, mut rings: Query<(&FloatingRing, &mut Transform)>) {
    let t = time.elapsed_secs();
    let dt = time.delta_secs();
    for (ring, mut transform) in &mut rings {
        transform.translation.y = ring.base_y + (t * 0.5).sin() * 8.0;
        transform.rotate_local_y(0.18 * dt);
    }
}

/// Drifts backdrop dots upward with a slight sway, wrapping at the field
/// ceiling so the dot count stays constant.
fn drift_particles_system(time: Res<Time>, mut dots: Query<(&DriftDot, &mut Transform)>) {
    let t = time.elapsed_secs();
    let dt = time.delta_secs();
    for (dot, mut transform) in &mut dots {
        transform.translation.y += dot.speed * dt;
        transform.translation.x += (t * 0.4 + dot.phase).sin() * 0.6 * dt;
        if transform.translation.y > FIELD_HALF_HEIGHT {
            transform.translation.y = -FIELD_HALF_HEIGHT;
        }
    }
}
