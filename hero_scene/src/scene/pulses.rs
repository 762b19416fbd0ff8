//! Data pulses traveling along edges: a fixed pool, recycled on completion.

use bevy::prelude::*;
use rand::Rng;

use crate::config::SceneTuning;
use crate::scene::{SphereGroup, SphereLayout};

/// Per-second progress speed range. The original effect advanced progress
/// by 0.008–0.02 per frame at 60 fps; here speeds are time-based.
pub const PULSE_SPEED_MIN: f32 = 0.48;
pub const PULSE_SPEED_MAX: f32 = 1.2;

const PULSE_RADIUS: f32 = 1.4;

/// A marker traveling along one edge. `progress` stays within [0, 1]; on
/// reaching 1 the pulse is recycled onto a random edge at progress 0.
#[derive(Component, Clone, Debug)]
pub struct Pulse {
    pub edge: usize,
    pub progress: f32,
    pub speed: f32,
}

impl Pulse {
    /// Samples a fresh pulse on a uniformly random edge.
    pub fn spawn(edge_count: usize, rng: &mut impl Rng) -> Self {
        Self {
            edge: rng.gen_range(0..edge_count),
            progress: 0.0,
            speed: rng.gen_range(PULSE_SPEED_MIN..PULSE_SPEED_MAX),
        }
    }

    /// Advances progress by `speed * dt`. Returns true when the pulse
    /// completed its edge and was recycled onto a new one.
    pub fn advance(&mut self, dt: f32, edge_count: usize, rng: &mut impl Rng) -> bool {
        self.progress += self.speed * dt;
        if self.progress >= 1.0 {
            *self = Self::spawn(edge_count, rng);
            return true;
        }
        false
    }
}

pub fn pulse_plugin(app: &mut App) {
    app.add_systems(Update, (spawn_pulse_pool, advance_pulses_system).chain());
}

/// Spawns the pool under the sphere group once the layout exists. Children
/// of the group inherit its rotation, so pulse positions stay in group-local
/// edge space.
fn spawn_pulse_pool(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Option<Res<SphereLayout>>,
    tuning: Option<Res<SceneTuning>>,
    group: Query<Entity, With<SphereGroup>>,
    existing: Query<(), With<Pulse>>,
) {
    if !existing.is_empty() {
        return;
    }
    let (Some(layout), Some(tuning)) = (layout, tuning) else {
        return;
    };
    let Ok(group) = group.get_single() else {
        return;
    };
    if layout.edges.is_empty() {
        eprintln!("synapse: no edges below threshold, pulse pool disabled");
        return;
    }

    let mesh = meshes.add(Sphere::new(PULSE_RADIUS));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 4.0,
        unlit: true,
        ..default()
    });

    let mut rng = rand::thread_rng();
    commands.entity(group).with_children(|parent| {
        for _ in 0..tuning.pulse_count {
            let pulse = Pulse::spawn(layout.edges.len(), &mut rng);
            let position = layout.point_on_edge(pulse.edge, pulse.progress);
            parent.spawn((
                pulse,
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(position),
            ));
        }
    });
}

fn advance_pulses_system(
    time: Res<Time>,
    layout: Option<Res<SphereLayout>>,
    mut pulses: Query<(&mut Pulse, &mut Transform)>,
) {
    let Some(layout) = layout else {
        return;
    };
    if layout.edges.is_empty() {
        return;
    }

    let dt = time.delta_secs();
    let mut rng = rand::thread_rng();
    for (mut pulse, mut transform) in &mut pulses {
        pulse.advance(dt, layout.edges.len(), &mut rng);
        transform.translation = layout.point_on_edge(pulse.edge, pulse.progress);
    }
}
