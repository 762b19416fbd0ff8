//! Accent geometry: metallic torus knot, floating ring, and a background
//! particle field. Accents sit outside the sphere group and move on their
//! own rates.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use rand::Rng;

/// Marker for the spinning torus knot.
#[derive(Component)]
pub struct TorusKnot;

/// Floating ring bobbing around its base height.
#[derive(Component)]
pub struct FloatingRing {
    pub base_y: f32,
}

/// Background dot drifting upward, wrapping at the field ceiling.
#[derive(Component)]
pub struct DriftDot {
    pub speed: f32,
    pub phase: f32,
}

const KNOT_RADIUS: f32 = 7.0;
const KNOT_TUBE: f32 = 1.8;
const RING_RADIUS: f32 = 28.0;
const RING_TUBE: f32 = 0.5;

const FIELD_DOTS: usize = 48;
pub(crate) const FIELD_HALF_WIDTH: f32 = 160.0;
pub(crate) const FIELD_HALF_HEIGHT: f32 = 90.0;

pub fn accent_plugin(app: &mut App) {
    app.add_systems(Startup, spawn_accents);
}

pub fn particle_plugin(app: &mut App) {
    app.add_systems(Startup, spawn_particle_field);
}

fn spawn_accents(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let knot_mesh = meshes.add(torus_knot_mesh(KNOT_RADIUS, KNOT_TUBE, 2, 3, 120, 16));
    let knot_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.427, 0.49, 1.0),
        metallic: 0.8,
        perceptual_roughness: 0.15,
        emissive: LinearRgba::rgb(0.133, 0.2, 0.667) * 0.4,
        ..default()
    });
    commands.spawn((
        TorusKnot,
        Mesh3d(knot_mesh),
        MeshMaterial3d(knot_material),
        Transform::from_xyz(90.0, -25.0, -10.0),
    ));

    let ring_mesh = meshes.add(Torus::new(RING_RADIUS - RING_TUBE, RING_RADIUS + RING_TUBE));
    let ring_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.133, 0.765, 1.0, 0.18),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });
    commands.spawn((
        FloatingRing { base_y: 20.0 },
        Mesh3d(ring_mesh),
        MeshMaterial3d(ring_material),
        Transform::from_xyz(-70.0, 20.0, -30.0)
            .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_3)),
    ));
}

/// Small drifting dots spread through the backdrop volume, each with its own
/// size, speed, and sway phase.
fn spawn_particle_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(0.6));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.6, 0.8, 1.0, 0.25),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let mut rng = rand::thread_rng();
    for _ in 0..FIELD_DOTS {
        let position = Vec3::new(
            rng.gen_range(-FIELD_HALF_WIDTH..FIELD_HALF_WIDTH),
            rng.gen_range(-FIELD_HALF_HEIGHT..FIELD_HALF_HEIGHT),
            rng.gen_range(-120.0..-40.0),
        );
        commands.spawn((
            DriftDot {
                speed: rng.gen_range(2.0..6.0),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
            },
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position)
                .with_scale(Vec3::splat(rng.gen_range(0.5..1.5))),
        ));
    }
}

/// Builds a p-q torus knot tube mesh. The centerline follows the classic
/// torus knot curve; a circular cross-section is swept along it using a
/// Frenet-style frame.
pub fn torus_knot_mesh(
    radius: f32,
    tube: f32,
    p: u32,
    q: u32,
    tubular_segments: u32,
    radial_segments: u32,
) -> Mesh {
    let vertex_count = ((tubular_segments + 1) * (radial_segments + 1)) as usize;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(vertex_count);

    let curve = |u: f32| -> Vec3 {
        let qu = q as f32 / p as f32 * u;
        let swing = 2.0 + qu.cos();
        Vec3::new(
            radius * 0.5 * swing * u.cos(),
            radius * 0.5 * swing * u.sin(),
            radius * 0.5 * qu.sin(),
        )
    };

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p as f32 * std::f32::consts::TAU;
        let center = curve(u);
        let ahead = curve(u + 0.01);

        let tangent = ahead - center;
        let mut normal = ahead + center;
        let binormal = tangent.cross(normal).normalize();
        normal = binormal.cross(tangent).normalize();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
            let offset = normal * (-tube * v.cos()) + binormal * (tube * v.sin());
            let position = center + offset;

            positions.push(position.to_array());
            normals.push(offset.normalize().to_array());
            uvs.push([
                i as f32 / tubular_segments as f32,
                j as f32 / radial_segments as f32,
            ]);
        }
    }

    let mut indices: Vec<u32> = Vec::with_capacity((tubular_segments * radial_segments * 6) as usize);
    let stride = radial_segments + 1;
    for i in 0..tubular_segments {
        for j in 0..radial_segments {
            let a = i * stride + j;
            let b = (i + 1) * stride + j;
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}
