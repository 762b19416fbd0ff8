//! Default renderer: one small emissive sphere per node, plus the outer
//! wireframe icosphere shell.

use bevy::pbr::wireframe::{Wireframe, WireframeColor, WireframePlugin};
use bevy::prelude::*;

use crate::config::SceneTuning;
use crate::render::SphereRenderer;
use crate::scene::{NodeDot, NodeMaterial, SphereLayout, WireShell};

const NODE_COLOR: Color = Color::srgb(0.133, 0.765, 1.0);

pub struct MeshDotsRenderer {
    pub dot_radius: f32,
    pub shell_scale: f32,
}

impl Default for MeshDotsRenderer {
    fn default() -> Self {
        Self {
            dot_radius: 0.7,
            shell_scale: 1.22,
        }
    }
}

impl SphereRenderer for MeshDotsRenderer {
    fn setup(&self, app: &mut App) {
        app.add_plugins(WireframePlugin);
    }

    fn spawn_sphere(
        &self,
        commands: &mut Commands,
        meshes: &mut ResMut<Assets<Mesh>>,
        materials: &mut ResMut<Assets<StandardMaterial>>,
        layout: &SphereLayout,
        tuning: &SceneTuning,
        group: Entity,
    ) {
        let dot_mesh = meshes.add(Sphere::new(self.dot_radius));
        let dot_material = materials.add(StandardMaterial {
            base_color: NODE_COLOR,
            emissive: NODE_COLOR.to_linear() * 0.6,
            ..default()
        });
        commands.insert_resource(NodeMaterial(dot_material.clone()));

        commands.entity(group).with_children(|parent| {
            for (index, position) in layout.nodes.iter().enumerate() {
                parent.spawn((
                    NodeDot { index },
                    Mesh3d(dot_mesh.clone()),
                    MeshMaterial3d(dot_material.clone()),
                    Transform::from_translation(*position),
                ));
            }
        });

        // The shell drifts at its own rate, so it lives beside the group
        // rather than under it.
        let shell_radius = tuning.sphere_radius * self.shell_scale;
        let shell_mesh = meshes.add(
            Sphere::new(shell_radius)
                .mesh()
                .ico(1)
                .unwrap_or_else(|err| panic!("synapse: icosphere mesh failed: {err}")),
        );
        let shell_material = materials.add(StandardMaterial {
            base_color: Color::srgba(0.133, 0.765, 1.0, 0.0),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });
        commands.spawn((
            WireShell,
            Mesh3d(shell_mesh),
            MeshMaterial3d(shell_material),
            Wireframe,
            WireframeColor {
                color: Color::srgba(0.133, 0.765, 1.0, 0.06),
            },
            Transform::default(),
        ));
    }
}
