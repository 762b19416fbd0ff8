//! Sphere group entity, node components, camera and lights.

use bevy::prelude::*;

use crate::config;
use crate::scene::SphereLayout;

/// Parent entity owning the node cloud and its pulses. Rotation is applied
/// here once and inherited by every child through the transform hierarchy.
#[derive(Component)]
pub struct SphereGroup;

/// Marker + index for node dot entities.
#[derive(Component)]
pub struct NodeDot {
    pub index: usize,
}

/// Marker for the outer wireframe icosphere shell. A sibling of the group,
/// not a child: it drifts at its own rate around the same axis.
#[derive(Component)]
pub struct WireShell;

/// Shared material handle for all node dots, retinted by the color cycle.
#[derive(Resource)]
pub struct NodeMaterial(pub Handle<StandardMaterial>);

/// Point light with a sinusoidal intensity pulse.
#[derive(Component)]
pub struct PulsingLight {
    pub base: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
}

const CAMERA_DISTANCE: f32 = 140.0;

pub fn setup_scene(mut commands: Commands) {
    let tuning = config::scene_tuning();
    let layout = SphereLayout::generate(&tuning);
    eprintln!(
        "synapse: layout ready ({} nodes, {} edges)",
        layout.nodes.len(),
        layout.edges.len()
    );

    commands.insert_resource(layout);
    commands.insert_resource(tuning);

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
    });
    commands.spawn((
        PointLight {
            color: Color::srgb(0.133, 0.765, 1.0),
            intensity: 3.5e6,
            range: 300.0,
            ..default()
        },
        PulsingLight {
            base: 3.5e6,
            amplitude: 1.0e6,
            frequency: 1.2,
            phase: 0.0,
        },
        Transform::from_xyz(60.0, 80.0, 60.0),
    ));
    commands.spawn((
        PointLight {
            color: Color::srgb(0.427, 0.49, 1.0),
            intensity: 2.5e6,
            range: 300.0,
            ..default()
        },
        PulsingLight {
            base: 2.5e6,
            amplitude: 0.8e6,
            frequency: 0.9,
            phase: 1.0,
        },
        Transform::from_xyz(-80.0, -40.0, 40.0),
    ));

    commands.spawn((SphereGroup, Transform::default(), Visibility::default()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneTuning;

    #[test]
    fn setup_scene_inserts_resources_and_entities() {
        let mut app = App::new();
        app.add_systems(Startup, setup_scene);

        app.update();

        assert!(app.world().get_resource::<SphereLayout>().is_some());
        assert!(app.world().get_resource::<SceneTuning>().is_some());

        let world = app.world_mut();
        let camera_count = world.query::<&Camera3d>().iter(world).count();
        let light_count = world.query::<&PulsingLight>().iter(world).count();
        let group_count = world.query::<&SphereGroup>().iter(world).count();

        assert_eq!(camera_count, 1);
        assert_eq!(light_count, 2);
        assert_eq!(group_count, 1);
    }
}
