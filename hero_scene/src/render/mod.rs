//! Renderer trait and the default mesh-dot renderer.

mod dots;

use bevy::prelude::*;

use crate::config::SceneTuning;
use crate::scene::{NodeDot, SphereGroup, SphereLayout};

pub use dots::MeshDotsRenderer;

/// Spawns the visual representation of the sphere layout. Node dots belong
/// under the group entity so they share its rotation; implementations may
/// register extra plugins in `setup`.
pub trait SphereRenderer: Send + Sync + 'static {
    fn setup(&self, _app: &mut App) {}
    fn spawn_sphere(
        &self,
        commands: &mut Commands,
        meshes: &mut ResMut<Assets<Mesh>>,
        materials: &mut ResMut<Assets<StandardMaterial>>,
        layout: &SphereLayout,
        tuning: &SceneTuning,
        group: Entity,
    );
}

#[derive(Resource)]
pub struct RendererResource(pub Box<dyn SphereRenderer>);

impl RendererResource {
    pub fn new(renderer: impl SphereRenderer) -> Self {
        Self(Box::new(renderer))
    }
}

/// Hands the layout to the active renderer once, after `setup_scene` has
/// inserted it. Runs every frame but exits immediately once dots exist.
#[allow(clippy::too_many_arguments)]
pub fn spawn_scene_visuals(
    mut commands: Commands,
    renderer: Res<RendererResource>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Option<Res<SphereLayout>>,
    tuning: Option<Res<SceneTuning>>,
    group: Query<Entity, With<SphereGroup>>,
    existing: Query<(), With<NodeDot>>,
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

    renderer.0.spawn_sphere(
        &mut commands,
        &mut meshes,
        &mut materials,
        &layout,
        &tuning,
        group,
    );
}
