//! SDK entry points and builder for composing the hero scene app.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::chat::{init_chat_channel, ChatConfig};
use crate::config;
use crate::render::{spawn_scene_visuals, MeshDotsRenderer, RendererResource, SphereRenderer};
use crate::scene::{
    accent_plugin, edge_plugin, motion_plugin, particle_plugin, pulse_plugin, setup_scene,
    EdgeSettings,
};
use crate::ui::{chat_plugin, hud_plugin, hud_tick_system, HudState};

/// Builder for constructing a Synapse app with customizable plugins.
pub struct HeroSceneBuilder {
    chat: Option<ChatConfig>,
    renderer: Option<Box<dyn SphereRenderer>>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_hud: bool,
    enable_chat: bool,
    enable_pulses: bool,
    enable_accents: bool,
    enable_edges: bool,
    enable_particles: bool,
    reduced_motion: bool,
}

impl Default for HeroSceneBuilder {
    fn default() -> Self {
        Self {
            chat: None,
            renderer: None,
            window_title: "Synapse".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.02, 0.03, 0.06),
            enable_hud: true,
            enable_chat: true,
            enable_pulses: true,
            enable_accents: true,
            enable_edges: true,
            enable_particles: true,
            reduced_motion: false,
        }
    }
}

impl HeroSceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit chat endpoint configuration.
    pub fn chat(mut self, config: ChatConfig) -> Self {
        self.chat = Some(config);
        self
    }

    /// Load the chat endpoint from environment variables.
    pub fn chat_config(mut self) -> Self {
        self.chat = Some(config::chat_config());
        self
    }

    /// Provide a custom sphere renderer implementation.
    pub fn renderer(mut self, renderer: impl SphereRenderer) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    pub fn disable_chat(mut self) -> Self {
        self.enable_chat = false;
        self
    }

    pub fn disable_pulses(mut self) -> Self {
        self.enable_pulses = false;
        self
    }

    pub fn disable_accents(mut self) -> Self {
        self.enable_accents = false;
        self
    }

    pub fn disable_edges(mut self) -> Self {
        self.enable_edges = false;
        self
    }

    pub fn disable_particles(mut self) -> Self {
        self.enable_particles = false;
        self
    }

    /// Force a static scene regardless of the `REDUCED_MOTION` env var.
    pub fn reduced_motion(mut self) -> Self {
        self.reduced_motion = true;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(MeshDotsRenderer::default()));
        let reduced = self.reduced_motion || config::reduced_motion();

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color))
        .add_systems(Startup, setup_scene)
        .add_systems(Update, spawn_scene_visuals);

        renderer.setup(&mut app);
        app.insert_resource(RendererResource(renderer));

        if self.enable_edges {
            app.add_plugins(edge_plugin);
            if reduced {
                app.world_mut().resource_mut::<EdgeSettings>().breathing = false;
            }
        }
        if self.enable_pulses && !reduced {
            app.add_plugins(pulse_plugin);
        }
        if self.enable_accents {
            app.add_plugins(accent_plugin);
        }
        if self.enable_particles {
            app.add_plugins(particle_plugin);
        }
        if !reduced {
            app.add_plugins(motion_plugin);
        }

        if self.enable_hud || self.enable_chat {
            app.add_plugins(EguiPlugin);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
            if reduced {
                app.world_mut().resource_mut::<HudState>().complete_instantly();
            } else {
                app.add_systems(Update, hud_tick_system);
            }
        }
        if self.enable_chat {
            let channel = init_chat_channel(self.chat.unwrap_or_else(config::chat_config));
            app.insert_resource(channel);
            app.add_plugins(chat_plugin);
        }

        app
    }
}
