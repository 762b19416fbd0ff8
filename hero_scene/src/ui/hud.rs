//! HUD overlay: typing headline, animated KPI counters, skill bars, FPS.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

const TYPE_INTERVAL: f32 = 0.075;
const DELETE_INTERVAL: f32 = 0.045;
const HOLD_COMPLETE: f32 = 2.2;
const HOLD_EMPTY: f32 = 0.4;
const INITIAL_DELAY: f32 = 0.8;

/// Cycling type-and-delete headline. `tick(dt)` drives the state machine;
/// `visible_text` is what the HUD renders.
#[derive(Clone, Debug)]
pub struct TypingHeadline {
    titles: Vec<String>,
    title_index: usize,
    chars: usize,
    deleting: bool,
    timer: f32,
}

impl TypingHeadline {
    pub fn new(titles: Vec<String>) -> Self {
        assert!(!titles.is_empty(), "headline needs at least one title");
        Self {
            titles,
            title_index: 0,
            chars: 0,
            deleting: false,
            timer: INITIAL_DELAY,
        }
    }

    fn current_title(&self) -> &str {
        &self.titles[self.title_index]
    }

    pub fn visible_text(&self) -> &str {
        let word = self.current_title();
        match word.char_indices().nth(self.chars) {
            Some((byte, _)) => &word[..byte],
            None => word,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.timer -= dt;
        while self.timer <= 0.0 {
            self.step();
        }
    }

    /// Jumps to the fully typed first title. Used in reduced-motion mode.
    pub fn complete_instantly(&mut self) {
        self.chars = self.current_title().chars().count();
        self.deleting = false;
        self.timer = f32::INFINITY;
    }

    fn step(&mut self) {
        let word_len = self.current_title().chars().count();
        if !self.deleting {
            self.chars += 1;
            if self.chars >= word_len {
                self.chars = word_len;
                self.deleting = true;
                self.timer += HOLD_COMPLETE;
            } else {
                self.timer += TYPE_INTERVAL;
            }
        } else {
            self.chars = self.chars.saturating_sub(1);
            if self.chars == 0 {
                self.deleting = false;
                self.title_index = (self.title_index + 1) % self.titles.len();
                self.timer += HOLD_EMPTY;
            } else {
                self.timer += DELETE_INTERVAL;
            }
        }
    }
}

const COUNTER_TICK: f32 = 0.04;
const COUNTER_STEPS: u32 = 30;

/// Animated count-up toward `target`, one step every 40 ms.
#[derive(Clone, Debug)]
pub struct KpiCounter {
    pub label: &'static str,
    pub target: u32,
    pub suffix: &'static str,
    current: u32,
    step: u32,
    timer: f32,
}

impl KpiCounter {
    pub fn new(label: &'static str, target: u32, suffix: &'static str) -> Self {
        Self {
            label,
            target,
            suffix,
            current: 0,
            step: target.div_ceil(COUNTER_STEPS).max(1),
            timer: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if self.is_done() {
            return;
        }
        self.timer += dt;
        while self.timer >= COUNTER_TICK && !self.is_done() {
            self.timer -= COUNTER_TICK;
            self.current = (self.current + self.step).min(self.target);
        }
    }

    pub fn complete_instantly(&mut self) {
        self.current = self.target;
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.current, self.suffix)
    }
}

const BAR_FILL_SECONDS: f32 = 1.2;

/// Skill bar whose fill grows linearly toward its level.
#[derive(Clone, Debug)]
pub struct SkillBar {
    pub label: &'static str,
    pub level: f32,
    fill: f32,
}

impl SkillBar {
    pub fn new(label: &'static str, level: f32) -> Self {
        Self {
            label,
            level: level.clamp(0.0, 1.0),
            fill: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.fill = (self.fill + dt / BAR_FILL_SECONDS).min(self.level);
    }

    pub fn complete_instantly(&mut self) {
        self.fill = self.level;
    }

    pub fn fill(&self) -> f32 {
        self.fill
    }
}

/// Live HUD state, animated by `hud_tick_system`.
#[derive(Resource)]
pub struct HudState {
    pub headline: TypingHeadline,
    pub counters: Vec<KpiCounter>,
    pub skills: Vec<SkillBar>,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            headline: TypingHeadline::new(vec![
                "AI Engineer & Full-Stack Developer".to_string(),
                "Machine Learning Practitioner".to_string(),
                "Backend Engineer".to_string(),
                "Automation Expert".to_string(),
            ]),
            counters: vec![
                KpiCounter::new("Projects", 24, "+"),
                KpiCounter::new("Years Experience", 5, "+"),
                KpiCounter::new("Certifications", 12, "+"),
                KpiCounter::new("Talks & Posts", 30, "+"),
            ],
            skills: vec![
                SkillBar::new("Python", 0.95),
                SkillBar::new("Machine Learning", 0.9),
                SkillBar::new("Rust", 0.8),
                SkillBar::new("Cloud & DevOps", 0.75),
            ],
        }
    }
}

impl HudState {
    /// Snaps every animation to its finished state (reduced-motion mode).
    pub fn complete_instantly(&mut self) {
        self.headline.complete_instantly();
        for counter in &mut self.counters {
            counter.complete_instantly();
        }
        for skill in &mut self.skills {
            skill.complete_instantly();
        }
    }
}

pub fn hud_plugin(app: &mut App) {
    app.add_plugins(FrameTimeDiagnosticsPlugin)
        .init_resource::<HudState>()
        .add_systems(Update, hud_overlay_system);
}

/// Advances the HUD animations. Registered separately so reduced-motion
/// builds can leave it out.
pub fn hud_tick_system(time: Res<Time>, mut hud: ResMut<HudState>) {
    let dt = time.delta_secs();
    hud.headline.tick(dt);
    for counter in &mut hud.counters {
        counter.tick(dt);
    }
    for skill in &mut hud.skills {
        skill.tick(dt);
    }
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    hud: Res<HudState>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    egui::Window::new("Hero HUD")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            ui.label(
                egui::RichText::new(format!("{}▌", hud.headline.visible_text()))
                    .size(16.0)
                    .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.add_space(6.0);

            for counter in &hud.counters {
                ui.label(format!("{:<17} {}", counter.label, counter.display()));
            }
            ui.add_space(6.0);

            for skill in &hud.skills {
                ui.label(skill.label);
                ui.add(
                    egui::ProgressBar::new(skill.fill())
                        .text(format!("{:.0}%", skill.fill() * 100.0))
                        .fill(egui::Color32::from_rgb(80, 180, 140)),
                );
            }
            ui.add_space(6.0);

            ui.separator();
            ui.label(format!("FPS  {fps:.0}"));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headline() -> TypingHeadline {
        TypingHeadline::new(vec!["ab".to_string(), "xyz".to_string()])
    }

    #[test]
    fn headline_waits_for_initial_delay() {
        let mut h = headline();
        assert_eq!(h.visible_text(), "");
        h.tick(INITIAL_DELAY - 0.01);
        assert_eq!(h.visible_text(), "");
    }

    #[test]
    fn headline_types_one_char_per_interval() {
        let mut h = headline();
        h.tick(INITIAL_DELAY + 0.001);
        assert_eq!(h.visible_text(), "a");
        h.tick(TYPE_INTERVAL);
        assert_eq!(h.visible_text(), "ab");
    }

    #[test]
    fn headline_deletes_then_moves_to_next_title() {
        let mut h = headline();
        // Type "ab" fully, hold, delete both chars, then the gap.
        h.tick(INITIAL_DELAY + TYPE_INTERVAL + 0.001);
        assert_eq!(h.visible_text(), "ab");
        h.tick(HOLD_COMPLETE);
        assert_eq!(h.visible_text(), "a");
        h.tick(DELETE_INTERVAL);
        assert_eq!(h.visible_text(), "");
        h.tick(HOLD_EMPTY);
        assert_eq!(h.visible_text(), "x");
    }

    #[test]
    fn headline_complete_instantly_shows_first_title() {
        let mut h = headline();
        h.complete_instantly();
        assert_eq!(h.visible_text(), "ab");
        h.tick(100.0);
        assert_eq!(h.visible_text(), "ab");
    }

    #[test]
    fn counter_reaches_exact_target() {
        let mut counter = KpiCounter::new("Projects", 24, "+");
        for _ in 0..200 {
            counter.tick(COUNTER_TICK);
        }
        assert!(counter.is_done());
        assert_eq!(counter.display(), "24+");
    }

    #[test]
    fn counter_steps_by_ceil_of_thirtieth() {
        let mut counter = KpiCounter::new("Big", 100, "");
        counter.tick(COUNTER_TICK);
        assert_eq!(counter.display(), "4");
    }

    #[test]
    fn zero_target_counter_is_done_immediately() {
        let mut counter = KpiCounter::new("None", 0, "+");
        counter.tick(1.0);
        assert!(counter.is_done());
        assert_eq!(counter.display(), "0+");
    }

    #[test]
    fn skill_bar_clamps_at_level() {
        let mut bar = SkillBar::new("Rust", 0.8);
        for _ in 0..600 {
            bar.tick(1.0 / 60.0);
        }
        assert!((bar.fill() - 0.8).abs() < 1e-6);
    }
}
