//! Headless frame loop
//!
//! Feeds a gesture script to the switch, ticks it at a fixed rate (or
//! against the wall clock) and optionally writes every n-th frame as SVG.

use anyhow::{Context, Result};
use bulbswitch_animation::FrameClock;
use bulbswitch_core::{DrawContext, Point, Rect};
use bulbswitch_theme::ColorScheme;
use bulbswitch_widget::{BulbSwitch, Widget};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, trace, warn};

use crate::config::AppConfig;
use crate::script::{GestureScript, ScriptCursor};
use crate::svg::SvgSurface;
use crate::toggle::ThemeToggle;

/// Radius of the bulb drawn around the string's anchor
const BULB_RADIUS: f32 = 14.0;

/// Loop settings
#[derive(Debug, Clone)]
pub struct SimulateOptions {
    pub fps: u32,
    /// Directory for SVG frames; nothing is written when unset
    pub svg_dir: Option<PathBuf>,
    /// Write every n-th frame
    pub every: u32,
    /// Pace frames against the wall clock instead of a fixed step
    pub realtime: bool,
    /// Give up after this much simulated time
    pub max_ms: f32,
}

impl Default for SimulateOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            svg_dir: None,
            every: 1,
            realtime: false,
            max_ms: 30_000.0,
        }
    }
}

/// What happened during a run
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub frames: u64,
    pub elapsed_ms: f32,
    pub pulls: u32,
    pub releases: u32,
    pub completions: u32,
    pub scheme: ColorScheme,
    pub length: f32,
    pub svg_frames: u32,
}

/// A switch hosted on a fixed-size canvas
pub struct Simulation {
    switch: BulbSwitch<ThemeToggle>,
    width: u32,
    height: u32,
}

impl Simulation {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let listener = ThemeToggle::new(config.host.scheme);
        let switch = BulbSwitch::try_new(config.string.clone(), listener)
            .context("Failed to create switch")?;
        Ok(Self {
            switch,
            width: config.host.canvas_width,
            height: config.host.canvas_height,
        })
    }

    pub fn switch(&self) -> &BulbSwitch<ThemeToggle> {
        &self.switch
    }

    /// Where the default gesture grabs the string
    pub fn resting_endpoint(&self) -> Point {
        self.switch.resting_endpoint()
    }

    /// Paint background, bulb, then the string
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        let theme = self.switch.listener().theme();
        ctx.fill_rect(
            Rect::new(0.0, 0.0, self.width as f32, self.height as f32),
            theme.background(),
        );
        ctx.fill_circle(
            Point::new(self.switch.config().bulb_center_x, 0.0),
            BULB_RADIUS,
            theme.palette().bulb,
        );
        self.switch.render(ctx);
    }

    fn is_settled(&self) -> bool {
        !self.switch.is_animating() && !self.switch.listener().theme().is_transitioning()
    }

    fn advance(&mut self, dt_ms: f32) {
        self.switch.tick(dt_ms);
        self.switch.listener_mut().theme_mut().tick(dt_ms);
    }

    fn write_frame(&self, dir: &std::path::Path, name: &str) -> Result<()> {
        let mut surface = SvgSurface::new(self.width, self.height);
        self.draw(&mut surface);
        surface.write_to(&dir.join(name))
    }

    /// Play `script` until it is exhausted and everything has settled
    pub fn run(&mut self, script: &GestureScript, options: &SimulateOptions) -> Result<Summary> {
        let fps = options.fps.max(1);
        let every = u64::from(options.every.max(1));
        let frame_ms = 1000.0 / fps as f32;

        if let Some(dir) = &options.svg_dir {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let mut clock = options.realtime.then(|| FrameClock::new(fps));
        let mut cursor = ScriptCursor::new(script);
        let mut now_ms = 0.0f32;
        let mut frame: u64 = 0;
        let mut svg_frames = 0;

        info!(
            events = script.events().len(),
            fps,
            realtime = options.realtime,
            "simulation started"
        );

        loop {
            for event in cursor.due(now_ms) {
                let claimed = self.switch.handle_event(&event.to_pointer_event());
                debug!(at_ms = event.at_ms, kind = ?event.kind, claimed, "pointer event");
            }

            if let Some(dir) = &options.svg_dir {
                if frame % every == 0 {
                    self.write_frame(dir, &format!("frame_{frame:05}.svg"))?;
                    svg_frames += 1;
                }
            }

            if cursor.is_done() && self.is_settled() {
                break;
            }
            if now_ms >= options.max_ms {
                warn!(now_ms, "simulation did not settle, stopping");
                break;
            }

            let dt = match clock.as_mut() {
                Some(clock) => {
                    std::thread::sleep(clock.remaining_in_frame());
                    clock.tick()
                }
                None => frame_ms,
            };
            self.advance(dt);
            now_ms += dt;
            frame += 1;
            trace!(
                frame,
                now_ms,
                length = self.switch.length(),
                amplitude = self.switch.amplitude(),
                "frame"
            );
        }

        if let Some(dir) = &options.svg_dir {
            self.write_frame(dir, "final.svg")?;
            svg_frames += 1;
        }

        let listener = self.switch.listener();
        let summary = Summary {
            frames: frame,
            elapsed_ms: now_ms,
            pulls: listener.pulls(),
            releases: listener.releases(),
            completions: listener.completions(),
            scheme: listener.theme().scheme(),
            length: self.switch.length(),
            svg_frames,
        };
        info!(
            frames = summary.frames,
            elapsed_ms = summary.elapsed_ms,
            scheme = %summary.scheme,
            "simulation finished"
        );
        Ok(summary)
    }
}
