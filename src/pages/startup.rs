//! Startup screen
//!
//! The attract screen of the kiosk loop. Two stages: first the welcome
//! title drops in and the logo slides in from the left edge; then any
//! key or click arms a handoff animation that floats the logo up into
//! its question-screen position before the page requests the first
//! question. Before the handoff is armed the page waits indefinitely.

use web_time::Instant;

use crate::constants::pages::{STARTUP_HANDOFF, TITLE_DROP};
use crate::pages::{Frame, drop_in_title, progress};
use crate::render::{Canvas, FontSize, Point, TextAnchor};
use crate::{InputEvent, NavigationSignal, anim};

/// Welcome line shown while waiting for a player
const WELCOME: &str = "Welcome! Ready to play";

/// The attract screen
pub struct StartupPage {
    entered_at: Instant,
    /// Set when the player pressed something; starts the handoff clock
    armed_at: Option<Instant>,
}

impl StartupPage {
    /// Creates the startup page, with its intro clock starting now
    pub fn new(now: Instant) -> Self {
        Self {
            entered_at: now,
            armed_at: None,
        }
    }

    /// Arms the handoff on the first key press or click
    pub fn handle_event(&mut self, event: &InputEvent, frame: &Frame) -> Option<NavigationSignal> {
        if self.armed_at.is_none()
            && matches!(
                event,
                InputEvent::KeyDown(_) | InputEvent::MouseButtonDown { .. }
            )
        {
            self.armed_at = Some(frame.now);
        }
        None
    }

    /// Requests the first question once the handoff animation is done
    pub fn update(&mut self, frame: &Frame) -> Option<NavigationSignal> {
        self.is_expired(frame.now).then_some(NavigationSignal::GoQuestion)
    }

    /// Whether the armed handoff animation has run its course
    pub fn is_expired(&self, now: Instant) -> bool {
        self.armed_at
            .is_some_and(|armed| now.duration_since(armed) > STARTUP_HANDOFF)
    }

    /// Draws the welcome title and the sliding logo
    pub fn render<C: Canvas>(&self, canvas: &mut C, frame: &Frame) {
        let width = frame.config.width as i32;
        let height = frame.config.height as i32;
        let logo = frame.assets.logo;

        if self.armed_at.is_none() {
            drop_in_title(
                canvas,
                frame,
                WELCOME,
                frame.config.palette.default_text,
                self.entered_at,
            );
        }

        // The logo rests low on the screen until the handoff floats it
        // up into the spot the question screen keeps it at.
        let rest_y = height as f32 * 0.7 - logo.height as f32 * 0.5;
        let target_x = (width - logo.width) / 2;
        let target_y = (height / 2 - logo.height) / 2 - 20;

        let (x, y) = if let Some(armed) = self.armed_at {
            let factor = progress(armed, frame.now, TITLE_DROP);
            (
                target_x as f32,
                anim::ease_out(rest_y, target_y as f32, factor),
            )
        } else {
            // Slide in from the left once the welcome line has settled
            let since_entry = frame.now.duration_since(self.entered_at);
            let factor = anim::clamp(
                (since_entry.as_secs_f32() - STARTUP_HANDOFF.as_secs_f32())
                    / TITLE_DROP.as_secs_f32(),
                0.0,
                1.0,
            );
            (
                anim::ease_out(-logo.width as f32, target_x as f32, factor),
                rest_y,
            )
        };

        canvas.blit(logo.id, Point::new(x as i32, y as i32));

        if self.armed_at.is_none() {
            canvas.text(
                "press any key to start",
                FontSize::Small,
                frame.config.palette.answer_selection,
                TextAnchor::TopCenter {
                    x: width / 2,
                    y: height - canvas.line_height(FontSize::Small) - 24,
                },
            );
        }
    }
}
