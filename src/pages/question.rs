//! Question screen
//!
//! The only page that waits indefinitely: it shows the logo, the
//! question cartouche, the four answer cartouches and the three
//! lifeline buttons, and turns picks into quiz operations. All of its
//! transitions are input-driven; the navigation signal comes out of the
//! quiz state's verdicts and reveal requests rather than a timer.
//!
//! Layout is derived from [`Config`] alone so hit-testing in the event
//! handler and drawing in the render step cannot disagree.

use crate::config::Config;
use crate::lifeline::Lifeline;
use crate::pages::{Frame, choice_letter};
use crate::quiz::QuizState;
use crate::render::{Canvas, FontSize, Point, Rect, TextAnchor};
use crate::{InputEvent, MouseButton, NavigationSignal};

/// Lifeline button width in pixels
const BUTTON_WIDTH: i32 = 140;
/// Lifeline button height in pixels
const BUTTON_HEIGHT: i32 = 48;
/// Gap between stacked lifeline buttons and to the window edges
const BUTTON_GAP: i32 = 10;

/// The rectangle holding the question text
pub fn question_rect(config: &Config) -> Rect {
    let width = config.width as i32;
    let height = config.height as i32;
    Rect::new(
        config.layout.question_span,
        height / 2 - config.layout.question_height / 2,
        width - config.layout.question_span * 2,
        config.layout.question_height,
    )
}

/// The four answer cartouche rectangles, in choice order
///
/// Two columns by two rows on the lower half of the screen.
pub fn answer_rects(config: &Config) -> [Rect; 4] {
    let width = config.width as i32;
    let height = config.height as i32;
    core::array::from_fn(|i| {
        let column = (i % 2) as i32;
        let row = (i / 2) as i32;
        Rect::new(
            column * (width / 2) + config.layout.answer_span,
            height / 2
                + config.layout.question_height
                + row * config.layout.answer_height
                + row * config.layout.answer_span / 2,
            width / 2 - config.layout.answer_span * 2,
            height / 4 - config.layout.answer_height,
        )
    })
}

/// The three lifeline buttons with their hit rectangles
///
/// Stacked along the right edge, top to bottom in lifeline order.
pub fn lifeline_buttons(config: &Config) -> [(Lifeline, Rect); 3] {
    let x = config.width as i32 - BUTTON_WIDTH - BUTTON_GAP;
    let button = |row: i32, lifeline| {
        (
            lifeline,
            Rect::new(
                x,
                BUTTON_GAP + row * (BUTTON_HEIGHT + BUTTON_GAP * 2),
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
        )
    };
    [
        button(0, Lifeline::Fifty),
        button(1, Lifeline::Phone),
        button(2, Lifeline::Audience),
    ]
}

/// Label shown on a lifeline button
fn button_label(lifeline: Lifeline) -> &'static str {
    match lifeline {
        Lifeline::Fifty => "50 %",
        Lifeline::Phone => "\u{2706}",
        Lifeline::Audience => "Vote",
    }
}

/// Draws the decorative cartouche frame around a rectangle
fn draw_cartouche<C: Canvas>(canvas: &mut C, frame: &Frame, rect: Rect, span: i32, selected: bool) {
    let palette = &frame.config.palette;
    let fill = if selected {
        palette.answer_selection
    } else {
        palette.answer_background
    };
    canvas.fill_rounded_rect(rect, span, fill);
    canvas.stroke_rounded_rect(rect, span, 4, palette.answer_line);

    // Connector stubs on both sides, the quiz-show look
    let y = rect.center_y();
    canvas.line(
        Point::new(rect.x - span, y),
        Point::new(rect.x, y),
        4,
        palette.answer_line,
    );
    canvas.line(
        Point::new(rect.right(), y),
        Point::new(rect.right() + span, y),
        4,
        palette.answer_line,
    );
}

/// The question screen
pub struct QuestionPage;

impl QuestionPage {
    /// Creates the question screen for the quiz's current question
    pub fn new() -> Self {
        Self
    }

    /// Turns key presses and clicks into quiz operations
    ///
    /// Answer keys and clicks on an answer cartouche validate that
    /// choice; clicks on an unused lifeline button consume the
    /// lifeline. Everything else is ignored, including clicks outside
    /// every hit region and picks of eliminated choices (the quiz
    /// state ignores those itself).
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        quiz: &mut QuizState,
        frame: &Frame,
    ) -> Option<NavigationSignal> {
        match event {
            InputEvent::KeyDown(key) => key
                .answer_index()
                .and_then(|answer| quiz.validate_answer(answer))
                .map(Into::into),
            InputEvent::MouseButtonDown {
                position,
                button: MouseButton::Left,
            } => {
                for (answer, rect) in answer_rects(frame.config).iter().enumerate() {
                    if rect.contains(*position) {
                        return quiz.validate_answer(answer).map(Into::into);
                    }
                }
                for (lifeline, rect) in lifeline_buttons(frame.config) {
                    if !quiz.lifeline_used(lifeline) && rect.contains(*position) {
                        return quiz.use_lifeline(lifeline);
                    }
                }
                None
            }
            _ => None,
        }
    }

    /// Draws the logo, question, answers and lifeline buttons
    ///
    /// # Panics
    ///
    /// Panics if the session is already complete; the controller never
    /// constructs a question page in that state.
    pub fn render<C: Canvas>(&self, canvas: &mut C, quiz: &QuizState, frame: &Frame) {
        let Ok(current) = quiz.current() else {
            unreachable!("question page displayed past the last question");
        };
        let palette = &frame.config.palette;
        let width = frame.config.width as i32;
        let height = frame.config.height as i32;

        let logo = frame.assets.logo;
        canvas.blit(
            logo.id,
            Point::new(
                (width - logo.width) / 2,
                (height / 2 - logo.height) / 2 - 20,
            ),
        );

        let q_rect = question_rect(frame.config);
        draw_cartouche(canvas, frame, q_rect, frame.config.layout.question_span, false);
        canvas.text(
            current.text(),
            FontSize::Normal,
            palette.question_text,
            TextAnchor::Fitted(Rect::new(
                q_rect.x + frame.config.layout.question_span,
                q_rect.y,
                q_rect.w - frame.config.layout.question_span * 2,
                q_rect.h,
            )),
        );

        for (answer, rect) in answer_rects(frame.config).iter().enumerate() {
            let hovered = rect.contains(frame.cursor);
            draw_cartouche(canvas, frame, *rect, frame.config.layout.answer_span, hovered);
            let color = if hovered {
                palette.hover_text
            } else {
                palette.default_text
            };
            let label = format!(
                "{} : {}",
                choice_letter(answer),
                current.choices()[answer].label()
            );
            canvas.text(
                &label,
                FontSize::Small,
                color,
                TextAnchor::TopLeft(Point::new(
                    rect.x + frame.config.layout.answer_height / 2,
                    rect.center_y() - canvas.line_height(FontSize::Small) / 2,
                )),
            );
        }

        for (lifeline, rect) in lifeline_buttons(frame.config) {
            let used = quiz.lifeline_used(lifeline);
            let hovered = !used && rect.contains(frame.cursor);
            let fill = if hovered {
                palette.answer_selection
            } else {
                palette.answer_background
            };
            let radius = rect.h / 2;
            canvas.fill_rounded_rect(rect, radius, fill);
            canvas.stroke_rounded_rect(rect, radius, 4, palette.answer_line);
            canvas.text(
                button_label(lifeline),
                FontSize::Normal,
                palette.answer_selection,
                TextAnchor::TopCenter {
                    x: rect.center_x(),
                    y: rect.center_y() - canvas.line_height(FontSize::Normal) / 2,
                },
            );
            if used {
                canvas.line(
                    Point::new(rect.x, rect.y),
                    Point::new(rect.right(), rect.y + rect.h),
                    15,
                    palette.bad_text,
                );
            }
        }
    }
}

impl Default for QuestionPage {
    fn default() -> Self {
        Self::new()
    }
}
