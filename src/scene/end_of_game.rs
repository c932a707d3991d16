use egui::epaint::{CircleShape, RectShape};
use egui::{Align2, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

use super::display::DisplaySize;
use super::error::SceneError;
use super::outcome::Outcome;
use super::presentable::{Caption, Presentable, SceneInput, SceneTransition};
use super::style::{to_color32, ScreenStyle};

// all lengths are fractions of the display size
const BANNER_LEN_X: f32 = 0.7;
const BANNER_LEN_Y: f32 = 0.3;
const BANNER_ROUNDING: f32 = 0.02;

const BRICK_COUNT: usize = 5;
const BRICK_ROW_LEN_X: f32 = 0.6;
const BRICK_SPACING_X: f32 = 0.04;
const BRICK_LEN_Y: f32 = 0.12;
const BRICK_ROW_TOP_Y: f32 = 0.12;

const PANEL_LEN_X: f32 = 0.1;
const PANEL_LEN_Y: f32 = 0.015;
const PANEL_DISTANCE_BANNER_Y: f32 = 0.08;

const BALL_RADIUS: f32 = 0.015;
const BALL_OFFSET_X: f32 = 0.08;
const BALL_DISTANCE_PANEL_Y: f32 = 0.06;

const HINT_POS_Y: f32 = 0.9;

const STROKE_WIDTH: f32 = 2.0;

/// The game-over scene, showing whether the player won or lost.
///
/// Content is fixed at construction. A degenerate (zero sized) screen presents nothing.
#[derive(Clone, Debug)]
pub struct EndOfGameScreen {
    display_size: DisplaySize,
    outcome: Outcome,
    style: ScreenStyle,
}

impl EndOfGameScreen {
    pub fn new(
        display_size: DisplaySize,
        outcome: Outcome,
    ) -> Self {
        Self::with_style(display_size, outcome, &ScreenStyle::default())
    }

    pub fn with_style(
        display_size: DisplaySize,
        outcome: Outcome,
        style: &ScreenStyle,
    ) -> Self {
        log::debug!(
            "end-of-game screen: {outcome}, {}x{}",
            display_size.width(),
            display_size.height()
        );
        Self {
            display_size,
            outcome,
            style: style.clone(),
        }
    }

    /// Entry point for raw dimensions, e.g. from the match logic's own bookkeeping
    pub fn try_new(
        width: f32,
        height: f32,
        outcome: Outcome,
    ) -> Result<Self, SceneError> {
        Ok(Self::new(DisplaySize::new(width, height)?, outcome))
    }

    pub fn outcome(&self) -> Outcome { self.outcome }

    pub fn headline(&self) -> &str { &self.style.for_outcome(self.outcome).headline }

    fn len_x(
        &self,
        fraction: f32,
    ) -> f32 {
        fraction * self.display_size.width()
    }

    fn len_y(
        &self,
        fraction: f32,
    ) -> f32 {
        fraction * self.display_size.height()
    }

    fn banner_rect(&self) -> Rect {
        Rect::from_center_size(
            self.display_size.center(),
            Vec2::new(self.len_x(BANNER_LEN_X), self.len_y(BANNER_LEN_Y)),
        )
    }

    fn panel_rect(&self) -> Rect {
        let center = Pos2::new(
            self.display_size.center().x,
            self.banner_rect().bottom() + self.len_y(PANEL_DISTANCE_BANNER_Y),
        );
        Rect::from_center_size(center, Vec2::new(self.len_x(PANEL_LEN_X), self.len_y(PANEL_LEN_Y)))
    }

    fn background(&self) -> Shape {
        RectShape::filled(
            self.display_size.rect(),
            Rounding::none(),
            to_color32(self.style.for_outcome(self.outcome).background),
        )
        .into()
    }

    /// filled panel + accent frame
    fn banner(&self) -> [Shape; 2] {
        let rect = self.banner_rect();
        let rounding = Rounding::same(self.len_y(BANNER_ROUNDING));
        let stroke = Stroke::new(STROKE_WIDTH, to_color32(self.style.for_outcome(self.outcome).accent));
        [
            RectShape::filled(rect, rounding, to_color32(self.style.panel)).into(),
            RectShape::stroke(rect, rounding, stroke).into(),
        ]
    }

    /// cleared bricks: outlines only
    fn cleared_bricks(&self) -> Vec<Shape> {
        let banner = self.banner_rect();
        let spacing = self.len_x(BRICK_SPACING_X);
        let row_len = self.len_x(BRICK_ROW_LEN_X).min(banner.width());
        let brick_len_x = (row_len - spacing * (BRICK_COUNT - 1) as f32) / BRICK_COUNT as f32;
        let brick_len_y = banner.height() * BRICK_LEN_Y;
        let top = banner.top() + banner.height() * BRICK_ROW_TOP_Y;
        let mut left = banner.center().x - row_len / 2.0;
        let stroke = Stroke::new(STROKE_WIDTH, to_color32(self.style.for_outcome(self.outcome).accent));

        let mut result = Vec::with_capacity(BRICK_COUNT);
        for _ in 0..BRICK_COUNT {
            let brick = Rect::from_min_size(Pos2::new(left, top), Vec2::new(brick_len_x, brick_len_y));
            result.push(RectShape::stroke(brick, Rounding::none(), stroke).into());
            left += brick_len_x + spacing;
        }
        result
    }

    /// the ball, gone past the paddle
    fn lost_ball(&self) -> Shape {
        let panel = self.panel_rect();
        let center = Pos2::new(
            panel.center().x + self.len_x(BALL_OFFSET_X),
            panel.bottom() + self.len_y(BALL_DISTANCE_PANEL_Y),
        );
        CircleShape::filled(
            center,
            self.len_y(BALL_RADIUS),
            to_color32(self.style.for_outcome(self.outcome).accent),
        )
        .into()
    }

    fn panel(&self) -> Shape {
        RectShape::filled(
            self.panel_rect(),
            Rounding::none(),
            to_color32(self.style.for_outcome(self.outcome).accent),
        )
        .into()
    }
}

impl Presentable for EndOfGameScreen {
    fn display_size(&self) -> DisplaySize { self.display_size }

    fn shapes(&self) -> Vec<Shape> {
        if self.display_size.is_degenerate() {
            return vec![];
        }
        let mut result = Vec::with_capacity(BRICK_COUNT + 4);
        result.push(self.background());
        result.extend(self.banner());
        match self.outcome {
            Outcome::Won => result.extend(self.cleared_bricks()),
            Outcome::Lost => result.push(self.lost_ball()),
        }
        result.push(self.panel());
        result
    }

    fn captions(&self) -> Vec<Caption> {
        if self.display_size.is_degenerate() {
            return vec![];
        }
        let banner = self.banner_rect();
        let color = to_color32(self.style.text);
        vec![
            Caption {
                text: self.headline().to_string(),
                pos: Pos2::new(banner.center().x, banner.center().y + banner.height() * 0.1),
                anchor: Align2::CENTER_CENTER,
                font_size: self.len_y(self.style.headline_scale),
                color,
            },
            Caption {
                text: self.style.hint.clone(),
                pos: Pos2::new(self.display_size.center().x, self.len_y(HINT_POS_Y)),
                anchor: Align2::CENTER_CENTER,
                font_size: self.len_y(self.style.hint_scale),
                color,
            },
        ]
    }

    fn react(
        &self,
        input: SceneInput,
    ) -> Option<SceneTransition> {
        match input {
            SceneInput::Confirm => Some(SceneTransition::Restart),
            SceneInput::Cancel => Some(SceneTransition::Quit),
        }
    }
}
