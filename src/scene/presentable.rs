use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Vec2};

use super::display::DisplaySize;

/// A line of text placed on a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    pub text: String,
    /// anchor point
    pub pos: Pos2,
    pub anchor: Align2,
    pub font_size: f32,
    pub color: Color32,
}

impl Caption {
    pub fn translate(
        &mut self,
        delta: Vec2,
    ) {
        self.pos += delta;
    }
}

/// Input a scene can react to, already decoded from keyboard / pointer by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneInput {
    Confirm,
    Cancel,
}

/// What a scene asks its host to do next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneTransition {
    Restart,
    Quit,
}

/// Something a scene can be painted on.
pub trait DisplaySurface {
    /// where the scene's 0/0 lands on this surface
    fn origin(&self) -> Pos2;

    fn add_shape(
        &mut self,
        shape: Shape,
    );

    fn add_caption(
        &mut self,
        caption: &Caption,
    );
}

/// A unit of UI the host can show at a given display size.
///
/// Content is produced in scene-local coordinates (TOP / LEFT corner is 0/0) and moved to the
/// surface origin by [`Presentable::present`].
pub trait Presentable {
    fn display_size(&self) -> DisplaySize;

    fn shapes(&self) -> Vec<Shape>;

    fn captions(&self) -> Vec<Caption>;

    fn present(
        &self,
        surface: &mut dyn DisplaySurface,
    ) {
        let offset = surface.origin().to_vec2();
        for mut shape in self.shapes() {
            shape.translate(offset);
            surface.add_shape(shape);
        }
        for mut caption in self.captions() {
            caption.translate(offset);
            surface.add_caption(&caption);
        }
    }

    fn react(
        &self,
        _input: SceneInput,
    ) -> Option<SceneTransition> {
        None
    }
}

impl DisplaySurface for Painter {
    fn origin(&self) -> Pos2 { self.clip_rect().min }

    fn add_shape(
        &mut self,
        shape: Shape,
    ) {
        self.add(shape);
    }

    fn add_caption(
        &mut self,
        caption: &Caption,
    ) {
        self.text(
            caption.pos,
            caption.anchor,
            &caption.text,
            FontId::proportional(caption.font_size),
            caption.color,
        );
    }
}

/// Keeps everything presented on it. Used for headless rendering and in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    origin: Pos2,
    pub shapes: Vec<Shape>,
    pub captions: Vec<Caption>,
}

impl RecordingSurface {
    pub fn new(origin: Pos2) -> Self {
        Self {
            origin,
            shapes: vec![],
            captions: vec![],
        }
    }

    pub fn is_empty(&self) -> bool { self.shapes.is_empty() && self.captions.is_empty() }

    pub fn caption_texts(&self) -> Vec<&str> { self.captions.iter().map(|c| c.text.as_str()).collect() }
}

impl DisplaySurface for RecordingSurface {
    fn origin(&self) -> Pos2 { self.origin }

    fn add_shape(
        &mut self,
        shape: Shape,
    ) {
        self.shapes.push(shape);
    }

    fn add_caption(
        &mut self,
        caption: &Caption,
    ) {
        self.captions.push(caption.clone());
    }
}

#[cfg(test)]
mod tests {
    use egui::epaint::RectShape;
    use egui::{Color32, Rect, Rounding};

    use super::*;

    struct Marker;

    impl Presentable for Marker {
        fn display_size(&self) -> DisplaySize { DisplaySize::new(10.0, 10.0).unwrap() }

        fn shapes(&self) -> Vec<Shape> {
            vec![RectShape::filled(
                Rect::from_min_max(Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)),
                Rounding::none(),
                Color32::WHITE,
            )
            .into()]
        }

        fn captions(&self) -> Vec<Caption> {
            vec![Caption {
                text: "x".to_string(),
                pos: Pos2::new(5.0, 5.0),
                anchor: Align2::CENTER_CENTER,
                font_size: 12.0,
                color: Color32::WHITE,
            }]
        }
    }

    #[test]
    fn present_moves_content_to_surface_origin() {
        let mut surface = RecordingSurface::new(Pos2::new(100.0, 50.0));
        Marker.present(&mut surface);

        assert_eq!(surface.shapes.len(), 1);
        match &surface.shapes[0] {
            Shape::Rect(rect) => assert_eq!(rect.rect.min, Pos2::new(101.0, 51.0)),
            other => panic!("unexpected shape {other:?}"),
        }
        assert_eq!(surface.captions[0].pos, Pos2::new(105.0, 55.0));
    }

    #[test]
    fn scenes_ignore_input_unless_they_react() {
        assert_eq!(Marker.react(SceneInput::Confirm), None);
        assert_eq!(Marker.react(SceneInput::Cancel), None);
    }
}
