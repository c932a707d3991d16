use eframe::glow;
use egui::{Context, Id, Key, LayerId, Order, Painter};

use super::display::DisplaySize;
use super::presentable::SceneInput;
use super::stage::{SceneStage, StageStatus};

/// eframe adapter: feeds keyboard / pointer input to a [`SceneStage`] and paints its current scene.
pub struct SceneHost {
    stage: SceneStage,
}

impl SceneHost {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        stage: SceneStage,
    ) -> Self {
        Self { stage }
    }

    /// Esc wins over everything else pressed in the same frame
    fn read_scene_input(ctx: &Context) -> Option<SceneInput> {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            Some(SceneInput::Cancel)
        } else if ctx.input(|i| i.key_pressed(Key::Enter) || i.key_pressed(Key::Space) || i.pointer.any_click()) {
            Some(SceneInput::Confirm)
        } else {
            None
        }
    }

    fn surface_size(painter: &Painter) -> DisplaySize { DisplaySize::from(painter.clip_rect().size()) }
}

impl eframe::App for SceneHost {
    fn update(
        &mut self,
        ctx: &Context,
        frame: &mut eframe::Frame,
    ) {
        if let Some(input) = Self::read_scene_input(ctx) {
            if self.stage.handle(input) == StageStatus::Closed {
                frame.close();
                return;
            }
        }

        let mut painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("scene")));
        // minimized window
        if Self::surface_size(&painter).is_degenerate() {
            return;
        }
        self.stage.present(&mut painter);
    }

    fn on_exit(
        &mut self,
        _: Option<&glow::Context>,
    ) {
        self.stage.close();
    }
}
