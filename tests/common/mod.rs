use egui::Pos2;
use log::LevelFilter;

use arcatnoid::scene::display::DisplaySize;
use arcatnoid::scene::presentable::{Presentable, RecordingSurface};

pub fn display_size(
    width: f32,
    height: f32,
) -> DisplaySize {
    DisplaySize::new(width, height).unwrap()
}

/// presents the scene on a surface located at `origin` and returns what landed there
pub fn present_at(
    scene: &dyn Presentable,
    origin: Pos2,
) -> RecordingSurface {
    let mut surface = RecordingSurface::new(origin);
    scene.present(&mut surface);
    surface
}

#[ctor::ctor]
fn init() {
    let _ = env_logger::builder()
        .format_timestamp_secs()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .is_test(true)
        .try_init();
}
