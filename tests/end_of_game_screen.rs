use egui::{Pos2, Shape};
use rstest::rstest;

use arcatnoid::scene::end_of_game::EndOfGameScreen;
use arcatnoid::scene::error::SceneError;
use arcatnoid::scene::outcome::Outcome;
use arcatnoid::scene::presentable::Presentable;
use common::{display_size, present_at};

mod common;

#[rstest]
#[case(1024.0, 768.0, Outcome::Won)]
#[case(1024.0, 768.0, Outcome::Lost)]
#[case(1.0, 1.0, Outcome::Won)]
#[case(3840.0, 2160.0, Outcome::Lost)]
fn construction_keeps_its_arguments(
    #[case] width: f32,
    #[case] height: f32,
    #[case] outcome: Outcome,
) {
    let screen = EndOfGameScreen::new(display_size(width, height), outcome);
    assert_eq!(screen.outcome(), outcome);
    assert_eq!(screen.display_size(), display_size(width, height));
}

#[test]
fn scenario_won_1024x768() {
    let screen = EndOfGameScreen::try_new(1024.0, 768.0, Outcome::Won).unwrap();
    assert_eq!(screen.outcome(), Outcome::Won);
    assert_eq!(screen.display_size().width(), 1024.0);
    assert_eq!(screen.display_size().height(), 768.0);
}

#[test]
fn scenario_lost_1024x768() {
    let screen = EndOfGameScreen::try_new(1024.0, 768.0, Outcome::Lost).unwrap();
    assert_eq!(screen.outcome(), Outcome::Lost);
    assert_eq!(screen.display_size().width(), 1024.0);
    assert_eq!(screen.display_size().height(), 768.0);
}

#[test]
fn zero_size_gives_an_empty_scene() {
    let screen = EndOfGameScreen::try_new(0.0, 0.0, Outcome::Lost).unwrap();
    assert_eq!(screen.outcome(), Outcome::Lost);
    assert!(screen.display_size().is_degenerate());
    assert!(present_at(&screen, Pos2::ZERO).is_empty());
}

#[rstest]
#[case(- 1.0, 768.0)]
#[case(1024.0, f32::NAN)]
fn malformed_size_is_reported(
    #[case] width: f32,
    #[case] height: f32,
) {
    match EndOfGameScreen::try_new(width, height, Outcome::Won) {
        Err(SceneError::InvalidDisplaySize { .. }) => (),
        other => panic!("expected InvalidDisplaySize, got {other:?}"),
    }
}

#[test]
fn won_and_lost_look_different() {
    let won = present_at(&EndOfGameScreen::new(display_size(1024.0, 768.0), Outcome::Won), Pos2::ZERO);
    let lost = present_at(&EndOfGameScreen::new(display_size(1024.0, 768.0), Outcome::Lost), Pos2::ZERO);

    assert_ne!(won.caption_texts()[0], lost.caption_texts()[0]);
    assert_ne!(won.shapes, lost.shapes);
}

#[test]
fn identical_screens_are_independent() {
    let first = EndOfGameScreen::new(display_size(800.0, 600.0), Outcome::Won);
    let second = EndOfGameScreen::new(display_size(800.0, 600.0), Outcome::Won);

    let before = present_at(&first, Pos2::ZERO);
    present_at(&second, Pos2::new(50.0, 50.0));
    drop(second);
    let after = present_at(&first, Pos2::ZERO);

    assert_eq!(before.shapes, after.shapes);
    assert_eq!(before.captions, after.captions);
}

#[test]
fn presenting_at_an_offset_moves_everything() {
    let screen = EndOfGameScreen::new(display_size(640.0, 480.0), Outcome::Lost);
    let at_zero = present_at(&screen, Pos2::ZERO);
    let shifted = present_at(&screen, Pos2::new(10.0, 20.0));

    let background_min = |shapes: &[Shape]| match &shapes[0] {
        Shape::Rect(rect) => rect.rect.min,
        other => panic!("unexpected background {other:?}"),
    };
    assert_eq!(background_min(&at_zero.shapes), Pos2::ZERO);
    assert_eq!(background_min(&shifted.shapes), Pos2::new(10.0, 20.0));
    assert_eq!(shifted.captions[0].pos, at_zero.captions[0].pos + egui::vec2(10.0, 20.0));
}
