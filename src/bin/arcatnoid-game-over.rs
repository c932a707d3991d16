use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use egui::Vec2;

use arcatnoid::scene::display::DisplaySize;
use arcatnoid::scene::end_of_game::EndOfGameScreen;
use arcatnoid::scene::host::SceneHost;
use arcatnoid::scene::outcome::Outcome;
use arcatnoid::scene::presentable::{Presentable, SceneTransition};
use arcatnoid::scene::stage::SceneStage;
use arcatnoid::scene::style::ScreenStyle;
use arcatnoid::util::init_logging;

#[derive(ValueEnum, Copy, Clone, Debug)]
enum OutcomeArg {
    Won,
    Lost,
}

impl From<OutcomeArg> for Outcome {
    fn from(value: OutcomeArg) -> Self {
        match value {
            OutcomeArg::Won => Outcome::Won,
            OutcomeArg::Lost => Outcome::Lost,
        }
    }
}

/// Arcatnoid end-of-game screen preview.
/// Enter / Space / click shows the other outcome, Esc quits.
#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
struct GameOverArgs {
    /// outcome shown first
    #[arg(short, long, value_enum, default_value_t = OutcomeArg::Lost)]
    outcome: OutcomeArg,
    /// window width
    #[arg(short = 'x', long, default_value_t = 600.0)]
    width: f32,
    /// window height
    #[arg(short = 'y', long, default_value_t = 600.0)]
    height: f32,
    /// TOML file overriding the built-in screen style
    #[arg(short, long)]
    style: Option<PathBuf>,
    /// print the effective style as TOML and exit
    #[arg(long)]
    print_style: bool,
}

fn game_over_preview(args: GameOverArgs) -> anyhow::Result<()> {
    let display_size = DisplaySize::new(args.width, args.height).context("window size")?;
    let style = match &args.style {
        Some(path) => ScreenStyle::load_or_default(path),
        None => ScreenStyle::default(),
    };
    if args.print_style {
        print!("{}", style.to_toml()?);
        return Ok(());
    }

    let mut outcome = Outcome::from(args.outcome);
    let first_screen = EndOfGameScreen::with_style(display_size, outcome, &style);
    let director = Box::new(move |transition: SceneTransition, size: DisplaySize| match transition {
        SceneTransition::Restart => {
            outcome = outcome.flipped();
            Some(Box::new(EndOfGameScreen::with_style(size, outcome, &style)) as Box<dyn Presentable>)
        }
        SceneTransition::Quit => None,
    });
    let stage = SceneStage::new(Box::new(first_screen), director);

    let mut native_options = eframe::NativeOptions::default();
    native_options.default_theme = eframe::Theme::Dark;
    native_options.initial_window_size = Some(Vec2::new(display_size.width(), display_size.height()));
    native_options.resizable = false;
    eframe::run_native(
        "Arcatnoid",
        native_options,
        Box::new(move |cc| Box::new(SceneHost::new(cc, stage))),
    )
    .map_err(|e| anyhow!("{e}"))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    game_over_preview(GameOverArgs::parse())
}
