use super::display::DisplaySize;
use super::presentable::{DisplaySurface, Presentable, SceneInput, SceneTransition};

/// Decides which scene follows a transition. `None` ends the show.
pub type Director = Box<dyn FnMut(SceneTransition, DisplaySize) -> Option<Box<dyn Presentable>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageStatus {
    Showing,
    Closed,
}

/// Owns the scene currently shown and replaces it on transitions.
///
/// A replaced scene is dropped right away; nothing else keeps a reference to it.
pub struct SceneStage {
    scene: Option<Box<dyn Presentable>>,
    director: Director,
}

impl SceneStage {
    pub fn new(
        scene: Box<dyn Presentable>,
        director: Director,
    ) -> Self {
        Self {
            scene: Some(scene),
            director,
        }
    }

    pub fn status(&self) -> StageStatus {
        match self.scene {
            Some(_) => StageStatus::Showing,
            None => StageStatus::Closed,
        }
    }

    pub fn current(&self) -> Option<&dyn Presentable> { self.scene.as_deref() }

    pub fn handle(
        &mut self,
        input: SceneInput,
    ) -> StageStatus {
        let transition = match &self.scene {
            Some(scene) => scene.react(input),
            None => return StageStatus::Closed,
        };
        if let Some(transition) = transition {
            self.transit(transition);
        }
        self.status()
    }

    /// Ends the show without consulting the director (e.g. the window was closed)
    pub fn close(&mut self) {
        if self.scene.take().is_some() {
            log::debug!("stage closed");
        }
    }

    pub fn present(
        &self,
        surface: &mut dyn DisplaySurface,
    ) {
        if let Some(scene) = &self.scene {
            scene.present(surface);
        }
    }

    fn transit(
        &mut self,
        transition: SceneTransition,
    ) {
        let display_size = match &self.scene {
            Some(scene) => scene.display_size(),
            None => return,
        };
        log::info!("scene transition: {transition:?}");
        self.scene = (self.director)(transition, display_size);
        if self.scene.is_none() {
            log::debug!("no follow-up scene; stage closed");
        }
    }
}
