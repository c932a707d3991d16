use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq)]
pub enum SceneError {
    /// width or height is negative, NaN or infinite
    InvalidDisplaySize { width: f32, height: f32 },
    /// style file could not be read or parsed
    Style(String),
}

impl Display for SceneError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            SceneError::InvalidDisplaySize { width, height } => {
                write!(f, "invalid display size {width}x{height}: both dimensions must be finite and non-negative")
            }
            SceneError::Style(msg) => write!(f, "screen style: {msg}"),
        }
    }
}

impl std::error::Error for SceneError {}
