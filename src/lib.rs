pub mod scene;
pub mod util;
