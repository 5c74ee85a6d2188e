pub mod canvas;
pub mod renderer;
#[cfg(feature = "cairo")]
pub mod renderer_cairo;
