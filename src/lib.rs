//! Three small OpenGL programs sharing one pipeline.
//!
//! Each binary (`triangle`, `pyramid`, `quad`) opens an 800x600 window with
//! a 3.3 core context, uploads one hard-coded indexed mesh, and redraws it
//! every frame with a static transform until Escape is pressed or the
//! window is closed. The per-variant differences are data in [`scene`];
//! everything else is shared.

pub mod app;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod shader;
pub mod window;

pub use app::run;
pub use scene::Scene;
