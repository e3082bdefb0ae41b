//! Renders two triangles that share an index, forming the original
//! bottom-of-screen quad shape.

use hello_gl::{logging, run, Scene};

fn main() -> anyhow::Result<()> {
    logging::init();
    run(Scene::Quad)
}
