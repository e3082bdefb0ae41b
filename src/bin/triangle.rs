//! Renders a single color-interpolated triangle.

use hello_gl::{logging, run, Scene};

fn main() -> anyhow::Result<()> {
    logging::init();
    run(Scene::Triangle)
}
