//! Renders a depth-tested pyramid under a static model/view/projection.

use hello_gl::{logging, run, Scene};

fn main() -> anyhow::Result<()> {
    logging::init();
    run(Scene::Pyramid)
}
