//! Per-frame rendering: clear, upload the transform, draw the mesh.

use glow::HasContext;

use crate::mesh::Mesh;
use crate::scene::Scene;
use crate::shader::ShaderProgram;

/// Draws one frame into the back buffer. The caller swaps buffers.
pub fn draw_frame(
    gl: &glow::Context,
    scene: Scene,
    mesh: &Mesh,
    shader: &ShaderProgram,
    width: u32,
    height: u32,
) {
    let aspect_ratio = width as f32 / height.max(1) as f32;
    let transform = scene.transform(aspect_ratio);

    unsafe {
        gl.viewport(0, 0, width as i32, height as i32);

        let [r, g, b, a] = scene.clear_color();
        gl.clear_color(r, g, b, a);
        if scene.uses_depth() {
            gl.enable(glow::DEPTH_TEST);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        } else {
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    shader.bind(gl);
    shader.set_transform(gl, &transform);
    mesh.draw(gl);

    unsafe {
        gl.use_program(None);
    }
}
