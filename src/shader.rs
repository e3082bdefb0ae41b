//! Compilation and linking of the fixed shader pair.
//!
//! Unlike the classic tutorial pattern, compile and link status are checked
//! and the driver info log is surfaced in the error, so a broken shader
//! fails loudly at startup instead of rendering nothing.

use anyhow::{anyhow, Result};
use glow::HasContext;

pub const VERTEX_SHADER_SOURCE: &str = r#"#version 330 core
layout (location = 0) in vec3 position;
layout (location = 1) in vec4 color;

uniform mat4 transform;

out vec4 vertex_color;

void main()
{
    gl_Position = transform * vec4(position, 1.0);
    vertex_color = color;
}
"#;

pub const FRAGMENT_SHADER_SOURCE: &str = r#"#version 330 core
in vec4 vertex_color;

out vec4 frag_color;

void main()
{
    frag_color = vertex_color;
}
"#;

fn compile_shader(gl: &glow::Context, shader_type: u32, source: &str) -> Result<glow::Shader> {
    let kind = match shader_type {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    };

    unsafe {
        let shader = gl
            .create_shader(shader_type)
            .map_err(|e| anyhow!("failed to create {kind} shader: {e}"))?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(anyhow!("{kind} shader compile error: {log}"));
        }
        Ok(shader)
    }
}

pub struct ShaderProgram {
    program: glow::Program,
    transform_location: glow::UniformLocation,
}

impl ShaderProgram {
    /// Compiles both fixed shader stages, links them, and resolves the
    /// `transform` uniform location.
    pub fn new(gl: &glow::Context) -> Result<Self> {
        let vertex_shader = compile_shader(gl, glow::VERTEX_SHADER, VERTEX_SHADER_SOURCE)?;
        let fragment_shader = compile_shader(gl, glow::FRAGMENT_SHADER, FRAGMENT_SHADER_SOURCE)?;

        unsafe {
            let program = gl
                .create_program()
                .map_err(|e| anyhow!("failed to create shader program: {e}"))?;
            gl.attach_shader(program, vertex_shader);
            gl.attach_shader(program, fragment_shader);
            gl.link_program(program);

            // The shader objects are no longer needed once the program links.
            gl.detach_shader(program, vertex_shader);
            gl.detach_shader(program, fragment_shader);
            gl.delete_shader(vertex_shader);
            gl.delete_shader(fragment_shader);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(anyhow!("shader program link error: {log}"));
            }

            let transform_location = gl
                .get_uniform_location(program, "transform")
                .ok_or_else(|| anyhow!("uniform 'transform' not found in shader program"))?;

            Ok(Self {
                program,
                transform_location,
            })
        }
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe {
            gl.use_program(Some(self.program));
        }
    }

    /// Uploads a row-major matrix to the `transform` uniform. The program
    /// must be bound.
    pub fn set_transform(&self, gl: &glow::Context, matrix: &crate::math::Mat4x4) {
        unsafe {
            gl.uniform_matrix_4_f32_slice(Some(&self.transform_location), true, matrix);
        }
    }

    /// Deletes the program object. Consumes the value so the handle can
    /// never be used after deletion.
    pub fn destroy(self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.program);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_sources_declare_expected_interface() {
        assert!(VERTEX_SHADER_SOURCE.contains("layout (location = 0) in vec3 position"));
        assert!(VERTEX_SHADER_SOURCE.contains("layout (location = 1) in vec4 color"));
        assert!(VERTEX_SHADER_SOURCE.contains("uniform mat4 transform"));
        assert!(FRAGMENT_SHADER_SOURCE.contains("in vec4 vertex_color"));
    }
}
