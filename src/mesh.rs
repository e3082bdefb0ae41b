//! GPU upload of one static indexed mesh.
//!
//! A mesh is created once at startup and never mutated; there is no update
//! path. `destroy` consumes the mesh so the GPU objects can only be freed
//! once.

use anyhow::{anyhow, Result};
use bytemuck::{Pod, Zeroable};
use glow::HasContext;

/// Interleaved vertex: 3 floats position + 4 floats color, 28-byte stride.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

pub const POSITION_LOCATION: u32 = 0;
pub const COLOR_LOCATION: u32 = 1;

pub struct Mesh {
    vao: glow::VertexArray,
    vertex_buffer: glow::Buffer,
    index_buffer: glow::Buffer,
    index_count: i32,
}

impl Mesh {
    /// Uploads the vertex and index data into freshly created GPU buffers
    /// and records the two attribute pointers in a vertex array object.
    pub fn upload(gl: &glow::Context, vertices: &[Vertex], indices: &[u16]) -> Result<Self> {
        debug_assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));

        let stride = std::mem::size_of::<Vertex>() as i32;
        let color_offset = std::mem::size_of::<[f32; 3]>() as i32;

        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|e| anyhow!("failed to create vertex array: {e}"))?;
            gl.bind_vertex_array(Some(vao));

            let vertex_buffer = gl
                .create_buffer()
                .map_err(|e| anyhow!("failed to create vertex buffer: {e}"))?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            gl.enable_vertex_attrib_array(POSITION_LOCATION);
            gl.vertex_attrib_pointer_f32(POSITION_LOCATION, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(COLOR_LOCATION);
            gl.vertex_attrib_pointer_f32(COLOR_LOCATION, 4, glow::FLOAT, false, stride, color_offset);

            let index_buffer = gl
                .create_buffer()
                .map_err(|e| anyhow!("failed to create index buffer: {e}"))?;
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(index_buffer));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );

            gl.bind_vertex_array(None);

            Ok(Self {
                vao,
                vertex_buffer,
                index_buffer,
                index_count: indices.len() as i32,
            })
        }
    }

    pub fn index_count(&self) -> i32 {
        self.index_count
    }

    /// Binds the vertex array, draws the full index range, unbinds.
    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_SHORT, 0);
            gl.bind_vertex_array(None);
        }
    }

    /// Frees the GPU objects. Consumes the mesh so a handle can never be
    /// used after deletion.
    pub fn destroy(self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vertex_buffer);
            gl.delete_buffer(self.index_buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stride_is_seven_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 7 * std::mem::size_of::<f32>());
    }

    #[test]
    fn color_offset_follows_position() {
        assert_eq!(std::mem::offset_of!(Vertex, position), 0);
        assert_eq!(std::mem::offset_of!(Vertex, color), 3 * std::mem::size_of::<f32>());
    }

    #[test]
    fn vertices_cast_to_interleaved_floats() {
        let verts = [Vertex {
            position: [1.0, 2.0, 3.0],
            color: [0.25, 0.5, 0.75, 1.0],
        }];
        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
