//! The three hard-coded scenes and their static transforms.
//!
//! Every piece of per-variant behavior lives here as data: vertex and index
//! arrays, clear state, and the transform rebuilt each frame from constants
//! (only the projection depends on the window's aspect ratio).

use crate::math::{
    compose_trs, mat4x4_identity, mat4x4_mul, mat4x4_perspective, mat4x4_rot_x, mat4x4_rot_y,
    mat4x4_scale, mat4x4_translate, Mat4x4,
};
use crate::mesh::Vertex;

const fn vertex(position: [f32; 3], color: [f32; 4]) -> Vertex {
    Vertex { position, color }
}

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

const TRIANGLE_VERTICES: [Vertex; 3] = [
    vertex([0.0, 0.5, 0.0], RED),
    vertex([-0.5, -0.5, 0.0], GREEN),
    vertex([0.5, -0.5, 0.0], BLUE),
];
const TRIANGLE_INDICES: [u16; 3] = [0, 1, 2];

// Two triangles along the bottom of the screen sharing vertex 2.
const QUAD_VERTICES: [Vertex; 5] = [
    vertex([-0.5, 0.0, 0.0], RED),   // top of the left triangle
    vertex([-1.0, -1.0, 0.0], BLUE), // bottom-left of the screen
    vertex([0.0, -1.0, 0.0], GREEN), // bottom-center, shared
    vertex([0.5, 0.0, 0.0], RED),    // top of the right triangle
    vertex([1.0, -1.0, 0.0], GREEN), // bottom-right of the screen
];
const QUAD_INDICES: [u16; 6] = [0, 1, 2, 3, 2, 4];

// Four base corners (counter-clockwise seen from above) plus the apex.
const PYRAMID_VERTICES: [Vertex; 5] = [
    vertex([-0.5, -0.5, 0.5], RED),    // front-left
    vertex([0.5, -0.5, 0.5], GREEN),   // front-right
    vertex([0.5, -0.5, -0.5], BLUE),   // back-right
    vertex([-0.5, -0.5, -0.5], YELLOW), // back-left
    vertex([0.0, 0.5, 0.0], WHITE),    // apex
];
const PYRAMID_INDICES: [u16; 18] = [
    0, 1, 4, // front face
    1, 2, 4, // right face
    2, 3, 4, // back face
    3, 0, 4, // left face
    0, 2, 1, // base
    0, 3, 2,
];

const FOV_Y_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

/// One of the three tutorial variants. Selecting a scene fixes the window
/// title, the mesh data, and the transform; nothing else differs between
/// the programs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Triangle,
    Pyramid,
    Quad,
}

impl Scene {
    pub const ALL: [Scene; 3] = [Scene::Triangle, Scene::Pyramid, Scene::Quad];

    pub fn window_title(self) -> &'static str {
        match self {
            Scene::Triangle => "Tutorial: triangle",
            Scene::Pyramid => "Tutorial: pyramid",
            Scene::Quad => "Tutorial: quad",
        }
    }

    pub fn vertices(self) -> &'static [Vertex] {
        match self {
            Scene::Triangle => &TRIANGLE_VERTICES,
            Scene::Pyramid => &PYRAMID_VERTICES,
            Scene::Quad => &QUAD_VERTICES,
        }
    }

    pub fn indices(self) -> &'static [u16] {
        match self {
            Scene::Triangle => &TRIANGLE_INDICES,
            Scene::Pyramid => &PYRAMID_INDICES,
            Scene::Quad => &QUAD_INDICES,
        }
    }

    pub fn clear_color(self) -> [f32; 4] {
        [0.0, 0.0, 0.0, 1.0]
    }

    /// Only the pyramid has geometry at more than one depth.
    pub fn uses_depth(self) -> bool {
        matches!(self, Scene::Pyramid)
    }

    /// The static transform uploaded every frame. The 2D variants draw in
    /// normalized device coordinates; the pyramid gets a full
    /// model/view/projection built from constants.
    pub fn transform(self, aspect_ratio: f32) -> Mat4x4 {
        match self {
            Scene::Triangle | Scene::Quad => mat4x4_identity(),
            Scene::Pyramid => {
                let model = compose_trs(
                    mat4x4_translate(0.0, -0.1, 0.0),
                    mat4x4_mul(mat4x4_rot_x(-0.3), mat4x4_rot_y(0.6)),
                    mat4x4_scale(1.2, 1.2, 1.2),
                );
                let view = mat4x4_translate(0.0, 0.0, -3.0);
                let projection =
                    mat4x4_perspective(FOV_Y_RADIANS, aspect_ratio, NEAR_PLANE, FAR_PLANE);
                mat4x4_mul(projection, mat4x4_mul(view, model))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::mat4x4_transform_point;

    #[test]
    fn indices_reference_valid_vertices() {
        for scene in Scene::ALL {
            let vertex_count = scene.vertices().len();
            for &index in scene.indices() {
                assert!(
                    (index as usize) < vertex_count,
                    "{:?}: index {} out of range ({} vertices)",
                    scene,
                    index,
                    vertex_count
                );
            }
        }
    }

    #[test]
    fn index_counts_are_whole_triangles() {
        for scene in Scene::ALL {
            assert_eq!(scene.indices().len() % 3, 0, "{:?}", scene);
        }
    }

    #[test]
    fn quad_shares_bottom_center_vertex() {
        let shared = QUAD_INDICES.iter().filter(|&&i| i == 2).count();
        assert_eq!(shared, 2);
    }

    #[test]
    fn pyramid_uses_every_vertex() {
        for v in 0..PYRAMID_VERTICES.len() as u16 {
            assert!(PYRAMID_INDICES.contains(&v), "vertex {} unused", v);
        }
    }

    #[test]
    fn flat_variants_use_identity_transform() {
        assert_eq!(Scene::Triangle.transform(1.0), mat4x4_identity());
        assert_eq!(Scene::Quad.transform(1.0), mat4x4_identity());
    }

    #[test]
    fn pyramid_apex_lands_inside_clip_volume() {
        let transform = Scene::Pyramid.transform(800.0 / 600.0);
        let apex = PYRAMID_VERTICES[4].position;
        let clip = mat4x4_transform_point(&transform, apex);
        for (i, c) in clip.iter().enumerate() {
            assert!(c.abs() <= 1.0, "clip component {} = {}", i, c);
        }
    }

    #[test]
    fn only_pyramid_needs_depth() {
        assert!(Scene::Pyramid.uses_depth());
        assert!(!Scene::Triangle.uses_depth());
        assert!(!Scene::Quad.uses_depth());
    }
}
