//! Row-major 4x4 matrix helpers.
//!
//! Matrices are stored row-major, so they go through
//! `uniform_matrix_4_f32_slice` with `transpose = true`.

pub type Mat4x4 = [f32; 16];

pub fn mat4x4_identity() -> Mat4x4 {
    [
      1.0, 0.0, 0.0, 0.0,
      0.0, 1.0, 0.0, 0.0,
      0.0, 0.0, 1.0, 0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_translate(x: f32, y: f32, z: f32) -> Mat4x4 {
    [
      1.0, 0.0, 0.0,  x,
      0.0, 1.0, 0.0,  y,
      0.0, 0.0, 1.0,  z,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_rot_x(angle: f32) -> Mat4x4 {
    let c = angle.cos();
    let s = angle.sin();

    [
      1.0, 0.0, 0.0, 0.0,
      0.0,  c,  -s,  0.0,
      0.0,  s,   c,  0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_rot_y(angle: f32) -> Mat4x4 {
    let c = angle.cos();
    let s = angle.sin();

    [
       c,  0.0, -s,  0.0,
      0.0, 1.0, 0.0, 0.0,
       s,  0.0,  c,  0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_rot_z(angle: f32) -> Mat4x4 {
    let c = angle.cos();
    let s = angle.sin();

    [
       c,  -s,  0.0, 0.0,
       s,   c,  0.0, 0.0,
      0.0, 0.0, 1.0, 0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_scale(x: f32, y: f32, z: f32) -> Mat4x4 {
    [
       x,  0.0, 0.0, 0.0,
      0.0,  y,  0.0, 0.0,
      0.0, 0.0,  z,  0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn vec4_dot(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

pub fn mat4x4_row(mat: &Mat4x4, row: usize) -> [f32; 4] {
    let start_idx = row * 4;
    [mat[start_idx], mat[start_idx + 1], mat[start_idx + 2], mat[start_idx + 3]]
}

pub fn mat4x4_col(mat: &Mat4x4, col: usize) -> [f32; 4] {
    [mat[col], mat[4 + col], mat[8 + col], mat[12 + col]]
}

pub fn mat4x4_mul(a: Mat4x4, b: Mat4x4) -> Mat4x4 {
    let mut ret = [0.0; 16];
    for i in 0..16 {
        let row = i / 4;
        let col = i % 4;
        let a_row = mat4x4_row(&a, row);
        let b_col = mat4x4_col(&b, col);
        ret[i] = vec4_dot(a_row, b_col);
    }
    ret
}

/// Transforms a point (w = 1) and performs the perspective divide.
pub fn mat4x4_transform_point(mat: &Mat4x4, point: [f32; 3]) -> [f32; 3] {
    let v = [point[0], point[1], point[2], 1.0];
    let x = vec4_dot(mat4x4_row(mat, 0), v);
    let y = vec4_dot(mat4x4_row(mat, 1), v);
    let z = vec4_dot(mat4x4_row(mat, 2), v);
    let w = vec4_dot(mat4x4_row(mat, 3), v);
    [x / w, y / w, z / w]
}

pub fn mat4x4_perspective(fov_y_radians: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4x4 {
    let f = 1.0 / (fov_y_radians * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect_ratio, 0.0, 0.0,                          0.0,
        0.0,              f,   0.0,                          0.0,
        0.0,              0.0, (near + far) * range_inv,     (2.0 * near * far) * range_inv,
        0.0,              0.0, -1.0,                         0.0,
    ]
}

/// Composes a model matrix as translation * rotation * scale, so scale
/// applies first and translation last.
pub fn compose_trs(translation: Mat4x4, rotation: Mat4x4, scale: Mat4x4) -> Mat4x4 {
    mat4x4_mul(translation, mat4x4_mul(rotation, scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec3_eq(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < EPS, "component {}: {} != {}", i, a[i], b[i]);
        }
    }

    #[test]
    fn identity_is_multiplicative_neutral() {
        let m = mat4x4_translate(1.0, -2.0, 3.0);
        assert_eq!(mat4x4_mul(mat4x4_identity(), m), m);
        assert_eq!(mat4x4_mul(m, mat4x4_identity()), m);
    }

    #[test]
    fn translate_moves_point() {
        let m = mat4x4_translate(1.0, 2.0, 3.0);
        assert_vec3_eq(mat4x4_transform_point(&m, [0.0, 0.0, 0.0]), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn scale_stretches_point() {
        let m = mat4x4_scale(2.0, 3.0, 4.0);
        assert_vec3_eq(mat4x4_transform_point(&m, [1.0, 1.0, 1.0]), [2.0, 3.0, 4.0]);
    }

    #[test]
    fn rot_z_quarter_turn() {
        let m = mat4x4_rot_z(std::f32::consts::FRAC_PI_2);
        assert_vec3_eq(mat4x4_transform_point(&m, [1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn trs_applies_scale_then_rotation_then_translation() {
        // Probe point (1, 0, 0): scale x2 -> (2, 0, 0), rotate z 90deg ->
        // (0, 2, 0), translate -> (3, 2, 0). Any other ordering lands
        // somewhere else.
        let m = compose_trs(
            mat4x4_translate(3.0, 0.0, 0.0),
            mat4x4_rot_z(std::f32::consts::FRAC_PI_2),
            mat4x4_scale(2.0, 2.0, 2.0),
        );
        assert_vec3_eq(mat4x4_transform_point(&m, [1.0, 0.0, 0.0]), [3.0, 2.0, 0.0]);
    }

    #[test]
    fn perspective_maps_near_plane_to_minus_one() {
        let near = 0.1;
        let far = 100.0;
        let m = mat4x4_perspective(std::f32::consts::FRAC_PI_4, 1.0, near, far);
        let on_near = mat4x4_transform_point(&m, [0.0, 0.0, -near]);
        let on_far = mat4x4_transform_point(&m, [0.0, 0.0, -far]);
        assert!((on_near[2] + 1.0).abs() < EPS);
        assert!((on_far[2] - 1.0).abs() < 1e-3);
    }
}
