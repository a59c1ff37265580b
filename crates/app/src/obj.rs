//! Wavefront OBJ export of a generated mesh.
//!
//! The data-side counterpart of the viewer's snapshot export: positions,
//! normals, and `v//vn` faces with 1-based indexing.

use rockview_core::Mesh;
use std::fmt::Write as _;
use std::io;
use std::path::Path;

/// Serializes a mesh as OBJ text.
pub fn mesh_to_obj(mesh: &Mesh) -> String {
    let mut out = String::new();
    for p in mesh.positions() {
        let _ = writeln!(out, "v {} {} {}", p.x, p.y, p.z);
    }
    for n in mesh.normals() {
        let _ = writeln!(out, "vn {} {} {}", n.x, n.y, n.z);
    }
    for tri in mesh.indices().chunks_exact(3) {
        let _ = writeln!(
            out,
            "f {a}//{a} {b}//{b} {c}//{c}",
            a = tri[0] + 1,
            b = tri[1] + 1,
            c = tri[2] + 1
        );
    }
    out
}

/// Writes a mesh as an OBJ file.
pub fn write_obj(mesh: &Mesh, path: &Path) -> io::Result<()> {
    std::fs::write(path, mesh_to_obj(mesh))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn triangle() -> Mesh {
        Mesh::from_parts(
            vec![Vec3::X, Vec3::Y, Vec3::Z],
            vec![Vec3::X, Vec3::Y, Vec3::Z],
            vec![0, 1, 2],
        )
        .unwrap()
    }

    #[test]
    fn obj_lists_vertices_normals_and_one_based_faces() {
        let obj = mesh_to_obj(&triangle());
        assert!(obj.contains("v 1 0 0"));
        assert!(obj.contains("vn 0 0 1"));
        assert!(obj.contains("f 1//1 2//2 3//3"));
    }

    #[test]
    fn obj_line_counts_match_mesh() {
        let mesh = Mesh::uv_sphere(1.0, 32, 16);
        let obj = mesh_to_obj(&mesh);
        let v = obj.lines().filter(|l| l.starts_with("v ")).count();
        let vn = obj.lines().filter(|l| l.starts_with("vn ")).count();
        let f = obj.lines().filter(|l| l.starts_with("f ")).count();
        assert_eq!(v, mesh.vertex_count());
        assert_eq!(vn, mesh.vertex_count());
        assert_eq!(f, mesh.triangle_count());
    }

    #[test]
    fn obj_face_indices_stay_in_range() {
        let mesh = Mesh::uv_sphere(1.0, 32, 16);
        let obj = mesh_to_obj(&mesh);
        let max = mesh.vertex_count();
        for line in obj.lines().filter(|l| l.starts_with("f ")) {
            for token in line.split_whitespace().skip(1) {
                let index: usize = token.split("//").next().unwrap().parse().unwrap();
                assert!(index >= 1 && index <= max, "face index {index} out of range");
            }
        }
    }
}
