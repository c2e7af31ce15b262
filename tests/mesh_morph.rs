mod test_globals;

use scene_rigs::mesh::{Face, ObjMesh};

use test_globals::write_temp_file;

/// Octahedron: the coarsest mesh whose vertices all lie on the unit sphere.
const OCTAHEDRON: &str = "\
# six poles
v 1 0 0
v -1 0 0
v 0 1 0
v 0 -1 0
v 0 0 1
v 0 0 -1
f 1 3 5
f 3 2 5
f 2 4 5
f 4 1 5
f 3 1 6
f 2 3 6
f 4 2 6
f 1 4 6
";

#[test]
fn file_morph_writes_obj_output() {
    let input = write_temp_file("octahedron.obj", OCTAHEDRON);
    let output = std::env::temp_dir().join(format!("scene_rigs_{}_octahedron_out.obj", std::process::id()));

    let mut mesh = ObjMesh::from_file(&input).unwrap();
    assert_eq!(mesh.to_string(), format!("{}, Vertex count: 6, Face count: 8", input.file_stem().unwrap().to_string_lossy()));
    mesh.morph_to_cube();
    mesh.write_to_file(&output).unwrap();

    let written = ObjMesh::from_file(&output).unwrap();
    assert_eq!(written.vertices, mesh.vertices);
    assert_eq!(written.faces[0], Face(1, 3, 5));
    assert_eq!(std::fs::read_to_string(&output).unwrap().lines().next(), Some("s 0"));

    std::fs::remove_file(input).ok();
    std::fs::remove_file(output).ok();
}

#[test]
fn poles_do_not_move() {
    let mut mesh = ObjMesh::parse("octahedron", OCTAHEDRON).unwrap();
    let before = mesh.vertices.clone();
    mesh.morph_to_cube();
    assert_eq!(mesh.vertices, before);
}

#[test]
fn missing_input_is_a_read_error() {
    let result = ObjMesh::from_file(std::path::Path::new("/nonexistent/scene_rigs/sphere.obj"));
    assert!(result.is_err());
}
