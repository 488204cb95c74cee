use printtrace::{animation, mesh_document};

const SOURCE: &str = "\
M104 S200
G28
G1 X0 Y0 Z0.2 E1
G1 X20 Y0 E2
G1 X20 Y20 E3
G1 X0 Y20 E4
G1 X0 Y0 E5
G1 Z0.4
G1 X20 Y0 E6
G1 X20 Y20 E7
";

#[test]
fn test_both_artifacts_from_one_source() {
    let obj = mesh_document(SOURCE).unwrap();
    let gif = animation(SOURCE).unwrap();

    assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 8);
    assert_eq!(obj.lines().filter(|l| l.starts_with("l ")).count(), 7);
    assert!(gif.starts_with(b"GIF89a"));
}

#[test]
fn test_artifacts_persist_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let obj_path = dir.path().join("model.obj");
    let gif_path = dir.path().join("model_animation.gif");

    std::fs::write(&obj_path, mesh_document(SOURCE).unwrap()).unwrap();
    std::fs::write(&gif_path, animation(SOURCE).unwrap()).unwrap();

    let reread = std::fs::read_to_string(&obj_path).unwrap();
    assert_eq!(reread, mesh_document(SOURCE).unwrap());
    assert!(std::fs::metadata(&gif_path).unwrap().len() > 6);
}
