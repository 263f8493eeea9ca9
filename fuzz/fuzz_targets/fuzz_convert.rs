#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(svg) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(mesh) = svg2mesh::convert_str(svg) {
        let count = mesh.vertices.len();
        assert_eq!(mesh.faces.len() * 8, count * 6);
        assert!(mesh
            .faces
            .iter()
            .flat_map(|f| f.indices)
            .all(|i| i >= 1 && i <= count));
    }
});
