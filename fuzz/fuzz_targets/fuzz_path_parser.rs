#![no_main]

use libfuzzer_sys::fuzz_target;
use svg2mesh::{ConversionConfig, Mesh, PathInterpreter, parse_path_data};

fuzz_target!(|data: &[u8]| {
    let Ok(d) = std::str::from_utf8(data) else {
        return;
    };

    // Decoding and interpreting must fail cleanly, never panic
    if let Ok(commands) = parse_path_data(d) {
        let config = ConversionConfig::default();
        let mut mesh = Mesh::new();
        let _ = PathInterpreter::new(&config).run(&mut mesh, &commands, d);
        assert_eq!(mesh.vertices.len() % 8, 0);
        assert_eq!(mesh.faces.len() % 6, 0);
    }
});
