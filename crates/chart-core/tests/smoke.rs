// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end smoke test: series text -> scene -> SVG file on disk.

use bastion_chart::{render, to_svg, write_svg, ChartOptions, Encoding, Series};

#[test]
fn render_smoke_svg() {
    let series: Series = "23,31,28,35,42,38,45,52,48,41,35,29".parse().expect("parse series");
    let opts = ChartOptions::default().with_color("cyan").with_title("Threats blocked");

    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    for encoding in Encoding::ALL {
        let scene = render(&series, encoding, &opts);
        assert!(!scene.is_empty());
        write_svg(&scene, &out).expect("write svg");
        let meta = std::fs::metadata(&out).expect("output exists");
        assert!(meta.len() > 0, "svg should be non-empty");
    }

    // Also verify the in-memory API works
    let text = to_svg(&render(&series, Encoding::Bar, &opts));
    assert!(text.starts_with("<svg "), "should be an svg document");
    assert!(text.contains("<title>Threats blocked</title>"));
    assert!(text.ends_with("</svg>"));
}
