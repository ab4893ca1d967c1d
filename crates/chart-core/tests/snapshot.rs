// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden SVG snapshots with bless flow, one per encoding.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, compares text for exact match; a missing snapshot fails.

use bastion_chart::{render, to_svg, ChartOptions, Encoding, Series};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, text: &str) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, text).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), text.len());
        return;
    }
    let want = std::fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless", path.display()));
    assert_eq!(text, want.trim_end(), "SVG differs from golden snapshot: {}", path.display());
}

fn render_svg(encoding: Encoding) -> String {
    let series = Series::new(vec![12.0, 19.0, 15.0, 27.0, 22.0, 31.0, 26.0]);
    let opts = ChartOptions::default().with_color("purple").with_title("Fraud attempts");
    to_svg(&render(&series, encoding, &opts))
}

#[test]
fn golden_bar() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/bar.svg");
    write_or_compare(&path, &render_svg(Encoding::Bar));
}

#[test]
fn golden_line() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/line.svg");
    write_or_compare(&path, &render_svg(Encoding::Line));
}

#[test]
fn golden_area() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/area.svg");
    write_or_compare(&path, &render_svg(Encoding::Area));
}
