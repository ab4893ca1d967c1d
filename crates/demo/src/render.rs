// File: crates/demo/src/render.rs
// Summary: `render` subcommand: series input, option layering, SVG/JSON/PNG output.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use bastion_chart::{render, write_svg, ChartConfig, ChartOptions, ColorToken, Encoding, Series};
use bastion_render_skia::SkiaRenderer;

use crate::RenderArgs;

pub fn run(args: &RenderArgs) -> Result<()> {
    let series = load_series(args)?;
    let config = match &args.config {
        Some(path) => ChartConfig::load(path).with_context(|| format!("reading config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    let (encoding, opts) = resolve(args, &config)?;

    let scene = render(&series, encoding, &opts);
    tracing::info!(%encoding, samples = series.len(), elements = scene.elements.len(), "chart laid out");

    write_svg(&scene, &args.out).with_context(|| format!("writing {}", args.out.display()))?;
    println!("Wrote {}", args.out.display());

    if let Some(path) = &args.json {
        ensure_parent(path)?;
        let text = serde_json::to_string_pretty(&scene)?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    if let Some(path) = &args.png {
        SkiaRenderer::default().render_png(&scene, path)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn load_series(args: &RenderArgs) -> Result<Series> {
    if let Some(raw) = &args.values {
        return raw.parse::<Series>().context("parsing --values");
    }
    match (&args.csv, &args.column) {
        (Some(path), Some(column)) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Series::from_csv_reader(file, column)
                .with_context(|| format!("reading column '{column}' from {}", path.display()))
        }
        _ => anyhow::bail!("either --values or --csv with --column is required"),
    }
}

/// Defaults, then the config file, then flags.
fn resolve(args: &RenderArgs, config: &ChartConfig) -> Result<(Encoding, ChartOptions)> {
    let encoding = match args.encoding {
        Some(e) => e,
        None => config.encoding()?.unwrap_or_default(),
    };

    let mut opts = config.to_options();
    if let Some(w) = args.width {
        opts.width = w;
    }
    if let Some(h) = args.height {
        opts.height = h;
    }
    if !(opts.width.is_finite() && opts.width > 0.0 && opts.height.is_finite() && opts.height > 0.0) {
        anyhow::bail!("width and height must be positive, got {}x{}", opts.width, opts.height);
    }
    if let Some(c) = &args.color {
        opts.color = ColorToken::parse_lossy(c);
    }
    if args.no_animate {
        opts.animate = false;
    }
    if let Some(t) = &args.title {
        opts.title = Some(t.clone());
    }
    Ok((encoding, opts))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> RenderArgs {
        RenderArgs {
            values: Some("1,2,3".into()),
            csv: None,
            column: None,
            encoding: None,
            color: None,
            width: None,
            height: None,
            no_animate: false,
            title: None,
            config: None,
            out: PathBuf::from("out.svg"),
            json: None,
            png: None,
        }
    }

    #[test]
    fn flags_override_config() {
        let cfg = ChartConfig::from_toml_str("[chart]\nwidth = 640\ncolor = \"green\"\nencoding = \"line\"\n").unwrap();
        let mut a = args();
        a.color = Some("cyan".into());
        a.no_animate = true;

        let (enc, opts) = resolve(&a, &cfg).unwrap();
        assert_eq!(enc, Encoding::Line);
        assert_eq!(opts.width, 640.0);
        assert_eq!(opts.color, ColorToken::Cyan);
        assert!(!opts.animate);

        a.encoding = Some(Encoding::Area);
        a.width = Some(300.0);
        let (enc, opts) = resolve(&a, &cfg).unwrap();
        assert_eq!(enc, Encoding::Area);
        assert_eq!(opts.width, 300.0);
    }

    #[test]
    fn defaults_without_config() {
        let (enc, opts) = resolve(&args(), &ChartConfig::default()).unwrap();
        assert_eq!(enc, Encoding::Bar);
        assert_eq!(opts, ChartOptions::default());
    }

    #[test]
    fn rejects_zero_width_flag() {
        let mut a = args();
        a.width = Some(0.0);
        assert!(resolve(&a, &ChartConfig::default()).is_err());
    }

    #[test]
    fn reads_sample_csv() {
        let mut a = args();
        a.values = None;
        a.csv = Some(PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/threats.csv")));
        a.column = Some("threats".into());
        let s = load_series(&a).unwrap();
        assert_eq!(s.len(), 12);
        assert_eq!(s.max(), 52.0);
    }

    #[test]
    fn bad_values_are_reported() {
        let mut a = args();
        a.values = Some("1, two, 3".into());
        assert!(load_series(&a).is_err());
    }
}
