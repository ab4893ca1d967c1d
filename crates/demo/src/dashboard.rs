// File: crates/demo/src/dashboard.rs
// Summary: `dashboard` subcommand: gate, mount, refresh from the mock source, write panel SVGs.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use bastion_chart::{write_svg, ChartOptions};
use bastion_dashboard::{refresh_page, CancelToken, MockSource, PageState, PanelState, Principal, RefreshPolicy};

use crate::DashboardArgs;

pub async fn run(args: &DashboardArgs) -> Result<()> {
    let user = std::env::var("USER").unwrap_or_else(|_| "local".into());
    let principal = Principal::new(user, args.role);
    // Display-only check; a real deployment enforces this where the data is served.
    args.page.gate().check(&principal)?;

    let mut page = PageState::mount(args.page);
    let source = MockSource::for_page(&page, Duration::from_millis(args.latency_ms));
    let policy = RefreshPolicy { timeout: Duration::from_millis(args.timeout_ms) };

    let cancel = CancelToken::new();
    let on_interrupt = cancel.clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, cancelling refresh");
            on_interrupt.cancel();
        }
    });

    let results = refresh_page(&source, &mut page, policy, &cancel).await;
    watcher.abort();

    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    tracing::info!(page = %args.page, refreshed = results.len() - failed, failed, "refresh finished");

    let opts = ChartOptions::default();
    for panel in &page.panels {
        let path = panel_path(&args.out_dir, &page, panel);
        write_svg(&panel.scene(&opts), &path).with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {} ({:?})", path.display(), panel.status);
    }
    Ok(())
}

fn panel_path(dir: &Path, page: &PageState, panel: &PanelState) -> PathBuf {
    dir.join(format!("{}-{}.svg", page.kind, panel.id))
}
