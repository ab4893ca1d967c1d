// File: crates/dashboard/src/page.rs
// Summary: Page kinds and their mounted panel sets.

//! Page-scoped dashboard state
//!
//! Each page builds its panels when mounted and owns them until it is
//! dropped. Nothing is shared between pages.

use std::fmt;
use std::str::FromStr;

use bastion_chart::{ColorToken, Encoding};
use serde::{Deserialize, Serialize};

use crate::access::{Role, ViewGate};
use crate::panel::PanelState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Security,
    Fraud,
    Quantum,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::Security, PageKind::Fraud, PageKind::Quantum];

    pub fn name(self) -> &'static str {
        match self {
            PageKind::Security => "security",
            PageKind::Fraud => "fraud",
            PageKind::Quantum => "quantum",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageKind::Security => "Security Operations",
            PageKind::Fraud => "Fraud Intelligence",
            PageKind::Quantum => "Quantum Defense",
        }
    }

    /// Role needed to see the page. Only decides what gets drawn.
    pub fn gate(self) -> ViewGate {
        match self {
            PageKind::Security => ViewGate::require(Role::Viewer),
            PageKind::Fraud => ViewGate::require(Role::Analyst),
            PageKind::Quantum => ViewGate::require(Role::SuperAdmin),
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PageKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown page: {s} (expected security, fraud or quantum)"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    pub kind: PageKind,
    pub panels: Vec<PanelState>,
}

impl PageState {
    /// Build the page with its sample series.
    pub fn mount(kind: PageKind) -> Self {
        let panels = match kind {
            PageKind::Security => vec![
                PanelState::new(
                    "threats-blocked",
                    "Threats blocked per hour",
                    Encoding::Bar,
                    ColorToken::Red,
                    vec![23.0, 31.0, 28.0, 35.0, 42.0, 38.0, 45.0, 52.0, 48.0, 41.0, 35.0, 29.0],
                ),
                PanelState::new(
                    "network-traffic",
                    "Network traffic (Gbps)",
                    Encoding::Area,
                    ColorToken::Cyan,
                    vec![4.2, 5.1, 4.8, 6.3, 7.9, 7.1, 8.4, 9.2, 8.7, 7.5],
                ),
                PanelState::new(
                    "incident-response",
                    "Mean response time (min)",
                    Encoding::Line,
                    ColorToken::Blue,
                    vec![18.0, 16.0, 17.0, 14.0, 12.0, 13.0, 11.0, 9.0],
                ),
            ],
            PageKind::Fraud => vec![
                PanelState::new(
                    "fraud-attempts",
                    "Fraud attempts",
                    Encoding::Bar,
                    ColorToken::Purple,
                    vec![12.0, 19.0, 15.0, 22.0, 28.0, 24.0, 31.0],
                ),
                PanelState::new(
                    "risk-score",
                    "Average risk score",
                    Encoding::Line,
                    ColorToken::Red,
                    vec![62.0, 58.0, 71.0, 66.0, 74.0, 69.0, 77.0, 72.0],
                ),
                PanelState::new(
                    "recovered",
                    "Recovered funds (k)",
                    Encoding::Area,
                    ColorToken::Green,
                    vec![120.0, 135.0, 128.0, 150.0, 162.0, 158.0, 171.0],
                ),
            ],
            PageKind::Quantum => vec![
                PanelState::new(
                    "qkd-key-rate",
                    "QKD key rate (kbps)",
                    Encoding::Area,
                    ColorToken::Purple,
                    vec![2.1, 2.4, 2.3, 2.8, 3.1, 2.9, 3.4, 3.6],
                ),
                PanelState::new(
                    "pqc-migration",
                    "PQC migration (%)",
                    Encoding::Bar,
                    ColorToken::Green,
                    vec![15.0, 22.0, 31.0, 38.0, 47.0, 55.0],
                ),
                PanelState::new(
                    "entropy-health",
                    "Entropy pool health",
                    Encoding::Line,
                    ColorToken::Cyan,
                    vec![98.0, 97.5, 99.1, 98.4, 99.6, 98.9],
                ),
            ],
        };
        tracing::debug!(page = %kind, panels = panels.len(), "page mounted");
        Self { kind, panels }
    }

    pub fn panel(&self, id: &str) -> Option<&PanelState> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn panel_mut(&mut self, id: &str) -> Option<&mut PanelState> {
        self.panels.iter_mut().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Principal;

    #[test]
    fn mount_is_fresh_each_time() {
        let mut a = PageState::mount(PageKind::Security);
        let b = PageState::mount(PageKind::Security);
        assert_eq!(a, b);
        a.panels[0].series = vec![1.0].into();
        assert_ne!(a, PageState::mount(PageKind::Security));
        assert_eq!(b, PageState::mount(PageKind::Security));
    }

    #[test]
    fn every_page_has_idle_panels_with_unique_ids() {
        for kind in PageKind::ALL {
            let page = PageState::mount(kind);
            assert!(!page.panels.is_empty());
            let mut ids: Vec<&str> = page.panels.iter().map(|p| p.id.as_str()).collect();
            let n = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), n, "duplicate panel id on {kind}");
            assert!(page.panels.iter().all(|p| p.refreshed_at.is_none() && !p.series.is_empty()));
        }
    }

    #[test]
    fn parse_page_kind() {
        assert_eq!("Quantum".parse::<PageKind>().unwrap(), PageKind::Quantum);
        assert!("billing".parse::<PageKind>().is_err());
    }

    #[test]
    fn quantum_page_is_superadmin_only() {
        let gate = PageKind::Quantum.gate();
        assert!(gate.check(&Principal::new("ana", Role::Admin)).is_err());
        assert!(gate.check(&Principal::new("root", Role::SuperAdmin)).is_ok());
        assert!(PageKind::Security.gate().allows(&Principal::new("v", Role::Viewer)));
    }
}
