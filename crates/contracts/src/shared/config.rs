use serde::Deserialize;

use crate::domain::a001_nav_menu::MOBILE_BREAKPOINT_PX;
use crate::domain::a002_volunteer_form::aggregate::INTEREST_PLACEHOLDER;

/// Tunables of the page behaviors.
///
/// Read from the `data-config` attribute of a mount host; every key is
/// optional and falls back to the value below.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BehaviorConfig {
    pub mobile_breakpoint_px: f64,
    pub success_notice_ms: u32,
    pub error_notice_ms: u32,
    pub interest_placeholder: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            success_notice_ms: 10_000,
            error_notice_ms: 5_000,
            interest_placeholder: INTEREST_PLACEHOLDER.to_string(),
        }
    }
}

impl BehaviorConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: BehaviorConfig = serde_json::from_str(raw)?;
        if !(config.mobile_breakpoint_px.is_finite() && config.mobile_breakpoint_px >= 0.0) {
            anyhow::bail!(
                "mobile_breakpoint_px must be a non-negative number, got {}",
                config.mobile_breakpoint_px
            );
        }
        Ok(config)
    }
}
