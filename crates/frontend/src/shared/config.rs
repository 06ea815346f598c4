use contracts::shared::config::BehaviorConfig;
use web_sys::Element;

/// Attribute on a mount host carrying a JSON `BehaviorConfig` override.
pub const CONFIG_ATTR: &str = "data-config";

/// Read the host's `data-config`, falling back to defaults when the attribute
/// is absent or malformed.
pub fn load_host_config(host: &Element) -> BehaviorConfig {
    let Some(raw) = host.get_attribute(CONFIG_ATTR) else {
        return BehaviorConfig::default();
    };
    match BehaviorConfig::from_json(&raw) {
        Ok(config) => {
            log::debug!("Loaded {} from #{}", CONFIG_ATTR, host.id());
            config
        }
        Err(err) => {
            log::warn!(
                "Invalid {} on #{}: {}; using defaults",
                CONFIG_ATTR,
                host.id(),
                err
            );
            BehaviorConfig::default()
        }
    }
}
