//! Environment-driven shell settings.

/// Load the sample items before the first menu when truthy.
pub const SEED_VAR: &str = "STOCKROOM_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellConfig {
    pub seed_on_start: bool,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed_on_start = lookup(SEED_VAR)
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self { seed_on_start }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_off_by_default() {
        assert_eq!(ShellConfig::from_lookup(|_| None), ShellConfig::default());
    }

    #[test]
    fn seed_accepts_truthy_values() {
        for raw in ["1", "true", "YES", " True "] {
            let config = ShellConfig::from_lookup(|_| Some(raw.to_string()));
            assert!(config.seed_on_start, "{raw:?} should enable seeding");
        }
        let config = ShellConfig::from_lookup(|_| Some("0".to_string()));
        assert!(!config.seed_on_start);
    }
}
