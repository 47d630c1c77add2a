use models::LevelBounds;
use serde::Deserialize;

/// Game balance knobs. The defaults describe the current five level skill
/// system; a TOML file only needs the fields it overrides.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct InterpolatorConfig {
    pub min_level: u8,
    pub max_level: u8,
    pub min_upgrade_values: usize,
    pub closeness_tolerance: f64,
    pub revival_skill_index: usize,
    pub total_skills: usize,
}

impl Default for InterpolatorConfig {
    fn default() -> Self {
        Self {
            min_level: 1,
            max_level: 5,
            min_upgrade_values: 5,
            closeness_tolerance: 0.1,
            revival_skill_index: 4,
            total_skills: 5,
        }
    }
}

impl InterpolatorConfig {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| anyhow::anyhow!("invalid config: {e}"))?;
        if config.min_level == 0 || config.min_level > config.max_level {
            anyhow::bail!(
                "invalid level range {}..={}",
                config.min_level,
                config.max_level
            );
        }
        Ok(config)
    }

    pub fn level_bounds(&self) -> LevelBounds {
        LevelBounds {
            min: self.min_level,
            max: self.max_level,
        }
    }
}
