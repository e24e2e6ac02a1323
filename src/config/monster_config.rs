// src/config/monster_config.rs

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fewest fractional digits a percentage contribution is printed with. The
/// small primes contribute shares far below 1e-30 %, so anything shorter
/// prints a wall of zeros with no information at all.
pub const MIN_PERCENTAGE_PRECISION: usize = 10;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Factorization report formatting
    pub report: ReportConfig,

    /// Demonstration output
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Fractional digits of each prime's percentage contribution (default: 10)
    pub percentage_precision: usize,

    /// Mantissa decimals in scientific notation (default: 2)
    pub scientific_precision: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Rows of the group order comparison shown by the utilities demo (default: 8)
    pub comparison_limit: usize,

    /// Maximal subgroups listed by the group demo (default: 5)
    pub subgroup_preview: usize,
}

impl Default for MonsterConfig {
    fn default() -> Self {
        MonsterConfig {
            log_level: "info".to_string(),
            report: ReportConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            percentage_precision: MIN_PERCENTAGE_PRECISION,
            scientific_precision: 2,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            comparison_limit: 8,
            subgroup_preview: 5,
        }
    }
}

impl ReportConfig {
    pub fn effective_percentage_precision(&self) -> usize {
        self.percentage_precision.max(MIN_PERCENTAGE_PRECISION)
    }
}

impl MonsterConfig {
    /// Load configuration with precedence: defaults → config file → env vars
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("monster.toml").exists() {
            builder = builder.add_source(File::with_name("monster.toml"));
        } else if Path::new("monster.yaml").exists() {
            builder = builder.add_source(File::with_name("monster.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_layered(path.as_ref(), Self::environment())
    }

    fn load_layered(path: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.exists() {
            builder = builder.add_source(File::from(path));
        }

        Self::finish_with(builder, environment)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("report.percentage_precision", MIN_PERCENTAGE_PRECISION as u64)?
            .set_default("report.scientific_precision", 2)?
            .set_default("demo.comparison_limit", 8)?
            .set_default("demo.subgroup_preview", 5)
    }

    /// Nested keys are separated by `__` because field names contain `_`:
    /// MONSTER_LOG_LEVEL, MONSTER_REPORT__PERCENTAGE_PRECISION, MONSTER_DEMO__SUBGROUP_PREVIEW
    fn environment() -> Environment {
        Environment::with_prefix("MONSTER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        Self::finish_with(builder, Self::environment())
    }

    fn finish_with(builder: ConfigBuilder<DefaultState>, environment: Environment) -> Result<Self, ConfigError> {
        let config = builder.add_source(environment).build()?;
        config.try_deserialize()
    }
}
