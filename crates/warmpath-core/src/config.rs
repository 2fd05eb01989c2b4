//! Layered TOML configuration.
//!
//! Precedence (highest wins):
//! 1. CLI flags / environment (`WARMPATH_DATA_DIR`), applied by the caller
//! 2. Project config: `<project>/.warmpath/config.toml`
//! 3. User config: `<config_dir>/warmpath/config.toml`
//! 4. Built-in defaults
//!
//! Layers are merged key-by-key, so a project file that only sets
//! `[influence] tolerance` keeps every other value from the layers below.
//! The defaults reproduce the reference scoring constants exactly.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG_PATH: &str = ".warmpath/config.toml";
pub const DATA_DIR_ENV: &str = "WARMPATH_DATA_DIR";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarmpathConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub influence: InfluenceConfig,
    #[serde(default)]
    pub multiplier: MultiplierWeights,
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub opportunities: OpportunityConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the snapshot files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding `contacts.json`, `relationships.json` and
    /// `interactions.json`. Relative paths resolve against the project root.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

impl DataConfig {
    /// Resolve the effective data directory.
    ///
    /// An explicit CLI path wins over the environment, which wins over the
    /// configured value.
    #[must_use]
    pub fn resolve_dir(
        &self,
        project_root: &Path,
        cli_override: Option<&Path>,
        env_dir: Option<String>,
    ) -> PathBuf {
        let chosen = cli_override
            .map(Path::to_path_buf)
            .or_else(|| env_dir.filter(|s| !s.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| self.dir.clone());

        if chosen.is_absolute() {
            chosen
        } else {
            project_root.join(chosen)
        }
    }
}

/// Power-iteration settings for the influence score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfluenceConfig {
    /// Number of propagation rounds. Default: 20.
    #[serde(default = "default_influence_iterations")]
    pub iterations: usize,
    /// Opt-in early stop: halt once the L1 change between rounds drops below
    /// this value. `None` (the default) always runs every round.
    #[serde(default)]
    pub tolerance: Option<f64>,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        Self {
            iterations: default_influence_iterations(),
            tolerance: None,
        }
    }
}

/// Weights of the composite network-multiplier score:
///
/// `M(v) = broker*B + holes*H + influence*(I / influence_scale)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierWeights {
    #[serde(default = "default_broker_weight")]
    pub broker: f64,
    #[serde(default = "default_holes_weight")]
    pub holes: f64,
    #[serde(default = "default_influence_weight")]
    pub influence: f64,
    #[serde(default = "default_influence_scale")]
    pub influence_scale: f64,
    /// Contacts must score strictly above this to be reported.
    #[serde(default = "default_multiplier_threshold")]
    pub threshold: f64,
}

impl Default for MultiplierWeights {
    fn default() -> Self {
        Self {
            broker: default_broker_weight(),
            holes: default_holes_weight(),
            influence: default_influence_weight(),
            influence_scale: default_influence_scale(),
            threshold: default_multiplier_threshold(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default = "default_max_paths")]
    pub max_results: usize,
    #[serde(default = "default_reach_degrees")]
    pub reach_degrees: usize,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_results: default_max_paths(),
            reach_degrees: default_reach_degrees(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityConfig {
    #[serde(default = "default_opportunity_limit")]
    pub limit: usize,
    #[serde(default = "default_opportunity_min_score")]
    pub min_score: u32,
}

impl Default for OpportunityConfig {
    fn default() -> Self {
        Self {
            limit: default_opportunity_limit(),
            min_score: default_opportunity_min_score(),
        }
    }
}

/// Section sizes of the aggregate network report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_top_multipliers")]
    pub top_multipliers: usize,
    #[serde(default = "default_top_section")]
    pub top_section: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_multipliers: default_top_multipliers(),
            top_section: default_top_section(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `pretty`, `text` or `json`. Unset means "pick from the terminal".
    #[serde(default)]
    pub format: Option<String>,
}

/// Load configuration for `project_root`, layering the user config below
/// the project config.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config(project_root: &Path) -> Result<WarmpathConfig> {
    let user_path = dirs::config_dir().map(|dir| dir.join("warmpath/config.toml"));
    load_config_layers(user_path.as_deref(), project_root)
}

/// Like [`load_config`] with an explicit user config location.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config_layers(user_path: Option<&Path>, project_root: &Path) -> Result<WarmpathConfig> {
    let mut merged = toml::Value::Table(toml::map::Map::new());

    if let Some(path) = user_path
        && let Some(layer) = read_layer(path)?
    {
        merge_toml(&mut merged, layer);
    }

    if let Some(layer) = read_layer(&project_root.join(PROJECT_CONFIG_PATH))? {
        merge_toml(&mut merged, layer);
    }

    let config: WarmpathConfig = merged
        .try_into()
        .context("Failed to interpret merged warmpath configuration")?;
    Ok(config)
}

fn read_layer(path: &Path) -> Result<Option<toml::Value>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let value = toml::from_str::<toml::Value>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded config layer");
    Ok(Some(value))
}

/// Deep-merge `overlay` into `base`: tables merge per key, anything else is
/// replaced.
fn merge_toml(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

const fn default_influence_iterations() -> usize {
    20
}

const fn default_broker_weight() -> f64 {
    0.4
}

const fn default_holes_weight() -> f64 {
    0.4
}

const fn default_influence_weight() -> f64 {
    0.2
}

const fn default_influence_scale() -> f64 {
    5.0
}

const fn default_multiplier_threshold() -> f64 {
    0.1
}

const fn default_max_depth() -> usize {
    2
}

const fn default_max_paths() -> usize {
    10
}

const fn default_reach_degrees() -> usize {
    2
}

const fn default_opportunity_limit() -> usize {
    20
}

const fn default_opportunity_min_score() -> u32 {
    2
}

const fn default_top_multipliers() -> usize {
    10
}

const fn default_top_section() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("parent dir must be created");
        }
        std::fs::write(path, content).expect("config must be written");
    }

    #[test]
    fn missing_configs_use_defaults() {
        let root = tempfile::tempdir().expect("tempdir");
        let cfg = load_config_layers(None, root.path()).expect("load should succeed");

        assert_eq!(cfg, WarmpathConfig::default());
        assert_eq!(cfg.influence.iterations, 20);
        assert!(cfg.influence.tolerance.is_none());
        assert!((cfg.multiplier.broker - 0.4).abs() < f64::EPSILON);
        assert!((cfg.multiplier.threshold - 0.1).abs() < f64::EPSILON);
        assert_eq!(cfg.paths.max_results, 10);
        assert_eq!(cfg.opportunities.limit, 20);
        assert_eq!(cfg.data.dir, PathBuf::from("data"));
    }

    #[test]
    fn project_layer_overrides_user_layer_per_key() {
        let root = tempfile::tempdir().expect("tempdir");
        let user = root.path().join("user/config.toml");
        write(
            &user,
            "[influence]\niterations = 50\ntolerance = 0.001\n\n[paths]\nmax_depth = 3\n",
        );
        write(
            &root.path().join(PROJECT_CONFIG_PATH),
            "[influence]\niterations = 30\n",
        );

        let cfg = load_config_layers(Some(&user), root.path()).expect("load should succeed");

        assert_eq!(cfg.influence.iterations, 30);
        assert_eq!(cfg.influence.tolerance, Some(0.001));
        assert_eq!(cfg.paths.max_depth, 3);
        assert_eq!(cfg.paths.max_results, 10);
    }

    #[test]
    fn invalid_project_config_is_an_error() {
        let root = tempfile::tempdir().expect("tempdir");
        write(&root.path().join(PROJECT_CONFIG_PATH), "[influence\n");

        let err = load_config_layers(None, root.path()).expect_err("parse must fail");
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn data_dir_resolution_precedence() {
        let data = DataConfig::default();
        let root = Path::new("/srv/project");

        assert_eq!(
            data.resolve_dir(root, None, None),
            PathBuf::from("/srv/project/data")
        );
        assert_eq!(
            data.resolve_dir(root, None, Some("/exports/crm".to_string())),
            PathBuf::from("/exports/crm")
        );
        assert_eq!(
            data.resolve_dir(root, Some(Path::new("snap")), Some("/exports/crm".to_string())),
            PathBuf::from("/srv/project/snap")
        );
        assert_eq!(
            data.resolve_dir(root, None, Some("   ".to_string())),
            PathBuf::from("/srv/project/data")
        );
    }
}
