use crate::error::{Result, SeedRateError};
use crate::models::{AreaUnit, PlantingMethod, VarietyDescriptor};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub varieties: Vec<VarietyProfile>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub unit: AreaUnit,
    #[serde(default = "default_planting_method")]
    pub planting_method: PlantingMethod,
}

fn default_planting_method() -> PlantingMethod {
    PlantingMethod::DirectSeeding
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            unit: AreaUnit::Hectares,
            planting_method: default_planting_method(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A named entry in the local variety catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VarietyProfile {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub variety_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grain_shape: Option<String>,
}

impl VarietyProfile {
    pub fn descriptor(&self) -> VarietyDescriptor {
        let descriptor = VarietyDescriptor {
            variety_type: self.variety_type.clone(),
            characteristics: None,
        };
        match &self.grain_shape {
            Some(shape) => descriptor.with_grain_shape(shape.clone()),
            None => descriptor,
        }
    }
}

impl Config {
    /// Load configuration. A missing file is not an error: the calculator
    /// works without any configuration, so defaults are used.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(SeedRateError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| SeedRateError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| SeedRateError::Config(format!("Failed to parse config: {}", e)))?;

        tracing::debug!(path = %path.display(), varieties = config.varieties.len(), "Loaded config");
        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Try XDG config directory
        let xdg_config = dirs::config_dir()?.join("seedrate").join("config.yaml");
        xdg_config.exists().then_some(xdg_config)
    }

    /// Default path for writing new config files (~/.config/seedrate/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SeedRateError::Config("Cannot determine config directory".into()))?
            .join("seedrate");
        Ok(config_dir.join("config.yaml"))
    }

    /// Case-insensitive lookup in the variety catalog.
    pub fn find_variety(&self, name: &str) -> Option<&VarietyProfile> {
        let name = name.trim();
        self.varieties
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(name))
    }

    /// Catalog sanity checks; returns one message per problem.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if !self.defaults.unit.is_recognized() {
            problems.push(format!(
                "Default unit '{}' is not recognized and will be read as hectares",
                self.defaults.unit
            ));
        }
        if !self.defaults.planting_method.is_supported() {
            problems.push(format!(
                "Default planting method '{}' has no seeding rate",
                self.defaults.planting_method
            ));
        }

        for (i, variety) in self.varieties.iter().enumerate() {
            if variety.name.trim().is_empty() {
                problems.push(format!("Variety #{} has an empty name", i + 1));
            }
            if variety.variety_type.is_none() && variety.grain_shape.is_none() {
                problems.push(format!(
                    "Variety '{}' has neither type nor grain_shape and will classify as short",
                    variety.name
                ));
            }
            if self.varieties[..i]
                .iter()
                .any(|v| v.name.eq_ignore_ascii_case(&variety.name))
            {
                problems.push(format!("Variety '{}' is listed more than once", variety.name));
            }
        }

        problems
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up SeedRate!");
        println!();

        let units = AreaUnit::all();
        let unit_labels: Vec<&str> = units.iter().map(|u| u.as_str()).collect();
        let unit_idx = Select::new()
            .with_prompt("  Default area unit")
            .items(&unit_labels)
            .default(0)
            .interact()
            .map_err(|e| SeedRateError::Config(format!("Input error: {}", e)))?;

        let methods = PlantingMethod::supported();
        let method_labels: Vec<&str> = methods.iter().map(|m| m.display_name()).collect();
        let method_idx = Select::new()
            .with_prompt("  Default planting method")
            .items(&method_labels)
            .default(0)
            .interact()
            .map_err(|e| SeedRateError::Config(format!("Input error: {}", e)))?;

        println!();
        println!("Variety catalog (leave name blank to finish)");
        let mut varieties = Vec::new();
        loop {
            let name: String = Input::new()
                .with_prompt("  Variety name")
                .default(String::new())
                .allow_empty(true)
                .interact_text()
                .map_err(|e| SeedRateError::Config(format!("Input error: {}", e)))?;
            if name.trim().is_empty() {
                break;
            }

            let variety_type: String = Input::new()
                .with_prompt("  Maturity type (e.g. Long Duration)")
                .default(String::new())
                .allow_empty(true)
                .interact_text()
                .map_err(|e| SeedRateError::Config(format!("Input error: {}", e)))?;

            let grain_shape: String = Input::new()
                .with_prompt("  Grain shape (optional)")
                .default(String::new())
                .allow_empty(true)
                .interact_text()
                .map_err(|e| SeedRateError::Config(format!("Input error: {}", e)))?;

            varieties.push(VarietyProfile {
                name: name.trim().to_string(),
                variety_type: Some(variety_type).filter(|s| !s.trim().is_empty()),
                grain_shape: Some(grain_shape).filter(|s| !s.trim().is_empty()),
            });
        }

        println!();

        let config = Config {
            defaults: DefaultsConfig {
                unit: units[unit_idx].clone(),
                planting_method: methods[method_idx].clone(),
            },
            output: OutputConfig::default(),
            varieties,
        };

        let config_path = Self::default_config_path()?;
        config.write_to(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| SeedRateError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# SeedRate Configuration\n# Generated by `seedrate init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let Ok(re) = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") else {
            return result;
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::classify_variety_length;
    use crate::models::VarietyLength;
    use std::io::Write;

    const SAMPLE: &str = r#"
defaults:
  unit: acres
  planting_method: parachute_seeding
output:
  format: json
  pretty: true
varieties:
  - name: Swarna
    type: Long Duration
  - name: IR64
    type: Medium Duration
    grain_shape: Long Slender
  - name: Basmati 370
    grain_shape: long
"#;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_sample_config() {
        let file = write_temp(SAMPLE);
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.defaults.unit, AreaUnit::Acres);
        assert_eq!(config.defaults.planting_method, PlantingMethod::ParachuteSeeding);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
        assert_eq!(config.varieties.len(), 3);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_temp("{}\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.defaults.unit, AreaUnit::Hectares);
        assert_eq!(config.defaults.planting_method, PlantingMethod::DirectSeeding);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.varieties.is_empty());
    }

    #[test]
    fn missing_override_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = Config::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, SeedRateError::Config(_)));
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let file = write_temp("defaults: [unit\n");
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(SeedRateError::Config(_))
        ));
    }

    #[test]
    fn find_variety_is_case_insensitive() {
        let file = write_temp(SAMPLE);
        let config = Config::load(Some(file.path())).unwrap();
        let variety = config.find_variety("  swarna ").unwrap();
        assert_eq!(variety.name, "Swarna");
        assert!(config.find_variety("Unknown").is_none());
    }

    #[test]
    fn catalog_descriptors_classify() {
        let file = write_temp(SAMPLE);
        let config = Config::load(Some(file.path())).unwrap();
        let lengths: Vec<VarietyLength> = config
            .varieties
            .iter()
            .map(|v| classify_variety_length(Some(&v.descriptor())))
            .collect();
        // IR64: the medium maturity label wins over the long grain shape
        assert_eq!(
            lengths,
            vec![VarietyLength::Long, VarietyLength::Short, VarietyLength::Long]
        );
    }

    #[test]
    fn substitutes_env_vars() {
        std::env::set_var("SEEDRATE_TEST_UNIT", "sq feet");
        let file = write_temp("defaults:\n  unit: ${SEEDRATE_TEST_UNIT}\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.defaults.unit, AreaUnit::SqFeet);
    }

    #[test]
    fn unset_env_var_is_left_in_place() {
        let out = Config::substitute_env_vars("unit: ${SEEDRATE_TEST_NEVER_SET}");
        assert_eq!(out, "unit: ${SEEDRATE_TEST_NEVER_SET}");
    }

    #[test]
    fn validate_flags_problems() {
        let config = Config {
            defaults: DefaultsConfig {
                unit: AreaUnit::from_label("bigha"),
                planting_method: PlantingMethod::from_id("transplanting"),
            },
            output: OutputConfig::default(),
            varieties: vec![
                VarietyProfile {
                    name: "A".into(),
                    variety_type: None,
                    grain_shape: None,
                },
                VarietyProfile {
                    name: "a".into(),
                    variety_type: Some("Short Duration".into()),
                    grain_shape: None,
                },
            ],
        };
        let problems = config.validate();
        assert_eq!(problems.len(), 4);
    }

    #[test]
    fn write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            varieties: vec![VarietyProfile {
                name: "Swarna".into(),
                variety_type: Some("Long Duration".into()),
                grain_shape: None,
            }],
            ..Default::default()
        };
        config.write_to(&path).unwrap();

        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded.varieties, config.varieties);
        assert_eq!(loaded.defaults.unit, AreaUnit::Hectares);
    }
}
