use crate::errors::{AppError, AppResult};
use crate::utils::cell_ref::{CellRef, Column};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration. Every section has defaults, so a partial file
/// (or no file at all) describes the standard export / template pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub input: InputLayout,
    pub template: TemplateLayout,
    pub output: OutputConfig,
    pub normalizer: NormalizerConfig,
    pub aggregation: AggregationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: String,
    pub template: String,
    pub output_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: "DATA.xlsx".to_string(),
            template: "taslak.xlsx".to_string(),
            output_dir: ".".to_string(),
        }
    }
}

/// Static layout of the clock-event export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLayout {
    pub sheet: Option<String>,
    pub first_row: u32,
    pub name_column: Column,
    /// Date of the event, or the full timestamp when `time_column` is unset.
    pub date_column: Column,
    pub time_column: Option<Column>,
    /// Paired layout: entry time in `time_column`, exit time here.
    pub exit_time_column: Option<Column>,
    pub direction_column: Option<Column>,
    pub entry_markers: Vec<String>,
    pub exit_markers: Vec<String>,
    pub csv_delimiter: char,
}

fn default_csv_delimiter() -> char {
    ','
}

impl Default for InputLayout {
    fn default() -> Self {
        Self {
            sheet: None,
            first_row: 5,
            name_column: Column::from_index(1),       // B
            date_column: Column::from_index(6),       // G
            time_column: Some(Column::from_index(7)), // H
            exit_time_column: Some(Column::from_index(9)), // J
            direction_column: None,
            entry_markers: ["in", "entry", "giriş", "g"].map(String::from).to_vec(),
            exit_markers: ["out", "exit", "çıkış", "ç"].map(String::from).to_vec(),
            csv_delimiter: default_csv_delimiter(),
        }
    }
}

impl InputLayout {
    pub fn is_paired(&self) -> bool {
        self.time_column.is_some() && self.exit_time_column.is_some()
    }
}

/// Fixed structure of the report template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateLayout {
    pub sheet: Option<String>,
    pub first_row: u32,
    pub last_row: u32,
    pub date_column: Column,
    pub first_in_column: Column,
    pub last_out_column: Column,
    pub net_duration_column: Column,
    pub name_cell: Option<CellRef>,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self {
            sheet: None,
            first_row: 6,
            last_row: 44,
            date_column: Column::from_index(4),         // E
            first_in_column: Column::from_index(5),     // F
            last_out_column: Column::from_index(6),     // G
            net_duration_column: Column::from_index(8), // I
            name_cell: Some(CellRef {
                row: 4,
                column: Column::from_index(5),
            }), // F4
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub file_suffix: String,
    pub time_format: String,
    pub duration_format: String,
    pub date_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_suffix: "_Attendance".to_string(),
            time_format: "hh:mm".to_string(),
            duration_format: "[h]:mm".to_string(),
            date_format: "dd.mm.yyyy".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCase {
    #[default]
    Preserve,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Literal tokens stripped from the start of a name, case-insensitively.
    pub prefixes: Vec<String>,
    /// Leading department codes ("uretim*", "idari-"); empty disables it.
    pub prefix_pattern: String,
    /// Characters matching this pattern are removed from names.
    pub noise_pattern: String,
    pub case: NameCase,
    /// Rows whose name contains one of these words are not employees
    /// (totals, daily sums, header repeats).
    pub excluded_keywords: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            prefixes: ["arge*", "arge-", "*", "-"].map(String::from).to_vec(),
            prefix_pattern: r"^\s*[\p{L}\p{N}]*?[*\-]".to_string(),
            noise_pattern: r"[^\p{L}\p{N}\s]".to_string(),
            case: NameCase::Preserve,
            excluded_keywords: ["toplam", "günlük", "personel"].map(String::from).to_vec(),
        }
    }
}

/// How the direction of an event is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionMode {
    /// Earliest event of the day is the entry, latest is the exit.
    #[default]
    Chronological,
    /// Directions come from the input (direction column or paired columns).
    Recorded,
}

/// Which intervals are removed from the first-in → last-out span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    #[default]
    None,
    ExcludeBreaks,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    pub direction: DirectionMode,
    pub gap_policy: GapPolicy,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rattendance")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.yaml")
    }

    /// Load the configuration.
    ///
    /// - explicit path → must exist and parse
    /// - no path → the default file if present, otherwise built-in defaults
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(AppError::Config(format!(
                        "configuration file not found: {}",
                        p.display()
                    )));
                }
                Self::from_yaml(&fs::read_to_string(p)?)
            }
            None => {
                let default = Self::config_file();
                if default.exists() {
                    tracing::debug!("Loading configuration from {}", default.display());
                    Self::from_yaml(&fs::read_to_string(&default)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration to `path`.
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, Self::default().to_yaml()?)?;
        Ok(())
    }

    /// Reject settings that cannot describe a valid layout.
    pub fn validate(&self) -> AppResult<()> {
        let input = &self.input;
        if input.first_row == 0 {
            return Err(AppError::Config("input.first_row must be at least 1".into()));
        }
        if input.exit_time_column.is_some() && input.time_column.is_none() {
            return Err(AppError::Config(
                "input.exit_time_column requires input.time_column".into(),
            ));
        }
        if self.aggregation.direction == DirectionMode::Recorded
            && input.direction_column.is_none()
            && !input.is_paired()
        {
            return Err(AppError::Config(
                "direction 'recorded' needs input.direction_column or paired time columns".into(),
            ));
        }
        if !input.csv_delimiter.is_ascii() {
            return Err(AppError::Config("input.csv_delimiter must be an ASCII character".into()));
        }

        let template = &self.template;
        if template.first_row == 0 || template.first_row > template.last_row {
            return Err(AppError::Config(format!(
                "template rows {}..{} do not form a valid range",
                template.first_row, template.last_row
            )));
        }

        if self.output.file_suffix.contains(['/', '\\']) {
            return Err(AppError::Config(
                "output.file_suffix must not contain path separators".into(),
            ));
        }

        Ok(())
    }
}
