use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".icongalleryrc.json";

/// One frontend application repository under the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Directory name of the repository, also its display name.
    pub name: String,
    #[serde(default = "default_app_color")]
    pub color: String,
    /// Source tree scanned for usage, relative to the repository.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    /// Directories holding the app's own `.tsx` icon components, relative to the repository.
    #[serde(default)]
    pub custom_icon_dirs: Vec<String>,
}

impl AppConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: default_app_color(),
            source_dir: default_source_dir(),
            custom_icon_dirs: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding every app repository, relative to the config file.
    #[serde(default = "default_workspace_root")]
    pub workspace_root: String,
    /// Report file, relative to the config file.
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_title")]
    pub title: String,
    /// Compiled icon entries of the shared package, relative to each app repository.
    #[serde(default = "default_package_icons_dir")]
    pub package_icons_dir: String,
    #[serde(default = "default_package_label")]
    pub package_label: String,
    #[serde(default = "default_legacy_class_prefix")]
    pub legacy_class_prefix: String,
    #[serde(default = "default_legacy_stylesheet")]
    pub legacy_stylesheet: String,
    /// Glob patterns of app source files excluded from the usage scan.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub apps: Vec<AppConfig>,
}

fn default_workspace_root() -> String {
    "..".to_string()
}

fn default_output() -> String {
    "index.html".to_string()
}

fn default_title() -> String {
    "Frontend Icon Gallery".to_string()
}

fn default_package_icons_dir() -> String {
    "node_modules/@acme/ui-core/dist/icons".to_string()
}

fn default_package_label() -> String {
    "ui-core".to_string()
}

fn default_legacy_class_prefix() -> String {
    "pi".to_string()
}

fn default_legacy_stylesheet() -> String {
    "https://unpkg.com/primeicons@6.0.1/primeicons.css".to_string()
}

fn default_app_color() -> String {
    "#888888".to_string()
}

fn default_source_dir() -> String {
    "src".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_root: default_workspace_root(),
            output: default_output(),
            title: default_title(),
            package_icons_dir: default_package_icons_dir(),
            package_label: default_package_label(),
            legacy_class_prefix: default_legacy_class_prefix(),
            legacy_stylesheet: default_legacy_stylesheet(),
            ignores: Vec::new(),
            apps: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid `ignores` globs, empty or duplicate app names, and
    /// colors that are not `#rgb` / `#rrggbb`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.legacy_class_prefix.trim().is_empty() {
            bail!("'legacyClassPrefix' must not be empty");
        }

        let mut names = HashSet::new();
        for app in &self.apps {
            if app.name.trim().is_empty() {
                bail!("App names in 'apps' must not be empty");
            }
            if !names.insert(app.name.as_str()) {
                bail!("Duplicate app in 'apps': \"{}\"", app.name);
            }
            if !is_hex_color(&app.color) {
                bail!(
                    "Invalid color for app \"{}\": \"{}\" (expected #rgb or #rrggbb)",
                    app.name,
                    app.color
                );
            }
        }

        Ok(())
    }

    pub fn app(&self, name: &str) -> Option<&AppConfig> {
        self.apps.iter().find(|app| app.name == name)
    }

    /// Color of `app`, or the default gray for apps not in the config.
    pub fn app_color(&self, name: &str) -> String {
        self.app(name)
            .map(|app| app.color.clone())
            .unwrap_or_else(default_app_color)
    }

    /// Compiled ignore patterns. Invalid patterns were rejected by [`Config::validate`].
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config are resolved against:
    /// the config file's directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
