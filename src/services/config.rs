use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DOC_PATH: &str = "docs";
pub const DEFAULT_TAXONOMY_PATH: &str = "docs/taxonomy.md";
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";
pub const DEFAULT_EXCLUDED_PATTERNS: [&str; 4] =
    ["README", "CHANGELOG", "CONTRIBUTING", "LICENSE"];

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("unreadable config {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk schema. Every field is optional so that any tier may state only
/// what it overrides; `merged_over` fills the gaps from the less specific
/// tier and `Config::from_file` fills what remains with built-in defaults.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    pub path: Option<String>,
    pub taxonomy: Option<String>,
    pub template_dir: Option<String>,
    pub excluded_patterns: Option<Vec<String>>,
    #[serde(default)]
    pub validation: ValidationSection,
    #[serde(default)]
    pub cross_refs: CrossRefsSection,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ValidationSection {
    pub strict: Option<bool>,
    pub require_taxonomy: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct CrossRefsSection {
    pub enable_adr: Option<bool>,
    pub enable_req: Option<bool>,
    pub enable_runnote: Option<bool>,
}

impl ConfigFile {
    /// Deep merge: nested tables merge key-wise, scalar and list values are
    /// replaced wholesale by the more specific tier (`self`).
    pub fn merged_over(self, base: ConfigFile) -> ConfigFile {
        ConfigFile {
            path: self.path.or(base.path),
            taxonomy: self.taxonomy.or(base.taxonomy),
            template_dir: self.template_dir.or(base.template_dir),
            excluded_patterns: self.excluded_patterns.or(base.excluded_patterns),
            validation: ValidationSection {
                strict: self.validation.strict.or(base.validation.strict),
                require_taxonomy: self
                    .validation
                    .require_taxonomy
                    .or(base.validation.require_taxonomy),
            },
            cross_refs: CrossRefsSection {
                enable_adr: self.cross_refs.enable_adr.or(base.cross_refs.enable_adr),
                enable_req: self.cross_refs.enable_req.or(base.cross_refs.enable_req),
                enable_runnote: self
                    .cross_refs
                    .enable_runnote
                    .or(base.cross_refs.enable_runnote),
            },
        }
    }
}

/// Fully resolved configuration for one project root.
#[derive(Debug, Clone)]
pub struct Config {
    pub doc_path: String,
    pub taxonomy: String,
    pub template_dir: String,
    pub excluded_patterns: Vec<String>,
    pub strict: bool,
    pub require_taxonomy: bool,
    pub enable_adr: bool,
    pub enable_req: bool,
    pub enable_runnote: bool,
}

impl Config {
    pub fn from_file(f: ConfigFile) -> Config {
        Config {
            doc_path: f.path.unwrap_or_else(|| DEFAULT_DOC_PATH.to_string()),
            taxonomy: f.taxonomy.unwrap_or_else(|| DEFAULT_TAXONOMY_PATH.to_string()),
            template_dir: f
                .template_dir
                .unwrap_or_else(|| DEFAULT_TEMPLATE_DIR.to_string()),
            excluded_patterns: f.excluded_patterns.unwrap_or_else(|| {
                DEFAULT_EXCLUDED_PATTERNS
                    .iter()
                    .map(|p| p.to_string())
                    .collect()
            }),
            strict: f.validation.strict.unwrap_or(true),
            require_taxonomy: f.validation.require_taxonomy.unwrap_or(false),
            enable_adr: f.cross_refs.enable_adr.unwrap_or(true),
            enable_req: f.cross_refs.enable_req.unwrap_or(true),
            enable_runnote: f.cross_refs.enable_runnote.unwrap_or(true),
        }
    }
}

/// Runtime tier: CLI flags that beat both config files.
#[derive(Debug, Default, Clone)]
pub struct RuntimeOverrides {
    pub doc_path: Option<PathBuf>,
    pub taxonomy: Option<PathBuf>,
}

impl RuntimeOverrides {
    fn as_config_file(&self) -> ConfigFile {
        ConfigFile {
            path: self
                .doc_path
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            taxonomy: self
                .taxonomy
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            ..ConfigFile::default()
        }
    }
}

/// Three-tier resolver: built-in defaults < global file < project file <
/// runtime flags. Constructed once in `main` and injected into the context
/// builder; nothing here is process-global.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    overrides: RuntimeOverrides,
}

impl ConfigResolver {
    pub fn new(overrides: RuntimeOverrides) -> Self {
        Self { overrides }
    }

    pub fn resolve(&self, root: &Path) -> Result<Config, ConfigError> {
        let global = match global_config_path() {
            Some(p) => load_config_file(&p)?,
            None => ConfigFile::default(),
        };
        let project = load_config_file(&root.join(".doctags").join("config.toml"))?;
        let merged = self
            .overrides
            .as_config_file()
            .merged_over(project.merged_over(global));
        Ok(Config::from_file(merged))
    }

    pub fn resolve_doc_path(&self, root: &Path, config: &Config) -> PathBuf {
        absolutize(root, &config.doc_path)
    }

    pub fn resolve_taxonomy_path(&self, root: &Path, config: &Config) -> PathBuf {
        absolutize(root, &config.taxonomy)
    }
}

fn absolutize(root: &Path, value: &str) -> PathBuf {
    let p = PathBuf::from(value);
    if p.is_absolute() {
        p
    } else {
        root.join(p)
    }
}

fn global_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("doctags")
            .join("config.toml"),
    )
}

fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Walk upward from the current directory to the first directory carrying a
/// `.doctags/` marker or a version-control root; fall back to the current
/// directory itself.
pub fn discover_project_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut dir = cwd.as_path();
    loop {
        if dir.join(".doctags").is_dir() || dir.join(".git").exists() {
            return dir.to_path_buf();
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return cwd,
        }
    }
}
