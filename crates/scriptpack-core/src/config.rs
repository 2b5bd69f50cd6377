use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use scriptpack_util::errors::PackError;
use scriptpack_util::fs::find_ancestor_with;

use crate::{DEFAULT_OUTPUT, DEFAULT_PACKAGE_NAME, MANIFEST_FILE};

/// The parsed representation of a `Scriptpack.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub bundle: BundleSection,
}

/// Bundle defaults from the `[bundle]` section. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleSection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub license: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default, rename = "include-api")]
    pub include_api: Option<bool>,
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

impl Manifest {
    /// Parse a manifest from TOML text.
    pub fn parse(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            PackError::Manifest {
                message: format!("Failed to parse {MANIFEST_FILE}: {e}"),
            }
            .into()
        })
    }

    /// Load and parse a manifest file.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PackError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content)
    }

    /// Locate `Scriptpack.toml` in `start` or one of its ancestors.
    pub fn find(start: &Path) -> Option<PathBuf> {
        find_ancestor_with(start, MANIFEST_FILE).map(|dir| dir.join(MANIFEST_FILE))
    }
}

/// Everything a bundling run needs, passed explicitly to the bundle operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    /// Dotted namespace the bundle exports under, e.g. `app.widgets`.
    pub package_name: String,
    pub version: Option<String>,
    pub license_file: Option<PathBuf>,
    pub output_path: PathBuf,
    /// Emit an `includeAPI(name)` helper inside the wrapper.
    pub include_api: bool,
    /// Input scripts, in the order given by the user.
    pub files: Vec<PathBuf>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            version: None,
            license_file: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            include_api: false,
            files: Vec::new(),
        }
    }
}

/// Values given on the command line. Anything set here wins over the manifest.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub name: Option<String>,
    pub version: Option<String>,
    pub license: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub include_api: bool,
    pub files: Vec<PathBuf>,
}

impl BundleConfig {
    /// Build a configuration from a manifest, resolving its relative paths
    /// against `manifest_dir`.
    pub fn from_manifest(manifest: &Manifest, manifest_dir: &Path) -> Self {
        let section = &manifest.bundle;
        let defaults = Self::default();
        Self {
            package_name: section.name.clone().unwrap_or(defaults.package_name),
            version: section.version.clone(),
            license_file: section.license.as_ref().map(|p| manifest_dir.join(p)),
            output_path: section
                .output
                .as_ref()
                .map(|p| manifest_dir.join(p))
                .unwrap_or(defaults.output_path),
            include_api: section.include_api.unwrap_or(false),
            files: section.files.iter().map(|p| manifest_dir.join(p)).collect(),
        }
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(name) = overrides.name {
            self.package_name = name;
        }
        if overrides.version.is_some() {
            self.version = overrides.version;
        }
        if overrides.license.is_some() {
            self.license_file = overrides.license;
        }
        if let Some(output) = overrides.output {
            self.output_path = output;
        }
        if overrides.include_api {
            self.include_api = true;
        }
        if !overrides.files.is_empty() {
            self.files = overrides.files;
        }
        self
    }

    /// Resolve the configuration for a run started in `cwd`.
    ///
    /// An explicit `manifest_path` must exist. Otherwise `Scriptpack.toml` is
    /// searched for from `cwd` upwards, and built-in defaults are used when
    /// none is found.
    pub fn load(
        cwd: &Path,
        manifest_path: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> miette::Result<Self> {
        let manifest_path = match manifest_path {
            Some(path) => {
                let path = cwd.join(path);
                if !path.is_file() {
                    return Err(PackError::Manifest {
                        message: format!("{} does not exist", path.display()),
                    }
                    .into());
                }
                Some(path)
            }
            None => Manifest::find(cwd),
        };

        let base = match manifest_path {
            Some(path) => {
                tracing::debug!("Using manifest {}", path.display());
                let manifest = Manifest::from_path(&path)?;
                let dir = path.parent().unwrap_or(cwd);
                Self::from_manifest(&manifest, dir)
            }
            None => Self::default(),
        };

        let config = base.with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Check that the package name is a usable dotted namespace.
    pub fn validate(&self) -> Result<(), PackError> {
        if self.package_name.split('.').any(|part| part.trim().is_empty()) {
            return Err(PackError::Generic {
                message: format!("Invalid package name '{}'", self.package_name),
            });
        }
        Ok(())
    }
}
