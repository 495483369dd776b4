use crate::cli::{AnalyzeArgs, MsdMethodArg};
use crate::error::{CliError, Result};
use screwframe::workflows::{AnalysisConfig, AtomSelection, MsdMethod};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// TOML mirror of the core analysis configuration. Every field is optional;
/// unset fields fall back to the core defaults, and CLI flags override both.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileAnalysisConfig {
    pub selection: Option<FileSelection>,
    #[serde(rename = "rotation-centers")]
    pub rotation_centers: Option<bool>,
    pub msd: Option<FileMsdMethod>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FileSelection {
    AllAtoms,
    AlphaCarbons,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FileMsdMethod {
    Direct,
    Fft,
    Off,
}

impl From<FileSelection> for AtomSelection {
    fn from(selection: FileSelection) -> Self {
        match selection {
            FileSelection::AllAtoms => AtomSelection::AllAtoms,
            FileSelection::AlphaCarbons => AtomSelection::AlphaCarbons,
        }
    }
}

impl FileAnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: anyhow::Error::new(e),
        })?;
        debug!("Loaded analysis configuration from {:?}", path);
        Ok(config)
    }

    pub fn merge_with_cli(&self, args: &AnalyzeArgs) -> AnalysisConfig {
        let mut config = AnalysisConfig::default();

        if let Some(selection) = self.selection {
            config.selection = selection.into();
        }
        if let Some(enabled) = self.rotation_centers {
            config.rotation_centers = enabled;
        }
        if let Some(method) = self.msd {
            config.msd = match method {
                FileMsdMethod::Direct => Some(MsdMethod::Direct),
                FileMsdMethod::Fft => Some(MsdMethod::Fft),
                FileMsdMethod::Off => None,
            };
        }

        if args.calpha {
            config.selection = AtomSelection::AlphaCarbons;
        }
        if args.no_centers {
            config.rotation_centers = false;
        }
        if let Some(method) = args.msd {
            config.msd = Some(match method {
                MsdMethodArg::Direct => MsdMethod::Direct,
                MsdMethodArg::Fft => MsdMethod::Fft,
            });
        }
        if args.no_msd {
            config.msd = None;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args() -> AnalyzeArgs {
        AnalyzeArgs {
            input: "protein.pdb".into(),
            config: None,
            calpha: false,
            no_centers: false,
            msd: None,
            no_msd: false,
            centers_out: None,
            msd_out: None,
        }
    }

    #[test]
    fn full_config_file_maps_onto_core_config() {
        let file: FileAnalysisConfig = toml::from_str(
            r#"
            selection = "alpha-carbons"
            rotation-centers = false
            msd = "direct"
            "#,
        )
        .unwrap();
        let config = file.merge_with_cli(&bare_args());
        assert_eq!(config.selection, AtomSelection::AlphaCarbons);
        assert!(!config.rotation_centers);
        assert_eq!(config.msd, Some(MsdMethod::Direct));
    }

    #[test]
    fn missing_fields_fall_back_to_core_defaults() {
        let file: FileAnalysisConfig = toml::from_str("").unwrap();
        let config = file.merge_with_cli(&bare_args());
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: std::result::Result<FileAnalysisConfig, _> =
            toml::from_str("unknown-option = true");
        assert!(result.is_err());
    }

    #[test]
    fn cli_flags_override_the_config_file() {
        let file: FileAnalysisConfig = toml::from_str(
            r#"
            selection = "all-atoms"
            msd = "fft"
            "#,
        )
        .unwrap();
        let mut args = bare_args();
        args.calpha = true;
        args.no_msd = true;
        let config = file.merge_with_cli(&args);
        assert_eq!(config.selection, AtomSelection::AlphaCarbons);
        assert_eq!(config.msd, None);
    }

    #[test]
    fn msd_off_in_the_file_disables_the_curve() {
        let file: FileAnalysisConfig = toml::from_str(r#"msd = "off""#).unwrap();
        let config = file.merge_with_cli(&bare_args());
        assert_eq!(config.msd, None);
    }
}
