use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human readable listing of the presentation model
    #[default]
    Text,
    /// The data as it would be saved
    Toml,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Options {
    /// Layer printed when `map` gets no `--layer`; all layers if unset
    #[serde(default)]
    pub default_layer: Option<i32>,

    #[serde(default)]
    pub show_fields: bool,

    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Options {
    pub fn load_options() -> Self {
        let Some(config_dir) = Self::get_config_dir() else {
            return Self::default();
        };
        let options_file = config_dir.join("options.toml");
        if options_file.exists() {
            match fs::read_to_string(&options_file) {
                Ok(txt) => match Self::from_toml_str(&txt) {
                    Ok(result) => return result,
                    Err(err) => log::error!("Error parsing options file {}: {err}", options_file.display()),
                },
                Err(err) => log::error!("Error reading options file: {err}"),
            }
        }
        Self::default()
    }

    pub fn from_toml_str(txt: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(txt)
    }

    /// Returns the configuration directory path, creating it if needed
    pub fn get_config_dir() -> Option<PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("com", "GitHub", "quest_inspect")?;
        let dir = proj_dirs.config_dir().to_path_buf();
        if !dir.exists() {
            if let Err(err) = fs::create_dir_all(&dir) {
                log::error!("Can't create configuration directory {}: {err}", dir.display());
                return None;
            }
        }
        Some(dir)
    }
}
