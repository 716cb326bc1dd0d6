//! Viewer configuration: TOML-backed options with serde defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MeshviewError;

/// Runtime viewer options. Every field has a default, so a partial TOML
/// file only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Options {
    /// Window title.
    pub title: String,
    /// Clear color behind the mesh, RGBA in [0, 1].
    pub background: [f64; 4],
    /// When a loaded model's bounding box is degenerate, display it with
    /// unit framing instead of refusing to show it.
    pub fallback_to_unit_framing: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            title: "Meshview".into(),
            background: [0.0, 0.0, 0.0, 1.0],
            fallback_to_unit_framing: true,
        }
    }
}

impl Options {
    /// Parse options from a TOML string.
    ///
    /// # Errors
    ///
    /// `MeshviewError::OptionsParse` on malformed TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, MeshviewError> {
        toml::from_str(source)
            .map_err(|e| MeshviewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// `MeshviewError::Io` if the file cannot be read, `OptionsParse` if
    /// it does not parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MeshviewError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// The background as a wgpu clear color.
    #[must_use]
    pub fn background_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: self.background[0],
            g: self.background[1],
            b: self.background[2],
            a: self.background[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip() {
        let opts = Options {
            title: "Bunny".into(),
            background: [0.1, 0.2, 0.3, 1.0],
            fallback_to_unit_framing: false,
        };
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed, opts);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let parsed =
            Options::from_toml_str("title = \"Custom\"\n").unwrap();
        assert_eq!(parsed.title, "Custom");
        assert_eq!(parsed.background, Options::default().background);
        assert!(parsed.fallback_to_unit_framing);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("background = \"blue\"");
        assert!(matches!(err, Err(MeshviewError::OptionsParse(_))));
    }

    #[test]
    fn load_reads_options_from_a_file() {
        let path = std::env::temp_dir().join("meshview_load_test.toml");
        std::fs::write(
            &path,
            "title = \"FromFile\"\nbackground = [1.0, 1.0, 1.0, 1.0]\n",
        )
        .unwrap();
        let parsed = Options::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(parsed.title, "FromFile");
        assert_eq!(parsed.background, [1.0, 1.0, 1.0, 1.0]);
        assert!(parsed.fallback_to_unit_framing);
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let err = Options::load("meshview_no_such_file.toml");
        assert!(matches!(err, Err(MeshviewError::Io(_))));
    }
}
