//! Parameter presets and command-line byte lists.
//!
//! A preset is a YAML map with optional `matrix`, `angles` and `pigments`
//! keys, each a list of bytes. Missing keys take the reset defaults:
//!
//! ```yaml
//! angles: [0, 0, 43]
//! pigments: [200, 128, 90, 128, 128, 128]
//! ```

use anyhow::{Context, Result, bail};
use hue_core::{GradeParams, MatrixParams, PigmentParams, RotationParams};
use std::path::Path;

/// Loads a preset file.
pub fn load_preset(path: &Path) -> Result<GradeParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset: {}", path.display()))?;
    parse_preset(&text).with_context(|| format!("Invalid preset: {}", path.display()))
}

/// Parses preset YAML. An empty document yields the defaults.
pub fn parse_preset(text: &str) -> Result<GradeParams> {
    if text.trim().is_empty() {
        return Ok(GradeParams::default());
    }
    Ok(serde_yaml::from_str(text)?)
}

/// Writes a preset file.
pub fn save_preset(path: &Path, params: &GradeParams) -> Result<()> {
    let text = serde_yaml::to_string(params).context("Failed to serialize preset")?;
    std::fs::write(path, text).with_context(|| format!("Failed to write preset: {}", path.display()))
}

/// Starts from the preset (or defaults) and applies per-flag overrides.
pub fn resolve_params(
    preset: Option<&Path>,
    matrix: Option<&str>,
    angles: Option<&str>,
    pigments: Option<&str>,
) -> Result<GradeParams> {
    let mut params = match preset {
        Some(path) => load_preset(path)?,
        None => GradeParams::default(),
    };
    if let Some(s) = matrix {
        params.matrix = MatrixParams(parse_bytes(s, "--matrix")?);
    }
    if let Some(s) = angles {
        params.angles = RotationParams(parse_bytes(s, "--angles")?);
    }
    if let Some(s) = pigments {
        params.pigments = PigmentParams(parse_bytes(s, "--pigments")?);
    }
    Ok(params)
}

/// Parses exactly `N` comma-separated bytes.
pub fn parse_bytes<const N: usize>(s: &str, flag: &str) -> Result<[u8; N]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        bail!("{} expects {} comma-separated values, got {}", flag, N, parts.len());
    }
    let mut out = [0u8; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .with_context(|| format!("{}: '{}' is not a byte (0-255)", flag, part))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bytes_exact_arity() {
        assert_eq!(parse_bytes::<3>("1, 2,3", "--angles").unwrap(), [1, 2, 3]);
        assert!(parse_bytes::<3>("1,2", "--angles").is_err());
        assert!(parse_bytes::<3>("1,2,3,4", "--angles").is_err());
        assert!(parse_bytes::<3>("1,2,256", "--angles").is_err());
        assert!(parse_bytes::<3>("1,-2,3", "--angles").is_err());
    }

    #[test]
    fn test_partial_preset_keeps_defaults() {
        let params = parse_preset("angles: [0, 0, 43]\n").unwrap();
        assert_eq!(params.angles, RotationParams([0, 0, 43]));
        assert_eq!(params.matrix, MatrixParams::IDENTITY);
        assert_eq!(params.pigments, PigmentParams::NEUTRAL);
    }

    #[test]
    fn test_empty_preset_is_default() {
        assert_eq!(parse_preset("  \n").unwrap(), GradeParams::default());
    }

    #[test]
    fn test_preset_rejects_unknown_keys_and_bad_lengths() {
        assert!(parse_preset("gamma: 2.2\n").is_err());
        assert!(parse_preset("angles: [1, 2]\n").is_err());
        assert!(parse_preset("pigments: [1, 2, 3, 4, 5, 300]\n").is_err());
    }

    #[test]
    fn test_preset_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("look.yaml");
        let params = GradeParams {
            matrix: MatrixParams([7; 15]),
            angles: RotationParams([1, 2, 3]),
            pigments: PigmentParams([9, 8, 7, 6, 5, 4]),
        };
        save_preset(&path, &params).unwrap();
        assert_eq!(load_preset(&path).unwrap(), params);
    }

    #[test]
    fn test_overrides_win_over_preset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("look.yaml");
        std::fs::write(&path, "angles: [10, 20, 30]\npigments: [1, 1, 1, 1, 1, 1]\n").unwrap();

        let params = resolve_params(Some(&path), None, Some("4,5,6"), None).unwrap();
        assert_eq!(params.angles, RotationParams([4, 5, 6]));
        assert_eq!(params.pigments, PigmentParams([1; 6]));
    }
}
