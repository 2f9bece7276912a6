//! Scan configuration types.

use std::path::PathBuf;

use derive_builder::Builder;

use crate::error::ScanError;
use crate::record::BYTES_PER_MB;

/// Default large-file threshold in megabytes.
pub const DEFAULT_THRESHOLD_MB: f64 = 5.0;

/// Configuration for a single scan.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root directory to scan.
    pub root: PathBuf,

    /// Files strictly larger than this many bytes are flagged as large.
    #[builder(default = "5 * BYTES_PER_MB")]
    pub threshold_bytes: u64,
}

fn default_threshold_bytes() -> u64 {
    5 * BYTES_PER_MB
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a config with the default 5 MB threshold.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            threshold_bytes: default_threshold_bytes(),
        }
    }

    /// Set the threshold from a (possibly fractional) megabyte value.
    ///
    /// Sizes are whole bytes, so the threshold is floored without changing
    /// which files compare as larger.
    pub fn with_threshold_mb(mut self, threshold_mb: f64) -> Result<Self, ScanError> {
        self.threshold_bytes = threshold_mb_to_bytes(threshold_mb)?;
        Ok(self)
    }

    /// Resolve the root to an absolute, canonical, existing directory.
    pub fn resolve(&self) -> Result<Self, ScanError> {
        if self.root.as_os_str().is_empty() {
            return Err(ScanError::invalid_config("Root path cannot be empty"));
        }

        let absolute = std::path::absolute(&self.root).map_err(|e| ScanError::io(&self.root, e))?;
        if !absolute.exists() {
            return Err(ScanError::NotFound { path: absolute });
        }

        let root = absolute
            .canonicalize()
            .map_err(|e| ScanError::io(&absolute, e))?;
        if !root.is_dir() {
            return Err(ScanError::NotADirectory { path: root });
        }

        Ok(Self {
            root,
            threshold_bytes: self.threshold_bytes,
        })
    }
}

/// Convert a megabyte threshold into whole bytes.
pub fn threshold_mb_to_bytes(threshold_mb: f64) -> Result<u64, ScanError> {
    if !threshold_mb.is_finite() || threshold_mb < 0.0 {
        return Err(ScanError::invalid_config(format!(
            "Threshold must be a non-negative number of megabytes, got {threshold_mb}"
        )));
    }
    Ok((threshold_mb * BYTES_PER_MB as f64).floor() as u64)
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ScanConfig::builder()
            .root("/home/user")
            .threshold_bytes(1024u64)
            .build()
            .unwrap();

        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert_eq!(config.threshold_bytes, 1024);
    }

    #[test]
    fn test_builder_requires_root() {
        assert!(ScanConfig::builder().build().is_err());
        assert!(ScanConfig::builder().root("").build().is_err());
    }

    #[test]
    fn test_config_simple() {
        let config = ScanConfig::new("/home/user");
        assert_eq!(config.threshold_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_threshold_conversion() {
        assert_eq!(threshold_mb_to_bytes(DEFAULT_THRESHOLD_MB).unwrap(), 5 * BYTES_PER_MB);
        assert_eq!(threshold_mb_to_bytes(0.0).unwrap(), 0);
        assert_eq!(threshold_mb_to_bytes(0.5).unwrap(), BYTES_PER_MB / 2);
        assert!(threshold_mb_to_bytes(-1.0).is_err());
        assert!(threshold_mb_to_bytes(f64::NAN).is_err());
        assert!(threshold_mb_to_bytes(f64::INFINITY).is_err());
    }
}
