//! Printer settings: output mode, negative-power folding and logging,
//! optionally read from a TOML document.

use crate::Utils::logger::init_logger;
use crate::pretty::pretty_error::PrettyError;
use log::LevelFilter;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct PrettySettings {
    /// Unicode glyphs when true, plain ASCII otherwise
    pub use_unicode: bool,
    /// render x^-n factors as fractions
    pub fold_negative_powers: bool,
    pub log_level: Option<LevelFilter>,
    pub log_to_file: Option<String>,
}

impl Default for PrettySettings {
    fn default() -> Self {
        PrettySettings {
            use_unicode: true,
            fold_negative_powers: true,
            log_level: None,
            log_to_file: None,
        }
    }
}

const KNOWN_KEYS: [&str; 4] = ["use_unicode", "fold_negative_powers", "log_level", "log_file"];

impl PrettySettings {
    pub fn unicode() -> Self {
        PrettySettings::default()
    }

    pub fn ascii() -> Self {
        PrettySettings {
            use_unicode: false,
            ..PrettySettings::default()
        }
    }

    /// Reads settings from TOML text; keys missing from the document keep their defaults.
    ///
    /// ```toml
    /// use_unicode = false
    /// fold_negative_powers = true
    /// log_level = "debug"
    /// log_file = "pretty.log"
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, PrettyError> {
        let table: toml::Table =
            toml::from_str(text).map_err(|e| PrettyError::InvalidSettings(e.to_string()))?;
        if let Some(unknown) = table.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            return Err(PrettyError::InvalidSettings(format!("unknown key {}", unknown)));
        }
        let mut settings = PrettySettings::default();
        if let Some(value) = table.get("use_unicode") {
            settings.use_unicode = value.as_bool().ok_or_else(|| {
                PrettyError::InvalidSettings("use_unicode must be a boolean".to_string())
            })?;
        }
        if let Some(value) = table.get("fold_negative_powers") {
            settings.fold_negative_powers = value.as_bool().ok_or_else(|| {
                PrettyError::InvalidSettings("fold_negative_powers must be a boolean".to_string())
            })?;
        }
        if let Some(value) = table.get("log_level") {
            let level = value.as_str().ok_or_else(|| {
                PrettyError::InvalidSettings("log_level must be a string".to_string())
            })?;
            let level = LevelFilter::from_str(level).map_err(|_| {
                PrettyError::InvalidSettings(format!(
                    "log_level must be off, error, warn, info, debug or trace, got {}",
                    level
                ))
            })?;
            settings.log_level = Some(level);
        }
        if let Some(value) = table.get("log_file") {
            let file = value.as_str().ok_or_else(|| {
                PrettyError::InvalidSettings("log_file must be a string".to_string())
            })?;
            settings.log_to_file = Some(file.to_string());
        }
        Ok(settings)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, PrettyError> {
        let text = fs::read_to_string(path.as_ref()).map_err(|e| {
            PrettyError::InvalidSettings(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Installs the configured logger; does nothing when no level is set.
    pub fn init_logger(&self) -> bool {
        match self.log_level {
            Some(level) => init_logger(level, self.log_to_file.as_deref()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PrettySettings::default();
        assert!(settings.use_unicode);
        assert!(settings.fold_negative_powers);
        assert_eq!(settings.log_level, None);
        assert!(!PrettySettings::ascii().use_unicode);
    }

    #[test]
    fn test_from_toml_str() {
        let text = r#"
            use_unicode = false
            fold_negative_powers = false
            log_level = "debug"
            log_file = "pretty.log"
        "#;
        let settings = PrettySettings::from_toml_str(text).unwrap();
        assert!(!settings.use_unicode);
        assert!(!settings.fold_negative_powers);
        assert_eq!(settings.log_level, Some(LevelFilter::Debug));
        assert_eq!(settings.log_to_file.as_deref(), Some("pretty.log"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = PrettySettings::from_toml_str("log_level = \"WARN\"").unwrap();
        assert!(settings.use_unicode);
        assert_eq!(settings.log_level, Some(LevelFilter::Warn));
        let empty = PrettySettings::from_toml_str("").unwrap();
        assert_eq!(empty, PrettySettings::default());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        for text in [
            "use_unicode = 1",
            "log_level = \"loud\"",
            "colour = true",
            "use_unicode = ",
        ] {
            match PrettySettings::from_toml_str(text) {
                Err(PrettyError::InvalidSettings(_)) => {}
                other => panic!("{:?} accepted: {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_missing_file() {
        let res = PrettySettings::from_toml_file("/definitely/not/here.toml");
        assert!(matches!(res, Err(PrettyError::InvalidSettings(_))));
    }

    #[test]
    fn test_no_logger_without_level() {
        assert!(!PrettySettings::default().init_logger());
    }
}
