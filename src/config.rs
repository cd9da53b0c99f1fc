use crate::theme::Theme;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::pastel(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    title_size: Option<f32>,
    ink: Option<String>,
    muted: Option<String>,
    background: Option<String>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let parsed: ConfigFile = serde_json::from_str(&contents)
        .with_context(|| format!("parsing config {}", path.display()))?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "pastel" || theme_name == "default" {
            config.theme = Theme::pastel();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.title_size {
            config.theme.title_size = v;
        }
        if let Some(v) = vars.ink {
            config.theme.ink = v;
        }
        if let Some(v) = vars.muted {
            config.theme.muted = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_path_gives_pastel_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.theme.blue_light, "#A8C8E8");
        assert_eq!(config.theme.ink, "#333333");
    }

    #[test]
    fn variables_override_only_named_fields() {
        let path = std::env::temp_dir().join(format!("gen-diagrams-config-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r##"{"theme": "pastel", "themeVariables": {"fontFamily": "Noto Sans KR", "ink": "#000000"}}"##,
        )
        .unwrap();
        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.theme.font_family, "Noto Sans KR");
        assert_eq!(config.theme.ink, "#000000");
        assert_eq!(config.theme.muted, "#555555");
    }

    #[test]
    fn malformed_config_reports_path() {
        let path = std::env::temp_dir().join(format!("gen-diagrams-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{not json").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("parsing config"));
    }
}
