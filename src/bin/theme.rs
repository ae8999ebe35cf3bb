//! Theme configuration for the vbtint colorizer
//!
//! The mapping from lexeme category to a terminal style is presentation
//! configuration, not classification logic: the library hands back annotated
//! fragments and this module decides how they look. Styles can be overridden
//! from a YAML file; an omitted category keeps its default, a configured
//! category is replaced entirely by what the file says.
//!
//! ```yaml
//! keyword: { bg: dark_yellow }
//! comment: { fg: green }
//! ```

use crossterm::style::{style, Color, StyledContent, Stylize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

use vbtint::vb::lexeme::LexemeCategory;

/// Foreground/background pair applied to one lexeme category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexemeStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl LexemeStyle {
    fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
        }
    }

    fn bg(color: Color) -> Self {
        Self {
            fg: None,
            bg: Some(color),
        }
    }
}

/// Concrete styles for every lexeme category.
///
/// The default palette follows the classic tool: background blocks for the
/// token-like categories, plain foreground color for comments and
/// directives.
#[derive(Debug, Clone)]
pub struct Theme {
    number: LexemeStyle,
    keyword: LexemeStyle,
    comment: LexemeStyle,
    str_char: LexemeStyle,
    operator: LexemeStyle,
    delimiter: LexemeStyle,
    identifier: LexemeStyle,
    directive: LexemeStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            number: LexemeStyle::bg(Color::DarkCyan),
            keyword: LexemeStyle::bg(Color::DarkYellow),
            comment: LexemeStyle::fg(Color::DarkGreen),
            str_char: LexemeStyle::bg(Color::Cyan),
            operator: LexemeStyle::bg(Color::Blue),
            delimiter: LexemeStyle::bg(Color::DarkMagenta),
            identifier: LexemeStyle::bg(Color::Green),
            directive: LexemeStyle::fg(Color::DarkRed),
        }
    }
}

impl Theme {
    /// The style configured for a category.
    pub fn style_for(&self, category: LexemeCategory) -> LexemeStyle {
        match category {
            LexemeCategory::Number => self.number,
            LexemeCategory::Keyword => self.keyword,
            LexemeCategory::Comment => self.comment,
            LexemeCategory::StrChar => self.str_char,
            LexemeCategory::Operator => self.operator,
            LexemeCategory::Delimiter => self.delimiter,
            LexemeCategory::Identifier => self.identifier,
            LexemeCategory::Directive => self.directive,
        }
    }

    /// Apply a category's style to a piece of text.
    pub fn paint<'a>(&self, category: LexemeCategory, text: &'a str) -> StyledContent<&'a str> {
        let LexemeStyle { fg, bg } = self.style_for(category);
        let mut styled = style(text);
        if let Some(color) = fg {
            styled = styled.with(color);
        }
        if let Some(color) = bg {
            styled = styled.on(color);
        }
        styled
    }

    /// Load a theme from a YAML string.
    pub fn from_yaml(yaml_str: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_yaml::from_str(yaml_str)?;
        config.into_theme()
    }

    /// Load a theme from a YAML file.
    pub fn from_yaml_file(path: &str) -> Result<Self, ThemeError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

/// YAML-deserializable theme configuration.
///
/// Every category is optional; unknown keys are rejected so typos surface at
/// startup instead of silently keeping a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub number: Option<StyleConfig>,
    pub keyword: Option<StyleConfig>,
    pub comment: Option<StyleConfig>,
    pub str_char: Option<StyleConfig>,
    pub operator: Option<StyleConfig>,
    pub delimiter: Option<StyleConfig>,
    pub identifier: Option<StyleConfig>,
    pub directive: Option<StyleConfig>,
}

/// Individual style entry from YAML: named colors for foreground and
/// background, either optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    pub fg: Option<String>,
    pub bg: Option<String>,
}

impl ThemeConfig {
    /// Convert the raw configuration into a theme, starting from the default
    /// palette.
    pub fn into_theme(self) -> Result<Theme, ThemeError> {
        let mut theme = Theme::default();
        if let Some(cfg) = self.number {
            theme.number = cfg.into_style()?;
        }
        if let Some(cfg) = self.keyword {
            theme.keyword = cfg.into_style()?;
        }
        if let Some(cfg) = self.comment {
            theme.comment = cfg.into_style()?;
        }
        if let Some(cfg) = self.str_char {
            theme.str_char = cfg.into_style()?;
        }
        if let Some(cfg) = self.operator {
            theme.operator = cfg.into_style()?;
        }
        if let Some(cfg) = self.delimiter {
            theme.delimiter = cfg.into_style()?;
        }
        if let Some(cfg) = self.identifier {
            theme.identifier = cfg.into_style()?;
        }
        if let Some(cfg) = self.directive {
            theme.directive = cfg.into_style()?;
        }
        Ok(theme)
    }
}

impl StyleConfig {
    fn into_style(self) -> Result<LexemeStyle, ThemeError> {
        let fg = self.fg.as_deref().map(parse_color).transpose()?;
        let bg = self.bg.as_deref().map(parse_color).transpose()?;
        Ok(LexemeStyle { fg, bg })
    }
}

/// Parse a color name from theme configuration.
///
/// Accepts the standard terminal palette in snake_case; the plain names are
/// the bright variants, `dark_*` the standard ones.
fn parse_color(name: &str) -> Result<Color, ThemeError> {
    let color = match name {
        "black" => Color::Black,
        "dark_grey" => Color::DarkGrey,
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" => Color::Grey,
        _ => return Err(ThemeError::UnknownColor(name.to_string())),
    };
    Ok(color)
}

/// Failures while loading a theme file.
#[derive(Debug)]
pub enum ThemeError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    UnknownColor(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::Io(err) => write!(f, "cannot read theme file: {}", err),
            ThemeError::Yaml(err) => write!(f, "malformed theme file: {}", err),
            ThemeError::UnknownColor(name) => write!(f, "unknown color name: {}", name),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThemeError::Io(err) => Some(err),
            ThemeError::Yaml(err) => Some(err),
            ThemeError::UnknownColor(_) => None,
        }
    }
}

impl From<std::io::Error> for ThemeError {
    fn from(err: std::io::Error) -> Self {
        ThemeError::Io(err)
    }
}

impl From<serde_yaml::Error> for ThemeError {
    fn from(err: serde_yaml::Error) -> Self {
        ThemeError::Yaml(err)
    }
}
