use serde::Deserialize;
use std::str::FromStr;

/// 24-bit color parsed from a `#RRGGBB` or `#RGB` hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color '{}'", s));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("invalid hex color '{}': {}", s, e))
        };

        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // Shorthand: each digit is doubled
            3 => Ok(Self::new(
                channel(&hex[0..1])? * 0x11,
                channel(&hex[1..2])? * 0x11,
                channel(&hex[2..3])? * 0x11,
            )),
            _ => Err(format!(
                "invalid hex color '{}': expected #RRGGBB or #RGB",
                s
            )),
        }
    }
}

/// Color applied to the inclusive character range `start..=end` of a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRange {
    pub color: Rgb,
    pub start: usize,
    pub end: usize,
}

/// How a project type label is colored when presented
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColorSpec {
    #[default]
    Plain,
    Single(Rgb),
    Ranges(Vec<ColorRange>),
}

/// A named project category mapped to one subfolder of `Projects`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectType {
    /// Key of the entry in the definition file
    pub key: String,
    /// Folder name, also the value reported back by selections
    pub identifier: String,
    /// Text shown in prompts
    pub label: String,
    pub description: String,
    pub color: ColorSpec,
}

impl ProjectType {
    /// Whether the entry carries a non-blank description
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// Entry as it appears in a definition file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawProjectType {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<RawColor>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawColor {
    Single(String),
    Ranges(Vec<(String, usize, usize)>),
}
