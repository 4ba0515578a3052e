use std::collections::HashMap;
use std::fmt;

use crate::services::escape::sanitize_text_field;

/// Default icon size in pixels
pub const DEFAULT_SIZE: u32 = 28;

/// Allowed icon size range in pixels
pub const MIN_SIZE: u32 = 10;
pub const MAX_SIZE: u32 = 200;

/// Orientation of the rendered icon list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
}

impl Layout {
    /// Parse a raw attribute value; anything outside the allowed set
    /// falls back to the default rather than erroring.
    pub fn from_raw(s: &str) -> Self {
        match s {
            "horizontal" => Layout::Horizontal,
            "vertical" => Layout::Vertical,
            _ => Layout::default(),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Horizontal => write!(f, "horizontal"),
            Layout::Vertical => write!(f, "vertical"),
        }
    }
}

/// How per-icon labels are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Label carried in a `data-tooltip` attribute
    #[default]
    Tooltip,
    /// Label rendered as a visible caption element
    Label,
}

impl DisplayMode {
    pub fn from_raw(s: &str) -> Self {
        match s {
            "tooltip" => DisplayMode::Tooltip,
            "label" => DisplayMode::Label,
            _ => DisplayMode::default(),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Tooltip => write!(f, "tooltip"),
            DisplayMode::Label => write!(f, "label"),
        }
    }
}

/// Caption placement relative to the icon, meaningful in label mode only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPosition {
    Top,
    #[default]
    Bottom,
}

impl LabelPosition {
    pub fn from_raw(s: &str) -> Self {
        match s {
            "top" => LabelPosition::Top,
            "bottom" => LabelPosition::Bottom,
            _ => LabelPosition::default(),
        }
    }
}

impl fmt::Display for LabelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelPosition::Top => write!(f, "top"),
            LabelPosition::Bottom => write!(f, "bottom"),
        }
    }
}

/// Normalized shortcode parameters.
///
/// Built from the raw attribute map in one place so the defaulting,
/// clamping and enum validation are testable without any host wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderParams {
    pub field: String,
    pub layout: Layout,
    pub size: u32,
    pub display: DisplayMode,
    pub label_position: LabelPosition,
}

impl RenderParams {
    /// Merge supplied attributes over defaults.
    ///
    /// Unrecognized keys are ignored. A missing `field` attribute resolves
    /// to `default_field`; a supplied one is cleaned up but otherwise kept
    /// verbatim, even when the cleanup leaves it empty.
    pub fn from_atts(atts: &HashMap<String, String>, default_field: &str) -> Self {
        let field = match atts.get("field") {
            Some(raw) => sanitize_text_field(raw),
            None => default_field.to_string(),
        };

        Self {
            field,
            layout: atts
                .get("layout")
                .map(|s| Layout::from_raw(s))
                .unwrap_or_default(),
            size: atts
                .get("size")
                .map(|s| coerce_size(s))
                .unwrap_or(DEFAULT_SIZE),
            display: atts
                .get("display")
                .map(|s| DisplayMode::from_raw(s))
                .unwrap_or_default(),
            label_position: atts
                .get("label_position")
                .map(|s| LabelPosition::from_raw(s))
                .unwrap_or_default(),
        }
    }
}

/// Coerce a raw size attribute to a pixel count in [MIN_SIZE, MAX_SIZE].
///
/// Leading ASCII digits are taken ("9px" is 9); a value with no leading
/// digits is corrected to the default before clamping.
fn coerce_size(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    let size = if digits.is_empty() {
        DEFAULT_SIZE
    } else {
        // All-digit input only fails to parse on overflow
        digits.parse::<u32>().unwrap_or(MAX_SIZE)
    };

    size.clamp(MIN_SIZE, MAX_SIZE)
}
