//! Status publisher: readiness flag + model label → header badge
//!
//! A pure, total mapping with no failure modes. The model label is passed
//! through verbatim for display and has no effect on the status level.

use ratatui::style::Color;

/// Severity of the status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Positive,
    Warning,
}

impl StatusLevel {
    pub fn color(&self) -> Color {
        match self {
            Self::Positive => Color::Green,
            Self::Warning => Color::Yellow,
        }
    }
}

/// Header status descriptor for one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub text: &'static str,
    pub model_label: String,
}

impl StatusBadge {
    /// `ready == true` → `{Positive, READY}`; else `{Warning, INITIALIZING}`.
    /// An unset model label renders as `—`.
    pub fn publish(ready: bool, model_label: Option<&str>) -> Self {
        let (level, text) = if ready {
            (StatusLevel::Positive, "READY")
        } else {
            (StatusLevel::Warning, "INITIALIZING")
        };
        Self {
            level,
            text,
            model_label: model_label.unwrap_or("—").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_maps_to_positive() {
        let badge = StatusBadge::publish(true, Some("openai/gpt-4o-mini"));
        assert_eq!(badge.level, StatusLevel::Positive);
        assert_eq!(badge.text, "READY");
        assert_eq!(badge.model_label, "openai/gpt-4o-mini");
    }

    #[test]
    fn test_not_ready_maps_to_warning() {
        let badge = StatusBadge::publish(false, Some("openai/gpt-4o-mini"));
        assert_eq!(badge.level, StatusLevel::Warning);
        assert_eq!(badge.text, "INITIALIZING");
    }

    #[test]
    fn test_model_label_has_no_effect_on_level() {
        for label in [None, Some(""), Some("anything at all")] {
            assert_eq!(StatusBadge::publish(true, label).level, StatusLevel::Positive);
            assert_eq!(StatusBadge::publish(false, label).level, StatusLevel::Warning);
        }
    }

    #[test]
    fn test_unset_label_renders_em_dash() {
        assert_eq!(StatusBadge::publish(false, None).model_label, "—");
    }

    #[test]
    fn test_empty_label_passes_through_verbatim() {
        assert_eq!(StatusBadge::publish(true, Some("")).model_label, "");
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(StatusLevel::Positive.color(), Color::Green);
        assert_eq!(StatusLevel::Warning.color(), Color::Yellow);
    }
}
