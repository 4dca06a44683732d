use quill_config::TextBoxConfig;
use quill_paint::{Color, Shadow};
use tracing::warn;

/// Visual parameters of a [`TextBox`](crate::TextBox).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBoxStyle {
    pub background: Color,
    pub border_color: Color,
    pub focus_border_color: Color,
    pub border_width: f32,
    pub focus_border_width: f32,
    pub corner_radius: f32,
    /// Horizontal inset of the text frame from the box edge.
    pub padding_x: f32,
    /// Vertical inset of the text frame from the box edge.
    pub padding_y: f32,
    pub text_color: Color,
    pub placeholder_color: Color,
    pub selection_color: Color,
    pub caret_color: Color,
    pub caret_width: f32,
    pub shadow: Option<Shadow>,
}

impl Default for TextBoxStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba(255, 255, 255, 255),
            border_color: Color::rgba(200, 200, 200, 255),
            focus_border_color: Color::rgba(63, 130, 246, 255),
            border_width: 1.0,
            focus_border_width: 2.0,
            corner_radius: 6.0,
            padding_x: 8.0,
            padding_y: 4.0,
            text_color: Color::rgba(0, 0, 0, 255),
            placeholder_color: Color::rgba(120, 120, 130, 255),
            selection_color: Color::rgba(63, 130, 246, 90),
            caret_color: Color::rgba(63, 130, 246, 255),
            caret_width: 1.5,
            shadow: None,
        }
    }
}

impl TextBoxStyle {
    pub fn default_shadow() -> Shadow {
        Shadow {
            offset: [0.0, 2.0],
            spread: 0.0,
            blur_radius: 6.0,
            color: Color::rgba(0, 0, 0, 60),
        }
    }

    /// Defaults overridden by whatever the config sets. Unparseable colours
    /// are reported and left at their defaults.
    pub fn from_config(config: &TextBoxConfig) -> Self {
        let mut style = Self::default();
        let colors = [
            (&config.background, &mut style.background, "background"),
            (&config.border, &mut style.border_color, "border"),
            (&config.focus_border, &mut style.focus_border_color, "focus_border"),
            (&config.text, &mut style.text_color, "text"),
            (&config.placeholder, &mut style.placeholder_color, "placeholder"),
            (&config.selection, &mut style.selection_color, "selection"),
            (&config.caret, &mut style.caret_color, "caret"),
        ];
        for (value, slot, name) in colors {
            let Some(hex) = value else { continue };
            match Color::from_hex(hex) {
                Some(color) => *slot = color,
                None => warn!(field = name, value = %hex, "invalid colour in text box config"),
            }
        }
        if let Some(radius) = config.corner_radius {
            style.corner_radius = radius.max(0.0);
        }
        if let Some(padding) = config.padding {
            style.padding_x = padding.max(0.0);
        }
        if config.shadow {
            style.shadow = Some(Self::default_shadow());
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_overrides_defaults() {
        let config = TextBoxConfig {
            background: Some("#202020".into()),
            caret: Some("not-a-colour".into()),
            corner_radius: Some(0.0),
            padding: Some(12.0),
            shadow: true,
            ..TextBoxConfig::default()
        };
        let style = TextBoxStyle::from_config(&config);
        assert_eq!(style.background, Color::rgb(0x20, 0x20, 0x20));
        assert_eq!(style.caret_color, TextBoxStyle::default().caret_color);
        assert_eq!(style.corner_radius, 0.0);
        assert_eq!(style.padding_x, 12.0);
        assert!(style.shadow.is_some());
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(TextBoxStyle::from_config(&TextBoxConfig::default()), TextBoxStyle::default());
    }
}
