use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names referenced from templates.
pub mod names {
    pub const INDEX: &str = "index";
    pub const TITLE: &str = "title";
    pub const DETAIL_TITLE: &str = "detail_title";
    pub const PREVIEW: &str = "preview";
    pub const TAG: &str = "tag";
    pub const TAG_SELECTED: &str = "tag_selected";
    pub const AUTHOR: &str = "author";
    pub const AVATAR: &str = "avatar";
    pub const TIME: &str = "time";
    pub const MUTED: &str = "muted";
    pub const HEADING: &str = "heading";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const ERROR: &str = "error";
}

const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named console styles. Unknown names are flagged in the output so template
/// typos show up.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static BLOG_THEME: Lazy<Theme> = Lazy::new(|| {
    use names::*;
    Theme::new()
        .add(INDEX, Style::new().yellow())
        .add(TITLE, Style::new().bold())
        .add(DETAIL_TITLE, Style::new().bold().underlined())
        .add(PREVIEW, Style::new())
        .add(TAG, Style::new().cyan())
        .add(TAG_SELECTED, Style::new().black().on_cyan())
        .add(AUTHOR, Style::new().green())
        .add(AVATAR, Style::new().bold().magenta())
        .add(TIME, Style::new().color256(246).italic())
        .add(MUTED, Style::new().dim())
        .add(HEADING, Style::new().bold())
        .add(INFO, Style::new().dim())
        .add(SUCCESS, Style::new().green())
        .add(ERROR, Style::new().red())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_returns_text_unchanged() {
        assert_eq!(BLOG_THEME.apply(names::TAG, "React", false), "React");
    }

    #[test]
    fn color_mode_adds_ansi_codes() {
        let styled = BLOG_THEME.apply(names::ERROR, "boom", true);
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("boom"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(BLOG_THEME.apply("tpyo", "Hello", false), "(!?) Hello");
    }
}
