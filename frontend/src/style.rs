//! Responsive style resolution.
//!
//! Every section names a few visual roles (title, subtitle, wrapper). The
//! concrete attributes for a role depend only on the section, the role and
//! the viewport width, so [`resolve`] is a plain function that components
//! call again whenever the width changes. Caller supplied [`SectionConfig`]
//! values are layered on top of the resolved defaults.

use std::fmt::Write;

/// Viewport thresholds in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Sm,
    Md,
}

impl Breakpoint {
    pub fn px(self) -> u32 {
        match self {
            Breakpoint::Sm => 768,
            Breakpoint::Md => 992,
        }
    }

    /// A width equal to the threshold counts as below it.
    pub fn contains(self, width: u32) -> bool {
        width <= self.px()
    }
}

/// Coarse bucket used by the style tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Tablet,
    Desktop,
}

impl Viewport {
    pub fn from_width(width: u32) -> Self {
        if Breakpoint::Sm.contains(width) {
            Viewport::Mobile
        } else if Breakpoint::Md.contains(width) {
            Viewport::Tablet
        } else {
            Viewport::Desktop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Categories,
    Donations,
    Services,
    Testimonials,
    WhatIsGivers,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleRole {
    Title,
    Subtitle,
    Wrapper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spacing {
    pub y: u32,
    pub x: u32,
}

impl Spacing {
    pub const fn new(y: u32, x: u32) -> Self {
        Spacing { y, x }
    }
}

/// Concrete attributes for one role at one viewport width.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub font_size: Option<u32>,
    pub font_weight: Option<u32>,
    pub text_align: Option<TextAlign>,
    pub color: Option<String>,
    pub padding: Option<Spacing>,
    pub background: Option<String>,
}

impl ResolvedStyle {
    fn text(font_size: u32, font_weight: u32, text_align: TextAlign, color: &str) -> Self {
        ResolvedStyle {
            font_size: Some(font_size),
            font_weight: Some(font_weight),
            text_align: Some(text_align),
            color: Some(color.to_string()),
            padding: None,
            background: None,
        }
    }

    fn block(padding: Spacing, background: &str) -> Self {
        ResolvedStyle {
            font_size: None,
            font_weight: None,
            text_align: None,
            color: None,
            padding: Some(padding),
            background: Some(background.to_string()),
        }
    }

    pub fn with_text(mut self, props: &TextProps) -> Self {
        if let Some(size) = props.size {
            self.font_size = Some(size);
        }
        if let Some(weight) = props.weight {
            self.font_weight = Some(weight);
        }
        if let Some(align) = props.align {
            self.text_align = Some(align);
        }
        if let Some(color) = &props.color {
            self.color = Some(color.clone());
        }
        self
    }

    pub fn with_box(mut self, props: &BoxProps) -> Self {
        if props.padding_y.is_some() || props.padding_x.is_some() {
            let current = self.padding.unwrap_or(Spacing::new(0, 0));
            self.padding = Some(Spacing::new(
                props.padding_y.unwrap_or(current.y),
                props.padding_x.unwrap_or(current.x),
            ));
        }
        if let Some(background) = &props.background {
            self.background = Some(background.clone());
        }
        self
    }

    /// Inline declaration list, in a fixed property order.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(size) = self.font_size {
            let _ = write!(css, "font-size: {}px; ", size);
        }
        if let Some(weight) = self.font_weight {
            let _ = write!(css, "font-weight: {}; ", weight);
        }
        if let Some(align) = self.text_align {
            let _ = write!(css, "text-align: {}; ", align.as_css());
        }
        if let Some(color) = &self.color {
            let _ = write!(css, "color: {}; ", color);
        }
        if let Some(padding) = self.padding {
            let _ = write!(css, "padding: {}px {}px; ", padding.y, padding.x);
        }
        if let Some(background) = &self.background {
            let _ = write!(css, "background-color: {}; ", background);
        }
        css.trim_end().to_string()
    }
}

/// Typography overrides for a title or subtitle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextProps {
    pub size: Option<u32>,
    pub weight: Option<u32>,
    pub align: Option<TextAlign>,
    pub color: Option<String>,
}

/// Spacing and background overrides for a section wrapper.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxProps {
    pub padding_y: Option<u32>,
    pub padding_x: Option<u32>,
    pub background: Option<String>,
}

/// Style configuration a page hands to a section. The section passes each
/// part to the leaf that renders it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionConfig {
    pub box_props: BoxProps,
    pub title_props: TextProps,
    pub subtitle_props: TextProps,
}

impl SectionConfig {
    pub fn resolve(&self, section: Section, role: StyleRole, width: u32) -> ResolvedStyle {
        let base = resolve(section, role, width);
        match role {
            StyleRole::Title => base.with_text(&self.title_props),
            StyleRole::Subtitle => base.with_text(&self.subtitle_props),
            StyleRole::Wrapper => base.with_box(&self.box_props),
        }
    }
}

const INK: &str = "#1a1b1e";
const MUTED: &str = "#5c5f66";
const WHITE: &str = "#ffffff";
const BRAND: &str = "#2f9e44";
const PAPER: &str = "#ffffff";
const MIST: &str = "#f1f8f3";

pub fn resolve(section: Section, role: StyleRole, width: u32) -> ResolvedStyle {
    let viewport = Viewport::from_width(width);
    match role {
        StyleRole::Title => title(section, viewport),
        StyleRole::Subtitle => subtitle(section, viewport),
        StyleRole::Wrapper => wrapper(section, viewport),
    }
}

/// Small uppercase label above a section title. Same for every section.
pub fn eyebrow(width: u32) -> ResolvedStyle {
    match Viewport::from_width(width) {
        Viewport::Mobile => ResolvedStyle::text(14, 700, TextAlign::Center, BRAND),
        _ => ResolvedStyle::text(16, 700, TextAlign::Center, BRAND),
    }
}

fn title(section: Section, viewport: Viewport) -> ResolvedStyle {
    use Viewport::*;
    match (section, viewport) {
        (Section::Hero, Desktop) => ResolvedStyle::text(56, 800, TextAlign::Left, WHITE),
        (Section::Hero, Tablet) => ResolvedStyle::text(44, 800, TextAlign::Left, WHITE),
        (Section::Hero, Mobile) => ResolvedStyle::text(32, 800, TextAlign::Center, WHITE),
        (Section::WhatIsGivers, Desktop) => ResolvedStyle::text(40, 700, TextAlign::Left, INK),
        (Section::WhatIsGivers, Tablet) => ResolvedStyle::text(34, 700, TextAlign::Left, INK),
        (Section::WhatIsGivers, Mobile) => ResolvedStyle::text(28, 700, TextAlign::Center, INK),
        (_, Desktop) => ResolvedStyle::text(40, 700, TextAlign::Center, INK),
        (_, Tablet) => ResolvedStyle::text(34, 700, TextAlign::Center, INK),
        (_, Mobile) => ResolvedStyle::text(26, 700, TextAlign::Center, INK),
    }
}

fn subtitle(section: Section, viewport: Viewport) -> ResolvedStyle {
    use Viewport::*;
    match (section, viewport) {
        (Section::Hero, Desktop) => ResolvedStyle::text(20, 400, TextAlign::Left, WHITE),
        (Section::Hero, Tablet) => ResolvedStyle::text(18, 400, TextAlign::Left, WHITE),
        (Section::Hero, Mobile) => ResolvedStyle::text(16, 400, TextAlign::Center, WHITE),
        (Section::WhatIsGivers, Mobile) => ResolvedStyle::text(16, 400, TextAlign::Center, MUTED),
        (Section::WhatIsGivers, _) => ResolvedStyle::text(18, 400, TextAlign::Left, MUTED),
        (_, Mobile) => ResolvedStyle::text(15, 400, TextAlign::Center, MUTED),
        (_, _) => ResolvedStyle::text(18, 400, TextAlign::Center, MUTED),
    }
}

fn wrapper(section: Section, viewport: Viewport) -> ResolvedStyle {
    use Viewport::*;
    let background = match section {
        Section::Donations | Section::Testimonials => MIST,
        Section::Hero => "transparent",
        _ => PAPER,
    };
    let padding = match (section, viewport) {
        (Section::Hero, Desktop) => Spacing::new(160, 64),
        (Section::Hero, Tablet) => Spacing::new(120, 32),
        (Section::Hero, Mobile) => Spacing::new(96, 16),
        (_, Desktop) => Spacing::new(80, 64),
        (_, Tablet) => Spacing::new(64, 32),
        (_, Mobile) => Spacing::new(48, 16),
    };
    ResolvedStyle::block(padding, background)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [Section; 6] = [
        Section::Hero,
        Section::Categories,
        Section::Donations,
        Section::Services,
        Section::Testimonials,
        Section::WhatIsGivers,
    ];
    const ROLES: [StyleRole; 3] = [StyleRole::Title, StyleRole::Subtitle, StyleRole::Wrapper];

    #[test]
    fn breakpoint_width_uses_smaller_variant() {
        assert_eq!(Viewport::from_width(768), Viewport::Mobile);
        assert_eq!(Viewport::from_width(769), Viewport::Tablet);
        assert_eq!(Viewport::from_width(992), Viewport::Tablet);
        assert_eq!(Viewport::from_width(993), Viewport::Desktop);
        assert_eq!(Viewport::from_width(0), Viewport::Mobile);
    }

    #[test]
    fn hero_title_switches_at_breakpoints() {
        let at_md = resolve(Section::Hero, StyleRole::Title, Breakpoint::Md.px());
        let above_md = resolve(Section::Hero, StyleRole::Title, Breakpoint::Md.px() + 1);
        assert_eq!(at_md.font_size, Some(44));
        assert_eq!(above_md.font_size, Some(56));

        let at_sm = resolve(Section::Hero, StyleRole::Title, Breakpoint::Sm.px());
        assert_eq!(at_sm.font_size, Some(32));
        assert_eq!(at_sm.text_align, Some(TextAlign::Center));
    }

    #[test]
    fn resolution_is_idempotent() {
        let config = SectionConfig {
            title_props: TextProps { color: Some("#000".into()), ..TextProps::default() },
            ..SectionConfig::default()
        };
        for section in SECTIONS {
            for role in ROLES {
                for width in [320, 768, 900, 992, 1440] {
                    assert_eq!(
                        config.resolve(section, role, width),
                        config.resolve(section, role, width)
                    );
                }
            }
        }
    }

    #[test]
    fn every_role_resolves_to_something() {
        for section in SECTIONS {
            for role in ROLES {
                assert!(!resolve(section, role, 1024).to_css().is_empty());
            }
        }
    }

    #[test]
    fn overrides_win_over_responsive_defaults() {
        let config = SectionConfig {
            box_props: BoxProps { padding_y: Some(12), ..BoxProps::default() },
            title_props: TextProps { size: Some(30), align: Some(TextAlign::Right), ..TextProps::default() },
            subtitle_props: TextProps::default(),
        };
        let title = config.resolve(Section::Categories, StyleRole::Title, 1280);
        assert_eq!(title.font_size, Some(30));
        assert_eq!(title.text_align, Some(TextAlign::Right));
        assert_eq!(title.font_weight, Some(700));

        let wrapper = config.resolve(Section::Categories, StyleRole::Wrapper, 1280);
        assert_eq!(wrapper.padding, Some(Spacing::new(12, 64)));

        let subtitle = config.resolve(Section::Categories, StyleRole::Subtitle, 1280);
        assert_eq!(subtitle, resolve(Section::Categories, StyleRole::Subtitle, 1280));
    }

    #[test]
    fn css_is_emitted_in_fixed_order() {
        let style = resolve(Section::Services, StyleRole::Title, 400);
        assert_eq!(
            style.to_css(),
            "font-size: 26px; font-weight: 700; text-align: center; color: #1a1b1e;"
        );
        let wrapper = resolve(Section::Donations, StyleRole::Wrapper, 1200);
        assert_eq!(wrapper.to_css(), "padding: 80px 64px; background-color: #f1f8f3;");
    }

    #[test]
    fn wrapper_css_never_uses_background_shorthand() {
        // The shorthand would reset background-size/position set elsewhere.
        for section in SECTIONS {
            for width in [375, 992, 1440] {
                let css = resolve(section, StyleRole::Wrapper, width).to_css();
                assert!(!css.contains("background:"), "{}", css);
            }
        }
    }

    #[test]
    fn eyebrow_shrinks_on_mobile() {
        assert_eq!(eyebrow(Breakpoint::Sm.px()).font_size, Some(14));
        assert_eq!(eyebrow(Breakpoint::Sm.px() + 1).font_size, Some(16));
    }
}
