use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;
use crate::sections::subtitle::optional_paragraph;
use crate::style::{ResolvedStyle, Section, SectionConfig, StyleRole, Viewport};

/// Inline style of the banner. Sizing follows the image so it always covers
/// the banner whatever the wrapper emits before it.
pub fn hero_inline_style(wrapper: &ResolvedStyle, background: &str) -> String {
    format!(
        "{} background-image: url('{}'); background-size: cover; background-position: center;",
        wrapper.to_css(),
        background
    )
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub width: u32,
    #[prop_or(AttrValue::Static("Haz realidad las causas que te importan"))]
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(AttrValue::Static(config::HERO_BACKGROUND_URL))]
    pub background: AttrValue,
    #[prop_or_default]
    pub config: SectionConfig,
}

#[styled_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let wrapper = props.config.resolve(Section::Hero, StyleRole::Wrapper, props.width);
    let title = props.config.resolve(Section::Hero, StyleRole::Title, props.width);
    let subtitle = props.config.resolve(Section::Hero, StyleRole::Subtitle, props.width);
    let centered = Viewport::from_width(props.width) == Viewport::Mobile;

    let style = css!(
        r#"
        position: relative;

        & .hero-overlay {
            position: absolute;
            inset: 0;
            background: linear-gradient(90deg, rgba(0, 0, 0, 0.72), rgba(0, 0, 0, 0.25));
        }
        & .hero-inner {
            position: relative;
            max-width: 680px;
        }
        & .hero-inner.centered {
            margin: 0 auto;
        }
        & .hero-actions {
            display: flex;
            flex-wrap: wrap;
            gap: 16px;
            margin-top: 32px;
        }
        & .hero-inner.centered .hero-actions {
            justify-content: center;
        }
        & .hero-button {
            padding: 14px 28px;
            border-radius: 999px;
            font-weight: 700;
            text-decoration: none;
        }
        & .hero-button.primary {
            background: #2f9e44;
            color: #ffffff;
        }
        & .hero-button.secondary {
            border: 2px solid #ffffff;
            color: #ffffff;
        }
        "#
    );

    html! {
        <header
            class={classes!(style, "hero")}
            style={hero_inline_style(&wrapper, &props.background)}
        >
            <div class="hero-overlay"></div>
            <div class={classes!("hero-inner", centered.then_some("centered"))}>
                <h1 style={format!("{} margin: 0; line-height: 1.15;", title.to_css())}>
                    {props.title.clone()}
                </h1>
                { optional_paragraph(props.subtitle.clone(), format!("{} margin: 20px 0 0;", subtitle.to_css())) }
                <div class="hero-actions">
                    <a href={config::CREATE_CAMPAIGN_PATH} class="hero-button primary">
                        {"Crear campaña"}
                    </a>
                    <a href={config::CAMPAIGNS_PATH} class="hero-button secondary">
                        {"Ver campañas"}
                    </a>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{resolve, BoxProps};

    #[test]
    fn inline_style_keeps_the_image_covering() {
        for width in [375, 992, 1440] {
            let css = hero_inline_style(&resolve(Section::Hero, StyleRole::Wrapper, width), config::HERO_BACKGROUND_URL);
            assert!(!css.contains("background:"), "{}", css);
            assert!(css.contains("background-size: cover;"));
            assert!(css.contains("background-position: center;"));
            let image = css.find("background-image").unwrap();
            assert!(css.find("background-size").unwrap() > image);
        }
    }

    #[test]
    fn inline_style_carries_wrapper_overrides() {
        let config = SectionConfig {
            box_props: BoxProps { background: Some("#000000".into()), ..BoxProps::default() },
            ..SectionConfig::default()
        };
        let wrapper = config.resolve(Section::Hero, StyleRole::Wrapper, 1440);
        let css = hero_inline_style(&wrapper, "https://example.org/bg.jpg");
        assert!(css.starts_with("padding: 160px 64px; background-color: #000000;"));
        assert!(css.contains("url('https://example.org/bg.jpg')"));
    }
}
