use yew::prelude::*;

use crate::style::{eyebrow, Section, SectionConfig, StyleRole};

/// A `<p>` carrying `style`, or nothing at all when there is no text.
pub fn optional_paragraph(text: Option<AttrValue>, style: String) -> Html {
    match text {
        Some(text) => html! { <p style={style}>{text}</p> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct SubtitleProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
    pub width: u32,
}

/// Small uppercase label shown above a section title. Renders nothing when
/// there is no text.
#[function_component(Subtitle)]
pub fn subtitle(props: &SubtitleProps) -> Html {
    let style = format!(
        "{} letter-spacing: 2px; text-transform: uppercase; margin: 0 0 8px;",
        eyebrow(props.width).to_css()
    );
    optional_paragraph(props.text.clone(), style)
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub section: Section,
    pub width: u32,
    pub title: AttrValue,
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub config: SectionConfig,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let title_style = props.config.resolve(props.section, StyleRole::Title, props.width);
    let subtitle_style = props.config.resolve(props.section, StyleRole::Subtitle, props.width);

    html! {
        <div class="section-heading">
            <Subtitle text={props.eyebrow.clone()} width={props.width} />
            <h2 style={format!("{} margin: 0;", title_style.to_css())}>{props.title.clone()}</h2>
            { optional_paragraph(props.subtitle.clone(), format!("{} margin: 12px 0 0;", subtitle_style.to_css())) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::VNode;

    #[test]
    fn missing_text_renders_nothing() {
        assert!(optional_paragraph(None, "color: red;".to_string()) == html! {});
    }

    #[test]
    fn present_text_renders_a_paragraph() {
        let node = optional_paragraph(Some(AttrValue::from("Hola")), "color: red;".to_string());
        match node {
            VNode::VTag(tag) => assert_eq!(tag.tag(), "p"),
            _ => panic!("expected a <p> element"),
        }
    }

    #[test]
    fn empty_string_is_still_rendered() {
        // Only an absent value collapses; an empty one is the caller's choice.
        let node = optional_paragraph(Some(AttrValue::from("")), String::new());
        assert!(node != html! {});
    }
}
