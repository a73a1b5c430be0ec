use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;
use crate::sections::subtitle::SectionHeading;
use crate::style::{Breakpoint, Section, SectionConfig, StyleRole};

pub const PARAGRAPHS: [&str; 2] = [
    "Givers es una plataforma de financiamiento colectivo donde cualquier persona u organización puede crear una campaña y recibir donaciones de su comunidad.",
    "Cada aporte se registra de forma transparente para que los donantes sigan el avance de la causa que apoyaron, desde el primer peso hasta la meta.",
];

/// Image and text stack vertically at or below the medium breakpoint.
pub fn stacked(width: u32) -> bool {
    Breakpoint::Md.contains(width)
}

#[derive(Properties, PartialEq)]
pub struct WhatIsGiversProps {
    pub width: u32,
    #[prop_or_default]
    pub config: SectionConfig,
}

#[styled_component(WhatIsGivers)]
pub fn what_is_givers(props: &WhatIsGiversProps) -> Html {
    let wrapper = props.config.resolve(Section::WhatIsGivers, StyleRole::Wrapper, props.width);
    let body = props.config.resolve(Section::WhatIsGivers, StyleRole::Subtitle, props.width);
    let stacked = stacked(props.width);

    let style = css!(
        r#"
        & .what-is-content {
            display: flex;
            align-items: center;
            gap: 48px;
            max-width: 1100px;
            margin: 0 auto;
        }
        & .what-is-content.stacked {
            flex-direction: column;
            gap: 32px;
        }
        & .what-is-text,
        & .what-is-image {
            flex: 1;
        }
        & .what-is-image img {
            width: 100%;
            border-radius: 24px;
        }
        & .what-is-link {
            display: inline-block;
            margin-top: 24px;
            color: #2f9e44;
            font-weight: 700;
        }
        "#
    );

    html! {
        <section class={classes!(style, "what-is-givers")} style={wrapper.to_css()}>
            <div class={classes!("what-is-content", stacked.then_some("stacked"))}>
                <div class="what-is-image">
                    <img src={config::WHAT_IS_GIVERS_IMAGE_URL} alt="Voluntarios de Givers" loading="lazy" />
                </div>
                <div class="what-is-text">
                    <SectionHeading
                        section={Section::WhatIsGivers}
                        width={props.width}
                        eyebrow={AttrValue::from("Sobre nosotros")}
                        title="¿Qué es Givers?"
                        config={props.config.clone()}
                    />
                    { for PARAGRAPHS.iter().map(|text| html! {
                        <p style={body.to_css()}>{*text}</p>
                    }) }
                    <a href={config::CAMPAIGNS_PATH} class="what-is-link">{"Explorar campañas →"}</a>
                </div>
            </div>
        </section>
    }
}
