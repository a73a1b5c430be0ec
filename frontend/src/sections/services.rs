use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;
use crate::content::SERVICES;
use crate::sections::subtitle::SectionHeading;
use crate::style::{Breakpoint, Section, SectionConfig, StyleRole, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceCard {
    pub key: u32,
    pub icon_url: String,
    pub title: &'static str,
    pub description: &'static str,
    /// Spans the whole row. Only the last card gets this, and only on
    /// narrow viewports where the grid drops to two columns or fewer.
    pub wide: bool,
}

const WIDE_CARD_INDEX: usize = 2;

pub fn service_cards(width: u32) -> Vec<ServiceCard> {
    let narrow = Breakpoint::Md.contains(width);
    SERVICES
        .iter()
        .enumerate()
        .map(|(index, service)| ServiceCard {
            key: service.id,
            icon_url: config::asset_url(service.icon),
            title: service.title,
            description: service.description,
            wide: narrow && index == WIDE_CARD_INDEX,
        })
        .collect()
}

pub fn grid_columns(width: u32) -> u32 {
    match Viewport::from_width(width) {
        Viewport::Desktop => 3,
        Viewport::Tablet => 2,
        Viewport::Mobile => 1,
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub width: u32,
    #[prop_or_default]
    pub config: SectionConfig,
}

#[styled_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let wrapper = props.config.resolve(Section::Services, StyleRole::Wrapper, props.width);
    let columns = grid_columns(props.width);

    let style = css!(
        r#"
        & .services-grid {
            display: grid;
            gap: 32px;
            max-width: 1100px;
            margin: 48px auto 0;
        }
        & .service-card {
            display: flex;
            flex-direction: column;
            align-items: center;
            text-align: center;
            padding: 32px 24px;
            border-radius: 20px;
            background: #ffffff;
            box-shadow: 0 8px 28px rgba(0, 0, 0, 0.08);
        }
        & .service-card.wide {
            grid-column: 1 / -1;
            max-width: 520px;
            justify-self: center;
        }
        & .service-card img {
            width: 72px;
            height: 72px;
            margin-bottom: 20px;
        }
        & .service-card h3 {
            margin: 0 0 8px;
            font-size: 20px;
            color: #1a1b1e;
        }
        & .service-card p {
            margin: 0;
            color: #5c5f66;
            line-height: 1.6;
        }
        "#
    );

    html! {
        <section class={classes!(style, "services-section")} style={wrapper.to_css()}>
            <SectionHeading
                section={Section::Services}
                width={props.width}
                eyebrow={AttrValue::from("Cómo funciona")}
                title="Recaudar fondos nunca fue tan simple"
                config={props.config.clone()}
            />
            <div class="services-grid" style={format!("grid-template-columns: repeat({}, minmax(0, 1fr));", columns)}>
                { for service_cards(props.width).into_iter().map(|card| html! {
                    <div key={card.key} class={classes!("service-card", card.wide.then_some("wide"))}>
                        <img src={card.icon_url} alt={card.title} loading="lazy" />
                        <h3>{card.title}</h3>
                        <p>{card.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
