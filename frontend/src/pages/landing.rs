use yew::prelude::*;

use crate::layout::GiversLayoutGuest;
use crate::sections::categories::{Categories, Donations};
use crate::sections::hero::Hero;
use crate::sections::services::Services;
use crate::sections::testimonials::Testimonials;
use crate::sections::what_is_givers::WhatIsGivers;
use crate::style::{BoxProps, Section, SectionConfig};
use crate::viewport::use_viewport_width;

const SERVICES_ON_DONATIONS_BACKGROUND: &str = "#f8f9fa";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingVariant {
    Main,
    Donations,
}

impl LandingVariant {
    /// Sections in the order they appear on the page.
    pub fn sections(self) -> &'static [Section] {
        match self {
            LandingVariant::Main => &[
                Section::Hero,
                Section::WhatIsGivers,
                Section::Categories,
                Section::Services,
                Section::Testimonials,
            ],
            LandingVariant::Donations => &[
                Section::Hero,
                Section::Donations,
                Section::Services,
                Section::Testimonials,
            ],
        }
    }

    fn hero_subtitle(self) -> &'static str {
        match self {
            LandingVariant::Main => "Crea tu campaña gratis y recibe el apoyo de miles de personas que quieren ayudar.",
            LandingVariant::Donations => "Elige una causa, dona en minutos y sigue el impacto de tu aporte.",
        }
    }

    /// Per-section configuration handed down from the page.
    pub fn config(self, section: Section) -> SectionConfig {
        match (self, section) {
            // Sits between two tinted sections on this page.
            (LandingVariant::Donations, Section::Services) => SectionConfig {
                box_props: BoxProps {
                    background: Some(SERVICES_ON_DONATIONS_BACKGROUND.to_string()),
                    ..BoxProps::default()
                },
                ..SectionConfig::default()
            },
            _ => SectionConfig::default(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or(LandingVariant::Main)]
    pub variant: LandingVariant,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let width = use_viewport_width();
    let variant = props.variant;

    let render = |section: Section| -> Html {
        let config = variant.config(section);
        match section {
            Section::Hero => html! {
                <Hero width={width} subtitle={AttrValue::from(variant.hero_subtitle())} config={config} />
            },
            Section::WhatIsGivers => html! { <WhatIsGivers width={width} config={config} /> },
            Section::Categories => html! { <Categories width={width} config={config} /> },
            Section::Donations => html! { <Donations width={width} config={config} /> },
            Section::Services => html! { <Services width={width} config={config} /> },
            Section::Testimonials => html! { <Testimonials width={width} config={config} /> },
        }
    };

    html! {
        <GiversLayoutGuest>
            <div class="landing-page">
                { for variant.sections().iter().map(|section| render(*section)) }
            </div>
        </GiversLayoutGuest>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <GiversLayoutGuest>
            <div class="not-found" style="padding: 120px 16px; text-align: center;">
                <h1>{"Página no encontrada"}</h1>
                <p>{"La página que buscas no existe o fue movida."}</p>
            </div>
        </GiversLayoutGuest>
    }
}
