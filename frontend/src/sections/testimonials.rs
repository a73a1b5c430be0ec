use log::error;
use stylist::yew::styled_component;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::{self, Testimonial};
use crate::icons::{Icon, IconKey};
use crate::sections::subtitle::SectionHeading;
use crate::style::{Section, SectionConfig, StyleRole, Viewport};

const AUTOPLAY_MS: u32 = 6000;

#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub key: u32,
    pub name: String,
    pub campaign: String,
    pub message: String,
    pub icon: IconKey,
    pub avatar: Option<String>,
}

impl From<&Testimonial> for Slide {
    fn from(record: &Testimonial) -> Self {
        Slide {
            key: record.id,
            name: record.name.clone(),
            campaign: record.campaign.clone(),
            message: record.message.clone(),
            icon: IconKey::resolve_or_placeholder(&record.icon),
            avatar: record.avatar.clone(),
        }
    }
}

pub fn testimonial_slides(records: &[Testimonial]) -> Vec<Slide> {
    records.iter().map(Slide::from).collect()
}

pub fn slides_per_view(width: u32) -> usize {
    match Viewport::from_width(width) {
        Viewport::Desktop => 3,
        Viewport::Tablet => 2,
        Viewport::Mobile => 1,
    }
}

/// Highest index the track can start at without leaving empty space.
pub fn last_start(len: usize, per_view: usize) -> usize {
    len.saturating_sub(per_view)
}

pub fn next_index(current: usize, len: usize, per_view: usize) -> usize {
    if current >= last_start(len, per_view) {
        0
    } else {
        current + 1
    }
}

pub fn prev_index(current: usize, len: usize, per_view: usize) -> usize {
    let last = last_start(len, per_view);
    if current == 0 || current > last {
        last
    } else {
        current - 1
    }
}

/// Slides for a raw testimonial document. A source that fails to load gives
/// no slides, and the section then renders nothing.
pub fn slides_from_source(raw: &str) -> Vec<Slide> {
    match content::parse_testimonials(raw) {
        Ok(records) => testimonial_slides(&records),
        Err(err) => {
            error!("Could not load testimonials: {}", err);
            Vec::new()
        }
    }
}

fn author_avatar(slide: &Slide) -> Html {
    match &slide.avatar {
        Some(avatar) => html! { <img src={avatar.clone()} alt={slide.name.clone()} loading="lazy" /> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub width: u32,
    #[prop_or(AttrValue::Static(content::TESTIMONIALS_JSON))]
    pub source: AttrValue,
    #[prop_or_default]
    pub config: SectionConfig,
}

#[styled_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let slides = use_memo(|source| slides_from_source(source), props.source.clone());
    let current = use_state(|| 0usize);

    let len = slides.len();
    let per_view = slides_per_view(props.width);
    // Clamp after a resize widened the view past the current start.
    let start = (*current).min(last_start(len, per_view));
    let can_move = len > per_view;

    {
        let current = current.clone();
        use_interval(
            move || current.set(next_index(start, len, per_view)),
            if can_move { AUTOPLAY_MS } else { 0 },
        );
    }

    let on_prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(prev_index(start, len, per_view)))
    };
    let on_next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_index(start, len, per_view)))
    };

    let wrapper = props.config.resolve(Section::Testimonials, StyleRole::Wrapper, props.width);
    let slide_basis = 100.0 / per_view as f64;
    let offset = slide_basis * start as f64;

    let style = css!(
        r#"
        & .carousel {
            position: relative;
            max-width: 1200px;
            margin: 48px auto 0;
            overflow: hidden;
        }
        & .carousel-track {
            display: flex;
            transition: transform 0.5s ease;
        }
        & .carousel-slide {
            flex-shrink: 0;
            box-sizing: border-box;
            padding: 0 12px;
        }
        & .testimonial-card {
            height: 100%;
            padding: 28px;
            border-radius: 20px;
            background: #ffffff;
            box-shadow: 0 6px 20px rgba(0, 0, 0, 0.06);
        }
        & .testimonial-message {
            color: #373a40;
            line-height: 1.6;
            font-style: italic;
        }
        & .testimonial-author {
            display: flex;
            align-items: center;
            gap: 12px;
            margin-top: 20px;
        }
        & .testimonial-author img {
            width: 48px;
            height: 48px;
            border-radius: 50%;
            object-fit: cover;
        }
        & .testimonial-campaign {
            color: #2f9e44;
            font-size: 14px;
        }
        & .carousel-controls {
            display: flex;
            justify-content: center;
            align-items: center;
            gap: 16px;
            margin-top: 24px;
        }
        & .carousel-controls button {
            display: flex;
            border: none;
            border-radius: 50%;
            padding: 6px;
            background: #ffffff;
            cursor: pointer;
        }
        & .carousel-dot {
            width: 10px;
            height: 10px;
            border-radius: 50%;
            background: #ced4da;
        }
        & .carousel-dot.active {
            background: #2f9e44;
        }
        "#
    );

    if slides.is_empty() {
        return html! {};
    }

    html! {
        <section class={classes!(style, "testimonials-section")} style={wrapper.to_css()}>
            <SectionHeading
                section={Section::Testimonials}
                width={props.width}
                eyebrow={AttrValue::from("Testimonios")}
                title="Historias que inspiran"
                subtitle={AttrValue::from("Personas reales que hicieron posible su causa con Givers.")}
                config={props.config.clone()}
            />
            <div class="carousel">
                <div class="carousel-track" style={format!("transform: translateX(-{}%);", offset)}>
                    { for slides.iter().map(|slide| html! {
                        <div key={slide.key} class="carousel-slide" style={format!("flex-basis: {}%;", slide_basis)}>
                            <div class="testimonial-card">
                                <Icon icon={slide.icon} size={32} />
                                <p class="testimonial-message">{&slide.message}</p>
                                <div class="testimonial-author">
                                    { author_avatar(slide) }
                                    <div>
                                        <strong>{&slide.name}</strong>
                                        <div class="testimonial-campaign">{&slide.campaign}</div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            {
                if can_move {
                    html! {
                        <div class="carousel-controls">
                            <button aria-label="Anterior" onclick={on_prev}>
                                <Icon icon={IconKey::ChevronLeft} size={24} />
                            </button>
                            { for (0..=last_start(len, per_view)).map(|position| html! {
                                <span key={position} class={classes!("carousel-dot", (position == start).then_some("active"))}></span>
                            }) }
                            <button aria-label="Siguiente" onclick={on_next}>
                                <Icon icon={IconKey::ChevronRight} size={24} />
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, icon: &str) -> Testimonial {
        Testimonial {
            id,
            name: format!("Persona {}", id),
            campaign: "Campaña".to_string(),
            message: "Gracias".to_string(),
            icon: icon.to_string(),
            avatar: None,
        }
    }

    #[test]
    fn one_slide_per_record_in_order() {
        let records = content::testimonials().unwrap();
        let slides = testimonial_slides(&records);
        assert_eq!(slides.len(), records.len());
        for (slide, record) in slides.iter().zip(&records) {
            assert_eq!(slide.key, record.id);
            assert_eq!(slide.name, record.name);
        }
    }

    #[test]
    fn bundled_source_matches_records() {
        let records = content::testimonials().unwrap();
        let slides = slides_from_source(content::TESTIMONIALS_JSON);
        assert_eq!(slides.len(), records.len());
        assert_eq!(slides[0].key, records[0].id);
    }

    #[test]
    fn unloadable_source_yields_no_slides() {
        assert!(slides_from_source("{").is_empty());
        assert!(slides_from_source("[]").is_empty());
        let duplicated = r#"[
            {"id": 3, "name": "Ana", "campaign": "A", "message": "m", "icon": "IconDog"},
            {"id": 3, "name": "Luis", "campaign": "B", "message": "m", "icon": "IconLeaf"}
        ]"#;
        assert!(slides_from_source(duplicated).is_empty());
    }

    #[test]
    fn missing_avatar_renders_nothing() {
        let slide = Slide::from(&record(1, "IconDog"));
        assert!(author_avatar(&slide) == html! {});

        let with_avatar = Slide {
            avatar: Some("https://example.org/a.jpg".to_string()),
            ..slide
        };
        assert!(author_avatar(&with_avatar) != html! {});
    }

    #[test]
    fn unknown_icon_becomes_placeholder() {
        let slides = testimonial_slides(&[record(1, "IconDog"), record(2, "IconRocket")]);
        assert_eq!(slides[0].icon, IconKey::Dog);
        assert_eq!(slides[1].icon, IconKey::PLACEHOLDER);
    }

    #[test]
    fn next_wraps_after_last_start() {
        assert_eq!(next_index(0, 5, 3), 1);
        assert_eq!(next_index(1, 5, 3), 2);
        assert_eq!(next_index(2, 5, 3), 0);
        assert_eq!(next_index(4, 5, 1), 0);
    }

    #[test]
    fn prev_wraps_to_last_start() {
        assert_eq!(prev_index(0, 5, 3), 2);
        assert_eq!(prev_index(2, 5, 3), 1);
        assert_eq!(prev_index(4, 5, 3), 2);
    }

    #[test]
    fn fewer_slides_than_view_stay_put() {
        assert_eq!(last_start(2, 3), 0);
        assert_eq!(next_index(0, 2, 3), 0);
        assert_eq!(prev_index(0, 2, 3), 0);
        assert_eq!(next_index(0, 0, 1), 0);
    }

    #[test]
    fn slides_per_view_follow_viewport() {
        assert_eq!(slides_per_view(1280), 3);
        assert_eq!(slides_per_view(992), 2);
        assert_eq!(slides_per_view(768), 1);
    }
}
