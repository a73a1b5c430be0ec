use stylist::yew::styled_component;
use yew::prelude::*;

use crate::content::CategoryList;
use crate::icons::{Icon, IconKey};
use crate::sections::subtitle::SectionHeading;
use crate::style::{Section, SectionConfig, StyleRole, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryCard {
    pub key: &'static str,
    pub icon: IconKey,
    pub label: &'static str,
}

pub fn category_cards(list: CategoryList) -> Vec<CategoryCard> {
    list.items()
        .into_iter()
        .map(|category| CategoryCard {
            key: category.name,
            icon: category.icon,
            label: category.name,
        })
        .collect()
}

pub fn grid_columns(list: CategoryList, width: u32) -> u32 {
    match (list, Viewport::from_width(width)) {
        (CategoryList::All, Viewport::Desktop) => 6,
        (CategoryList::All, Viewport::Tablet) => 3,
        (CategoryList::Donations, Viewport::Desktop) => 4,
        (_, _) => 2,
    }
}

fn section_for(list: CategoryList) -> Section {
    match list {
        CategoryList::All => Section::Categories,
        CategoryList::Donations => Section::Donations,
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryGridProps {
    pub list: CategoryList,
    pub width: u32,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub config: SectionConfig,
}

/// One grid of category cards. Categories and donations differ only in which
/// slice of the registry they show and in their card container.
#[styled_component(CategoryGrid)]
pub fn category_grid(props: &CategoryGridProps) -> Html {
    let section = section_for(props.list);
    let wrapper = props.config.resolve(section, StyleRole::Wrapper, props.width);
    let columns = grid_columns(props.list, props.width);
    let card_class = match props.list {
        CategoryList::All => "category-card",
        CategoryList::Donations => "category-card donation-card",
    };

    let grid = css!(
        r#"
        & .category-grid {
            display: grid;
            gap: 24px;
            max-width: 1200px;
            margin: 40px auto 0;
        }
        & .category-card {
            display: flex;
            flex-direction: column;
            align-items: center;
            gap: 12px;
            padding: 24px 12px;
            border-radius: 16px;
            transition: transform 0.2s ease, box-shadow 0.2s ease;
        }
        & .category-card:hover {
            transform: translateY(-4px);
            box-shadow: 0 12px 24px rgba(47, 158, 68, 0.15);
        }
        & .donation-card {
            background: #ffffff;
            border: 1px solid #d3f9d8;
        }
        & .category-label {
            font-weight: 700;
            color: #1a1b1e;
        }
        "#
    );

    html! {
        <section class={classes!(grid, "category-section")} style={wrapper.to_css()}>
            <SectionHeading
                section={section}
                width={props.width}
                title={props.title.clone()}
                subtitle={props.subtitle.clone()}
                config={props.config.clone()}
            />
            <div class="category-grid" style={format!("grid-template-columns: repeat({}, minmax(0, 1fr));", columns)}>
                { for category_cards(props.list).into_iter().map(|card| html! {
                    <div key={card.key} class={card_class}>
                        <Icon icon={card.icon} />
                        <span class="category-label">{card.label}</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoriesProps {
    pub width: u32,
    #[prop_or_default]
    pub config: SectionConfig,
}

#[function_component(Categories)]
pub fn categories(props: &CategoriesProps) -> Html {
    html! {
        <CategoryGrid
            list={CategoryList::All}
            width={props.width}
            title="Categorías"
            subtitle={AttrValue::from("Encuentra la causa que más te mueve y súmate.")}
            config={props.config.clone()}
        />
    }
}

#[function_component(Donations)]
pub fn donations(props: &CategoriesProps) -> Html {
    html! {
        <CategoryGrid
            list={CategoryList::Donations}
            width={props.width}
            title="¿A quién quieres ayudar hoy?"
            config={props.config.clone()}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_render_six_cards_in_order() {
        let labels: Vec<_> = category_cards(CategoryList::All).iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            ["Tecnología", "Animales", "Escolar", "Ambiente", "Emergencia", "Médico"]
        );
    }

    #[test]
    fn cards_are_keyed_by_name() {
        for card in category_cards(CategoryList::All) {
            assert_eq!(card.key, card.label);
        }
    }

    #[test]
    fn donations_use_the_same_card_shape() {
        let cards = category_cards(CategoryList::Donations);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].icon, IconKey::Dog);
        assert_eq!(cards[1].icon, IconKey::Leaf);
    }

    #[test]
    fn columns_follow_viewport() {
        assert_eq!(grid_columns(CategoryList::All, 1440), 6);
        assert_eq!(grid_columns(CategoryList::All, 992), 3);
        assert_eq!(grid_columns(CategoryList::All, 768), 2);
        assert_eq!(grid_columns(CategoryList::Donations, 1440), 4);
        assert_eq!(grid_columns(CategoryList::Donations, 800), 2);
    }
}
