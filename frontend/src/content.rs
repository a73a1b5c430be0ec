//! Display content shared by every section: the category registry, the
//! service cards and the testimonial records.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::icons::IconKey;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("unknown icon key `{0}`")]
    UnknownIcon(String),
    #[error("malformed testimonial data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("testimonial id {0} appears more than once")]
    DuplicateId(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryId {
    Technology,
    Animals,
    School,
    Environment,
    Emergency,
    Medical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub icon: IconKey,
    pub name: &'static str,
}

pub const CATEGORIES: [Category; 6] = [
    Category { id: CategoryId::Technology, icon: IconKey::DeviceLaptop, name: "Tecnología" },
    Category { id: CategoryId::Animals, icon: IconKey::Dog, name: "Animales" },
    Category { id: CategoryId::School, icon: IconKey::School, name: "Escolar" },
    Category { id: CategoryId::Environment, icon: IconKey::Leaf, name: "Ambiente" },
    Category { id: CategoryId::Emergency, icon: IconKey::AlertTriangle, name: "Emergencia" },
    Category { id: CategoryId::Medical, icon: IconKey::Stethoscope, name: "Médico" },
];

/// Causes highlighted on the donations landing, in display order.
pub const DONATION_CATEGORIES: [CategoryId; 4] = [
    CategoryId::Animals,
    CategoryId::Environment,
    CategoryId::Emergency,
    CategoryId::Medical,
];

/// `CATEGORIES` is laid out in `CategoryId` declaration order.
pub fn category(id: CategoryId) -> &'static Category {
    &CATEGORIES[id as usize]
}

/// Which slice of the registry a category grid shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryList {
    All,
    Donations,
}

impl CategoryList {
    pub fn items(self) -> Vec<&'static Category> {
        match self {
            CategoryList::All => CATEGORIES.iter().collect(),
            CategoryList::Donations => DONATION_CATEGORIES.iter().map(|id| category(*id)).collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub id: u32,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        id: 1,
        icon: "services/campaign.svg",
        title: "Crea tu campaña",
        description: "Publica tu causa en minutos, con fotos, metas y actualizaciones para tus donantes.",
    },
    Service {
        id: 2,
        icon: "services/share.svg",
        title: "Compártela",
        description: "Difunde tu campaña en redes sociales y llega a más personas dispuestas a ayudar.",
    },
    Service {
        id: 3,
        icon: "services/receive.svg",
        title: "Recibe donaciones",
        description: "Recibe los aportes de forma segura y transparente, sin comisiones ocultas.",
    },
];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub campaign: String,
    pub message: String,
    pub icon: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

pub const TESTIMONIALS_JSON: &str = include_str!("../data/testimonials.json");

/// Parses testimonial records, keeping file order. Ids must be unique since
/// they key the carousel slides.
pub fn parse_testimonials(raw: &str) -> Result<Vec<Testimonial>, ContentError> {
    let records: Vec<Testimonial> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id) {
            return Err(ContentError::DuplicateId(record.id));
        }
    }
    Ok(records)
}

pub fn testimonials() -> Result<Vec<Testimonial>, ContentError> {
    parse_testimonials(TESTIMONIALS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_keep_their_order() {
        let names: Vec<_> = CategoryList::All.items().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            ["Tecnología", "Animales", "Escolar", "Ambiente", "Emergencia", "Médico"]
        );
    }

    #[test]
    fn donations_are_drawn_from_the_registry() {
        let items = CategoryList::Donations.items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name, "Animales");
        assert_eq!(items[3].name, "Médico");
        for item in items {
            assert!(CATEGORIES.contains(item));
        }
    }

    #[test]
    fn lookup_by_id_matches_registry_slot() {
        for entry in &CATEGORIES {
            assert_eq!(category(entry.id), entry);
        }
    }

    #[test]
    fn category_names_are_unique() {
        let names: HashSet<_> = CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CATEGORIES.len());
    }

    #[test]
    fn bundled_testimonials_load() {
        let records = testimonials().unwrap();
        assert!(!records.is_empty());
        for record in &records {
            record.icon.parse::<IconKey>().unwrap();
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"[
            {"id": 1, "name": "Ana", "campaign": "A", "message": "m", "icon": "IconDog"},
            {"id": 1, "name": "Luis", "campaign": "B", "message": "m", "icon": "IconLeaf"}
        ]"#;
        assert!(matches!(parse_testimonials(raw), Err(ContentError::DuplicateId(1))));
    }

    #[test]
    fn malformed_data_is_an_error() {
        assert!(matches!(parse_testimonials("{"), Err(ContentError::Malformed(_))));
        assert!(matches!(
            parse_testimonials(r#"[{"id": 1}]"#),
            Err(ContentError::Malformed(_))
        ));
    }

    #[test]
    fn avatar_is_optional() {
        let raw = r#"[{"id": 7, "name": "Ana", "campaign": "A", "message": "m", "icon": "IconDog"}]"#;
        let records = parse_testimonials(raw).unwrap();
        assert_eq!(records[0].avatar, None);
    }

    #[test]
    fn unknown_testimonial_icon_still_parses() {
        let raw = r#"[{"id": 7, "name": "Ana", "campaign": "A", "message": "m", "icon": "IconRocket"}]"#;
        let records = parse_testimonials(raw).unwrap();
        assert!(matches!(
            records[0].icon.parse::<IconKey>(),
            Err(ContentError::UnknownIcon(name)) if name == "IconRocket"
        ));
    }
}
