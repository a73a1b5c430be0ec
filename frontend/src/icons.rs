use std::fmt;
use std::str::FromStr;

use log::warn;
use yew::prelude::*;

use crate::content::ContentError;

pub const ICON_SIZE: u32 = 48;
pub const ICON_STROKE: f32 = 1.5;
pub const ICON_COLOR: &str = "#2f9e44";

/// Every icon the site can draw. Registry entries reference these directly,
/// so a misspelled key in hard-coded content does not compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKey {
    DeviceLaptop,
    Dog,
    School,
    Leaf,
    AlertTriangle,
    Stethoscope,
    Heart,
    ChevronLeft,
    ChevronRight,
}

impl IconKey {
    pub const ALL: [IconKey; 9] = [
        IconKey::DeviceLaptop,
        IconKey::Dog,
        IconKey::School,
        IconKey::Leaf,
        IconKey::AlertTriangle,
        IconKey::Stethoscope,
        IconKey::Heart,
        IconKey::ChevronLeft,
        IconKey::ChevronRight,
    ];

    /// Drawn whenever a name from outside the registry does not resolve.
    pub const PLACEHOLDER: IconKey = IconKey::Heart;

    pub fn name(self) -> &'static str {
        match self {
            IconKey::DeviceLaptop => "IconDeviceLaptop",
            IconKey::Dog => "IconDog",
            IconKey::School => "IconSchool",
            IconKey::Leaf => "IconLeaf",
            IconKey::AlertTriangle => "IconAlertTriangle",
            IconKey::Stethoscope => "IconStethoscope",
            IconKey::Heart => "IconHeart",
            IconKey::ChevronLeft => "IconChevronLeft",
            IconKey::ChevronRight => "IconChevronRight",
        }
    }

    /// Path data on a 24x24 grid, stroked rather than filled.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKey::DeviceLaptop => &[
                "M3 19l18 0",
                "M5 6m0 1a1 1 0 0 1 1 -1h12a1 1 0 0 1 1 1v8a1 1 0 0 1 -1 1h-12a1 1 0 0 1 -1 -1z",
            ],
            IconKey::Dog => &[
                "M11 5h2",
                "M19 12c-.667 5.333 -2.333 8 -5 8h-4c-2.667 0 -4.333 -2.667 -5 -8",
                "M11 16c0 .667 .333 1 1 1s1 -.333 1 -1h-2z",
                "M12 18v1",
                "M10 11v.01",
                "M14 11v.01",
                "M5 4l6 .97l-6.238 6.688a1.021 1.021 0 0 1 -1.41 .111a.953 .953 0 0 1 -.327 -.954l1.975 -6.815z",
                "M19 4l-6 .97l6.238 6.688c.358 .408 .989 .458 1.41 .111a.953 .953 0 0 0 .327 -.954l-1.975 -6.815z",
            ],
            IconKey::School => &[
                "M22 9l-10 -4l-10 4l10 4l10 -4v6",
                "M6 10.6v5.4a6 3 0 0 0 12 0v-5.4",
            ],
            IconKey::Leaf => &[
                "M5 21c.5 -4.5 2.5 -8 7 -10",
                "M9 18c6.218 0 10.5 -3.288 11 -12v-2h-4.014c-9 0 -11.986 4 -12 9c0 1 0 3 2 5h3z",
            ],
            IconKey::AlertTriangle => &[
                "M12 9v4",
                "M10.363 3.591l-8.106 13.534a1.914 1.914 0 0 0 1.636 2.871h16.214a1.914 1.914 0 0 0 1.636 -2.87l-8.106 -13.536a1.914 1.914 0 0 0 -3.274 0z",
                "M12 16h.01",
            ],
            IconKey::Stethoscope => &[
                "M6 4h-1a2 2 0 0 0 -2 2v3.5h0a5.5 5.5 0 0 0 11 0v-3.5a2 2 0 0 0 -2 -2h-1",
                "M8 15a6 6 0 1 0 12 0v-3",
                "M11 3v2",
                "M6 3v2",
                "M20 10m-2 0a2 2 0 1 0 4 0a2 2 0 1 0 -4 0",
            ],
            IconKey::Heart => &[
                "M19.5 12.572l-7.5 7.428l-7.5 -7.428a5 5 0 1 1 7.5 -6.566a5 5 0 1 1 7.5 6.572",
            ],
            IconKey::ChevronLeft => &["M15 6l-6 6l6 6"],
            IconKey::ChevronRight => &["M9 6l6 6l-6 6"],
        }
    }

    /// Lenient lookup for names that arrive as data. Unknown names are
    /// logged and drawn as the placeholder.
    pub fn resolve_or_placeholder(name: &str) -> IconKey {
        match name.parse() {
            Ok(key) => key,
            Err(err) => {
                warn!("{}, rendering {} instead", err, IconKey::PLACEHOLDER);
                IconKey::PLACEHOLDER
            }
        }
    }
}

impl FromStr for IconKey {
    type Err = ContentError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        IconKey::ALL
            .iter()
            .copied()
            .find(|key| key.name() == name)
            .ok_or_else(|| ContentError::UnknownIcon(name.to_string()))
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: IconKey,
    #[prop_or(ICON_SIZE)]
    pub size: u32,
    #[prop_or(ICON_STROKE)]
    pub stroke: f32,
    #[prop_or(AttrValue::Static(ICON_COLOR))]
    pub color: AttrValue,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={classes!("icon", props.icon.name())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke={props.color.clone()}
            stroke-width={props.stroke.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
