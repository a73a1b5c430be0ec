use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod icons;
mod layout;
mod style;
mod viewport;
mod sections {
    pub mod subtitle;
    pub mod hero;
    pub mod categories;
    pub mod services;
    pub mod testimonials;
    pub mod what_is_givers;
}
mod pages {
    pub mod landing;
}

use pages::landing::{Landing, LandingVariant, NotFound};

// Campaign creation and listing live in the campaigns app, see config.rs.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/donaciones")]
    Donations,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing variant={LandingVariant::Main} /> }
        },
        Route::Donations => {
            info!("Rendering Donations page");
            html! { <Landing variant={LandingVariant::Donations} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_to_landing_variants() {
        assert_eq!(Route::recognize("/").map(|r| r == Route::Home), Some(true));
        assert_eq!(Route::recognize("/donaciones").map(|r| r == Route::Donations), Some(true));
        assert_eq!(Route::Donations.to_path(), "/donaciones");
    }
}
