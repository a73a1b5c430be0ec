use stylist::yew::styled_component;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct GiversLayoutGuestProps {
    #[prop_or_default]
    pub children: Children,
}

/// Guest chrome around every landing page: header with navigation, the page
/// body, and the footer.
#[styled_component(GiversLayoutGuest)]
pub fn givers_layout_guest(props: &GiversLayoutGuestProps) -> Html {
    let shell = css!(
        r#"
        display: flex;
        flex-direction: column;
        min-height: 100vh;
        font-family: "Nunito", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;

        & .guest-header {
            position: sticky;
            top: 0;
            z-index: 10;
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 16px 32px;
            background: rgba(255, 255, 255, 0.96);
            box-shadow: 0 1px 8px rgba(0, 0, 0, 0.06);
        }
        & .guest-logo {
            font-size: 24px;
            font-weight: 800;
            color: #2f9e44;
            text-decoration: none;
        }
        & .guest-nav {
            display: flex;
            gap: 24px;
            align-items: center;
        }
        & .guest-nav a {
            color: #1a1b1e;
            text-decoration: none;
            font-weight: 600;
        }
        & .guest-nav .guest-cta {
            padding: 8px 18px;
            border-radius: 999px;
            background: #2f9e44;
            color: #ffffff;
        }
        & .guest-main {
            flex: 1;
        }
        & .guest-footer {
            padding: 32px;
            text-align: center;
            color: #868e96;
            background: #1a1b1e;
        }
        @media (max-width: 768px) {
            & .guest-header {
                padding: 12px 16px;
            }
            & .guest-nav .guest-secondary {
                display: none;
            }
        }
        "#
    );

    html! {
        <div class={shell}>
            <header class="guest-header">
                <Link<Route> to={Route::Home} classes="guest-logo">
                    {"Givers"}
                </Link<Route>>
                <nav class="guest-nav">
                    <Link<Route> to={Route::Donations} classes="guest-secondary">
                        {"Donar"}
                    </Link<Route>>
                    <a href={config::CAMPAIGNS_PATH} class="guest-secondary">{"Campañas"}</a>
                    <a href={config::CREATE_CAMPAIGN_PATH} class="guest-cta">{"Crear campaña"}</a>
                </nav>
            </header>
            <main class="guest-main">
                { for props.children.iter() }
            </main>
            <footer class="guest-footer">
                <p>{"© Givers. Juntos hacemos más."}</p>
            </footer>
        </div>
    }
}
