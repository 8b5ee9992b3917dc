use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub route: Route,
    pub text: &'static str,
}

/// Where the "M Contas" brand points.
pub const BRAND_ROUTE: Route = Route::Home;

/// Left-hand menu.
pub const MAIN_LINKS: [NavItem; 3] = [
    NavItem {
        route: Route::Home,
        text: "Home",
    },
    NavItem {
        route: Route::Bills,
        text: "Bills",
    },
    NavItem {
        route: Route::Categories,
        text: "Categories",
    },
];

/// Right-hand menu.
pub const ACCOUNT_LINKS: [NavItem; 2] = [
    NavItem {
        route: Route::Register,
        text: "Register",
    },
    NavItem {
        route: Route::Login,
        text: "Login",
    },
];

fn link_classes(item: &NavItem, current: Option<&Route>) -> Classes {
    classes!("nav-link", (current == Some(&item.route)).then_some("active"))
}

#[function_component(NavBar)]
pub fn navbar() -> Html {
    let current = use_route::<Route>();
    let expanded = use_state(|| false);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    // Collapse the mobile menu once a link is followed.
    let on_navigate = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(false))
    };

    let render_item = |item: &NavItem| {
        html! {
            <li class="nav-item" key={item.text} onclick={on_navigate.clone()}>
                <Link<Route> to={item.route.clone()} classes={link_classes(item, current.as_ref())}>
                    {item.text}
                </Link<Route>>
            </li>
        }
    };

    html! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <div class="container-fluid">
                <Link<Route> to={BRAND_ROUTE} classes="navbar-brand">{"M Contas"}</Link<Route>>
                <button
                    class="navbar-toggler"
                    type="button"
                    aria-controls="navbarNav"
                    aria-expanded={(*expanded).to_string()}
                    aria-label="Toggle navigation"
                    onclick={on_toggle}
                >
                    <span class="navbar-toggler-icon"></span>
                </button>

                <div class={classes!("collapse", "navbar-collapse", (*expanded).then_some("show"))} id="navbarNav">
                    <ul class="navbar-nav me-auto">
                        { for MAIN_LINKS.iter().map(render_item) }
                    </ul>
                    <ul class="navbar-nav ms-auto">
                        { for ACCOUNT_LINKS.iter().map(render_item) }
                    </ul>
                </div>
            </div>
        </nav>
    }
}
