use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::bill_form::BillFormPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/home")]
    Home,
    #[at("/bills")]
    Bills,
    #[at("/categories")]
    Categories,
    #[at("/bill/form")]
    BillForm,
    #[at("/register")]
    Register,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Declared in the navigation but without a page yet.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Route::Home | Route::Bills | Route::Categories)
    }
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::BillForm => {
            log::trace!("Rendering Bill Form page");
            html! { <BillFormPage /> }
        }
        Route::Register => {
            log::trace!("Rendering Register page");
            html! { <RegisterPage /> }
        }
        Route::Login => {
            log::trace!("Rendering Login page");
            html! { <LoginPage /> }
        }
        route if route.is_placeholder() => {
            log::info!("{:?} is not implemented yet", route);
            html! { <NotFoundPage /> }
        }
        _ => {
            log::warn!("404 - Route not found");
            html! { <NotFoundPage /> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_for(path: &str) -> Route {
        Route::recognize(path).unwrap_or(Route::NotFound)
    }

    #[test]
    fn test_declared_pages_route() {
        assert_eq!(route_for("/register"), Route::Register);
        assert_eq!(route_for("/login"), Route::Login);
        assert_eq!(route_for("/bill/form"), Route::BillForm);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        for path in ["/unknown", "/bill", "/bills/1", "/register/extra", "/"] {
            assert_eq!(route_for(path), Route::NotFound, "path {}", path);
        }
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(route_for("/home"), Route::Home);
        assert!(Route::Home.is_placeholder());
        assert!(Route::Bills.is_placeholder());
        assert!(Route::Categories.is_placeholder());
        assert!(!Route::BillForm.is_placeholder());
        assert!(!Route::NotFound.is_placeholder());
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::BillForm.to_path(), "/bill/form");
        assert_eq!(Route::Bills.to_path(), "/bills");
    }
}
