use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <article class="text-center">
            <h1 class="fw-bold">{"404"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::BillForm} classes="btn btn-primary">
                <i class="bi bi-receipt me-1"></i>
                {"Register a bill"}
            </Link<Route>>
        </article>
    }
}
