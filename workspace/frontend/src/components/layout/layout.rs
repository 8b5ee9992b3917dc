use yew::prelude::*;
use super::navbar::NavBar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <section class="app-container">
            <NavBar />
            <div class="mt-3 page-wrapper d-flex align-items-top justify-content-center">
                { for props.children.iter() }
            </div>
        </section>
    }
}
