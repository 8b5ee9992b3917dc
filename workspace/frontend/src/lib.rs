use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod mock_data;
pub mod common;
pub mod pages;
pub mod router;
pub mod settings;

use common::toast::ToastProvider;
use components::layout::Layout;
pub use router::Route;

#[function_component(App)]
pub fn app() -> Html {
    let basename = settings::get_settings().basename().map(AttrValue::from);

    html! {
        <ToastProvider>
            <BrowserRouter basename={basename}>
                <Layout>
                    <Switch<Route> render={router::switch} />
                </Layout>
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== M Contas Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Base path: {:?}", settings.basename());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
