use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod choreography;
mod config;
mod content;
mod dom;
mod session;
mod stage;
mod components {
    pub mod countdown;
    pub mod cursor;
    pub mod indicators;
    pub mod sprockets;
}
mod pages {
    pub mod frames;
    pub mod home;
    pub mod styles;
}

use pages::home::HomePage;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <HomePage /> }
        },
        // There is only one page; stray paths get the film strip too
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <HomePage /> }
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
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
