use shared::{CostsParams, CostsService};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::costs_screen::CostsScreen;
use components::date_selector::DateSelector;
use components::header::AppHeader;
use services::api::ApiClient;
use services::config::AppConfig;

/// Which screen is on top
#[derive(Clone, Copy, Debug, PartialEq)]
enum Route {
    DateSelector,
    Costs(CostsParams),
}

impl Route {
    fn title(&self) -> &'static str {
        match self {
            Route::DateSelector => "Date Picker",
            Route::Costs(_) => "Costs",
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::load());
    let service = use_memo(config.costs_endpoint.clone(), |endpoint| {
        let client = ApiClient::with_endpoint(endpoint.clone());
        log::info!("Costs endpoint: {}", client.costs_endpoint());
        CostsService::new(client)
    });
    let route = use_state(|| Route::DateSelector);

    let on_confirm = {
        let route = route.clone();
        Callback::from(move |params: CostsParams| {
            log::info!("Opening costs for {}", params);
            route.set(Route::Costs(params));
        })
    };

    let on_back = match *route {
        Route::DateSelector => None,
        Route::Costs(_) => {
            let route = route.clone();
            Some(Callback::from(move |_: ()| route.set(Route::DateSelector)))
        }
    };

    let screen = match *route {
        Route::DateSelector => html! {
            <DateSelector config={config.picker} {on_confirm} />
        },
        Route::Costs(params) => html! {
            <CostsScreen {params} service={(*service).clone()} />
        },
    };

    html! {
        <div class="app">
            <AppHeader title={route.title()} {on_back} />
            <main class="screen">
                {screen}
            </main>
        </div>
    }
}

fn main() {
    let config = AppConfig::load();
    if let Err(e) = services::logging::init(config.log_level) {
        gloo::console::warn!(format!("Console logger not installed: {}", e));
    }

    yew::Renderer::<App>::new().render();
}
