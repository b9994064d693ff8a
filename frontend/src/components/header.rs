use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppHeaderProps {
    pub title: AttrValue,
    /// Shown as a back button when present
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

#[function_component(AppHeader)]
pub fn app_header(props: &AppHeaderProps) -> Html {
    let back_button = props.on_back.as_ref().map(|on_back| {
        let on_back = on_back.clone();
        html! {
            <button type="button" class="back-button" onclick={Callback::from(move |_: MouseEvent| on_back.emit(()))}>
                {"‹ Back"}
            </button>
        }
    });

    html! {
        <header class="app-header">
            {back_button.unwrap_or_default()}
            <h2 class="header-title">{&props.title}</h2>
        </header>
    }
}
