use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Announced to screen readers while the spinner shows.
    pub message: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-full py-16 animate-fadeIn" role="status">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <span class="sr-only">{ &props.message }</span>
        </div>
    }
}
