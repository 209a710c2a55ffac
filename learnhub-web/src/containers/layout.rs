use crate::components::Sidebar;
use crate::containers::header::Header;
use yew::{Children, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <Sidebar />
            <div class={classes!("flex", "flex-col", "min-h-screen", "xl:ml-64")}>
                <Header />
                <main class={classes!("flex-grow", "p-4", "transition-all", "duration-300")}>
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
