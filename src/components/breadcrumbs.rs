use yew::prelude::*;

use crate::store::Breadcrumb;

#[derive(Properties, PartialEq)]
pub struct BreadcrumbsProps {
    pub crumbs: Vec<Breadcrumb>,
    pub on_navigate: Callback<String>,
}

#[function_component(Breadcrumbs)]
pub fn breadcrumbs(props: &BreadcrumbsProps) -> Html {
    let home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(String::new()))
    };

    html! {
        <nav class="breadcrumbs">
            <a class="crumb" onclick={home}>{ "Home" }</a>
            {
                for props.crumbs.iter().map(|crumb| {
                    let on_navigate = props.on_navigate.clone();
                    let path = crumb.path.clone();
                    let onclick = Callback::from(move |_| on_navigate.emit(path.clone()));
                    html! {
                        <>
                            <span class="crumb-separator">{ " / " }</span>
                            <a class="crumb" onclick={onclick}>{ crumb.name.clone() }</a>
                        </>
                    }
                })
            }
        </nav>
    }
}
