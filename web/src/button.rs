use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PressButtonProps {
    /// Renders the pressed variant, used for the current selection.
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub class: Classes,
    pub onclick: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub(crate) fn PressButton(props: &PressButtonProps) -> Html {
    let class = classes!(
        "press-button",
        props.active.then_some("active"),
        props.class.clone()
    );
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            onclick.emit(());
        })
    };

    html! {
        <button type="button" {class} {onclick}>{props.children.clone()}</button>
    }
}
