use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CursorProps {
    pub node_ref: NodeRef,
}

#[function_component(Cursor)]
pub fn cursor(props: &CursorProps) -> Html {
    html! {
        <div id="cursor" ref={props.node_ref.clone()} data-text="" />
    }
}
