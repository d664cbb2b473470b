use yew::prelude::*;

use crate::choreography::timeline::frame_label;
use crate::content::PANEL_COUNT;

#[derive(Properties, PartialEq)]
pub struct IndicatorProps {
    pub node_ref: NodeRef,
}

#[function_component(FrameCounter)]
pub fn frame_counter(props: &IndicatorProps) -> Html {
    html! {
        <div class="frame-counter">
            <span class="rec-dot" />
            {"REC [ "}
            <span ref={props.node_ref.clone()} class="frame-number">{ frame_label(1) }</span>
            { format!(" / {} ]", frame_label(PANEL_COUNT)) }
        </div>
    }
}

#[function_component(Scrubber)]
pub fn scrubber(props: &IndicatorProps) -> Html {
    html! {
        <div class="scrubber">
            <div class="scrubber-fill" ref={props.node_ref.clone()}>
                <div class="scrubber-head" />
            </div>
        </div>
    }
}
