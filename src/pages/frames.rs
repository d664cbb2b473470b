use yew::prelude::*;

use crate::choreography::reveal::{reverse_stagger_delay_ms, stagger_delay_ms};
use crate::components::countdown::CountdownDisplay;
use crate::config::{REVEAL_DURATION_MS, REVEAL_OFFSET_PX};
use crate::content::{
    CASE_STUDIES, CONTACT_CREDITS, CREDITS_ROLL, PIPELINE_STEPS, SCRIPT_LINES,
};
use crate::stage::PanelRefs;

#[derive(Properties, PartialEq)]
pub struct FrameProps {
    pub refs: PanelRefs,
}

#[derive(Properties, PartialEq)]
pub struct CaseStudyProps {
    pub refs: PanelRefs,
    pub index: usize,
}

fn reveal_style(index: usize, count: usize) -> String {
    format!(
        "--reveal-delay: {}ms; --reveal-return-delay: {}ms; --reveal-offset: {}px; --reveal-duration: {}ms",
        stagger_delay_ms(index),
        reverse_stagger_delay_ms(index, count),
        REVEAL_OFFSET_PX,
        REVEAL_DURATION_MS
    )
}

fn arrow_down() -> Html {
    html! {
        <svg class="icon arrow-right" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M12 5v14" />
            <path d="m19 12-7 7-7-7" />
        </svg>
    }
}

fn clapperboard() -> Html {
    html! {
        <svg class="clapperboard" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M20.2 6 3 11l-.9-2.4c-.3-1.1.3-2.2 1.3-2.5l13.5-4c1.1-.3 2.2.3 2.5 1.3Z" />
            <path d="m6.2 5.3 3.1 3.9" />
            <path d="m12.4 3.4 3.1 4" />
            <path d="M3 11h18v8a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2Z" />
        </svg>
    }
}

// Frame 1: the slate with the countdown leader
#[function_component(SlateFrame)]
pub fn slate_frame(props: &FrameProps) -> Html {
    html! {
        <section class="panel panel-slate" ref={props.refs.section.clone()}>
            <div class="slate-center">
                <div class="leader-ring">
                    <div class="leader-sweep" />
                    <div class="leader-cross vertical" />
                    <div class="leader-cross horizontal" />
                    <CountdownDisplay />
                </div>

                <div class="slate-caption">
                    <p class="production-mode">{"Production Mode: Active"}</p>
                    <h2>{"AI-Crafted Cinematic Marketing"}</h2>
                </div>
            </div>

            <div class="scroll-hint">
                <div class="writing-vertical">
                    <span>{"SCROLL TO ENTER"}</span>
                    { arrow_down() }
                </div>
            </div>
        </section>
    }
}

// Frame 2: the hook, the only frame with reveal text
#[function_component(HookFrame)]
pub fn hook_frame(props: &FrameProps) -> Html {
    let count = props.refs.descriptor.reveal_texts;

    html! {
        <section class="panel panel-hook" ref={props.refs.section.clone()}>
            <div class="hook-glow" />

            <div class="hook-copy">
                <div class="scene-label reveal-text" style={reveal_style(0, count)}>
                    <span class="scene-rule" />
                    <span>{"Scene 01: The Hook"}</span>
                </div>

                <h2 class="reveal-text" style={reveal_style(1, count)}>
                    {"Upload your B-roll. "}<br />
                    <span class="underlined">
                        {"We turn it into cinema."}
                        <svg class="underline" viewBox="0 0 100 10" preserveAspectRatio="none">
                            <path d="M0 5 Q 50 10 100 5" stroke="currentColor" stroke-width="2" fill="none" />
                        </svg>
                    </span>
                </h2>

                <p class="hook-body reveal-text" style={reveal_style(2, count)}>
                    {"Drop in B-roll from your brand or product. We handle scripting, AI voiceovers, AI avatars, and grade it like a feature. Launch-ready films for SaaS, fintech, and enterprise\u{2014}without reshoots."}
                </p>
            </div>

            <div class="hook-watermark">
                { clapperboard() }
            </div>
        </section>
    }
}

// Frames 3 and 4: client reels over a drifting still
#[function_component(CaseStudyFrame)]
pub fn case_study_frame(props: &CaseStudyProps) -> Html {
    let Some(study) = CASE_STUDIES.get(props.index) else {
        return html! {};
    };
    let watermark_class = classes!("case-watermark", study.watermark_right.then(|| "right"));

    html! {
        <section
            class="panel panel-case interactable"
            data-cursor-text={props.refs.descriptor.cursor_label.map(AttrValue::from)}
            ref={props.refs.section.clone()}
        >
            <div class="parallax-img" ref={props.refs.parallax.clone()}>
                <img src={study.image} alt={study.image_alt} />
            </div>
            <div class="case-shade" />

            <div class="case-body">
                <div class="case-lift">
                    <h3 class={watermark_class}>{ study.watermark }</h3>

                    <div class="case-title">
                        <h2>{ study.client }</h2>
                        <span class="case-tag">{ study.tag }</span>
                    </div>

                    <div class="case-quote">
                        <p class="burned-subtitle">{ study.quote }</p>
                    </div>

                    <div class="case-actions">
                        <button
                            class="watch-cut interactable"
                            data-cursor-text="PLAY"
                            ref={props.refs.hover_target(0)}
                        >
                            {"Watch Cut"}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

// Frame 5: the pipeline, set on a light "script page"
#[function_component(PipelineFrame)]
pub fn pipeline_frame(props: &FrameProps) -> Html {
    html! {
        <section class="panel panel-pipeline" ref={props.refs.section.clone()}>
            <div class="pipeline-grid">
                <div>
                    <span class="scene-label dark">{"Scene 03: AI-First Pipeline"}</span>
                    <h2 class="pipeline-title">{"Upload. We"}<br />{"Deliver Cinema."}</h2>

                    <ul class="pipeline-steps">
                        { for PIPELINE_STEPS.iter().enumerate().map(|(index, (step, label))| html! {
                            <li
                                key={*step}
                                class="pipeline-step interactable"
                                data-cursor-text={format!("STEP {}", step)}
                                ref={props.refs.hover_target(index)}
                            >
                                <span class="step-number">{ *step }</span>
                                <span class="step-label">{ *label }</span>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="script-page">
                    <p class="script-file">{"SCRIPT_FINAL_V3.PDF"}</p>
                    <p class="script-slug">{"INT. CREATIVE AGENCY - NIGHT"}</p>
                    { for SCRIPT_LINES.iter().map(|line| {
                        let class = if line.starts_with("//") { "script-note" } else { "script-action" };
                        html! { <p class={class}>{ *line }</p> }
                    }) }
                    <p class="script-cut">{"CUT TO BLACK."}</p>
                </div>
            </div>
        </section>
    }
}

// Frame 6: end credits and the call to action
#[function_component(FinaleFrame)]
pub fn finale_frame(props: &FrameProps) -> Html {
    html! {
        <section class="panel panel-finale" ref={props.refs.section.clone()}>
            <div class="credits-roll">
                <div class="credits-track">
                    { for CREDITS_ROLL.iter().map(|line| html! { <p>{ *line }</p> }) }
                </div>
            </div>

            <div class="finale-copy">
                <h2>{"The End?"}</h2>
                <p class="finale-tagline">
                    {"Or just the beginning of your brand's cinematic universe."}
                </p>

                <a
                    href="#"
                    class="start-project interactable"
                    data-cursor-text="HIRE US"
                    ref={props.refs.hover_target(0)}
                >
                    <div class="start-project-fill" />
                    <span>{"Start Project"}</span>
                </a>

                <div class="contact-credits">
                    { for CONTACT_CREDITS.iter().map(|(role, name)| html! {
                        <div class="contact-credit">
                            <span>{ *role }</span>
                            { *name }
                        </div>
                    }) }
                </div>
            </div>

            <div class="copyright">{"\u{a9} 2025 ADVERSE MEDIA. FILM STRIP CONCEPT V2."}</div>
        </section>
    }
}
