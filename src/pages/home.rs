use log::{debug, info};
use web_sys::window;
use yew::prelude::*;
use yew_hooks::use_title;

use crate::choreography::mode::{Mode, ModeLifecycle};
use crate::choreography::sprockets::hole_count;
use crate::components::cursor::Cursor;
use crate::components::indicators::{FrameCounter, Scrubber};
use crate::components::sprockets::{SprocketStrip, StripEdge};
use crate::config::{MOBILE_MEDIA_QUERY, SITE_TITLE};
use crate::content::{Scene, PANEL_COUNT};
use crate::dom::{self, EventListener};
use crate::pages::frames::{CaseStudyFrame, FinaleFrame, HookFrame, PipelineFrame, SlateFrame};
use crate::pages::styles::PAGE_STYLES;
use crate::session::DesktopSession;
use crate::stage::{PanelRefs, StageRefs};

fn detect_mode() -> Mode {
    // Without a window yet, assume the desktop layout
    dom::mobile_media_matches()
        .map(Mode::from_mobile_match)
        .or_else(|| dom::viewport_width().map(Mode::from_viewport_width))
        .unwrap_or(Mode::Desktop)
}

fn render_panel(panel: &PanelRefs) -> Html {
    let refs = panel.clone();
    match panel.descriptor.scene {
        Scene::Slate => html! { <SlateFrame {refs} /> },
        Scene::Hook => html! { <HookFrame {refs} /> },
        Scene::CaseStudy(index) => html! { <CaseStudyFrame {refs} {index} /> },
        Scene::Pipeline => html! { <PipelineFrame {refs} /> },
        Scene::Finale => html! { <FinaleFrame {refs} /> },
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_title(SITE_TITLE.to_string());

    let mode = use_state(detect_mode);
    let viewport_width = use_state(|| dom::viewport_width().unwrap_or(0.0));
    let refs = use_state(StageRefs::new);
    let lifecycle = use_mut_ref(ModeLifecycle::<DesktopSession>::default);

    // The breakpoint watcher lives for the whole mount
    {
        let mode = mode.setter();
        use_effect_with_deps(
            move |_| {
                let query = window().and_then(|window| {
                    window
                        .match_media(MOBILE_MEDIA_QUERY)
                        .ok()
                        .flatten()
                });
                let listener = query.and_then(|query| {
                    let target = query.clone();
                    EventListener::new(&target, "change", move |_| {
                        mode.set(Mode::from_mobile_match(query.matches()));
                    })
                });

                move || drop(listener)
            },
            (),
        );
    }

    // Desktop bindings follow the mode; the old session always goes first
    {
        let lifecycle = lifecycle.clone();
        let refs = (*refs).clone();
        let on_resize = {
            let viewport_width = viewport_width.setter();
            Callback::from(move |width: f64| viewport_width.set(width))
        };
        use_effect_with_deps(
            move |mode| {
                let mut lifecycle = lifecycle.borrow_mut();
                if lifecycle.switch(*mode, || DesktopSession::enter(refs, on_resize)) {
                    info!(
                        "presentation mode: {:?} (desktop bindings: {})",
                        mode,
                        lifecycle.is_bound()
                    );
                }
                || ()
            },
            *mode,
        );
    }

    {
        let lifecycle = lifecycle.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    let mut lifecycle = lifecycle.borrow_mut();
                    if let Some(mode) = lifecycle.active() {
                        debug!("home page unmounted in {:?} mode", mode);
                    }
                    lifecycle.release();
                }
            },
            (),
        );
    }

    let desktop = mode.is_desktop();
    let holes = if desktop {
        hole_count(*viewport_width, PANEL_COUNT)
    } else {
        0
    };

    // The wrapper is as tall as the pinned scroll distance plus one screen.
    let wrapper_style = desktop.then(|| {
        let distance = (PANEL_COUNT - 1) as f64 * *viewport_width;
        format!("height: calc(100vh + {}px);", distance.round())
    });

    html! {
        <main class={classes!("film", mode.class_name())}>
            <style>{ PAGE_STYLES }</style>

            if desktop {
                <Cursor node_ref={refs.cursor.clone()} />
            }
            <div class="film-grain" />

            if desktop {
                <FrameCounter node_ref={refs.frame.clone()} />
            }

            <div class="logo">
                <h1>{"ADVERSE"}<span>{".MEDIA"}</span></h1>
            </div>

            if desktop {
                <Scrubber node_ref={refs.progress.clone()} />
            }

            <div class="wrapper" style={wrapper_style} ref={refs.wrapper.clone()}>
                <div class="pin">
                    <div class="track" ref={refs.track.clone()}>
                        if desktop {
                            <SprocketStrip edge={StripEdge::Top} {holes} />
                            <SprocketStrip edge={StripEdge::Bottom} {holes} />
                        }
                        { for refs.panels.iter().map(render_panel) }
                    </div>
                </div>
            </div>
        </main>
    }
}
