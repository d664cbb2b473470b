use gloo_timers::callback::Interval;
use log::info;
use yew::prelude::*;

use crate::choreography::countdown::{Countdown, CountdownAction};
use crate::config::COUNTDOWN_TICK_MS;

#[function_component(CountdownDisplay)]
pub fn countdown_display() -> Html {
    let countdown = use_reducer(Countdown::default);

    {
        let countdown = countdown.clone();
        let finished = countdown.is_finished();
        use_effect_with_deps(
            move |finished| {
                let interval = if *finished {
                    info!("countdown finished");
                    None
                } else {
                    Some(Interval::new(COUNTDOWN_TICK_MS, move || {
                        countdown.dispatch(CountdownAction::Tick);
                    }))
                };

                // Dropping the interval cancels it, on finish as well as on unmount.
                move || drop(interval)
            },
            finished,
        );
    }

    html! {
        <span id="countdown" class="countdown-value">
            { countdown.display() }
        </span>
    }
}
