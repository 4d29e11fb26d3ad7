use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::typewriter::{Typewriter, TypewriterState, TypewriterTiming};

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub roles: &'static [&'static str],
    pub timing: TypewriterTiming,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let typewriter = use_memo(
        |(roles, timing)| {
            let typewriter = Typewriter::new(roles.iter().map(|role| role.to_string()).collect(), *timing);
            if let Err(e) = &typewriter {
                log::error!("Typewriter disabled: {}", e);
            }
            typewriter.ok()
        },
        (props.roles, props.timing),
    );
    let state = use_state(TypewriterState::default);

    {
        let current = (*state).clone();
        let typewriter = typewriter.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |current: &TypewriterState| {
                // One pending timeout at a time; dropping it cancels the tick.
                let timeout = (*typewriter).as_ref().map(|typewriter| {
                    let delay = typewriter.next_delay(current);
                    let next = typewriter.advance(current, delay);
                    Timeout::new(delay, move || state.set(next))
                });
                move || drop(timeout)
            },
            current,
        );
    }

    html! {
        <div class="typewriter">
            <h3>
                <span class="typewriter-text">{state.visible_text()}</span>
                <span class="typewriter-cursor"></span>
            </h3>
        </div>
    }
}
