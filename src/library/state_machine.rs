use std::collections::VecDeque;

/// Drives a pure `transition` function by running each effect to completion,
/// feeding the produced event back in, until no effects remain.
pub struct StateMachine<TState, TEvent, TEffect, T, E>
where
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>),
    E: FnMut(TEffect) -> TEvent,
{
    pub transition_fn: T,
    pub run_effect_fn: E,
    _marker: std::marker::PhantomData<(TState, TEvent, TEffect)>,
}

impl<TState, TEvent, TEffect, T, E> StateMachine<TState, TEvent, TEffect, T, E>
where
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>),
    E: FnMut(TEffect) -> TEvent,
{
    pub fn new(transition_fn: T, run_effect_fn: E) -> Self {
        Self {
            transition_fn,
            run_effect_fn,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn run(&mut self, init: (TState, Vec<TEffect>)) -> TState {
        let (mut state, effects) = init;
        let mut pending: VecDeque<TEffect> = effects.into();

        while let Some(effect) = pending.pop_front() {
            let event = (self.run_effect_fn)(effect);
            let (new_state, new_effects) = (self.transition_fn)(state, event);
            state = new_state;
            pending.extend(new_effects);
        }

        state
    }
}
