/// A loop state that knows when the loop is over.
pub trait Terminal {
    fn is_terminal(&self) -> bool;
}

/// Runs poll, transition and render once per iteration until `transition`
/// produces a terminal state, then returns that state.
///
/// `poll` must not block. A terminal state is never rendered, so the last
/// frame on screen is the last running one.
pub fn pump<C, E, S>(
    context: &mut C,
    initial: S,
    mut poll: impl FnMut(&mut C) -> Option<E>,
    transition: impl Fn(Option<E>, S) -> S,
    mut render: impl FnMut(&mut C, &S),
) -> S
where
    S: Terminal,
{
    let mut state = initial;
    loop {
        let input = poll(context);
        state = transition(input, state);
        if state.is_terminal() {
            return state;
        }
        render(context, &state);
    }
}
