use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, info};
use yew::prelude::*;

/// Time between the start of two consecutive rotations.
pub const TICK_INTERVAL_MS: u32 = 4_000;
/// How long the outgoing word stays faded before the next one swaps in.
pub const FADE_DURATION_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeState {
    FadeIn,
    FadeOut,
}

impl FadeState {
    pub fn class(self) -> &'static str {
        match self {
            FadeState::FadeIn => "fade-in",
            FadeState::FadeOut => "fade-out",
        }
    }
}

pub enum RotationAction {
    FadeOut,
    Advance,
}

/// View state of the cycling headline word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseRotation {
    pub index: usize,
    pub fade: FadeState,
    len: usize,
}

impl PhraseRotation {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            fade: FadeState::FadeIn,
            len: len.max(1),
        }
    }

    pub fn current<'a>(&self, phrases: &[&'a str]) -> &'a str {
        phrases.get(self.index).copied().unwrap_or_default()
    }
}

impl Reducible for PhraseRotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            RotationAction::FadeOut => Self {
                fade: FadeState::FadeOut,
                ..(*self).clone()
            },
            RotationAction::Advance => Self {
                index: (self.index + 1) % self.len,
                fade: FadeState::FadeIn,
                len: self.len,
            },
        };
        debug!("phrase rotation -> index {} {:?}", next.index, next.fade);
        Rc::new(next)
    }
}

/// Shared flag that turns every guarded callback into a no-op once revoked.
#[derive(Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }

    pub fn guard<F: FnMut()>(&self, mut f: F) -> impl FnMut() {
        let alive = self.clone();
        move || {
            if alive.is_alive() {
                f();
            }
        }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// One rotation step: fade the current word out now, then hand the swap to
/// `schedule_swap`. Both halves are no-ops once `liveness` is revoked.
fn rotation_tick<D, S>(liveness: &Liveness, dispatch: D, mut schedule_swap: S) -> impl FnMut()
where
    D: Fn(RotationAction) + Clone + 'static,
    S: FnMut(Box<dyn FnOnce()>) + 'static,
{
    let inner = liveness.clone();
    liveness.guard(move || {
        dispatch(RotationAction::FadeOut);
        let dispatch = dispatch.clone();
        let mut swap = inner.guard(move || dispatch(RotationAction::Advance));
        schedule_swap(Box::new(move || swap()));
    })
}

/// Owns the repeating tick and the pending fade-in swap. Dropping it cancels both.
pub struct RotationTimer<I = Interval, T = Timeout> {
    liveness: Liveness,
    interval: Option<I>,
    pending: Rc<RefCell<Option<T>>>,
}

impl RotationTimer {
    pub fn start(dispatcher: UseReducerDispatcher<PhraseRotation>) -> Self {
        Self::with_scheduler(
            move |action| dispatcher.dispatch(action),
            |tick| Interval::new(TICK_INTERVAL_MS, tick),
            |swap| Timeout::new(FADE_DURATION_MS, swap),
        )
    }
}

impl<I, T: 'static> RotationTimer<I, T> {
    /// `repeat` installs the tick, `once` schedules each swap; their handles
    /// cancel on drop.
    fn with_scheduler<D, R, O>(dispatch: D, repeat: R, once: O) -> Self
    where
        D: Fn(RotationAction) + Clone + 'static,
        R: FnOnce(Box<dyn FnMut()>) -> I,
        O: Fn(Box<dyn FnOnce()>) -> T + 'static,
    {
        let liveness = Liveness::new();
        let pending: Rc<RefCell<Option<T>>> = Rc::new(RefCell::new(None));

        let tick = {
            let pending = pending.clone();
            rotation_tick(&liveness, dispatch, move |swap| {
                // replacing the previous handle drops a swap that has already fired
                *pending.borrow_mut() = Some(once(swap));
            })
        };

        info!("phrase rotation started ({}ms period)", TICK_INTERVAL_MS);
        Self {
            interval: Some(repeat(Box::new(tick))),
            liveness,
            pending,
        }
    }
}

impl<I, T> RotationTimer<I, T> {
    pub fn cancel(&mut self) {
        self.liveness.revoke();
        let stopped = self.interval.take().is_some();
        self.pending.borrow_mut().take();
        if stopped {
            info!("phrase rotation stopped");
        }
    }
}

impl<I, T> Drop for RotationTimer<I, T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: [&str; 4] = ["数字创意", "跨界设计", "技术创新", "极致体验"];

    fn step(state: Rc<PhraseRotation>, action: RotationAction) -> Rc<PhraseRotation> {
        state.reduce(action)
    }

    /// Handle whose drop is observable, standing in for a browser timer.
    struct Handle(Rc<Cell<bool>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    /// Hand-cranked clock: holds the installed tick and every scheduled swap.
    #[derive(Default)]
    struct Clock {
        tick: RefCell<Option<Box<dyn FnMut()>>>,
        swaps: RefCell<Vec<Box<dyn FnOnce()>>>,
        interval_dropped: Rc<Cell<bool>>,
        swap_dropped: RefCell<Vec<Rc<Cell<bool>>>>,
    }

    impl Clock {
        fn fire_tick(&self) {
            if let Some(tick) = self.tick.borrow_mut().as_mut() {
                tick();
            }
        }

        fn fire_swaps(&self) {
            let swaps: Vec<_> = self.swaps.borrow_mut().drain(..).collect();
            for swap in swaps {
                swap();
            }
        }

        fn last_swap_dropped(&self) -> bool {
            self.swap_dropped.borrow().last().map(|d| d.get()).unwrap_or(false)
        }
    }

    type View = Rc<RefCell<Rc<PhraseRotation>>>;

    fn manual_timer(len: usize) -> (RotationTimer<Handle, Handle>, Rc<Clock>, View) {
        let view: View = Rc::new(RefCell::new(Rc::new(PhraseRotation::new(len))));
        let clock = Rc::new(Clock::default());

        let dispatch = {
            let view = view.clone();
            move |action: RotationAction| {
                let current = view.borrow().clone();
                *view.borrow_mut() = current.reduce(action);
            }
        };
        let repeat = {
            let clock = clock.clone();
            move |tick: Box<dyn FnMut()>| {
                *clock.tick.borrow_mut() = Some(tick);
                Handle(clock.interval_dropped.clone())
            }
        };
        let once = {
            let clock = clock.clone();
            move |swap: Box<dyn FnOnce()>| {
                let dropped = Rc::new(Cell::new(false));
                clock.swaps.borrow_mut().push(swap);
                clock.swap_dropped.borrow_mut().push(dropped.clone());
                Handle(dropped)
            }
        };

        let timer = RotationTimer::with_scheduler(dispatch, repeat, once);
        (timer, clock, view)
    }

    /// Drives a real timer through every tick and swap due within `elapsed_ms`.
    fn replay(len: usize, elapsed_ms: u32) -> PhraseRotation {
        let (_timer, clock, view) = manual_timer(len);
        let mut tick = TICK_INTERVAL_MS;
        while tick <= elapsed_ms {
            clock.fire_tick();
            if tick + FADE_DURATION_MS <= elapsed_ms {
                clock.fire_swaps();
            }
            tick += TICK_INTERVAL_MS;
        }
        let state = view.borrow().clone();
        (*state).clone()
    }

    #[test]
    fn starts_visible_at_first_phrase() {
        let state = PhraseRotation::new(PHRASES.len());
        assert_eq!(state.index, 0);
        assert_eq!(state.fade, FadeState::FadeIn);
        assert_eq!(state.current(&PHRASES), "数字创意");
    }

    #[test]
    fn fade_out_keeps_index() {
        let state = step(Rc::new(PhraseRotation::new(4)), RotationAction::FadeOut);
        assert_eq!(state.index, 0);
        assert_eq!(state.fade, FadeState::FadeOut);
        assert_eq!(state.fade.class(), "fade-out");
    }

    #[test]
    fn advance_wraps_around() {
        let mut state = Rc::new(PhraseRotation::new(4));
        for expected in [1, 2, 3, 0] {
            state = step(state, RotationAction::FadeOut);
            state = step(state, RotationAction::Advance);
            assert_eq!(state.index, expected);
            assert_eq!(state.fade, FadeState::FadeIn);
        }
    }

    #[test]
    fn empty_list_never_divides_by_zero() {
        let state = step(Rc::new(PhraseRotation::new(0)), RotationAction::Advance);
        assert_eq!(state.index, 0);
        assert_eq!(state.current(&[]), "");
    }

    #[test]
    fn schedule_matches_timeline() {
        let at = |ms| replay(PHRASES.len(), ms);

        assert_eq!((at(0).index, at(0).fade), (0, FadeState::FadeIn));
        assert_eq!((at(3_999).index, at(3_999).fade), (0, FadeState::FadeIn));
        assert_eq!((at(4_000).index, at(4_000).fade), (0, FadeState::FadeOut));
        assert_eq!((at(5_000).index, at(5_000).fade), (1, FadeState::FadeIn));
        assert_eq!((at(8_000).index, at(8_000).fade), (1, FadeState::FadeOut));
        assert_eq!((at(13_000).index, at(13_000).fade), (3, FadeState::FadeIn));
        assert_eq!((at(16_000).index, at(16_000).fade), (3, FadeState::FadeOut));
        assert_eq!((at(17_000).index, at(17_000).fade), (0, FadeState::FadeIn));
    }

    #[test]
    fn index_tracks_elapsed_outside_fade_window() {
        for ms in (0..40_000).step_by(250) {
            let state = replay(PHRASES.len(), ms);
            let in_fade = ms >= TICK_INTERVAL_MS && ms % TICK_INTERVAL_MS < FADE_DURATION_MS;
            if !in_fade {
                let expected = (ms / TICK_INTERVAL_MS) as usize % PHRASES.len();
                assert_eq!(state.index, expected, "at {ms}ms");
                assert_eq!(state.fade, FadeState::FadeIn, "at {ms}ms");
            }
        }
    }

    #[test]
    fn tick_schedules_exactly_one_swap() {
        let (_timer, clock, view) = manual_timer(4);

        clock.fire_tick();
        assert_eq!(clock.swaps.borrow().len(), 1);
        assert_eq!(view.borrow().fade, FadeState::FadeOut);

        clock.fire_swaps();
        assert_eq!(view.borrow().index, 1);
        assert_eq!(view.borrow().fade, FadeState::FadeIn);
    }

    #[test]
    fn cancel_between_fade_and_swap_leaves_state_faded() {
        let (mut timer, clock, view) = manual_timer(4);

        clock.fire_tick();
        timer.cancel();

        assert!(clock.interval_dropped.get());
        assert!(clock.last_swap_dropped());

        // a callback the browser had already queued still runs
        clock.fire_swaps();
        clock.fire_tick();

        assert_eq!(view.borrow().index, 0);
        assert_eq!(view.borrow().fade, FadeState::FadeOut);
        assert!(clock.swaps.borrow().is_empty());
    }

    #[test]
    fn cancel_twice_then_drop_fires_nothing() {
        let (mut timer, clock, view) = manual_timer(4);

        timer.cancel();
        timer.cancel();
        drop(timer);

        clock.fire_tick();
        clock.fire_swaps();

        assert_eq!(**view.borrow(), PhraseRotation::new(4));
    }

    #[test]
    fn drop_before_first_tick_leaves_state_untouched() {
        let (timer, clock, view) = manual_timer(4);

        drop(timer);
        assert!(clock.interval_dropped.get());

        clock.fire_tick();
        clock.fire_swaps();

        assert_eq!(**view.borrow(), PhraseRotation::new(4));
        assert!(clock.swaps.borrow().is_empty());
    }

    #[test]
    fn guarded_callback_runs_while_alive() {
        let hits = Rc::new(Cell::new(0));
        let liveness = Liveness::new();
        let mut cb = {
            let hits = hits.clone();
            liveness.guard(move || hits.set(hits.get() + 1))
        };
        cb();
        cb();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn revoked_guard_is_a_no_op() {
        let hits = Rc::new(Cell::new(0));
        let liveness = Liveness::new();
        let mut pending = {
            let hits = hits.clone();
            liveness.guard(move || hits.set(hits.get() + 1))
        };

        liveness.revoke();
        liveness.revoke();
        pending();

        assert!(!liveness.is_alive());
        assert_eq!(hits.get(), 0);
    }
}
