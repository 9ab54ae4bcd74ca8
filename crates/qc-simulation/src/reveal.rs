//! Sequential reveal driven by external ticks.

/// What a single tick produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Tick<'a, T> {
    /// The next item became visible.
    Revealed(&'a T),
    /// Every item is visible; the run is over.
    Finished,
    /// No run is active (never started, cancelled or already finished).
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    Running,
    Finished,
    Cancelled,
}

/// Items revealed one per tick.
///
/// At most one run is active per instance: starting again discards the
/// previous run. Once cancelled or finished, further ticks are ignored
/// until the next `start`.
#[derive(Debug, Clone)]
pub struct RevealSequence<T> {
    items: Vec<T>,
    revealed: usize,
    state: RunState,
}

impl<T> RevealSequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            revealed: 0,
            state: RunState::Idle,
        }
    }

    /// Begin (or restart) the reveal from the first item.
    pub fn start(&mut self) {
        self.revealed = 0;
        self.state = RunState::Running;
    }

    /// Replace the items and restart.
    pub fn restart_with(&mut self, items: Vec<T>) {
        self.items = items;
        self.start();
    }

    /// Advance by one step.
    ///
    /// The tick after the last item reports [`Tick::Finished`].
    pub fn tick(&mut self) -> Tick<'_, T> {
        if self.state != RunState::Running {
            return Tick::Idle;
        }
        if self.revealed < self.items.len() {
            self.revealed += 1;
            return Tick::Revealed(&self.items[self.revealed - 1]);
        }
        self.state = RunState::Finished;
        Tick::Finished
    }

    /// Stop the active run. Returns `true` if a run was active.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.state == RunState::Running;
        if was_running {
            self.state = RunState::Cancelled;
        }
        was_running
    }

    /// Items revealed so far.
    pub fn revealed(&self) -> &[T] {
        &self.items[..self.revealed]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn is_finished(&self) -> bool {
        self.state == RunState::Finished
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == RunState::Cancelled
    }
}
