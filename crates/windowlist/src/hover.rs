/*!
Hover delays for the preview menu.

Each button owns one [`HoverDelay`]: at most one pending delay at a time,
either waiting to open the preview menu or waiting to close it. Starting
a delay cancels the pending one.

Every delay carries a generation number. The scheduler callback only
reports `(button, generation)` back to the engine; [`HoverDelay::fire`]
accepts the firing only when it matches the pending generation, so a
firing that was already in flight when the delay got cancelled is a
no-op.

## Usage

```ignore
hover.start(scheduler, Duration::from_millis(400), HoverAction::Open, move |generation| {
  inbox.push(Signal::HoverTimer { button, generation });
});

// Later, when the signal is processed:
if let Some(HoverAction::Open) = hover.fire(generation) {
  open_preview(button);
}
```
*/

use std::time::Duration;

use crate::platform::Scheduler;
use crate::types::TimerId;

/// What happens when a hover delay runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HoverAction {
  Open,
  Close,
}

#[derive(Debug, Clone, Copy)]
struct PendingDelay {
  timer: TimerId,
  action: HoverAction,
  generation: u64,
}

/// Single pending hover delay of one button.
#[derive(Debug, Default)]
pub(crate) struct HoverDelay {
  pending: Option<PendingDelay>,
  generation: u64,
}

impl HoverDelay {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Start a delay, replacing the pending one. `on_fire` receives the
  /// generation to hand back to [`HoverDelay::fire`].
  pub(crate) fn start(
    &mut self,
    scheduler: &dyn Scheduler,
    delay: Duration,
    action: HoverAction,
    on_fire: impl FnOnce(u64) + 'static,
  ) {
    self.cancel(scheduler);
    self.generation += 1;
    let generation = self.generation;
    let timer = scheduler.schedule(delay, Box::new(move || on_fire(generation)));
    self.pending = Some(PendingDelay {
      timer,
      action,
      generation,
    });
  }

  /// Cancel the pending delay, if any.
  pub(crate) fn cancel(&mut self, scheduler: &dyn Scheduler) {
    if let Some(pending) = self.pending.take() {
      scheduler.cancel(pending.timer);
    }
  }

  /// Consume a firing. Returns the action only for the current generation.
  pub(crate) fn fire(&mut self, generation: u64) -> Option<HoverAction> {
    match self.pending {
      Some(pending) if pending.generation == generation => {
        self.pending = None;
        Some(pending.action)
      }
      _ => {
        log::trace!("Ignoring stale hover delay (generation {generation})");
        None
      }
    }
  }

  #[cfg(test)]
  pub(crate) fn pending_action(&self) -> Option<HoverAction> {
    self.pending.map(|p| p.action)
  }
}
