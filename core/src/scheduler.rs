use alloc::vec::Vec;

/// The two repeating jobs a running round needs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerTask {
    Countdown,
    Reveal,
}

/// Registers repeating tasks whose ticks get fed back into [`crate::GameEngine::on_timer`].
///
/// Implementations must deliver ticks one at a time, never while another tick
/// or input event is being handled.
pub trait Scheduler {
    type Handle;

    fn schedule(&mut self, task: TimerTask, period_ms: u32) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ManualTimer(u32);

#[derive(Clone, Debug, PartialEq)]
struct Registration {
    id: u32,
    task: TimerTask,
    period_ms: u64,
    next_due_ms: u64,
}

/// Virtual-time scheduler, time only moves when ticks are pulled out of it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u32,
    timers: Vec<Registration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_scheduled(&self, task: TimerTask) -> bool {
        self.timers.iter().any(|timer| timer.task == task)
    }

    pub fn period_of(&self, task: TimerTask) -> Option<u64> {
        self.timers
            .iter()
            .find(|timer| timer.task == task)
            .map(|timer| timer.period_ms)
    }

    /// Takes the earliest tick due at or before `deadline_ms` and moves the clock to it.
    ///
    /// Ticks due at the same instant come out in registration order. When nothing
    /// is due the clock jumps to the deadline.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<TimerTask> {
        let Some(timer) = self
            .timers
            .iter_mut()
            .filter(|timer| timer.next_due_ms <= deadline_ms)
            .min_by_key(|timer| (timer.next_due_ms, timer.id))
        else {
            self.now_ms = self.now_ms.max(deadline_ms);
            return None;
        };
        self.now_ms = timer.next_due_ms;
        timer.next_due_ms += timer.period_ms;
        Some(timer.task)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule(&mut self, task: TimerTask, period_ms: u32) -> ManualTimer {
        let id = self.next_id;
        self.next_id += 1;
        // a zero period would never let the clock advance
        let period_ms = u64::from(period_ms.max(1));
        self.timers.push(Registration {
            id,
            task,
            period_ms,
            next_due_ms: self.now_ms + period_ms,
        });
        ManualTimer(id)
    }

    fn cancel(&mut self, handle: ManualTimer) {
        self.timers.retain(|timer| timer.id != handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_come_out_in_time_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(TimerTask::Countdown, 1000);
        scheduler.schedule(TimerTask::Reveal, 700);

        let mut ticks = Vec::new();
        while let Some(task) = scheduler.pop_due(2100) {
            ticks.push((scheduler.now_ms(), task));
        }
        assert_eq!(
            ticks,
            [
                (700, TimerTask::Reveal),
                (1000, TimerTask::Countdown),
                (1400, TimerTask::Reveal),
                (2000, TimerTask::Countdown),
                (2100, TimerTask::Reveal),
            ]
        );
    }

    #[test]
    fn simultaneous_ticks_follow_registration_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(TimerTask::Countdown, 1000);
        scheduler.schedule(TimerTask::Reveal, 1000);
        assert_eq!(scheduler.pop_due(1000), Some(TimerTask::Countdown));
        assert_eq!(scheduler.pop_due(1000), Some(TimerTask::Reveal));
        assert_eq!(scheduler.pop_due(1000), None);
    }

    #[test]
    fn cancelled_timers_stop_ticking() {
        let mut scheduler = ManualScheduler::new();
        let countdown = scheduler.schedule(TimerTask::Countdown, 1000);
        scheduler.schedule(TimerTask::Reveal, 1500);
        scheduler.cancel(countdown);

        assert_eq!(scheduler.active_timers(), 1);
        assert_eq!(scheduler.pop_due(1200), None);
        assert_eq!(scheduler.now_ms(), 1200);
        assert_eq!(scheduler.pop_due(1500), Some(TimerTask::Reveal));
    }
}
