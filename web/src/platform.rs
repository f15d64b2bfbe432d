//! Browser-backed implementations of the engine's ports.

use crate::game::{GameView, Msg};
use crate::utils::*;
use gloo::storage::{LocalStorage, Storage};
use gloo::timers::callback::Interval;
use web_sys::HtmlAudioElement;
use whackamole_core::{self as game, HighScores, ScoreStore, Scheduler, SoundCue, TimerTask};
use yew::html::Scope;

impl StorageKey for HighScores {
    const KEY: &'static str = "whackamole:high-scores";
}

/// Turns every tick into a message on the component's queue, so ticks are
/// handled one at a time along with clicks.
pub(crate) struct IntervalScheduler {
    link: Scope<GameView>,
}

impl IntervalScheduler {
    pub(crate) fn new(link: Scope<GameView>) -> Self {
        Self { link }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn schedule(&mut self, task: TimerTask, period_ms: u32) -> Interval {
        log::trace!("scheduling {:?} every {} ms", task, period_ms);
        let link = self.link.clone();
        Interval::new(period_ms, move || link.send_message(Msg::Timer(task)))
    }

    fn cancel(&mut self, handle: Interval) {
        // dropping the closure clears the interval
        drop(handle.cancel());
    }
}

#[derive(Debug, Default)]
pub(crate) struct LocalScoreStore;

impl ScoreStore for LocalScoreStore {
    fn load(&mut self) -> HighScores {
        LocalOrDefault::local_or_default()
    }

    fn save(&mut self, scores: &HighScores) -> game::Result<()> {
        LocalStorage::set(<HighScores as StorageKey>::KEY, scores)
            .map_err(|err| game::GameError::Storage(err.to_string()))
    }
}

pub(crate) struct StartupCue {
    audio: Option<HtmlAudioElement>,
}

impl StartupCue {
    pub(crate) const SRC: &'static str = "assets/startup.mp3";

    pub(crate) fn new() -> Self {
        let audio = HtmlAudioElement::new_with_src(Self::SRC)
            .map_err(|err| log::warn!("could not load startup cue: {:?}", err))
            .ok();
        Self { audio }
    }
}

impl SoundCue for StartupCue {
    fn play_startup(&mut self) {
        let Some(audio) = &self.audio else {
            return;
        };
        audio.set_current_time(0.0);
        if let Err(err) = audio.play() {
            log::debug!("startup cue did not play: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_scores_key_is_namespaced() {
        assert_eq!(<HighScores as StorageKey>::KEY, "whackamole:high-scores");
    }
}
