use crate::button::PressButton;
use crate::platform::{IntervalScheduler, LocalScoreStore, StartupCue};
use crate::settings::Settings;
use crate::utils::*;
use bitflags::bitflags;
use clap::Args;
use whackamole_core as game;
use yew::prelude::*;

const MOLE_IMAGE_SRC: &str = "assets/mole.png";

type Engine = game::GameEngine<IntervalScheduler, LocalScoreStore, StartupCue>;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl HasUpdate for game::Result<game::WhackOutcome> {
    fn has_update(self) -> bool {
        self.map_or_else(
            |err| {
                log::warn!("whack rejected: {}", err);
                false
            },
            |outcome| outcome.has_update(),
        )
    }
}

impl HasUpdate for game::Result<()> {
    fn has_update(self) -> bool {
        self.map_or_else(
            |err| {
                log::warn!("{}", err);
                false
            },
            |()| true,
        )
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq)]
    struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

/// Touch and pen contacts always count, some browsers report no buttons for
/// them. A mouse needs its primary button down.
fn is_whack_press(pointer_type: &str, buttons: u16) -> bool {
    match pointer_type {
        "touch" | "pen" => true,
        _ => MouseButtons::from_bits_truncate(buttons).contains(MouseButtons::LEFT),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Whack(usize),
    Timer(game::TimerTask),
    ChangeDifficulty(game::Difficulty),
}

#[derive(Properties, Clone, PartialEq)]
struct HoleProps {
    slot: game::Slot,
    #[prop_or_default]
    playable: bool,
    callback: Callback<usize>,
}

#[function_component(HoleView)]
fn hole_component(props: &HoleProps) -> Html {
    let HoleProps {
        slot,
        playable,
        callback,
    } = props.clone();
    let position = slot.position;
    let class = classes!(
        "hole",
        slot.visible.then_some("active"),
        playable.then_some("playable")
    );

    // whack on press rather than release, moles don't wait
    let onpointerdown = Callback::from(move |e: PointerEvent| {
        let pointer_type = e.pointer_type();
        log::trace!("hole {} {} down ({})", position, pointer_type, e.buttons());
        if is_whack_press(&pointer_type, e.buttons()) {
            callback.emit(position);
        }
    });

    html! {
        <td {class} {onpointerdown}>
            if slot.visible {
                <div class={classes!("mole", format!("face-{}", slot.face.index()))}>
                    <img class="mole-image" src={MOLE_IMAGE_SRC} alt="mole" draggable="false"/>
                </div>
            }
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,

    /// Difficulty to start on (easy, normal or hard)
    #[arg(short, long)]
    #[prop_or_default]
    pub difficulty: Option<game::Difficulty>,
}

pub(crate) struct GameView {
    engine: Engine,
    settings: Settings,
}

impl GameView {
    fn change_difficulty(&mut self, difficulty: game::Difficulty) -> bool {
        if self.engine.difficulty() == difficulty && self.settings.difficulty == difficulty {
            return false;
        }
        self.engine.change_difficulty(difficulty);
        self.settings.difficulty = difficulty;
        self.settings.local_save();
        true
    }

    fn view_difficulty(&self, ctx: &Context<Self>) -> Html {
        let current = self.engine.difficulty();
        html! {
            <menu class="difficulty">
                {
                    for game::Difficulty::ALL.into_iter().map(|difficulty| {
                        let onclick = ctx.link().callback(move |_: ()| Msg::ChangeDifficulty(difficulty));
                        html! {
                            <li>
                                <PressButton active={difficulty == current} {onclick}>
                                    {difficulty.label()}
                                </PressButton>
                            </li>
                        }
                    })
                }
            </menu>
        }
    }

    fn view_high_scores(&self) -> Html {
        html! {
            <section class="high-scores">
                <h2>{"High Scores"}</h2>
                <ol>
                    { for self.engine.high_scores().iter().map(|score| html! { <li>{score.to_string()}</li> }) }
                </ol>
            </section>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let settings: Settings = LocalOrDefault::local_or_default();
        let GameProps { seed, difficulty } = ctx.props().clone();
        let seed = seed.unwrap_or_else(js_random_seed);
        let difficulty = difficulty.unwrap_or(settings.difficulty);
        log::debug!("seed: {}, difficulty: {}", seed, difficulty.name());

        let engine = game::GameEngine::new(
            IntervalScheduler::new(ctx.link().clone()),
            LocalScoreStore,
            StartupCue::new(),
            seed,
        )
        .with_difficulty(difficulty);

        Self { engine, settings }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => self.engine.start().has_update(),
            Whack(position) => self.engine.whack(position).has_update(),
            Timer(task) => match self.engine.on_timer(task) {
                game::TickOutcome::Ended { rank } => {
                    log::info!(
                        "round over, score {} (rank {:?})",
                        self.engine.score(),
                        rank
                    );
                    true
                }
                outcome => outcome.has_update(),
            },
            ChangeDifficulty(difficulty) => self.change_difficulty(difficulty),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.engine.teardown();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let running = self.engine.is_running();
        let score = format_for_counter(self.engine.score());
        let time_left = format_for_counter(self.engine.time_left());
        let cb_start = ctx.link().callback(|_: ()| Msg::Start);
        let cb_whack = ctx.link().callback(Msg::Whack);

        html! {
            <div class={classes!("whackamole", running.then_some("running"))}>
                <h1 class="title">{"Whack-a-Mole"}</h1>
                <nav>
                    <aside class="score">{score}</aside>
                    <aside class="time">{time_left}</aside>
                </nav>
                { self.view_difficulty(ctx) }
                if !running {
                    <PressButton class={classes!("start")} onclick={cb_start}>{"Start"}</PressButton>
                }
                <table class="board">
                    {
                        for self.engine.slots().chunks(game::HOLES_PER_ROW).map(|row| html! {
                            <tr>
                                {
                                    for row.iter().map(|&slot| {
                                        let callback = cb_whack.clone();
                                        html! {
                                            <HoleView {slot} playable={running} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                { self.view_high_scores() }
            </div>
        }
    }
}
