use crate::utils::*;
use crate::{FATAL_MESSAGE, loader};
use bingo::{ActionOutcome, CellIndex};
use gloo::timers::callback::Timeout;
use walkbingo_core as bingo;
use yew::prelude::*;

/// How long a single cell spins after a reroll.
const SHUFFLE_CELL_MS: u32 = 300;

/// Until the last staggered cell has settled.
const SHUFFLE_MS: u32 = SHUFFLE_CELL_MS + shuffle_delay_ms(bingo::CELL_COUNT - 1);

type Engine = bingo::BingoEngine<bingo::RandomCardGenerator>;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Open,
    Marked,
    Bingo,
}

/// Everything a cell needs to pick its styling.
#[derive(Copy, Clone, Debug, PartialEq)]
struct CellLook {
    state: ViewCellState,
    free: bool,
    locked: bool,
}

impl CellLook {
    fn at(engine: &Engine, index: CellIndex) -> Self {
        let state = if engine.is_in_completed_line(index) {
            ViewCellState::Bingo
        } else if engine.is_marked(index) {
            ViewCellState::Marked
        } else {
            ViewCellState::Open
        };
        Self {
            state,
            free: index == bingo::FREE_CELL_INDEX,
            locked: !engine.can_tap(index),
        }
    }

    fn classes(self, shuffling: bool) -> Classes {
        use ViewCellState::*;

        let mut class = classes!(
            "cell",
            match self.state {
                Open => classes!(),
                Marked => classes!("marked"),
                Bingo => classes!("marked", "bingo"),
            }
        );
        if self.free {
            class.push("free");
        }
        if self.locked {
            class.push("locked");
        }
        if shuffling {
            class.push("shuffle");
        }
        class
    }
}

/// Changes with every reroll, so cells remount and replay their animation.
fn cell_key(generation: u32, index: CellIndex) -> String {
    format!("{}-{}", generation, index)
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E: std::fmt::Display> HasUpdate for Result<ActionOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or_else(
            |err| {
                log::error!("{}", err);
                false
            },
            ActionOutcome::has_update,
        )
    }
}

#[derive(Debug)]
enum Stage {
    Loading,
    Ready(Engine),
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    ItemsLoaded(bingo::ItemPool),
    TapCell(CellIndex),
    Reroll,
    Start,
    ShuffleDone,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: CellIndex,
    text: AttrValue,
    look: CellLook,
    #[prop_or_default]
    shuffling: bool,
    callback: Callback<CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        text,
        look,
        shuffling,
        callback,
    } = props.clone();

    let class = look.classes(shuffling);
    let style = shuffling.then(|| format!("animation-delay: {}ms", shuffle_delay_ms(index)));

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} tapped", index);
        callback.emit(index);
    });

    html! {
        <td {class} {style} {onclick}>{text.to_string()}</td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub items_url: AttrValue,
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    stage: Stage,
    shuffle: Option<Timeout>,
    generation: u32,
}

impl GameView {
    fn engine_mut(&mut self) -> Option<&mut Engine> {
        match &mut self.stage {
            Stage::Ready(engine) => Some(engine),
            Stage::Loading | Stage::Failed => None,
        }
    }

    /// Arms the shuffle animation, dropping (and so cancelling) any pending one.
    fn start_shuffle(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.generation = self.generation.wrapping_add(1);
        self.shuffle = Some(Timeout::new(SHUFFLE_MS, move || {
            link.send_message(Msg::ShuffleDone)
        }));
    }

    fn view_card(&self, ctx: &Context<Self>, engine: &Engine) -> Html {
        use bingo::{GRID_SIZE, index_of};
        use Msg::*;

        let started = engine.phase().is_started();
        let shuffling = self.shuffle.is_some();
        let generation = self.generation;
        let status = engine.status();

        let cb_reroll = ctx.link().callback(|_: MouseEvent| Reroll);
        let cb_start = ctx.link().callback(|_: MouseEvent| Start);

        html! {
            <div class="walkbingo">
                <nav>
                    <button class="reroll" disabled={!engine.can_reroll()} onclick={cb_reroll}>{"Reroll"}</button>
                    <aside class="line-count">{engine.line_count().to_string()}</aside>
                    <button class="start" disabled={!engine.can_start()} onclick={cb_start}>{"Start"}</button>
                </nav>
                <table class={classes!(started.then_some("started"))}>
                    {
                        for (0..GRID_SIZE).map(|row| html! {
                            <tr>
                                {
                                    for (0..GRID_SIZE).map(|col| {
                                        let index = index_of((row, col));
                                        let cell = engine.card().cell_at(index);
                                        let text = AttrValue::from(cell.text().to_string());
                                        let look = CellLook::at(engine, index);
                                        let callback = ctx.link().callback(TapCell);
                                        html! {
                                            <CellView key={cell_key(generation, index)} {index} {text} {look} {shuffling} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <p class={classes!("status", status.is_bingo().then_some("bingo"))}>{status.to_string()}</p>
            </div>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let items_url = ctx.props().items_url.clone();
        ctx.link()
            .send_future(async move { Msg::ItemsLoaded(loader::load_items(&items_url).await) });

        Self {
            stage: Stage::Loading,
            shuffle: None,
            generation: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            ItemsLoaded(pool) => {
                let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
                log::debug!("seed: {}", seed);
                self.stage = match Engine::new(pool, bingo::RandomCardGenerator::new(seed)) {
                    Ok(engine) => Stage::Ready(engine),
                    Err(err) => {
                        log::error!("could not create a card: {}", err);
                        Stage::Failed
                    }
                };
                true
            }
            TapCell(index) => self
                .engine_mut()
                .is_some_and(|engine| engine.tap_cell(index).has_update()),
            Reroll => {
                let updated = self
                    .engine_mut()
                    .is_some_and(|engine| engine.reroll().has_update());
                if updated {
                    self.start_shuffle(ctx);
                }
                updated
            }
            Start => self
                .engine_mut()
                .is_some_and(|engine| engine.start().has_update()),
            ShuffleDone => self.shuffle.take().is_some(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.stage {
            Stage::Loading => html! {
                <div class="walkbingo loading"><p class="status">{"Loading items…"}</p></div>
            },
            Stage::Ready(engine) => self.view_card(ctx, engine),
            Stage::Failed => html! {
                <div class="walkbingo failed"><p class="status">{FATAL_MESSAGE}</p></div>
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::new(bingo::ItemPool::fallback(), bingo::RandomCardGenerator::new(1)).unwrap()
    }

    fn class_list(look: CellLook, shuffling: bool) -> Vec<&'static str> {
        let classes = look.classes(shuffling);
        ["cell", "marked", "bingo", "free", "locked", "shuffle"]
            .into_iter()
            .filter(|name| classes.contains(*name))
            .collect()
    }

    #[test]
    fn unstarted_card_is_open_and_locked() {
        let engine = engine();

        for index in 0..bingo::CELL_COUNT {
            let look = CellLook::at(&engine, index);
            assert_eq!(look.state, ViewCellState::Open);
            assert!(look.locked);
            assert_eq!(look.free, index == bingo::FREE_CELL_INDEX);
        }
    }

    #[test]
    fn unstarted_free_cell_classes() {
        let look = CellLook::at(&engine(), bingo::FREE_CELL_INDEX);

        assert_eq!(class_list(look, false), ["cell", "free", "locked"]);
    }

    #[test]
    fn started_free_cell_is_marked_but_locked() {
        let mut engine = engine();
        engine.start();

        let free = CellLook::at(&engine, bingo::FREE_CELL_INDEX);
        assert_eq!(free.state, ViewCellState::Marked);
        assert_eq!(class_list(free, false), ["cell", "marked", "free", "locked"]);

        let open = CellLook::at(&engine, 0);
        assert_eq!(class_list(open, false), ["cell"]);
    }

    #[test]
    fn completed_line_cells_render_as_bingo() {
        let mut engine = engine();
        engine.start();
        for index in [2, 7, 17] {
            assert!(engine.tap_cell(index).has_update());
        }
        assert_eq!(CellLook::at(&engine, 2).state, ViewCellState::Marked);

        assert!(engine.tap_cell(22).has_update());

        for index in [2, 7, bingo::FREE_CELL_INDEX, 17, 22] {
            assert_eq!(CellLook::at(&engine, index).state, ViewCellState::Bingo);
        }
        assert_eq!(
            class_list(CellLook::at(&engine, 7), false),
            ["cell", "marked", "bingo"]
        );
        assert_eq!(
            class_list(CellLook::at(&engine, bingo::FREE_CELL_INDEX), false),
            ["cell", "marked", "bingo", "free", "locked"]
        );
        assert_eq!(CellLook::at(&engine, 3).state, ViewCellState::Open);
    }

    #[test]
    fn shuffling_adds_shuffle_class() {
        let look = CellLook::at(&engine(), 0);

        assert_eq!(class_list(look, true), ["cell", "locked", "shuffle"]);
    }

    #[test]
    fn cell_keys_change_between_rerolls() {
        assert_ne!(cell_key(1, 4), cell_key(2, 4));
        assert_ne!(cell_key(1, 4), cell_key(1, 5));
        assert_eq!(cell_key(3, 12), cell_key(3, 12));
    }

    #[test]
    fn ignored_actions_do_not_request_render() {
        let mut engine = engine();

        assert!(!engine.tap_cell(0).has_update());
        assert!(engine.start().has_update());
        assert!(!engine.reroll().has_update());
        assert!(!engine.tap_cell(bingo::CELL_COUNT).has_update());
    }

    #[test]
    fn shuffle_outlasts_every_cell_delay() {
        assert!(SHUFFLE_MS > shuffle_delay_ms(bingo::CELL_COUNT - 1));
    }
}
