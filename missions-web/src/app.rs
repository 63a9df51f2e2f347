//! Application root: owns the in-memory catalog and daily selection and
//! forwards user intents to the mission engine. Confirmation dialogs and
//! user-facing validation messages live here; the engine never talks to the
//! user.

use missions_game::{Clock, DailySelection, MissionEngine};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use yew::prelude::*;

use crate::clock::BrowserClock;
use crate::components::{CatalogEditor, MissionChecklist};
use crate::dom;
use crate::storage::BrowserStore;

fn engine() -> MissionEngine<BrowserStore> {
    MissionEngine::new(BrowserStore)
}

#[cfg(target_arch = "wasm32")]
fn draw_entropy() -> u64 {
    js_sys::Date::now().to_bits()
}

#[cfg(not(target_arch = "wasm32"))]
fn draw_entropy() -> u64 {
    0x5EED
}

fn draw_rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(draw_entropy())
}

#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_state(|| engine().load_catalog());
    let selection = {
        let catalog = catalog.clone();
        use_state(move || {
            let today = BrowserClock.today();
            let mut rng = draw_rng();
            engine()
                .load_or_generate(&catalog, &today, &mut rng)
                .unwrap_or_else(|err| {
                    log::error!("failed to persist today's missions: {err}");
                    DailySelection::generate(&catalog, today, &mut rng)
                })
        })
    };

    let on_toggle = {
        let selection = selection.clone();
        Callback::from(move |(index, done): (usize, bool)| {
            let mut next = (*selection).clone();
            match engine().toggle(&mut next, index, done) {
                Ok(false) => {}
                Ok(true) => selection.set(next),
                Err(err) => {
                    log::error!("failed to persist check mark: {err}");
                    selection.set(next);
                }
            }
        })
    };

    let on_regenerate = {
        let catalog = catalog.clone();
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            if catalog.is_empty() {
                dom::alert("The mission list is empty. Add a mission first.");
                return;
            }
            if !selection.is_empty()
                && !dom::confirm("Redraw today's missions?\nCurrent check marks will be reset.")
            {
                return;
            }
            let today = BrowserClock.today();
            let mut rng = draw_rng();
            match engine().regenerate(&catalog, &today, &mut rng) {
                Ok(fresh) => selection.set(fresh),
                Err(err) => log::error!("failed to persist redraw: {err}"),
            }
        })
    };

    let on_add = {
        let catalog = catalog.clone();
        Callback::from(move |text: String| {
            let mut next = (*catalog).clone();
            match engine().add_mission(&mut next, &text) {
                Ok(true) => catalog.set(next),
                Ok(false) => dom::alert("Enter a mission first."),
                Err(err) => {
                    log::error!("failed to persist mission list: {err}");
                    catalog.set(next);
                }
            }
        })
    };

    let on_delete = {
        let catalog = catalog.clone();
        Callback::from(move |index: usize| {
            let Some(text) = catalog.entries().get(index).cloned() else {
                return;
            };
            if !dom::confirm(&format!("Delete this mission?\n\n{text}")) {
                return;
            }
            let mut next = (*catalog).clone();
            match engine().delete_mission(&mut next, index) {
                Ok(true) => catalog.set(next),
                Ok(false) => {}
                Err(err) => {
                    log::error!("failed to persist mission list: {err}");
                    catalog.set(next);
                }
            }
        })
    };

    html! {
        <main id="main" class="daily-missions">
            <h1>{ "Daily Missions" }</h1>
            <MissionChecklist selection={(*selection).clone()} on_toggle={on_toggle} />
            <button id="generate-btn" onclick={on_regenerate}>{ "Redraw today's missions" }</button>
            <CatalogEditor
                entries={catalog.entries().to_vec()}
                on_add={on_add}
                on_delete={on_delete}
            />
        </main>
    }
}
