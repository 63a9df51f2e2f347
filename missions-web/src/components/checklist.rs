//! Today's checklist plus the derived progress line.

use missions_game::{DailySelection, evaluate};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub selection: DailySelection,
    /// Emits `(index, done)` when a checkbox changes.
    pub on_toggle: Callback<(usize, bool)>,
}

fn progress_line(selection: &DailySelection) -> String {
    let progress = evaluate(selection);
    let mut line = format!(
        "Progress: {} / {} missions done",
        progress.done_count, progress.total
    );
    if let Some(verdict) = progress.verdict {
        if verdict.is_clear {
            line.push_str("  🎉 Today's missions are cleared!");
        } else {
            let remaining = verdict.remaining;
            line.push_str(&format!("  ({remaining} to go)"));
        }
    }
    line
}

#[function_component(MissionChecklist)]
pub fn mission_checklist(p: &Props) -> Html {
    if p.selection.is_empty() {
        return html! { <section class="today" data-testid="today-empty" /> };
    }

    let items = p.selection.missions.iter().enumerate().map(|(index, record)| {
        let on_change = {
            let cb = p.on_toggle.clone();
            Callback::from(move |e: web_sys::Event| {
                if let Some(input) = e
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                {
                    cb.emit((index, input.checked()));
                }
            })
        };
        let label_class = if record.done {
            "mission-label done"
        } else {
            "mission-label"
        };
        html! {
            <li class="mission-item">
                <label>
                    <input
                        type="checkbox"
                        class="mission-checkbox"
                        checked={record.done}
                        onchange={on_change}
                    />
                    <span class={label_class}>{ record.text.clone() }</span>
                </label>
            </li>
        }
    });

    html! {
        <section class="today" data-testid="today">
            <p class="date-info">{ format!("Missions for {}", p.selection.date) }</p>
            <ul class="missions">{ for items }</ul>
            <p class="progress-info" aria-live="polite">{ progress_line(&p.selection) }</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use missions_game::{DateKey, MissionRecord};
    use yew::LocalServerRenderer;

    fn selection(done_flags: &[bool]) -> DailySelection {
        DailySelection {
            date: DateKey::from_ymd(2024, 1, 1),
            missions: done_flags
                .iter()
                .enumerate()
                .map(|(i, done)| MissionRecord {
                    text: format!("mission {i}"),
                    done: *done,
                })
                .collect(),
        }
    }

    fn render(selection: DailySelection) -> String {
        let props = Props {
            selection,
            on_toggle: Callback::noop(),
        };
        block_on(LocalServerRenderer::<MissionChecklist>::with_props(props).render())
    }

    #[test]
    fn renders_date_and_every_mission() {
        let html = render(selection(&[false; 5]));
        assert!(html.contains("Missions for 2024-01-01"));
        for i in 0..5 {
            assert!(html.contains(&format!("mission {i}")));
        }
        assert!(html.contains("Progress: 0 / 5 missions done"));
        assert!(html.contains("(3 to go)"));
    }

    #[test]
    fn cleared_selection_celebrates() {
        let html = render(selection(&[true, true, true, false, false]));
        assert!(html.contains("Progress: 3 / 5 missions done"));
        assert!(html.contains("cleared"));
    }

    #[test]
    fn done_items_get_the_strike_style() {
        let html = render(selection(&[true, false, false, false, false]));
        assert!(html.contains("mission-label done"));
    }

    #[test]
    fn undersized_selection_gets_counts_only() {
        let html = render(selection(&[true, true, true]));
        assert!(html.contains("Progress: 3 / 3 missions done"));
        assert!(!html.contains("cleared"));
        assert!(!html.contains("to go"));
    }

    #[test]
    fn empty_selection_renders_nothing() {
        let html = render(selection(&[]));
        assert!(!html.contains("Progress"));
        assert!(!html.contains("date-info"));
    }
}
