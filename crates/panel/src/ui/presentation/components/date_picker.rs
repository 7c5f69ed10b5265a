//! Date of Birth Picker - dropdown calendar with month and year grids
//!
//! All state lives in the domain `DatePicker` inside `PanelState`; these
//! components only render it and forward clicks as reducer calls.

use chrono::Local;
use dioxus::prelude::*;
use identity_domain::{
    format_long, parse_iso, DatePicker, DayCell, DayGrid, PickerView, MONTH_NAMES, WEEKDAY_LABELS,
};

use crate::presentation::state::PanelState;

const HEADER_BUTTON_CLASS: &str =
    "px-3 py-1.5 rounded-xl text-white font-medium hover:bg-white/10 bg-white/5 border border-white/10";
const NAV_BUTTON_CLASS: &str = "p-2 hover:bg-white/10 rounded-xl text-gray-400";
const GRID_BUTTON_CLASS: &str =
    "h-10 w-full rounded-xl flex items-center justify-center text-sm text-gray-300 hover:bg-white/10 border border-transparent";
const GRID_BUTTON_ACTIVE_CLASS: &str =
    "h-10 w-full rounded-xl flex items-center justify-center text-sm bg-fivem-accent text-white shadow-lg";

/// Date-of-birth field: a button showing the chosen date plus the dropdown
#[component]
pub fn DateOfBirthPicker() -> Element {
    let mut state = use_context::<PanelState>();

    let (picker, date_of_birth) = {
        let panel = state.panel.read();
        (panel.picker().clone(), panel.form().date_of_birth.clone())
    };
    let label = parse_iso(&date_of_birth)
        .map(format_long)
        .unwrap_or_else(|| "Select date".to_string());
    let label_class = if date_of_birth.is_empty() {
        "text-gray-400"
    } else {
        "text-white"
    };
    let chevron_class = if picker.is_open() {
        "text-gray-400 rotate-180"
    } else {
        "text-gray-400"
    };

    let cursor = picker.cursor();
    let month_name = cursor.month_name();
    let year = cursor.year();
    let today = Local::now().date_naive();

    rsx! {
        div {
            class: "relative",

            button {
                r#type: "button",
                class: "w-full pl-4 pr-4 py-3.5 bg-white/5 border border-white/10 rounded-2xl text-left flex items-center justify-between hover:bg-white/10",
                onclick: move |_| state.update(|p| p.picker_mut().toggle_open()),
                span { class: label_class, "{label}" }
                span { class: chevron_class, "▾" }
            }

            if picker.is_open() {
                // Click-away layer
                div {
                    class: "fixed inset-0 z-0",
                    onclick: move |_| state.update(|p| p.picker_mut().set_open(false)),
                }

                div {
                    class: "absolute z-10 mt-2 w-full bg-panel border border-white/10 rounded-2xl shadow-lg p-5",

                    // Header
                    div {
                        class: "flex items-center justify-between mb-5",
                        button {
                            r#type: "button",
                            class: NAV_BUTTON_CLASS,
                            onclick: move |_| state.update(|p| p.picker_mut().prev_month()),
                            "‹"
                        }
                        div {
                            class: "flex items-center space-x-2",
                            button {
                                r#type: "button",
                                class: HEADER_BUTTON_CLASS,
                                onclick: move |_| state.update(|p| p.picker_mut().toggle_month_view()),
                                "{month_name}"
                            }
                            button {
                                r#type: "button",
                                class: HEADER_BUTTON_CLASS,
                                onclick: move |_| state.update(|p| p.picker_mut().toggle_year_view()),
                                "{year}"
                            }
                        }
                        button {
                            r#type: "button",
                            class: NAV_BUTTON_CLASS,
                            onclick: move |_| state.update(|p| p.picker_mut().next_month()),
                            "›"
                        }
                    }

                    {
                        match picker.view() {
                            PickerView::Year => rsx! {
                                YearGrid { picker: picker.clone() }
                            },
                            PickerView::Month => rsx! {
                                MonthGrid { picker: picker.clone() }
                            },
                            PickerView::Day => rsx! {
                                DayGridView { grid: picker.day_grid(today) }
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Every configured year, newest first
#[component]
fn YearGrid(picker: DatePicker) -> Element {
    let mut state = use_context::<PanelState>();

    rsx! {
        div {
            class: "grid grid-cols-3 gap-2 max-h-60 overflow-y-auto",
            for year in picker.years().descending() {
                button {
                    key: "{year}",
                    r#type: "button",
                    class: grid_button_class(picker.is_cursor_year(year)),
                    onclick: move |_| state.update(|p| p.picker_mut().choose_year(year)),
                    "{year}"
                }
            }
        }
    }
}

/// January through December
#[component]
fn MonthGrid(picker: DatePicker) -> Element {
    let mut state = use_context::<PanelState>();

    rsx! {
        div {
            class: "grid grid-cols-2 gap-2 max-h-60 overflow-y-auto",
            for (month, name) in (0u32..).zip(MONTH_NAMES) {
                button {
                    key: "{name}",
                    r#type: "button",
                    class: grid_button_class(picker.is_cursor_month(month)),
                    onclick: move |_| state.update(|p| p.picker_mut().choose_month(month)),
                    "{name}"
                }
            }
        }
    }
}

#[component]
fn DayGridView(grid: DayGrid) -> Element {
    let mut state = use_context::<PanelState>();

    rsx! {
        div {
            class: "grid grid-cols-7 gap-2 mb-3",
            for label in WEEKDAY_LABELS {
                div {
                    key: "{label}",
                    class: "text-center text-sm text-gray-400 font-medium",
                    "{label}"
                }
            }
        }
        div {
            class: "grid grid-cols-7 gap-2",
            for blank in 0..grid.leading_blanks {
                div { key: "empty-{blank}", class: "h-10 w-10" }
            }
            for cell in grid.cells.iter().copied() {
                button {
                    key: "{cell.day}",
                    r#type: "button",
                    class: day_class(&cell),
                    onclick: move |_| state.update(|p| p.select_day(cell.day)),
                    "{cell.day}"
                }
            }
        }
    }
}

fn grid_button_class(active: bool) -> &'static str {
    if active {
        GRID_BUTTON_ACTIVE_CLASS
    } else {
        GRID_BUTTON_CLASS
    }
}

fn day_class(cell: &DayCell) -> &'static str {
    if cell.is_selected {
        "h-10 w-10 rounded-xl flex items-center justify-center text-sm bg-fivem-accent text-white shadow-lg"
    } else if cell.is_today {
        "h-10 w-10 rounded-xl flex items-center justify-center text-sm text-fivem-accent border border-fivem-accent"
    } else {
        "h-10 w-10 rounded-xl flex items-center justify-center text-sm text-gray-300 hover:bg-white/10 border border-transparent"
    }
}
