use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, Month, NaiveDate};
use dashboard_domain::calendar_grid::{short_month_name, WEEKDAY_LABELS};
use dashboard_domain::{
    DateRangePicker as PickerController, GridCell, PickerConfig, PickerError, SelectionStage,
    ShiftDirection, SystemClock,
};
use gloo::events::EventListener;
use shared::{AvailabilityBounds, DateRange, RangePreset};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::services::viewport::WebViewportObserver;

type WebPicker = PickerController<WebViewportObserver, SystemClock>;
type SharedPicker = Rc<RefCell<Option<WebPicker>>>;

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    /// Range currently applied to the dashboard
    pub range: DateRange,
    /// Years with data for the selected account
    #[prop_or_default]
    pub bounds: AvailabilityBounds,
    /// Called once per committed range (preset, second day click or clear)
    pub on_change: Callback<DateRange>,
    #[prop_or_default]
    pub config: Option<PickerConfig>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Build a callback that runs `action` against the controller and re-renders
fn controller_callback<E, F>(picker: &SharedPicker, force_update: &UseForceUpdateHandle, action: F) -> Callback<E>
where
    E: 'static,
    F: Fn(&mut WebPicker, E) + 'static,
{
    let picker = picker.clone();
    let force_update = force_update.clone();
    Callback::from(move |event: E| {
        if let Some(controller) = picker.borrow_mut().as_mut() {
            action(controller, event);
        }
        force_update.force_update();
    })
}

fn try_build(
    props: &DateRangePickerProps,
    observer: WebViewportObserver,
    on_change: Rc<RefCell<Callback<DateRange>>>,
) -> Result<WebPicker, PickerError> {
    PickerController::new(observer, SystemClock, move |range| on_change.borrow().emit(range))
        .with_config(props.config.clone().unwrap_or_default())?
        .with_bounds(props.bounds)?
        .with_committed_range(props.range)
}

fn build_controller(
    props: &DateRangePickerProps,
    trigger: NodeRef,
    picker: &SharedPicker,
    on_change: Rc<RefCell<Callback<DateRange>>>,
    force_update: UseForceUpdateHandle,
) -> WebPicker {
    let on_layout_change = {
        let picker = Rc::downgrade(picker);
        Callback::from(move |_: ()| {
            let Some(picker) = picker.upgrade() else {
                return;
            };
            if let Some(controller) = picker.borrow_mut().as_mut() {
                controller.on_layout_change();
            }
            force_update.force_update();
        })
    };
    let observer = || WebViewportObserver::new(trigger.clone(), on_layout_change.clone());

    match try_build(props, observer(), on_change.clone()) {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("Date picker setup failed, using defaults: {}", e);
            PickerController::new(observer(), SystemClock, move |range| on_change.borrow().emit(range))
        }
    }
}

#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let root_ref = use_node_ref();
    let trigger_ref = use_node_ref();
    let force_update = use_force_update();
    let on_change = use_mut_ref(|| props.on_change.clone());
    let picker: SharedPicker = use_mut_ref(|| None);

    *on_change.borrow_mut() = props.on_change.clone();

    let needs_controller = picker.borrow().is_none();
    if needs_controller {
        let controller = build_controller(
            props,
            trigger_ref.clone(),
            &picker,
            on_change.clone(),
            force_update.clone(),
        );
        *picker.borrow_mut() = Some(controller);
    }

    // Follow the parent: account switches replace both bounds and range
    if let Some(controller) = picker.borrow_mut().as_mut() {
        if let Err(e) = controller.set_availability_bounds(props.bounds) {
            log::warn!("Ignoring bounds from parent: {}", e);
        }
        if let Err(e) = controller.set_committed_range(props.range) {
            log::warn!("Ignoring range from parent: {}", e);
        }
    }

    // Close when clicking outside the picker while it is open
    let is_open = picker.borrow().as_ref().is_some_and(|p| p.is_open());
    {
        let picker = picker.clone();
        let root_ref = root_ref.clone();
        let force_update = force_update.clone();
        use_effect_with(is_open, move |is_open| {
            let listener = if *is_open {
                web_sys::window().map(|window| {
                    EventListener::new(&window, "click", move |e| {
                        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                            return;
                        };
                        // A re-render may already have replaced the clicked node
                        if !target.is_connected() {
                            return;
                        }
                        let Some(root) = root_ref.cast::<Element>() else {
                            return;
                        };
                        if root.contains(Some(&target)) {
                            return;
                        }
                        if let Some(controller) = picker.borrow_mut().as_mut() {
                            controller.close();
                        }
                        force_update.force_update();
                    })
                })
            } else {
                None
            };

            // Dropping the listener unregisters it
            move || drop(listener)
        });
    }

    let toggle = controller_callback(&picker, &force_update, |p, _: MouseEvent| p.toggle());
    let prev_month = controller_callback(&picker, &force_update, |p, _: MouseEvent| p.on_prev_month());
    let next_month = controller_callback(&picker, &force_update, |p, _: MouseEvent| p.on_next_month());
    let toggle_years = controller_callback(&picker, &force_update, |p, _: MouseEvent| {
        p.on_toggle_year_selection()
    });
    let clear = controller_callback(&picker, &force_update, |p, _: MouseEvent| p.on_clear());
    let select_preset = controller_callback(&picker, &force_update, |p, preset: RangePreset| {
        p.on_preset_click(preset)
    });
    let select_day = controller_callback(&picker, &force_update, |p, date: NaiveDate| p.on_day_click(date));
    let shift_years = controller_callback(&picker, &force_update, |p, direction: ShiftDirection| {
        p.on_shift_year_window(direction);
    });
    let select_year = controller_callback(&picker, &force_update, |p, year: i32| {
        p.on_select_year(year);
    });
    let select_month = controller_callback(&picker, &force_update, |p, month: Month| {
        p.on_select_month(month);
    });
    let back_to_years = controller_callback(&picker, &force_update, |p, _: MouseEvent| {
        p.on_back_to_year_grid();
    });

    let guard = picker.borrow();
    let Some(controller) = guard.as_ref() else {
        return html! {};
    };

    let label = controller.label();
    let panel = if !controller.is_open() {
        html! {}
    } else {
        let (align_right, open_upwards, style) = match controller.position() {
            Some(position) => (
                position.align_right,
                position.open_upwards,
                format!("width: {}px; max-height: {}px;", position.width, position.max_height),
            ),
            None => (false, false, String::new()),
        };

        let body = match controller.stage() {
            SelectionStage::YearGrid => {
                let back = {
                    let shift_years = shift_years.clone();
                    Callback::from(move |_: MouseEvent| shift_years.emit(ShiftDirection::Backward))
                };
                let forward = {
                    let shift_years = shift_years.clone();
                    Callback::from(move |_: MouseEvent| shift_years.emit(ShiftDirection::Forward))
                };
                html! {
                    <div class="year-grid">
                        <div class="year-grid-nav">
                            <button type="button" class="nav-button" onclick={back}
                                disabled={!controller.can_shift_year_window_back()}>{"‹"}</button>
                            <button type="button" class="nav-button" onclick={forward}
                                disabled={!controller.can_shift_year_window_forward()}>{"›"}</button>
                        </div>
                        <div class="year-grid-years">
                            {for controller.visible_years().into_iter().map(|year| {
                                let select_year = select_year.clone();
                                html! {
                                    <button
                                        type="button"
                                        class={classes!("year-button", (year == controller.viewing_month().year()).then(|| "current"))}
                                        onclick={Callback::from(move |_: MouseEvent| select_year.emit(year))}
                                    >
                                        {year}
                                    </button>
                                }
                            })}
                        </div>
                    </div>
                }
            }
            SelectionStage::MonthGrid => {
                let enabled = controller.month_enabled();
                html! {
                    <div class="month-grid">
                        <div class="month-grid-header">
                            <button type="button" class="nav-button" onclick={back_to_years.clone()}>{"‹"}</button>
                            <span class="pending-year">{controller.pending_year().map(|y| y.to_string()).unwrap_or_default()}</span>
                        </div>
                        <div class="month-grid-months">
                            {for (1..=12u8).filter_map(|n| Month::try_from(n).ok()).map(|month| {
                                let select_month = select_month.clone();
                                html! {
                                    <button
                                        type="button"
                                        class="month-button"
                                        disabled={!enabled}
                                        onclick={Callback::from(move |_: MouseEvent| select_month.emit(month))}
                                    >
                                        {short_month_name(month.number_from_month())}
                                    </button>
                                }
                            })}
                        </div>
                    </div>
                }
            }
            SelectionStage::Calendar | SelectionStage::Closed => html! {
                <div class="calendar-grid">
                    <div class="weekday-header">
                        {for WEEKDAY_LABELS.iter().map(|day| html! { <span>{*day}</span> })}
                    </div>
                    <div class="calendar-days">
                        {for controller.grid().into_iter().map(|cell| match cell {
                            GridCell::Blank => html! { <span class="calendar-day blank"></span> },
                            GridCell::Day(day) => {
                                let select_day = select_day.clone();
                                let date = day.date;
                                html! {
                                    <button
                                        type="button"
                                        class={classes!(
                                            "calendar-day",
                                            day.selected.then(|| "selected"),
                                            day.in_range.then(|| "in-range"),
                                            day.today.then(|| "today")
                                        )}
                                        onclick={Callback::from(move |_: MouseEvent| select_day.emit(date))}
                                    >
                                        {date.day()}
                                    </button>
                                }
                            }
                        })}
                    </div>
                </div>
            },
        };

        html! {
            <div
                class={classes!(
                    "date-range-panel",
                    align_right.then(|| "align-right"),
                    open_upwards.then(|| "open-upwards")
                )}
                style={style}
            >
                <div class="preset-list">
                    {for RangePreset::all().into_iter().map(|preset| {
                        let select_preset = select_preset.clone();
                        html! {
                            <button
                                type="button"
                                class="preset-button"
                                onclick={Callback::from(move |_: MouseEvent| select_preset.emit(preset))}
                            >
                                {preset.label()}
                            </button>
                        }
                    })}
                </div>

                <div class="calendar-header">
                    <button type="button" class="nav-button" onclick={prev_month}>{"‹"}</button>
                    <button type="button" class="month-year" onclick={toggle_years}>{controller.caption()}</button>
                    <button type="button" class="nav-button" onclick={next_month}>{"›"}</button>
                </div>

                {body}

                <div class="calendar-footer">
                    <button type="button" class="clear-button" onclick={clear}>{"Clear"}</button>
                </div>
            </div>
        }
    };

    html! {
        <div class="date-range-picker" ref={root_ref}>
            <button
                type="button"
                class="date-range-trigger"
                ref={trigger_ref}
                onclick={toggle}
                disabled={props.disabled}
            >
                <span class="date-text">{label}</span>
                <span class="calendar-icon">{"📅"}</span>
            </button>
            {panel}
        </div>
    }
}
