use yew::prelude::*;
use shared::{AvailabilityBounds, DateRange};

mod components;
mod hooks;
mod services;

use components::account_selector::AccountSelector;
use components::date_range_picker::DateRangePicker;
use hooks::use_account_history::use_account_history;
use hooks::use_active_account::use_active_account;
use services::api::ApiClient;
use services::logging::ConsoleLogger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let accounts = use_active_account(&api_client);
    let range = use_state(DateRange::all_time);

    let active_id = accounts.state.active_account.as_ref().map(|a| a.id.clone());
    let bounds = accounts
        .state
        .active_account
        .as_ref()
        .map(|a| a.availability())
        .unwrap_or_else(AvailabilityBounds::unbounded);

    // A new account starts from its whole history
    {
        let range = range.clone();
        use_effect_with(active_id.clone(), move |_| {
            range.set(DateRange::all_time());
            || ()
        });
    }

    let history = use_account_history(&api_client, active_id, *range);

    let on_range_change = {
        let range = range.clone();
        Callback::from(move |new_range: DateRange| {
            log::info!("Dashboard range changed to {:?}", new_range);
            range.set(new_range);
        })
    };

    let latest_balance = history.points.last().map(|p| format!("${:.2}", p.balance));

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <AccountSelector
                    accounts={accounts.state.accounts.clone()}
                    active_account={accounts.state.active_account.clone()}
                    loading={accounts.state.loading}
                    on_select={accounts.actions.set_active_account.clone()}
                />
                <DateRangePicker
                    range={*range}
                    bounds={bounds}
                    on_change={on_range_change}
                    disabled={accounts.state.active_account.is_none()}
                />
            </header>

            {if let Some(error) = &accounts.state.error {
                html! { <div class="error-banner">{format!("Could not load accounts: {}", error)}</div> }
            } else { html! {} }}

            <section class="balance-history">
                {if history.loading {
                    html! { <div class="loading">{"Loading history..."}</div> }
                } else if let Some(error) = &history.error {
                    html! { <div class="error-banner">{error.clone()}</div> }
                } else {
                    html! {
                        <div class="history-summary">
                            <span class="point-count">{format!("{} balance points", history.points.len())}</span>
                            {if let Some(balance) = latest_balance {
                                html! { <span class="latest-balance">{balance}</span> }
                            } else { html! {} }}
                        </div>
                    }
                }}
            </section>
        </div>
    }
}

fn main() {
    ConsoleLogger::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
