use yew::prelude::*;
use web_sys::MouseEvent;
use shared::AccountSummary;
use dashboard_domain::labels::format_short_date;

#[derive(Properties, PartialEq)]
pub struct AccountSelectorProps {
    pub accounts: Vec<AccountSummary>,
    pub active_account: Option<AccountSummary>,
    pub loading: bool,
    pub on_select: Callback<String>,
}

/// Dropdown listing the accounts the user can view, with the span of data each holds
#[function_component(AccountSelector)]
pub fn account_selector(props: &AccountSelectorProps) -> Html {
    let is_open = use_state(|| false);

    let toggle_menu = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    // Close menu when clicking outside
    let on_backdrop_click = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            is_open.set(false);
        })
    };

    let on_menu_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let button_text = props
        .active_account
        .as_ref()
        .map(|account| account.name.clone())
        .unwrap_or_else(|| "Select account".to_string());

    html! {
        <div class="account-selector">
            <button
                class="account-selector-button"
                onclick={toggle_menu}
                aria-label="Select account"
                disabled={props.loading}
            >
                {if props.loading {
                    html! { <div class="account-selector-spinner"></div> }
                } else {
                    html! { <span class="account-selector-name">{button_text}</span> }
                }}
            </button>

            if *is_open {
                <>
                    <div class="account-selector-backdrop" onclick={on_backdrop_click}></div>
                    <div class="account-selector-dropdown" onclick={on_menu_click}>
                        {
                            if props.accounts.is_empty() {
                                html! {
                                    <div class="account-selector-item no-accounts">
                                        <span>{"No accounts found"}</span>
                                    </div>
                                }
                            } else {
                                props.accounts.iter().map(|account| {
                                    let is_active = props.active_account.as_ref()
                                        .map(|active| active.id == account.id)
                                        .unwrap_or(false);

                                    let on_click = {
                                        let on_select = props.on_select.clone();
                                        let is_open = is_open.clone();
                                        let account_id = account.id.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            on_select.emit(account_id.clone());
                                            is_open.set(false);
                                        })
                                    };

                                    let data_span = match (account.first_data_date, account.last_data_date) {
                                        (Some(first), Some(last)) => {
                                            format!("{} – {}", format_short_date(first), format_short_date(last))
                                        }
                                        _ => "No history yet".to_string(),
                                    };

                                    html! {
                                        <div
                                            class={classes!("account-selector-item", is_active.then(|| "active"))}
                                            onclick={on_click}
                                        >
                                            <span class="account-name">{account.name.clone()}</span>
                                            <span class="account-data-span">{data_span}</span>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        }
                    </div>
                </>
            }
        </div>
    }
}
