use yew::prelude::*;
use shared::AccountSummary;
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct ActiveAccountState {
    pub accounts: Vec<AccountSummary>,
    pub active_account: Option<AccountSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseActiveAccountResult {
    pub state: ActiveAccountState,
    pub actions: UseActiveAccountActions,
}

#[derive(Clone, PartialEq)]
pub struct UseActiveAccountActions {
    pub refresh_accounts: Callback<()>,
    pub set_active_account: Callback<String>,
}

#[hook]
pub fn use_active_account(api_client: &ApiClient) -> UseActiveAccountResult {
    let accounts = use_state(Vec::<AccountSummary>::new);
    let active_id = use_state(|| Option::<String>::None);
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let refresh_accounts = {
        let api_client = api_client.clone();
        let accounts = accounts.clone();
        let active_id = active_id.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let accounts = accounts.clone();
            let active_id = active_id.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_accounts().await {
                    Ok(response) => {
                        // Keep the current account if it still exists, else take the first
                        let keep = (*active_id)
                            .as_ref()
                            .filter(|id| response.accounts.iter().any(|a| &a.id == *id))
                            .cloned();
                        active_id.set(keep.or_else(|| response.accounts.first().map(|a| a.id.clone())));
                        log::info!("Loaded {} accounts", response.accounts.len());
                        accounts.set(response.accounts);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("Failed to load accounts: {:#}", e);
                        error.set(Some(e.to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    let set_active_account = {
        let active_id = active_id.clone();

        use_callback(accounts.clone(), move |account_id: String, accounts| {
            if accounts.iter().any(|a| a.id == account_id) {
                active_id.set(Some(account_id));
            } else {
                log::warn!("Unknown account {}", account_id);
            }
        })
    };

    // Load accounts on mount
    use_effect_with((), {
        let refresh_accounts = refresh_accounts.clone();
        move |_| {
            refresh_accounts.emit(());
            || ()
        }
    });

    let active_account = (*active_id)
        .as_ref()
        .and_then(|id| accounts.iter().find(|a| &a.id == id))
        .cloned();

    let state = ActiveAccountState {
        accounts: (*accounts).clone(),
        active_account,
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseActiveAccountActions {
        refresh_accounts,
        set_active_account,
    };

    UseActiveAccountResult { state, actions }
}
