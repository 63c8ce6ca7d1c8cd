use yew::prelude::*;
use shared::{AccountHistoryRequest, BalancePoint, DateRange};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq, Default)]
pub struct AccountHistoryState {
    pub points: Vec<BalancePoint>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Balance history for `account_id` within `range`, refetched whenever either changes
#[hook]
pub fn use_account_history(
    api_client: &ApiClient,
    account_id: Option<String>,
    range: DateRange,
) -> AccountHistoryState {
    let state = use_state(AccountHistoryState::default);

    {
        let api_client = api_client.clone();
        let state = state.clone();

        use_effect_with((account_id, range), move |(account_id, range)| {
            if let Some(account_id) = account_id.clone() {
                let request = AccountHistoryRequest::for_range(account_id, range);
                state.set(AccountHistoryState {
                    loading: true,
                    ..(*state).clone()
                });

                spawn_local(async move {
                    match api_client.get_account_history(&request).await {
                        Ok(response) => {
                            log::debug!(
                                "Fetched {} balance points for {}",
                                response.points.len(),
                                response.account_id
                            );
                            state.set(AccountHistoryState {
                                points: response.points,
                                loading: false,
                                error: None,
                            });
                        }
                        Err(e) => {
                            log::error!("Failed to fetch account history: {:#}", e);
                            state.set(AccountHistoryState {
                                points: Vec::new(),
                                loading: false,
                                error: Some(e.to_string()),
                            });
                        }
                    }
                });
            } else {
                state.set(AccountHistoryState::default());
            }
            || ()
        });
    }

    (*state).clone()
}
