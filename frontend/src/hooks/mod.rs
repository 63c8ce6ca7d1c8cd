pub mod use_account_history;
pub mod use_active_account;
