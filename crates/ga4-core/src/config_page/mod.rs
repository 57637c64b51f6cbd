//! Config page state machine.
//!
//! Sections emit [`ConfigEvent`]s, [`ConfigState::apply`] reduces them, and
//! [`compute_save_result`] turns a state snapshot into the host's save answer.

mod event;
mod save;
mod state;
mod view;


pub use event::{ConfigEvent, KeyFileText, RequestToken};
pub use save::{
    compute_save_result, target_state_for, EditorInterfaceTarget, SaveOutcome, SaveResult,
    SidebarPlacement, TargetState, SIDEBAR_POSITION,
};
pub use state::{AccountSummariesState, ConfigPhase, ConfigState, KeyFileCheck};
pub use view::{
    key_file_message, ApiAccessCard, DisplayCardModel, DisplayRow, ServiceAccountStatus,
    API_ACCESS_DESCRIPTION, API_ACCESS_HEADING, KEY_FILE_HELP, KEY_FILE_LABEL,
    SERVICE_ACCOUNT_HEADING,
};
