/// View helpers
///
/// Pure functions from state to widgets; all state lives in the app
/// and the session, the views only dispatch messages back.

pub mod ban_panel;
pub mod record_panel;
