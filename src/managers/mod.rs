// tubemark state managers
// Managers handle stateful operations: the persisted bookmark set and the popup's edit state.

pub mod bookmark_store;
pub mod popup_controller;
