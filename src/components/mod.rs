mod action_list;
mod confirm_dialog;
mod header;
mod result_dialog;

pub use action_list::ActionList;
pub use confirm_dialog::ConfirmDialog;
pub use header::Header;
pub use result_dialog::ResultDialog;
