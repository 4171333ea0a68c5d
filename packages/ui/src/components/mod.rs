//! Presentational components. Each one draws a view model from
//! [`crate::render`] or edits a form signal owned by its page; none of them
//! talk to the API.

mod add_task_dialog;
mod add_user_dialog;
mod form_message;
mod modal_overlay;
mod profile_card;
mod task_list;
mod user_list;

pub use add_task_dialog::AddTaskDialog;
pub use add_user_dialog::AddUserDialog;
pub use form_message::{FormMessage, MessageTone};
pub use modal_overlay::ModalOverlay;
pub use profile_card::ProfileCard;
pub use task_list::TaskList;
pub use user_list::UserList;
