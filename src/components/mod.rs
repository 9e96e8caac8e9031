//! UI Components
//!
//! Reusable Leptos components.

mod add_list_form;
mod list_column;
mod list_title;
mod item_card;
mod drop_zone;
mod new_item_form;
mod delete_confirm_button;

pub use add_list_form::AddListForm;
pub use list_column::ListColumn;
pub use list_title::ListTitle;
pub use item_card::ItemCard;
pub use drop_zone::DropZone;
pub use new_item_form::NewItemForm;
pub use delete_confirm_button::DeleteConfirmButton;
