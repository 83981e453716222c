pub mod confirm_dialog;
pub mod pagination_controls;
pub mod ref_combobox;
pub mod search_box;
pub mod sort;
