pub mod load_status;
pub mod sort_selection;
