pub mod clear_drive;
pub mod confirm_action;
