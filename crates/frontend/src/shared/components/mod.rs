pub mod snackbar;
pub mod yes_no_dialog;
