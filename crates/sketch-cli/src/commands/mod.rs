pub mod convert;
pub mod dump;
pub mod state_file;
pub mod trace;
pub mod view;
