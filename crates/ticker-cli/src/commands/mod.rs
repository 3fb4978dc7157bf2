pub mod align;
pub mod config;
pub mod run;
pub mod trace;
