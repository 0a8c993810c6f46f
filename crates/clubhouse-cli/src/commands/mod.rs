pub mod common;
pub mod completions;
pub mod courses;
pub mod evidence;
pub mod health;
pub mod request;
pub mod tags;
