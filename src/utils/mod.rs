pub mod dom;
pub mod html;
pub mod leptos_owner;
pub mod panic_hook;
