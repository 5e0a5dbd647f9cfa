pub mod auth;
pub mod calendar;
pub mod config;
pub mod filter;
pub mod flash;
pub mod state;
pub mod store;
pub mod template;
pub mod tournaments;
pub mod util_resp;
pub mod widgets;

#[cfg(test)]
mod test;
