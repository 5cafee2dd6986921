pub mod config;
pub mod console_interface;
pub mod core;
pub mod level_loader;
pub mod models;

#[cfg(test)]
mod test;
