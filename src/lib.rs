pub mod console_interface;
pub mod core;
pub mod level;
pub mod models;
pub mod orientation;
pub mod replay;

#[cfg(test)]
mod test;
