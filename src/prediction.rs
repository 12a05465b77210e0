pub mod category;
pub mod display_model;
pub mod ranking;
#[cfg(test)]
mod tests;
