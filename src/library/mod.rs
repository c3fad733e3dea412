pub mod logger;
pub mod state_machine;

#[cfg(test)]
pub mod test_images;
