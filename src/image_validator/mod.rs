pub mod impl_image;
pub mod interface;

#[cfg(test)]
mod tests;
