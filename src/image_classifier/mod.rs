pub mod impl_fake;
pub mod impl_tract_onnx;
pub mod interface;

#[cfg(test)]
mod tests;
