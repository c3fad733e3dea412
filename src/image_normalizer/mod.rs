pub mod normalize;
pub mod tensor;
