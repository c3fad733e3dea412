pub trait ImageValidator {
    /// Cheap structural check run before the heavier normalize and inference path.
    /// Never fails: anything that is not a genuine image yields `false`.
    fn validate(&self, bytes: &[u8]) -> bool;
}
