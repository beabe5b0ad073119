/// Assembly state, placement and frontier tracking
pub mod assembly;
/// Host loop repeating growth rounds
pub mod driver;
/// Synchronous growth rounds
pub mod growth;
