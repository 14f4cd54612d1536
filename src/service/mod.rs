//! Request-to-persistence mapping: validation rules and the fruit service.

mod fruits;
mod validation;
pub use fruits::FruitService;
pub use validation::RequestValidator;
