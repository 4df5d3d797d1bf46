pub mod classifier;
pub mod engine;
pub mod lexicalizer;
pub mod morphologizer;
pub mod preprocess;
pub mod realizer;
pub mod report;
pub mod tables;

pub use crate::domain::model::{
    ConjunctionStyle, Conversion, DigitSequence, GeneratorOptions, Placement, PreparedNumeral,
    Sign,
};
pub use crate::domain::ports::TextGenerator;
pub use crate::utils::error::Result;
