pub mod charset;
pub mod generator;
pub mod random;
pub mod strength;

pub use charset::{CategorySet, CharacterCategory, Pool};
pub use generator::{
    FailureReason, Generated, GenerationRequest, GenerationResult, generate, generate_with,
};
pub use random::{IndexSource, SecureRng};
pub use strength::{Strength, StrengthColor, entropy_bits};
