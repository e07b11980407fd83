use crate::charset::{CategorySet, CharacterCategory, Pool};
use crate::random::{IndexSource, SecureRng};
use crate::strength::{Strength, StrengthColor, entropy_bits};
use anyhow::{Context, Result};
use log::debug;
use zeroize::Zeroizing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub categories: CategorySet,
    pub exclude_ambiguous: bool,
}

impl GenerationRequest {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            categories: CategorySet::empty(),
            exclude_ambiguous: false,
        }
    }

    pub fn with(mut self, category: CharacterCategory, enabled: bool) -> Self {
        self.categories.set(category, enabled);
        self
    }

    pub fn exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }

    pub fn pool(&self) -> Pool {
        Pool::build(self.categories, self.exclude_ambiguous)
    }

    pub fn generate(&self) -> Result<GenerationResult> {
        let pool = self.pool();
        if pool.validate().is_err() {
            return Ok(GenerationResult::Failure(FailureReason::EmptyPool));
        }

        let mut rng = SecureRng::new().context("Failed to initialise secure random source")?;
        generate_from_pool(&pool, self.length, &mut rng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    EmptyPool,
}

impl FailureReason {
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyPool => "Select at least one option!",
        }
    }
}

#[derive(Debug)]
pub struct Generated {
    pub password: Zeroizing<String>,
    pub entropy_bits: f64,
    pub strength: Strength,
    pub color: StrengthColor,
    pub pool_size: usize,
}

#[derive(Debug)]
pub enum GenerationResult {
    Success(Generated),
    Failure(FailureReason),
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(self) -> Option<Generated> {
        match self {
            Self::Success(generated) => Some(generated),
            Self::Failure(_) => None,
        }
    }
}

pub fn generate(
    length: usize,
    use_upper: bool,
    use_lower: bool,
    use_digits: bool,
    use_symbols: bool,
    exclude_ambiguous: bool,
) -> Result<GenerationResult> {
    GenerationRequest::new(length)
        .with(CharacterCategory::Lowercase, use_lower)
        .with(CharacterCategory::Uppercase, use_upper)
        .with(CharacterCategory::Digits, use_digits)
        .with(CharacterCategory::Symbols, use_symbols)
        .exclude_ambiguous(exclude_ambiguous)
        .generate()
}

pub fn generate_with<R: IndexSource>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<GenerationResult> {
    generate_from_pool(&request.pool(), request.length, rng)
}

/// Draws `length` characters from `pool` with replacement.
///
/// An empty pool fails before `rng` is touched.
pub(crate) fn generate_from_pool<R: IndexSource>(
    pool: &Pool,
    length: usize,
    rng: &mut R,
) -> Result<GenerationResult> {
    if pool.validate().is_err() {
        debug!("Pool is empty, nothing to draw from");
        return Ok(GenerationResult::Failure(FailureReason::EmptyPool));
    }

    let pool_size = pool.len();
    let mut password = Zeroizing::new(String::with_capacity(length));

    for _ in 0..length {
        let index = rng
            .next_index(pool_size)
            .context("Failed to draw password character")?;
        if index >= pool_size {
            anyhow::bail!("Random source returned index {} for pool of {}", index, pool_size);
        }
        password.push(pool.get(index));
    }

    let entropy_bits = entropy_bits(length, pool_size);
    let strength = Strength::classify(entropy_bits);
    debug!(
        "Generated {} chars from pool of {} ({:.1} bits, {})",
        length, pool_size, entropy_bits, strength
    );

    Ok(GenerationResult::Success(Generated {
        password,
        entropy_bits,
        strength,
        color: strength.color(),
        pool_size,
    }))
}
