use console::Color;
use std::fmt;

pub const WEAK_ENTROPY: f64 = 28.0;
pub const GOOD_ENTROPY: f64 = 36.0;
pub const STRONG_ENTROPY: f64 = 60.0;
pub const UNCRACKABLE_ENTROPY: f64 = 128.0;

/// Bits of entropy in a password of `length` symbols drawn uniformly from
/// `pool_size` characters.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    VeryWeak,
    Weak,
    Good,
    Strong,
    Uncrackable,
}

impl Strength {
    /// Lower bounds are inclusive.
    pub fn classify(entropy: f64) -> Self {
        if entropy >= UNCRACKABLE_ENTROPY {
            Self::Uncrackable
        } else if entropy >= STRONG_ENTROPY {
            Self::Strong
        } else if entropy >= GOOD_ENTROPY {
            Self::Good
        } else if entropy >= WEAK_ENTROPY {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Good => "Good",
            Self::Strong => "Strong",
            Self::Uncrackable => "Uncrackable",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Self::VeryWeak => "🔴",
            Self::Weak => "🟠",
            Self::Good => "🟡",
            Self::Strong => "🟢",
            Self::Uncrackable => "🛡",
        }
    }

    pub fn color(self) -> StrengthColor {
        match self {
            Self::VeryWeak => StrengthColor::Red,
            Self::Weak => StrengthColor::Orange,
            Self::Good => StrengthColor::Yellow,
            Self::Strong => StrengthColor::Green,
            Self::Uncrackable => StrengthColor::Blue,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display color attached to a [`Strength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl StrengthColor {
    pub fn hex(self) -> &'static str {
        match self {
            Self::Red => "#E53935",
            Self::Orange => "#FB8C00",
            Self::Yellow => "#FDD835",
            Self::Green => "#2CC985",
            Self::Blue => "#3B8ED0",
        }
    }

    pub fn terminal(self) -> Color {
        match self {
            Self::Red => Color::Red,
            Self::Orange => Color::Color256(208),
            Self::Yellow => Color::Yellow,
            Self::Green => Color::Green,
            Self::Blue => Color::Cyan,
        }
    }
}
