use std::fmt;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

/// Characters that are easy to confuse with one another on screen.
pub const AMBIGUOUS: &str = "1lI|0O";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterCategory {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterCategory {
    /// Every category, in pool order.
    pub const ALL: [Self; 4] = [
        Self::Lowercase,
        Self::Uppercase,
        Self::Digits,
        Self::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digits => DIGITS,
            Self::Symbols => SYMBOLS,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Lowercase => 0b0001,
            Self::Uppercase => 0b0010,
            Self::Digits => 0b0100,
            Self::Symbols => 0b1000,
        }
    }
}

impl fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Digits => "digits",
            Self::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(c)
}

/// A set of selected categories. Iteration always follows
/// [`CharacterCategory::ALL`] regardless of insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        CharacterCategory::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, category: CharacterCategory) {
        self.0 |= category.bit();
    }

    pub fn remove(&mut self, category: CharacterCategory) {
        self.0 &= !category.bit();
    }

    pub fn set(&mut self, category: CharacterCategory, enabled: bool) {
        if enabled {
            self.insert(category);
        } else {
            self.remove(category);
        }
    }

    pub fn contains(&self, category: CharacterCategory) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterCategory> + '_ {
        CharacterCategory::ALL
            .into_iter()
            .filter(move |category| self.contains(*category))
    }
}

impl FromIterator<CharacterCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = CharacterCategory>>(iter: I) -> Self {
        let mut set = Self::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

/// Returned by [`Pool::validate`] when a pool has nothing to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPool;

/// The effective alphabet a password is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    chars: Vec<char>,
}

impl Pool {
    /// Concatenates the selected categories in pool order, then drops
    /// ambiguous characters if asked to.
    pub fn build(categories: CategorySet, exclude_ambiguous: bool) -> Self {
        let mut chars: Vec<char> = categories
            .iter()
            .flat_map(|category| category.chars().chars())
            .collect();

        if exclude_ambiguous {
            chars.retain(|c| !is_ambiguous(*c));
        }

        Self { chars }
    }

    /// Synthetic pool for exercising the generator. Repeated characters are
    /// kept once, in first-seen order.
    #[cfg(test)]
    pub(crate) fn from_chars(chars: &str, exclude_ambiguous: bool) -> Self {
        let mut pool = Vec::new();
        for c in chars.chars() {
            if !(exclude_ambiguous && is_ambiguous(c)) && !pool.contains(&c) {
                pool.push(c);
            }
        }

        Self { chars: pool }
    }

    pub fn validate(&self) -> Result<(), EmptyPool> {
        if self.chars.is_empty() {
            Err(EmptyPool)
        } else {
            Ok(())
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub(crate) fn get(&self, index: usize) -> char {
        self.chars[index]
    }
}
