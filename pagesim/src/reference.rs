//! A reference string: a sequência completa de acessos a páginas.
//!
//! A simulação precisa dela inteira antes de começar (o Optimal olha para o
//! futuro), então isso é só um `Vec` imutável com alguns utilitários.

use std::{collections::HashSet, fmt, str::FromStr};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{Result, SimError};

pub type Page = usize;

pub const DEFAULT_LENGTH: usize = 20;
pub const DEFAULT_RANGE: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceString {
    pages: Vec<Page>,
}

impl ReferenceString {
    pub fn new(pages: Vec<Page>) -> Self {
        ReferenceString { pages }
    }

    pub fn as_slice(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<Page> {
        self.pages.get(step).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Page> + '_ {
        self.pages.iter().copied()
    }

    /// Quantas páginas diferentes aparecem. Com pelo menos esse número de
    /// frames, nenhuma política precisa despejar nada.
    pub fn distinct_count(&self) -> usize {
        self.pages.iter().collect::<HashSet<_>>().len()
    }
}

impl From<Vec<Page>> for ReferenceString {
    fn from(pages: Vec<Page>) -> Self {
        ReferenceString::new(pages)
    }
}

impl fmt::Display for ReferenceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, page) in self.pages.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page)?;
        }
        write!(f, "]")
    }
}

/// Aceita `1,2,3`, `1 2 3`, `[1, 2, 3]` e misturas disso.
impl FromStr for ReferenceString {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');

        let pages = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<Page>()
                    .map_err(|_| SimError::InvalidPage(token.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ReferenceString { pages })
    }
}

/// Fonte de reference strings.
pub trait ReferenceGenerator {
    /// `length` páginas, cada uma em `[0, range)`.
    fn generate(&mut self, length: usize, range: usize) -> Result<ReferenceString>;
}

/// Amostragem uniforme e independente de cada posição.
pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    pub fn new() -> Self {
        RandomGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// Mesma semente, mesma sequência. Útil para repetir uma execução.
    pub fn with_seed(seed: u64) -> Self {
        RandomGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::with_seed(s),
            None => Self::new(),
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceGenerator for RandomGenerator {
    fn generate(&mut self, length: usize, range: usize) -> Result<ReferenceString> {
        if range == 0 {
            return Err(SimError::RangeInvalid);
        }

        let pages = (0..length).map(|_| self.rng.gen_range(0..range)).collect();

        Ok(ReferenceString { pages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_separators() {
        let reference: ReferenceString = "[1, 2 3,4]".parse().unwrap();

        assert_eq!(reference.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn rejects_negative_and_garbage_tokens() {
        assert!(matches!(
            "1,-2,3".parse::<ReferenceString>(),
            Err(SimError::InvalidPage(token)) if token == "-2"
        ));
        assert!(matches!(
            "1,x".parse::<ReferenceString>(),
            Err(SimError::InvalidPage(token)) if token == "x"
        ));
    }

    #[test]
    fn empty_text_is_empty_reference() {
        let reference: ReferenceString = "  ".parse().unwrap();

        assert!(reference.is_empty());
    }

    #[test]
    fn displays_like_a_list() {
        let reference = ReferenceString::from(vec![4, 0, 9]);

        assert_eq!(reference.to_string(), "[4, 0, 9]");
        assert_eq!(ReferenceString::default().to_string(), "[]");
    }

    #[test]
    fn counts_distinct_pages() {
        let reference = ReferenceString::from(vec![1, 2, 1, 3, 2, 1]);

        assert_eq!(reference.distinct_count(), 3);
    }

    #[test]
    fn generator_respects_length_and_range() {
        let mut generator = RandomGenerator::with_seed(42);
        let reference = generator.generate(DEFAULT_LENGTH, DEFAULT_RANGE).unwrap();

        assert_eq!(reference.len(), DEFAULT_LENGTH);
        assert!(reference.iter().all(|page| page < DEFAULT_RANGE));
    }

    #[test]
    fn generator_is_reproducible_with_seed() {
        let a = RandomGenerator::with_seed(7).generate(50, 10).unwrap();
        let b = RandomGenerator::with_seed(7).generate(50, 10).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn generator_rejects_empty_range() {
        let mut generator = RandomGenerator::with_seed(1);

        assert!(matches!(generator.generate(5, 0), Err(SimError::RangeInvalid)));
    }

    #[test]
    fn range_of_one_is_constant() {
        let reference = RandomGenerator::new().generate(10, 1).unwrap();

        assert!(reference.iter().all(|page| page == 0));
    }
}
