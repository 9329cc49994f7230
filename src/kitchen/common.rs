use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// 单调递增的编号生成器，编号从 1 开始，永不复用
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator { next: 1 }
    }
}

impl IdGenerator {
    pub fn next_raw(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn next_id<I: From<u64>>(&mut self) -> I {
        I::from(self.next_raw())
    }
}

macro_rules! opaque_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                $name(raw)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

opaque_id!(IngredientId);
opaque_id!(RecipeId);

/// 去掉首尾空白；全为空白时返回 None
pub fn trimmed_non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.to_lowercase() == b.to_lowercase()
}

#[test]
fn test_id_generator_monotonic() {
    let mut generator = IdGenerator::default();
    let a: IngredientId = generator.next_id();
    let b: IngredientId = generator.next_id();
    let c: IngredientId = generator.next_id();
    assert!(a < b && b < c);
    assert_eq!(a.to_string(), "1");
    assert_eq!(c.to_string(), "3");
}

#[test]
fn test_trimmed_non_blank() {
    assert_eq!(trimmed_non_blank("  Sopa  "), Some("Sopa"));
    assert_eq!(trimmed_non_blank(" \t\n "), None);
    assert_eq!(trimmed_non_blank(""), None);
}

#[test]
fn test_eq_ignore_case() {
    assert!(eq_ignore_case("Lechuga", "lechuga"));
    assert!(eq_ignore_case("ÑOQUI", "ñoqui"));
    assert!(!eq_ignore_case("Ajo", "Ajos"));
}
