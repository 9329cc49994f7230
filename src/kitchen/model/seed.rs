use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{error::AppError, kitchen::model::catalog::RecipeCatalog};

pub const SEED_JSON: &str = include_str!("../../../assets/seed.json");

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub ingredients: Vec<String>,
    pub recipes: Vec<SeedRecipe>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    /// 可以是单个字符串，也可以是逐行的字符串数组
    #[serde(deserialize_with = "lines_or_text")]
    pub preparation: String,
}

fn lines_or_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(text) => Ok(text),
        Value::Array(lines) => lines
            .into_iter()
            .map(|line| match line {
                Value::String(s) => Ok(s),
                _ => Err(serde::de::Error::custom("做法的每一行必须是字符串。")),
            })
            .collect::<Result<Vec<String>, D::Error>>()
            .map(|lines| lines.join("\n")),
        Value::Null => Ok(String::new()),
        _ => Err(serde::de::Error::custom("做法不是字符串或字符串数组。")),
    }
}

impl Seed {
    pub fn parse(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| AppError::Seed(e.to_string()))
    }

    /// 内置数据在编译期嵌入，解析失败时退回空数据
    pub fn builtin() -> Self {
        match Self::parse(SEED_JSON) {
            Ok(seed) => seed,
            Err(err) => {
                log::error!("{}", err.describe());
                Self::default()
            }
        }
    }

    /// 通过目录的校验接口逐条写入，被拒绝的条目记录警告后跳过
    pub fn apply(&self, catalog: &mut RecipeCatalog) -> usize {
        let mut accepted = 0;
        for name in &self.ingredients {
            match catalog.add_ingredient(name) {
                Ok(_) => accepted += 1,
                Err(err) => log::warn!("跳过初始食材 {:?}: {:?}", name, err),
            }
        }
        for recipe in &self.recipes {
            match catalog.add_recipe(&recipe.name, recipe.ingredients.as_slice(), &recipe.preparation) {
                Ok(_) => accepted += 1,
                Err(err) => log::warn!("跳过初始菜谱 {:?}: {:?}", recipe.name, err),
            }
        }
        log::debug!(
            "载入初始数据: {} 种食材, {} 个菜谱",
            catalog.ingredient_count(),
            catalog.recipe_count()
        );
        accepted
    }
}

#[test]
fn test_builtin_seed() {
    let seed = Seed::parse(SEED_JSON).unwrap();
    assert_eq!(seed.ingredients.len(), 8);
    assert_eq!(seed.recipes.len(), 4);
    assert!(seed.recipes[0].preparation.starts_with("1. Cocinar el arroz"));
    assert_eq!(seed.recipes[0].preparation.lines().count(), 4);

    let mut catalog = RecipeCatalog::new();
    assert_eq!(seed.apply(&mut catalog), 12);
    let names = catalog
        .ingredients()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["Lechuga", "Arroz", "Tomate", "Huevo", "Pollo", "Queso", "Fideo largo", "Ajo"]
    );
}

#[test]
fn test_seed_rejects_invalid_entries() {
    let seed = Seed::parse(
        r#"{
            "ingredients": ["Sal", "sal", "  "],
            "recipes": [
                { "name": "Vacía", "ingredients": [], "preparation": "nada" },
                { "name": "Salada", "ingredients": ["Sal"], "preparation": "  salar  " }
            ]
        }"#,
    )
    .unwrap();
    let mut catalog = RecipeCatalog::new();
    assert_eq!(seed.apply(&mut catalog), 2);
    assert_eq!(catalog.ingredient_count(), 1);
    assert_eq!(catalog.list_recipes()[0].preparation, "salar");
}

#[test]
fn test_seed_malformed() {
    assert!(matches!(Seed::parse("{ \"recipes\": 3 }"), Err(AppError::Seed(_))));
    assert!(matches!(
        Seed::parse(r#"{ "recipes": [{ "name": "x", "preparation": 5 }] }"#),
        Err(AppError::Seed(_))
    ));
}
