use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::kitchen::common::RecipeId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,

    pub name: String,

    /// 所需食材名称，保持录入顺序，允许重复
    /// 按名称匹配，不要求在食材目录中存在
    pub ingredients: Vec<String>,

    /// 做法说明
    pub preparation: String,
}

impl Recipe {
    /// 所选食材是否全部包含在本菜谱的食材中（区分大小写）
    pub fn covers<'a, I>(&self, selected: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        let required = self
            .ingredients
            .iter()
            .map(String::as_str)
            .collect::<HashSet<&str>>();
        selected
            .into_iter()
            .all(|name| required.contains(name.as_str()))
    }
}

#[test]
fn test_recipe_covers() {
    let recipe = Recipe {
        id: RecipeId::from(1),
        name: "Majadito".to_string(),
        ingredients: vec!["Arroz".into(), "Huevo".into(), "Pollo".into()],
        preparation: "Mezclar".to_string(),
    };
    let selected = ["Arroz".to_string(), "Pollo".to_string()];
    assert!(recipe.covers(&selected));
    let selected = ["arroz".to_string()];
    assert!(!recipe.covers(&selected));
    let selected = ["Arroz".to_string(), "Ajo".to_string()];
    assert!(!recipe.covers(&selected));
    assert!(recipe.covers(&[] as &[String]));
}
