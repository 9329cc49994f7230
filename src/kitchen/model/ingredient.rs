use serde::{Deserialize, Serialize};

use crate::kitchen::common::IngredientId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    /// 显示名称，已去除首尾空白
    pub name: String,
}
