use indexmap::IndexMap;

use crate::{
    error::CatalogError,
    kitchen::{
        common::{IdGenerator, IngredientId, RecipeId, eq_ignore_case, trimmed_non_blank},
        model::{ingredient::Ingredient, recipe::Recipe, seed::Seed},
    },
};

/// 食材与菜谱目录
///
/// 两个集合都只能通过本类型的方法增加，按插入顺序保存。
/// 所有操作都是先校验、再修改，校验失败时不会留下任何改动。
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    ingredients: IndexMap<IngredientId, Ingredient>,
    recipes: IndexMap<RecipeId, Recipe>,
    ingredient_ids: IdGenerator,
    recipe_ids: IdGenerator,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用内置初始数据填充的目录
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        Seed::builtin().apply(&mut catalog);
        catalog
    }

    pub fn add_ingredient(&mut self, name: &str) -> Result<Ingredient, CatalogError> {
        let name = trimmed_non_blank(name).ok_or(CatalogError::BlankName)?;
        if self.contains_ingredient_name(name) {
            return Err(CatalogError::DuplicateName);
        }
        let ingredient = Ingredient {
            id: self.ingredient_ids.next_id(),
            name: name.to_string(),
        };
        self.ingredients.insert(ingredient.id, ingredient.clone());
        Ok(ingredient)
    }

    /// 校验顺序：名称、食材列表、做法，遇到第一个错误即返回
    pub fn add_recipe<S: AsRef<str>>(
        &mut self,
        name: &str,
        ingredient_names: &[S],
        preparation: &str,
    ) -> Result<Recipe, CatalogError> {
        let name = trimmed_non_blank(name).ok_or(CatalogError::BlankName)?;
        if ingredient_names.is_empty() {
            return Err(CatalogError::EmptyIngredientList);
        }
        let preparation = trimmed_non_blank(preparation).ok_or(CatalogError::BlankPreparation)?;
        let recipe = Recipe {
            id: self.recipe_ids.next_id(),
            name: name.to_string(),
            ingredients: ingredient_names
                .iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            preparation: preparation.to_string(),
        };
        self.recipes.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    /// 返回食材集合包含全部所选名称的菜谱，保持插入顺序。
    /// 未选择任何食材时返回空列表，是否提示由调用方决定。
    pub fn find_matches<'a, I>(&self, selected: I) -> Vec<Recipe>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let selected = selected.into_iter().collect::<Vec<&String>>();
        if selected.is_empty() {
            return Vec::new();
        }
        self.recipes
            .values()
            .filter(|recipe| recipe.covers(selected.iter().copied()))
            .cloned()
            .collect()
    }

    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn contains_ingredient_name(&self, name: &str) -> bool {
        let name = name.trim();
        self.ingredients
            .values()
            .any(|ingredient| eq_ignore_case(&ingredient.name, name))
    }
}

/// 快照与按编号查询；界面直接遍历 `ingredients()`，这些接口供共享目录与测试使用
#[cfg_attr(not(test), allow(dead_code))]
impl RecipeCatalog {
    pub fn list_ingredients(&self) -> Vec<Ingredient> {
        self.ingredients.values().cloned().collect()
    }

    pub fn list_recipes(&self) -> Vec<Recipe> {
        self.recipes.values().cloned().collect()
    }

    pub fn ingredient(&self, id: IngredientId) -> Option<&Ingredient> {
        self.ingredients.get(&id)
    }

    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.get(&id)
    }
}

#[cfg(test)]
mod catalog_tests {
    use std::collections::HashSet;

    use super::*;

    fn names(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.name.as_str()).collect()
    }

    fn selection(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn match_rice_and_egg() {
        let catalog = RecipeCatalog::seeded();
        let matches = catalog.find_matches(&selection(&["Arroz", "Huevo"]));
        assert_eq!(
            names(&matches),
            vec!["Majadito", "Arroz con huevo", "Pollo con arroz y huevo"]
        );
    }

    #[test]
    fn match_nothing_requires_all_four() {
        let catalog = RecipeCatalog::seeded();
        let matches = catalog.find_matches(&selection(&["Arroz", "Huevo", "Pollo", "Ajo"]));
        assert!(matches.is_empty());
    }

    #[test]
    fn empty_selection_yields_no_matches() {
        let catalog = RecipeCatalog::seeded();
        assert!(catalog.find_matches(&selection(&[])).is_empty());
    }

    #[test]
    fn match_is_case_sensitive() {
        let catalog = RecipeCatalog::seeded();
        assert!(catalog.find_matches(&selection(&["arroz"])).is_empty());
        assert_eq!(catalog.find_matches(&selection(&["Arroz"])).len(), 4);
    }

    #[test]
    fn duplicate_ingredient_ignores_case() {
        let mut catalog = RecipeCatalog::seeded();
        assert_eq!(
            catalog.add_ingredient("lechuga"),
            Err(CatalogError::DuplicateName)
        );
        assert_eq!(
            catalog.add_ingredient("  FIDEO LARGO "),
            Err(CatalogError::DuplicateName)
        );
        assert_eq!(catalog.ingredient_count(), 8);
    }

    #[test]
    fn add_ingredient_appends_last() {
        let mut catalog = RecipeCatalog::seeded();
        let onion = catalog.add_ingredient("Cebolla").unwrap();
        assert_eq!(onion.name, "Cebolla");
        let listed = catalog.list_ingredients();
        assert_eq!(listed.last(), Some(&onion));
        assert_eq!(catalog.ingredient(onion.id), Some(&onion));
    }

    #[test]
    fn blank_ingredient_rejected() {
        let mut catalog = RecipeCatalog::new();
        assert_eq!(catalog.add_ingredient("   "), Err(CatalogError::BlankName));
        assert_eq!(catalog.add_ingredient(""), Err(CatalogError::BlankName));
        assert_eq!(catalog.ingredient_count(), 0);
    }

    #[test]
    fn add_ingredient_trims() {
        let mut catalog = RecipeCatalog::new();
        let garlic = catalog.add_ingredient("  Ajo\t").unwrap();
        assert_eq!(garlic.name, "Ajo");
    }

    #[test]
    fn recipe_without_ingredients_rejected() {
        let mut catalog = RecipeCatalog::seeded();
        let empty: [&str; 0] = [];
        assert_eq!(
            catalog.add_recipe("Ensalada", &empty, "mezclar todo"),
            Err(CatalogError::EmptyIngredientList)
        );
        assert_eq!(catalog.recipe_count(), 4);
    }

    #[test]
    fn recipe_validation_order() {
        let mut catalog = RecipeCatalog::new();
        let empty: [&str; 0] = [];
        assert_eq!(
            catalog.add_recipe("", &empty, ""),
            Err(CatalogError::BlankName)
        );
        assert_eq!(
            catalog.add_recipe("Sopa", &empty, ""),
            Err(CatalogError::EmptyIngredientList)
        );
        assert_eq!(
            catalog.add_recipe("Sopa", &["Tomate"], "  "),
            Err(CatalogError::BlankPreparation)
        );
    }

    #[test]
    fn recipe_fields_trimmed() {
        let mut catalog = RecipeCatalog::new();
        let soup = catalog
            .add_recipe("  Sopa  ", &["Tomate"], "  hervir  ")
            .unwrap();
        assert_eq!(soup.name, "Sopa");
        assert_eq!(soup.preparation, "hervir");
        assert_eq!(soup.ingredients, vec!["Tomate".to_string()]);
    }

    #[test]
    fn recipe_keeps_duplicate_and_unknown_ingredients() {
        let mut catalog = RecipeCatalog::new();
        let recipe = catalog
            .add_recipe("Doble", &["Sal", "Pimienta", "Sal"], "sazonar")
            .unwrap();
        assert_eq!(recipe.ingredients, vec!["Sal", "Pimienta", "Sal"]);
        assert_eq!(catalog.ingredient_count(), 0);
    }

    #[test]
    fn ids_never_reused() {
        let mut catalog = RecipeCatalog::seeded();
        let mut seen = HashSet::new();
        for ingredient in catalog.list_ingredients() {
            assert!(seen.insert(ingredient.id.to_string()));
        }
        let _ = catalog.add_ingredient("Arroz");
        let _ = catalog.add_ingredient("");
        let onion = catalog.add_ingredient("Cebolla").unwrap();
        assert!(seen.insert(onion.id.to_string()));
        let before = catalog.list_ingredients();
        catalog.add_ingredient("Papa").unwrap();
        let after = catalog.list_ingredients();
        assert_eq!(&after[..before.len()], &before[..]);

        let mut recipe_ids = HashSet::new();
        for recipe in catalog.list_recipes() {
            assert!(recipe_ids.insert(recipe.id));
        }
        let new_recipe = catalog.add_recipe("Papas", &["Papa"], "freír").unwrap();
        assert!(recipe_ids.insert(new_recipe.id));
    }

    #[test]
    fn names_unique_after_many_adds() {
        let mut catalog = RecipeCatalog::new();
        for name in ["Sal", "sal", "SAL", "Azúcar", "AZÚCAR", " azúcar ", "Miel"] {
            let _ = catalog.add_ingredient(name);
        }
        let listed = catalog.list_ingredients();
        assert_eq!(listed.len(), 3);
        for (i, a) in listed.iter().enumerate() {
            for b in listed.iter().skip(i + 1) {
                assert!(!eq_ignore_case(&a.name, &b.name));
            }
        }
    }

    #[test]
    fn matches_follow_superset_law() {
        let catalog = RecipeCatalog::seeded();
        let pool = ["Arroz", "Huevo", "Pollo", "Ajo", "Queso"];
        // 枚举全部非空子集
        for mask in 1u32..(1 << pool.len()) {
            let chosen = pool
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, name)| *name)
                .collect::<Vec<&str>>();
            let selected = selection(&chosen);
            let matches = catalog.find_matches(&selected);
            for recipe in catalog.list_recipes() {
                let required = recipe.ingredients.iter().cloned().collect::<HashSet<String>>();
                assert_eq!(
                    matches.contains(&recipe),
                    selected.is_subset(&required),
                    "{} / {:?}",
                    recipe.name,
                    chosen
                );
            }
        }
    }

    #[test]
    fn stricter_selection_never_matches_more() {
        let catalog = RecipeCatalog::seeded();
        let pool = ["Arroz", "Huevo", "Pollo", "Ajo", "Queso"];
        let pick = |mask: u32| {
            pool.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, name)| *name)
                .collect::<Vec<&str>>()
        };
        for loose_mask in 1u32..(1 << pool.len()) {
            let loose = catalog.find_matches(&selection(&pick(loose_mask)));
            for strict_mask in 1u32..(1 << pool.len()) {
                // 只比较 loose ⊆ strict 的组合
                if strict_mask & loose_mask != loose_mask {
                    continue;
                }
                let strict = catalog.find_matches(&selection(&pick(strict_mask)));
                assert!(
                    strict.iter().all(|r| loose.contains(r)),
                    "{:?} ⊆ {:?}",
                    pick(loose_mask),
                    pick(strict_mask)
                );
            }
        }

        let strict = catalog.find_matches(&selection(&["Arroz", "Pollo"]));
        assert_eq!(names(&strict), vec![
            "Majadito",
            "Arroz a la valenciana",
            "Pollo con arroz y huevo"
        ]);
    }

    #[test]
    fn lookup_by_id() {
        let mut catalog = RecipeCatalog::seeded();
        let soup = catalog.add_recipe("Sopa", &["Tomate"], "hervir").unwrap();
        assert_eq!(catalog.recipe(soup.id), Some(&soup));
        for recipe in catalog.list_recipes() {
            assert_eq!(catalog.recipe(recipe.id).map(|r| &r.name), Some(&recipe.name));
        }
        let missing = RecipeId::from(999);
        assert_eq!(catalog.recipe(missing), None);
        assert_eq!(catalog.ingredient(IngredientId::from(999)), None);
    }

    #[test]
    fn find_matches_is_repeatable() {
        let catalog = RecipeCatalog::seeded();
        let selected = selection(&["Huevo"]);
        assert_eq!(catalog.find_matches(&selected), catalog.find_matches(&selected));
    }
}
