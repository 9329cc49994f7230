use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::CatalogError,
    kitchen::model::{catalog::RecipeCatalog, ingredient::Ingredient, recipe::Recipe},
};

/// 可跨线程共享的目录：写操作互斥，读操作之间可以并发。
///
/// 目录的每个操作都先校验后修改，不会留下半完成的状态，
/// 因此锁中毒时直接取回内部数据继续使用。
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<RecipeCatalog>>,
}

impl From<RecipeCatalog> for SharedCatalog {
    fn from(catalog: RecipeCatalog) -> Self {
        SharedCatalog {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }
}

impl SharedCatalog {
    pub fn read(&self) -> RwLockReadGuard<'_, RecipeCatalog> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, RecipeCatalog> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add_ingredient(&self, name: &str) -> Result<Ingredient, CatalogError> {
        self.write().add_ingredient(name)
    }

    pub fn add_recipe<S: AsRef<str>>(
        &self,
        name: &str,
        ingredient_names: &[S],
        preparation: &str,
    ) -> Result<Recipe, CatalogError> {
        self.write().add_recipe(name, ingredient_names, preparation)
    }

    pub fn find_matches<'a, I>(&self, selected: I) -> Vec<Recipe>
    where
        I: IntoIterator<Item = &'a String>,
    {
        self.read().find_matches(selected)
    }

    pub fn list_ingredients(&self) -> Vec<Ingredient> {
        self.read().list_ingredients()
    }

    pub fn list_recipes(&self) -> Vec<Recipe> {
        self.read().list_recipes()
    }
}

#[test]
fn test_shared_catalog_serializes_writers() {
    let shared = SharedCatalog::from(RecipeCatalog::new());
    let handles = (0..8)
        .map(|t| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                let mut added = 0;
                for i in 0..25 {
                    // 每个名称会被两个线程以不同大小写尝试添加
                    let name = if t % 2 == 0 {
                        format!("item-{}-{}", t / 2, i)
                    } else {
                        format!("ITEM-{}-{}", t / 2, i)
                    };
                    if shared.add_ingredient(&name).is_ok() {
                        added += 1;
                    }
                }
                added
            })
        })
        .collect::<Vec<_>>();
    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total, 100);

    let listed = shared.list_ingredients();
    assert_eq!(listed.len(), 100);
    let mut ids = listed.iter().map(|i| i.id).collect::<Vec<_>>();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 100);
}

#[test]
fn test_shared_catalog_reads() {
    let shared = SharedCatalog::from(RecipeCatalog::seeded());
    let selected = ["Arroz".to_string(), "Ajo".to_string()];
    let matches = shared.find_matches(&selected);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Arroz a la valenciana");
    shared
        .add_recipe("Arroz al ajo", &["Arroz", "Ajo"], "Sofreír el ajo y agregar el arroz.")
        .unwrap();
    assert_eq!(shared.find_matches(&selected).len(), 2);
    assert_eq!(shared.read().recipe_count(), 5);
}
