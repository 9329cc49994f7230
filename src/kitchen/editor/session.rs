use indexmap::IndexSet;

use crate::{
    error::CatalogError,
    kitchen::model::{catalog::RecipeCatalog, recipe::Recipe},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewRoute {
    #[default]
    Main,
    Results,
    Detail,
    Create,
    AddIngredient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// 搜索前没有选择任何食材
    EmptySelection,
    RecipeRejected(CatalogError),
    IngredientRejected(CatalogError),
    RecipeCreated(String),
    IngredientAdded(String),
}

impl Feedback {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Feedback::EmptySelection
                | Feedback::RecipeRejected(_)
                | Feedback::IngredientRejected(_)
        )
    }
}

/// 界面产生的用户操作，每帧最多一个
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleSelection(String),
    Search,
    Open(Recipe),
    Back,
    StartCreate,
    ToggleDraftIngredient(String),
    SaveRecipe,
    StartAddIngredient,
    SubmitIngredient,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    /// 勾选顺序即保存顺序
    pub ingredients: IndexSet<String>,
    pub preparation: String,
}

impl RecipeDraft {
    pub fn clear(&mut self) {
        *self = RecipeDraft::default();
    }
}

/// 界面会话状态，由界面层持有；目录只通过参数传入
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub route: ViewRoute,
    pub selection: IndexSet<String>,
    pub matches: Vec<Recipe>,
    pub open_recipe: Option<Recipe>,
    pub recipe_draft: RecipeDraft,
    pub ingredient_draft: String,
}

fn toggle(set: &mut IndexSet<String>, name: &str) {
    if !set.shift_remove(name) {
        set.insert(name.to_string());
    }
}

impl Session {
    pub fn apply(&mut self, action: Action, catalog: &mut RecipeCatalog) -> Option<Feedback> {
        match action {
            Action::ToggleSelection(name) => self.toggle_selection(&name),
            Action::Search => return self.search(catalog),
            Action::Open(recipe) => self.open(recipe),
            Action::Back => self.back(),
            Action::StartCreate => self.start_create(),
            Action::ToggleDraftIngredient(name) => self.toggle_draft_ingredient(&name),
            Action::SaveRecipe => return Some(self.save_recipe(catalog)),
            Action::StartAddIngredient => self.start_add_ingredient(),
            Action::SubmitIngredient => return Some(self.add_ingredient(catalog)),
        }
        None
    }

    pub fn toggle_selection(&mut self, name: &str) {
        toggle(&mut self.selection, name);
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.contains(name)
    }

    pub fn search(&mut self, catalog: &RecipeCatalog) -> Option<Feedback> {
        if self.selection.is_empty() {
            return Some(Feedback::EmptySelection);
        }
        self.matches = catalog.find_matches(&self.selection);
        log::info!(
            "搜索 {} 种食材，找到 {} 个菜谱",
            self.selection.len(),
            self.matches.len()
        );
        self.route = ViewRoute::Results;
        None
    }

    pub fn open(&mut self, recipe: Recipe) {
        log::debug!("打开菜谱 {} ({})", recipe.name, recipe.id);
        self.open_recipe = Some(recipe);
        self.route = ViewRoute::Detail;
    }

    pub fn back(&mut self) {
        self.route = match self.route {
            ViewRoute::Main | ViewRoute::Results | ViewRoute::AddIngredient => ViewRoute::Main,
            ViewRoute::Detail | ViewRoute::Create => ViewRoute::Results,
        };
    }

    pub fn start_create(&mut self) {
        self.route = ViewRoute::Create;
    }

    pub fn start_add_ingredient(&mut self) {
        self.route = ViewRoute::AddIngredient;
    }

    pub fn toggle_draft_ingredient(&mut self, name: &str) {
        toggle(&mut self.recipe_draft.ingredients, name);
    }

    /// 校验失败时保留草稿，成功后清空草稿并回到主界面
    pub fn save_recipe(&mut self, catalog: &mut RecipeCatalog) -> Feedback {
        let draft = &self.recipe_draft;
        let ingredients = draft.ingredients.iter().cloned().collect::<Vec<String>>();
        match catalog.add_recipe(&draft.name, ingredients.as_slice(), &draft.preparation) {
            Ok(recipe) => {
                log::info!("新建菜谱 {} ({})", recipe.name, recipe.id);
                self.recipe_draft.clear();
                self.route = ViewRoute::Main;
                Feedback::RecipeCreated(recipe.name)
            }
            Err(err) => {
                log::debug!("菜谱校验失败: {:?}", err);
                Feedback::RecipeRejected(err)
            }
        }
    }

    pub fn add_ingredient(&mut self, catalog: &mut RecipeCatalog) -> Feedback {
        match catalog.add_ingredient(&self.ingredient_draft) {
            Ok(ingredient) => {
                log::info!("新增食材 {} ({})", ingredient.name, ingredient.id);
                self.ingredient_draft.clear();
                self.route = ViewRoute::Main;
                Feedback::IngredientAdded(ingredient.name)
            }
            Err(err) => {
                log::debug!("食材校验失败: {:?}", err);
                Feedback::IngredientRejected(err)
            }
        }
    }
}

#[test]
fn test_search_requires_selection() {
    let catalog = RecipeCatalog::seeded();
    let mut session = Session::default();
    assert_eq!(session.search(&catalog), Some(Feedback::EmptySelection));
    assert_eq!(session.route, ViewRoute::Main);
    assert!(session.matches.is_empty());
}

#[test]
fn test_search_and_open() {
    let catalog = RecipeCatalog::seeded();
    let mut session = Session::default();
    session.toggle_selection("Arroz");
    session.toggle_selection("Huevo");
    session.toggle_selection("Queso");
    session.toggle_selection("Queso");
    assert!(!session.is_selected("Queso"));
    assert_eq!(session.search(&catalog), None);
    assert_eq!(session.route, ViewRoute::Results);
    assert_eq!(session.matches.len(), 3);

    let first = session.matches[0].clone();
    session.open(first.clone());
    assert_eq!(session.route, ViewRoute::Detail);
    assert_eq!(session.open_recipe, Some(first));

    session.back();
    assert_eq!(session.route, ViewRoute::Results);
    session.back();
    assert_eq!(session.route, ViewRoute::Main);
    session.back();
    assert_eq!(session.route, ViewRoute::Main);
}

#[test]
fn test_save_recipe_keeps_draft_on_error() {
    let mut catalog = RecipeCatalog::seeded();
    let mut session = Session::default();
    session.start_create();
    session.recipe_draft.name = "Ensalada".to_string();
    session.recipe_draft.preparation = "mezclar todo".to_string();
    assert_eq!(
        session.save_recipe(&mut catalog),
        Feedback::RecipeRejected(CatalogError::EmptyIngredientList)
    );
    assert_eq!(session.route, ViewRoute::Create);
    assert_eq!(session.recipe_draft.name, "Ensalada");

    session.toggle_draft_ingredient("Lechuga");
    session.toggle_draft_ingredient("Tomate");
    let feedback = session.save_recipe(&mut catalog);
    assert_eq!(feedback, Feedback::RecipeCreated("Ensalada".to_string()));
    assert!(!feedback.is_error());
    assert_eq!(session.route, ViewRoute::Main);
    assert_eq!(session.recipe_draft, RecipeDraft::default());

    let saved = catalog.list_recipes().pop().unwrap();
    assert_eq!(saved.ingredients, vec!["Lechuga", "Tomate"]);
}

#[test]
fn test_add_ingredient_flow() {
    let mut catalog = RecipeCatalog::seeded();
    let mut session = Session::default();
    session.start_add_ingredient();
    session.ingredient_draft = "lechuga".to_string();
    assert_eq!(
        session.add_ingredient(&mut catalog),
        Feedback::IngredientRejected(CatalogError::DuplicateName)
    );
    assert_eq!(session.route, ViewRoute::AddIngredient);

    session.ingredient_draft = " Cebolla ".to_string();
    assert_eq!(
        session.add_ingredient(&mut catalog),
        Feedback::IngredientAdded("Cebolla".to_string())
    );
    assert!(session.ingredient_draft.is_empty());
    assert_eq!(session.route, ViewRoute::Main);
}

#[test]
fn test_apply_actions() {
    let mut catalog = RecipeCatalog::seeded();
    let mut session = Session::default();
    let actions = [
        Action::ToggleSelection("Arroz".to_string()),
        Action::ToggleSelection("Ajo".to_string()),
        Action::ToggleSelection("Tomate".to_string()),
        Action::Search,
    ];
    for action in actions {
        assert_eq!(session.apply(action, &mut catalog), None);
    }
    assert_eq!(session.route, ViewRoute::Results);
    assert!(session.matches.is_empty());

    session.apply(Action::StartCreate, &mut catalog);
    assert_eq!(session.route, ViewRoute::Create);
    session.recipe_draft.name = "  Sopa  ".to_string();
    session.recipe_draft.preparation = "  hervir  ".to_string();
    session.apply(Action::ToggleDraftIngredient("Tomate".to_string()), &mut catalog);
    let feedback = session.apply(Action::SaveRecipe, &mut catalog);
    assert_eq!(feedback, Some(Feedback::RecipeCreated("Sopa".to_string())));

    // 新菜谱立即参与匹配
    session.selection.clear();
    session.apply(Action::ToggleSelection("Tomate".to_string()), &mut catalog);
    session.apply(Action::Search, &mut catalog);
    assert_eq!(session.matches.len(), 1);
    assert_eq!(session.matches[0].preparation, "hervir");
}
