use crate::{
    concept::Subview,
    kitchen::{
        editor::{
            add_ingredient::add_ingredient_view,
            create::create_view,
            detail::detail_view,
            pantry::pantry_view,
            results::results_view,
            session::{Session, ViewRoute},
        },
        model::catalog::RecipeCatalog,
    },
    toast,
};

/// 食谱应用的唯一视图：持有目录与会话状态，按路由分发到各个界面
#[derive(Debug, Default)]
pub struct RecetarioView {
    pub catalog: RecipeCatalog,
    pub session: Session,
}

impl RecetarioView {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self {
            catalog,
            session: Session::default(),
        }
    }
}

impl Subview for RecetarioView {
    fn view(&mut self, ui: &mut egui::Ui) {
        let session = &mut self.session;
        let catalog = &self.catalog;
        let action = match session.route {
            ViewRoute::Main => pantry_view(ui, session, catalog),
            ViewRoute::Results => results_view(ui, session),
            ViewRoute::Detail => detail_view(ui, session.open_recipe.as_ref()),
            ViewRoute::Create => create_view(ui, &mut session.recipe_draft, catalog),
            ViewRoute::AddIngredient => add_ingredient_view(ui, &mut session.ingredient_draft),
        };
        if let Some(action) = action
            && let Some(feedback) = self.session.apply(action, &mut self.catalog)
        {
            toast::feedback(&feedback);
        }
    }

    fn name(&self) -> String {
        "Recetario".to_string()
    }

    fn description(&self) -> String {
        format!(
            "{} ingredientes, {} recetas",
            self.catalog.ingredient_count(),
            self.catalog.recipe_count()
        )
    }
}
