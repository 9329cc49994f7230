use crate::{error::CatalogError, kitchen::editor::session::Feedback};

pub fn join_ingredients<S: AsRef<str>>(ingredients: &[S]) -> String {
    ingredients
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}

/// 超过 max_chars 个字符时截断并追加省略号
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut shortened = text
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect::<String>();
    shortened.push('…');
    shortened
}

fn recipe_error_message(err: CatalogError) -> (&'static str, &'static str) {
    match err {
        CatalogError::BlankName => ("Nombre requerido", "Debes ponerle un nombre a la receta."),
        CatalogError::EmptyIngredientList => (
            "Ingredientes requeridos",
            "Debes seleccionar al menos un ingrediente.",
        ),
        CatalogError::BlankPreparation => {
            ("Preparación requerida", "Debes escribir la preparación.")
        }
        CatalogError::DuplicateName => ("Receta duplicada", "Esta receta ya existe."),
    }
}

fn ingredient_error_message(err: CatalogError) -> (&'static str, &'static str) {
    match err {
        CatalogError::BlankName => (
            "Nombre requerido",
            "Debes escribir el nombre del ingrediente.",
        ),
        CatalogError::DuplicateName => ("Ingrediente duplicado", "Este ingrediente ya existe."),
        CatalogError::EmptyIngredientList | CatalogError::BlankPreparation => {
            ("Ingrediente inválido", "Revisa el nombre del ingrediente.")
        }
    }
}

/// 返回 (标题, 描述)，由提示框展示
pub fn feedback_message(feedback: &Feedback) -> (String, String) {
    match feedback {
        Feedback::EmptySelection => (
            "Selecciona ingredientes".to_string(),
            "Debes seleccionar al menos un ingrediente.".to_string(),
        ),
        Feedback::RecipeRejected(err) => {
            let (title, description) = recipe_error_message(*err);
            (title.to_string(), description.to_string())
        }
        Feedback::IngredientRejected(err) => {
            let (title, description) = ingredient_error_message(*err);
            (title.to_string(), description.to_string())
        }
        Feedback::RecipeCreated(name) => (
            "¡Receta creada!".to_string(),
            format!("{} se agregó a tus recetas.", name),
        ),
        Feedback::IngredientAdded(name) => (
            "¡Ingrediente agregado!".to_string(),
            format!("{} se agregó a tu lista.", name),
        ),
    }
}

pub fn feedback_text(feedback: &Feedback) -> String {
    let (title, description) = feedback_message(feedback);
    if description.trim().is_empty() {
        title
    } else {
        format!("{}\n{}", title, description)
    }
}

/// 卡片上显示的食材列表，过长时截断，悬停显示完整内容
pub struct IngredientListLabel<'a> {
    pub ingredients: &'a [String],
    pub max_chars: usize,
}

impl<'a> IngredientListLabel<'a> {
    pub fn new(ingredients: &'a [String]) -> Self {
        Self {
            ingredients,
            max_chars: 80,
        }
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }
}

impl egui::Widget for IngredientListLabel<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let full = format!("Ingredientes: {}", join_ingredients(self.ingredients));
        let shown = ellipsize(&full, self.max_chars);
        let truncated = shown != full;
        let label = ui.add(egui::Label::new(
            egui::RichText::new(shown).color(ui.visuals().weak_text_color()),
        ));
        if truncated {
            label.on_hover_text(full)
        } else {
            label
        }
    }
}

#[test]
fn test_join_ingredients() {
    assert_eq!(join_ingredients(&["Arroz", "Huevo"]), "Arroz, Huevo");
    assert_eq!(join_ingredients::<String>(&[]), "");
}

#[test]
fn test_ellipsize() {
    assert_eq!(ellipsize("Arroz", 10), "Arroz");
    assert_eq!(ellipsize("Arroz con huevo", 6), "Arroz…");
    assert_eq!(ellipsize("Ñandú", 5), "Ñandú");
}

#[test]
fn test_feedback_messages() {
    let (title, _) = feedback_message(&Feedback::IngredientRejected(CatalogError::DuplicateName));
    assert_eq!(title, "Ingrediente duplicado");
    let (title, description) =
        feedback_message(&Feedback::RecipeRejected(CatalogError::BlankName));
    assert_eq!(title, "Nombre requerido");
    assert_eq!(description, "Debes ponerle un nombre a la receta.");
    assert_eq!(
        feedback_text(&Feedback::IngredientAdded("Cebolla".to_string())),
        "¡Ingrediente agregado!\nCebolla se agregó a tu lista."
    );
}
