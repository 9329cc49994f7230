use crate::kitchen::{
    editor::{
        session::{Action, Session},
        style::{CheckCard, outline_button, primary_button, top_row},
    },
    model::catalog::RecipeCatalog,
};

/// 两列食材卡片网格，返回本帧被点击的食材名
pub fn ingredient_grid(
    ui: &mut egui::Ui,
    id_salt: &str,
    catalog: &RecipeCatalog,
    is_checked: impl Fn(&str) -> bool,
) -> Option<String> {
    let mut clicked = None;
    let column_width = ((ui.available_width() - 10.0) / 2.0).max(80.0);
    egui::Grid::new(id_salt)
        .num_columns(2)
        .min_col_width(column_width)
        .max_col_width(column_width)
        .spacing(egui::vec2(10.0, 10.0))
        .show(ui, |ui| {
            for (i, ingredient) in catalog.ingredients().enumerate() {
                if i % 2 == 0 && i != 0 {
                    ui.end_row();
                }
                let card = CheckCard {
                    label: &ingredient.name,
                    checked: is_checked(&ingredient.name),
                };
                if ui.add(card).clicked() {
                    clicked = Some(ingredient.name.clone());
                }
            }
        });
    clicked
}

pub fn pantry_view(ui: &mut egui::Ui, session: &Session, catalog: &RecipeCatalog) -> Option<Action> {
    let mut action = None;
    top_row(ui, "Mis Ingredientes", false);

    let footer_height = 52.0;
    egui::ScrollArea::vertical()
        .id_salt("PantryScroll")
        .max_height((ui.available_height() - footer_height).max(0.0))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if catalog.ingredient_count() == 0 {
                ui.label("Todavía no tienes ingredientes.");
            }
            if let Some(name) = ingredient_grid(ui, "PantryGrid", catalog, |name| {
                session.is_selected(name)
            }) {
                action = Some(Action::ToggleSelection(name));
            }
        });

    ui.separator();
    ui.columns(2, |columns| {
        let width = columns[0].available_width();
        if columns[0]
            .add_sized([width, 36.0], outline_button("➕ Agregar ingrediente"))
            .clicked()
        {
            action = Some(Action::StartAddIngredient);
        }
        let search_label = if session.selection.is_empty() {
            "🔍 Buscar receta".to_string()
        } else {
            format!("🔍 Buscar receta ({})", session.selection.len())
        };
        if columns[1]
            .add_sized([width, 36.0], primary_button(&search_label))
            .clicked()
        {
            action = Some(Action::Search);
        }
    });
    action
}
