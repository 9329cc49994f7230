use crate::kitchen::{
    editor::{
        pantry::ingredient_grid,
        session::{Action, RecipeDraft},
        style::{primary_button, top_row},
    },
    model::catalog::RecipeCatalog,
};

pub fn create_view(
    ui: &mut egui::Ui,
    draft: &mut RecipeDraft,
    catalog: &RecipeCatalog,
) -> Option<Action> {
    let mut action = None;
    if top_row(ui, "Crear receta", true) {
        action = Some(Action::Back);
    }

    egui::ScrollArea::vertical()
        .id_salt("CreateScroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Nombre de la receta").strong());
            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::singleline(&mut draft.name)
                    .hint_text("Ej: Ensalada mixta")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(16.0);
            ui.label(egui::RichText::new("Selecciona los ingredientes").strong());
            ui.add_space(6.0);
            let selected = &draft.ingredients;
            if let Some(name) = ingredient_grid(ui, "CreateGrid", catalog, |name| {
                selected.contains(name)
            }) {
                action = Some(Action::ToggleDraftIngredient(name));
            }

            ui.add_space(12.0);
            ui.label(egui::RichText::new("Preparación").strong());
            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::multiline(&mut draft.preparation)
                    .hint_text("Escribe los pasos para preparar la receta...")
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(12.0);
            let width = ui.available_width();
            if ui
                .add_sized([width, 36.0], primary_button("Guardar receta"))
                .clicked()
            {
                action = Some(Action::SaveRecipe);
            }
        });
    action
}
