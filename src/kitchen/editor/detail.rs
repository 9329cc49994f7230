use crate::kitchen::{
    editor::{
        session::Action,
        style::{GREEN, ORANGE, ORANGE_DARK, card_frame, top_row},
    },
    model::recipe::Recipe,
};

pub fn detail_view(ui: &mut egui::Ui, recipe: Option<&Recipe>) -> Option<Action> {
    let mut action = None;
    if top_row(ui, "Detalle", true) {
        action = Some(Action::Back);
    }
    let Some(recipe) = recipe else {
        ui.label("No hay ninguna receta abierta.");
        return action;
    };

    egui::ScrollArea::vertical()
        .id_salt("DetailScroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            card_frame(ui).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(
                    egui::RichText::new(&recipe.name)
                        .size(24.0)
                        .strong()
                        .color(ORANGE_DARK),
                );
                ui.add_space(16.0);
                ui.label(egui::RichText::new("Ingredientes").strong().color(GREEN));
                ui.add_space(8.0);
                for ingredient in &recipe.ingredients {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("●").color(ORANGE));
                        ui.label(ingredient);
                    });
                }
                ui.add_space(16.0);
                ui.label(egui::RichText::new("Preparación").strong().color(GREEN));
                ui.add_space(8.0);
                ui.add(egui::Label::new(&recipe.preparation).wrap());
            });
        });
    action
}
