use crate::kitchen::{
    editor::{
        session::{Action, Session},
        style::{card_frame, primary_button, top_row},
    },
    format::IngredientListLabel,
};

pub fn results_view(ui: &mut egui::Ui, session: &Session) -> Option<Action> {
    let mut action = None;
    if top_row(ui, "Resultados", true) {
        action = Some(Action::Back);
    }

    if session.matches.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(
                egui::RichText::new("🔍")
                    .size(72.0)
                    .color(ui.visuals().weak_text_color()),
            );
            ui.add_space(12.0);
            ui.heading(egui::RichText::new("No encontramos recetas").strong());
            ui.add_space(6.0);
            ui.label("No existe una receta con esos ingredientes.\n¿Quieres crear una nueva?");
            ui.add_space(16.0);
            let width = ui.available_width() * 0.8;
            if ui
                .add_sized([width, 36.0], primary_button("➕ Crear nueva receta"))
                .clicked()
            {
                action = Some(Action::StartCreate);
            }
        });
        return action;
    }

    ui.label(egui::RichText::new("Recetas encontradas").strong().size(20.0));
    ui.add_space(8.0);
    egui::ScrollArea::vertical()
        .id_salt("ResultsScroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for recipe in &session.matches {
                let card = card_frame(ui).show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new(&recipe.name).strong());
                    ui.add_space(6.0);
                    ui.add(IngredientListLabel::new(&recipe.ingredients).with_max_chars(72));
                });
                if card
                    .response
                    .interact(egui::Sense::click())
                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                    .clicked()
                {
                    action = Some(Action::Open(recipe.clone()));
                }
                ui.add_space(10.0);
            }
        });
    action
}
