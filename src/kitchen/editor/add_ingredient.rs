use crate::kitchen::editor::{
    session::Action,
    style::{primary_button, top_row},
};

pub fn add_ingredient_view(ui: &mut egui::Ui, draft: &mut String) -> Option<Action> {
    let mut action = None;
    if top_row(ui, "Agregar ingrediente", true) {
        action = Some(Action::Back);
    }

    ui.label(egui::RichText::new("Nombre del ingrediente").strong());
    ui.add_space(6.0);
    let field = ui.add(
        egui::TextEdit::singleline(draft)
            .hint_text("Ej: Cebolla")
            .desired_width(f32::INFINITY),
    );
    // 回车直接提交
    let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(16.0);
    let width = ui.available_width();
    if ui
        .add_sized([width, 36.0], primary_button("➕ Agregar"))
        .clicked()
        || submitted
    {
        action = Some(Action::SubmitIngredient);
    }
    action
}
