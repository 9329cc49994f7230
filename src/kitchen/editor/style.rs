use egui::Color32;

pub const ORANGE: Color32 = Color32::from_rgb(0xF9, 0x73, 0x16);
pub const ORANGE_DARK: Color32 = Color32::from_rgb(0xEA, 0x58, 0x0C);
pub const GREEN: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

pub fn card_frame(ui: &mut egui::Ui) -> egui::Frame {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(12.0)
        .inner_margin(12.0)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
}

pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(Color32::WHITE).strong())
        .fill(ORANGE)
        .corner_radius(10.0)
        .min_size(egui::vec2(0.0, 36.0))
}

pub fn outline_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(ORANGE).strong())
        .fill(Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(2.0, ORANGE))
        .corner_radius(10.0)
        .min_size(egui::vec2(0.0, 36.0))
}

/// 带勾选框的食材卡片，整张卡片可点击
pub struct CheckCard<'a> {
    pub label: &'a str,
    pub checked: bool,
}

impl egui::Widget for CheckCard<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let frame = card_frame(ui);
        let frame = if self.checked {
            frame.stroke(egui::Stroke::new(2.0, ORANGE))
        } else {
            frame
        };
        let mut checked = self.checked;
        let inner = frame.show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.checkbox(&mut checked, egui::RichText::new(self.label).strong())
        });
        let card = inner.response.interact(egui::Sense::click());
        inner.inner | card
    }
}

/// 带返回按钮的标题行，点击返回时为 true
pub fn top_row(ui: &mut egui::Ui, title: &str, with_back: bool) -> bool {
    let mut back = false;
    ui.horizontal(|ui| {
        if with_back && ui.button("⬅").on_hover_text("Volver").clicked() {
            back = true;
        }
        ui.label(egui::RichText::new("🔍").size(22.0).color(ORANGE));
        ui.heading(egui::RichText::new(title).strong());
    });
    ui.add_space(8.0);
    back
}
