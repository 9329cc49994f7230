use std::sync::{Mutex, MutexGuard};

use egui_toast::ToastKind;

use crate::kitchen::{editor::session::Feedback, format::feedback_text};

lazy_static::lazy_static! {
    pub static ref TOASTS: Mutex<egui_toast::Toasts> = Mutex::new(setup_toasts());
    static ref TOAST_SECONDS: Mutex<f64> = Mutex::new(3.0);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn setup_toasts() -> egui_toast::Toasts {
    egui_toast::Toasts::new()
        .anchor(egui::Align2::CENTER_BOTTOM, (0.0, -24.0))
        .direction(egui::Direction::BottomUp)
}

/// 成功与普通提示的显示时长，错误提示为其三倍
pub fn set_duration(seconds: f64) {
    *lock(&TOAST_SECONDS) = seconds;
}

fn duration() -> f64 {
    *lock(&TOAST_SECONDS)
}

pub fn show(ctx: &egui::Context) {
    lock(&TOASTS).show(ctx);
}

pub fn success(text: impl Into<egui::WidgetText>) {
    lock(&TOASTS).add(egui_toast::Toast {
        kind: ToastKind::Success,
        text: text.into(),
        options: egui_toast::ToastOptions::default().duration_in_seconds(duration()),
        style: egui_toast::ToastStyle {
            success_icon: "√".into(),
            ..Default::default()
        },
    });
}

pub fn error(text: impl Into<egui::WidgetText>) {
    lock(&TOASTS).add(egui_toast::Toast {
        kind: ToastKind::Error,
        text: text.into(),
        options: egui_toast::ToastOptions::default().duration_in_seconds(duration() * 3.0),
        style: egui_toast::ToastStyle::default(),
    });
}

pub fn feedback(feedback: &Feedback) {
    let text = feedback_text(feedback);
    if feedback.is_error() {
        error(text);
    } else {
        success(text);
    }
}
