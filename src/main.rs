use crate::{
    concept::*,
    config::Config,
    error::AppError,
    kitchen::{RecipeCatalog, editor::app::RecetarioView},
};

pub mod concept;
pub mod config;
pub mod error;
pub mod kitchen;
pub mod toast;

include!(concat!(env!("OUT_DIR"), "/git_hash.rs"));

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub struct MainPage {
    pub view: Box<dyn Subview>,
}

impl MainPage {
    fn new(config: &Config) -> Self {
        let catalog = if config.seed {
            RecipeCatalog::seeded()
        } else {
            log::info!("未载入初始数据");
            RecipeCatalog::new()
        };
        log::info!(
            "目录就绪: {} 种食材, {} 个菜谱",
            catalog.ingredient_count(),
            catalog.recipe_count()
        );
        Self {
            view: Box::new(RecetarioView::new(catalog)),
        }
    }
}

impl eframe::App for MainPage {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom(egui::Id::new("StatusBar")).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.view.name());
                ui.separator();
                ui.label(
                    egui::RichText::new(self.view.description())
                        .color(ui.visuals().weak_text_color()),
                );
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.view(ui);
        });
        toast::show(ctx);
    }
}

fn init_logger(config: &Config) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .format_module_path(true)
    .format_target(false)
    .format_file(false)
    .format_line_number(true)
    .init();
}

fn run() -> Result<(), AppError> {
    let dotenv_path = Config::load_dotenv();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            init_logger(&Config::default());
            return Err(err);
        }
    };
    init_logger(&config);
    log::info!("应用程序启动 ({})", GIT_HASH);
    if let Some(path) = &dotenv_path {
        log::debug!("已读取 {}", path.display());
    }
    toast::set_duration(config.toast_seconds);

    eframe::run_native(
        "Recetario",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(egui::Vec2 { x: 420.0, y: 760.0 })
                .with_min_inner_size(egui::Vec2 { x: 360.0, y: 560.0 })
                .with_title(format!("Recetario [{}]", GIT_HASH)),

            renderer: eframe::Renderer::Wgpu,

            ..Default::default()
        },
        Box::new(move |cc| {
            cc.egui_ctx.all_styles_mut(|style| {
                style.interaction.tooltip_delay = 0.0;
                style.interaction.show_tooltips_only_when_still = false;
            });
            Ok(Box::new(MainPage::new(&config)))
        }),
    )
    .map_err(|e| AppError::Gui(e.to_string()))
}

fn main() {
    if let Err(err) = run() {
        log::error!("{}", err.describe());
        std::process::exit(1);
    }
}
