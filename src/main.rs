use env_logger::Env;
use log::{error, warn};
use question_admin::QuestionAdmin;
use question_admin::config::AdminConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match AdminConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Question admin",
        options,
        Box::new(move |_cc| {
            let mut app = QuestionAdmin::from_config(&config);
            if let Err(err) = app.refresh() {
                warn!("Initial load not started: {err}");
            }
            Ok(Box::new(app))
        }),
    )
}
