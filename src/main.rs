#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use movement_predictor::{Cli, run_app};

#[cfg(not(target_arch = "wasm32"))]
use {
    clap::Parser,
    eframe::NativeOptions,
    movement_predictor::ui::UI_TEXT,
    std::panic,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, prelude::*};

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
pub fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let _ = fern::Dispatch::new()
        .level(global_level)
        .level_for("movement_predictor", my_code_level)
        .chain(fern::Output::call(|record| {
            let msg = record.args().to_string();
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&msg.into()),
                log::Level::Warn => web_sys::console::warn_1(&msg.into()),
                log::Level::Info => web_sys::console::info_1(&msg.into()),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg.into()),
            }
        }))
        .apply();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    init_log();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no global `window` or `document`")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // No command line in the browser
    let args = Cli::default();

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(run_app(cc, args)?))),
        )
        .await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    // RUST_LOG, when set, overrides the defaults above
    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("movement_predictor"), my_code_level)
        .parse_default_env()
        .init();

    let args = Cli::parse();
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([820.0, 900.0])
            .with_title(UI_TEXT.window_title.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title.as_str(),
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)?))),
    )
}
