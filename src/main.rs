#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    threshold_viewer::logging::init();

    let result = if std::env::args_os().count() <= 1 {
        threshold_viewer::ui::run(None, threshold_viewer::runtime::RenderParameters::default())
    } else {
        threshold_viewer::run_cli()
    };

    if let Err(error) = result {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
