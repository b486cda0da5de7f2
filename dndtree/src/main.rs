mod app;
mod args;
mod errors;
mod settings;
mod storage;
#[cfg(test)]
mod test_support;

use clap::Parser;
use env_logger::Env;
use iced::{Size, window};

use crate::app::{App, Launch};
use crate::args::Cli;
use crate::settings::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let settings = settings::load_initial_settings(cli.settings.as_deref());
    let items = storage::load_initial_items(cli.items.as_deref());
    let size = Size::new(settings.window.width, settings.window.height);
    let launch = Launch {
        items,
        settings,
        node: cli.node,
    };

    iced::application(move || App::new(launch.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size,
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            ..window::Settings::default()
        })
        .resizable(true)
        .run()
}
