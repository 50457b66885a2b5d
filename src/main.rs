// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use iced::Theme;
use tpt_monitor::app::{MonitorApp, WINDOW_SIZE, WINDOW_TITLE};
use tpt_monitor::channel::CHANNEL_COUNT;
use tpt_monitor::config::Config;

fn main() -> iced::Result {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load_or_default();
    log::info!(
        "Monitoring {} simulated channels, refreshing every {} s",
        CHANNEL_COUNT,
        config.refresh_interval_secs
    );

    iced::application(WINDOW_TITLE, MonitorApp::update, MonitorApp::view)
        .subscription(MonitorApp::subscription)
        .theme(|_| Theme::Light)
        .window_size(WINDOW_SIZE)
        .resizable(false)
        .run_with(move || MonitorApp::new(config))
}
