use tpt_monitor::cli;
use tpt_monitor::config::Config;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load_or_default();
    if let Err(e) = cli::run(&config).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
