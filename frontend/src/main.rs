use log::info;
use vpn_frontend::{config, Config};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page behaviours");
    vpn_frontend::run(Config::from_window());
}
