use crate::core::app_config::CONFIG_PATH;
use crate::core::system::System;
use std::process::ExitCode;

mod core;
mod interface;
mod model;
mod platform;
mod utils;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _guard = match System::initialize() {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let exit_code = System::run(CONFIG_PATH).await;
    System::terminate();
    exit_code
}
