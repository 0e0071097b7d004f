//! Enlaut - borderless game launcher.
//!
//! The launcher core lives in the library crate; this binary only starts the
//! platform host.

#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        log::error!("Enlaut currently runs on Windows only");
        std::process::exit(1);
    }
}
