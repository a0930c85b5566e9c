#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!(
        "{} {} - {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        adoptease_web::app_lib::build_info::git_commit_hash()
    );

    leptos::prelude::mount_to_body(adoptease_web::App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
