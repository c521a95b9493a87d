#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting LeaveDesk frontend");

    wasm_bindgen_futures::spawn_local(async move {
        leavedesk_frontend::config::init().await;
        log::info!("Runtime config initialized");
    });

    leavedesk_frontend::router::mount_app();
}

// The app only runs in the browser; the native build of this binary is a
// no-op so host-side test builds still link.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
