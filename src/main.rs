//! Activity Tracker Frontend Entry Point

use activity_tracker_ui::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);

    mount_to_body(App);
}
