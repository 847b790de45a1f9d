// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use slint::ComponentHandle;

pub mod ui {
    slint::include_modules!();
}

mod adapters;
use adapters::*;

pub mod controllers;
pub mod models;
pub mod repositories;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn main() {
    // This provides better error messages in debug mode.
    // It's disabled in release mode so it doesn't bloat up the file size.
    #[cfg(all(debug_assertions, target_arch = "wasm32"))]
    console_error_panic_hook::set_once();

    let main_window = init();

    main_window.run().unwrap();
}

fn init() -> ui::MainWindow {
    let view_handle = ui::MainWindow::new().unwrap();

    let task_list_controller = controllers::TaskListController::new(repositories::task_repo());
    task_list_adapter::connect(&view_handle, task_list_controller);

    view_handle
}
