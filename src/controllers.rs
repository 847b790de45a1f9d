// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod task_list_controller;
pub use task_list_controller::TaskListController;
