// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#[derive(Clone, Default, Debug, PartialEq)]
pub struct TaskModel {
    // unique within the session, allocated by the repository
    pub id: i32,
    pub title: String,
    pub done: bool,
}
