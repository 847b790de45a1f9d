// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::models::TaskModel;

pub trait TaskRepository {
    fn tasks(&self) -> Vec<TaskModel>;

    /// Appends a task with a freshly allocated id and returns it.
    fn add_task(&self, title: &str) -> TaskModel;

    /// Flips `done` of the task with the given id. Returns the row index
    /// and the updated task, or `None` if the id is unknown.
    fn toggle(&self, id: i32) -> Option<(usize, TaskModel)>;

    /// Removes the task with the given id. Returns the row index it
    /// occupied, or `None` if the id is unknown.
    fn remove(&self, id: i32) -> Option<usize>;
}
