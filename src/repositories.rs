// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod mem_task_repository;
pub use mem_task_repository::*;

use crate::models::TaskModel;

pub mod traits;

pub fn task_repo() -> impl traits::TaskRepository + Clone {
    MemTaskRepository::new(vec![
        TaskModel { id: 1, title: "Deploy to AWS".into(), done: false },
        TaskModel { id: 2, title: "Test the app".into(), done: false },
    ])
}
