// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::models::TaskModel;
use crate::repositories::traits::TaskRepository;

#[derive(Clone)]
pub struct TaskListController<R: TaskRepository> {
    repo: R,
    tasks: Rc<VecModel<TaskModel>>,
    pending_input: Rc<RefCell<String>>,
}

impl<R: TaskRepository> TaskListController<R> {
    pub fn new(repo: R) -> Self {
        let tasks = Rc::new(VecModel::default());
        tasks.extend_from_slice(repo.tasks().as_slice());

        Self { repo, tasks, pending_input: Rc::new(RefCell::new(String::new())) }
    }

    pub fn tasks(&self) -> ModelRc<TaskModel> {
        self.tasks.clone().into()
    }

    pub fn pending_input(&self) -> String {
        self.pending_input.borrow().clone()
    }

    pub fn set_pending_input(&self, text: &str) {
        *self.pending_input.borrow_mut() = text.to_string();
    }

    /// Submits the pending input. Whitespace-only input is a no-op and
    /// leaves the pending input untouched; otherwise the task keeps the
    /// text exactly as typed and the pending input is cleared.
    pub fn add_task(&self) {
        let title = self.pending_input.borrow().clone();
        if title.trim().is_empty() {
            return;
        }

        self.tasks.push(self.repo.add_task(&title));
        self.pending_input.borrow_mut().clear();
    }

    pub fn toggle_task(&self, id: i32) {
        if let Some((index, task)) = self.repo.toggle(id) {
            self.tasks.set_row_data(index, task);
        }
    }

    pub fn remove_task(&self, id: i32) {
        if let Some(index) = self.repo.remove(id) {
            self.tasks.remove(index);
        }
    }
}
