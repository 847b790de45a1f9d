// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use super::traits;
use crate::models::TaskModel;

/// Session-local task store. Ids come from a monotonic counter, so they
/// stay unique for the lifetime of the repository even across deletions.
#[derive(Clone)]
pub struct MemTaskRepository {
    tasks: Rc<RefCell<Vec<TaskModel>>>,
    next_id: Rc<Cell<i32>>,
}

impl MemTaskRepository {
    pub fn new(tasks: Vec<TaskModel>) -> Self {
        let next_id = tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;

        Self { tasks: Rc::new(RefCell::new(tasks)), next_id: Rc::new(Cell::new(next_id)) }
    }

    fn position(&self, id: i32) -> Option<usize> {
        self.tasks.borrow().iter().position(|task| task.id == id)
    }
}

impl traits::TaskRepository for MemTaskRepository {
    fn tasks(&self) -> Vec<TaskModel> {
        self.tasks.borrow().clone()
    }

    fn add_task(&self, title: &str) -> TaskModel {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let task = TaskModel { id, title: title.to_string(), done: false };
        self.tasks.borrow_mut().push(task.clone());

        task
    }

    fn toggle(&self, id: i32) -> Option<(usize, TaskModel)> {
        let index = self.position(id)?;

        let mut tasks = self.tasks.borrow_mut();
        tasks[index].done = !tasks[index].done;

        Some((index, tasks[index].clone()))
    }

    fn remove(&self, id: i32) -> Option<usize> {
        let index = self.position(id)?;
        self.tasks.borrow_mut().remove(index);

        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::traits::TaskRepository;

    #[test]
    fn test_ids_stay_unique_after_remove() {
        let repo = MemTaskRepository::new(vec![
            TaskModel { id: 1, title: "Item 1".into(), done: false },
            TaskModel { id: 2, title: "Item 2".into(), done: false },
        ]);

        assert_eq!(repo.remove(2), Some(1));

        let task = repo.add_task("Item 3");
        assert_eq!(task.id, 3);

        let task = repo.add_task("Item 4");
        assert_eq!(task.id, 4);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let repo = MemTaskRepository::new(vec![TaskModel {
            id: 1,
            title: "Item 1".into(),
            done: false,
        }]);

        assert_eq!(repo.toggle(7), None);
        assert_eq!(repo.tasks(), vec![TaskModel { id: 1, title: "Item 1".into(), done: false }]);
    }
}
