// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::{
    controllers::TaskListController, models::TaskModel, repositories::traits::TaskRepository, ui,
};

// one place to implement connection between adapter (view) and controller
pub fn connect<R: TaskRepository + Clone + 'static>(
    view_handle: &ui::MainWindow,
    controller: TaskListController<R>,
) {
    view_handle
        .global::<ui::TaskListAdapter>()
        .set_tasks(Rc::new(MapModel::new(controller.tasks(), map_task_to_item)).into());

    view_handle.global::<ui::TaskListAdapter>().on_pending_input_edited({
        let controller = controller.clone();

        move |text| {
            controller.set_pending_input(text.as_str());
        }
    });

    view_handle.global::<ui::TaskListAdapter>().on_add_task({
        let controller = controller.clone();
        let view_handle = view_handle.as_weak();

        move || {
            controller.add_task();

            // a successful add clears the entry field, a no-op leaves it alone
            view_handle
                .unwrap()
                .global::<ui::TaskListAdapter>()
                .set_pending_input(controller.pending_input().as_str().into());
        }
    });

    view_handle.global::<ui::TaskListAdapter>().on_toggle_task({
        let controller = controller.clone();

        move |id| {
            controller.toggle_task(id);
        }
    });

    view_handle.global::<ui::TaskListAdapter>().on_remove_task({
        move |id| {
            controller.remove_task(id);
        }
    });
}

// maps a TaskModel (data) to a TaskItem (ui)
fn map_task_to_item(task: TaskModel) -> ui::TaskItem {
    ui::TaskItem { id: task.id, text: task.title.into(), checked: task.done }
}
