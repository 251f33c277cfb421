use crate::models::common::{Location, Weight};

/// A task id, an index into the catalog.
pub type TaskId = usize;

/// Represents a pickup and delivery task.
#[derive(Clone, Debug)]
pub struct Task {
    /// A unique task id.
    pub id: TaskId,
    /// A weight of the carried goods.
    pub weight: Weight,
    /// Location where the task is picked up.
    pub pickup: Location,
    /// Location where the task is delivered.
    pub delivery: Location,
}

/// An immutable lookup table of all tasks known to the planner.
/// Shared by reference throughout the search, tasks are referenced by id everywhere else.
pub struct Catalog {
    tasks: Vec<Task>,
}

impl Catalog {
    /// Creates a new instance of `Catalog`.
    pub fn new(tasks: Vec<Task>) -> Self {
        assert!(tasks.iter().enumerate().all(|(index, task)| task.id == index));
        assert!(tasks.iter().all(|task| task.weight > 0));

        Self { tasks }
    }

    /// Returns a task by its id.
    pub fn get(&self, id: TaskId) -> &Task {
        &self.tasks[id]
    }

    /// Returns all tasks in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Returns amount of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Checks whether catalog has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
