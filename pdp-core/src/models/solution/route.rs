#[cfg(test)]
#[path = "../../../tests/unit/models/solution/route_test.rs"]
mod route_test;

use crate::models::common::Weight;
use crate::models::problem::{Catalog, TaskId};
use rustc_hash::FxHashSet;

/// An activity performed at a task location.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Activity {
    /// Picks the task up at its pickup location.
    Pickup(TaskId),
    /// Delivers the task at its delivery location.
    Delivery(TaskId),
}

impl Activity {
    /// Returns id of the task the activity belongs to.
    pub fn task(&self) -> TaskId {
        match *self {
            Activity::Pickup(id) | Activity::Delivery(id) => id,
        }
    }
}

/// Represents an ordered sequence of activities assigned to one vehicle.
///
/// A route is feasible when the pickup of every task occurs strictly before its delivery
/// and the running load never exceeds the owning vehicle's capacity at any prefix.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Route {
    activities: Vec<Activity>,
}

impl Route {
    /// Creates a new route from given activities.
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// Returns all activities in the route.
    pub fn activities(&self) -> &[Activity] {
        self.activities.as_slice()
    }

    /// Returns amount of activities in the route.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Checks whether the route has no activities.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Returns id of the task served by the first activity.
    pub fn first_task(&self) -> Option<TaskId> {
        self.activities.first().map(Activity::task)
    }

    /// Removes both pickup and delivery activities of the given task.
    pub fn remove_task(&mut self, task: TaskId) {
        self.activities.retain(|activity| activity.task() != task);
    }

    /// Inserts pickup immediately followed by delivery of the given task at the front.
    pub fn push_front(&mut self, task: TaskId) {
        self.activities.insert(0, Activity::Delivery(task));
        self.activities.insert(0, Activity::Pickup(task));
    }

    /// Appends pickup immediately followed by delivery of the given task at the back.
    pub fn push_back(&mut self, task: TaskId) {
        self.activities.push(Activity::Pickup(task));
        self.activities.push(Activity::Delivery(task));
    }

    /// Inserts an activity at the specified index.
    pub fn insert(&mut self, index: usize, activity: Activity) {
        self.activities.insert(index, activity);
    }

    /// Returns true iff the precedence and running load invariants hold for given capacity.
    pub fn is_feasible(&self, capacity: Weight, catalog: &Catalog) -> bool {
        let mut load: Weight = 0;
        let mut picked = FxHashSet::default();

        for activity in &self.activities {
            match *activity {
                Activity::Pickup(id) => {
                    if !picked.insert(id) {
                        return false;
                    }
                    load += catalog.get(id).weight;
                    if load > capacity {
                        return false;
                    }
                }
                Activity::Delivery(id) => {
                    if !picked.remove(&id) {
                        return false;
                    }
                    load -= catalog.get(id).weight;
                }
            }
        }

        picked.is_empty()
    }
}
