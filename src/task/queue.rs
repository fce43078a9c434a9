use std::collections::VecDeque;

use super::{Op, Task};

/// The turtle's pending work, head first.
///
/// The scheduler takes the head out, runs it, then puts back in one step
/// whatever should now lead the queue: the head itself if it is unfinished,
/// followed by anything it asked to have spliced in after it.
#[derive(Debug, Clone, Default)]
pub struct TaskQueue {
    tasks: VecDeque<Task>,
}

impl TaskQueue {
    pub fn new() -> TaskQueue {
        TaskQueue {
            tasks: VecDeque::new(),
        }
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push_back(task);
    }

    pub fn head(&self) -> Option<&Task> {
        self.tasks.front()
    }

    pub fn take_head(&mut self) -> Option<Task> {
        self.tasks.pop_front()
    }

    /// Put `head` (if any) back at the front, with `injected` right behind
    /// it and ahead of everything that was already queued.
    pub fn replace_head(&mut self, head: Option<Task>, injected: Vec<Task>) {
        for task in injected.into_iter().rev() {
            self.tasks.push_front(task);
        }
        if let Some(task) = head {
            self.tasks.push_front(task);
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// The ops still to run, in order.
    pub fn ops(&self) -> impl Iterator<Item = &Op> {
        self.tasks.iter().map(|task| task.op())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(queue: &TaskQueue) -> Vec<&'static str> {
        queue.ops().map(|op| op.name()).collect()
    }

    #[test]
    fn test_replace_head_splices_after_head() {
        let mut queue = TaskQueue::new();
        queue.push(Task::new(Op::Home));
        queue.push(Task::new(Op::Clear));
        let head = queue.take_head();
        queue.replace_head(
            head,
            vec![Task::new(Op::BeginFill), Task::new(Op::BeginPoly)],
        );
        assert_eq!(names(&queue), vec!["home", "begin_fill", "begin_poly", "clear"]);
    }

    #[test]
    fn test_replace_finished_head() {
        let mut queue = TaskQueue::new();
        queue.push(Task::new(Op::Home));
        queue.push(Task::new(Op::Clear));
        queue.take_head();
        queue.replace_head(None, vec![Task::new(Op::Reset)]);
        assert_eq!(names(&queue), vec!["reset", "clear"]);
        queue.take_head();
        queue.replace_head(None, vec![]);
        assert_eq!(queue.len(), 1);
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.head().is_none());
    }
}
