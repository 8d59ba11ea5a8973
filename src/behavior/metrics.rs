//! Decorative task feed behind the "Aufgabenverarbeiter" dashboard.
//!
//! Numbers here are not derived from anything real; the feed only has to look
//! busy and finish its work within a plausible number of ticks.

/// Largest increment a task at speed 1.0 can make in one tick.
pub const MAX_STEP: f64 = 15.0;
/// Chance per tick that a queued task starts.
pub const START_CHANCE: f64 = 0.3;
/// Progress a task starts at when it leaves the queue.
pub const START_PROGRESS: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Queued,
    Processing,
    Completed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedTask {
    pub id: u32,
    pub name: &'static str,
    pub status: TaskStatus,
    pub progress: f64,
    pub speed: f64,
}

impl SimulatedTask {
    fn new(id: u32, name: &'static str, status: TaskStatus, speed: f64) -> Self {
        let progress = if status == TaskStatus::Completed { 100.0 } else { 0.0 };
        Self {
            id,
            name,
            status,
            progress,
            speed,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TaskFeed {
    tasks: Vec<SimulatedTask>,
    completed_total: u32,
    completed_today: u32,
}

impl TaskFeed {
    pub fn seeded() -> Self {
        Self {
            tasks: vec![
                SimulatedTask::new(1, "E-Mail-Kampagne", TaskStatus::Processing, 1.5),
                SimulatedTask::new(2, "Lead-Qualifizierung", TaskStatus::Completed, 1.0),
                SimulatedTask::new(3, "Support-Ticket", TaskStatus::Processing, 1.5),
            ],
            completed_total: 247,
            completed_today: 23,
        }
    }

    #[cfg(test)]
    pub fn with_tasks(tasks: Vec<SimulatedTask>) -> Self {
        Self {
            tasks,
            completed_total: 0,
            completed_today: 0,
        }
    }

    pub fn tasks(&self) -> &[SimulatedTask] {
        &self.tasks
    }

    pub fn completed_total(&self) -> u32 {
        self.completed_total
    }

    pub fn completed_today(&self) -> u32 {
        self.completed_today
    }

    pub fn is_settled(&self) -> bool {
        self.tasks.iter().all(|t| t.status == TaskStatus::Completed)
    }

    pub fn success_rate(&self) -> u32 {
        if self.is_settled() {
            100
        } else {
            99
        }
    }

    /// One tick. `random` yields values in `[0, 1)`. Returns whether any task
    /// changed.
    pub fn tick(&mut self, random: &mut impl FnMut() -> f64) -> bool {
        let mut changed = false;

        for task in &mut self.tasks {
            match task.status {
                TaskStatus::Processing => {
                    let step = random().clamp(0.0, 1.0) * MAX_STEP * task.speed;
                    let progress = (task.progress + step).min(100.0);
                    if progress != task.progress {
                        changed = true;
                    }
                    task.progress = progress;
                    if progress >= 100.0 {
                        task.status = TaskStatus::Completed;
                        self.completed_total += 1;
                        self.completed_today += 1;
                        changed = true;
                    }
                }
                TaskStatus::Queued => {
                    if random() > 1.0 - START_CHANCE {
                        task.status = TaskStatus::Processing;
                        task.progress = START_PROGRESS;
                        changed = true;
                    }
                }
                TaskStatus::Completed => {}
            }
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn seeded_feed_starts_busy() {
        let feed = TaskFeed::seeded();
        assert_eq!(feed.completed_total(), 247);
        assert_eq!(feed.completed_today(), 23);
        assert_eq!(feed.success_rate(), 99);
        assert_eq!(feed.tasks()[1].progress, 100.0);
    }

    #[test]
    fn full_steps_finish_in_five_ticks() {
        let mut feed = TaskFeed::seeded();
        let mut random = constant(1.0);
        for _ in 0..4 {
            feed.tick(&mut random);
            assert!(!feed.is_settled());
        }
        feed.tick(&mut random);

        assert!(feed.is_settled());
        assert_eq!(feed.success_rate(), 100);
        assert_eq!(feed.completed_total(), 249);
        assert_eq!(feed.completed_today(), 25);
    }

    #[test]
    fn completion_counts_once() {
        let mut feed = TaskFeed::seeded();
        let mut random = constant(1.0);
        for _ in 0..50 {
            feed.tick(&mut random);
        }
        assert_eq!(feed.completed_total(), 249);
        assert!(!feed.tick(&mut random));
    }

    #[test]
    fn progress_is_monotonic_and_capped() {
        let mut feed = TaskFeed::seeded();
        let samples = [0.3, 0.9, 0.0, 0.5, 0.99, 0.1, 0.7];
        let mut i = 0;
        let mut random = || {
            i += 1;
            samples[i % samples.len()]
        };

        let mut last: Vec<f64> = feed.tasks().iter().map(|t| t.progress).collect();
        for _ in 0..40 {
            feed.tick(&mut random);
            for (task, prev) in feed.tasks().iter().zip(&last) {
                assert!(task.progress >= *prev);
                assert!(task.progress <= 100.0);
            }
            last = feed.tasks().iter().map(|t| t.progress).collect();
        }
        assert!(feed.is_settled());
    }

    #[test]
    fn queued_task_starts_on_lucky_roll() {
        let mut feed = TaskFeed::with_tasks(vec![SimulatedTask::new(
            9,
            "Rechnungsabgleich",
            TaskStatus::Queued,
            1.0,
        )]);

        assert!(!feed.tick(&mut constant(0.5)));
        assert_eq!(feed.tasks()[0].status, TaskStatus::Queued);

        assert!(feed.tick(&mut constant(0.8)));
        assert_eq!(feed.tasks()[0].status, TaskStatus::Processing);
        assert_eq!(feed.tasks()[0].progress, START_PROGRESS);
    }
}
