//! Jobs keyed by the year they were taken on and their number within that year.
//!
//! A [`JobTree`] is an ordinary [`Tree`] whose keys sort by year first and job number second, so
//! the "oldest" job is the tree's minimum and the "newest" is its maximum.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{JobKey, JobTree};
//!
//! let mut jobs = JobTree::new();
//! jobs.new_job(12, 1, 15000.0, 32000.0).unwrap();
//! jobs.new_job(10, 5, 25000.0, 22000.0).unwrap();
//! jobs.new_job(10, 3, 300.0, 800.0).unwrap();
//!
//! let order: Vec<String> = jobs.keys().map(JobKey::to_string).collect();
//! assert_eq!(order, ["10-003", "10-005", "12-001"]);
//!
//! let job = jobs.search_job(10, 5).unwrap();
//! assert_eq!(job.profit(), -3000.0);
//! ```

use std::fmt;

use crate::error::TreeError;
use crate::tree::Tree;

/// A tree of jobs.
pub type JobTree = Tree<JobKey, Job>;

/// Identifies a job. Ordering compares `year` first and only looks at `number` when the years are
/// equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobKey {
    /// Two digit year the job was opened in.
    pub year: u32,
    /// Job number within the year.
    pub number: u32,
}

impl JobKey {
    /// Builds the key for job `number` of `year`.
    pub fn new(year: u32, number: u32) -> Self {
        Self { year, number }
    }
}

/// Renders as `YY-NNN`, e.g. `10-005`.
impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:03}", self.year, self.number)
    }
}

/// The money attached to a job. Both amounts default to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Job {
    /// What the job actually cost.
    pub cost: f32,
    /// What the job was estimated at.
    pub estimate: f32,
}

impl Job {
    /// A job with the given actual cost and estimate.
    pub fn new(cost: f32, estimate: f32) -> Self {
        Self { cost, estimate }
    }

    /// Estimate minus cost. Negative when the job lost money.
    pub fn profit(&self) -> f32 {
        self.estimate - self.cost
    }
}

impl Tree<JobKey, Job> {
    /// Records a new job. Fails with [`TreeError::AlreadyExists`] if the year and number are
    /// taken, leaving the existing job untouched.
    pub fn new_job(
        &mut self,
        year: u32,
        number: u32,
        cost: f32,
        estimate: f32,
    ) -> Result<(), TreeError> {
        self.insert(JobKey::new(year, number), Job::new(cost, estimate))
    }

    /// Looks up a job by year and number.
    pub fn search_job(&self, year: u32, number: u32) -> Result<&Job, TreeError> {
        self.search(&JobKey::new(year, number))
    }

    /// Removes a job, returning it. The tree is checked for the job before anything is unlinked,
    /// so an empty tree reports [`TreeError::EmptyTree`] and a missing job
    /// [`TreeError::NotFound`] without touching the structure.
    pub fn delete_job(&mut self, year: u32, number: u32) -> Result<Job, TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        let key = JobKey::new(year, number);
        if !self.contains_key(&key) {
            return Err(TreeError::NotFound);
        }

        self.delete(&key)
    }

    /// The job with the smallest year and number.
    pub fn oldest(&self) -> Result<(&JobKey, &Job), TreeError> {
        self.minimum()
    }

    /// The job with the largest year and number.
    pub fn newest(&self) -> Result<(&JobKey, &Job), TreeError> {
        self.maximum()
    }
}
