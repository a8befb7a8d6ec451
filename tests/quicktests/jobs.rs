use ordered_tree::{Job, JobKey, JobTree, TreeError};

use std::collections::HashMap;

#[quickcheck]
fn jobs_sort_by_year_then_number(jobs: Vec<(u8, u16)>) -> bool {
    let mut tree = JobTree::new();
    for (year, number) in &jobs {
        let _ = tree.new_job(u32::from(*year), u32::from(*number), 0.0, 0.0);
    }

    let mut expected: Vec<_> = jobs
        .iter()
        .map(|(year, number)| (u32::from(*year), u32::from(*number)))
        .collect();
    expected.sort_unstable();
    expected.dedup();

    tree.keys().map(|k| (k.year, k.number)).eq(expected)
}

#[quickcheck]
fn deleted_jobs_are_gone(jobs: Vec<(u8, u8)>, deletes: Vec<(u8, u8)>) -> bool {
    let mut tree = JobTree::new();
    let mut live = HashMap::new();
    for (year, number) in &jobs {
        let key = JobKey::new(u32::from(*year), u32::from(*number));
        let job = Job::new(f32::from(*year), f32::from(*number));
        if tree.insert(key, job).is_ok() {
            live.insert(key, job);
        }
    }

    for (year, number) in &deletes {
        let key = JobKey::new(u32::from(*year), u32::from(*number));
        let expected = if live.is_empty() {
            Err(TreeError::EmptyTree)
        } else {
            live.remove(&key).ok_or(TreeError::NotFound)
        };
        if tree.delete_job(key.year, key.number) != expected || tree.len() != live.len() {
            return false;
        }
    }

    deletes
        .iter()
        .all(|(y, n)| tree.search_job(u32::from(*y), u32::from(*n)).is_err())
        && live
            .iter()
            .all(|(key, job)| tree.search_job(key.year, key.number) == Ok(job))
}
