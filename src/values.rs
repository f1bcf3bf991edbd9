use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::model::{Category, Note, Project, Status};

pub fn category_counts(notes: &[Note]) -> HashMap<Category, usize> {
    tally(notes.iter().map(|n| n.category))
}

pub fn status_counts(projects: &[Project]) -> HashMap<Status, usize> {
    tally(projects.iter().map(|p| p.status))
}

fn tally<K: Eq + Hash>(keys: impl Iterator<Item = K>) -> HashMap<K, usize> {
    let mut counts = HashMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    counts
}

pub fn format_counts<K: Display>(counts: &HashMap<K, usize>, show_count: bool) -> Vec<String> {
    let mut rows: Vec<(String, usize)> = counts
        .iter()
        .map(|(key, &count)| (key.to_string(), count))
        .collect();

    if show_count {
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    } else {
        rows.sort_by(|a, b| a.0.cmp(&b.0));
    }

    rows.into_iter()
        .map(|(label, count)| {
            if show_count {
                format!("{label}: {count}")
            } else {
                label
            }
        })
        .collect()
}
