//! Snapshot persistence for ordered queues
//!
//! A snapshot stores the discipline, the capacity limit and every element in
//! insertion order as JSON. Restoring re-inserts the elements in that order,
//! which reproduces the removal order of the captured queue, ties included,
//! unless elements were placed with `append`.

use crate::app::error::{AppError, AppResult};
use crate::core::validation::validate_discipline;
use crate::queue::{Element, OrderedQueue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry<T> {
    pub priority: f64,
    pub content: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub discipline: String,
    /// Capacity limit, 0 when unbounded
    #[serde(default)]
    pub limit: usize,
    pub elements: Vec<SnapshotEntry<T>>,
}

impl<T: Clone> Snapshot<T> {
    pub fn capture(queue: &OrderedQueue<T>) -> Self {
        Self {
            discipline: queue.discipline().name().to_string(),
            limit: queue.limit().unwrap_or(0),
            elements: queue
                .snapshot()
                .into_iter()
                .map(|(priority, content)| SnapshotEntry { priority, content })
                .collect(),
        }
    }
}

impl<T> Snapshot<T> {
    /// Build a new queue holding the snapshot's elements
    ///
    /// Elements are inserted through the discipline, so an element that was
    /// appended to the captured queue lands where `insert` would put it.
    pub fn restore(self) -> AppResult<OrderedQueue<T>> {
        let discipline = validate_discipline(&self.discipline)?;
        let queue = OrderedQueue::with_limit(discipline, self.limit);
        for entry in self.elements {
            queue.insert(Element::new(entry.content, entry.priority))?;
        }
        Ok(queue)
    }
}

pub fn save_snapshot<T: Serialize>(path: &Path, snapshot: &Snapshot<T>) -> AppResult<()> {
    let file = File::create(path).map_err(|e| AppError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, snapshot).map_err(|source| AppError::Snapshot {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| AppError::io(path, e))?;

    log::debug!(
        "saved {} element(s) to snapshot {}",
        snapshot.elements.len(),
        path.display()
    );
    Ok(())
}

pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> AppResult<Snapshot<T>> {
    if !path.is_file() {
        return Err(AppError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| AppError::io(path, e))?;
    let snapshot: Snapshot<T> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| AppError::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(
        "loaded {} element(s) from snapshot {}",
        snapshot.elements.len(),
        path.display()
    );
    Ok(snapshot)
}
