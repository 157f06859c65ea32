//! Ordered, duplicate-free record collection.
//!
//! [`RecordList`] keeps records in insertion order and rejects any record that
//! [`Record::is_same_record`] considers equivalent to one already stored. The
//! backing vector is shared copy-on-write, so cloning a list (which every
//! history snapshot does) is O(1) and a later mutation of the live list never
//! reaches the clone.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{EngineError, EngineResult};
use crate::models::Record;

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Ordering::Relaxed)
}

/// An ordered collection of unique records.
///
/// Every mutation stamps the list with a fresh version number that is unique
/// across the whole process, so a version identifies list contents exactly
/// even after a list is restored from history.
#[derive(Debug, Clone)]
pub struct RecordList<T> {
    records: Arc<Vec<T>>,
    version: u64,
}

impl<T: Record> RecordList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Vec::new()),
            version: next_version(),
        }
    }

    /// Creates a list from records, rejecting internal duplicates.
    ///
    /// # Example
    ///
    /// ```
    /// use staff_ledger::models::{EmployeeId, Schedule};
    /// use staff_ledger::store::ScheduleList;
    /// use chrono::NaiveDate;
    ///
    /// let id = EmployeeId::new("000001").unwrap();
    /// let date = NaiveDate::from_ymd_opt(2019, 2, 2).unwrap();
    ///
    /// let list = ScheduleList::from_records(vec![Schedule::leave(id.clone(), date)]).unwrap();
    /// assert_eq!(list.len(), 1);
    ///
    /// let clash = vec![Schedule::leave(id.clone(), date), Schedule::work(id, date)];
    /// assert!(ScheduleList::from_records(clash).is_err());
    /// ```
    pub fn from_records(records: Vec<T>) -> EngineResult<Self> {
        check_unique(&records)?;
        Ok(Self {
            records: Arc::new(records),
            version: next_version(),
        })
    }

    /// Returns the version stamp of the current contents.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    /// Returns true if an equivalent record is stored.
    pub fn contains(&self, record: &T) -> bool {
        self.records.iter().any(|r| r.is_same_record(record))
    }

    /// Appends a record.
    ///
    /// Fails with [`EngineError::DuplicateRecord`] if an equivalent record is
    /// already stored.
    pub fn add(&mut self, record: T) -> EngineResult<()> {
        if self.contains(&record) {
            return Err(EngineError::DuplicateRecord {
                kind: T::KIND,
                key: record.identity(),
            });
        }
        self.records_mut().push(record);
        Ok(())
    }

    /// Removes the record equivalent to `record` and returns it.
    pub fn remove(&mut self, record: &T) -> EngineResult<T> {
        let position = self
            .records
            .iter()
            .position(|r| r.is_same_record(record))
            .ok_or_else(|| EngineError::RecordNotFound {
                kind: T::KIND,
                key: record.identity(),
            })?;
        Ok(self.records_mut().remove(position))
    }

    /// Removes every record matching `predicate`, returning how many went.
    pub fn remove_where<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let before = self.records.len();
        if !self.records.iter().any(&predicate) {
            return 0;
        }
        self.records_mut().retain(|r| !predicate(r));
        before - self.records.len()
    }

    /// Replaces `target` with `edited`, keeping its position.
    ///
    /// Fails if `target` is absent or if `edited` clashes with a record other
    /// than `target`.
    pub fn replace(&mut self, target: &T, edited: T) -> EngineResult<()> {
        let position = self
            .records
            .iter()
            .position(|r| r.is_same_record(target))
            .ok_or_else(|| EngineError::RecordNotFound {
                kind: T::KIND,
                key: target.identity(),
            })?;

        let clashes = self
            .records
            .iter()
            .enumerate()
            .any(|(i, r)| i != position && r.is_same_record(&edited));
        if clashes {
            return Err(EngineError::DuplicateRecord {
                kind: T::KIND,
                key: edited.identity(),
            });
        }

        self.records_mut()[position] = edited;
        Ok(())
    }

    /// Atomically replaces the whole contents.
    ///
    /// The list is left untouched if `records` contains duplicates.
    pub fn replace_all(&mut self, records: Vec<T>) -> EngineResult<()> {
        check_unique(&records)?;
        self.records = Arc::new(records);
        self.version = next_version();
        Ok(())
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records = Arc::new(Vec::new());
        self.version = next_version();
    }

    fn records_mut(&mut self) -> &mut Vec<T> {
        self.version = next_version();
        Arc::make_mut(&mut self.records)
    }

    #[cfg(test)]
    pub(crate) fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

fn check_unique<T: Record>(records: &[T]) -> EngineResult<()> {
    for (i, record) in records.iter().enumerate() {
        if records[..i].iter().any(|r| r.is_same_record(record)) {
            return Err(EngineError::DuplicateRecord {
                kind: T::KIND,
                key: record.identity(),
            });
        }
    }
    Ok(())
}

impl<T: Record> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Versions are bookkeeping; two lists are equal when their records are.
impl<T: Record> PartialEq for RecordList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl<'a, T: Record> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
