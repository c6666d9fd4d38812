//! Task id allocation

use crate::error::{Error, Result};
use crate::task::Task;

/// Next free id: one past the highest id present, or 1 for an empty set
///
/// Ids are recomputed from the tasks that exist now, so removing the
/// highest-id task lets its id be handed out again. Fails once the highest
/// id is `u64::MAX`.
pub fn next_id<'a>(existing: impl IntoIterator<Item = &'a Task>) -> Result<u64> {
    existing
        .into_iter()
        .map(Task::id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| Error::validation("No task ids left"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    fn with_ids(ids: &[u64]) -> Vec<Task> {
        ids.iter()
            .map(|id| Task::new(*id, "t", None, Status::Todo).unwrap())
            .collect()
    }

    #[test]
    fn empty_starts_at_one() {
        let none: Vec<Task> = Vec::new();
        assert_eq!(next_id(&none).unwrap(), 1);
    }

    #[test]
    fn max_plus_one_regardless_of_order() {
        assert_eq!(next_id(&with_ids(&[1, 3])).unwrap(), 4);
        assert_eq!(next_id(&with_ids(&[3, 1])).unwrap(), 4);
        assert_eq!(next_id(&with_ids(&[7, 2, 5])).unwrap(), 8);
    }

    #[test]
    fn freed_highest_id_is_reused() {
        let mut tasks = with_ids(&[1, 2, 3]);
        tasks.retain(|task| task.id() != 3);
        assert_eq!(next_id(&tasks).unwrap(), 3);
    }

    #[test]
    fn exhausted_ids_are_an_error() {
        let err = next_id(&with_ids(&[1, u64::MAX])).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(next_id(&with_ids(&[u64::MAX - 1])).unwrap(), u64::MAX);
    }
}
