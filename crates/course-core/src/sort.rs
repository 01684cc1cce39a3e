//! Ordering of the visible course list.

use std::cmp::Ordering;

use course_model::{Course, CourseId, IdComparison, SortDirection, SortKey, SortMode};

use crate::collate::collate;

/// Sort courses in place by `mode`.
///
/// The sort is stable: ties keep their incoming order, and `SortMode::None`
/// leaves the sequence untouched.
pub fn sort_courses(courses: &mut [&Course], mode: SortMode, id_comparison: IdComparison) {
    sort_entries(courses, mode, id_comparison, |course| *course);
}

/// Sort arbitrary entries that each carry a course.
pub(crate) fn sort_entries<T, F>(
    entries: &mut [T],
    mode: SortMode,
    id_comparison: IdComparison,
    course: F,
) where
    T: Copy,
    F: Fn(&T) -> &Course,
{
    let SortMode::By { key, direction } = mode else {
        return;
    };
    let numeric_ids = match id_comparison {
        IdComparison::Pairwise => None,
        IdComparison::Uniform => Some(
            entries
                .iter()
                .all(|entry| course(entry).id.as_number().is_some()),
        ),
    };
    stable_sort_by(entries, &mut |a, b| {
        let ordering = compare_courses(course(a), course(b), key, numeric_ids);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Ascending comparison of two courses on `key`.
///
/// `numeric_ids` fixes the id comparison basis for the whole sequence; `None`
/// decides per pair.
pub fn compare_courses(a: &Course, b: &Course, key: SortKey, numeric_ids: Option<bool>) -> Ordering {
    match key {
        SortKey::Title => collate(&a.title, &b.title),
        SortKey::Id => compare_ids(&a.id, &b.id, numeric_ids),
        SortKey::Semester => compare_ranks(a.semester_rank(), b.semester_rank()),
    }
}

fn compare_ids(a: &CourseId, b: &CourseId, numeric_ids: Option<bool>) -> Ordering {
    let numbers = match numeric_ids {
        Some(false) => None,
        _ => a.as_number().zip(b.as_number()),
    };
    match numbers {
        Some((x, y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        None => collate(&a.to_string(), &b.to_string()),
    }
}

/// Known ranks ascend; unknown ranks come after every known one.
fn compare_ranks(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => x.cmp(&y),
    }
}

// Merge sort that never panics on comparators that are not total orders;
// the pairwise id rule can produce such comparisons on mixed id sets.
fn stable_sort_by<T: Copy, F>(items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    stable_sort_by(&mut items[..mid], compare);
    stable_sort_by(&mut items[mid..], compare);

    let mut merged = Vec::with_capacity(len);
    let (mut left, mut right) = (0, mid);
    while left < mid && right < len {
        if compare(&items[right], &items[left]) == Ordering::Less {
            merged.push(items[right]);
            right += 1;
        } else {
            merged.push(items[left]);
            left += 1;
        }
    }
    merged.extend_from_slice(&items[left..mid]);
    merged.extend_from_slice(&items[right..]);
    items.copy_from_slice(&merged);
}
