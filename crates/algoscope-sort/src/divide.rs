//! Merge, quick and heap sort.

use crate::recorder::Recorder;

/// Top-down merge sort splitting at `(l + r) / 2`.
pub fn merge_sort(values: &mut [u32], rec: &mut Recorder<'_>) {
    if values.len() > 1 {
        let right = values.len() - 1;
        merge_range(values, 0, right, rec);
    }
}

fn merge_range(values: &mut [u32], left: usize, right: usize, rec: &mut Recorder<'_>) {
    if left >= right || rec.cancelled() {
        return;
    }
    let mid = (left + right) / 2;
    merge_range(values, left, mid, rec);
    merge_range(values, mid + 1, right, rec);
    merge(values, left, mid, right, rec);
}

/// Stable two-pointer merge, one step per placement including both drains.
fn merge(values: &mut [u32], left: usize, mid: usize, right: usize, rec: &mut Recorder<'_>) {
    if rec.cancelled() {
        return;
    }
    let lhs = values[left..=mid].to_vec();
    let rhs = values[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < lhs.len() && j < rhs.len() {
        if rec.cancelled() {
            return;
        }
        if lhs[i] <= rhs[j] {
            rec.write(values, k, lhs[i]);
            i += 1;
        } else {
            rec.write(values, k, rhs[j]);
            j += 1;
        }
        k += 1;
    }
    while i < lhs.len() {
        if rec.cancelled() {
            return;
        }
        rec.write(values, k, lhs[i]);
        i += 1;
        k += 1;
    }
    while j < rhs.len() {
        if rec.cancelled() {
            return;
        }
        rec.write(values, k, rhs[j]);
        j += 1;
        k += 1;
    }
}

/// Quick sort with Lomuto partitioning around the last element.
pub fn quick_sort(values: &mut [u32], rec: &mut Recorder<'_>) {
    if values.len() > 1 {
        let high = values.len() - 1;
        quick_range(values, 0, high, rec);
    }
}

fn quick_range(values: &mut [u32], low: usize, high: usize, rec: &mut Recorder<'_>) {
    if low >= high || rec.cancelled() {
        return;
    }
    let Some(pivot) = partition(values, low, high, rec) else {
        return;
    };
    if pivot > low {
        quick_range(values, low, pivot - 1, rec);
    }
    quick_range(values, pivot + 1, high, rec);
}

/// Returns the pivot's final index, or `None` if cancelled mid-partition.
///
/// Every swap is recorded, including the degenerate `i == j` ones, so the
/// step count matches a textbook Lomuto trace.
fn partition(values: &mut [u32], low: usize, high: usize, rec: &mut Recorder<'_>) -> Option<usize> {
    let pivot = values[high];
    let mut store = low;
    for j in low..high {
        if rec.cancelled() {
            return None;
        }
        if values[j] < pivot {
            rec.swap(values, store, j);
            store += 1;
        }
    }
    rec.swap(values, store, high);
    Some(store)
}

/// Heap sort: bottom-up max-heap build, then root extraction.
pub fn heap_sort(values: &mut [u32], rec: &mut Recorder<'_>) {
    let n = values.len();
    for i in (0..n / 2).rev() {
        if rec.cancelled() {
            return;
        }
        sift_down(values, n, i, rec);
    }
    for end in (1..n).rev() {
        if rec.cancelled() {
            return;
        }
        rec.swap(values, 0, end);
        sift_down(values, end, 0, rec);
    }
}

fn sift_down(values: &mut [u32], len: usize, mut root: usize, rec: &mut Recorder<'_>) {
    loop {
        if rec.cancelled() {
            return;
        }
        let left = 2 * root + 1;
        let right = 2 * root + 2;
        let mut largest = root;
        if left < len && values[left] > values[largest] {
            largest = left;
        }
        if right < len && values[right] > values[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        rec.swap(values, root, largest);
        root = largest;
    }
}
