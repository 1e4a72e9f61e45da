//! Bubble, selection and insertion sort.

use crate::recorder::Recorder;

/// Adjacent swaps on `a[j] > a[j + 1]`; one step per swap.
pub fn bubble(values: &mut [u32], rec: &mut Recorder<'_>) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if rec.cancelled() {
                return;
            }
            if values[j] > values[j + 1] {
                rec.swap(values, j, j + 1);
            }
        }
    }
}

/// Tracks `min_idx`; swaps (and records) only when it moved.
pub fn selection(values: &mut [u32], rec: &mut Recorder<'_>) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in (i + 1)..n {
            if rec.cancelled() {
                return;
            }
            if values[j] < values[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            rec.swap(values, i, min_idx);
        }
    }
}

/// Shifts right while `a[j] > key`; one step per shift plus one for the key.
pub fn insertion(values: &mut [u32], rec: &mut Recorder<'_>) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && values[j - 1] > key {
            if rec.cancelled() {
                return;
            }
            let shifted = values[j - 1];
            rec.write(values, j, shifted);
            j -= 1;
        }
        rec.write(values, j, key);
    }
}
