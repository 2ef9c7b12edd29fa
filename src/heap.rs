/*
Array backed binary min-heap over vertex ids, keyed by an external distance array.

There is no decrease-key: callers mutate `dist` freely and then call `build`
to restore the heap property over the active prefix `heap[0..len)`.
*/

use crate::geo::Cost;
use crate::graph::VertexId;

/// Sifts `heap[idx]` down until both children are no smaller.
/// The left child is inspected before the right, so on ties the left one wins.
pub fn heapify(heap: &mut [VertexId], dist: &[Cost], mut idx: usize, len: usize) {
    loop {
        let left = 2 * idx + 1;
        let right = 2 * idx + 2;
        let mut min = idx;

        if left < len && dist[heap[left]] < dist[heap[min]] {
            min = left;
        }
        if right < len && dist[heap[right]] < dist[heap[min]] {
            min = right;
        }
        if min == idx {
            return;
        }
        heap.swap(idx, min);
        idx = min;
    }
}

/// Restores the heap property over `heap[0..len)`.
pub fn build(heap: &mut [VertexId], dist: &[Cost], len: usize) {
    for idx in (0..=len / 2).rev() {
        heapify(heap, dist, idx, len);
    }
}

/// Takes the root out of the active prefix and moves the last active slot in
/// its place. The prefix is not re-heapified; callers rebuild once they are
/// done relaxing.
pub fn pop_min(heap: &mut [VertexId], len: &mut usize) -> Option<VertexId> {
    if *len == 0 {
        return None;
    }
    let min = heap[0];
    heap[0] = heap[*len - 1];
    *len -= 1;
    Some(min)
}
