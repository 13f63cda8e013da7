use crate::search::{error::HeapError, heap::IndexedHeap, ids::StateId};

type Item = (u64, u32);
type TestHeap = IndexedHeap<Item, u32, fn(&Item) -> u32, fn(&Item) -> StateId>;

fn score(item: &Item) -> u32 {
    item.1
}

fn identity(item: &Item) -> StateId {
    StateId::from(item.0)
}

fn heap() -> TestHeap {
    IndexedHeap::new(
        score as fn(&Item) -> u32,
        identity as fn(&Item) -> StateId,
    )
}

fn drain(heap: &mut TestHeap) -> Vec<Item> {
    let mut popped = Vec::new();
    while let Some(item) = heap.pop() {
        assert!(heap.check_invariants());
        popped.push(item);
    }
    popped
}

#[test]
fn pops_in_score_order() {
    let mut heap = heap();
    for (id, score) in [(1, 7), (2, 3), (3, 9), (4, 1), (5, 5)] {
        heap.push((id, score)).expect("distinct ids should push");
        assert!(heap.check_invariants());
    }

    assert_eq!(heap.len(), 5);
    assert_eq!(heap.peek(), Some(&(4, 1)));

    let scores: Vec<u32> = drain(&mut heap).into_iter().map(|item| item.1).collect();
    assert_eq!(scores, vec![1, 3, 5, 7, 9]);
    assert!(heap.is_empty());
}

#[test]
fn pop_and_peek_on_empty_heap_return_none() {
    let mut heap = heap();
    assert!(heap.peek().is_none());
    assert!(heap.pop().is_none());
    assert!(heap.is_empty());
}

#[test]
fn duplicate_identity_is_rejected() {
    let mut heap = heap();
    heap.push((1, 4)).expect("first push should succeed");

    let err = heap.push((1, 2)).expect_err("same id should be rejected");
    assert_eq!(
        err,
        HeapError::DuplicateIdentity {
            state_id: StateId::from(1)
        }
    );
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.get(StateId::from(1)), Some(&(1, 4)));
}

#[test]
fn removing_unknown_identity_fails() {
    let mut heap = heap();
    heap.push((1, 4)).expect("push should succeed");

    let err = heap
        .remove(StateId::from(9))
        .expect_err("missing id should fail");
    assert!(matches!(err, HeapError::MissingIdentity { state_id } if state_id.value() == 9));
    assert_eq!(heap.len(), 1);
}

#[test]
fn remove_right_after_push_restores_previous_contents() {
    let mut heap = heap();
    for (id, score) in [(1, 5), (2, 2), (3, 8)] {
        heap.push((id, score)).expect("push should succeed");
    }
    let mut before: Vec<Item> = heap.iter().copied().collect();
    before.sort();

    heap.push((4, 1)).expect("push should succeed");
    let removed = heap.remove(StateId::from(4)).expect("id 4 is stored");

    let mut after: Vec<Item> = heap.iter().copied().collect();
    after.sort();
    assert_eq!(removed, (4, 1));
    assert_eq!(before, after);
    assert!(!heap.contains(StateId::from(4)));
    assert!(heap.check_invariants());
}

#[test]
fn removal_from_a_leaf_can_require_sifting_up() {
    let mut heap = heap();
    for (id, score) in [(1, 1), (2, 10), (3, 2), (4, 11), (5, 12), (6, 3), (7, 4)] {
        heap.push((id, score)).expect("push should succeed");
    }

    // The last entry (score 4) replaces id 4 under the score-10 node and must climb.
    heap.remove(StateId::from(4)).expect("id 4 is stored");
    assert!(heap.check_invariants());

    let scores: Vec<u32> = drain(&mut heap).into_iter().map(|item| item.1).collect();
    assert_eq!(scores, vec![1, 2, 3, 4, 10, 12]);
}

#[test]
fn removing_the_root_and_last_entries_keeps_index_consistent() {
    let mut heap = heap();
    for (id, score) in [(1, 3), (2, 6), (3, 4), (4, 9)] {
        heap.push((id, score)).expect("push should succeed");
    }

    assert_eq!(heap.remove(StateId::from(1)), Ok((1, 3)));
    assert!(heap.check_invariants());
    assert_eq!(heap.remove(StateId::from(4)), Ok((4, 9)));
    assert!(heap.check_invariants());

    assert_eq!(heap.peek(), Some(&(3, 4)));
    assert!(heap.contains(StateId::from(2)));
    assert!(!heap.contains(StateId::from(1)));
}

#[test]
fn equal_scores_all_come_out() {
    let mut heap = heap();
    for id in 0..16 {
        heap.push((id, 7)).expect("push should succeed");
        assert!(heap.check_invariants());
    }

    let mut ids: Vec<u64> = drain(&mut heap).into_iter().map(|item| item.0).collect();
    ids.sort();
    assert_eq!(ids, (0..16).collect::<Vec<u64>>());
}

#[test]
fn equal_scores_follow_fixed_tie_order() {
    let mut heap = heap();
    for id in 1..=7 {
        heap.push((id, 7)).expect("push should succeed");
    }

    // Sift-up climbs past equal parents, so the newest entry takes the root.
    let layout: Vec<u64> = heap.iter().map(|item| item.0).collect();
    assert_eq!(layout, vec![7, 4, 6, 1, 3, 2, 5]);

    let ids: Vec<u64> = drain(&mut heap).into_iter().map(|item| item.0).collect();
    assert_eq!(ids, vec![7, 6, 2, 5, 3, 4, 1]);
}

#[test]
fn sift_down_promotes_right_child_on_equal_scores() {
    let mut heap = heap();
    for (id, score) in [(1, 0), (2, 5), (3, 5), (4, 9)] {
        heap.push((id, score)).expect("push should succeed");
    }

    assert_eq!(heap.pop(), Some((1, 0)));
    assert_eq!(heap.peek(), Some(&(3, 5)));
    let layout: Vec<Item> = heap.iter().copied().collect();
    assert_eq!(layout, vec![(3, 5), (2, 5), (4, 9)]);
}

#[test]
fn clear_drops_entries_and_index() {
    let mut heap = heap();
    heap.push((1, 1)).expect("push should succeed");
    heap.push((2, 2)).expect("push should succeed");

    heap.clear();
    assert!(heap.is_empty());
    assert!(!heap.contains(StateId::from(1)));
    heap.push((1, 5)).expect("cleared id can be pushed again");
}
