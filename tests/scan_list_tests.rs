use path_engine::data_structures::{Admission, ScanEligibleList, SlotState};

#[test]
fn test_push_back_is_fifo() {
    let mut list = ScanEligibleList::new(5);
    assert!(list.is_empty());

    list.push_back(3);
    list.push_back(1);
    list.push_back(4);
    assert_eq!(list.head(), Some(3));
    assert_eq!(list.tail(), Some(4));
    assert_eq!(list.state(1), SlotState::Queued { next: Some(4) });
    assert_eq!(list.state(4), SlotState::Queued { next: None });

    assert_eq!(list.pop_front(), Some(3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(4));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
    assert_eq!(list.tail(), None);
}

#[test]
fn test_popped_nodes_are_marked_scanned() {
    let mut list = ScanEligibleList::new(3);
    list.push_back(2);
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.state(2), SlotState::Scanned);
    assert_eq!(list.state(0), SlotState::Unqueued);
}

#[test]
fn test_admit_three_way_rule() {
    let mut list = ScanEligibleList::new(4);
    list.push_back(0);
    assert_eq!(list.pop_front(), Some(0));

    // First sighting joins the back
    assert_eq!(list.admit(1), Admission::Back);
    assert_eq!(list.admit(2), Admission::Back);
    // Already waiting: no change
    assert_eq!(list.admit(1), Admission::Unchanged);
    // Scanned before: jumps the queue
    assert_eq!(list.admit(0), Admission::Front);

    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert!(list.is_empty());
}

#[test]
fn test_push_front_into_empty_list_sets_tail() {
    let mut list = ScanEligibleList::new(2);
    list.push_back(1);
    list.pop_front();

    list.push_front(1);
    assert_eq!(list.head(), Some(1));
    assert_eq!(list.tail(), Some(1));

    // The tail still accepts appends after a front insertion
    list.push_back(0);
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(0));
}

#[test]
fn test_reset_clears_state_and_resizes() {
    let mut list = ScanEligibleList::new(2);
    list.push_back(0);
    list.push_back(1);
    list.pop_front();

    list.reset(4);
    assert_eq!(list.capacity(), 4);
    assert!(list.is_empty());
    for node in 0..4 {
        assert_eq!(list.state(node), SlotState::Unqueued);
    }
}
