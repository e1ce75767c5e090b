/// Queue membership of a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Never entered the list during the current search
    Unqueued,
    /// Waiting in the list; `next` is the node behind it, `None` at the tail
    Queued { next: Option<usize> },
    /// Left the list at least once during the current search
    Scanned,
}

/// Where a node went when it was admitted to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Front,
    Back,
    Unchanged,
}

/// Scan-eligible list for label-correcting searches
///
/// A deque of node indices threaded through one state slot per node. Nodes
/// that were scanned before and get corrected re-enter at the front, nodes
/// seen for the first time join at the back, and nodes already waiting keep
/// their position.
#[derive(Debug, Clone, Default)]
pub struct ScanEligibleList {
    slots: Vec<SlotState>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl ScanEligibleList {
    /// Creates an empty list for `node_count` nodes
    pub fn new(node_count: usize) -> Self {
        ScanEligibleList {
            slots: vec![SlotState::Unqueued; node_count],
            head: None,
            tail: None,
        }
    }

    /// Marks every node unqueued, resizing to `node_count`
    pub fn reset(&mut self, node_count: usize) {
        self.slots.clear();
        self.slots.resize(node_count, SlotState::Unqueued);
        self.head = None;
        self.tail = None;
    }

    /// Number of node slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true when no node is waiting
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn state(&self, node: usize) -> SlotState {
        self.slots[node]
    }

    pub fn head(&self) -> Option<usize> {
        self.head
    }

    pub fn tail(&self) -> Option<usize> {
        self.tail
    }

    /// Puts a previously scanned node in front of the head
    pub fn push_front(&mut self, node: usize) {
        debug_assert!(!matches!(self.slots[node], SlotState::Queued { .. }));
        self.slots[node] = SlotState::Queued { next: self.head };
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
    }

    /// Appends a node behind the tail
    pub fn push_back(&mut self, node: usize) {
        debug_assert!(!matches!(self.slots[node], SlotState::Queued { .. }));
        self.slots[node] = SlotState::Queued { next: None };
        match self.tail {
            Some(tail) => self.slots[tail] = SlotState::Queued { next: Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }

    /// Admits a node whose label just improved
    ///
    /// Scanned nodes go to the front, unqueued nodes to the back, and nodes
    /// already in the list stay where they are.
    #[inline]
    pub fn admit(&mut self, node: usize) -> Admission {
        match self.slots[node] {
            SlotState::Scanned => {
                self.push_front(node);
                Admission::Front
            }
            SlotState::Unqueued => {
                self.push_back(node);
                Admission::Back
            }
            SlotState::Queued { .. } => Admission::Unchanged,
        }
    }

    /// Removes the head and marks it scanned
    pub fn pop_front(&mut self) -> Option<usize> {
        let node = self.head?;
        self.head = match self.slots[node] {
            SlotState::Queued { next } => next,
            _ => None,
        };
        self.slots[node] = SlotState::Scanned;
        if self.tail == Some(node) {
            self.tail = None;
        }
        Some(node)
    }
}
