pub mod priority_queue;
pub mod scan_list;

pub use priority_queue::NodeHeap;
pub use scan_list::{Admission, ScanEligibleList, SlotState};
