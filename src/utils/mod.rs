pub mod lazy_heap;

pub use lazy_heap::LazyMinHeap;
