use std::fmt;

/// Fixed-capacity binary min-heap.
///
/// Stored 0-indexed: the children of `k` are `2k+1` and `2k+2`. Items only
/// need `PartialOrd`, so float weights work; an item that is neither `<`
/// nor `>` its neighbour is treated as equal and never swapped.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T: PartialOrd> MinHeap<T> {
    pub fn with_capacity(capacity: usize) -> MinHeap<T> {
        MinHeap {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Takes ownership of `items` and heapifies bottom-up in linear time.
    /// Capacity is the number of items given.
    pub fn from_vec(items: Vec<T>) -> MinHeap<T> {
        let capacity = items.len();
        let mut heap = MinHeap { data: items, capacity };
        for k in (0..heap.data.len() / 2).rev() {
            heap.sift_down(k);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn insert(&mut self, item: T) {
        assert!(self.data.len() < self.capacity,
            "insert into full heap (capacity {})", self.capacity);
        self.data.push(item);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    pub fn extract_min(&mut self) -> T {
        match self.pop() {
            Some(item) => item,
            None => panic!("extract_min on empty heap"),
        }
    }

    pub fn get_min(&self) -> &T {
        match self.peek() {
            Some(item) => item,
            None => panic!("get_min on empty heap"),
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let ret = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(ret)
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn sift_up(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.data[parent] > self.data[k] {
                self.data.swap(parent, k);
                k = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut k: usize) {
        let count = self.data.len();
        while 2 * k + 1 < count {
            let mut j = 2 * k + 1;
            if j + 1 < count && self.data[j + 1] < self.data[j] {
                j += 1;
            }
            if self.data[j] < self.data[k] {
                self.data.swap(k, j);
                k = j;
            } else {
                break;
            }
        }
    }
}

/// Items in storage order: `| a | b | ... |`.
impl<T: fmt::Display> fmt::Display for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "|")?;
        for item in &self.data {
            write!(f, " {} |", item)?;
        }
        Ok(())
    }
}
