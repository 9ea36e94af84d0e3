use std::fmt;

// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	rank: Vec<usize>,
}

impl DisjointSet {
	/// `size` singleton sets, each element its own root with rank 1.
	pub fn make_singletons(size: usize) -> DisjointSet {
		DisjointSet {
			parent: (0..size).collect(),
			rank: vec![1; size],
		}
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	/// Root of `p`'s set. Halves the path on the way up: every visited
	/// node is re-pointed at its grandparent.
	pub fn find(&mut self, mut p: usize) -> usize {
		assert!(p < self.parent.len(),
			"element {} out of range for disjoint set of {}", p, self.parent.len());
		while p != self.parent[p] {
			self.parent[p] = self.parent[self.parent[p]];
			p = self.parent[p];
		}
		p
	}

	pub fn is_connected(&mut self, p: usize, q: usize) -> bool {
		self.find(p) == self.find(q)
	}

	/// Union by rank. On equal ranks `p`'s root goes under `q`'s root.
	pub fn union(&mut self, p: usize, q: usize) {
		let p_root = self.find(p);
		let q_root = self.find(q);
		if p_root == q_root {
			return;
		}
		if self.rank[p_root] < self.rank[q_root] {
			self.parent[p_root] = q_root;
		} else if self.rank[q_root] < self.rank[p_root] {
			self.parent[q_root] = p_root;
		} else {
			self.parent[p_root] = q_root;
			self.rank[q_root] += 1;
		}
	}
}

impl fmt::Display for DisjointSet {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for (i, parent) in self.parent.iter().enumerate() {
			writeln!(f, "{} : {}", i, parent)?;
		}
		Ok(())
	}
}
