//! Disjoint-set forest over arbitrary hashable elements.

use std::collections::HashMap;
use std::hash::Hash;

/// Union-find with path compression and union by size.
///
/// Elements are interned into dense slots the first time [`find`] or
/// [`union`] sees them; each new element starts as its own component. The
/// structure only grows.
///
/// With the `serde` feature the set serializes as its list of components
/// and is rebuilt by union on the way in, so a deserialized forest is always
/// consistent.
///
/// [`find`]: DisjointSet::find
/// [`union`]: DisjointSet::union
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<Vec<T>>",
        into = "Vec<Vec<T>>",
        bound(
            serialize = "T: Clone + Eq + Hash + serde::Serialize",
            deserialize = "T: Clone + Eq + Hash + serde::Deserialize<'de>"
        )
    )
)]
pub struct DisjointSet<T: Eq + Hash> {
    index: HashMap<T, usize>,
    elements: Vec<T>,
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl<T: Eq + Hash> Default for DisjointSet<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            elements: Vec::new(),
            parent: Vec::new(),
            size: Vec::new(),
            components: 0,
        }
    }
}

impl<T: Clone + Eq + Hash> DisjointSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct elements seen so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint components.
    pub fn count_components(&self) -> usize {
        self.components
    }

    /// Representative of the component containing `x`.
    ///
    /// An unseen `x` is added as a singleton and is its own representative.
    pub fn find(&mut self, x: &T) -> T {
        let slot = self.slot(x);
        let root = self.root(slot);
        self.elements[root].clone()
    }

    /// Join the components of `a` and `b`.
    ///
    /// Returns `false` if they were already in the same component.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        let (sa, sb) = (self.slot(a), self.slot(b));
        let (mut ra, mut rb) = (self.root(sa), self.root(sb));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.components -= 1;
        true
    }

    /// Whether `a` and `b` share a component. Unseen elements are added.
    pub fn connected(&mut self, a: &T, b: &T) -> bool {
        let (sa, sb) = (self.slot(a), self.slot(b));
        self.root(sa) == self.root(sb)
    }

    /// Size of every component, keyed by its representative.
    pub fn component_sizes(&mut self) -> HashMap<T, usize> {
        let mut sizes = HashMap::with_capacity(self.components);
        for slot in 0..self.elements.len() {
            if self.root(slot) == slot {
                sizes.insert(self.elements[slot].clone(), self.size[slot]);
            }
        }
        sizes
    }

    /// Members of every component, in first-seen order within and across
    /// components.
    pub fn components(&mut self) -> Vec<Vec<T>> {
        let mut group_of: HashMap<usize, usize> = HashMap::with_capacity(self.components);
        let mut groups: Vec<Vec<T>> = Vec::with_capacity(self.components);
        for slot in 0..self.elements.len() {
            let root = self.root(slot);
            let g = *group_of.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[g].push(self.elements[slot].clone());
        }
        groups
    }

    fn slot(&mut self, x: &T) -> usize {
        if let Some(&i) = self.index.get(x) {
            return i;
        }
        let i = self.elements.len();
        self.index.insert(x.clone(), i);
        self.elements.push(x.clone());
        self.parent.push(i);
        self.size.push(1);
        self.components += 1;
        i
    }

    fn root(&mut self, mut i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Point every node on the walk directly at the root.
        while self.parent[i] != root {
            let next = self.parent[i];
            self.parent[i] = root;
            i = next;
        }
        root
    }
}

impl<T: Clone + Eq + Hash> From<Vec<Vec<T>>> for DisjointSet<T> {
    /// Each inner list becomes (part of) one component.
    fn from(groups: Vec<Vec<T>>) -> Self {
        let mut ds = Self::new();
        for group in &groups {
            let Some((first, rest)) = group.split_first() else {
                continue;
            };
            ds.find(first);
            for x in rest {
                ds.union(first, x);
            }
        }
        ds
    }
}

impl<T: Clone + Eq + Hash> From<DisjointSet<T>> for Vec<Vec<T>> {
    fn from(mut ds: DisjointSet<T>) -> Self {
        ds.components()
    }
}
