//! Prefix trie keyed by raw bytes.
//!
//! Each node represents one byte position along one or more registered
//! keys. Lookup walks from the root one input byte at a time and keeps
//! the payload of the deepest terminal passed, so the most specific
//! registered key wins.

use std::collections::HashMap;

/// Result of a longest-match lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a, T> {
    /// Payload stored at the deepest terminal reached.
    pub payload: &'a T,
    /// Length in bytes of the matched key.
    pub depth: usize,
}

/// A single byte position along one or more registered keys.
#[derive(Debug, Clone)]
struct Node<T> {
    /// Continuations by next byte value. An absent entry means no
    /// registered key continues this way.
    children: HashMap<u8, Node<T>>,
    /// Set when some registered key ends exactly at this depth.
    terminal: Option<T>,
}

impl<T> Node<T> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            terminal: None,
        }
    }
}

/// Byte-keyed prefix trie with longest-match lookup.
///
/// Keys are registered via [`insert`](ByteTrie::insert) as an ordered
/// list of byte fragments; the concatenation of the fragments is the
/// actual key. [`longest_match`](ByteTrie::longest_match) returns the
/// payload of the deepest registered key that is a prefix of the input.
///
/// Population requires `&mut self`; all queries take `&self` and perform
/// no interior mutation, so a populated trie can be shared across
/// threads without coordination.
#[derive(Debug, Clone)]
pub struct ByteTrie<T> {
    root: Node<T>,
    /// Depth of the deepest terminal, i.e. the longest registered key.
    max_depth: usize,
    /// Number of distinct registered keys.
    len: usize,
}

impl<T> ByteTrie<T> {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            max_depth: 0,
            len: 0,
        }
    }

    /// Register a key, given as an ordered list of byte fragments.
    ///
    /// The fragments are concatenated into one contiguous key; the split
    /// carries no meaning beyond caller convenience (e.g. a marker
    /// literal followed by version bytes). Registering the same key twice
    /// silently overwrites the previous payload: last write wins.
    /// An empty fragment list registers the zero-length key, whose
    /// payload becomes the fallback candidate for every lookup.
    pub fn insert<I, F>(&mut self, payload: T, fragments: I)
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        let mut node = &mut self.root;
        let mut depth = 0;
        for fragment in fragments {
            for &byte in fragment.as_ref() {
                node = node.children.entry(byte).or_insert_with(Node::new);
                depth += 1;
            }
        }
        if node.terminal.is_none() {
            self.len += 1;
        }
        node.terminal = Some(payload);
        self.max_depth = self.max_depth.max(depth);
    }

    /// Find the most specific registered key that is a prefix of `data`.
    ///
    /// Walks from the root consuming one byte at a time and remembers the
    /// most recently passed terminal; the walk stops when the input is
    /// exhausted or no child continues it. Returns `None` when no
    /// registered key prefixes the input at all.
    ///
    /// To guarantee the most specific answer the caller must supply at
    /// least [`max_depth`](ByteTrie::max_depth) bytes (or the whole input,
    /// if shorter): a truncated input can stop the walk early and resolve
    /// to a shorter key that happens to be a prefix of the longer one.
    pub fn longest_match(&self, data: &[u8]) -> Option<Match<'_, T>> {
        let mut node = &self.root;
        let mut best = node.terminal.as_ref().map(|payload| Match { payload, depth: 0 });

        for (pos, &byte) in data.iter().enumerate() {
            match node.children.get(&byte) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(payload) = node.terminal.as_ref() {
                best = Some(Match {
                    payload,
                    depth: pos + 1,
                });
            }
        }

        best
    }

    /// Look up the payload registered under exactly `key`.
    ///
    /// Unlike [`longest_match`](ByteTrie::longest_match) this does not
    /// fall back to shorter keys.
    pub fn get(&self, key: &[u8]) -> Option<&T> {
        let mut node = &self.root;
        for &byte in key {
            node = node.children.get(&byte)?;
        }
        node.terminal.as_ref()
    }

    /// Length in bytes of the longest registered key.
    ///
    /// This is the number of leading input bytes a caller must supply to
    /// [`longest_match`](ByteTrie::longest_match) to guarantee the most
    /// specific answer.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of distinct registered keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether no key has been registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for ByteTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}
