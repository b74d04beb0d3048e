use crate::PrefixSearch;

/// A trie node. Children are kept sorted by byte value, a linear scan over
/// the handful of children a node typically has beats hashing.
#[derive(Debug, Clone)]
struct TrieNode {
    terminal: bool,
    children: Vec<(u8, u32)>,
}

/// Byte-level set trie, the default prefix index for name lookups. Prefix
/// enumeration costs the prefix walk plus the matched subtree, independent
/// of how many keys are stored.
#[derive(Debug, Clone)]
pub struct TrieSet {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl TrieSet {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode {
                terminal: false,
                children: Vec::new(),
            }],
            len: 0,
        }
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, key: &str) -> bool {
        self.descend(key.as_bytes())
            .is_some_and(|ix| self.nodes[ix as usize].terminal)
    }

    /// Walks `bytes` from the root, `None` if the path leaves the trie.
    fn descend(&self, bytes: &[u8]) -> Option<u32> {
        let mut node_ix: u32 = 0;
        for &byte in bytes {
            let children = &self.nodes[node_ix as usize].children;
            let (_, child) = children.iter().find(|(b, _)| *b == byte)?;
            node_ix = *child;
        }
        Some(node_ix)
    }
}

impl Default for TrieSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixSearch for TrieSet {
    type Keys<'a>
        = PrefixKeys<'a>
    where
        Self: 'a;

    fn add(&mut self, key: &str) {
        let mut node_ix: u32 = 0;
        for &byte in key.as_bytes() {
            let children = &self.nodes[node_ix as usize].children;
            node_ix = match children.iter().find(|(b, _)| *b == byte) {
                Some(&(_, child_ix)) => child_ix,
                None => {
                    let new_ix = self.nodes.len() as u32;
                    self.nodes.push(TrieNode {
                        terminal: false,
                        children: Vec::new(),
                    });
                    let node = &mut self.nodes[node_ix as usize];
                    let pos = node.children.partition_point(|(b, _)| *b < byte);
                    node.children.insert(pos, (byte, new_ix));
                    new_ix
                }
            };
        }
        let node = &mut self.nodes[node_ix as usize];
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    fn keys_with_prefix<'a>(&'a self, prefix: &str) -> PrefixKeys<'a> {
        let stack = match self.descend(prefix.as_bytes()) {
            Some(ix) => vec![(ix, prefix.as_bytes().to_vec())],
            None => Vec::new(),
        };
        PrefixKeys { trie: self, stack }
    }
}

/// Depth-first stream over the keys below a prefix. Re-callable through
/// [`PrefixSearch::keys_with_prefix`], not restartable mid-iteration.
#[derive(Debug)]
pub struct PrefixKeys<'a> {
    trie: &'a TrieSet,
    stack: Vec<(u32, Vec<u8>)>,
}

impl Iterator for PrefixKeys<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node_ix, key)) = self.stack.pop() {
            let node = &self.trie.nodes[node_ix as usize];
            for &(byte, child_ix) in node.children.iter().rev() {
                let mut child_key = key.clone();
                child_key.push(byte);
                self.stack.push((child_ix, child_key));
            }
            if node.terminal {
                // keys are inserted from &str, so the bytes are valid utf-8
                return Some(String::from_utf8_lossy(&key).into_owned());
            }
        }
        None
    }
}
