use std::collections::HashMap;

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Key of a node in the adjacency arena.
    pub(crate) struct NodeKey;
}

slotmap::new_key_type! {
    /// Key of a link in the adjacency arena.
    pub(crate) struct LinkKey;
}

#[derive(Debug, Clone)]
struct NodeSlot {
    id: String,
    /// Incident links in insertion order.
    links: Vec<LinkKey>,
}

#[derive(Debug, Clone)]
struct LinkSlot {
    id: String,
    from: NodeKey,
    to: NodeKey,
}

/// Topological index over the nodes and links of a mesh graph.
///
/// Nodes and links live in generational arenas and are addressed from the
/// outside by their string ids. Links are stored directed but are found in
/// either direction by [`link_between`](Self::link_between).
#[derive(Debug, Clone, Default)]
pub(crate) struct Adjacency {
    nodes: SlotMap<NodeKey, NodeSlot>,
    links: SlotMap<LinkKey, LinkSlot>,
    node_index: HashMap<String, NodeKey>,
    link_index: HashMap<String, LinkKey>,
}

impl Adjacency {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Registers a node. Returns `false` if the id is already taken.
    pub fn add_node(&mut self, id: &str) -> bool {
        if self.contains_node(id) {
            return false;
        }
        let key = self.nodes.insert(NodeSlot {
            id: id.to_owned(),
            links: Vec::new(),
        });
        self.node_index.insert(id.to_owned(), key);
        true
    }

    /// Removes a node together with every link touching it.
    ///
    /// Returns the ids of the removed links, or `None` if the node is unknown.
    pub fn remove_node(&mut self, id: &str) -> Option<Vec<String>> {
        let key = self.node_index.remove(id)?;
        let slot = self.nodes.remove(key)?;
        let mut removed = Vec::with_capacity(slot.links.len());
        for link_key in slot.links {
            if let Some(link) = self.detach_link(link_key) {
                removed.push(link.id);
            }
        }
        Some(removed)
    }

    /// Registers a directed link between two known nodes.
    ///
    /// Returns `false` if the link id is taken or either node is unknown.
    pub fn add_link(&mut self, id: &str, from: &str, to: &str) -> bool {
        if self.link_index.contains_key(id) {
            return false;
        }
        let (Some(&from_key), Some(&to_key)) = (self.node_index.get(from), self.node_index.get(to))
        else {
            return false;
        };
        let key = self.links.insert(LinkSlot {
            id: id.to_owned(),
            from: from_key,
            to: to_key,
        });
        self.link_index.insert(id.to_owned(), key);
        if let Some(slot) = self.nodes.get_mut(from_key) {
            slot.links.push(key);
        }
        if to_key != from_key {
            if let Some(slot) = self.nodes.get_mut(to_key) {
                slot.links.push(key);
            }
        }
        true
    }

    /// Removes a link. Returns `false` if it was not registered.
    pub fn remove_link(&mut self, id: &str) -> bool {
        match self.link_index.get(id).copied() {
            Some(key) => self.detach_link(key).is_some(),
            None => false,
        }
    }

    /// Id of the first link connecting `a` and `b` in either direction.
    #[must_use]
    pub fn link_between(&self, a: &str, b: &str) -> Option<&str> {
        let (a_key, b_key) = self.keys(a, b)?;
        self.nodes[a_key]
            .links
            .iter()
            .map(|&k| &self.links[k])
            .find(|l| (l.from == a_key && l.to == b_key) || (l.from == b_key && l.to == a_key))
            .map(|l| l.id.as_str())
    }

    /// Id of the link running exactly `from -> to`.
    #[must_use]
    pub fn directed_link(&self, from: &str, to: &str) -> Option<&str> {
        let (from_key, to_key) = self.keys(from, to)?;
        self.nodes[from_key]
            .links
            .iter()
            .map(|&k| &self.links[k])
            .find(|l| l.from == from_key && l.to == to_key)
            .map(|l| l.id.as_str())
    }

    /// Ids of the links touching a node, in insertion order.
    pub fn incident_links<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.node_index
            .get(id)
            .and_then(|&k| self.nodes.get(k))
            .into_iter()
            .flat_map(|slot| slot.links.iter())
            .map(move |&k| self.links[k].id.as_str())
    }

    fn keys(&self, a: &str, b: &str) -> Option<(NodeKey, NodeKey)> {
        Some((*self.node_index.get(a)?, *self.node_index.get(b)?))
    }

    fn detach_link(&mut self, key: LinkKey) -> Option<LinkSlot> {
        let link = self.links.remove(key)?;
        self.link_index.remove(&link.id);
        for node_key in [link.from, link.to] {
            if let Some(slot) = self.nodes.get_mut(node_key) {
                slot.links.retain(|&k| k != key);
            }
        }
        Some(link)
    }
}
