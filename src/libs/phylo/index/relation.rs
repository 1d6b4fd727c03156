use super::RelationMap;
use crate::libs::phylo::error::Result;
use crate::libs::phylo::node::NodeId;
use crate::libs::phylo::tree::Tree;
use indexmap::IndexMap;

/// All nodes below `id`: each child followed by its own descendants.
pub fn descendants_of(tree: &Tree, id: NodeId) -> Result<Vec<NodeId>> {
    Ok(tree.preorder(id)?.into_iter().skip(1).collect())
}

/// Descendants of every genotype, each computed by its own walk.
pub fn descendant_index(tree: &Tree) -> Result<RelationMap> {
    let mut descendants = RelationMap::with_capacity(tree.node_ids().len());

    for name in tree.node_ids() {
        let ids = match tree.get_node_by_name(name) {
            Some(id) => descendants_of(tree, id)?,
            None => Vec::new(),
        };
        descendants.insert(name.clone(), names(tree, &ids));
    }

    Ok(descendants)
}

/// Ancestors of every genotype, by inverting the descendant index.
///
/// Each list is ordered by when its ancestors were scanned, not by depth.
pub fn ancestor_index(tree: &Tree, descendants: &RelationMap) -> RelationMap {
    let mut ancestors: RelationMap = tree
        .node_ids()
        .iter()
        .map(|name| (name.clone(), Vec::new()))
        .collect();

    for (node, descs) in descendants {
        for desc in descs {
            if let Some(list) = ancestors.get_mut(desc) {
                list.push(node.clone());
            }
        }
    }

    ancestors
}

/// Immediate children of every node reachable from the root.
pub fn direct_children_index(tree: &Tree) -> Result<RelationMap> {
    let mut children = RelationMap::new();

    for id in tree.preorder(tree.get_root())? {
        let node = &tree.nodes[id];
        children.insert(node.name.clone(), names(tree, &node.children));
    }

    Ok(children)
}

/// Immediate parent of every non-root node reachable from the root.
pub fn direct_parent_index(tree: &Tree) -> Result<IndexMap<String, String>> {
    let mut parents = IndexMap::new();

    for id in tree.preorder(tree.get_root())? {
        let node = &tree.nodes[id];
        for &child in &node.children {
            parents.insert(tree.name(child).to_string(), node.name.clone());
        }
    }

    Ok(parents)
}

/// Other members of each child group. Only children of nodes with two or
/// more children get an entry.
pub fn sibling_index(tree: &Tree) -> Result<RelationMap> {
    let mut siblings = RelationMap::new();

    for id in tree.preorder(tree.get_root())? {
        let group = names(tree, &tree.nodes[id].children);
        for (i, me) in group.iter().enumerate() {
            for (j, other) in group.iter().enumerate() {
                if i != j {
                    siblings
                        .entry(me.clone())
                        .or_insert_with(Vec::new)
                        .push(other.clone());
                }
            }
        }
    }

    Ok(siblings)
}

fn names(tree: &Tree, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|&id| tree.name(id).to_string()).collect()
}
