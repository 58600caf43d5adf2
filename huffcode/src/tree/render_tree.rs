use std::borrow::Cow;

use crate::tree::tree_node::HuffNode;

/// Flattened view of a [`HuffNode`] tree, renderable as a graphviz dot file.
pub struct TreeGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

#[derive(Debug, Clone)]
pub struct GraphNode {
    id: usize,
    symbol: Option<u8>,
    count: u32,
}

#[derive(Debug, Clone)]
pub struct GraphEdge {
    from: usize,
    to: usize,
    transition: u8, // 0 or 1
}

impl TreeGraph {
    pub fn new(root: &HuffNode) -> TreeGraph {
        let mut graph = TreeGraph {
            nodes: vec![],
            edges: vec![],
        };
        graph.add_node(root);
        graph
    }

    fn add_node(&mut self, node: &HuffNode) -> usize {
        let id = self.nodes.len();
        match node {
            HuffNode::Leaf { symbol, count } => {
                self.nodes.push(GraphNode {
                    id,
                    symbol: *symbol,
                    count: *count,
                });
            }
            HuffNode::Internal { count, left, right } => {
                self.nodes.push(GraphNode {
                    id,
                    symbol: None,
                    count: *count,
                });
                let left_id = self.add_node(left);
                self.edges.push(GraphEdge {
                    from: id,
                    to: left_id,
                    transition: 0,
                });
                let right_id = self.add_node(right);
                self.edges.push(GraphEdge {
                    from: id,
                    to: right_id,
                    transition: 1,
                });
            }
        }
        id
    }

    pub fn to_dot(&self) -> String {
        let mut out = Vec::new();
        // writing into a Vec cannot fail
        dot::render(self, &mut out).unwrap();
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl std::fmt::Display for TreeGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_dot())
    }
}

impl<'a> dot::Labeller<'a, GraphNode, GraphEdge> for TreeGraph {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("huffman").unwrap()
    }

    fn node_id(&'a self, n: &GraphNode) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n.id)).unwrap()
    }

    fn node_label(&'a self, n: &GraphNode) -> dot::LabelText<'a> {
        let out = if let Some(symbol) = n.symbol {
            format!("Cnt:{:?} Symbl:{:?}", n.count, symbol)
        } else {
            format!("Cnt:{:?}", n.count)
        };
        dot::LabelText::LabelStr(out.into())
    }

    fn edge_label(&'a self, ed: &GraphEdge) -> dot::LabelText<'a> {
        dot::LabelText::LabelStr(ed.transition.to_string().into())
    }
}

impl<'a> dot::GraphWalk<'a, GraphNode, GraphEdge> for TreeGraph {
    fn nodes(&'a self) -> dot::Nodes<'a, GraphNode> {
        Cow::Borrowed(&self.nodes)
    }

    fn edges(&'a self) -> dot::Edges<'a, GraphEdge> {
        Cow::Borrowed(&self.edges)
    }

    fn source(&'a self, e: &GraphEdge) -> GraphNode {
        self.nodes[e.from].clone()
    }

    fn target(&'a self, e: &GraphEdge) -> GraphNode {
        self.nodes[e.to].clone()
    }
}
