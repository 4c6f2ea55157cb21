use crate::cairn_assert_simple;

/// Answers lowest common ancestor queries in constant time over the depth-first search tree of a
/// directed graph.
///
/// The preprocessing is linear in the size of the graph and follows the algorithm of Schieber and
/// Vishkin \[1\] as described by Gusfield \[2\]. The nodes are numbered `1..=n` in depth-first
/// order, and every node `v` is mapped onto the node `I(v)` of a complete binary tree (labelled
/// in-order) such that the nodes which share a label form a path in the search tree, a _run_.
/// The bits of `A(v)` record the heights of the runs on the path from the root to `v`; a query
/// then only needs a constant number of bit operations.
///
/// The structure is not incremental: it has to be rebuilt whenever the graph changes.
///
/// # Bibliography
/// \[1\] B. Schieber and U. Vishkin, ‘On finding lowest common ancestors: Simplification and
/// parallelization’, SIAM Journal on Computing, vol. 17, no. 6, pp. 1253–1262, 1988.
///
/// \[2\] D. Gusfield, ‘Algorithms on strings, trees, and sequences’, Cambridge University Press,
/// 1997, chapter 8.
#[derive(Clone, Debug)]
pub struct LowestCommonAncestor {
    /// The depth-first number of every node, 0 for nodes which are not reachable from the root.
    number: Vec<usize>,
    /// The following are indexed by depth-first number; index 0 is unused.
    node_of_number: Vec<usize>,
    parent: Vec<usize>,
    /// The in-order label of the run containing the node.
    run: Vec<usize>,
    /// The head of the run with the given label, i.e. the node closest to the root.
    head: Vec<usize>,
    /// The heights of the runs which are traversed on the path from the root.
    ancestor_heights: Vec<usize>,
}

impl LowestCommonAncestor {
    /// Builds the structure for the search tree rooted in `root`; `successors[v]` lists the
    /// successors of node `v`.
    pub fn new(root: usize, successors: &[Vec<usize>]) -> Self {
        cairn_assert_simple!(root < successors.len(), "the root has to be a node of the graph");

        let num_nodes = successors.len();
        let mut number = vec![0; num_nodes];
        let mut node_of_number = vec![0; num_nodes + 1];
        let mut parent = vec![0; num_nodes + 1];

        // Iterative depth-first search; the stack holds the node and the next successor to visit
        let mut next_number = 1;
        number[root] = next_number;
        node_of_number[next_number] = root;
        parent[next_number] = next_number;

        let mut stack = vec![(root, 0)];
        while let Some((node, next_successor)) = stack.last_mut() {
            let Some(&successor) = successors[*node].get(*next_successor) else {
                let _ = stack.pop();
                continue;
            };
            *next_successor += 1;

            if number[successor] == 0 {
                next_number += 1;
                number[successor] = next_number;
                node_of_number[next_number] = successor;
                parent[next_number] = number[*node];
                stack.push((successor, 0));
            }
        }

        let num_reached = next_number;

        // Bottom-up: the run label of `v` is the label with the largest height in its subtree
        let mut run = (0..=num_reached).collect::<Vec<_>>();
        let mut head = vec![0; num_reached + 1];
        for v in (1..=num_reached).rev() {
            head[run[v]] = v;

            let p = parent[v];
            if p != v && height(run[v]) > height(run[p]) {
                run[p] = run[v];
            }
        }

        // Top-down: depth-first numbers of parents are smaller than those of their children
        let mut ancestor_heights = vec![0; num_reached + 1];
        for v in 1..=num_reached {
            let own = 1 << height(run[v]);
            ancestor_heights[v] = if parent[v] == v {
                own
            } else {
                ancestor_heights[parent[v]] | own
            };
        }

        LowestCommonAncestor {
            number,
            node_of_number,
            parent,
            run,
            head,
            ancestor_heights,
        }
    }

    /// The parent of `node` in the search tree; the root is its own parent.
    pub fn parent_of(&self, node: usize) -> Option<usize> {
        let number = self.number_of(node)?;
        Some(self.node_of_number[self.parent[number]])
    }

    /// Returns the lowest common ancestor of `x` and `y` in the search tree, or [`None`] if
    /// either of them is not reachable from the root.
    pub fn query(&self, x: usize, y: usize) -> Option<usize> {
        let x = self.number_of(x)?;
        let y = self.number_of(y)?;

        if x == y || x == self.parent[y] {
            return Some(self.node_of_number[x]);
        }
        if y == self.parent[x] {
            return Some(self.node_of_number[y]);
        }

        // The height of the lowest common ancestor of both runs in the binary tree
        let (run_x, run_y) = (self.run[x], self.run[y]);
        let mut lowest_height = height(run_x).max(height(run_y));
        if run_x != run_y {
            lowest_height = lowest_height.max(highest_bit(run_x ^ run_y));
        }

        // The height of the run containing the answer
        let common = (self.ancestor_heights[x] & self.ancestor_heights[y]) >> lowest_height;
        cairn_assert_simple!(common != 0, "both nodes share the run of the root");
        let run_height = lowest_height + height(common);

        let closest_x = self.closest_on_run(x, run_height);
        let closest_y = self.closest_on_run(y, run_height);

        Some(self.node_of_number[closest_x.min(closest_y)])
    }

    fn number_of(&self, node: usize) -> Option<usize> {
        self.number.get(node).copied().filter(|&number| number != 0)
    }

    /// Returns the ancestor of `v` which lies on the run at height `run_height`, closest to `v`.
    fn closest_on_run(&self, v: usize, run_height: usize) -> usize {
        let heights = self.ancestor_heights[v];
        if height(heights) == run_height {
            return v;
        }

        // The run entered last before reaching `v`, below the target run
        let below = highest_bit(heights & ((1 << run_height) - 1));
        let label = ((self.run[v] >> (below + 1)) << (below + 1)) | (1 << below);

        self.parent[self.head[label]]
    }
}

/// The height of an in-order label in the complete binary tree: its lowest set bit.
fn height(label: usize) -> usize {
    label.trailing_zeros() as usize
}

fn highest_bit(value: usize) -> usize {
    (usize::BITS - 1 - value.leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::Rng;
    use rand::SeedableRng;

    use super::*;

    fn binary_tree() -> Vec<Vec<usize>> {
        //        0
        //      /   \
        //     1     2
        //    / \   / \
        //   3   4 5   6
        vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![], vec![], vec![], vec![]]
    }

    #[test]
    fn queries_on_a_binary_tree() {
        let lca = LowestCommonAncestor::new(0, &binary_tree());

        assert_eq!(Some(1), lca.query(3, 4));
        assert_eq!(Some(0), lca.query(3, 5));
        assert_eq!(Some(2), lca.query(5, 6));
        assert_eq!(Some(0), lca.query(4, 6));
        assert_eq!(Some(1), lca.query(1, 4));
        assert_eq!(Some(0), lca.query(0, 6));
        assert_eq!(Some(3), lca.query(3, 3));
    }

    #[test]
    fn parents_follow_the_search_tree() {
        let lca = LowestCommonAncestor::new(0, &binary_tree());

        assert_eq!(Some(0), lca.parent_of(0));
        assert_eq!(Some(1), lca.parent_of(4));
        assert_eq!(Some(2), lca.parent_of(5));
    }

    #[test]
    fn unreachable_nodes_have_no_ancestor() {
        let mut graph = binary_tree();
        graph.push(vec![0]);

        let lca = LowestCommonAncestor::new(0, &graph);

        assert_eq!(None, lca.query(7, 3));
        assert_eq!(None, lca.query(3, 7));
        assert_eq!(None, lca.query(3, 100));
    }

    #[test]
    fn edges_outside_the_search_tree_are_ignored() {
        // 0 -> 1 -> 2 -> 3 and 0 -> 3, 3 -> 0; the search reaches 3 through 2 first
        let graph = vec![vec![1, 3], vec![2], vec![3], vec![0]];

        let lca = LowestCommonAncestor::new(0, &graph);

        assert_eq!(Some(2), lca.parent_of(3));
        assert_eq!(Some(1), lca.query(1, 3));
        assert_eq!(Some(2), lca.query(3, 2));
    }

    #[test]
    fn random_trees_agree_with_walking_up() {
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..20 {
            let num_nodes = rng.gen_range(2..200);
            let mut parents = vec![0];
            let mut successors = vec![vec![]; num_nodes];
            for node in 1..num_nodes {
                let parent = rng.gen_range(0..node);
                parents.push(parent);
                successors[parent].push(node);
            }

            let depth = |mut node: usize| {
                let mut depth = 0;
                while node != 0 {
                    node = parents[node];
                    depth += 1;
                }
                depth
            };
            let naive = |mut x: usize, mut y: usize| {
                let (mut depth_x, mut depth_y) = (depth(x), depth(y));
                while depth_x > depth_y {
                    x = parents[x];
                    depth_x -= 1;
                }
                while depth_y > depth_x {
                    y = parents[y];
                    depth_y -= 1;
                }
                while x != y {
                    x = parents[x];
                    y = parents[y];
                }
                x
            };

            let lca = LowestCommonAncestor::new(0, &successors);
            for x in 0..num_nodes {
                for y in 0..num_nodes {
                    assert_eq!(Some(naive(x, y)), lca.query(x, y), "query({x}, {y})");
                }
            }
        }
    }
}
