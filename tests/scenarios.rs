use intbst::{iterative, Key, Node, Tree};

const DATA: [Key; 11] = [1, 4, 5, 10, 12, 17, 19, 21, 29, 33, 37];

fn keys(tree: &Tree) -> Vec<Key> {
    let mut keys = Vec::new();
    tree.walk(|key| keys.push(key));
    keys
}

fn scenario_b_tree() -> Tree {
    let mut tree = Tree::from_sorted(&DATA);
    for key in [3, 18, 31] {
        assert!(tree.add(key).is_some(), "{} should be new", key);
    }
    tree
}

#[test]
fn built_tree_walks_in_input_order() {
    let tree = Tree::from_sorted(&DATA);

    assert_eq!(keys(&tree), DATA);
    assert_eq!(tree.to_string(), "1 4 5 10 12 17 19 21 29 33 37");
    assert_eq!(tree.height(), 4);
}

#[test]
fn added_keys_land_in_order() {
    let tree = scenario_b_tree();

    assert_eq!(
        tree.to_string(),
        "1 3 4 5 10 12 17 18 19 21 29 31 33 37"
    );
}

#[test]
fn contains_reports_exactly_present_keys() {
    let tree = scenario_b_tree();
    let present = keys(&tree);

    let found: Vec<Key> = (0..50).filter(|&k| tree.contains(k).is_some()).collect();
    assert_eq!(found, present);

    let found: Vec<Key> = (0..50)
        .filter(|&k| iterative::contains(&tree, k).is_some())
        .collect();
    assert_eq!(found, present);
}

#[test]
fn range_search_on_built_tree() {
    let tree = Tree::from_sorted(&DATA);
    let mut result = Vec::new();
    tree.range_search(11, 30, &mut result);

    assert_eq!(result, vec![12, 17, 19, 21, 29]);
    assert_eq!(tree.range(11, 30).collect::<Vec<_>>(), result);
}

#[test]
fn adding_present_key_is_refused() {
    let mut tree = Tree::from_sorted(&DATA);
    let before = tree.clone();

    assert!(tree.add(10).is_none());
    assert!(iterative::add(&mut tree, 10).is_none());
    assert_eq!(keys(&tree), DATA);
    assert_eq!(tree, before);
}

#[test]
fn added_node_is_a_leaf_under_the_right_parent() {
    let mut tree = Tree::from_sorted(&DATA);
    // 18 goes right of 17 (root), left of 29, left of 19.
    let added = tree.add(18).map(|n| (n.key(), n.is_leaf()));
    assert_eq!(added, Some((18, true)));

    let nineteen = tree.contains(19).unwrap();
    assert_eq!(nineteen.left().root().map(Node::key), Some(18));
}
