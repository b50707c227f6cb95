use std::cmp::Ordering;
use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use redblack_bst::{Error, NodeRef, OrderedTree, SearchTree};
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Collects keys in order by walking the node links.
fn in_order<K: Copy, V>(node: Option<NodeRef<'_, K, V, ()>>, keys: &mut Vec<K>) {
    if let Some(node) = node {
        in_order(node.left(), keys);
        keys.push(*node.key());
        in_order(node.right(), keys);
    }
}

fn keys_of<K: Copy, V>(tree: &SearchTree<K, V>) -> Vec<K> {
    let mut keys = Vec::new();
    in_order(tree.root(), &mut keys);
    keys
}

fn key_of<K: Copy, V>(node: Option<NodeRef<'_, K, V, ()>>) -> Option<K> {
    node.map(|node| *node.key())
}

/// Two versions with different majors are not comparable.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Version {
    major: u32,
    minor: u32,
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.major == other.major {
            self.minor.partial_cmp(&other.minor)
        } else {
            None
        }
    }
}

fn sample() -> SearchTree<i32, String> {
    let mut tree = SearchTree::new();
    for key in [50, 20, 10, 25, 70, 80, 60, 65, 62] {
        tree.insert(key, format!("v{key}")).unwrap();
    }
    tree
}

// ─── Structure ──────────────────────────────────────────────────────────────

#[test]
fn insert_places_keys_by_comparison() {
    let tree = sample();
    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 50);
    assert_eq!(key_of(root.left()), Some(20));
    assert_eq!(key_of(root.right()), Some(70));

    let sixty_five = tree.get(&65).unwrap().unwrap();
    assert_eq!(key_of(sixty_five.parent()), Some(60));
    assert_eq!(key_of(sixty_five.left()), Some(62));
    assert_eq!(key_of(sixty_five.right()), None);
    assert_eq!(keys_of(&tree), [10, 20, 25, 50, 60, 62, 65, 70, 80]);
}

#[test]
fn sorted_inserts_degrade_to_a_chain() {
    let mut tree = SearchTree::new();
    for key in 0..16 {
        tree.insert(key, ()).unwrap();
    }
    let mut node = tree.root();
    let mut depth = 0;
    while let Some(current) = node {
        assert!(current.left().is_none());
        node = current.right();
        depth += 1;
    }
    assert_eq!(depth, 16);
}

#[test]
fn remove_two_children_uses_left_maximum() {
    init_logging();
    let mut tree = sample();

    assert_eq!(tree.remove(&20).unwrap(), Some((20, "v20".to_string())));
    let ten = tree.get(&10).unwrap().unwrap();
    assert_eq!(key_of(ten.right()), Some(25));
    assert_eq!(key_of(ten.left()), None);
    assert_eq!(key_of(ten.parent()), Some(50));

    assert_eq!(tree.remove(&70).unwrap(), Some((70, "v70".to_string())));
    let sixty_five = tree.get(&65).unwrap().unwrap();
    assert_eq!(key_of(sixty_five.left()), Some(60));
    assert_eq!(key_of(sixty_five.right()), Some(80));
    assert_eq!(key_of(sixty_five.parent()), Some(50));
    assert_eq!(key_of(tree.get(&60).unwrap().unwrap().right()), Some(62));

    assert_eq!(keys_of(&tree), [10, 25, 50, 60, 62, 65, 80]);
    assert_eq!(tree.len(), 7);
}

#[test]
fn remove_leaf_and_single_child() {
    let mut tree = sample();

    assert_eq!(tree.remove(&62).unwrap().map(|(key, _)| key), Some(62));
    assert_eq!(key_of(tree.get(&65).unwrap().unwrap().left()), None);

    // 60 now has only its right child 65.
    assert_eq!(tree.remove(&60).unwrap().map(|(key, _)| key), Some(60));
    let seventy = tree.get(&70).unwrap().unwrap();
    assert_eq!(key_of(seventy.left()), Some(65));
    assert_eq!(key_of(seventy.left().and_then(|node| node.parent())), Some(70));
}

#[test]
fn remove_root_until_empty() {
    let mut tree = sample();
    let mut expected = keys_of(&tree);
    while let Some(root) = key_of(tree.root()) {
        assert_eq!(tree.remove(&root).unwrap().map(|(key, _)| key), Some(root));
        expected.retain(|&key| key != root);
        assert_eq!(keys_of(&tree), expected);
        assert!(tree.root().is_none_or(|node| node.parent().is_none()));
    }
    assert!(tree.is_empty());
}

#[test]
fn remove_missing_key_is_not_an_error() {
    let mut tree = sample();
    assert_eq!(tree.remove(&51).unwrap(), None);
    assert_eq!(tree.len(), 9);

    let mut empty: SearchTree<i32, ()> = SearchTree::new();
    assert_eq!(empty.remove(&1).unwrap(), None);
}

// ─── Lookups ────────────────────────────────────────────────────────────────

#[test]
fn min_and_max_boundaries() {
    let mut tree = SearchTree::new();
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);

    tree.insert(5, 'x').unwrap();
    assert_eq!(tree.min(), Some((&5, &'x')));
    assert_eq!(tree.max(), Some((&5, &'x')));

    let tree = sample();
    assert_eq!(tree.min().map(|(key, _)| *key), Some(10));
    assert_eq!(tree.max().map(|(key, _)| *key), Some(80));

    let seventy = tree.get(&70).unwrap().unwrap();
    assert_eq!(*seventy.subtree_min().key(), 60);
    assert_eq!(*seventy.subtree_max().key(), 80);
}

#[test]
fn insert_overwrites_and_chains() {
    let mut tree = SearchTree::new();
    tree.insert("b", 1).unwrap().insert("a", 2).unwrap().insert("b", 3).unwrap();

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.get("b").unwrap().map(|node| *node.value()), Some(3));
    assert_eq!(tree.replace("a", 4).unwrap(), Some(2));
    assert_eq!(tree.replace("c", 5).unwrap(), None);

    *tree.get_mut("c").unwrap().unwrap() += 10;
    assert_eq!(tree.get("c").unwrap().map(|node| *node.value()), Some(15));
    assert!(tree.has("a").unwrap());
    assert!(!tree.has("z").unwrap());
}

#[test]
fn string_keys_borrow_as_str() {
    let mut tree = SearchTree::new();
    tree.insert(String::from("pear"), 1).unwrap();
    tree.insert(String::from("apple"), 2).unwrap();
    assert!(tree.has("pear").unwrap());
    assert_eq!(tree.remove("apple").unwrap(), Some((String::from("apple"), 2)));
}

// ─── Invalid keys ───────────────────────────────────────────────────────────

#[test]
fn nan_keys_are_rejected() {
    let mut tree = SearchTree::new();
    tree.insert(1.0, "one").unwrap().insert(-1.0, "minus one").unwrap();

    assert_eq!(tree.insert(f64::NAN, "nan").err(), Some(Error::InvalidKey));
    assert_eq!(tree.get(&f64::NAN).err(), Some(Error::InvalidKey));
    assert_eq!(tree.has(&f64::NAN), Err(Error::InvalidKey));
    assert_eq!(tree.remove(&f64::NAN), Err(Error::InvalidKey));
    assert_eq!(tree.get_mut(&f64::NAN), Err(Error::InvalidKey));

    assert_eq!(tree.len(), 2);
    assert_eq!(keys_of(&tree), [-1.0, 1.0]);
}

#[test]
fn incomparable_keys_leave_tree_unchanged() {
    let v1_0 = Version { major: 1, minor: 0 };
    let v1_1 = Version { major: 1, minor: 1 };
    let v2_0 = Version { major: 2, minor: 0 };

    let mut tree = SearchTree::new();
    tree.insert(v1_0, ()).unwrap().insert(v1_1, ()).unwrap();

    assert_eq!(tree.insert(v2_0, ()).err(), Some(Error::InvalidKey));
    assert_eq!(tree.remove(&v2_0), Err(Error::InvalidKey));
    assert_eq!(keys_of(&tree), [v1_0, v1_1]);

    // Nothing to compare against: an empty tree accepts any self-comparable key.
    let mut other = SearchTree::new();
    assert!(other.insert(v2_0, ()).is_ok());
}

// ─── Collection surface ─────────────────────────────────────────────────────

#[test]
fn clear_clone_default_debug() {
    let mut tree = sample();
    let copy = tree.clone();
    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert_eq!(copy.len(), 9);
    assert_eq!(keys_of(&copy), [10, 20, 25, 50, 60, 62, 65, 70, 80]);

    let empty: SearchTree<u8, u8> = SearchTree::default();
    assert_eq!(format!("{empty:?}"), "{}");

    let mut small = SearchTree::new();
    small.insert(2u8, 'b').unwrap().insert(1, 'a').unwrap().insert(3, 'c').unwrap();
    assert_eq!(format!("{small:?}"), "{1: 'a', 2: 'b', 3: 'c'}");
    assert_eq!(
        format!("{:?}", small.root().unwrap()),
        "Node { key: 2, value: 'b', color: (), parent: None, left: Some(1), right: Some(3) }"
    );
    assert_eq!(
        format!("{:?}", small.get(&3).unwrap().unwrap()),
        "Node { key: 3, value: 'c', color: (), parent: Some(2), left: None, right: None }"
    );
}

#[test]
fn debug_of_a_long_chain_is_flat() {
    let mut tree = SearchTree::new();
    for key in 0..20_000u32 {
        tree.insert(key, ()).unwrap();
    }
    let rendered = format!("{tree:?}");
    assert!(rendered.starts_with("{0: (), 1: (), 2: ()"));
    assert!(rendered.ends_with("19999: ()}"));
    assert_eq!(rendered.matches(": ()").count(), 20_000);

    let deepest = tree.get(&19_999).unwrap().unwrap();
    assert_eq!(
        format!("{deepest:?}"),
        "Node { key: 19999, value: (), color: (), parent: Some(19998), left: None, right: None }"
    );
}

#[test]
fn usable_through_the_trait() {
    fn exercise<T: OrderedTree<i32, i32>>(tree: &mut T) -> redblack_bst::Result<Option<(i32, i32)>> {
        tree.insert(3, 30)?.insert(1, 10)?.insert(2, 20)?;
        assert!(tree.has(&2)?);
        assert_eq!(tree.get(&1)?.map(|node| *node.value()), Some(10));
        assert_eq!(tree.min(), Some((&1, &10)));
        assert_eq!(tree.max(), Some((&3, &30)));
        tree.remove(&3)
    }

    let mut tree = SearchTree::new();
    assert_eq!(exercise(&mut tree), Ok(Some((3, 30))));
    assert_eq!(keys_of(&tree), [1, 2]);
}

// ─── Model checking ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Insert(i16, u32),
    Remove(i16),
    Get(i16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        5 => (-300i16..300, any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        3 => (-300i16..300).prop_map(Op::Remove),
        2 => (-300i16..300).prop_map(Op::Get),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn matches_btreemap(ops in proptest::collection::vec(op_strategy(), 0..1_000)) {
        let mut tree = SearchTree::new();
        let mut model = BTreeMap::new();

        for op in &ops {
            match *op {
                Op::Insert(k, v) => {
                    prop_assert_eq!(tree.replace(k, v).unwrap(), model.insert(k, v), "insert({})", k);
                }
                Op::Remove(k) => {
                    prop_assert_eq!(tree.remove(&k).unwrap(), model.remove_entry(&k), "remove({})", k);
                }
                Op::Get(k) => {
                    prop_assert_eq!(tree.get(&k).unwrap().map(|node| *node.value()), model.get(&k).copied());
                    prop_assert_eq!(tree.has(&k).unwrap(), model.contains_key(&k));
                }
            }
            prop_assert_eq!(tree.len(), model.len());
            prop_assert_eq!(tree.min(), model.first_key_value());
            prop_assert_eq!(tree.max(), model.last_key_value());
        }

        let keys: Vec<_> = model.keys().copied().collect();
        prop_assert_eq!(keys_of(&tree), keys);
    }

    #[test]
    fn in_order_is_strictly_increasing(keys in proptest::collection::vec(any::<i32>(), 0..500)) {
        let mut tree = SearchTree::new();
        for &key in &keys {
            tree.insert(key, ()).unwrap();
        }
        let walked = keys_of(&tree);
        prop_assert!(walked.windows(2).all(|pair| pair[0] < pair[1]));
        for key in keys {
            prop_assert!(tree.has(&key).unwrap());
        }
    }
}
