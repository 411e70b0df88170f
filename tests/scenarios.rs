use huffman::{
    FreqTable, HuffmanError, HuffmanTree, Node, build_code, build_code_table, build_huffman_tree,
    decode, decode_to_string, encode, encode_str, to_bit_string,
};

#[test]
fn hello_world() {
    let text = "hello world";
    let freq = FreqTable::from_symbols(text.chars());
    for (symbol, count) in [
        ('h', 1),
        ('e', 1),
        ('l', 3),
        ('o', 2),
        (' ', 1),
        ('w', 1),
        ('r', 1),
        ('d', 1),
    ] {
        assert_eq!(freq.get(&symbol), count, "count of {:?}", symbol);
    }
    assert_eq!(freq.len(), 8);

    let (tree, table) = build_code(text.chars()).unwrap();
    let shortest_rare = ['h', 'e', ' ', 'w', 'r', 'd']
        .iter()
        .map(|c| table.get(c).unwrap().len())
        .min()
        .unwrap();
    assert!(table.get(&'l').unwrap().len() <= shortest_rare);
    assert!(table.get(&'o').unwrap().len() <= shortest_rare);

    let bits = encode_str(text, &table).unwrap();
    assert!(bits.len() < 11 * 8);
    assert_eq!(bits.len(), 32);
    assert_eq!(decode_to_string(&bits, &tree).unwrap(), text);
}

#[test]
fn single_symbol_gets_one_bit_code() {
    let (tree, table) = build_code("aaaa".chars()).unwrap();
    let code = table.get(&'a').unwrap();
    assert_eq!(code.len(), 1);

    let bits = encode_str("aaaa", &table).unwrap();
    assert_eq!(to_bit_string(&bits), "0000");
    assert_eq!(decode_to_string(&bits, &tree).unwrap(), "aaaa");
}

#[test]
fn empty_input_has_no_alphabet() {
    assert_eq!(
        build_code("".chars()).unwrap_err(),
        HuffmanError::EmptyAlphabet
    );
}

#[test]
fn foreign_symbol_is_unknown() {
    let (_, table) = build_code("abc".chars()).unwrap();
    let err = encode_str("cab!", &table).unwrap_err();
    assert!(matches!(err, HuffmanError::UnknownSymbol { position: 3, .. }));
}

#[test]
fn sharded_counts_build_the_same_tree() {
    let text = "it was the best of times, it was the worst of times";
    let (head, tail) = text.split_at(20);

    let mut merged = FreqTable::from_symbols(head.chars());
    merged.merge(&FreqTable::from_symbols(tail.chars())).unwrap();

    let whole = FreqTable::from_symbols(text.chars());
    assert_eq!(
        build_huffman_tree(&merged).unwrap(),
        build_huffman_tree(&whole).unwrap()
    );
}

#[test]
fn externally_rebuilt_tree_decodes() {
    // A tree as a caller might reassemble it from a transmitted form.
    let root = Node::internal(
        Node::leaf(b'x', 5),
        Node::internal(Node::leaf(b'y', 2), Node::leaf(b'z', 2)),
    );
    let tree = HuffmanTree::from_root(root).unwrap();
    let table = build_code_table(&tree).unwrap();

    let data = b"xyzzyx";
    let bits = encode(data, &table).unwrap();
    assert_eq!(to_bit_string(&bits), "0101111100");
    assert_eq!(decode(&bits, &tree).unwrap(), data.to_vec());
}

#[test]
fn oversized_weights_are_caller_errors() {
    let err = FreqTable::from_weights(vec![('a', u64::MAX), ('b', 1)]).unwrap_err();
    assert_eq!(err, HuffmanError::WeightOverflow);
    assert!(!err.is_internal());

    let mut shard = FreqTable::from_weights(vec![('a', u64::MAX)]).unwrap();
    assert_eq!(
        shard.merge(&FreqTable::from_symbols("a".chars())),
        Err(HuffmanError::WeightOverflow)
    );

    let root = Node::internal(Node::leaf('a', u64::MAX), Node::leaf('b', u64::MAX));
    assert_eq!(HuffmanTree::from_root(root), Err(HuffmanError::WeightOverflow));
}

#[test]
fn corrupt_tree_is_internal_error() {
    let root = Node::Internal {
        freq: 1,
        left: Box::new(Node::leaf('a', 1)),
        right: Box::new(Node::leaf('b', 1)),
    };
    let err = HuffmanTree::from_root(root).unwrap_err();
    assert!(err.is_internal());
}

#[test]
fn codes_from_different_input_fail_cleanly() {
    let (tree, _) = build_code("abcdefgh".chars()).unwrap();
    let (_, other) = build_code("ab".chars()).unwrap();
    // "a" under the second table is a single bit, a fragment in the first tree.
    let bits = encode_str("a", &other).unwrap();
    assert!(matches!(
        decode(&bits, &tree),
        Err(HuffmanError::TruncatedEncoding { decoded: 0, .. })
    ));
}
