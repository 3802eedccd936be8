//! Core scanner tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use erl_syntax::{is_eunit_imported, Interner, NodeKind, SourceFile};
use pretty_assertions::assert_eq;

use super::scan;
use crate::{scan_file, scan_source, ScanError};

#[test]
fn module_export_and_function() {
    let (tree, interner) = scan(
        "-module(math_tests).\n\
         -export([add_test/0]).\n\
         add_test() -> ok.\n",
    );

    let forms: Vec<NodeKind> = tree
        .children(tree.root())
        .iter()
        .map(|&c| tree.kind(c))
        .collect();
    assert_eq!(forms.len(), 3);

    let NodeKind::ModuleAttr { name } = forms[0] else {
        panic!("expected module attribute, got {:?}", forms[0]);
    };
    assert_eq!(interner.lookup(name), Some("math_tests"));

    assert!(matches!(forms[1], NodeKind::ExportAttr));
    let export = tree.children(tree.root())[1];
    let entries: Vec<NodeKind> = tree
        .children(export)
        .iter()
        .map(|&c| tree.kind(c))
        .collect();
    assert_eq!(entries.len(), 1);
    let NodeKind::NameArity { name, arity } = entries[0] else {
        panic!("expected name/arity entry");
    };
    assert_eq!(interner.lookup(name), Some("add_test"));
    assert_eq!(arity, 0);

    let NodeKind::Function { name, arity } = forms[2] else {
        panic!("expected function, got {:?}", forms[2]);
    };
    assert_eq!(interner.lookup(name), Some("add_test"));
    assert_eq!(arity, 0);
}

#[test]
fn arity_counts_top_level_commas_only() {
    let (tree, _) = scan("pair({A, B}, [C, D], <<E, F>>) -> ok.\n");
    let func = tree.functions().next().expect("one function");
    assert_eq!(func.arity(), 3);
}

#[test]
fn zero_arity() {
    let (tree, _) = scan("go() -> done.\n");
    let func = tree.functions().next().expect("one function");
    assert_eq!(func.arity(), 0);
}

#[test]
fn multi_clause_function_is_one_node() {
    let (tree, interner) = scan("fact(0) -> 1;\nfact(N) -> N * fact(N - 1).\n");
    let funcs: Vec<_> = tree.functions().collect();
    assert_eq!(funcs.len(), 1);
    assert_eq!(funcs[0].arity(), 1);
    assert_eq!(interner.lookup(funcs[0].name()), Some("fact"));

    // The recursive call in the second clause hangs off the same node
    let calls: Vec<NodeKind> = tree
        .children(funcs[0].id())
        .iter()
        .map(|&c| tree.kind(c))
        .collect();
    assert!(calls
        .iter()
        .any(|k| matches!(k, NodeKind::Call { name } if interner.lookup(*name) == Some("fact"))));
}

#[test]
fn remote_call_children_are_module_ref_and_call() {
    let (tree, interner) = scan("greet() -> io:format(\"hi\").\n");
    let func = tree.functions().next().expect("one function");
    let remote_id = tree.children(func.id())[0];
    let remote = tree.remote_call(remote_id).expect("a remote call");

    let module_ref = remote.module_ref().expect("module ref child");
    let call = remote.call().expect("call child");
    assert_eq!(interner.lookup(module_ref.name()), Some("io"));
    assert_eq!(interner.lookup(call.name()), Some("format"));
}

#[test]
fn include_lib_attribute() {
    let (tree, interner) = scan("-include_lib(\"eunit/include/eunit.hrl\").\n");
    let attr = tree.children(tree.root())[0];
    let NodeKind::IncludeAttr { path, lib } = tree.kind(attr) else {
        panic!("expected include attribute");
    };
    assert!(lib);
    assert_eq!(interner.lookup(path), Some("eunit/include/eunit.hrl"));
}

#[test]
fn plain_include_attribute() {
    let (tree, _) = scan("-include(\"records.hrl\").\n");
    let attr = tree.children(tree.root())[0];
    assert!(matches!(
        tree.kind(attr),
        NodeKind::IncludeAttr { lib: false, .. }
    ));
}

#[test]
fn import_attribute_with_entries() {
    let (tree, interner) = scan("-import(lists, [map/2, reverse/1]).\n");
    let attr = tree.children(tree.root())[0];
    let NodeKind::ImportAttr { module } = tree.kind(attr) else {
        panic!("expected import attribute");
    };
    assert_eq!(interner.lookup(module), Some("lists"));

    let arities: Vec<u32> = tree
        .children(attr)
        .iter()
        .filter_map(|&c| match tree.kind(c) {
            NodeKind::NameArity { arity, .. } => Some(arity),
            _ => None,
        })
        .collect();
    assert_eq!(arities, vec![2, 1]);
}

#[test]
fn unknown_attributes_are_wild() {
    let (tree, interner) = scan(
        "-behaviour(gen_server).\n\
         -spec add(integer(), integer()) -> integer().\n",
    );
    let forms: Vec<NodeKind> = tree
        .children(tree.root())
        .iter()
        .map(|&c| tree.kind(c))
        .collect();
    assert_eq!(forms.len(), 2);
    let NodeKind::WildAttr { name } = forms[0] else {
        panic!("expected wild attribute");
    };
    assert_eq!(interner.lookup(name), Some("behaviour"));
    assert!(matches!(forms[1], NodeKind::WildAttr { .. }));
}

#[test]
fn malformed_export_degrades_to_wild() {
    let (tree, _) = scan("-export([oops).\nstill_here() -> ok.\n");
    let forms: Vec<NodeKind> = tree
        .children(tree.root())
        .iter()
        .map(|&c| tree.kind(c))
        .collect();
    assert!(matches!(forms[0], NodeKind::WildAttr { .. }));
    assert!(matches!(forms[1], NodeKind::Function { .. }));
}

#[test]
fn record_field_dot_does_not_end_form() {
    let (tree, _) = scan("field(R) -> R#rec.field.\nnext() -> ok.\n");
    let funcs: Vec<_> = tree.functions().collect();
    assert_eq!(funcs.len(), 2);
}

#[test]
fn string_and_comment_contents_are_inert() {
    let (tree, _) = scan(
        "% stray parens ((( and a dot.\n\
         say() -> print(\"Done. Bye).\").\n",
    );
    let funcs: Vec<_> = tree.functions().collect();
    assert_eq!(funcs.len(), 1);
    assert_eq!(funcs[0].arity(), 0);
}

#[test]
fn quoted_atom_function_name() {
    let (tree, interner) = scan("'my test'() -> ok.\n");
    let func = tree.functions().next().expect("one function");
    assert_eq!(interner.lookup(func.name()), Some("my test"));
    assert_eq!(func.arity(), 0);
}

#[test]
fn keywords_are_not_calls() {
    let (tree, interner) = scan("pick(X) -> case valid(X) of true -> X; _ -> none end.\n");
    let func = tree.functions().next().expect("one function");
    let call_names: Vec<&str> = tree
        .children(func.id())
        .iter()
        .filter_map(|&c| match tree.kind(c) {
            NodeKind::Call { name } => interner.lookup(name),
            _ => None,
        })
        .collect();
    assert_eq!(call_names, vec!["valid"]);
}

#[test]
fn unterminated_head_is_skipped() {
    let (tree, _) = scan("broken( -> ok");
    assert_eq!(tree.functions().count(), 0);
}

#[test]
fn junk_between_forms_is_skipped() {
    let (tree, _) = scan("???.\nworks() -> ok.\n");
    assert_eq!(tree.functions().count(), 1);
}

#[test]
fn empty_source() {
    let (tree, _) = scan("");
    assert_eq!(tree.children(tree.root()).len(), 0);
}

#[test]
fn node_at_offset_into_remote_call() {
    let source = "run() -> timer:sleep(10).\n";
    let (tree, interner) = scan(source);
    let offset = u32::try_from(source.find("timer").unwrap()).unwrap();
    let node = tree.node_at_offset(offset + 1).expect("a node");
    let NodeKind::ModuleRef { name } = tree.kind(node) else {
        panic!("expected module ref at offset, got {:?}", tree.kind(node));
    };
    assert_eq!(interner.lookup(name), Some("timer"));

    let func = tree.enclosing_function(node).expect("enclosing function");
    assert_eq!(interner.lookup(func.name()), Some("run"));
}

#[test]
fn scan_file_carries_path_and_module() {
    let interner = Interner::shared();
    let file = scan_file(
        "src/sample.erl".into(),
        "-module(sample).\n".to_owned(),
        &interner,
    )
    .expect("scan");
    assert_eq!(file.path().map(|p| p.display().to_string()), Some("src/sample.erl".to_owned()));
    assert_eq!(
        file.module_name().and_then(|n| interner.lookup(n)),
        Some("sample")
    );
}

#[test]
fn scanned_eunit_file_qualifies() {
    let interner = Interner::shared();
    let text = "-module(t).\n-include_lib(\"eunit/include/eunit.hrl\").\nsome_test() -> ok.\n";
    let tree = scan_source(text, &interner).expect("scan");
    let file = SourceFile::new(None, text.to_owned(), tree, interner);
    assert!(is_eunit_imported(&file));
}

#[test]
fn scanned_plain_file_does_not_qualify() {
    let interner = Interner::shared();
    let text = "-module(m).\nhelper(X) -> X.\n";
    let tree = scan_source(text, &interner).expect("scan");
    let file = SourceFile::new(None, text.to_owned(), tree, interner);
    assert!(!is_eunit_imported(&file));
}

#[test]
fn attributes_after_functions_are_seen() {
    let (tree, _) = scan("early() -> ok.\n-include_lib(\"eunit/include/eunit.hrl\").\n");
    let has_include = tree
        .children(tree.root())
        .iter()
        .any(|&c| matches!(tree.kind(c), NodeKind::IncludeAttr { .. }));
    assert!(has_include);
}

#[test]
fn oversized_source_is_rejected() {
    // Construct the error directly; a real 4 GiB allocation is pointless
    let err = ScanError::SourceTooLarge { len: usize::MAX };
    assert!(err.to_string().contains("span limit"));
}
